use std::io::Error;

/// Pull-based source of numeric samples.
///
/// Implementations may represent finite series or bounded generators.
pub trait SampleStream {
    /// Indicates whether the stream *may* produce more samples.
    ///
    /// This call should be cheap and side effect free. If it returns `false`,
    /// a subsequent call to [`next_sample`](Self::next_sample) must return `None`.
    fn has_more_samples(&self) -> bool;

    /// Produces the next sample, or `None` if the stream is exhausted.
    fn next_sample(&mut self) -> Option<f64>;

    /// Resets the stream to its initial state.
    ///
    /// Generators re-seed their RNG so the same sequence is replayed.
    fn restart(&mut self) -> Result<(), Error>;
}
