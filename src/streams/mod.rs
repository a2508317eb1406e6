pub mod generators;
mod stream;
mod vec_stream;

pub use stream::SampleStream;
pub use vec_stream::VecSampleStream;
