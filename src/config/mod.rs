mod build;
mod choices;
mod error;

pub use build::{build_stream, load_config};
pub use choices::*;
pub use error::BuildError;
