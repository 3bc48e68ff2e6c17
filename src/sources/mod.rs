//! Where the flat image list comes from.
//!
//! - [`DockerSource`] / [`NerdctlSource`] query a local engine through its CLI.
//! - [`JsonSource`] reads a pre-serialized array from a file or stdin.

mod docker;
mod engine;
mod json;
mod nerdctl;
mod source;

pub use docker::DockerSource;
pub use json::{parse_images, JsonInput, JsonSource};
pub use nerdctl::NerdctlSource;
pub use source::Source;
