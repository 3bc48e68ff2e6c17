pub mod collapse;
pub mod error;
pub mod forest;
pub mod image;
pub mod notifier;
pub mod pipeline;
pub mod render;
pub mod resolve;
pub mod size;
pub mod sources;

// Re-exports for easy access
pub use error::{Error, Result};
pub use forest::{Forest, NodeId};
pub use image::ImageNode;
pub use notifier::Notifier;
pub use pipeline::{render, RenderOptions};
pub use sources::DockerSource;
pub use sources::JsonSource;
pub use sources::NerdctlSource;
pub use sources::Source;
