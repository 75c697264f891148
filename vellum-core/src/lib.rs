pub mod bootstrap;
pub mod config;
pub mod index;
pub mod layout;
pub mod markdown;
pub mod pipeline;
pub mod site;

// Re-export main types
pub use layout::{LayoutError, LayoutRenderer};
pub use pipeline::{BuildError, SitePipeline};
pub use site::Post;
