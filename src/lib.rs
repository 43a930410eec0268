pub mod config;
pub mod error;
pub mod frame;
pub mod kernels;
pub mod params;
pub mod pipeline;
pub mod preview;
pub mod processing;
pub mod session;

pub use config::EditorConfig;
pub use error::EditorError;
pub use frame::{Frame, GradientImage};
pub use params::{EdgeKind, FilterKind, ProcessingParams};
pub use pipeline::{DebugConfig, Pipeline, PipelineContext, PipelineStep};
pub use preview::Preview;
pub use session::{EditorSession, Outcome};

#[cfg(feature = "gui")]
pub mod gui;
