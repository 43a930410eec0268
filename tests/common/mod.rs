#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from edgelab for tests
pub use edgelab::{
    EdgeKind, EditorConfig, EditorError, EditorSession, FilterKind, Frame, Outcome, Pipeline,
    ProcessingParams,
};
