use std::path::PathBuf;

/// Failures surfaced at the session boundary.
///
/// Missing preconditions and cancelled dialogs are not errors; they come
/// back as [`crate::Outcome::NoOp`].
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Pipeline(#[from] anyhow::Error),
}
