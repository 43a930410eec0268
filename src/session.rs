use image::{ImageError, ImageReader};
use std::collections::VecDeque;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::frame::Frame;
use crate::params::ProcessingParams;
use crate::pipeline::Pipeline;
use crate::preview::{self, Preview};

/// What a session operation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    /// Precondition unmet (nothing loaded, empty path, empty history)
    NoOp,
}

impl Outcome {
    pub fn is_changed(self) -> bool {
        self == Outcome::Changed
    }
}

/// Original and processed images; they only ever exist together
#[derive(Debug, Clone)]
struct LoadedImage {
    original: Frame,
    processed: Frame,
}

/// LIFO of processed-image snapshots
#[derive(Debug, Clone, Default)]
struct UndoHistory {
    snapshots: VecDeque<Frame>,
    max_depth: Option<usize>,
}

impl UndoHistory {
    fn push(&mut self, frame: Frame) {
        self.snapshots.push_back(frame);
        if let Some(max) = self.max_depth {
            while self.snapshots.len() > max {
                self.snapshots.pop_front();
            }
        }
    }

    fn pop(&mut self) -> Option<Frame> {
        self.snapshots.pop_back()
    }

    fn clear(&mut self) {
        self.snapshots.clear();
    }

    fn len(&self) -> usize {
        self.snapshots.len()
    }
}

/// State behind one editor window: the loaded image, its processed copy
/// and the undo history.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    config: EditorConfig,
    loaded: Option<LoadedImage>,
    history: UndoHistory,
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Self {
        let history = UndoHistory {
            snapshots: VecDeque::new(),
            // A cap of zero would make apply lose its own snapshot.
            max_depth: config.max_undo_depth.map(|max| max.max(1)),
        };
        Self {
            config,
            loaded: None,
            history,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn original(&self) -> Option<&Frame> {
        self.loaded.as_ref().map(|l| &l.original)
    }

    pub fn processed(&self) -> Option<&Frame> {
        self.loaded.as_ref().map(|l| &l.processed)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Number of snapshots `undo` can still restore
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Decode `path` into both slots and forget the history.
    ///
    /// On a decode failure the session keeps whatever it had before.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<Outcome, EditorError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            debug!("load skipped: no path");
            return Ok(Outcome::NoOp);
        }

        let decoded = ImageReader::open(path)
            .map_err(ImageError::IoError)
            .and_then(|reader| reader.with_guessed_format().map_err(ImageError::IoError))
            .and_then(|reader| reader.decode())
            .map_err(|source| EditorError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            path = %path.display(),
            width = decoded.width(),
            height = decoded.height(),
            "image loaded"
        );
        self.set_image(Frame::from_dynamic(decoded));
        Ok(Outcome::Changed)
    }

    /// Install an already decoded frame as if it had been loaded from disk
    pub fn set_image(&mut self, frame: Frame) {
        self.loaded = Some(LoadedImage {
            processed: frame.clone(),
            original: frame,
        });
        self.history.clear();
    }

    /// Snapshot the processed image, then run denoise → edge over it.
    pub fn apply(&mut self, params: &ProcessingParams) -> Result<Outcome, EditorError> {
        let pipeline = Pipeline::from_params(params).with_verbose(self.config.verbose);
        debug!(?params, steps = ?pipeline.step_names(), "apply");
        self.apply_pipeline(&pipeline)
    }

    /// Like [`EditorSession::apply`] with a caller-built pipeline (e.g. one
    /// with debug dumps enabled). A failing pipeline leaves the session
    /// untouched.
    pub fn apply_pipeline(&mut self, pipeline: &Pipeline) -> Result<Outcome, EditorError> {
        let Some(loaded) = self.loaded.as_mut() else {
            debug!("apply skipped: no image loaded");
            return Ok(Outcome::NoOp);
        };

        let result = pipeline.run(loaded.processed.clone())?;
        let previous = std::mem::replace(&mut loaded.processed, result);
        self.history.push(previous);

        debug!(undo_depth = self.history.len(), "apply done");
        Ok(Outcome::Changed)
    }

    pub fn undo(&mut self) -> Outcome {
        let Some(loaded) = self.loaded.as_mut() else {
            return Outcome::NoOp;
        };
        match self.history.pop() {
            Some(previous) => {
                loaded.processed = previous;
                debug!(undo_depth = self.history.len(), "undo");
                Outcome::Changed
            }
            None => {
                debug!("undo skipped: empty history");
                Outcome::NoOp
            }
        }
    }

    /// Restore the processed image from the original and forget the history
    pub fn reset(&mut self) -> Outcome {
        let Some(loaded) = self.loaded.as_mut() else {
            return Outcome::NoOp;
        };
        loaded.processed = loaded.original.clone();
        self.history.clear();
        debug!("reset");
        Outcome::Changed
    }

    /// Encode the processed image; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<Outcome, EditorError> {
        let path = path.as_ref();
        let Some(loaded) = self.loaded.as_ref() else {
            debug!("save skipped: no image loaded");
            return Ok(Outcome::NoOp);
        };
        if path.as_os_str().is_empty() {
            debug!("save skipped: no path");
            return Ok(Outcome::NoOp);
        }

        if loaded.processed.is_gradient() {
            warn!("saving a float gradient; values outside [0, 255] are clipped");
        }

        loaded
            .processed
            .to_dynamic_8bit()
            .save(path)
            .map_err(|source| EditorError::Encode {
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = %path.display(), "image saved");
        Ok(Outcome::Changed)
    }

    /// Preview buffers for both panes at the configured size
    pub fn render_preview(&self) -> Preview {
        let render = |frame: &Frame| {
            preview::render_frame(
                frame,
                self.config.preview_width,
                self.config.preview_height,
                self.config.normalize_gradient_preview,
            )
        };
        Preview {
            original: self.original().and_then(render),
            processed: self.processed().and_then(render),
        }
    }
}
