/// Preview pane size used when nothing else is configured
pub const DEFAULT_PREVIEW_SIZE: (u32, u32) = (400, 300);

/// Knobs of an editor session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub preview_width: u32,
    pub preview_height: u32,
    /// `None` keeps every snapshot; `Some(n)` drops the oldest beyond `n`
    pub max_undo_depth: Option<usize>,
    /// Stretch float gradients to the full 8-bit range in previews.
    /// Saved files and session data are not affected.
    pub normalize_gradient_preview: bool,
    /// Log every pipeline step at info level
    pub verbose: bool,
}

impl EditorConfig {
    pub fn with_max_undo_depth(mut self, depth: Option<usize>) -> Self {
        self.max_undo_depth = depth;
        self
    }

    pub fn with_normalized_gradient_preview(mut self, normalize: bool) -> Self {
        self.normalize_gradient_preview = normalize;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            preview_width: DEFAULT_PREVIEW_SIZE.0,
            preview_height: DEFAULT_PREVIEW_SIZE.1,
            max_undo_depth: None,
            normalize_gradient_preview: false,
            verbose: false,
        }
    }
}
