use std::path::PathBuf;

use crate::{EdgeKind, FilterKind};

#[derive(Debug, Clone)]
pub enum Message {
    LoadPressed,
    /// `None` when the dialog was cancelled
    LoadPicked(Option<PathBuf>),
    SavePressed,
    SavePicked(Option<PathBuf>),
    ResetPressed,
    UndoPressed,
    ApplyPressed,
    FilterSelected(FilterKind),
    EdgeSelected(EdgeKind),
    KernelSizeChanged(u32),
    CannyLowChanged(u8),
    CannyHighChanged(u8),
}
