use crate::error::FsError;
use crate::fs::FileInfo;
use std::path::Path;

/// What a walk visitor wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkAction {
    #[default]
    Continue,
    /// Do not descend into the directory just visited. When returned for a
    /// file, the remaining entries of its parent directory are skipped.
    SkipDir,
    /// End the walk without an error.
    Stop,
}

/// Visitor called once per entry with the entry's path, its metadata (absent
/// when it could not be read) and the error encountered while reading it.
///
/// Returning `Err` aborts the walk and the error is returned from
/// [`PathWalker::walk`].
pub type WalkFn<'a> =
    dyn FnMut(&Path, Option<&dyn FileInfo>, Option<FsError>) -> Result<WalkAction, FsError> + 'a;

/// Abstraction over recursive directory traversal
pub trait PathWalker: Send + Sync {
    /// Walk the tree rooted at `root`, calling `visit` for each file or
    /// directory, including `root` itself.
    fn walk(&self, root: &Path, visit: &mut WalkFn<'_>) -> Result<(), FsError>;
}
