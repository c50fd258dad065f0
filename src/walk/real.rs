use super::{PathWalker, WalkAction, WalkFn};
use crate::error::FsError;
use crate::fs::RealFileInfo;
use std::io;
use std::path::Path;
use tracing::{debug, trace};
use walkdir::WalkDir;

/// A [`PathWalker`] that traverses the host filesystem.
///
/// Entries are visited pre-order in lexical order, starting with the root.
/// Symbolic links are reported but not followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealPathWalker;

impl RealPathWalker {
    pub fn new() -> Self {
        Self
    }
}

impl PathWalker for RealPathWalker {
    fn walk(&self, root: &Path, visit: &mut WalkFn<'_>) -> Result<(), FsError> {
        debug!(root = %root.display(), "walk");
        let mut entries = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        while let Some(next) = entries.next() {
            let action = match next {
                Ok(entry) => match entry.metadata() {
                    Ok(meta) => {
                        let info = RealFileInfo::new(entry.file_name(), meta);
                        visit(entry.path(), Some(&info), None)?
                    }
                    Err(err) => {
                        let err = FsError::Io(io::Error::from(err));
                        visit(entry.path(), None, Some(err))?
                    }
                },
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.to_path_buf());
                    trace!(path = %path.display(), error = %err, "walk entry failed");
                    let err = FsError::Io(io::Error::from(err));
                    visit(&path, None, Some(err))?
                }
            };

            match action {
                WalkAction::Continue => {}
                WalkAction::SkipDir => entries.skip_current_dir(),
                WalkAction::Stop => break,
            }
        }

        Ok(())
    }
}
