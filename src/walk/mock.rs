use super::{PathWalker, WalkFn};
use crate::error::FsError;
use crate::fs::{MockFileInfo, MockFileSystem};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::trace;

/// A [`PathWalker`] stub that never traverses anything.
///
/// Each call to [`walk`](PathWalker::walk) invokes the visitor exactly once
/// with the root path, a [`MockFileInfo`] and no error, and records that the
/// walk happened. The walker owns a [`MockFileSystem`] so tests can share one
/// fake between code that walks and code that reads or writes files.
#[derive(Debug, Default)]
pub struct MockPathWalker {
    fs: MockFileSystem,
    root_info: MockFileInfo,
    walks: AtomicUsize,
}

impl MockPathWalker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `fs` as the owned in-memory filesystem
    pub fn with_fs(fs: MockFileSystem) -> Self {
        Self {
            fs,
            ..Self::default()
        }
    }

    /// Make the visited root report itself as a directory
    pub fn with_root_is_dir(mut self, is_dir: bool) -> Self {
        self.root_info.set_is_dir(is_dir);
        self
    }

    pub fn fs(&self) -> &MockFileSystem {
        &self.fs
    }

    /// Whether `walk` has been called at least once
    pub fn walk_invoked(&self) -> bool {
        self.walk_count() > 0
    }

    pub fn walk_count(&self) -> usize {
        self.walks.load(Ordering::SeqCst)
    }
}

impl PathWalker for MockPathWalker {
    fn walk(&self, root: &Path, visit: &mut WalkFn<'_>) -> Result<(), FsError> {
        trace!(root = %root.display(), "mock walk");
        self.walks.fetch_add(1, Ordering::SeqCst);
        let info = self.root_info.clone();
        visit(root, Some(&info), None)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::FileSystem;
    use crate::walk::WalkAction;
    use std::path::PathBuf;

    #[test]
    fn test_walk_visits_root_once() {
        let walker = MockPathWalker::new();
        assert!(!walker.walk_invoked());

        let mut visits = Vec::new();
        walker
            .walk(Path::new("/some/root"), &mut |path, info, err| {
                assert!(err.is_none());
                visits.push((path.to_path_buf(), info.unwrap().is_dir()));
                Ok(WalkAction::Continue)
            })
            .unwrap();

        assert_eq!(visits, vec![(PathBuf::from("/some/root"), false)]);
        assert!(walker.walk_invoked());
        assert_eq!(walker.walk_count(), 1);
    }

    #[test]
    fn test_walk_ignores_skip_and_stop() {
        let walker = MockPathWalker::new();

        for action in [WalkAction::SkipDir, WalkAction::Stop] {
            let mut calls = 0;
            walker
                .walk(Path::new("root"), &mut |_path, _info, _err| {
                    calls += 1;
                    Ok(action)
                })
                .unwrap();
            assert_eq!(calls, 1);
        }
        assert_eq!(walker.walk_count(), 2);
    }

    #[test]
    fn test_walk_returns_visitor_error() {
        let walker = MockPathWalker::new();

        let err = walker
            .walk(Path::new("root"), &mut |path, _info, _err| {
                Err(FsError::NotExist {
                    path: path.to_path_buf(),
                })
            })
            .unwrap_err();

        assert!(matches!(err, FsError::NotExist { .. }));
        assert!(walker.walk_invoked());
    }

    #[test]
    fn test_root_is_dir() {
        let walker = MockPathWalker::new().with_root_is_dir(true);
        let mut saw_dir = false;

        walker
            .walk(Path::new("root"), &mut |_path, info, _err| {
                saw_dir = info.unwrap().is_dir();
                Ok(WalkAction::Continue)
            })
            .unwrap();

        assert!(saw_dir);
    }

    #[test]
    fn test_owned_fs() {
        let fs = MockFileSystem::new();
        fs.write_file(Path::new("seed.txt"), b"seed", 0o644).unwrap();

        let walker = MockPathWalker::with_fs(fs);
        walker
            .fs()
            .write_file(Path::new("more.txt"), b"more", 0o644)
            .unwrap();

        assert_eq!(walker.fs().read_file(Path::new("seed.txt")).unwrap(), b"seed");
        assert_eq!(walker.fs().len(), 2);
    }
}
