use super::{FileHandle, FileInfo, FileSystem, MockFileInfo};
use crate::error::FsError;
use bytes::BytesMut;
use std::collections::HashMap;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::trace;

type Buffer = Arc<Mutex<BytesMut>>;

/// An in-memory [`FileSystem`].
///
/// Entries live in a flat map keyed by the exact path given, without any
/// normalization or directory hierarchy. A "directory" created through
/// [`mkdir_all`](FileSystem::mkdir_all) is just an empty entry.
#[derive(Debug, Default)]
pub struct MockFileSystem {
    files: RwLock<HashMap<OsString, Buffer>>,
}

/// Write handle bound to one in-memory buffer. Closing it does nothing.
#[derive(Debug, Clone)]
pub struct MockFileHandle {
    buffer: Buffer,
}

impl Write for MockFileHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        lock(&self.buffer).extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl FileHandle for MockFileHandle {
    fn close(self: Box<Self>) -> io::Result<()> {
        Ok(())
    }
}

fn lock(buffer: &Buffer) -> std::sync::MutexGuard<'_, BytesMut> {
    buffer.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an entry exists at exactly `path`
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.read_files().contains_key(path.as_ref().as_os_str())
    }

    /// All stored paths, sorted
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.read_files().keys().map(PathBuf::from).collect();
        paths.sort();
        paths
    }

    pub fn len(&self) -> usize {
        self.read_files().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_files().is_empty()
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.write_files().clear();
    }

    fn read_files(&self) -> std::sync::RwLockReadGuard<'_, HashMap<OsString, Buffer>> {
        self.files.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_files(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<OsString, Buffer>> {
        self.files.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn buffer(&self, path: &Path) -> Option<Buffer> {
        self.read_files().get(path.as_os_str()).cloned()
    }

    fn replace(&self, path: &Path) -> Buffer {
        let buffer = Buffer::default();
        self.write_files()
            .insert(path.as_os_str().to_owned(), Arc::clone(&buffer));
        buffer
    }
}

impl FileSystem for MockFileSystem {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        trace!(path = %path.display(), "mock read_file");
        let buffer = self.buffer(path).ok_or_else(|| FsError::NotFound {
            filename: path.to_path_buf(),
        })?;
        let contents = lock(&buffer).to_vec();
        Ok(contents)
    }

    fn remove_all(&self, path: &Path) -> Result<(), FsError> {
        trace!(path = %path.display(), "mock remove_all");
        self.write_files()
            .remove(path.as_os_str())
            .map(|_| ())
            .ok_or_else(|| FsError::NotFound {
                filename: path.to_path_buf(),
            })
    }

    fn create(&self, path: &Path) -> Result<Box<dyn FileHandle>, FsError> {
        trace!(path = %path.display(), "mock create");
        let buffer = self.replace(path);
        Ok(Box::new(MockFileHandle { buffer }))
    }

    fn stat(&self, path: &Path) -> Result<Box<dyn FileInfo>, FsError> {
        trace!(path = %path.display(), "mock stat");
        if !self.contains(path) {
            return Err(FsError::NotExist {
                path: path.to_path_buf(),
            });
        }
        Ok(Box::new(MockFileInfo::new()))
    }

    fn mkdir_all(&self, path: &Path, _mode: u32) -> Result<(), FsError> {
        trace!(path = %path.display(), "mock mkdir_all");
        self.replace(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, data: &[u8], _mode: u32) -> Result<usize, FsError> {
        trace!(path = %path.display(), len = data.len(), "mock write_file");
        let buffer = self.replace(path);
        lock(&buffer).extend_from_slice(data);
        Ok(data.len())
    }
}
