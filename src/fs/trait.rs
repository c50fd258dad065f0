//! FileSystem trait definition

use super::FileInfo;
use crate::error::FsError;
use std::io::{self, Write};
use std::path::Path;

/// A writable handle returned by [`FileSystem::create`].
pub trait FileHandle: Write + Send {
    /// Releases the handle, reporting any error the implementation can
    /// still observe at that point.
    fn close(self: Box<Self>) -> io::Result<()>;
}

/// Syncs the file so write-back errors surface here; dropping a `File`
/// discards the result of the final `close(2)`.
impl FileHandle for std::fs::File {
    fn close(self: Box<Self>) -> io::Result<()> {
        self.sync_all()
    }
}

/// Abstraction over file system operations for testability
pub trait FileSystem: Send + Sync {
    /// Read the full contents of a file
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, FsError>;

    /// Remove a file, or a directory and everything below it
    fn remove_all(&self, path: &Path) -> Result<(), FsError>;

    /// Create (or truncate) a file and return a handle for writing to it
    fn create(&self, path: &Path) -> Result<Box<dyn FileHandle>, FsError>;

    /// Get file/directory metadata
    fn stat(&self, path: &Path) -> Result<Box<dyn FileInfo>, FsError>;

    /// Create a directory along with any missing parents
    fn mkdir_all(&self, path: &Path, mode: u32) -> Result<(), FsError>;

    /// Replace the contents of a file, returning the number of bytes written
    fn write_file(&self, path: &Path, data: &[u8], mode: u32) -> Result<usize, FsError>;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String, FsError> {
        let bytes = self.read_file(path)?;
        String::from_utf8(bytes)
            .map_err(|e| FsError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool {
        self.stat(path).is_ok()
    }
}
