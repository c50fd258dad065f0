use super::{FileHandle, FileInfo, FileSystem, RealFileInfo};
use crate::error::FsError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// A [`FileSystem`] backed by the host operating system.
///
/// Every call forwards to the matching `std::fs` primitive and returns its
/// error untouched.
#[derive(Debug, Clone, Copy)]
pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, FsError> {
        debug!(path = %path.display(), "read_file");
        Ok(fs::read(path)?)
    }

    fn remove_all(&self, path: &Path) -> Result<(), FsError> {
        debug!(path = %path.display(), "remove_all");
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        if meta.is_dir() {
            fs::remove_dir_all(path)?;
        } else {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn create(&self, path: &Path) -> Result<Box<dyn FileHandle>, FsError> {
        debug!(path = %path.display(), "create");
        let file = fs::File::create(path)?;
        Ok(Box::new(file))
    }

    fn stat(&self, path: &Path) -> Result<Box<dyn FileInfo>, FsError> {
        debug!(path = %path.display(), "stat");
        let meta = fs::metadata(path)?;
        // no final component (`/`, `foo/..`): the whole path stands in as the name
        let name = path.file_name().unwrap_or_else(|| path.as_os_str());
        Ok(Box::new(RealFileInfo::new(name, meta)))
    }

    fn mkdir_all(&self, path: &Path, mode: u32) -> Result<(), FsError> {
        debug!(path = %path.display(), mode, "mkdir_all");
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(mode);
        }
        builder.create(path)?;
        Ok(())
    }

    fn write_file(&self, path: &Path, data: &[u8], mode: u32) -> Result<usize, FsError> {
        debug!(path = %path.display(), len = data.len(), "write_file");
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(mode);
        }
        let mut file = options.open(path)?;
        file.write_all(data)?;
        Ok(data.len())
    }
}
