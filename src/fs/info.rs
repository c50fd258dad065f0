use std::any::Any;
use std::ffi::OsStr;
use std::fmt;
use std::fs::Metadata;
use std::time::SystemTime;

/// Metadata about a file, as returned by `stat` and handed to walk visitors.
pub trait FileInfo: fmt::Debug + Send + Sync + 'static {
    /// Base name of the file.
    fn name(&self) -> &str;

    /// Length in bytes.
    fn len(&self) -> u64;

    /// Permission bits (unix mode). Zero where unavailable.
    fn mode(&self) -> u32;

    /// Last modification time, if known.
    fn modified(&self) -> Option<SystemTime>;

    fn is_dir(&self) -> bool;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl dyn FileInfo {
    /// Downcasts a descriptor to its concrete type, e.g. to reconfigure a
    /// [`MockFileInfo`] returned by the in-memory `stat`.
    pub fn downcast_mut<T: FileInfo>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

/// Host metadata plus the entry's base name.
#[derive(Debug, Clone)]
pub struct RealFileInfo {
    name: String,
    metadata: Metadata,
}

impl RealFileInfo {
    pub fn new(name: &OsStr, metadata: Metadata) -> Self {
        Self {
            name: name.to_string_lossy().into_owned(),
            metadata,
        }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl FileInfo for RealFileInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn len(&self) -> u64 {
        self.metadata.len()
    }

    #[cfg(unix)]
    fn mode(&self) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        self.metadata.permissions().mode()
    }

    #[cfg(not(unix))]
    fn mode(&self) -> u32 {
        0
    }

    fn modified(&self) -> Option<SystemTime> {
        self.metadata.modified().ok()
    }

    fn is_dir(&self) -> bool {
        self.metadata.is_dir()
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Stand-in descriptor used by the in-memory implementations.
///
/// Only the directory flag carries information; every other field reports a
/// zero value and should not be relied upon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockFileInfo {
    is_dir: bool,
}

impl MockFileInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_is_dir(&mut self, is_dir: bool) {
        self.is_dir = is_dir;
    }
}

impl FileInfo for MockFileInfo {
    fn name(&self) -> &str {
        ""
    }

    fn len(&self) -> u64 {
        0
    }

    fn mode(&self) -> u32 {
        0
    }

    fn modified(&self) -> Option<SystemTime> {
        None
    }

    fn is_dir(&self) -> bool {
        self.is_dir
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_info_defaults() {
        let info = MockFileInfo::new();
        assert!(!info.is_dir());
        assert_eq!(info.name(), "");
        assert_eq!(info.len(), 0);
        assert!(info.is_empty());
        assert_eq!(info.mode(), 0);
        assert!(info.modified().is_none());
    }

    #[test]
    fn test_mock_info_set_is_dir() {
        let mut info = MockFileInfo::new();
        info.set_is_dir(true);
        assert!(info.is_dir());
        info.set_is_dir(false);
        assert!(!info.is_dir());
    }

    #[test]
    fn test_downcast_boxed_mock_info() {
        let mut info: Box<dyn FileInfo> = Box::new(MockFileInfo::new());
        info.downcast_mut::<MockFileInfo>().unwrap().set_is_dir(true);
        assert!(info.is_dir());
        assert!(info.downcast_mut::<RealFileInfo>().is_none());
    }

    #[test]
    fn test_real_info_from_metadata() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, b"12345").unwrap();

        let info = RealFileInfo::new(OsStr::new("data.bin"), std::fs::metadata(&path).unwrap());
        assert_eq!(info.name(), "data.bin");
        assert_eq!(info.len(), 5);
        assert!(!info.is_dir());
        assert!(info.modified().is_some());

        let dir_info = RealFileInfo::new(OsStr::new("d"), std::fs::metadata(dir.path()).unwrap());
        assert!(dir_info.is_dir());
    }
}
