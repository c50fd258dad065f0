//! syskit - substitutable filesystem access for unit-testable code
//!
//! Code that touches the disk takes a [`FileSystem`] (and, when it walks
//! directory trees, a [`PathWalker`]) instead of calling `std::fs` directly.
//! Production wiring passes [`RealFileSystem`] and [`RealPathWalker`]; tests
//! pass the in-memory [`MockFileSystem`] and [`MockPathWalker`].
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use syskit::{FileSystem, FsError, MockFileSystem};
//!
//! fn load_greeting(fs: &dyn FileSystem) -> Result<String, FsError> {
//!     fs.read_to_string(Path::new("greeting.txt"))
//! }
//!
//! let fs = MockFileSystem::new();
//! assert!(load_greeting(&fs).unwrap_err().is_not_found());
//!
//! fs.write_file(Path::new("greeting.txt"), b"hello", 0o644).unwrap();
//! assert_eq!(load_greeting(&fs).unwrap(), "hello");
//! ```
//!
//! # Project Structure
//!
//! - [`fs`]: the filesystem trait, host adapter and in-memory fake
//! - [`walk`]: directory traversal trait, host walker and single-visit stub
//! - [`error`]: the shared error type
//! - [`util`]: logging setup

pub mod error;
pub mod fs;
pub mod util;
pub mod walk;

pub use error::FsError;
pub use fs::{
    FileHandle, FileInfo, FileSystem, MockFileHandle, MockFileInfo, MockFileSystem, RealFileInfo,
    RealFileSystem,
};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};
pub use walk::{MockPathWalker, PathWalker, RealPathWalker, WalkAction, WalkFn};

