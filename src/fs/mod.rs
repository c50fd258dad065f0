//! FileSystem abstraction for testable file operations

mod info;
mod mock;
mod real;
mod r#trait;

pub use info::{FileInfo, MockFileInfo, RealFileInfo};
pub use mock::{MockFileHandle, MockFileSystem};
pub use r#trait::{FileHandle, FileSystem};
pub use real::RealFileSystem;
