//! Directory-tree traversal behind a substitutable trait

mod mock;
mod real;
mod r#trait;

pub use mock::MockPathWalker;
pub use r#trait::{PathWalker, WalkAction, WalkFn};
pub use real::RealPathWalker;
