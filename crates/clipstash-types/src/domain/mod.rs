pub mod content;
pub mod id;
pub mod locator;
pub mod pinned;

pub use content::*;
pub use id::*;
pub use locator::*;
pub use pinned::*;
