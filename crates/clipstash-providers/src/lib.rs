pub mod error;
pub mod file;
pub mod paths;
pub mod pinned;
pub mod traits;

pub use error::{Error, Result};
pub use file::FileHistoryStore;
pub use paths::resolve_data_dir;
pub use pinned::load_pinned;
pub use traits::{HistoryStore, SetCurrentOutcome};
