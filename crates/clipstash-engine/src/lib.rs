pub mod pinned;
pub mod record;
pub mod reset;
pub mod selection;
pub mod writer;

pub use pinned::filter_pinned;
pub use record::{RecordFormatter, RecordOptions};
pub use reset::{ResetMode, ResetPolicy};
pub use selection::{Selection, resolve_selection};
pub use writer::ItemWriter;
