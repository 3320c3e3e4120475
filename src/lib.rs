pub mod app;
pub mod args;
pub mod catalog;
pub mod colors;
pub mod commands;
pub mod entry;
pub mod filter;
pub mod ui;
pub mod utils;
pub mod view;

pub use app::{App, InputMode};
pub use args::Args;
pub use catalog::FileCatalog;
pub use commands::{Ack, Command, DispatchError, UploadItem};
pub use entry::{EntryId, EntryKind, FileEntry, MediaType};
pub use filter::{SortKey, visible};
pub use view::{Scope, ViewMode, ViewState};
