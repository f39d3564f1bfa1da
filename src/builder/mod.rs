pub mod page;
pub mod site;
pub mod watcher;

pub use site::build_site;
pub use watcher::{MarkdownWatcher, NotifySource};
