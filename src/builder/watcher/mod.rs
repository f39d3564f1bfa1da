mod fs_watcher;
mod handler;

pub use fs_watcher::NotifySource;
pub use handler::MarkdownWatcher;
