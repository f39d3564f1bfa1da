mod build;
mod watch;

pub use build::handle_build_command;
pub use watch::handle_watch_command;
