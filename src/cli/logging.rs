use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Initialize logging with the specified level
pub fn init_logging(debug: bool, quiet: bool) -> LevelFilter {
    let log_level = if debug {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    if let Err(e) = SimpleLogger::new().with_level(log_level).init() {
        eprintln!("Logger already initialized: {}", e);
        log::set_max_level(log_level);
    }

    log_level
}
