use std::env;

use chrono::Local;
use log::LevelFilter;

pub fn level_from_str(level: Option<&str>) -> LevelFilter {
    match level {
        Some("trace") => LevelFilter::Trace,
        Some("debug") => LevelFilter::Debug,
        Some("info") => LevelFilter::Info,
        Some("warn") => LevelFilter::Warn,
        Some("error") => LevelFilter::Error,
        _ => LevelFilter::Warn, // Unset or unrecognized
    }
}

pub fn setup_logging() -> Result<(), fern::InitError> {
    let level = level_from_str(env::var("LOG_LEVEL").ok().as_deref());

    // Rendered objects go to stdout, so logs stay on stderr
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}: {}",
                Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}
