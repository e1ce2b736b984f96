use crate::autoderiv::ad_errors::ADError;
use chrono::Local;
use simplelog::*;
use std::fs::File;

/// Installs the global logger: a terminal logger and, if `log_to_file` is set, a copy of the
/// log in log_<date_and_time>.txt. `loglevel` is one of debug, info, warn, error, off/none
/// (None means info).
/// Returns Ok(false) if logging is off or a logger was already installed.
pub fn init_logger(loglevel: Option<&str>, log_to_file: bool) -> Result<bool, ADError> {
    let log_option = match loglevel {
        Some("off") | Some("none") => return Ok(false),
        Some("debug") => LevelFilter::Debug,
        Some("info") | None => LevelFilter::Info,
        Some("warn") => LevelFilter::Warn,
        Some("error") => LevelFilter::Error,
        Some(other) => {
            return Err(ADError::ConfigError(format!(
                "loglevel must be debug, info, warn or error, got {}",
                other
            )));
        }
    };
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if log_to_file {
        let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
        let name = format!("log_{}.txt", date_and_time);
        let file = File::create(&name)
            .map_err(|e| ADError::ConfigError(format!("cannot create {}: {}", name, e)))?;
        loggers.push(WriteLogger::new(log_option, Config::default(), file));
    }
    match CombinedLogger::init(loggers) {
        Ok(()) => {
            log::info!("logger initialized with level {}", log_option);
            Ok(true)
        }
        Err(_) => Ok(false),
    }
}
