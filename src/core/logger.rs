use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use once_cell::sync::Lazy;
use log::{
    LevelFilter,
    Metadata,
    Record
};

use crate::core::Result;

static MY_LOGGER: Lazy<MyLogger> = Lazy::new(|| MyLogger {
    file: Mutex::new(None),
});

struct MyLogger {
    file: Mutex<Option<File>>,
}

impl log::Log for MyLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{}] {}",
            record.target(),
            record.level(),
            record.args()
        );

        let Ok(mut file) = self.file.lock() else {
            return;
        };
        match file.as_mut() {
            Some(f) => _ = writeln!(f, "{}", line),
            None => println!("{}", line),
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            if let Some(f) = file.as_mut() {
                _ = f.flush();
            }
        }
        _ = io::stdout().flush();
    }
}

/// Installs the logger, writing to `file` when given or to stdout otherwise.
/// Calling it again swaps the output and the level.
pub fn setup(level: LevelFilter, file: Option<&str>) -> Result<()> {
    let output = match file {
        Some(path) => Some(OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?),
        None => None,
    };

    if let Ok(mut guard) = MY_LOGGER.file.lock() {
        *guard = output;
    }

    _ = log::set_logger(&*MY_LOGGER);
    log::set_max_level(level);
    Ok(())
}

/// Routes log lines back to stdout, closing any log file.
pub fn revert_console_output() {
    if let Ok(mut guard) = MY_LOGGER.file.lock() {
        *guard = None;
    }
}

pub fn teardown() {
    log::logger().flush();
    revert_console_output();
    log::set_max_level(LevelFilter::Off);
}
