use std::{str::FromStr, sync::Once};

use chrono::Local;
use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};

const RUST_LOG_ENV: &str = "RUST_LOG";

/// Crates chatty enough at `info` to drown the minter's own progress lines.
const NOISY_TARGETS: [&str; 3] = ["jsonrpsee", "subxt", "soketto"];

fn color_from_level(level: Level) -> ColoredString {
    match level {
        Level::Error => "ERROR".red(),
        Level::Warn => "WARN".yellow(),
        Level::Info => "INFO".green(),
        Level::Debug => "DEBUG".blue(),
        Level::Trace => "TRACE".white(),
    }
}

/// `None` if `value` is not a level name.
fn parse_log_level(value: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(value.trim()).ok()
}

fn init_logging_with_level(log_level: LevelFilter) {
    let dispatch = NOISY_TARGETS.iter().fold(
        fern::Dispatch::new()
            .format(|out, message, record| {
                let time = Local::now().format("%H:%M:%S%.3f");
                let color = color_from_level(record.level());
                out.finish(format_args!("{time} {color} > {message}"));
            })
            .level(log_level),
        |dispatch, target| dispatch.level_for(*target, log_level.min(LevelFilter::Warn)),
    );
    if let Err(e) = dispatch.chain(std::io::stdout()).apply() {
        eprintln!("Failed to initialize logging with level `{log_level}`: {e}");
        return;
    }
    log::debug!("Logging initialized with level: {log_level}");
}

static INIT: Once = Once::new();

/// Installs the logger once, at the level named by `RUST_LOG` or `info`.
pub fn init_logging() {
    INIT.call_once(|| {
        let configured = std::env::var(RUST_LOG_ENV).ok();
        let log_level = configured
            .as_deref()
            .and_then(parse_log_level)
            .unwrap_or(LevelFilter::Info);
        init_logging_with_level(log_level);
        if let Some(bad_value) = configured.filter(|v| parse_log_level(v).is_none()) {
            log::warn!("Ignoring invalid `{RUST_LOG_ENV}` value `{bad_value}`, using `{log_level}`");
        }
    });
}
