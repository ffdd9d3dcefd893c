use std::env as stdenv;
use std::io::Write;
use std::path::Path;

use chrono::Local;
use colored::Colorize;
use env_logger::{Builder, Env};
use log::debug;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Installs the process logger: `info` unless `RUST_LOG` says otherwise.
///
/// Lines look like `src/client.rs:72 [app_0.3.0 20250101 12:00:00] INFO: ..`;
/// with `RUST_LOG=trace` the bracketed tag is dropped. Calling it twice is a
/// no-op.
pub fn setup_logger() {
    let this_script_name = Path::new(&stdenv::args().next().unwrap_or_default())
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_owned();
    let short = matches!(stdenv::var("RUST_LOG"), Ok(val) if val.to_lowercase() == "trace");
    let tag = format!("{}_{}", this_script_name, VERSION);

    let result = Builder::from_env(Env::default().default_filter_or("info"))
        .format(move |buf, record| {
            let level = match record.level() {
                log::Level::Error => format!("{}", record.level()).red(),
                log::Level::Warn => format!(" {}", record.level()).yellow(),
                log::Level::Info => format!(" {}", record.level()).green(),
                log::Level::Debug => format!("{}", record.level()).blue(),
                log::Level::Trace => format!("{}", record.level()).purple(),
            };
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);

            if short {
                writeln!(buf, "{}:{} {}: {}", file, line, level, record.args())
            } else {
                writeln!(
                    buf,
                    "{}:{} [{} {}]{}: {}",
                    file,
                    line,
                    tag.dimmed().purple(),
                    Local::now().format("%Y%m%d %H:%M:%S").to_string().purple(),
                    level,
                    record.args()
                )
            }
        })
        .try_init();
    if result.is_ok() {
        debug!("Logger initialized, Stripe API version {}", crate::client::API_VERSION);
    }
}
