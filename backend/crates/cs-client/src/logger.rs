use std::time::SystemTime;

use fern::Dispatch;
use log::LevelFilter;

/// Logs go to stderr; stdout carries only command output.
pub(crate) fn initialize(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} - {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}
