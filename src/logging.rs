//! Log output for the binary. The library only emits `tracing` events.

use std::error::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

/// Install a formatting subscriber, WARN and above unless told otherwise
#[inline]
pub fn init_logger(level: Option<LevelFilter>) -> Result<(), Box<dyn Error + Send + Sync>> {
    init_logger_with_customization(|builder| builder.with_max_level(level.unwrap_or(LevelFilter::WARN)))
}

pub fn init_logger_with_customization(
    f: impl FnOnce(SubscriberBuilder) -> SubscriberBuilder,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    f(tracing_subscriber::fmt().with_line_number(true).with_target(false)).try_init()
}
