//! Writes the search statistics as `{PREFIX} {NAME}={VALUE}` lines, optionally followed by a
//! closing line, to a writer which is configured once per process.

use std::fmt::Display;
use std::io::stdout;
use std::io::Write;
use std::sync::OnceLock;
use std::sync::RwLock;

use convert_case::Case;
use convert_case::Casing;
use log::debug;

/// Where and how statistics are written; see [`configure_statistic_logging`].
pub struct StatisticOptions {
    prefix: &'static str,
    postfix: Option<&'static str>,
    casing: Option<Case>,
    writer: Box<dyn Write + Send + Sync>,
}

impl StatisticOptions {
    /// Writes every statistic to stdout as `{prefix} {name}={value}`.
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            postfix: None,
            casing: None,
            writer: Box::new(stdout()),
        }
    }

    /// The line written by [`log_statistic_postfix`] after a block of statistics.
    pub fn with_postfix(mut self, postfix: &'static str) -> Self {
        self.postfix = Some(postfix);
        self
    }

    /// Converts the field names of the statistics to `casing`.
    pub fn with_casing(mut self, casing: Case) -> Self {
        self.casing = Some(casing);
        self
    }

    pub fn with_writer(mut self, writer: impl Write + Send + Sync + 'static) -> Self {
        self.writer = Box::new(writer);
        self
    }

    fn write_line(&mut self, line: impl Display) {
        if let Err(e) = writeln!(self.writer, "{line}") {
            debug!("Could not write statistic: {e}");
        }
    }
}

impl std::fmt::Debug for StatisticOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticOptions")
            .field("prefix", &self.prefix)
            .field("postfix", &self.postfix)
            .field("casing", &self.casing)
            .finish_non_exhaustive()
    }
}

static STATISTIC_OPTIONS: OnceLock<RwLock<StatisticOptions>> = OnceLock::new();

/// Enables the logging of statistics with the provided options.
///
/// Only the first configuration takes effect; returns whether `options` were installed.
pub fn configure_statistic_logging(options: StatisticOptions) -> bool {
    STATISTIC_OPTIONS.set(RwLock::new(options)).is_ok()
}

/// Returns whether statistics are written, i.e. whether [`configure_statistic_logging`] has been
/// called.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}

fn with_options(action: impl FnOnce(&mut StatisticOptions)) {
    if let Some(lock) = STATISTIC_OPTIONS.get() {
        if let Ok(mut options) = lock.write() {
            action(&mut *options);
        }
    }
}

/// Writes the statistic `name` with `value`.
pub fn log_statistic(name: impl Display, value: impl Display) {
    with_options(|options| {
        let name = match options.casing {
            Some(casing) => name.to_string().to_case(casing),
            None => name.to_string(),
        };
        let prefix = options.prefix;
        options.write_line(format_args!("{prefix} {name}={value}"));
    });
}

/// Writes the closing line of a block of statistics, if one is configured.
pub fn log_statistic_postfix() {
    with_options(|options| {
        if let Some(postfix) = options.postfix {
            options.write_line(postfix);
        }
    });
}
