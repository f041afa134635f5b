//! Process-wide `tracing` setup for the CLI.
//!
//! Records go to stderr so they never interleave with the prompts or the
//! printed quote on stdout. A second sink appends to a file once
//! [`enable_file_logging`] is called.

use std::fmt;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::{FmtContext, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, reload};

/// Leads written by the `log` backend stay visible at the default level;
/// everything else is quiet unless asked for.
pub const DEFAULT_FILTER: &str = "warn,quote_submit::lead=info";

const RESET: &str = "\x1b[0m";

type SharedFile = Arc<Mutex<Option<File>>>;

struct Handles {
    filter: reload::Handle<EnvFilter, Registry>,
    file: SharedFile,
}

static HANDLES: OnceLock<Handles> = OnceLock::new();

fn handles() -> Result<&'static Handles> {
    HANDLES
        .get()
        .ok_or_else(|| anyhow!("logging not yet initialized"))
}

// ─── record format ───────────────────────────────────────────────────────────

/// `<local time> <LEVEL> <target> <fields>`, colored when the sink allows it.
struct LeadFormat;

fn level_color(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "\x1b[1;31m",
        Level::WARN => "\x1b[1;33m",
        Level::INFO => "\x1b[1;32m",
        Level::DEBUG => "\x1b[1;34m",
        Level::TRACE => "\x1b[1;35m",
    }
}

fn paint(
    writer: &mut Writer<'_>,
    color: &str,
    text: impl fmt::Display,
) -> fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "{color}{text}{RESET}")
    } else {
        write!(writer, "{text}")
    }
}

impl<S, N> FormatEvent<S, N> for LeadFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        paint(&mut writer, "\x1b[2m", Local::now().format("%Y-%m-%dT%H:%M:%S%:z"))?;
        write!(writer, " ")?;
        paint(
            &mut writer,
            level_color(meta.level()),
            format_args!("{:>5}", meta.level()),
        )?;
        write!(writer, " ")?;
        paint(&mut writer, "\x1b[36m", meta.target())?;
        write!(writer, " ")?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// ─── file sink ───────────────────────────────────────────────────────────────

/// Writer factory over a file chosen after start-up; writes are dropped
/// while no file is set.
#[derive(Clone)]
struct FileSink(SharedFile);

struct FileSinkWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for FileSinkWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match self.0.as_mut() {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.as_mut().map_or(Ok(()), File::flush)
    }
}

impl<'a> MakeWriter<'a> for FileSink {
    type Writer = FileSinkWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        // A panic while holding the lock only loses a partial record.
        FileSinkWriter(self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

fn parse_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).with_context(|| format!("invalid log level '{directives}'"))
}

// ─── public API ──────────────────────────────────────────────────────────────

/// Installs the global subscriber. Call once at startup; later calls are
/// ignored.
///
/// The starting filter is `RUST_LOG` when set, else [`DEFAULT_FILTER`].
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let (filter, filter_handle) = reload::Layer::new(filter);
    let file: SharedFile = Arc::default();

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(LeadFormat)
                .with_ansi(io::stderr().is_terminal())
                .with_writer(io::stderr),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(LeadFormat)
                .with_ansi(false)
                .with_writer(FileSink(file.clone())),
        )
        .try_init()
        .is_ok();

    if installed {
        let _ = HANDLES.set(Handles {
            filter: filter_handle,
            file,
        });
    }
}

/// Replaces the active filter. Accepts a bare level such as `debug` or any
/// `EnvFilter` directive list.
pub fn set_log_level(level: &str) -> Result<()> {
    let filter = parse_filter(level)?;
    handles()?
        .filter
        .reload(filter)
        .context("filter reload failed")
}

/// Starts appending records to `path`, replacing any open log file.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let handles = handles()?;
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    *handles.file.lock().unwrap_or_else(PoisonError::into_inner) = Some(file);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The subscriber is process-global, so everything that needs it lives in
    // one test.
    #[test]
    fn init_then_reconfigure() {
        init_logging();

        set_log_level("debug").unwrap();
        assert!(set_log_level("quote_cli=loud").is_err());

        let file = tempfile::NamedTempFile::new().unwrap();
        enable_file_logging(file.path()).unwrap();
        tracing::warn!(target: "quote_cli::test", "written to file");

        let written = std::fs::read_to_string(file.path()).unwrap();
        assert!(written.contains("written to file"), "log file was: {written}");
        assert!(written.contains("WARN quote_cli::test"), "log file was: {written}");
    }

    #[test]
    fn bad_level_is_rejected_before_install() {
        assert!(parse_filter("quote_cli=loud").is_err());
        assert!(parse_filter("info,quote_core=trace").is_ok());
    }
}
