//! Logging Setup.
//!
//! Built on `tracing`. Two entry points install a global subscriber:
//!
//! - [`init_minimal_logging`] for early startup, before configuration is
//!   available: stderr only, filtered by `RUST_LOG` (default `info`).
//! - [`init_logging`] once a [`LoggingConfig`] has been loaded: stdout in text
//!   or JSON format, plus an optional daily-rolling log file.
//!
//! [`trace_when_debug`] emits values only when a page URL carries a truthy
//! `debug` query parameter.

use crate::config::LoggingConfig;
use crate::error::{CoreError, LoggingError};
use crate::utils;
use crate::utils::truthiness::Truthy;

use once_cell::sync::Lazy;
use std::fmt::Debug;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

const DEFAULT_LOG_FILE_NAME: &str = "utilbelt.log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Does nothing if a global subscriber is already set.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Builds a non-blocking, daily-rolling file layer and its worker guard.
///
/// The guard must be kept alive for buffered lines to be flushed.
fn create_file_layer(log_path: &Path, format: &str) -> Result<(BoxedLayer, WorkerGuard), CoreError> {
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    utils::fs::ensure_dir_exists(directory)?;

    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new(DEFAULT_LOG_FILE_NAME));
    let file_appender = tracing_appender::rolling::daily(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let layer = if format.eq_ignore_ascii_case("json") {
        fmt::layer().json().with_writer(writer).with_ansi(false).boxed()
    } else {
        fmt::layer().with_writer(writer).with_ansi(false).boxed()
    };
    Ok((layer, guard))
}

static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Replaces the stored guard only when the subscriber owning `guard` was
/// installed. Otherwise the running subscriber keeps writing through the
/// stored guard and `guard` is dropped.
fn store_worker_guard(installed: bool, guard: Option<WorkerGuard>) {
    if !installed {
        return;
    }
    match LOG_WORKER_GUARD.lock() {
        Ok(mut slot) => *slot = guard,
        Err(e) => eprintln!(
            "[ERROR] Failed to lock LOG_WORKER_GUARD to update: {}. Log flushing may be affected.",
            e
        ),
    }
}

fn parse_level(level: &str) -> Result<Level, CoreError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        invalid => Err(LoggingError::InitializationFailure(format!(
            "Invalid log level in config: {}",
            invalid
        ))
        .into()),
    }
}

/// Installs the global subscriber described by `config`.
///
/// When the new subscriber is installed, it takes over the file writer guard:
/// the previous guard is flushed and replaced, or cleared if file logging is
/// now disabled. When installation fails, the previous guard is left alone.
///
/// # Errors
///
/// - [`LoggingError::InitializationFailure`] for an invalid level, or when a
///   global subscriber is already installed and `is_reload` is `false`.
/// - [`CoreError::Filesystem`] if the log directory cannot be created.
///
/// With `is_reload` set, an already-installed subscriber is not an error: the
/// previous one stays active and a note is printed to stderr.
pub fn init_logging(config: &LoggingConfig, is_reload: bool) -> Result<(), CoreError> {
    let level = parse_level(&config.level)?.to_string();

    let stdout_filter = EnvFilter::new(&level);
    let stdout_layer: BoxedLayer = if config.format.eq_ignore_ascii_case("json") {
        fmt::layer()
            .json()
            .with_writer(stdout)
            .with_ansi(false)
            .with_filter(stdout_filter)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(stdout_filter)
            .boxed()
    };

    let mut layers: Vec<BoxedLayer> = vec![stdout_layer];
    let mut new_file_guard = None;
    if let Some(log_path) = &config.file_path {
        let (file_layer, guard) = create_file_layer(log_path, &config.format)?;
        layers.push(file_layer.with_filter(EnvFilter::new(&level)).boxed());
        new_file_guard = Some(guard);
    }

    let result = Registry::default().with(layers).try_init();
    store_worker_guard(result.is_ok(), new_file_guard);

    match result {
        Ok(()) => Ok(()),
        Err(e) if is_reload => {
            eprintln!(
                "[INFO] Re-initializing logging configuration attempted. Previous logger may persist. Error: {}",
                e
            );
            Ok(())
        }
        Err(e) => Err(LoggingError::InitializationFailure(format!(
            "Failed to set global tracing subscriber. Was it already initialized? Error: {}",
            e
        ))
        .into()),
    }
}

/// Emits each of `values` as a `debug` event when `href` has a truthy `debug`
/// query parameter (`?debug=true`, `?debug=1`, ...).
///
/// Returns whether the values were emitted.
///
/// Truthiness follows [`Truthy`]: `false`, `0` and an empty value are unset,
/// and so is a value made only of whitespace (`?debug= `). No percent-decoding
/// is applied, so `?debug=%20` is the literal text `%20` and does enable
/// tracing.
///
/// # Examples
/// ```
/// use utilbelt_core::logging::trace_when_debug;
///
/// assert!(trace_when_debug("https://app.example/orders?debug=true", &[&42, &"state"]));
/// assert!(!trace_when_debug("https://app.example/orders?debug=false", &[&42]));
/// assert!(!trace_when_debug("https://app.example/orders", &[&42]));
/// ```
pub fn trace_when_debug(href: &str, values: &[&dyn Debug]) -> bool {
    if !utils::query::get_param(href, "debug").is_truthy() {
        return false;
    }
    for value in values {
        tracing::debug!(target: "utilbelt::trace", value = ?value);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_minimal_logging_is_idempotent() {
        init_minimal_logging();
        init_minimal_logging();
        tracing::info!("Minimal logging test message");
    }

    #[test]
    fn test_create_file_layer_formats() {
        let temp_dir = TempDir::new().unwrap();
        for format in ["text", "json", "JSON"] {
            let log_path = temp_dir.path().join(format!("{}.log", format));
            let result = create_file_layer(&log_path, format);
            assert!(result.is_ok(), "create_file_layer failed for {}: {:?}", format, result.err());
        }
    }

    #[test]
    fn test_create_file_layer_creates_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("new_parent/nested.log");
        assert!(!nested.parent().unwrap().exists());

        let (_layer, _guard) = create_file_layer(&nested, "text").unwrap();
        assert!(nested.parent().unwrap().is_dir());
    }

    #[test]
    fn test_create_file_layer_parent_is_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let result = create_file_layer(&blocker.join("app.log"), "text");
        assert!(matches!(result, Err(CoreError::Filesystem { .. })));
    }

    #[test]
    fn test_init_logging_invalid_level_returns_error() {
        let config = LoggingConfig {
            level: "supertrace".to_string(),
            ..LoggingConfig::default()
        };
        match init_logging(&config, false) {
            Err(CoreError::Logging(LoggingError::InitializationFailure(msg))) => {
                assert!(msg.contains("Invalid log level in config: supertrace"));
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    // The only test touching LOG_WORKER_GUARD, which is process-wide.
    #[test]
    fn test_log_worker_guard_management() {
        init_minimal_logging();

        let temp_dir = TempDir::new().unwrap();
        let (_layer, guard) = create_file_layer(&temp_dir.path().join("guard.log"), "json").unwrap();
        store_worker_guard(true, Some(guard));
        assert!(LOG_WORKER_GUARD.lock().unwrap().is_some());

        // A subscriber is already installed, so these reloads change nothing.
        let console_only = LoggingConfig::default();
        init_logging(&console_only, true).expect("reload without file failed");
        assert!(LOG_WORKER_GUARD.lock().unwrap().is_some());

        let with_file = LoggingConfig {
            level: "debug".to_string(),
            file_path: Some(temp_dir.path().join("other.log")),
            format: "text".to_string(),
        };
        init_logging(&with_file, true).expect("reload with file failed");
        assert!(LOG_WORKER_GUARD.lock().unwrap().is_some());
        assert!(init_logging(&with_file, false).is_err());

        store_worker_guard(false, None);
        assert!(LOG_WORKER_GUARD.lock().unwrap().is_some());

        store_worker_guard(true, None);
        assert!(LOG_WORKER_GUARD.lock().unwrap().is_none());
    }

    #[test]
    fn test_trace_when_debug_gating() {
        assert!(trace_when_debug("/page?debug=true", &[&1, &"two"]));
        assert!(trace_when_debug("/page?x=1&debug=1", &[]));
        assert!(trace_when_debug("/page#debug=yes", &[&3.5]));
        assert!(!trace_when_debug("/page?debug=FALSE", &[&1]));
        assert!(!trace_when_debug("/page?debug=0", &[&1]));
        assert!(!trace_when_debug("/page?debug=", &[&1]));
        assert!(!trace_when_debug("/page?debug= ", &[&1]));
        assert!(!trace_when_debug("/page?debug=\t&x=1", &[&1]));
        assert!(trace_when_debug("/page?debug=%20", &[&1]));
        assert!(!trace_when_debug("/page", &[&1]));
    }
}
