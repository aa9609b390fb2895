//! Tracing wiring for binaries that embed the engine. The library itself
//! only emits events; subscriber ownership stays with the caller, which
//! receives the file-appender guard and must hold it for the process
//! lifetime.

use std::panic;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;

/// ログ出力先（`CVFIT_LOG_DIR` から解決）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogTarget {
    dir: Option<PathBuf>,
}

impl LogTarget {
    /// `CVFIT_LOG_DIR` selects a daily-rotated `cvfit.log` under that
    /// directory; unset means stdout.
    pub fn from_env() -> Self {
        Self {
            dir: std::env::var_os("CVFIT_LOG_DIR").map(PathBuf::from),
        }
    }

    pub fn stdout() -> Self {
        Self { dir: None }
    }

    pub fn file(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }
}

/// Install the global subscriber for `target`. Returns the appender guard
/// when logging to a file; dropping it stops the background writer, so the
/// caller keeps it for the process lifetime. Installing twice leaves the
/// first subscriber in place. `RUST_LOG` filters when present, defaulting
/// to `info`.
pub fn init(target: &LogTarget) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match file_writer(target) {
        Some((writer, guard)) => {
            let _ = builder.with_writer(writer).try_init();
            Some(guard)
        }
        None => {
            let _ = builder.try_init();
            None
        }
    }
}

fn file_writer(target: &LogTarget) -> Option<(NonBlocking, WorkerGuard)> {
    let dir = target.dir()?;
    if let Err(err) = std::fs::create_dir_all(dir) {
        // No subscriber exists yet at this point.
        eprintln!(
            "cvfit: cannot create log dir {}: {err}; logging to stdout",
            dir.display()
        );
        return None;
    }
    let appender = tracing_appender::rolling::daily(dir, "cvfit.log");
    Some(tracing_appender::non_blocking(appender))
}

/// Mirror panics into the log stream with their location before handing
/// off to the previously installed hook. Repeat installs are no-ops.
pub fn log_panics() {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let payload = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_default();
            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()));

            tracing::error!(
                location = location.as_deref().unwrap_or("unknown"),
                payload = %payload,
                "panic"
            );

            previous(info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdout_target_needs_no_guard() {
        assert!(init(&LogTarget::stdout()).is_none());
        tracing::debug!("subscriber smoke event");
        // A second init keeps the first subscriber instead of panicking.
        assert!(init(&LogTarget::stdout()).is_none());
    }

    #[test]
    fn file_target_hands_back_the_writer_guard() {
        let dir = std::env::temp_dir().join("cvfit-logging-test");
        let guard = init(&LogTarget::file(&dir));
        assert!(guard.is_some());
        assert!(dir.is_dir());
    }

    #[test]
    fn env_resolution_falls_back_to_stdout() {
        std::env::remove_var("CVFIT_LOG_DIR");
        assert_eq!(LogTarget::from_env(), LogTarget::stdout());

        std::env::set_var("CVFIT_LOG_DIR", "/tmp/cvfit-logs");
        assert_eq!(
            LogTarget::from_env().dir(),
            Some(Path::new("/tmp/cvfit-logs"))
        );
        std::env::remove_var("CVFIT_LOG_DIR");
    }

    #[test]
    fn panic_hook_installs_once() {
        log_panics();
        log_panics();
    }
}
