use anyhow::Context;
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// Send log messages to `file`, filtered by `$RUST_LOG` or, if that's not
/// set, by `level`.  If `file` is `None`, logging stays disabled, as the
/// terminal is occupied by the game.
pub(crate) fn init(file: Option<&Path>, level: &str) -> anyhow::Result<()> {
    let Some(path) = file else {
        return Ok(());
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level {level:?}"))?;
    let fp = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("failed to open log file")?;
    tracing::subscriber::set_global_default(subscriber(fp, filter))
        .context("failed to install logger")?;
    Ok(())
}

fn subscriber<W>(writer: W, filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static
where
    W: std::io::Write + Send + 'static,
{
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(writer))
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, info, warn};

    fn capture<F: FnOnce()>(level: &str, f: F) -> String {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let fp = tmp.reopen().unwrap();
        tracing::subscriber::with_default(subscriber(fp, EnvFilter::new(level)), f);
        fs_err::read_to_string(tmp.path()).unwrap()
    }

    #[test]
    fn writes_plain_text() {
        let log = capture("info", || info!(score = 3, "Snake died"));
        assert!(log.contains("INFO"), "{log}");
        assert!(log.contains("Snake died score=3"), "{log}");
        assert!(!log.contains('\x1B'), "{log}");
    }

    #[test]
    fn filters_by_level() {
        let log = capture("warn", || {
            debug!("quiet");
            info!("also quiet");
            warn!("loud");
        });
        assert!(!log.contains("quiet"), "{log}");
        assert!(log.contains("loud"), "{log}");
    }

    #[test]
    fn no_file_is_a_no_op() {
        init(None, "not a valid [filter").unwrap();
    }
}
