//! Fire-and-forget background work.
//!
//! Jobs run on their own detached thread with no channel back to the game
//! loop: nobody joins them, nobody cancels them, and whatever goes wrong in
//! them (an error, a panic, or failing to start at all) ends up in the log
//! and nowhere else.  Only owned, immutable data may be moved into a job.
//!
//! Panics in jobs would normally go through the panic hook, which prints over
//! the game screen; [`silence_background_panics`] keeps them out of it.
use ratatui::layout::Size;
use std::any::Any;
use std::cell::Cell;
use std::panic::{self, catch_unwind, AssertUnwindSafe};
use std::thread;
use tracing::{info, warn};

thread_local! {
    static BACKGROUND: Cell<bool> = const { Cell::new(false) };
}

/// Wrap the current panic hook so that it is skipped for panics on
/// background job threads.  Those panics are logged by the job runner
/// instead.
pub(crate) fn silence_background_panics() {
    let hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if !BACKGROUND.with(Cell::get) {
            hook(info);
        }
    }));
}

/// Run `job` on a new detached thread named `name`
pub(crate) fn spawn_detached<F>(name: &str, job: F)
where
    F: FnOnce() -> anyhow::Result<()> + Send + 'static,
{
    let task = name.to_owned();
    let r = thread::Builder::new()
        .name(name.to_owned())
        .spawn(move || {
            BACKGROUND.with(|b| b.set(true));
            run_isolated(&task, job)
        });
    if let Err(e) = r {
        warn!(task = name, error = %e, "failed to spawn background task");
    }
}

/// Run `job`, logging & discarding any error or panic.  Returns whether the
/// job succeeded.
fn run_isolated<F>(task: &str, job: F) -> bool
where
    F: FnOnce() -> anyhow::Result<()>,
{
    match catch_unwind(AssertUnwindSafe(job)) {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            warn!(task, error = format!("{e:#}"), "background task failed");
            false
        }
        Err(payload) => {
            warn!(
                task,
                message = panic_message(payload.as_ref()),
                "background task panicked"
            );
            false
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "<non-string payload>"
    }
}

/// What is known about a play session at the moment it starts
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SessionSnapshot {
    /// 1 for the first session since the program started, 2 for the next,
    /// etc.
    pub(crate) number: u32,

    /// Viewport size in logical pixels
    pub(crate) viewport: Size,

    pub(crate) cell_size: u16,
}

/// The job launched whenever a play session starts
pub(crate) fn record_session_start(snapshot: SessionSnapshot) {
    info!(
        session = snapshot.number,
        width = snapshot.viewport.width,
        height = snapshot.viewport.height,
        cell_size = snapshot.cell_size,
        "Play session started"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn isolated_success() {
        assert!(run_isolated("test", || Ok(())));
    }

    #[test]
    fn isolated_error() {
        assert!(!run_isolated("test", || Err(anyhow::anyhow!("no network"))));
    }

    #[test]
    fn isolated_panic() {
        assert!(!run_isolated("test", || -> anyhow::Result<()> {
            panic!("camera exploded")
        }));
    }

    #[test]
    fn spawn_detached_runs_job() {
        let (tx, rx) = mpsc::channel();
        spawn_detached("test-job", move || {
            tx.send(thread::current().name().map(String::from))?;
            Ok(())
        });
        let name = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(name.as_deref(), Some("test-job"));
    }

    #[test]
    fn spawn_detached_failure_is_invisible() {
        let (tx, rx) = mpsc::channel();
        spawn_detached("failing-job", move || {
            tx.send(())?;
            anyhow::bail!("unreachable host")
        });
        rx.recv_timeout(Duration::from_secs(5)).unwrap();
    }

    #[test]
    fn jobs_are_marked_background() {
        assert!(!BACKGROUND.with(Cell::get));
        let (tx, rx) = mpsc::channel();
        spawn_detached("marked-job", move || {
            tx.send(BACKGROUND.with(Cell::get))?;
            Ok(())
        });
        assert!(rx.recv_timeout(Duration::from_secs(5)).unwrap());
    }

    #[test]
    fn panicking_job_still_finishes_thread() {
        let (tx, rx) = mpsc::channel::<()>();
        spawn_detached("panicking-job", move || -> anyhow::Result<()> {
            // Dropped during unwinding, which closes the channel
            let _tx = tx;
            panic!("camera exploded")
        });
        assert_eq!(
            rx.recv_timeout(Duration::from_secs(5)),
            Err(mpsc::RecvTimeoutError::Disconnected)
        );
    }

    #[test]
    fn panic_messages() {
        let payload = catch_unwind(|| panic!("static message")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "static message");
        let n = 42;
        let payload = catch_unwind(|| panic!("formatted {n}")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "formatted 42");
        let payload = catch_unwind(|| panic::panic_any(7)).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "<non-string payload>");
    }

    #[test]
    fn session_start_job() {
        let snapshot = SessionSnapshot {
            number: 1,
            viewport: Size::new(800, 600),
            cell_size: 20,
        };
        assert!(run_isolated("session-start", move || {
            record_session_start(snapshot);
            Ok(())
        }));
    }
}
