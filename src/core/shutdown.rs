//! Shutdown coordination
//!
//! One coordinator per process. Signal handlers and the `quit` command both
//! go through [`ShutdownCoordinator::trigger_shutdown`]; the front-end loop
//! watches a broadcast receiver and stops at the next turn.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;

pub struct ShutdownCoordinator {
    shutdown_tx: broadcast::Sender<()>,
    shutdown_requested: Arc<AtomicBool>,
}

impl ShutdownCoordinator {
    pub fn new() -> (Self, broadcast::Receiver<()>) {
        let (shutdown_tx, shutdown_rx) = broadcast::channel(8);
        let coordinator = Self {
            shutdown_tx,
            shutdown_requested: Arc::new(AtomicBool::new(false)),
        };
        (coordinator, shutdown_rx)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    pub fn trigger_shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::Release);
        let _ = self.shutdown_tx.send(());
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::Acquire)
    }

    /// Run `future_fn` with signal handlers installed
    ///
    /// The closure receives the coordinator (for a user-initiated quit) and a
    /// receiver that fires on the first SIGINT/SIGTERM. A second signal exits
    /// the process immediately.
    pub async fn guard_with_coordinator<F, Fut, R, E>(future_fn: F) -> Result<R, E>
    where
        F: FnOnce(Self, broadcast::Receiver<()>) -> Fut,
        Fut: std::future::Future<Output = Result<R, E>>,
    {
        let (coordinator, shutdown_rx) = Self::new();
        setup_signal_handlers(
            coordinator.shutdown_tx.clone(),
            coordinator.shutdown_requested.clone(),
        );
        future_fn(coordinator, shutdown_rx).await
    }
}

fn setup_signal_handlers(shutdown_tx: broadcast::Sender<()>, shutdown_requested: Arc<AtomicBool>) {
    let signal_count = Arc::new(AtomicUsize::new(0));

    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }

        use tokio::signal::unix::{signal, SignalKind};
        for kind in [
            SignalKind::terminate(),
            SignalKind::hangup(),
            SignalKind::quit(),
        ] {
            let tx = shutdown_tx.clone();
            let requested = shutdown_requested.clone();
            let count = signal_count.clone();
            tokio::spawn(async move {
                if let Ok(mut sig) = signal(kind) {
                    while sig.recv().await.is_some() {
                        on_signal(&tx, &requested, &count);
                    }
                }
            });
        }
    }

    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            on_signal(&shutdown_tx, &shutdown_requested, &signal_count);
        }
    });
}

fn on_signal(tx: &broadcast::Sender<()>, requested: &AtomicBool, count: &AtomicUsize) {
    let previous = count.fetch_add(1, Ordering::AcqRel);
    requested.store(true, Ordering::Release);
    let _ = tx.send(());
    if previous >= 1 {
        log::warn!("Second interrupt received; exiting");
        std::process::exit(130);
    }
    log::info!("Interrupt received; shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{timeout, Duration};

    #[tokio::test]
    async fn test_trigger_reaches_every_subscriber() {
        let (coordinator, mut rx1) = ShutdownCoordinator::new();
        let mut rx2 = coordinator.subscribe();
        assert!(!coordinator.is_shutdown_requested());

        coordinator.trigger_shutdown();

        assert!(coordinator.is_shutdown_requested());
        assert!(timeout(Duration::from_millis(100), rx1.recv()).await.is_ok());
        assert!(timeout(Duration::from_millis(100), rx2.recv()).await.is_ok());
    }

    #[tokio::test]
    async fn test_guard_passes_result_through() {
        let result = ShutdownCoordinator::guard_with_coordinator(|coordinator, mut rx| async move {
            coordinator.trigger_shutdown();
            let received = rx.recv().await.is_ok();
            Ok::<bool, &str>(received && coordinator.is_shutdown_requested())
        })
        .await;

        assert_eq!(result, Ok(true));
    }
}
