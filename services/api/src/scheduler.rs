use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::info;

/// Periodic demand-trend analysis pass.
///
/// Owned by the server composition root: constructed with `start`, torn
/// down with `shutdown` once the listener stops. Today the pass only
/// emits a trace event; it is the hook where historical booking data
/// would be re-aggregated.
pub(crate) struct DemandAnalysisScheduler {
    handle: JoinHandle<()>,
    shutdown: watch::Sender<bool>,
}

impl DemandAnalysisScheduler {
    pub(crate) fn start(period: Duration) -> Self {
        let (shutdown, mut signal) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // interval fires immediately; swallow the startup tick.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        info!("background demand analysis pass complete; trends refreshed");
                    }
                    changed = signal.changed() => {
                        if changed.is_err() || *signal.borrow() {
                            break;
                        }
                    }
                }
            }
        });

        Self { handle, shutdown }
    }

    pub(crate) async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        let _ = self.handle.await;
    }
}
