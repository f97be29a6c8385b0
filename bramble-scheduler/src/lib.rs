mod executor;

use std::sync::Arc;
use std::time::Duration;

use poise::serenity_prelude as serenity;
use tracing::{error, info};

use bramble_store::Store;
use bramble_store::impls::tasks::claim_due_tasks;
use bramble_utils::time::now_unix_millis;

const TICK_INTERVAL: Duration = Duration::from_secs(15);

/// Background executor for persisted deferred actions (timed unbans,
/// reminders). Tasks live in the store document, so anything not yet due
/// survives a process restart; the first tick picks up whatever became due
/// while the process was down.
pub struct Scheduler {
    http: Arc<serenity::Http>,
    store: Store,
}

impl Scheduler {
    pub fn new(http: Arc<serenity::Http>, store: Store) -> Self {
        Self { http, store }
    }

    /// Run the tick loop until SIGTERM / Ctrl-C.
    pub async fn run(self) {
        info!("deferred-action scheduler starting");

        let mut tick = tokio::time::interval(TICK_INTERVAL);

        loop {
            tokio::select! {
                _ = shutdown_signal() => {
                    info!("shutdown signal received, stopping scheduler");
                    break;
                }

                _ = tick.tick() => {
                    let due = match claim_due_tasks(&self.store, now_unix_millis()).await {
                        Ok(due) => due,
                        Err(source) => {
                            error!(?source, "failed to claim due tasks");
                            continue;
                        }
                    };

                    for task in due {
                        executor::execute(&self.http, &task).await;
                    }
                }
            }
        }
    }
}

/// Resolves when the process receives a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let sigterm = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };
    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c  => {}
        _ = sigterm => {}
    }
}
