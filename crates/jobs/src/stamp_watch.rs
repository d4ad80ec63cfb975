use cryptdns_application::use_cases::UpdateUpstreamUseCase;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Consumes the configuration collaborator's stream of server-stamp values.
///
/// The present value is applied once at startup, then each change pushed on
/// the channel is applied in arrival order. The job runs until the channel
/// closes or the shutdown token fires.
pub struct StampWatchJob {
    update: Arc<UpdateUpstreamUseCase>,
    updates: mpsc::Receiver<String>,
    initial: Option<String>,
    shutdown: CancellationToken,
}

impl StampWatchJob {
    pub fn new(update: Arc<UpdateUpstreamUseCase>, updates: mpsc::Receiver<String>) -> Self {
        Self {
            update,
            updates,
            initial: None,
            shutdown: CancellationToken::new(),
        }
    }

    /// Stamp value already present when the watch starts.
    pub fn with_initial_stamp(mut self, stamp: impl Into<String>) -> Self {
        self.initial = Some(stamp.into());
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(self.run())
    }

    async fn run(mut self) {
        info!("Starting server stamp watch");

        if let Some(stamp) = self.initial.take() {
            self.update.execute(&stamp).await;
        }

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("StampWatchJob: shutting down");
                    break;
                }
                stamp = self.updates.recv() => {
                    match stamp {
                        Some(stamp) => self.update.execute(&stamp).await,
                        None => {
                            info!("StampWatchJob: update channel closed");
                            break;
                        }
                    }
                }
            }
        }
    }
}
