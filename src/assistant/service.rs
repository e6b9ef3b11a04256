use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, instrument};

use super::recommender::Recommender;
use super::Recommendation;
use crate::clients::{AssistantClient, MenuClient};
use crate::domain::OrderLine;

#[derive(Debug)]
pub enum AssistantRequest {
    /// Fired by the cart after every mutation. Arms (or re-arms) the
    /// debounce timer; only the last snapshot within the quiet period is
    /// actually sent to the model.
    CartChanged { lines: Vec<OrderLine> },
    /// An explicit customer question. Bypasses the debounce.
    Ask {
        query: String,
        respond_to: oneshot::Sender<Recommendation>,
    },
    /// Latest accepted recommendation, if any fetch has resolved yet.
    Current {
        respond_to: oneshot::Sender<Option<Recommendation>>,
    },
    /// A fetch task reporting back. Carries the sequence token it was
    /// issued with so stale responses can be discarded.
    Resolved {
        seq: u64,
        recommendation: Recommendation,
    },
    Shutdown,
}

/// Assistant actor. Owns the trigger policy: debounced re-recommendation on
/// cart changes, immediate fetch on explicit questions, and
/// last-writer-wins over *issue* order when responses resolve out of order.
pub struct AssistantService {
    receiver: mpsc::Receiver<AssistantRequest>,
    /// Fetch tasks report back through here.
    self_sender: mpsc::Sender<AssistantRequest>,
    recommender: Recommender,
    menu_client: MenuClient,
    quiet_period: Duration,
    cart: Vec<OrderLine>,
    latest_seq: u64,
    current: Option<Recommendation>,
}

impl AssistantService {
    pub fn new(
        buffer_size: usize,
        recommender: Recommender,
        menu_client: MenuClient,
        quiet_period: Duration,
    ) -> (Self, AssistantClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            self_sender: sender.clone(),
            recommender,
            menu_client,
            quiet_period,
            cart: Vec::new(),
            latest_seq: 0,
            current: None,
        };
        let client = AssistantClient::new(sender);
        (service, client)
    }

    #[instrument(name = "assistant_service", skip(self))]
    pub async fn run(mut self) {
        info!("AssistantService starting");

        let debounce = tokio::time::sleep(Duration::ZERO);
        tokio::pin!(debounce);
        let mut armed = false;

        loop {
            tokio::select! {
                msg = self.receiver.recv() => {
                    match msg {
                        None => break,
                        Some(AssistantRequest::CartChanged { lines }) => {
                            debug!(line_count = lines.len(), "Cart changed, rescheduling fetch");
                            self.cart = lines;
                            debounce
                                .as_mut()
                                .reset(tokio::time::Instant::now() + self.quiet_period);
                            armed = true;
                        }
                        Some(AssistantRequest::Ask { query, respond_to }) => {
                            armed = false;
                            self.spawn_fetch(Some(query), Some(respond_to));
                        }
                        Some(AssistantRequest::Current { respond_to }) => {
                            let _ = respond_to.send(self.current.clone());
                        }
                        Some(AssistantRequest::Resolved { seq, recommendation }) => {
                            if seq == self.latest_seq {
                                debug!(seq, "Recommendation updated");
                                self.current = Some(recommendation);
                            } else {
                                debug!(seq, latest = self.latest_seq, "Discarding stale recommendation");
                            }
                        }
                        Some(AssistantRequest::Shutdown) => {
                            info!("AssistantService shutting down");
                            break;
                        }
                    }
                }
                // Quiet period elapsed with no further cart changes.
                _ = &mut debounce, if armed => {
                    armed = false;
                    self.spawn_fetch(None, None);
                }
            }
        }

        info!("AssistantService stopped");
    }

    /// Issue one fetch under a fresh sequence token. The menu is read at
    /// fetch time so recommendations always reflect the live catalog.
    fn spawn_fetch(
        &mut self,
        query: Option<String>,
        respond_to: Option<oneshot::Sender<Recommendation>>,
    ) {
        self.latest_seq += 1;
        let seq = self.latest_seq;
        debug!(seq, query = ?query, "Issuing recommendation fetch");

        let recommender = self.recommender.clone();
        let menu_client = self.menu_client.clone();
        let lines = self.cart.clone();
        let results = self.self_sender.clone();

        tokio::spawn(async move {
            let recommendation = match menu_client.list_items().await {
                Ok(menu) => {
                    recommender
                        .get_recommendation(&menu, &lines, query.as_deref())
                        .await
                }
                Err(e) => {
                    error!(error = %e, "Menu lookup failed");
                    Recommendation::fallback()
                }
            };

            if let Some(respond_to) = respond_to {
                let _ = respond_to.send(recommendation.clone());
            }
            // The actor may already be gone during shutdown.
            let _ = results
                .send(AssistantRequest::Resolved { seq, recommendation })
                .await;
        });
    }
}
