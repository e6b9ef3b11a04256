use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::assistant::{AssistantError, AssistantRequest, Recommendation};
use crate::domain::OrderLine;

/// Client for the assistant actor.
#[derive(Clone)]
pub struct AssistantClient {
    sender: mpsc::Sender<AssistantRequest>,
}

impl AssistantClient {
    pub fn new(sender: mpsc::Sender<AssistantRequest>) -> Self {
        Self { sender }
    }

    /// Hand the assistant a fresh cart snapshot. The fetch itself happens
    /// after the quiet period, so this returns immediately.
    #[instrument(skip(self, lines), fields(line_count = lines.len()))]
    pub async fn notify_cart_changed(&self, lines: Vec<OrderLine>) -> Result<(), AssistantError> {
        debug!("Sending request");
        self.sender
            .send(AssistantRequest::CartChanged { lines })
            .await
            .map_err(|_| AssistantError::ActorCommunicationError("Actor closed".to_string()))
    }

    /// Ask a free-text question and wait for the answer. Bypasses the
    /// debounce.
    #[instrument(skip(self))]
    pub async fn ask(&self, query: impl Into<String> + std::fmt::Debug) -> Result<Recommendation, AssistantError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(AssistantRequest::Ask {
                query: query.into(),
                respond_to,
            })
            .await
            .map_err(|_| AssistantError::ActorCommunicationError("Actor closed".to_string()))?;

        response
            .await
            .map_err(|_| AssistantError::ActorCommunicationError("Actor dropped".to_string()))
    }

    /// Latest accepted recommendation, if any.
    #[instrument(skip(self))]
    pub async fn current(&self) -> Result<Option<Recommendation>, AssistantError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(AssistantRequest::Current { respond_to })
            .await
            .map_err(|_| AssistantError::ActorCommunicationError("Actor closed".to_string()))?;

        response
            .await
            .map_err(|_| AssistantError::ActorCommunicationError("Actor dropped".to_string()))
    }

    /// The assistant holds a sender to itself for fetch results, so it only
    /// stops on an explicit shutdown message.
    pub async fn shutdown(&self) -> Result<(), AssistantError> {
        self.sender
            .send(AssistantRequest::Shutdown)
            .await
            .map_err(|_| AssistantError::ActorCommunicationError("Actor closed".to_string()))
    }
}
