//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Instead of spinning up a full actor, [`create_mock_client`] hands back a
//! client plus the raw request receiver, so a test can inspect exactly what
//! a client sends and script the responses deterministically. The same idea
//! covers the model transport: [`ScriptedProvider`] answers per-prompt with
//! configurable delays, which is how the debounce and stale-response rules
//! are exercised without any network.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use crate::assistant::{Recommendation, RecommendationProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

/// Creates a mock client and a receiver for asserting requests.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::CreateParams,
    oneshot::Sender<Result<T::Id, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

type ScriptEntry = (String, Duration, anyhow::Result<Recommendation>);

/// A model transport with canned answers.
///
/// Each entry is keyed by a substring of the expected prompt, so concurrent
/// fetches pick up their own answer regardless of task scheduling order.
/// Prompts matching no entry get a fixed default.
pub struct ScriptedProvider {
    script: Mutex<Vec<ScriptEntry>>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn respond_ok(&self, prompt_contains: &str, delay: Duration, text: &str, item_id: Option<u32>) {
        self.script.lock().unwrap().push((
            prompt_contains.to_string(),
            delay,
            Ok(Recommendation {
                recommendation_text: text.to_string(),
                recommended_item_id: item_id,
            }),
        ));
    }

    pub fn respond_err(&self, prompt_contains: &str, delay: Duration, message: &str) {
        self.script.lock().unwrap().push((
            prompt_contains.to_string(),
            delay,
            Err(anyhow::anyhow!(message.to_string())),
        ));
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecommendationProvider for ScriptedProvider {
    async fn recommend(&self, prompt: &str) -> anyhow::Result<Recommendation> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let entry = {
            let mut script = self.script.lock().unwrap();
            script
                .iter()
                .position(|(key, _, _)| prompt.contains(key))
                .map(|i| script.remove(i))
        };

        match entry {
            Some((_, delay, result)) => {
                tokio::time::sleep(delay).await;
                result
            }
            None => Ok(Recommendation {
                recommendation_text: "Coba menu spesial kami!".to_string(),
                recommended_item_id: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MenuCategory, MenuItem, MenuItemCreate};

    #[tokio::test]
    async fn mock_client_round_trips_a_create() {
        let (client, mut receiver) = create_mock_client::<MenuItem>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(MenuItemCreate {
                    name: "Roti Bakar".to_string(),
                    price: 18_000,
                    category: MenuCategory::Food,
                    image_url: "https://example.com/roti.jpg".to_string(),
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.name, "Roti Bakar");
        responder.send(Ok(11)).unwrap();

        assert_eq!(create_task.await.unwrap(), Ok(11));
    }
}
