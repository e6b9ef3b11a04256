use std::sync::Arc;
use tracing::{error, instrument, warn};

use super::prompt::build_prompt;
use super::provider::RecommendationProvider;
use super::Recommendation;
use crate::domain::{MenuItem, OrderLine};

/// The recommendation client proper: builds the prompt, calls the provider,
/// and normalizes the result.
///
/// This type never fails. Transport, parse, and schema errors all collapse
/// into [`Recommendation::fallback`], and an item id the catalog does not
/// contain is dropped — model output is untrusted.
#[derive(Clone)]
pub struct Recommender {
    provider: Arc<dyn RecommendationProvider>,
}

impl Recommender {
    pub fn new(provider: Arc<dyn RecommendationProvider>) -> Self {
        Self { provider }
    }

    #[instrument(fields(order_lines = order.len(), query = ?query), skip(self, menu, order))]
    pub async fn get_recommendation(
        &self,
        menu: &[MenuItem],
        order: &[OrderLine],
        query: Option<&str>,
    ) -> Recommendation {
        let prompt = build_prompt(menu, order, query);

        match self.provider.recommend(&prompt).await {
            Ok(mut recommendation) => {
                if let Some(id) = recommendation.recommended_item_id {
                    if !menu.iter().any(|item| item.id == id) {
                        warn!(item_id = id, "Model recommended an unknown menu item");
                        recommendation.recommended_item_id = None;
                    }
                }
                recommendation
            }
            Err(e) => {
                error!(error = %e, "Recommendation request failed");
                Recommendation::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::FALLBACK_TEXT;
    use crate::data::seed_menu;
    use anyhow::anyhow;
    use async_trait::async_trait;

    struct FixedProvider(Result<Recommendation, String>);

    #[async_trait]
    impl RecommendationProvider for FixedProvider {
        async fn recommend(&self, _prompt: &str) -> anyhow::Result<Recommendation> {
            match &self.0 {
                Ok(rec) => Ok(rec.clone()),
                Err(msg) => Err(anyhow!(msg.clone())),
            }
        }
    }

    fn recommender(result: Result<Recommendation, String>) -> Recommender {
        Recommender::new(Arc::new(FixedProvider(result)))
    }

    #[tokio::test]
    async fn transport_failure_yields_the_fallback() {
        let rec = recommender(Err("connection refused".to_string()))
            .get_recommendation(&seed_menu(), &[], None)
            .await;
        assert_eq!(rec.recommendation_text, FALLBACK_TEXT);
        assert_eq!(rec.recommended_item_id, None);
    }

    #[tokio::test]
    async fn unknown_item_id_is_dropped() {
        let rec = recommender(Ok(Recommendation {
            recommendation_text: "Coba yang ini!".to_string(),
            recommended_item_id: Some(999),
        }))
        .get_recommendation(&seed_menu(), &[], None)
        .await;
        assert_eq!(rec.recommendation_text, "Coba yang ini!");
        assert_eq!(rec.recommended_item_id, None);
    }

    #[tokio::test]
    async fn known_item_id_is_kept() {
        let rec = recommender(Ok(Recommendation {
            recommendation_text: "Cocok banget!".to_string(),
            recommended_item_id: Some(2),
        }))
        .get_recommendation(&seed_menu(), &[], None)
        .await;
        assert_eq!(rec.recommended_item_id, Some(2));
    }
}
