use crate::domain::ports::CategoryAdvisor;
use crate::domain::taxonomy::WorkerCategory;
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct SuggestionRequest<'a> {
    symptoms: &'a str,
}

#[derive(Debug, Deserialize)]
struct SuggestionResponse {
    category: String,
}

/// Asks a remote helper service for a category. The service receives
/// `{"symptoms": "..."}` and answers `{"category": "<label>"}`.
#[derive(Debug, Clone)]
pub struct HttpCategoryAdvisor {
    client: Client,
    endpoint: String,
}

impl HttpCategoryAdvisor {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl CategoryAdvisor for HttpCategoryAdvisor {
    async fn suggest(&self, symptoms: &str) -> Result<String> {
        tracing::debug!("Asking helper at {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&SuggestionRequest { symptoms })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::AdvisorError {
                message: format!("helper responded with status {}", status),
            });
        }

        let body: SuggestionResponse = response.json().await?;
        tracing::debug!("Helper answered {:?}", body.category);
        Ok(body.category)
    }
}

/// Offline fallback: picks the category whose keywords appear most often in
/// the description.
#[derive(Debug, Clone, Default)]
pub struct KeywordAdvisor;

impl KeywordAdvisor {
    fn keywords(category: WorkerCategory) -> &'static [&'static str] {
        match category {
            WorkerCategory::Plumber => &["leak", "pipe", "tap", "drain", "toilet", "water", "clog"],
            WorkerCategory::Electrician => &["power", "switch", "wiring", "fan", "light", "socket", "spark", "fuse"],
            WorkerCategory::Carpenter => &["door", "wood", "furniture", "cupboard", "hinge", "table"],
            WorkerCategory::Painter => &["paint", "wall", "peeling", "colour", "color", "stain"],
            WorkerCategory::Mechanic => &["car", "bike", "engine", "brake", "tyre", "tire"],
            WorkerCategory::Cleaner => &["clean", "dust", "mess", "sofa", "carpet"],
            WorkerCategory::Gardener => &["garden", "plant", "lawn", "tree", "grass", "hedge"],
            WorkerCategory::Mason => &["brick", "crack", "cement", "tile", "plaster"],
            WorkerCategory::AcTechnician => &["ac", "air conditioner", "cooling", "compressor", "gas refill"],
        }
    }

    fn score(text: &str, category: WorkerCategory) -> usize {
        let words: Vec<&str> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        Self::keywords(category)
            .iter()
            .filter(|keyword| {
                if keyword.contains(' ') {
                    text.contains(**keyword)
                } else if keyword.len() < 3 {
                    // 短關鍵字只比對整個字，"ac" 不可命中 "across"
                    words.iter().any(|w| w == *keyword)
                } else {
                    words.iter().any(|w| w.starts_with(**keyword))
                }
            })
            .count()
    }
}

#[async_trait]
impl CategoryAdvisor for KeywordAdvisor {
    async fn suggest(&self, symptoms: &str) -> Result<String> {
        let text = symptoms.to_lowercase();
        let best = WorkerCategory::VARIANTS
            .into_iter()
            .map(|category| (Self::score(&text, category), category))
            .filter(|(score, _)| *score > 0)
            // 同分時保留分類表中較前面的
            .fold(None, |best: Option<(usize, WorkerCategory)>, candidate| match best {
                Some(current) if current.0 >= candidate.0 => Some(current),
                _ => Some(candidate),
            });

        best.map(|(_, category)| category.label().to_string())
            .ok_or_else(|| CatalogError::AdvisorError {
                message: "no category matched the description".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_keyword_advisor_picks_best_match() {
        let advisor = KeywordAdvisor;
        assert_eq!(
            advisor.suggest("Kitchen tap is leaking and the drain is slow").await.unwrap(),
            "Plumber"
        );
        assert_eq!(
            advisor.suggest("The fan stopped and a switch sparks").await.unwrap(),
            "Electrician"
        );
        assert_eq!(
            advisor.suggest("My AC is not cooling").await.unwrap(),
            "AC Technician"
        );
    }

    #[tokio::test]
    async fn test_short_keyword_needs_whole_word() {
        assert_eq!(
            KeywordAdvisor
                .suggest("After the accident the car engine makes noise across town")
                .await
                .unwrap(),
            "Mechanic"
        );
        assert!(KeywordAdvisor.suggest("actually nothing").await.is_err());
        assert_eq!(KeywordAdvisor.suggest("ac broken").await.unwrap(), "AC Technician");
    }

    #[tokio::test]
    async fn test_keyword_advisor_without_match() {
        let err = KeywordAdvisor.suggest("I feel lonely").await.unwrap_err();
        assert!(matches!(err, CatalogError::AdvisorError { .. }));
    }
}
