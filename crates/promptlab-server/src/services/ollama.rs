//! Ollama Client
//!
//! Bridge to a locally running Ollama server over its HTTP API:
//! `GET /api/tags` for status and model discovery, `POST /api/generate`
//! for non-streaming completions.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use promptlab::{Completion, DomainError, InferenceProvider, ServerStatus};

/// Models offered when the server cannot be reached, so the UI always
/// has selectable options.
pub const FALLBACK_MODELS: [&str; 3] = ["llama2:7b", "mistral:7b", "codellama:7b"];

/// Processing time reported for simulated completions, in ms.
const SIMULATED_PROCESSING_TIME_MS: u64 = 500;

/// Completion requests against local models can be slow; bound them
/// generously rather than inheriting the transport default.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Client for the Ollama HTTP API.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    demo_fallback: bool,
}

impl OllamaClient {
    /// Creates a client for the given base address.
    ///
    /// With `demo_fallback` set, failed completions are replaced by a
    /// simulated response embedding the failure reason instead of
    /// surfacing the error.
    pub fn new(base_url: &str, demo_fallback: bool) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            demo_fallback,
        }
    }

    async fn fetch_models(&self) -> Result<Vec<String>, DomainError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| DomainError::ExternalService(err.to_string()))?;

        if !response.status().is_success() {
            return Err(DomainError::ExternalService(format!(
                "Failed to fetch models: {}",
                response.status()
            )));
        }

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|err| DomainError::ExternalService(err.to_string()))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    async fn request_completion(
        &self,
        model: &str,
        prompt: &str,
    ) -> Result<Completion, DomainError> {
        let url = format!("{}/api/generate", self.base_url);
        let started = Instant::now();

        let request = GenerateRequest {
            model: model.to_string(),
            prompt: prompt.to_string(),
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| DomainError::ExternalService(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the error message Ollama reports over a bare status.
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .map(|body| body.error)
                .unwrap_or_else(|| format!("Server responded with status {status}"));
            return Err(DomainError::ExternalService(message));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|err| DomainError::ExternalService(err.to_string()))?;

        Ok(Completion {
            response: body.response,
            processing_time: started.elapsed().as_millis() as u64,
        })
    }

    fn simulated(reason: &str) -> Completion {
        Completion {
            response: format!(
                "[Simulated response - Ollama connection failed: {reason}]\n\n\
                 Prompt engineering is the practice of designing and refining text \
                 inputs for language models to generate desired outputs. It's like \
                 learning how to ask questions in just the right way to get the best \
                 possible answers from an AI assistant."
            ),
            processing_time: SIMULATED_PROCESSING_TIME_MS,
        }
    }
}

#[async_trait]
impl InferenceProvider for OllamaClient {
    async fn check_status(&self) -> ServerStatus {
        let url = format!("{}/api/tags", self.base_url);

        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => ServerStatus::connected(),
            Ok(response) => ServerStatus::disconnected(format!(
                "Ollama server responded with status {}",
                response.status()
            )),
            Err(err) => {
                ServerStatus::disconnected(format!("Failed to connect to Ollama: {err}"))
            }
        }
    }

    async fn list_models(&self) -> Vec<String> {
        match self.fetch_models().await {
            Ok(models) => models,
            Err(err) => {
                tracing::warn!("Error fetching models, using fallback list: {err}");
                FALLBACK_MODELS.iter().map(|m| m.to_string()).collect()
            }
        }
    }

    async fn generate(&self, model: &str, prompt: &str) -> Result<Completion, DomainError> {
        match self.request_completion(model, prompt).await {
            Ok(completion) => Ok(completion),
            Err(err) => {
                tracing::warn!("Error generating completion: {err}");
                if self.demo_fallback {
                    Ok(Self::simulated(&err.to_string()))
                } else {
                    Err(err)
                }
            }
        }
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Deserialize)]
struct TagsResponse {
    models: Vec<ModelEntry>,
}

#[derive(Deserialize)]
struct ModelEntry {
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_completion_embeds_failure_reason() {
        let completion = OllamaClient::simulated("connection refused");

        assert!(completion.response.contains("connection refused"));
        assert!(completion.response.contains("Simulated response"));
        assert_eq!(completion.processing_time, SIMULATED_PROCESSING_TIME_MS);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = OllamaClient::new("http://localhost:11434/", false);
        assert_eq!(client.base_url, "http://localhost:11434");
    }
}
