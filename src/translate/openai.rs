use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{TranslateError, Translator, language_name};
use crate::config::OpenAiConfig;

const SYSTEM_PROMPT: &str = "You are a professional translator. Translate accurately while preserving the EXACT formatting of the source text. CRITICAL: Match the exact capitalization pattern and punctuation of the source. If source starts lowercase, translation must start lowercase. If source has no period, translation must have no period. Return ONLY the translated text without quotes or additional formatting.";

const MAX_TOKENS: u32 = 1000;
const DEFAULT_BACKOFF_BASE: Duration = Duration::from_secs(1);
const MAX_BACKOFF: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Chat-completion translator for OpenAI-compatible endpoints.
pub struct OpenAiTranslator {
    client: Client,
    endpoint: Url,
    api_key: String,
    model: String,
    temperature: f32,
    max_attempts: u32,
    backoff_base: Duration,
}

impl OpenAiTranslator {
    pub fn new(api_key: impl Into<String>, settings: &OpenAiConfig) -> Result<Self, TranslateError> {
        let base = settings.api_base.trim_end_matches('/');
        let endpoint = Url::parse(&format!("{}/chat/completions", base))
            .map_err(|e| TranslateError::InvalidEndpoint(format!("{}: {}", settings.api_base, e)))?;

        let mut builder = Client::builder().timeout(Duration::from_secs(settings.timeout_secs));
        // Local servers must not be routed through an HTTP proxy.
        if matches!(endpoint.host_str(), Some("localhost" | "127.0.0.1" | "[::1]")) {
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
            api_key: api_key.into(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_attempts: settings.max_retries.max(1),
            backoff_base: DEFAULT_BACKOFF_BASE,
        })
    }

    /// Override the first retry delay. Later delays double from it.
    pub fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }

    fn request<'a>(&'a self, text: &str, source_lang: &str, target_lang: &str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt(text, source_lang, target_lang),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: self.temperature,
        }
    }

    async fn send_once(&self, request: &ChatRequest<'_>) -> Result<String, TranslateError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(TranslateError::Unauthorized);
        }
        if is_transient(status) {
            return Err(TranslateError::Transient {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| TranslateError::MalformedResponse(e.to_string()))?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| TranslateError::MalformedResponse("no choices returned".to_string()))?;

        let cleaned = clean_response(&content);
        if cleaned.is_empty() {
            return Err(TranslateError::MalformedResponse(
                "empty translation".to_string(),
            ));
        }
        Ok(cleaned)
    }
}

#[async_trait]
impl Translator for OpenAiTranslator {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslateError> {
        if self.api_key.trim().is_empty() {
            return Err(TranslateError::MissingApiKey);
        }
        if text.trim().is_empty() {
            return Err(TranslateError::EmptyText);
        }

        let request = self.request(text, source_lang, target_lang);
        let mut attempt = 1;
        loop {
            match self.send_once(&request).await {
                Err(TranslateError::Transient { status }) if attempt < self.max_attempts => {
                    let delay = backoff_delay(self.backoff_base, attempt);
                    warn!(
                        status,
                        attempt,
                        max_attempts = self.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        "translation request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                result => {
                    if result.is_ok() {
                        debug!(source_lang, target_lang, attempt, "translation received");
                    }
                    return result;
                }
            }
        }
    }
}

fn user_prompt(text: &str, source_lang: &str, target_lang: &str) -> String {
    format!(
        "Translate the following text from {} to {}:

{}

CRITICAL formatting rules:
- Preserve EXACT capitalization pattern of the source text (if source starts lowercase, translation must start lowercase)
- Preserve EXACT punctuation of the source text (if source has no period, translation must have no period)
- Keep the same tone and style as the source
- If it's a UI text, make it natural for the target language while maintaining formatting
- Return ONLY the translated text without quotes or any additional formatting
- Do not add punctuation that doesn't exist in the source
- Do not change capitalization from the source pattern",
        language_name(source_lang),
        language_name(target_lang),
        text
    )
}

fn is_transient(status: StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 502 | 503 | 504)
}

/// Delay before retry number `attempt` (1-based): `base * 2^(attempt-1)`,
/// capped at 10 seconds.
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
    base.saturating_mul(factor).min(MAX_BACKOFF)
}

fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.trim().is_empty() => "no response body".to_string(),
        Err(_) => body.chars().take(200).collect(),
    }
}

/// Trim the model output, drop one pair of enclosing quotes, and unescape
/// `\"` and `\'`.
pub fn clean_response(content: &str) -> String {
    let trimmed = content.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed);
    unquoted.replace("\\\"", "\"").replace("\\'", "'")
}
