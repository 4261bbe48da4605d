//! Client for the external generative-text service that writes event
//! descriptions.
//!
//! The contract is intentionally forgiving: exactly one request per call, and
//! every failure mode collapses into one of two fixed pt-BR fallback strings
//! that land in the description field instead of an error surface. Nothing is
//! retried, cached or rate-limited here.

use encore_core::DescriptionRequest;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Returned when the service answers successfully but with no usable text.
pub const EMPTY_RESPONSE_FALLBACK: &str = "Não foi possível gerar a descrição. Tente novamente.";

/// Returned when the request fails in transport, status or decoding.
pub const SERVICE_ERROR_FALLBACK: &str =
    "Ocorreu um erro ao gerar a descrição. Por favor, tente manualmente.";

#[derive(Debug, Error)]
pub enum CopywriterError {
    #[error("no API key configured (set {0})")]
    MissingApiKey(&'static str),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Fixed prompt handed to the service.
pub fn render_prompt(req: &DescriptionRequest) -> String {
    format!(
        "Você é um copywriter profissional para uma plataforma de ingressos premium e futurista.\n\
         Escreva uma descrição de evento envolvente, emocionante e otimizada para SEO em \
         PORTUGUÊS (Brasil) com os seguintes detalhes:\n\
         \n\
         Título: {}\n\
         Categoria: {}\n\
         Detalhes Chave: {}\n\
         \n\
         Mantenha o tom profissional, mas empolgante e moderno. Use aproximadamente {} palavras.\n\
         Formate com parágrafos claros. Não use cabeçalhos Markdown (#), apenas texto simples \
         com espaçamento.",
        req.title,
        req.category.label(),
        req.key_details,
        encore_config::DESCRIPTION_WORD_TARGET,
    )
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    thinking_config: ThinkingConfig,
}

// A zero budget disables the service's extended reasoning.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

fn extract_text(resp: &GenerateContentResponse) -> Option<String> {
    let content = resp.candidates.first()?.content.as_ref()?;
    let text = content
        .parts
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("");
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

pub struct GeminiCopywriter {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiCopywriter {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
            api_key,
        }
    }

    /// Production construction: key from the environment, defaults from
    /// `encore-config`. A missing key is not fatal here; it downgrades every
    /// generation into the error fallback (logged per call).
    pub fn from_env(client: reqwest::Client) -> Self {
        let api_key = std::env::var(encore_config::API_KEY_ENV).ok();
        Self::new(
            client,
            encore_config::DEFAULT_API_BASE_URL,
            encore_config::DEFAULT_TEXT_MODEL,
            api_key,
        )
    }

    /// Generate description prose for the draft. Never fails past this
    /// boundary: the result is either service text or one of the two fixed
    /// fallback strings.
    pub async fn generate_description(&self, req: &DescriptionRequest) -> String {
        match self.generate(req).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                warn!(title = %req.title, "generation returned empty content");
                EMPTY_RESPONSE_FALLBACK.to_string()
            }
            Err(e) => {
                warn!(title = %req.title, error = %e, "description generation failed");
                SERVICE_ERROR_FALLBACK.to_string()
            }
        }
    }

    async fn generate(&self, req: &DescriptionRequest) -> Result<Option<String>, CopywriterError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CopywriterError::MissingApiKey(encore_config::API_KEY_ENV))?;

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = GenerateContentBody {
            contents: vec![Content {
                parts: vec![Part {
                    text: render_prompt(req),
                }],
            }],
            generation_config: GenerationConfig {
                thinking_config: ThinkingConfig { thinking_budget: 0 },
            },
        };

        let resp = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CopywriterError::Status(status));
        }

        let parsed: GenerateContentResponse = resp.json().await?;
        Ok(extract_text(&parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encore_core::EventCategory;

    #[test]
    fn prompt_carries_the_draft_fields_and_bans_markdown_headers() {
        let req = DescriptionRequest {
            title: "Demo Launch".into(),
            category: EventCategory::Technology,
            key_details: "speaker: Ana; free snacks".into(),
        };
        let prompt = render_prompt(&req);
        assert!(prompt.contains("Título: Demo Launch"));
        assert!(prompt.contains("Categoria: Tecnologia"));
        assert!(prompt.contains("Detalhes Chave: speaker: Ana; free snacks"));
        assert!(prompt.contains("150 palavras"));
        assert!(prompt.contains("Não use cabeçalhos Markdown"));
    }

    #[test]
    fn whitespace_only_candidates_count_as_empty() {
        let resp = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![Part { text: "  \n ".into() }],
                }),
            }],
        };
        assert_eq!(extract_text(&resp), None);
    }

    #[test]
    fn multi_part_candidates_are_joined_in_order() {
        let resp = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![
                        Part {
                            text: "Primeira parte. ".into(),
                        },
                        Part {
                            text: "Segunda parte.".into(),
                        },
                    ],
                }),
            }],
        };
        assert_eq!(
            extract_text(&resp).as_deref(),
            Some("Primeira parte. Segunda parte.")
        );
    }
}
