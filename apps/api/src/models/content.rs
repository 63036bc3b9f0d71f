use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;

/// Word target used when the requested length is not one of the known labels.
pub const DEFAULT_WORD_TARGET: u32 = 150;

/// Fixed posting-time suggestions returned with every result.
pub const OPTIMAL_POSTING_TIMES: [&str; 5] = [
    "Tuesday 10:00 AM",
    "Wednesday 11:00 AM",
    "Thursday 1:00 PM",
    "Tuesday 2:00 PM",
    "Wednesday 3:00 PM",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Text,
    Article,
    Carousel,
    Image,
}

impl ContentType {
    /// Case-insensitive parse of a content type label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "text" => Some(ContentType::Text),
            "article" => Some(ContentType::Article),
            "carousel" => Some(ContentType::Carousel),
            "image" => Some(ContentType::Image),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLength {
    Short,
    Medium,
    Long,
}

impl ContentLength {
    /// Case-insensitive parse; `None` for anything unrecognized.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "short" => Some(ContentLength::Short),
            "medium" => Some(ContentLength::Medium),
            "long" => Some(ContentLength::Long),
            _ => None,
        }
    }

    pub fn word_target(self) -> u32 {
        match self {
            ContentLength::Short => 50,
            ContentLength::Medium => 150,
            ContentLength::Long => 300,
        }
    }
}

fn default_platform() -> String {
    "LinkedIn".to_string()
}

/// Request body for POST /generate-content, as sent by the frontend.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentRequest {
    pub query: String,
    #[serde(default = "default_platform")]
    pub platform: String,
    pub content_type: String,
    pub content_length: String,
    pub image_prompt: Option<String>,
}

/// Validated generation request. Only constructed through `TryFrom<ContentRequest>`.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub query: String,
    pub platform: String,
    pub content_type: ContentType,
    pub content_length: ContentLength,
    pub image_prompt: Option<String>,
}

impl TryFrom<ContentRequest> for GenerationRequest {
    type Error = AppError;

    fn try_from(request: ContentRequest) -> Result<Self, Self::Error> {
        let query = request.query.trim().to_string();
        if query.is_empty() {
            return Err(AppError::Validation("query cannot be empty".to_string()));
        }

        let content_type = ContentType::from_label(&request.content_type).ok_or_else(|| {
            AppError::Validation(format!(
                "content_type must be one of Text, Article, Carousel, Image (got '{}')",
                request.content_type
            ))
        })?;

        // Unknown lengths are not rejected; they get the default word target.
        let content_length = ContentLength::from_label(&request.content_length).unwrap_or_else(|| {
            debug!(
                "Unrecognized content_length '{}', using {} words",
                request.content_length, DEFAULT_WORD_TARGET
            );
            ContentLength::Medium
        });

        let platform = match request.platform.trim() {
            "" => default_platform(),
            p => p.to_string(),
        };

        Ok(GenerationRequest {
            query,
            platform,
            content_type,
            content_length,
            image_prompt: request.image_prompt,
        })
    }
}

/// Response body for POST /generate-content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub content: String,
    pub hashtags: Vec<String>,
    pub seo_keywords: Vec<String>,
    /// Present iff the request asked for a carousel.
    pub carousel_slides: Option<Vec<String>>,
    pub image_prompt: Option<String>,
    pub optimal_posting_times: Vec<String>,
}
