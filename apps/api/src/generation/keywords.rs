//! SEO keyword extraction.
//!
//! Provider path: comma-space separated list → lower-cased, `#`-free keywords (max 7).
//! No credential: 7 query-derived keywords. Provider failure: 5 narrower keywords.

use tracing::{debug, warn};

use crate::generation::prompts::KEYWORDS_PROMPT_TEMPLATE;
use crate::llm_client::{self, Completion, TextGenerator};

const KEYWORDS_MAX_TOKENS: u32 = 120;
const MAX_KEYWORDS: usize = 7;
const MAX_FAILURE_KEYWORDS: usize = 5;

/// Returns SEO keywords for `query`. Never fails.
pub async fn extract_keywords(
    llm: &dyn TextGenerator,
    query: &str,
    platform: &str,
) -> Vec<String> {
    let prompt = KEYWORDS_PROMPT_TEMPLATE
        .replace("{platform}", platform)
        .replace("{query}", query);

    match llm_client::generate(llm, &prompt, KEYWORDS_MAX_TOKENS).await {
        Completion::Generated(text) => parse_keywords(&text, query),
        Completion::Unavailable => {
            debug!("No provider configured, using default keywords");
            unconfigured_keywords(query)
        }
        Completion::Failed(e) => {
            warn!("Error generating SEO keywords: {e}");
            failure_keywords(query)
        }
    }
}

/// Parses a `"a, b, c"` response. Tokens are trimmed and lower-cased; empty
/// tokens and tokens starting with `#` are dropped.
pub fn parse_keywords(text: &str, query: &str) -> Vec<String> {
    let keywords: Vec<String> = text
        .trim()
        .split(", ")
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty() && !k.starts_with('#'))
        .take(MAX_KEYWORDS)
        .collect();

    if keywords.is_empty() {
        return vec![
            query.to_lowercase(),
            "professional".to_string(),
            "industry".to_string(),
        ];
    }
    keywords
}

pub fn unconfigured_keywords(query: &str) -> Vec<String> {
    let query = query.to_lowercase();
    let mut keywords = vec![
        query.clone(),
        format!("{query} tips"),
        format!("{query} trends"),
        format!("{query} insights"),
        "professional development".to_string(),
        "industry trends".to_string(),
        "business strategy".to_string(),
    ];
    keywords.truncate(MAX_KEYWORDS);
    keywords
}

pub fn failure_keywords(query: &str) -> Vec<String> {
    let query = query.to_lowercase();
    let (trends, tips) = match query.split_whitespace().next() {
        Some(first) => (format!("{first} trends"), format!("{first} tips")),
        None => ("trends".to_string(), "tips".to_string()),
    };

    let mut keywords = vec![
        query.clone(),
        trends,
        tips,
        "professional development".to_string(),
        "industry insights".to_string(),
    ];
    keywords.truncate(MAX_FAILURE_KEYWORDS);
    keywords
}
