//! Hashtag extraction.
//!
//! Every branch returns tags of the form `#\S+`. The three branches differ in
//! their fixed tags and in their length cap (12 provider, 10 unconfigured,
//! 8 on provider failure).

use tracing::{debug, warn};

use crate::generation::prompts::HASHTAGS_PROMPT_TEMPLATE;
use crate::llm_client::{self, Completion, TextGenerator};

const HASHTAGS_MAX_TOKENS: u32 = 180;
const MAX_GENERATED_HASHTAGS: usize = 12;
const MAX_UNCONFIGURED_HASHTAGS: usize = 10;
const MAX_FAILURE_HASHTAGS: usize = 8;
/// Below this many valid generated tags, the recovery set is appended.
const MIN_GENERATED_HASHTAGS: usize = 5;

const RECOVERY_TAGS: [&str; 4] = ["#LinkedIn", "#Professional", "#Business", "#Growth"];
const UNCONFIGURED_TAGS: [&str; 7] = [
    "#LinkedIn",
    "#Professional",
    "#CareerGrowth",
    "#BusinessTips",
    "#Industry",
    "#Innovation",
    "#Leadership",
];
const FAILURE_TAGS: [&str; 4] = ["#LinkedIn", "#Professional", "#Business", "#CareerTips"];

/// Returns hashtags for `query`. Never fails.
pub async fn extract_hashtags(
    llm: &dyn TextGenerator,
    query: &str,
    platform: &str,
) -> Vec<String> {
    let prompt = HASHTAGS_PROMPT_TEMPLATE
        .replace("{platform}", platform)
        .replace("{query}", query);

    match llm_client::generate(llm, &prompt, HASHTAGS_MAX_TOKENS).await {
        Completion::Generated(text) => parse_hashtags(&text, query),
        Completion::Unavailable => {
            debug!("No provider configured, using default hashtags");
            unconfigured_hashtags(query)
        }
        Completion::Failed(e) => {
            warn!("Error generating hashtags: {e}");
            failure_hashtags(query)
        }
    }
}

/// Parses a `"#A, #B, #C"` response. A token survives if it starts with `#`,
/// has at least one character after it and contains no whitespace.
pub fn parse_hashtags(text: &str, query: &str) -> Vec<String> {
    let mut hashtags: Vec<String> = text
        .trim()
        .split(", ")
        .map(str::trim)
        .filter(|tag| is_valid_hashtag(tag))
        .map(str::to_string)
        .collect();

    if hashtags.len() < MIN_GENERATED_HASHTAGS {
        hashtags.push(format!("#{}", squash(query)));
        hashtags.extend(RECOVERY_TAGS.iter().map(|t| t.to_string()));
    }

    hashtags.truncate(MAX_GENERATED_HASHTAGS);
    hashtags
}

pub fn unconfigured_hashtags(query: &str) -> Vec<String> {
    let mut hashtags = vec![format!("#{}", squash(query).to_lowercase())];
    hashtags.extend(UNCONFIGURED_TAGS.iter().map(|t| t.to_string()));
    hashtags.extend(word_hashtags(query));
    hashtags.truncate(MAX_UNCONFIGURED_HASHTAGS);
    hashtags
}

pub fn failure_hashtags(query: &str) -> Vec<String> {
    let mut hashtags = vec![format!("#{}", squash(query).to_lowercase())];
    hashtags.extend(FAILURE_TAGS.iter().map(|t| t.to_string()));
    hashtags.extend(word_hashtags(query));
    hashtags.truncate(MAX_FAILURE_HASHTAGS);
    hashtags
}

fn is_valid_hashtag(tag: &str) -> bool {
    tag.starts_with('#') && tag.chars().count() > 1 && !tag.chars().any(char::is_whitespace)
}

/// Query with all whitespace removed, original case kept.
fn squash(query: &str) -> String {
    query.split_whitespace().collect()
}

/// `#Word` for each of the first two query words longer than 3 characters.
fn word_hashtags(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .take(2)
        .filter(|w| w.chars().count() > 3)
        .map(|w| format!("#{}", capitalize(w)))
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
