//! Post / article body composition.

use tracing::{debug, warn};

use crate::generation::prompts::{ARTICLE_PROMPT_TEMPLATE, POST_PROMPT_TEMPLATE};
use crate::llm_client::{self, Completion, TextGenerator};
use crate::models::content::{ContentLength, ContentType};

/// Returns the main body text. Never fails.
///
/// The token budget is twice the target word count.
pub async fn compose_content(
    llm: &dyn TextGenerator,
    query: &str,
    platform: &str,
    content_type: ContentType,
    content_length: ContentLength,
) -> String {
    let word_count = content_length.word_target();
    let prompt = build_prompt(query, platform, content_type, word_count);

    match llm_client::generate(llm, &prompt, word_count * 2).await {
        Completion::Generated(text) => text,
        Completion::Unavailable => {
            debug!("No provider configured, using placeholder content");
            unconfigured_content(query)
        }
        Completion::Failed(e) => {
            warn!("Error generating content: {e}");
            failure_content(query)
        }
    }
}

/// Articles get the structured long-form template; every other type gets the post template.
pub fn build_prompt(
    query: &str,
    platform: &str,
    content_type: ContentType,
    word_count: u32,
) -> String {
    let template = match content_type {
        ContentType::Article => ARTICLE_PROMPT_TEMPLATE,
        ContentType::Text | ContentType::Carousel | ContentType::Image => POST_PROMPT_TEMPLATE,
    };

    template
        .replace("{platform}", platform)
        .replace("{query}", query)
        .replace("{word_count}", &word_count.to_string())
}

pub fn unconfigured_content(query: &str) -> String {
    format!(
        "Exploring {query}: Key insights and trends in the industry. \
         This topic is gaining significant attention and offers valuable opportunities for professionals."
    )
}

pub fn failure_content(query: &str) -> String {
    format!(
        "Exploring {query}: Key insights and trends that professionals should know about. \
         This topic offers valuable opportunities for growth and innovation in the industry."
    )
}
