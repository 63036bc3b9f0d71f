//! Content Generation — orchestrates one request into one result.
//!
//! Flow: compose_content → extract_keywords → extract_hashtags →
//!       split_slides (carousel only) → GenerationResult.
//!
//! Each component absorbs provider failures into its own fallback, so this
//! pipeline has no error path of its own. Failures outside the components
//! (a panicking task) are mapped to `AppError::Generation` by the handler.

use tracing::info;

use crate::generation::carousel::split_slides;
use crate::generation::composer::compose_content;
use crate::generation::hashtags::extract_hashtags;
use crate::generation::keywords::extract_keywords;
use crate::llm_client::TextGenerator;
use crate::models::content::{
    ContentType, GenerationRequest, GenerationResult, OPTIMAL_POSTING_TIMES,
};

/// Runs the full generation pipeline for a validated request.
///
/// Steps:
/// 1. compose_content() → body text
/// 2. extract_keywords() → 5–7 SEO keywords
/// 3. extract_hashtags() → 5–12 hashtags
/// 4. split_slides() → slides, only for `ContentType::Carousel`
pub async fn generate_content(
    llm: &dyn TextGenerator,
    request: &GenerationRequest,
) -> GenerationResult {
    info!(
        "Generating {:?} content for query {:?} on {}",
        request.content_type, request.query, request.platform
    );

    // Step 1: Body
    let content = compose_content(
        llm,
        &request.query,
        &request.platform,
        request.content_type,
        request.content_length,
    )
    .await;

    // Step 2: SEO keywords
    let seo_keywords = extract_keywords(llm, &request.query, &request.platform).await;

    // Step 3: Hashtags
    let hashtags = extract_hashtags(llm, &request.query, &request.platform).await;

    // Step 4: Carousel slides
    let carousel_slides = match request.content_type {
        ContentType::Carousel => Some(split_slides(llm, &content, &request.query).await),
        ContentType::Text | ContentType::Article | ContentType::Image => None,
    };

    info!(
        "Generated {} chars, {} keywords, {} hashtags, {} slides",
        content.chars().count(),
        seo_keywords.len(),
        hashtags.len(),
        carousel_slides.as_ref().map_or(0, Vec::len)
    );

    GenerationResult {
        content,
        hashtags,
        seo_keywords,
        carousel_slides,
        image_prompt: request.image_prompt.clone(),
        optimal_posting_times: OPTIMAL_POSTING_TIMES.iter().map(|t| t.to_string()).collect(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
