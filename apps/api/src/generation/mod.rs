// Content Generation Engine
// Implements: body composition, SEO keywords, hashtags, carousel splitting.
// All provider calls go through llm_client; every component has deterministic fallbacks.

pub mod carousel;
pub mod composer;
pub mod handlers;
pub mod hashtags;
pub mod keywords;
pub mod pipeline;
pub mod prompts;
