// All LLM prompt templates for the Generation module.
// Placeholders are `{name}` and are filled with `str::replace` before sending.
// The parsers in keywords/hashtags/carousel depend on the output formats
// requested here (comma-space lists, numbered lines).

/// SEO keyword prompt. Replace: {platform}, {query}
pub const KEYWORDS_PROMPT_TEMPLATE: &str = r#"Generate 7 SEO-optimized keywords for a {platform} post about "{query}".
Focus on:
- Professional and industry-specific terms
- Trending and searchable keywords
- LinkedIn-friendly hashtag potential
- Business and career-focused terms

Return only the keywords separated by commas, no hashtags."#;

/// Hashtag prompt. Replace: {platform}, {query}
pub const HASHTAGS_PROMPT_TEMPLATE: &str = r#"Generate 10-12 relevant {platform} hashtags for a post about "{query}".

Include a mix of:
- Specific hashtags related to "{query}"
- Popular LinkedIn professional hashtags
- Industry and business hashtags
- Career and growth hashtags

Rules:
- All hashtags must start with #
- Use CamelCase for multi-word hashtags
- Focus on LinkedIn-popular hashtags
- No spaces in hashtags

Return only hashtags separated by commas."#;

/// Long-form article prompt. Replace: {platform}, {query}, {word_count}
pub const ARTICLE_PROMPT_TEMPLATE: &str = r#"Write a professional {platform} article about "{query}".
Length: approximately {word_count} words.

Requirements:
- SEO-optimized content
- Professional tone
- Engaging and informative
- Include key insights and actionable tips
- Structure with clear paragraphs
- End with a call-to-action or question for engagement"#;

/// Social post prompt, used for every non-article content type.
/// Replace: {platform}, {query}, {word_count}
pub const POST_PROMPT_TEMPLATE: &str = r#"Write a professional {platform} post about "{query}".
Length: approximately {word_count} words.

Requirements:
- SEO-optimized content
- Engaging and professional tone
- Include key insights or tips
- End with a question or call-to-action for engagement
- Format suitable for social media"#;

/// Carousel slide prompt. Replace: {query}, {content}
pub const CAROUSEL_PROMPT_TEMPLATE: &str = r#"Convert the following content about "{query}" into 5-8 carousel slides for LinkedIn.
Each slide should:
- Be concise (max 150 characters)
- Have a clear point or tip
- Be engaging and professional
- Work as standalone content

Content: {content}

Return each slide on a new line, numbered (1., 2., etc.)"#;
