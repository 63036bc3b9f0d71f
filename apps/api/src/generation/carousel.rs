//! Carousel slide splitting.
//!
//! Provider path: numbered/bulleted lines → up to 8 slides.
//! No credential: sentences greedily packed into slides of at most 200 chars, up to 10.
//! Provider failure: the first 5 raw sentence fragments.

use tracing::{debug, warn};

use crate::generation::prompts::CAROUSEL_PROMPT_TEMPLATE;
use crate::llm_client::{self, Completion, TextGenerator};

const CAROUSEL_MAX_TOKENS: u32 = 500;
const MAX_GENERATED_SLIDES: usize = 8;
const MAX_PACKED_SLIDES: usize = 10;
const MAX_FAILURE_SLIDES: usize = 5;
/// A fragment joins the current slide while the two together stay below this
/// many characters, so a packed slide is at most this long once its `". "`
/// separator is restored (unless a single sentence is already longer).
const SLIDE_CHAR_LIMIT: usize = 200;
const SENTENCE_DELIMITER: &str = ". ";
const BULLET: char = '•';

/// Splits `content` into carousel slides. Never fails.
pub async fn split_slides(llm: &dyn TextGenerator, content: &str, query: &str) -> Vec<String> {
    let prompt = CAROUSEL_PROMPT_TEMPLATE
        .replace("{query}", query)
        .replace("{content}", content);

    match llm_client::generate(llm, &prompt, CAROUSEL_MAX_TOKENS).await {
        Completion::Generated(text) => parse_slides(&text),
        Completion::Unavailable => {
            debug!("No provider configured, packing slides locally");
            pack_slides(content)
        }
        Completion::Failed(e) => {
            warn!("Error generating carousel slides: {e}");
            failure_slides(content)
        }
    }
}

/// Parses one slide per line. Only lines starting with a digit (`1. Tip`)
/// or a bullet (`• Tip`) are slides; everything else (titles, blank lines,
/// commentary) is skipped.
///
/// Both kinds keep the text after the first `.`. A line with no `.` is kept
/// whole, minus the leading bullet.
pub fn parse_slides(text: &str) -> Vec<String> {
    text.trim()
        .lines()
        .map(str::trim)
        .filter_map(|line| {
            let body = if line.starts_with(char::is_numeric) {
                line
            } else {
                line.strip_prefix(BULLET)?
            };
            Some(body.split_once('.').map_or(body, |(_, rest)| rest).trim())
        })
        .filter(|slide| !slide.is_empty())
        .take(MAX_GENERATED_SLIDES)
        .map(str::to_string)
        .collect()
}

/// Greedy sentence packing. Sentences are joined back with `". "` so the
/// slides read as the original text.
pub fn pack_slides(content: &str) -> Vec<String> {
    let mut slides = Vec::new();
    let mut current = String::new();

    for fragment in content.split(SENTENCE_DELIMITER) {
        let fits = current.chars().count() + fragment.chars().count() < SLIDE_CHAR_LIMIT;
        let sentence = terminate(fragment);
        if fits {
            current.push_str(&sentence);
            current.push(' ');
        } else {
            if !current.trim().is_empty() {
                slides.push(current.trim().to_string());
            }
            current = format!("{sentence} ");
        }
    }

    if !current.trim().is_empty() {
        slides.push(current.trim().to_string());
    }

    slides.truncate(MAX_PACKED_SLIDES);
    slides
}

/// Naive split with no packing.
pub fn failure_slides(content: &str) -> Vec<String> {
    content
        .split(SENTENCE_DELIMITER)
        .take(MAX_FAILURE_SLIDES)
        .map(str::to_string)
        .collect()
}

/// Restores the period the delimiter split removed. The final fragment
/// usually still carries its own terminator.
fn terminate(sentence: &str) -> String {
    if sentence.ends_with(['.', '!', '?']) {
        sentence.to_string()
    } else {
        format!("{sentence}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::{FailingGenerator, ScriptedGenerator, UnavailableGenerator};

    const NUMBERED_RESPONSE: &str = "Here are your slides:

1. Remote work is here to stay.
2. Async communication beats meetings
3) Invest in home office ergonomics
4.
Some closing remark
5. Measure outcomes, not hours.";

    #[test]
    fn test_parse_slides_numbered() {
        let slides = parse_slides(NUMBERED_RESPONSE);
        assert_eq!(
            slides,
            vec![
                "Remote work is here to stay.",
                "Async communication beats meetings",
                "3) Invest in home office ergonomics",
                "Measure outcomes, not hours."
            ]
        );
    }

    #[test]
    fn test_parse_slides_bullets() {
        let slides = parse_slides("• First point\n• Second point. With detail\n- dash ignored");
        assert_eq!(slides, vec!["First point", "With detail"]);
    }

    #[test]
    fn test_parse_slides_unicode_digits() {
        let slides = parse_slides("١. Arabic-Indic numbering\n२. Devanagari numbering");
        assert_eq!(slides, vec!["Arabic-Indic numbering", "Devanagari numbering"]);
    }

    #[test]
    fn test_parse_slides_truncates_to_eight() {
        let text = (1..=12).map(|i| format!("{i}. Slide {i}")).collect::<Vec<_>>().join("\n");
        let slides = parse_slides(&text);
        assert_eq!(slides.len(), 8);
        assert_eq!(slides[7], "Slide 8");
    }

    #[test]
    fn test_parse_slides_no_slide_lines() {
        assert!(parse_slides("Just a paragraph of text.").is_empty());
    }

    #[test]
    fn test_pack_slides_short_content_is_one_slide() {
        let slides = pack_slides("One. Two. Three.");
        assert_eq!(slides, vec!["One. Two. Three."]);
    }

    #[test]
    fn test_pack_slides_respects_char_limit() {
        let sentence = "a".repeat(80);
        let content = vec![sentence.as_str(); 6].join(". ");
        let slides = pack_slides(&content);

        assert_eq!(slides.len(), 3);
        for slide in &slides {
            assert!(slide.chars().count() <= SLIDE_CHAR_LIMIT, "slide too long: {}", slide.len());
        }
    }

    #[test]
    fn test_pack_slides_fills_to_exact_limit() {
        let content = format!("X. {}", "a".repeat(196));
        let slides = pack_slides(&content);
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].chars().count(), SLIDE_CHAR_LIMIT);
        assert_eq!(slides[0], format!("X. {}.", "a".repeat(196)));
    }

    #[test]
    fn test_pack_slides_splits_one_past_limit() {
        let content = format!("X. {}", "a".repeat(197));
        let slides = pack_slides(&content);
        assert_eq!(slides, vec!["X.".to_string(), format!("{}.", "a".repeat(197))]);
    }

    #[test]
    fn test_pack_slides_oversized_sentence_gets_own_slide() {
        let long = "b".repeat(250);
        let content = format!("Short intro. {long}. Outro.");
        let slides = pack_slides(&content);
        assert_eq!(slides.len(), 3);
        assert_eq!(slides[0], "Short intro.");
        assert_eq!(slides[1], format!("{long}."));
        assert_eq!(slides[2], "Outro.");
    }

    #[test]
    fn test_pack_slides_caps_at_ten() {
        let sentence = "c".repeat(150);
        let content = vec![sentence.as_str(); 15].join(". ");
        assert_eq!(pack_slides(&content).len(), 10);
    }

    #[test]
    fn test_failure_slides_naive_split() {
        let slides = failure_slides("A. B. C. D. E. F. G.");
        assert_eq!(slides, vec!["A", "B", "C", "D", "E"]);
    }

    #[tokio::test]
    async fn test_split_slides_unavailable_packs_content() {
        let content = "One. Two. Three.";
        let slides = split_slides(&UnavailableGenerator, content, "Counting").await;
        assert!(!slides.is_empty());
        assert!(slides.len() <= 10);
        let rebuilt = slides.join(" ");
        assert_eq!(rebuilt.len(), content.len());
    }

    #[tokio::test]
    async fn test_split_slides_failure_uses_naive_split() {
        let slides = split_slides(&FailingGenerator, "One. Two. Three.", "Counting").await;
        assert_eq!(slides, vec!["One", "Two", "Three."]);
    }

    #[tokio::test]
    async fn test_split_slides_generated() {
        let llm = ScriptedGenerator::always("1. First\n2. Second\n3. Third");
        let slides = split_slides(&llm, "Some content.", "Topic").await;
        assert_eq!(slides, vec!["First", "Second", "Third"]);

        let calls = llm.calls();
        assert_eq!(calls[0].max_tokens, 500);
        assert!(calls[0].prompt.contains("Content: Some content."));
        assert!(calls[0].prompt.contains("about \"Topic\""));
    }
}
