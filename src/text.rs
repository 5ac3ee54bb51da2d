//! Text helpers shared by page models: identifier casing, rich-text flattening
//! and slugs.

use std::sync::OnceLock;

use regex::Regex;
use scraper::{Html, Selector};

static WORD_START_REGEX: OnceLock<Regex> = OnceLock::new();
static LOWER_UPPER_REGEX: OnceLock<Regex> = OnceLock::new();
static PARAGRAPH_SELECTOR: OnceLock<Selector> = OnceLock::new();

/// Convert an UpperCamelCase identifier to snake_case.
///
/// `"HeroPage"` becomes `"hero_page"` and `"Dota2IntroductionPage"` becomes
/// `"dota2_introduction_page"`. Runs of capitals are not recognised as
/// acronyms; the output for such names is whatever the two passes produce.
pub fn upper_camel_to_snake(name: &str) -> String {
    let word_start = WORD_START_REGEX
        .get_or_init(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("valid word start regex"));
    let lower_upper = LOWER_UPPER_REGEX
        .get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid lower/upper regex"));

    let first = word_start.replace_all(name, "${1}_${2}");
    lower_upper
        .replace_all(&first, "${1}_${2}")
        .to_lowercase()
}

/// Plain text of every `<p>` in a rich-text fragment.
///
/// Each paragraph is trimmed and ends with a newline. Unless `break_line` is
/// set, newlines are flattened to spaces. The result is trimmed.
pub fn html_to_str(html: &str, break_line: bool) -> String {
    let selector = PARAGRAPH_SELECTOR
        .get_or_init(|| Selector::parse("p").expect("valid paragraph selector"));
    let fragment = Html::parse_fragment(html);

    let mut result = String::new();
    for paragraph in fragment.select(selector) {
        let text: String = paragraph.text().collect();
        result.push_str(text.trim());
        result.push('\n');
    }

    if !break_line {
        result = result.replace('\n', " ");
    }
    result.trim().to_string()
}

/// Lowercase, ASCII, hyphen-separated slug for URLs.
pub fn slugify(text: &str) -> String {
    slug::slugify(text)
}
