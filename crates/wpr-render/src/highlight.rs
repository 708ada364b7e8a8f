//! Slide title highlighting.

use regex::RegexBuilder;

use crate::svg;

/// Wraps every occurrence of `phrase` inside `title` in a highlight span
/// with the wavy underline appended after the matched text.
///
/// Matching is case-insensitive and literal: the phrase is escaped before
/// it is compiled, so characters like `.` or `(` never act as pattern
/// syntax. The matched text keeps its original casing. An empty phrase
/// returns the title unchanged.
pub fn highlight_title(title: &str, phrase: &str) -> String {
    if phrase.is_empty() {
        return title.to_owned();
    }
    let Ok(pattern) = RegexBuilder::new(&regex::escape(phrase))
        .case_insensitive(true)
        .build()
    else {
        return title.to_owned();
    };
    pattern
        .replace_all(title, |caps: &regex::Captures| {
            format!(
                r#"<span class="highlight-word">{}{}</span>"#,
                &caps[0],
                svg::WAVE
            )
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_phrase_returns_title_unchanged() {
        assert_eq!(highlight_title("Fresh Produce", ""), "Fresh Produce");
    }

    #[test]
    fn wraps_every_case_insensitive_occurrence() {
        let out = highlight_title("Lead the Leadership", "lead");
        assert_eq!(out.matches(r#"<span class="highlight-word">"#).count(), 2);
        assert!(out.contains(r#"<span class="highlight-word">Lead"#));
        assert!(out.ends_with("</span>ership"));
    }

    #[test]
    fn matched_text_keeps_original_casing() {
        let out = highlight_title("KOOL produce", "kool");
        assert!(out.contains(r#"<span class="highlight-word">KOOL"#));
    }

    #[test]
    fn appends_wave_inside_span() {
        let out = highlight_title("Fresh Produce", "Fresh");
        assert!(out.contains(svg::WAVE));
        assert!(out.ends_with("</span> Produce"));
    }

    #[test]
    fn regex_metacharacters_match_literally() {
        let out = highlight_title("Price (2024) update", "(2024)");
        assert!(out.contains(r#"<span class="highlight-word">(2024)"#));

        let untouched = highlight_title("Price 2024 update", "(2024)");
        assert_eq!(untouched, "Price 2024 update");
    }

    #[test]
    fn dot_does_not_match_any_character() {
        assert_eq!(highlight_title("cat", "c.t"), "cat");
    }

    #[test]
    fn absent_phrase_leaves_title_unchanged() {
        assert_eq!(
            highlight_title("Fresh Produce", "frozen"),
            "Fresh Produce"
        );
    }
}
