//! Whitespace-preserving render transform
//!
//! Display surfaces collapse runs of ordinary spaces, so every space inside a
//! token is swapped for a non-breaking marker before the result is shown.
//! The transform never changes nesting or element counts.

use serde::{Deserialize, Serialize};

use crate::stress::{Line, Shape, StressResult, Word};

/// Non-breaking-space substitute used for rendered tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhitespaceMarker {
    /// U+00A0 NO-BREAK SPACE
    #[default]
    #[serde(alias = "nbsp")]
    NonBreakingSpace,
    /// The `&nbsp;` entity, for HTML consumers
    HtmlEntity,
}

impl WhitespaceMarker {
    pub fn as_str(&self) -> &'static str {
        match self {
            WhitespaceMarker::NonBreakingSpace => "\u{00A0}",
            WhitespaceMarker::HtmlEntity => "&nbsp;",
        }
    }
}

/// Replace every space in `token` with `marker`.
///
/// Tokens without spaces (including the empty token) come back unchanged.
pub fn render_token(token: &str, marker: WhitespaceMarker) -> String {
    if token.contains(' ') {
        token.replace(' ', marker.as_str())
    } else {
        token.to_string()
    }
}

/// A [`StressResult`] whose tokens are safe to display
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderedResult(StressResult);

impl RenderedResult {
    pub fn lines(&self) -> &[Line] {
        self.0.lines()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn shape(&self) -> Shape {
        self.0.shape()
    }

    /// Borrow as the plain nested structure
    pub fn as_nested(&self) -> &StressResult {
        &self.0
    }

    /// One string per line: tokens concatenated, words joined by a space
    pub fn to_plain_lines(&self) -> Vec<String> {
        self.0
            .lines()
            .iter()
            .map(|line| {
                line.words()
                    .iter()
                    .map(|word| word.tokens().concat())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

/// Produce a rendered copy of `result`, line by line, word by word.
pub fn render_result(result: &StressResult, marker: WhitespaceMarker) -> RenderedResult {
    let lines = result
        .lines()
        .iter()
        .map(|line| {
            line.words()
                .iter()
                .map(|word| {
                    word.tokens()
                        .iter()
                        .map(|token| render_token(token, marker))
                        .collect::<Word>()
                })
                .collect::<Line>()
        })
        .collect();

    RenderedResult(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stress::nested;

    const NBSP: WhitespaceMarker = WhitespaceMarker::NonBreakingSpace;

    fn all_tokens(rendered: &RenderedResult) -> Vec<&str> {
        rendered
            .lines()
            .iter()
            .flat_map(|l| l.words())
            .flat_map(|w| w.tokens())
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn test_single_space_replaced() {
        let rendered = render_result(&nested(&[&[&["a b"]]]), NBSP);
        assert_eq!(all_tokens(&rendered), vec!["a\u{00A0}b"]);
    }

    #[test]
    fn test_every_space_replaced() {
        let rendered = render_result(&nested(&[&[&["x  y", " lead", "trail "]]]), NBSP);
        assert_eq!(
            all_tokens(&rendered),
            vec!["x\u{00A0}\u{00A0}y", "\u{00A0}lead", "trail\u{00A0}"]
        );
    }

    #[test]
    fn test_no_space_survives() {
        let input = nested(&[
            &[&["  ", "a b c"], &["d"]],
            &[],
            &[&["e f", " "], &[], &["   g   "]],
        ]);
        let rendered = render_result(&input, NBSP);
        assert!(all_tokens(&rendered).iter().all(|t| !t.contains(' ')));
    }

    #[test]
    fn test_shape_preserved() {
        let input = nested(&[
            &[&["a", "b c"], &["d"]],
            &[],
            &[&[], &["e f g"]],
            &[&["h"]],
        ]);
        let rendered = render_result(&input, NBSP);
        assert_eq!(rendered.shape(), input.shape());
    }

    #[test]
    fn test_tokens_without_spaces_unchanged() {
        let input = nested(&[&[&["stress", "ed", ""], &["ok"]]]);
        let rendered = render_result(&input, NBSP);
        assert_eq!(rendered.as_nested(), &input);
    }

    #[test]
    fn test_empty_result_renders_empty() {
        let rendered = render_result(&StressResult::default(), NBSP);
        assert!(rendered.is_empty());
        assert_eq!(serde_json::to_string(&rendered).unwrap(), "[]");
    }

    #[test]
    fn test_empty_line_kept_in_place() {
        let rendered = render_result(&nested(&[&[&["a"]], &[], &[&["b"]]]), NBSP);
        assert_eq!(rendered.lines().len(), 3);
        assert!(rendered.lines()[1].is_empty());
        assert_eq!(rendered.lines()[2].words()[0].tokens()[0], "b");
    }

    #[test]
    fn test_order_preserved() {
        let input = nested(&[&[&["1", "2"], &["3"]], &[&["4"]]]);
        let rendered = render_result(&input, NBSP);
        assert_eq!(all_tokens(&rendered), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_html_entity_marker() {
        let rendered = render_result(&nested(&[&[&["a  b"]]]), WhitespaceMarker::HtmlEntity);
        assert_eq!(all_tokens(&rendered), vec!["a&nbsp;&nbsp;b"]);
    }

    #[test]
    fn test_render_token_empty() {
        assert_eq!(render_token("", NBSP), "");
    }

    #[test]
    fn test_plain_lines() {
        let input = nested(&[&[&["be", "cause"], &["it  is"]], &[]]);
        let rendered = render_result(&input, NBSP);
        assert_eq!(
            rendered.to_plain_lines(),
            vec!["because it\u{00A0}\u{00A0}is".to_string(), String::new()]
        );
    }

    #[test]
    fn test_marker_deserializes_from_config_names() {
        #[derive(Deserialize)]
        struct Wrap {
            marker: WhitespaceMarker,
        }
        let w: Wrap = serde_json::from_str(r#"{"marker":"nbsp"}"#).unwrap();
        assert_eq!(w.marker, WhitespaceMarker::NonBreakingSpace);
        let w: Wrap = serde_json::from_str(r#"{"marker":"html_entity"}"#).unwrap();
        assert_eq!(w.marker, WhitespaceMarker::HtmlEntity);
    }
}
