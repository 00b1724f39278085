//! Stress-analysis data model
//!
//! The service segments submitted text into lines, each line into words, and
//! each word into tokens (sub-word units). On the wire this is a plain
//! triple-nested JSON array of strings; the newtypes below are transparent so
//! they serialize exactly that way.

use serde::{Deserialize, Serialize};

/// Smallest string unit returned by the service
pub type Token = String;

/// Token count per word, per line
pub type Shape = Vec<Vec<usize>>;

/// Body of a stress-analysis request.
///
/// Built fresh for every submission and carries the input text verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub text: String,
}

impl SubmissionRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Success body returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressResponse {
    pub result: StressResult,
}

/// One word's segmentation into tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(pub Vec<Token>);

impl Word {
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<Token>> FromIterator<S> for Word {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Word(iter.into_iter().map(Into::into).collect())
    }
}

/// One line of input text as a sequence of words
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Line(pub Vec<Word>);

impl Line {
    pub fn words(&self) -> &[Word] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Word> for Line {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Line(iter.into_iter().collect())
    }
}

/// Ordered lines as produced by the stress-analysis service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StressResult(pub Vec<Line>);

impl StressResult {
    pub fn lines(&self) -> &[Line] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Token count per word, per line
    pub fn shape(&self) -> Shape {
        self.0
            .iter()
            .map(|line| line.0.iter().map(Word::len).collect())
            .collect()
    }

    /// Total number of tokens across all lines
    pub fn token_count(&self) -> usize {
        self.0
            .iter()
            .flat_map(|line| line.0.iter())
            .map(Word::len)
            .sum()
    }
}

impl FromIterator<Line> for StressResult {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        StressResult(iter.into_iter().collect())
    }
}

/// Build a [`StressResult`] from nested string slices.
///
/// Handy for tests and fixtures:
/// ```
/// use stressmark_core::stress::nested;
/// let result = nested(&[&[&["be", "cause"]], &[]]);
/// assert_eq!(result.shape(), vec![vec![2], vec![]]);
/// ```
pub fn nested(lines: &[&[&[&str]]]) -> StressResult {
    lines
        .iter()
        .map(|words| {
            words
                .iter()
                .map(|tokens| tokens.iter().copied().collect::<Word>())
                .collect::<Line>()
        })
        .collect()
}
