use std::sync::LazyLock;

use regex_lite::Regex;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6}\s").unwrap());
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^```[\s\S]*```$").unwrap());
static QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^>\s(.*)$").unwrap());
static UNORDERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(-|\*)\s(.*)$").unwrap());
static ORDERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\d{1,3}\.\s(.*)$").unwrap());

/// Splits a document into its blank-line-delimited blocks, trimmed, with
/// empty pieces discarded. Relative order is preserved.
pub fn split_blocks(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// The structural type of a block. Classification is total: paragraph is the
/// universal fallback, so every input maps to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

impl BlockKind {
    /// Classifies a block, checking patterns in fixed priority order with
    /// first match winning.
    ///
    /// Quote and list checks are per-line searches: a single matching line
    /// qualifies the whole block. Ordered-list markers are 1-3 digit numbers
    /// with no requirement that numbering be sequential or start at 1.
    pub fn classify(block: &str) -> Self {
        if HEADING_RE.is_match(block) {
            BlockKind::Heading
        } else if CODE_RE.is_match(block) {
            BlockKind::Code
        } else if QUOTE_RE.is_match(block) {
            BlockKind::Quote
        } else if UNORDERED_RE.is_match(block) {
            BlockKind::UnorderedList
        } else if ORDERED_RE.is_match(block) {
            BlockKind::OrderedList
        } else {
            BlockKind::Paragraph
        }
    }
}
