use std::sync::LazyLock;

use regex_lite::Regex;

use crate::error::{Error, Result};
use crate::text::{TextKind, TextNode};

// Matches both `[label](url)` and `![label](url)`; the optional bang capture
// decides whether an occurrence is an image or a link, since the regex engine
// has no lookbehind.
static MEDIA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(!?)\[(.*?)\]\((.*?)\)").unwrap());

/// Splits a plain-text string into a sequence of formatted text nodes.
///
/// Delimiter passes run in a fixed order, code before bold before italic, so
/// that `*` and `**` inside inline code are never treated as formatting.
/// Images are extracted before links so that `![...]()` is never misread as
/// a link. Each pass rewrites only still-plain nodes; typed spans pass
/// through untouched, which also means nested formatting is unsupported.
pub fn tokenize(text: &str) -> Result<Vec<TextNode>> {
    let nodes = vec![TextNode::new(text, TextKind::Text)];
    let nodes = split_delimiter(nodes, "`", TextKind::Code)?;
    let nodes = split_delimiter(nodes, "**", TextKind::Bold)?;
    let nodes = split_delimiter(nodes, "*", TextKind::Italic)?;
    let nodes = split_media(nodes, TextKind::Image)?;
    split_media(nodes, TextKind::Link)
}

/// Returns the `(alt, url)` pairs of every image occurrence, in order of
/// appearance.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    extract_media(text, TextKind::Image)
}

/// Returns the `(anchor, url)` pairs of every link occurrence, in order of
/// appearance. Occurrences immediately preceded by `!` are images and are
/// not reported.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    extract_media(text, TextKind::Link)
}

// Splits plain nodes on the literal delimiter. A balanced delimiter yields an
// odd number of segments alternating plain/typed; empty segments are dropped
// so no empty plain node is ever emitted.
fn split_delimiter(nodes: Vec<TextNode>, delimiter: &str, kind: TextKind) -> Result<Vec<TextNode>> {
    let mut result = Vec::with_capacity(nodes.len());

    for node in nodes {
        if node.kind != TextKind::Text {
            result.push(node);
            continue;
        }

        let segments = node.text.split(delimiter).collect::<Vec<_>>();
        if segments.len() % 2 == 0 {
            return Err(Error::UnclosedDelimiter(delimiter.to_string()));
        }

        for (i, segment) in segments.iter().enumerate() {
            if segment.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                result.push(TextNode::new(*segment, TextKind::Text));
            } else {
                result.push(TextNode::new(*segment, kind));
            }
        }
    }

    Ok(result)
}

fn split_media(nodes: Vec<TextNode>, kind: TextKind) -> Result<Vec<TextNode>> {
    let mut result = Vec::with_capacity(nodes.len());

    for node in nodes {
        if node.kind != TextKind::Text {
            result.push(node);
            continue;
        }

        let occurrences = extract_media(&node.text, kind);
        if occurrences.is_empty() {
            result.push(node);
            continue;
        }

        let mut remainder = node.text.as_str();
        for (label, url) in &occurrences {
            let marker = match kind {
                TextKind::Image => format!("![{}]({})", label, url),
                _ => format!("[{}]({})", label, url),
            };
            let (before, after) = remainder
                .split_once(marker.as_str())
                .ok_or(Error::UnclosedSection)?;

            if !before.is_empty() {
                result.push(TextNode::new(before, TextKind::Text));
            }
            result.push(TextNode::with_url(label.as_str(), kind, url.as_str()));
            remainder = after;
        }

        if !remainder.is_empty() {
            result.push(TextNode::new(remainder, TextKind::Text));
        }
    }

    Ok(result)
}

fn extract_media(text: &str, kind: TextKind) -> Vec<(String, String)> {
    MEDIA_RE
        .captures_iter(text)
        .filter(|captures| {
            let is_image = &captures[1] == "!";
            match kind {
                TextKind::Image => is_image,
                _ => !is_image,
            }
        })
        .map(|captures| (captures[2].to_string(), captures[3].to_string()))
        .collect()
}
