use std::sync::LazyLock;

use itertools::Itertools;
use regex_lite::Regex;

use crate::block::{BlockKind, split_blocks};
use crate::error::{Error, Result};
use crate::html::{HtmlNode, Parent};
use crate::inline::tokenize;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s(.*)").unwrap());

/// Renders a markdown document into an HTML node tree: a single `div` parent
/// holding one child per block, in document order.
pub fn to_html_node(document: &str) -> Result<HtmlNode> {
    let children = split_blocks(document)
        .into_iter()
        .map(|block| match BlockKind::classify(block) {
            BlockKind::Heading => parse_heading(block),
            BlockKind::Code => parse_code(block),
            BlockKind::Quote => parse_quote(block),
            BlockKind::UnorderedList => parse_unordered_list(block),
            BlockKind::OrderedList => parse_ordered_list(block),
            BlockKind::Paragraph => Ok(Parent::new("p", inline_children(block)?).into()),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Parent::new("div", children).into())
}

/// Renders a markdown document straight to its HTML body text.
pub fn to_html(document: &str) -> Result<String> {
    to_html_node(document)?.to_html()
}

/// Returns the text of the document's opening level-1 heading, used as the
/// page title. Only the first line qualifies; a missing or wrong-level
/// heading fails with [`Error::MissingTitle`].
pub fn extract_title(document: &str) -> Result<String> {
    TITLE_RE
        .captures(document)
        .map(|captures| captures[1].to_string())
        .ok_or(Error::MissingTitle)
}

fn inline_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(tokenize(text)?
        .iter()
        .map(|node| node.to_leaf().into())
        .collect())
}

fn parse_heading(block: &str) -> Result<HtmlNode> {
    // Classification guarantees 1-6 leading hashes followed by a space.
    let level = block.chars().take_while(|&c| c == '#').count();
    let text = block[level..].strip_prefix(' ').unwrap_or(&block[level..]);

    Ok(Parent::new(&format!("h{}", level), inline_children(text)?).into())
}

fn parse_code(block: &str) -> Result<HtmlNode> {
    let body = block
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(block);
    let body = body.strip_prefix('\n').unwrap_or(body);
    let code = Parent::new("code", inline_children(body)?);

    Ok(Parent::new("pre", vec![code.into()]).into())
}

// Quote content is joined into one inline run; there is no per-line
// structure inside the blockquote.
fn parse_quote(block: &str) -> Result<HtmlNode> {
    let text = block
        .lines()
        .map(|line| line.trim_start_matches(['>', ' ']))
        .join(" ");

    Ok(Parent::new("blockquote", inline_children(&text)?).into())
}

fn parse_unordered_list(block: &str) -> Result<HtmlNode> {
    let items = block
        .lines()
        .map(|line| {
            let item = line
                .strip_prefix("- ")
                .or_else(|| line.strip_prefix("* "))
                .unwrap_or(line);
            Ok(Parent::new("li", inline_children(item)?).into())
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Parent::new("ul", items).into())
}

fn parse_ordered_list(block: &str) -> Result<HtmlNode> {
    let items = block
        .lines()
        .map(|line| {
            // The numeric marker is dropped; its value never matters.
            let item = line.split_once(' ').map_or(line, |(_, rest)| rest);
            Ok(Parent::new("li", inline_children(item)?).into())
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Parent::new("ol", items).into())
}
