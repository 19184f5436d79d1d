//! # mdgen-markdown: markdown parsing and HTML rendering for mdgen
//!
//! This crate implements the conversion pipeline used by
//! [mdgen](https://github.com/mdgen/mdgen) to turn markdown documents into
//! HTML page bodies: block segmentation, block classification, inline-span
//! tokenization, and recursive rendering into an HTML node tree that
//! serializes to markup text.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdgen_markdown::to_html;
//!
//! let html = to_html("# Hello, world!").unwrap();
//! assert_eq!(html, "<div><h1>Hello, world!</h1></div>");
//! ```
//!
//! ### Working with the node tree
//!
//! ```rust
//! use mdgen_markdown::{to_html_node, extract_title};
//!
//! let document = "# Post\n\nSome **bold** text.";
//! let tree = to_html_node(document).unwrap();
//!
//! assert_eq!(extract_title(document).unwrap(), "Post");
//! assert_eq!(
//!     tree.to_html().unwrap(),
//!     "<div><h1>Post</h1><p>Some <b>bold</b> text.</p></div>"
//! );
//! ```
//!
//! The pipeline is a pure function of its input: rendering allocates a fresh
//! tree per document, holds no caches and no shared state, and fails fast —
//! a malformed document (for example an unclosed `**` span) aborts with an
//! [`Error`] instead of producing partial output, so documents can be
//! processed in parallel by the caller with no coordination.
//!
//! Supported markdown is deliberately small: ATX headings, paragraphs,
//! fenced code blocks, quotes, flat ordered/unordered lists, and
//! bold/italic/code/link/image inline spans. There is no nesting, no
//! character escaping, and no HTML sanitization; input is trusted.
mod block;
mod error;
mod html;
mod inline;
mod render;
mod text;

pub use block::{BlockKind, split_blocks};
pub use error::{Error, Result};
pub use html::{Attributes, HtmlNode, Leaf, Parent};
pub use inline::{extract_images, extract_links, tokenize};
pub use render::{extract_title, to_html, to_html_node};
pub use text::{TextKind, TextNode};
