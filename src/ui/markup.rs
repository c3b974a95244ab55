//! Job description markup to terminal blocks.
//!
//! Descriptions arrive as trusted HTML. The terminal cannot show markup, so
//! the fragment is walked once and reduced to a flat list of headings,
//! paragraphs and bullets with collapsed whitespace. Inline formatting is
//! dropped; `script` and `style` content is skipped.

use scraper::{ElementRef, Html};
use std::mem;

/// A structural unit of a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    Paragraph,
    Bullet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

impl Block {
    #[must_use]
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Parses `html` into display blocks.
///
/// # Examples
///
/// ```
/// use zjobs::ui::markup::{parse_description, Block, BlockKind};
///
/// let blocks = parse_description("<h3>Role</h3><p>Build <b>fast</b> tools.</p><ul><li>Rust</li></ul>");
/// assert_eq!(
///     blocks,
///     vec![
///         Block::new(BlockKind::Heading, "Role"),
///         Block::new(BlockKind::Paragraph, "Build fast tools."),
///         Block::new(BlockKind::Bullet, "Rust"),
///     ]
/// );
/// ```
#[must_use]
pub fn parse_description(html: &str) -> Vec<Block> {
    if html.trim().is_empty() {
        return Vec::new();
    }

    let fragment = Html::parse_fragment(html);
    let mut builder = BlockBuilder::default();
    builder.walk(fragment.root_element());
    builder.flush();

    tracing::trace!(blocks = builder.blocks.len(), "parsed description markup");
    builder.blocks
}

struct BlockBuilder {
    blocks: Vec<Block>,
    current: String,
    kind: BlockKind,
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self {
            blocks: Vec::new(),
            current: String::new(),
            kind: BlockKind::Paragraph,
        }
    }
}

impl BlockBuilder {
    fn walk(&mut self, element: ElementRef<'_>) {
        for child in element.children() {
            if let Some(text) = child.value().as_text() {
                self.current.push_str(text);
                continue;
            }
            let Some(child) = ElementRef::wrap(child) else {
                continue;
            };

            match child.value().name() {
                "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => self.block(child, BlockKind::Heading),
                "li" => self.block(child, BlockKind::Bullet),
                "p" | "div" | "section" | "article" | "blockquote" | "pre" | "ul" | "ol"
                | "table" | "tr" => self.block(child, self.kind),
                "br" => self.flush(),
                "script" | "style" | "head" | "title" => {}
                _ => self.walk(child),
            }
        }
    }

    fn block(&mut self, element: ElementRef<'_>, kind: BlockKind) {
        self.flush();
        let outer = mem::replace(&mut self.kind, kind);
        self.walk(element);
        self.flush();
        self.kind = outer;
    }

    fn flush(&mut self) {
        let text = self.current.split_whitespace().collect::<Vec<_>>().join(" ");
        self.current.clear();
        if !text.is_empty() {
            self.blocks.push(Block::new(self.kind, text));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_one_paragraph() {
        assert_eq!(
            parse_description("  We are   hiring.\n"),
            vec![Block::new(BlockKind::Paragraph, "We are hiring.")]
        );
        assert!(parse_description("   ").is_empty());
    }

    #[test]
    fn paragraphs_inside_list_items_stay_bullets() {
        let blocks = parse_description("<ul><li><p>Own the API</p></li><li>Ship <i>weekly</i></li></ul>");

        assert_eq!(
            blocks,
            vec![
                Block::new(BlockKind::Bullet, "Own the API"),
                Block::new(BlockKind::Bullet, "Ship weekly"),
            ]
        );
    }

    #[test]
    fn line_breaks_split_paragraphs_and_scripts_are_skipped() {
        let blocks = parse_description("<div>First line<br>Second line<script>alert(1)</script></div>");

        assert_eq!(
            blocks,
            vec![
                Block::new(BlockKind::Paragraph, "First line"),
                Block::new(BlockKind::Paragraph, "Second line"),
            ]
        );
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(
            parse_description("<p>R&amp;D &lt;team&gt;</p>"),
            vec![Block::new(BlockKind::Paragraph, "R&D <team>")]
        );
    }
}
