//! Lightweight article markup.
//!
//! Posts are stored with a handful of markers: `#`/`##`/`###` headings,
//! `**strong**`, `*emphasis*`, `- ` bullets, `| a | b |` table rows, blank
//! lines between paragraphs and a few decorative emoji. [`parse`] turns the
//! text into a [`Document`] tree and [`Document::to_html`] renders it; the two
//! stages never look at each other's output. A line that already opens a
//! block-level HTML element is kept verbatim, so rendered output fed back in
//! comes out unchanged.

use ammonia::{Builder, UrlRelative};
use once_cell::sync::Lazy;
use regex::Regex;

const EMOJI_GLYPHS: [&str; 7] = ["🌳", "📘", "🌲", "⚙️", "🚫", "🌍", "🧩"];

static STRONG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("strong pattern"));
static EMPHASIS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").expect("emphasis pattern"));
static EMOJI_RE: Lazy<Regex> = Lazy::new(|| {
    let alternatives = EMOJI_GLYPHS
        .iter()
        .map(|g| regex::escape(g))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternatives).expect("emoji pattern")
});
static RAW_BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^<(h[1-6]|ul|ol|table|p|div|blockquote|pre)[\s>]").expect("raw block pattern")
});
static SEPARATOR_CELL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^:?-+:?$").expect("separator pattern"));

#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    Emoji(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, content: Vec<Inline> },
    List(Vec<Vec<Inline>>),
    Table(Vec<Vec<Vec<Inline>>>),
    Line(Vec<Inline>),
    Raw(String),
}

impl Block {
    fn is_structural(&self) -> bool {
        !matches!(self, Block::Line(_))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
}

enum LineKind<'a> {
    Heading(u8, &'a str),
    Item(&'a str),
    Row(&'a str),
    Raw(&'a str),
    Text(&'a str),
}

fn classify(line: &str) -> LineKind<'_> {
    if let Some(rest) = line.strip_prefix("### ") {
        return LineKind::Heading(3, rest);
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return LineKind::Heading(2, rest);
    }
    if let Some(rest) = line.strip_prefix("# ") {
        return LineKind::Heading(1, rest);
    }
    if let Some(rest) = line.strip_prefix("- ") {
        return LineKind::Item(rest);
    }
    let trimmed = line.trim();
    if RAW_BLOCK_RE.is_match(trimmed) {
        return LineKind::Raw(trimmed);
    }
    if trimmed.len() >= 2 && trimmed.starts_with('|') && trimmed.ends_with('|') {
        return LineKind::Row(trimmed);
    }
    LineKind::Text(line)
}

fn split_cells(row: &str) -> Vec<&str> {
    row[1..row.len() - 1].split('|').map(str::trim).collect()
}

fn is_separator_row(cells: &[&str]) -> bool {
    cells.iter().all(|c| SEPARATOR_CELL_RE.is_match(c))
}

/// Parses article text into a document tree.
pub fn parse(content: &str) -> Document {
    let normalized = content.replace("\r\n", "\n");

    let paragraphs = normalized
        .split("\n\n")
        .filter(|chunk| !chunk.trim().is_empty())
        .map(parse_paragraph)
        .collect();

    Document { paragraphs }
}

fn parse_paragraph(chunk: &str) -> Paragraph {
    let mut blocks: Vec<Block> = Vec::new();

    for line in chunk.split('\n').filter(|l| !l.trim().is_empty()) {
        match classify(line) {
            LineKind::Heading(level, text) => blocks.push(Block::Heading {
                level,
                content: parse_inlines(text),
            }),
            LineKind::Item(text) => {
                let item = parse_inlines(text);
                match blocks.last_mut() {
                    Some(Block::List(items)) => items.push(item),
                    _ => blocks.push(Block::List(vec![item])),
                }
            }
            LineKind::Row(row) => {
                let cells = split_cells(row);
                if is_separator_row(&cells) {
                    continue;
                }
                let row: Vec<Vec<Inline>> = cells.into_iter().map(parse_inlines).collect();
                match blocks.last_mut() {
                    Some(Block::Table(rows)) => rows.push(row),
                    _ => blocks.push(Block::Table(vec![row])),
                }
            }
            LineKind::Raw(html) => blocks.push(Block::Raw(html.to_string())),
            LineKind::Text(text) => blocks.push(Block::Line(parse_inlines(text))),
        }
    }

    Paragraph { blocks }
}

/// Strong spans are recognised before emphasis so `**` is never read as two
/// empty emphasis markers.
pub fn parse_inlines(text: &str) -> Vec<Inline> {
    split_by(&STRONG_RE, text, |inner| Inline::Strong(parse_emphasis(inner)), parse_emphasis)
}

fn parse_emphasis(text: &str) -> Vec<Inline> {
    split_by(&EMPHASIS_RE, text, |inner| Inline::Emphasis(parse_emoji(inner)), parse_emoji)
}

fn parse_emoji(text: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for m in EMOJI_RE.find_iter(text) {
        if m.start() > cursor {
            out.push(Inline::Text(text[cursor..m.start()].to_string()));
        }
        out.push(Inline::Emoji(m.as_str().to_string()));
        cursor = m.end();
    }
    if cursor < text.len() {
        out.push(Inline::Text(text[cursor..].to_string()));
    }
    out
}

fn split_by(
    re: &Regex,
    text: &str,
    wrap: impl Fn(&str) -> Inline,
    rest: impl Fn(&str) -> Vec<Inline>,
) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for caps in re.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > cursor {
            out.extend(rest(&text[cursor..whole.start()]));
        }
        out.push(wrap(inner.as_str()));
        cursor = whole.end();
    }
    if cursor < text.len() {
        out.extend(rest(&text[cursor..]));
    }
    out
}

impl Document {
    /// Renders the tree to HTML with the site's utility classes. Text is
    /// emitted as-is; [`content_to_html`] sanitizes the result.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for paragraph in &self.paragraphs {
            render_paragraph(paragraph, &mut html);
        }
        html
    }
}

fn render_paragraph(paragraph: &Paragraph, out: &mut String) {
    if paragraph.blocks.iter().any(Block::is_structural) {
        let mut previous_was_line = false;
        for block in &paragraph.blocks {
            let is_line = matches!(block, Block::Line(_));
            if is_line && previous_was_line {
                out.push_str("<br>");
            }
            render_block(block, out);
            previous_was_line = is_line;
        }
        return;
    }

    out.push_str(r#"<p class="mb-4 leading-relaxed">"#);
    for (i, block) in paragraph.blocks.iter().enumerate() {
        if i > 0 {
            out.push_str("<br>");
        }
        render_block(block, out);
    }
    out.push_str("</p>");
}

fn render_block(block: &Block, out: &mut String) {
    match block {
        Block::Heading { level, content } => {
            let class = match level {
                1 => "text-3xl font-bold mt-8 mb-4 text-gray-900",
                2 => "text-2xl font-bold mt-6 mb-3 text-gray-900",
                _ => "text-xl font-bold mt-5 mb-2 text-gray-900",
            };
            out.push_str(&format!(r#"<h{level} class="{class}">"#));
            render_inlines(content, out);
            out.push_str(&format!("</h{level}>"));
        }
        Block::List(items) => {
            out.push_str(r#"<ul class="list-disc ml-6 my-4">"#);
            for item in items {
                out.push_str(r#"<li class="ml-4 mb-2">"#);
                render_inlines(item, out);
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        Block::Table(rows) => {
            out.push_str(r#"<table class="min-w-full border-collapse border border-gray-300 my-6"><tbody>"#);
            for row in rows {
                out.push_str("<tr>");
                for cell in row {
                    out.push_str(r#"<td class="px-4 py-2 border border-gray-300">"#);
                    render_inlines(cell, out);
                    out.push_str("</td>");
                }
                out.push_str("</tr>");
            }
            out.push_str("</tbody></table>");
        }
        Block::Line(content) => render_inlines(content, out),
        Block::Raw(html) => out.push_str(html),
    }
}

fn render_inlines(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => out.push_str(text),
            Inline::Strong(inner) => {
                out.push_str(r#"<strong class="font-semibold">"#);
                render_inlines(inner, out);
                out.push_str("</strong>");
            }
            Inline::Emphasis(inner) => {
                out.push_str(r#"<em class="italic">"#);
                render_inlines(inner, out);
                out.push_str("</em>");
            }
            Inline::Emoji(glyph) => {
                out.push_str(r#"<span class="text-2xl mr-2">"#);
                out.push_str(glyph);
                out.push_str("</span>");
            }
        }
    }
}

/// Sanitizes rendered HTML, keeping class attributes and site-relative URLs.
pub fn sanitize_html(content: &str) -> String {
    Builder::default()
        .add_generic_attributes(&["class"])
        .link_rel(Some("nofollow noopener noreferrer"))
        .url_relative(UrlRelative::PassThrough)
        .clean(content)
        .to_string()
}

/// Parses, renders and sanitizes article content.
pub fn content_to_html(content: &str) -> String {
    sanitize_html(&parse(content).to_html())
}
