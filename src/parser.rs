use std::str::Split;

use crate::block::Block;
use crate::inline::parse_rich_text;

const HEADING_MARKERS: [&str; 3] = ["# ", "## ", "### "];
const QUOTE_MARKER: &str = "> ";
const CODE_FENCE: &str = "```";
const MATH_FENCE: &str = "$$";

/// Parse markdown text into a list of blocks
pub fn parse(markdown: &str) -> Vec<Block> {
    let mut lines = Lines::new(markdown);
    let mut blocks = Vec::new();

    log::debug!("Starting block parse");

    while let Some(line) = lines.next() {
        if line.trim().is_empty() {
            continue;
        }

        let number = lines.line_number();
        let block = parse_block(line, &mut lines);
        log::debug!("Line {}: {}", number, block_kind(&block));
        blocks.push(block);
    }

    blocks
}

/// Forward-only line cursor.
struct Lines<'a> {
    inner: Split<'a, char>,
    consumed: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split('\n'),
            consumed: 0,
        }
    }

    /// 1-based number of the last line handed out.
    fn line_number(&self) -> usize {
        self.consumed
    }

    /// Consume lines up to and including the first one matching `is_close`.
    ///
    /// The closing line is dropped; the lines before it are joined with `\n`.
    /// Without a closing line everything left is consumed.
    fn take_until(&mut self, is_close: impl Fn(&str) -> bool) -> String {
        let start = self.consumed;
        let mut body = Vec::new();
        loop {
            match self.next() {
                Some(line) if is_close(line) => break,
                Some(line) => body.push(line),
                None => {
                    log::trace!("Fence opened at line {} runs to end of input", start);
                    break;
                }
            }
        }
        body.join("\n")
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let line = self.inner.next()?;
        self.consumed += 1;
        Some(line)
    }
}

fn parse_block(line: &str, lines: &mut Lines<'_>) -> Block {
    if let Some((level, text)) = heading(line) {
        Block::Heading {
            level,
            content: parse_rich_text(text),
        }
    } else if let Some(text) = bullet_item(line) {
        Block::BulletItem {
            content: parse_rich_text(text),
        }
    } else if let Some(text) = numbered_item(line) {
        Block::NumberedItem {
            content: parse_rich_text(text),
        }
    } else if line.starts_with(MATH_FENCE) {
        equation(line, lines)
    } else if let Some(info) = line.strip_prefix(CODE_FENCE) {
        let language = info.trim().to_string();
        let content = lines.take_until(|l| l.starts_with(CODE_FENCE));
        Block::CodeBlock { language, content }
    } else if let Some(text) = line.strip_prefix(QUOTE_MARKER) {
        Block::Quote {
            content: parse_rich_text(text),
        }
    } else if is_divider(line) {
        Block::Divider
    } else {
        Block::Paragraph {
            content: parse_rich_text(line),
        }
    }
}

fn heading(line: &str) -> Option<(u8, &str)> {
    HEADING_MARKERS
        .iter()
        .zip(1u8..)
        .find_map(|(marker, level)| line.strip_prefix(marker).map(|text| (level, text)))
}

fn bullet_item(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(['-', '*', '+'])?;
    strip_one_whitespace(rest)
}

fn numbered_item(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return None;
    }
    strip_one_whitespace(rest.strip_prefix('.')?)
}

fn strip_one_whitespace(text: &str) -> Option<&str> {
    let ch = text.chars().next().filter(|c| c.is_whitespace())?;
    Some(&text[ch.len_utf8()..])
}

fn equation(line: &str, lines: &mut Lines<'_>) -> Block {
    // Single-line form closes on the last `$$`; a closer at index 0 is the
    // opening marker itself, which starts the multi-line form.
    let expression = match line.rfind(MATH_FENCE) {
        Some(close) if close > 0 => line
            .get(MATH_FENCE.len()..close)
            .unwrap_or_default()
            .to_string(),
        _ => lines.take_until(|l| l.starts_with(MATH_FENCE)),
    };
    Block::Equation {
        expression: expression.trim().to_string(),
    }
}

fn is_divider(line: &str) -> bool {
    line.len() >= 3 && line.bytes().all(|b| b == b'-')
}

fn block_kind(block: &Block) -> &'static str {
    match block {
        Block::Heading { .. } => "heading",
        Block::Paragraph { .. } => "paragraph",
        Block::BulletItem { .. } => "bullet item",
        Block::NumberedItem { .. } => "numbered item",
        Block::Quote { .. } => "quote",
        Block::Divider => "divider",
        Block::CodeBlock { .. } => "code block",
        Block::Equation { .. } => "equation",
    }
}
