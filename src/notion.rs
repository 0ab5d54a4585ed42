//! Notion wire format for parsed blocks.
//!
//! Field names and nesting follow the public block object schema of the
//! Notion API (`2022-06-28`). Every [`Block`] maps to exactly one
//! [`BlockRecord`].

use serde::Serialize;

use crate::block::{Block, RichSpan, Style};
use crate::config::Config;

/// A Notion block object, ready to embed in a `children` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockRecord {
    object: &'static str,
    #[serde(flatten)]
    pub body: BlockBody,
}

impl BlockRecord {
    pub fn new(body: BlockBody) -> Self {
        Self {
            object: "block",
            body,
        }
    }
}

/// Block payload, tagged by `type` with a payload field of the same name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockBody {
    #[serde(rename = "heading_1")]
    Heading1 { heading_1: RichTextBody },
    #[serde(rename = "heading_2")]
    Heading2 { heading_2: RichTextBody },
    #[serde(rename = "heading_3")]
    Heading3 { heading_3: RichTextBody },
    Paragraph { paragraph: RichTextBody },
    BulletedListItem { bulleted_list_item: RichTextBody },
    NumberedListItem { numbered_list_item: RichTextBody },
    Quote { quote: RichTextBody },
    Divider { divider: EmptyBody },
    Code { code: CodeBody },
    Equation { equation: EquationBody },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichTextBody {
    pub rich_text: Vec<RichText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBody {
    pub rich_text: Vec<RichText>,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquationBody {
    pub expression: String,
}

/// Serializes as `{}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyBody {}

/// One entry of a `rich_text` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichText {
    Text {
        text: TextContent,
        #[serde(skip_serializing_if = "Annotations::is_empty")]
        annotations: Annotations,
    },
    Equation {
        equation: EquationBody,
        #[serde(skip_serializing_if = "Annotations::is_empty")]
        annotations: Annotations,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextContent {
    pub content: String,
}

/// Style flags. Only flags that are set are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Annotations {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub code: bool,
}

impl Annotations {
    pub fn is_empty(&self) -> bool {
        !(self.bold || self.italic || self.code)
    }
}

impl From<Style> for Annotations {
    fn from(style: Style) -> Self {
        Self {
            bold: style.bold,
            italic: style.italic,
            code: style.code,
        }
    }
}

impl From<&RichSpan> for RichText {
    fn from(span: &RichSpan) -> Self {
        let annotations = span.style().into();
        match span {
            RichSpan::Text { content, .. } => RichText::Text {
                text: TextContent {
                    content: content.clone(),
                },
                annotations,
            },
            RichSpan::Equation { expression, .. } => RichText::Equation {
                equation: EquationBody {
                    expression: expression.clone(),
                },
                annotations,
            },
        }
    }
}

/// Convert blocks to Notion block records
pub fn blocks_to_records(blocks: &[Block], config: &Config) -> Vec<BlockRecord> {
    blocks
        .iter()
        .map(|block| BlockRecord::new(block_body(block, config)))
        .collect()
}

fn block_body(block: &Block, config: &Config) -> BlockBody {
    match block {
        Block::Heading { level, content } => {
            let heading = rich_text_body(content);
            match *level {
                1 => BlockBody::Heading1 { heading_1: heading },
                2 => BlockBody::Heading2 { heading_2: heading },
                _ => BlockBody::Heading3 { heading_3: heading },
            }
        }
        Block::Paragraph { content } => BlockBody::Paragraph {
            paragraph: rich_text_body(content),
        },
        Block::BulletItem { content } => BlockBody::BulletedListItem {
            bulleted_list_item: rich_text_body(content),
        },
        Block::NumberedItem { content } => BlockBody::NumberedListItem {
            numbered_list_item: rich_text_body(content),
        },
        Block::Quote { content } => BlockBody::Quote {
            quote: rich_text_body(content),
        },
        Block::Divider => BlockBody::Divider {
            divider: EmptyBody {},
        },
        Block::CodeBlock { language, content } => {
            let language = if language.is_empty() {
                config.code.default_language.clone()
            } else {
                language.clone()
            };
            BlockBody::Code {
                code: CodeBody {
                    rich_text: vec![RichText::Text {
                        text: TextContent {
                            content: content.clone(),
                        },
                        annotations: Annotations::default(),
                    }],
                    language,
                },
            }
        }
        Block::Equation { expression } => BlockBody::Equation {
            equation: EquationBody {
                expression: expression.clone(),
            },
        },
    }
}

fn rich_text_body(spans: &[RichSpan]) -> RichTextBody {
    RichTextBody {
        rich_text: spans.iter().map(RichText::from).collect(),
    }
}
