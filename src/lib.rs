mod block;
mod citations;
mod config;
mod error;
mod inline;
mod notion;
mod parser;
mod request;

pub use block::{Block, RichSpan, Style};
pub use citations::strip_citations;
pub use config::{CitationMode, CitationsConfig, CodeConfig, Config, OutputConfig};
pub use error::{Error, Result};
pub use inline::parse_rich_text;
pub use notion::{
    Annotations, BlockBody, BlockRecord, CodeBody, EmptyBody, EquationBody, RichText,
    RichTextBody, TextContent,
};
pub use request::{AppendBlocksRequest, CreatePageRequest, NOTION_VERSION};

/// Parse markdown text into a vector of blocks.
pub fn parse(markdown: &str) -> Vec<Block> {
    parser::parse(markdown)
}

/// Convert markdown to Notion block records using default config.
pub fn convert(markdown: &str) -> Vec<BlockRecord> {
    convert_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to Notion block records with custom config.
pub fn convert_with_config(markdown: &str, config: &Config) -> Vec<BlockRecord> {
    let blocks = if citations::should_strip(markdown, config.citations.mode) {
        log::debug!("Stripping citation markers");
        parse(&strip_citations(markdown))
    } else {
        parse(markdown)
    };
    notion::blocks_to_records(&blocks, config)
}

/// Convert markdown to a JSON array of Notion blocks.
pub fn convert_to_json(markdown: &str, config: &Config) -> Result<String> {
    let records = convert_with_config(markdown, config);
    to_json(&records, config.output.pretty)
}

/// Serialize any request body or record list the way the CLI prints it.
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
