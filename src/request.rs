//! Request bodies for the two Notion endpoints that take converted blocks.
//!
//! Only the JSON bodies live here. Sending them (auth header, transport,
//! status handling) is the caller's job.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::notion::{BlockRecord, TextContent};

/// Value for the `Notion-Version` header the bodies are shaped for.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Body for `POST /v1/pages`: a new child page holding the blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePageRequest {
    pub parent: PageParent,
    pub properties: PageProperties,
    pub children: Vec<BlockRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageParent {
    pub page_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageProperties {
    pub title: TitleProperty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleProperty {
    pub title: Vec<TitleText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleText {
    pub text: TextContent,
}

impl CreatePageRequest {
    pub fn new(
        parent_page_id: &str,
        title: &str,
        children: Vec<BlockRecord>,
    ) -> Result<Self> {
        let page_id = require("page_id", parent_page_id)?;
        let title = require("title", title)?;
        Ok(Self {
            parent: PageParent { page_id },
            properties: PageProperties {
                title: TitleProperty {
                    title: vec![TitleText {
                        text: TextContent { content: title },
                    }],
                },
            },
            children,
        })
    }
}

/// Body for `PATCH /v1/blocks/{page_id}/children`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppendBlocksRequest {
    pub children: Vec<BlockRecord>,
}

impl AppendBlocksRequest {
    pub fn new(children: Vec<BlockRecord>) -> Self {
        Self { children }
    }

    /// Endpoint path for appending to `page_id`.
    pub fn path(page_id: &str) -> Result<String> {
        let page_id = require("page_id", page_id)?;
        Ok(format!("/v1/blocks/{page_id}/children"))
    }
}

/// Reject blank values; non-blank ones are kept exactly as given.
fn require(field: &'static str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::MissingField(field));
    }
    Ok(value.to_string())
}
