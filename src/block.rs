/// Independent formatting flags carried by an inline span
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
}

impl Style {
    pub fn with_bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub fn with_italic(self) -> Self {
        Self {
            italic: true,
            ..self
        }
    }

    pub fn with_code(self) -> Self {
        Self { code: true, ..self }
    }
}

/// Inline text spans with formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RichSpan {
    Text { content: String, style: Style },
    /// Inline math. The expression is taken verbatim and never styled further.
    Equation { expression: String, style: Style },
}

impl RichSpan {
    pub fn text(content: impl Into<String>, style: Style) -> Self {
        RichSpan::Text {
            content: content.into(),
            style,
        }
    }

    pub fn equation(expression: impl Into<String>, style: Style) -> Self {
        RichSpan::Equation {
            expression: expression.into(),
            style,
        }
    }

    pub fn style(&self) -> Style {
        match self {
            RichSpan::Text { style, .. } | RichSpan::Equation { style, .. } => *style,
        }
    }

    /// Literal text of the span with all styling removed.
    pub fn as_str(&self) -> &str {
        match self {
            RichSpan::Text { content, .. } => content,
            RichSpan::Equation { expression, .. } => expression,
        }
    }
}

/// Block-level elements parsed from Markdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        /// Always 1, 2 or 3.
        level: u8,
        content: Vec<RichSpan>,
    },
    Paragraph {
        content: Vec<RichSpan>,
    },
    BulletItem {
        content: Vec<RichSpan>,
    },
    NumberedItem {
        content: Vec<RichSpan>,
    },
    Quote {
        content: Vec<RichSpan>,
    },
    Divider,
    CodeBlock {
        /// Empty when the fence carries no language tag.
        language: String,
        content: String,
    },
    Equation {
        expression: String,
    },
}

impl Block {
    /// Inline spans of text-bearing blocks, `None` for divider, code and equation.
    pub fn spans(&self) -> Option<&[RichSpan]> {
        match self {
            Block::Heading { content, .. }
            | Block::Paragraph { content }
            | Block::BulletItem { content }
            | Block::NumberedItem { content }
            | Block::Quote { content } => Some(content),
            Block::Divider | Block::CodeBlock { .. } | Block::Equation { .. } => None,
        }
    }
}
