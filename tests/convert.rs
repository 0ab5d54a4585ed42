//! End-to-end conversion tests (Markdown → Notion block JSON).

use md2notion::{Block, CitationMode, Config, RichSpan, Style, convert, convert_with_config, parse};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

fn to_value(markdown: &str) -> Value {
    serde_json::to_value(convert(markdown)).unwrap()
}

fn text(content: &str) -> Value {
    json!({ "type": "text", "text": { "content": content } })
}

#[rstest]
#[case("")]
#[case(" \n\t\n   ")]
fn blank_input_converts_to_empty_array(#[case] input: &str) {
    assert_eq!(to_value(input), json!([]));
}

#[rstest]
#[case("hello world")]
#[case("line one\nline two\n\nline three")]
#[case("  leading spaces kept\nends with punctuation!")]
fn unmarked_lines_are_single_span_paragraphs(#[case] input: &str) {
    let expected: Vec<Value> = input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            json!({
                "object": "block",
                "type": "paragraph",
                "paragraph": { "rich_text": [text(line)] }
            })
        })
        .collect();
    assert_eq!(to_value(input), Value::Array(expected));
}

#[test]
fn heading_one() {
    assert_eq!(
        to_value("# Title"),
        json!([{
            "object": "block",
            "type": "heading_1",
            "heading_1": { "rich_text": [text("Title")] }
        }])
    );
}

#[test]
fn nested_inline_styles_inside_bold() {
    assert_eq!(
        to_value("**bold *and* code `x`**"),
        json!([{
            "object": "block",
            "type": "paragraph",
            "paragraph": {
                "rich_text": [
                    {
                        "type": "text",
                        "text": { "content": "bold " },
                        "annotations": { "bold": true }
                    },
                    {
                        "type": "text",
                        "text": { "content": "and" },
                        "annotations": { "bold": true, "italic": true }
                    },
                    {
                        "type": "text",
                        "text": { "content": " code " },
                        "annotations": { "bold": true }
                    },
                    {
                        "type": "text",
                        "text": { "content": "x" },
                        "annotations": { "bold": true, "code": true }
                    }
                ]
            }
        }])
    );
}

#[test]
fn equation_block() {
    assert_eq!(
        to_value("$$\na=b\n$$"),
        json!([{
            "object": "block",
            "type": "equation",
            "equation": { "expression": "a=b" }
        }])
    );
}

#[test]
fn code_block() {
    assert_eq!(
        to_value("```py\nprint(1)\n```"),
        json!([{
            "object": "block",
            "type": "code",
            "code": { "rich_text": [text("print(1)")], "language": "py" }
        }])
    );
}

#[test]
fn divider() {
    assert_eq!(
        to_value("---"),
        json!([{ "object": "block", "type": "divider", "divider": {} }])
    );
}

#[test]
fn unterminated_code_fence_keeps_trailing_content() {
    let records = convert("```\nlet a = 1;\n\nlet b = 2;");
    assert_eq!(records.len(), 1);
    assert_eq!(
        serde_json::to_value(&records[0]).unwrap(),
        json!({
            "object": "block",
            "type": "code",
            "code": {
                "rich_text": [text("let a = 1;\n\nlet b = 2;")],
                "language": "plain text"
            }
        })
    );
}

#[rstest]
#[case("# **Bold** heading", "Bold heading")]
#[case("- item with `code`", "item with code")]
#[case("1. step $x^2$ done", "step x^2 done")]
#[case("> *quoted* words", "quoted words")]
fn span_literals_rebuild_stripped_line(#[case] input: &str, #[case] expected: &str) {
    let blocks = parse(input);
    let spans = blocks[0].spans().unwrap();
    let rebuilt: String = spans.iter().map(RichSpan::as_str).collect();
    assert_eq!(rebuilt, expected);
}

#[test]
fn mixed_document() {
    let markdown = "\
# Notes

Intro with $e^{i\\pi}$ inline.

- first
* second
2. numbered
> quote

```rust
fn main() {}
```
$$E = mc^2$$
----
";
    let blocks = parse(markdown);
    assert_eq!(
        blocks,
        vec![
            Block::Heading {
                level: 1,
                content: vec![RichSpan::text("Notes", Style::default())],
            },
            Block::Paragraph {
                content: vec![
                    RichSpan::text("Intro with ", Style::default()),
                    RichSpan::equation("e^{i\\pi}", Style::default()),
                    RichSpan::text(" inline.", Style::default()),
                ],
            },
            Block::BulletItem {
                content: vec![RichSpan::text("first", Style::default())],
            },
            Block::BulletItem {
                content: vec![RichSpan::text("second", Style::default())],
            },
            Block::NumberedItem {
                content: vec![RichSpan::text("numbered", Style::default())],
            },
            Block::Quote {
                content: vec![RichSpan::text("quote", Style::default())],
            },
            Block::CodeBlock {
                language: "rust".to_string(),
                content: "fn main() {}".to_string(),
            },
            Block::Equation {
                expression: "E = mc^2".to_string(),
            },
            Block::Divider,
        ]
    );
}

#[test]
fn citations_are_stripped_when_marker_present() {
    let markdown = "[cite_start]The sky is blue.[cite: 3, 4]";
    assert_eq!(
        to_value(markdown),
        json!([{
            "object": "block",
            "type": "paragraph",
            "paragraph": { "rich_text": [text("The sky is blue.")] }
        }])
    );
}

#[test]
fn citations_kept_when_disabled() {
    let mut config = Config::compiled_default();
    config.citations.mode = CitationMode::Never;
    let records = convert_with_config("[cite_start]x[cite: 1]", &config);
    assert_eq!(
        serde_json::to_value(&records).unwrap()[0]["paragraph"]["rich_text"][0]["text"]["content"],
        json!("[cite_start]x[cite: 1]")
    );
}

#[test]
fn conversion_is_deterministic() {
    let markdown = "# a\n**b** *c* `d` $e$\n```\nf";
    assert_eq!(convert(markdown), convert(markdown));
}

#[test]
fn compact_json_keeps_field_order() {
    let mut config = Config::compiled_default();
    config.output.pretty = false;
    assert_eq!(
        md2notion::convert_to_json("---\n`x`", &config).unwrap(),
        concat!(
            r#"[{"object":"block","type":"divider","divider":{}},"#,
            r#"{"object":"block","type":"paragraph","paragraph":{"rich_text":"#,
            r#"[{"type":"text","text":{"content":"x"},"annotations":{"code":true}}]}}]"#
        )
    );
}
