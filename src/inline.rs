use crate::block::{RichSpan, Style};

const BOLD: &str = "**";
const ITALIC: &str = "*";
const CODE: &str = "`";
const MATH: &str = "$";

/// Tokenize one line of block text into styled spans.
///
/// Recognizes `**bold**`, `*italic*`, `` `code` `` and `$math$`. Bold and
/// italic bodies are tokenized again with their flag merged in, so code and
/// math keep the surrounding emphasis. A delimiter without a closer takes the
/// rest of the line as its content.
///
/// Always returns at least one span: if nothing is produced (e.g. the input is
/// empty or just `**`), the input comes back as a single unstyled text span.
pub fn parse_rich_text(text: &str) -> Vec<RichSpan> {
    let spans = tokenize(text, Style::default());
    if spans.is_empty() {
        vec![RichSpan::text(text, Style::default())]
    } else {
        spans
    }
}

fn tokenize(text: &str, style: Style) -> Vec<RichSpan> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];

        // `**` before `*`, so `**x**` is never read as two italic runs
        if !style.bold && rest.starts_with(BOLD) {
            flush(&mut plain, style, &mut spans);
            let (body, consumed) = delimited(&rest[BOLD.len()..], BOLD);
            spans.extend(tokenize(body, style.with_bold()));
            i += BOLD.len() + consumed;
        } else if !style.italic && rest.starts_with(ITALIC) {
            flush(&mut plain, style, &mut spans);
            let (body, consumed) = delimited(&rest[ITALIC.len()..], ITALIC);
            spans.extend(tokenize(body, style.with_italic()));
            i += ITALIC.len() + consumed;
        } else if rest.starts_with(CODE) {
            flush(&mut plain, style, &mut spans);
            let (body, consumed) = delimited(&rest[CODE.len()..], CODE);
            spans.push(RichSpan::text(body, style.with_code()));
            i += CODE.len() + consumed;
        } else if rest.starts_with(MATH) && !rest[MATH.len()..].starts_with(MATH) {
            flush(&mut plain, style, &mut spans);
            let (body, consumed) = delimited(&rest[MATH.len()..], MATH);
            spans.push(RichSpan::equation(body, style));
            i += MATH.len() + consumed;
        } else {
            let Some(ch) = rest.chars().next() else {
                break;
            };
            plain.push(ch);
            i += ch.len_utf8();
        }
    }

    flush(&mut plain, style, &mut spans);
    spans
}

/// Split `rest` at the next `close`.
///
/// Returns the body and the number of bytes consumed, closer included. An
/// unterminated run consumes everything.
fn delimited<'a>(rest: &'a str, close: &str) -> (&'a str, usize) {
    match rest.find(close) {
        Some(end) => (&rest[..end], end + close.len()),
        None => (rest, rest.len()),
    }
}

fn flush(plain: &mut String, style: Style, spans: &mut Vec<RichSpan>) {
    if !plain.is_empty() {
        spans.push(RichSpan::text(std::mem::take(plain), style));
    }
}
