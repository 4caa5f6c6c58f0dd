//! The assistant's light markup: `**bold**`, `*italic*`, `` `code` ``, bare
//! URLs, `• ` bullet lines, blank-line paragraphs.
//!
//! [`parse_message`] turns raw text into paragraphs of styled spans. The chat
//! window draws those directly; [`format_message`] renders them as an HTML
//! fragment. Span text is kept raw and escaped only when HTML is written, so
//! text from the knowledge base or from a user cannot inject tags or
//! attributes.

use once_cell::sync::Lazy;
use regex::Regex;

const PARAGRAPH_BREAK: &str = "</p><p>";
const LINE_BREAK: &str = "<br>";
const LIST_OPEN: &str = r#"<ul class="chat-list">"#;
const LIST_CLOSE: &str = "</ul>";
pub const BULLET: &str = "• ";

// Alternatives are tried left to right, so `**` is bold before it is italic.
// A URL ends at whitespace or `<`.
static INLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*(?P<strong>.*?)\*\*|\*(?P<em>.*?)\*|`(?P<code>.*?)`|(?P<link>https?://[^\s<]+)")
        .expect("inline pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Strong,
    Emphasis,
    Code,
    Link,
}

/// A run of text with one style; markers are already stripped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub style: Style,
    pub text: String,
}

impl Span {
    pub fn new(style: Style, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(Vec<Span>),
    /// A line that started with `• `, bullet removed
    Bullet(Vec<Span>),
}

impl Line {
    pub fn spans(&self) -> &[Span] {
        match self {
            Line::Text(spans) | Line::Bullet(spans) => spans,
        }
    }
}

pub type Paragraph = Vec<Line>;

/// Splits one line into styled spans
pub fn inline_spans(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in INLINE.captures_iter(line) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            spans.push(Span::new(Style::Plain, &line[last..whole.start()]));
        }

        let span = if let Some(m) = caps.name("strong") {
            Span::new(Style::Strong, m.as_str())
        } else if let Some(m) = caps.name("em") {
            Span::new(Style::Emphasis, m.as_str())
        } else if let Some(m) = caps.name("code") {
            Span::new(Style::Code, m.as_str())
        } else {
            Span::new(Style::Link, whole.as_str())
        };
        spans.push(span);
        last = whole.end();
    }

    if last < line.len() {
        spans.push(Span::new(Style::Plain, &line[last..]));
    }
    spans
}

fn parse_line(line: &str) -> Line {
    match line.strip_prefix(BULLET) {
        Some(item) => Line::Bullet(inline_spans(item)),
        None => Line::Text(inline_spans(line)),
    }
}

/// Paragraphs are separated by a blank line, lines by a single newline
pub fn parse_message(raw: &str) -> Vec<Paragraph> {
    raw.replace("\r\n", "\n")
        .split("\n\n")
        .map(|paragraph| paragraph.split('\n').map(parse_line).collect())
        .collect()
}

/// Escapes the characters that are structural in HTML
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn push_spans(out: &mut String, spans: &[Span]) {
    for span in spans {
        let text = escape_html(&span.text);
        match span.style {
            Style::Plain => out.push_str(&text),
            Style::Strong => out.push_str(&format!("<strong>{}</strong>", text)),
            Style::Emphasis => out.push_str(&format!("<em>{}</em>", text)),
            Style::Code => out.push_str(&format!(r#"<code class="chat-code">{}</code>"#, text)),
            Style::Link => out.push_str(&format!(
                r#"<a href="{0}" target="_blank" rel="noopener noreferrer">{0}</a>"#,
                text
            )),
        }
    }
}

/// Renders assistant markup as an HTML fragment meant to sit inside `<p>`.
///
/// Each run of bullet lines becomes one `<ul>`; line breaks next to a list
/// are dropped. Not idempotent: a second pass escapes the tags produced by
/// the first.
pub fn format_message(raw: &str) -> String {
    let mut html = String::with_capacity(raw.len() * 2);

    for (p, paragraph) in parse_message(raw).iter().enumerate() {
        if p > 0 {
            html.push_str(PARAGRAPH_BREAK);
        }

        let mut in_list = false;
        for (i, line) in paragraph.iter().enumerate() {
            match line {
                Line::Bullet(spans) => {
                    if !in_list {
                        html.push_str(LIST_OPEN);
                        in_list = true;
                    }
                    html.push_str("<li>");
                    push_spans(&mut html, spans);
                    html.push_str("</li>");
                }
                Line::Text(spans) => {
                    if in_list {
                        html.push_str(LIST_CLOSE);
                        in_list = false;
                    } else if i > 0 {
                        html.push_str(LINE_BREAK);
                    }
                    push_spans(&mut html, spans);
                }
            }
        }
        if in_list {
            html.push_str(LIST_CLOSE);
        }
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{templates, Topic};
    use crate::i18n::Language;

    #[test]
    fn test_inline_markup() {
        assert_eq!(format_message("**Hi**"), "<strong>Hi</strong>");
        assert_eq!(format_message("*soft*"), "<em>soft</em>");
        assert_eq!(
            format_message("run `cargo`"),
            r#"run <code class="chat-code">cargo</code>"#
        );
        assert_eq!(
            format_message("**bold** and *it*"),
            "<strong>bold</strong> and <em>it</em>"
        );
    }

    #[test]
    fn test_italic_and_code_become_spans() {
        assert_eq!(
            inline_spans("*soft* and `code`"),
            vec![
                Span::new(Style::Emphasis, "soft"),
                Span::new(Style::Plain, " and "),
                Span::new(Style::Code, "code"),
            ]
        );
    }

    #[test]
    fn test_bold_wins_over_italic_and_links_are_found() {
        assert_eq!(
            inline_spans("**Apple Music**: https://music.apple.com/jp"),
            vec![
                Span::new(Style::Strong, "Apple Music"),
                Span::new(Style::Plain, ": "),
                Span::new(Style::Link, "https://music.apple.com/jp"),
            ]
        );
        assert_eq!(
            inline_spans("see https://nexutha.com for more"),
            vec![
                Span::new(Style::Plain, "see "),
                Span::new(Style::Link, "https://nexutha.com"),
                Span::new(Style::Plain, " for more"),
            ]
        );
    }

    #[test]
    fn test_plain_line_is_one_span() {
        assert_eq!(
            inline_spans("Email: runa.yasu@icloud.com"),
            vec![Span::new(Style::Plain, "Email: runa.yasu@icloud.com")]
        );
        assert!(inline_spans("").is_empty());
    }

    #[test]
    fn test_parse_splits_paragraphs_and_bullets() {
        let paragraphs = parse_message("**Values**\n• Quality\n• *Speed*\n\nEnd");
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(
            paragraphs[0],
            vec![
                Line::Text(vec![Span::new(Style::Strong, "Values")]),
                Line::Bullet(vec![Span::new(Style::Plain, "Quality")]),
                Line::Bullet(vec![Span::new(Style::Emphasis, "Speed")]),
            ]
        );
        assert_eq!(paragraphs[1], vec![Line::Text(vec![Span::new(Style::Plain, "End")])]);
    }

    #[test]
    fn test_rendered_answer_parses_without_markers() {
        let raw = templates::render(Topic::Music, Language::En);
        for paragraph in parse_message(&raw) {
            for line in paragraph {
                for span in line.spans() {
                    if span.style != Style::Code {
                        assert!(!span.text.contains("**"), "markers left in {:?}", span);
                    }
                }
            }
        }
    }

    #[test]
    fn test_paragraphs_and_line_breaks() {
        assert_eq!(format_message("a\n\nb\nc"), "a</p><p>b<br>c");
        assert_eq!(format_message("a\r\nb"), "a<br>b");
    }

    #[test]
    fn test_urls_become_links_and_stop_at_line_break() {
        assert_eq!(
            format_message("Visit https://nexutha.com\nnow"),
            r#"Visit <a href="https://nexutha.com" target="_blank" rel="noopener noreferrer">https://nexutha.com</a><br>now"#
        );
    }

    #[test]
    fn test_contiguous_bullets_share_one_list() {
        assert_eq!(
            format_message("Values:\n• A\n• B\nEnd"),
            r#"Values:<ul class="chat-list"><li>A</li><li>B</li></ul>End"#
        );
    }

    #[test]
    fn test_separate_runs_get_separate_lists() {
        assert_eq!(
            format_message("• A\n\n• B"),
            r#"<ul class="chat-list"><li>A</li></ul></p><p><ul class="chat-list"><li>B</li></ul>"#
        );
    }

    #[test]
    fn test_bullet_with_bold_label() {
        assert_eq!(
            format_message("• **Email**: x"),
            r#"<ul class="chat-list"><li><strong>Email</strong>: x</li></ul>"#
        );
    }

    #[test]
    fn test_markup_in_input_is_escaped() {
        assert_eq!(
            format_message("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(format_message("**<b>**"), "<strong>&lt;b&gt;</strong>");
    }

    #[test]
    fn test_url_cannot_break_out_of_href() {
        let html = format_message(r#"https://evil.example/"onmouseover="x"#);
        assert!(html.contains(r#"href="https://evil.example/&quot;onmouseover=&quot;x""#));
        assert!(!html.contains(r#""onmouseover"#));
    }

    #[test]
    fn test_plain_text_is_idempotent() {
        let plain = "Hello from NEXUTHA 2024";
        let once = format_message(plain);
        assert_eq!(once, plain);
        assert_eq!(format_message(&once), once);
    }

    #[test]
    fn test_rendered_answer_has_lists_and_links() {
        let html = format_message(&templates::render(Topic::Contact, Language::En));
        assert!(html.contains(r#"<ul class="chat-list"><li>Email: runa.yasu@icloud.com</li>"#));
        assert!(html.contains(r#"<a href="https://nexutha.com""#));
        assert!(!html.contains("**"));
    }
}
