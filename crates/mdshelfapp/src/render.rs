//! Markdown to HTML, with code blocks handed to a [`Highlighter`].
//!
//! Parsing and HTML generation are pulldown-cmark's. The only thing this module adds is
//! the code-block seam: instead of emitting the block text itself, every fenced or
//! indented block is passed to the highlighter and its output is wrapped in
//! `<pre><code class="language-…">`.

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use pulldown_cmark_escape::{escape_html_body_text, FmtWriter};

/// Turns the text of one code block into HTML.
pub trait Highlighter {
    /// `lang` is the first word of the fence info string, if any.
    /// The returned HTML is inserted as-is between `<code>` tags.
    fn highlight(&self, lang: Option<&str>, code: &str) -> String;
}

/// Escapes the code without any markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, _lang: Option<&str>, code: &str) -> String {
        escape_body_text(code)
    }
}

/// Escapes `&`, `<`, `>` and `"` for use in attributes and element bodies.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Writing into a String cannot fail.
    let _ = pulldown_cmark_escape::escape_html(FmtWriter(&mut out), text);
    out
}

/// Escapes only `&`, `<` and `>`, which is all element text needs.
pub(crate) fn escape_body_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let _ = escape_html_body_text(FmtWriter(&mut out), text);
    out
}

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

fn code_block_html(lang: Option<&str>, code: &str, highlighter: &dyn Highlighter) -> String {
    let body = highlighter.highlight(lang, code);
    match lang {
        Some(lang) => format!(
            "<pre><code class=\"language-{}\">{}</code></pre>\n",
            escape_html(lang),
            body
        ),
        None => format!("<pre><code>{}</code></pre>\n", body),
    }
}

/// Renders `markdown` to HTML.
pub fn render_markdown(markdown: &str, highlighter: &dyn Highlighter) -> String {
    let mut events: Vec<Event> = Vec::new();
    // Language and collected text of the code block being read, if any
    let mut block: Option<(Option<String>, String)> = None;

    for event in Parser::new_ext(markdown, options()) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(str::to_string),
                    CodeBlockKind::Indented => None,
                };
                block = Some((lang, String::new()));
            }
            Event::Text(text) if block.is_some() => {
                if let Some((_, code)) = block.as_mut() {
                    code.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((lang, code)) = block.take() {
                    let html = code_block_html(lang.as_deref(), &code, highlighter);
                    events.push(Event::Html(CowStr::from(html)));
                }
            }
            other => events.push(other),
        }
    }

    let mut output = String::new();
    html::push_html(&mut output, events.into_iter());
    output
}
