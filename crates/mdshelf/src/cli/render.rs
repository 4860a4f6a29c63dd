//! Turns command results into terminal text.
//!
//! Every function here returns a `String`; printing is left to `commands.rs` so the
//! layouts can be tested without a terminal.

use super::styles::{CATEGORY, ERROR, INDEX, MUTED, SUCCESS, TAG, TIME, TITLE, WARNING};
use mdshelfapp::commands::{CmdMessage, MessageLevel, NavEntry};
use mdshelfapp::format::{format_date, preview};
use mdshelfapp::index::DisplayDoc;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const COL_INDEX: usize = 5;
const COL_CATEGORY: usize = 14;
const COL_DATE: usize = 10;
const ELLIPSIS: char = '…';

/// Truncates `text` to `width` display columns and pads it with spaces up to `width`.
///
/// Widths are measured in terminal columns, so CJK titles line up with ASCII ones.
fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;

    if text.width() > width {
        let budget = width.saturating_sub(1);
        for c in text.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > budget {
                break;
            }
            out.push(c);
            used += w;
        }
        if width > 0 {
            out.push(ELLIPSIS);
            used += 1;
        }
    } else {
        out.push_str(text);
        used = text.width();
    }

    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

fn tags_line(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

fn doc_row(dd: &DisplayDoc) -> String {
    let tags = tags_line(&dd.doc.tags);
    let tags_width = if tags.is_empty() { 0 } else { tags.width() + 2 };
    let fixed = COL_INDEX + COL_CATEGORY + COL_DATE + 4;
    let title_width = LINE_WIDTH.saturating_sub(fixed + tags_width).max(10);

    let mut line = format!(
        "{} {}  {}  {}",
        INDEX.apply_to(format!("{:>4}.", dd.index)),
        TITLE.apply_to(fit(&dd.doc.title, title_width)),
        CATEGORY.apply_to(fit(&dd.doc.category, COL_CATEGORY)),
        TIME.apply_to(format_date(&dd.doc.updated_at)),
    );
    if !tags.is_empty() {
        line.push_str("  ");
        line.push_str(&TAG.apply_to(tags).to_string());
    }
    line
}

/// One row per document, each followed by an indented preview line.
pub fn render_list(docs: &[DisplayDoc], preview_length: usize) -> String {
    let mut out = String::new();
    for dd in docs {
        out.push_str(&doc_row(dd));
        out.push('\n');
        let text = preview(&dd.doc.content, preview_length)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if !text.is_empty() {
            out.push_str(&" ".repeat(COL_INDEX + 1));
            out.push_str(&MUTED.apply_to(text).to_string());
            out.push('\n');
        }
    }
    out
}

/// Compact rows without previews, for documents a command just touched.
pub fn render_affected(docs: &[DisplayDoc]) -> String {
    let mut out = String::new();
    for dd in docs {
        out.push_str(&doc_row(dd));
        out.push('\n');
    }
    out
}

pub fn render_nav(entries: &[NavEntry]) -> String {
    let name_width = entries.iter().map(|e| e.name.width()).max().unwrap_or(0);
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            "{}  {}\n",
            fit(&entry.name, name_width),
            MUTED.apply_to(entry.count)
        ));
    }
    out
}

/// Header with metadata followed by the full Markdown source.
pub fn render_document(dd: &DisplayDoc) -> String {
    let doc = &dd.doc;
    let mut out = format!(
        "{} {}\n",
        INDEX.apply_to(format!("{}.", dd.index)),
        TITLE.apply_to(&doc.title)
    );
    out.push_str(&format!(
        "{}  {}",
        CATEGORY.apply_to(&doc.category),
        TIME.apply_to(format!(
            "created {} · updated {}",
            format_date(&doc.created_at),
            format_date(&doc.updated_at)
        ))
    ));
    if !doc.tags.is_empty() {
        out.push_str("  ");
        out.push_str(&TAG.apply_to(tags_line(&doc.tags)).to_string());
    }
    out.push_str(&format!("\n{}\n\n", MUTED.apply_to(format!("id: {}", doc.id))));
    out.push_str(&doc.content);
    out.push('\n');

    if !doc.images.is_empty() {
        out.push('\n');
        out.push_str(&MUTED.apply_to("Images:").to_string());
        out.push('\n');
        for image in &doc.images {
            out.push_str(&format!(
                "  {} {}\n",
                image.new_path,
                MUTED.apply_to(format!("(was {})", image.original_path))
            ));
        }
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.clone(),
            MessageLevel::Success => SUCCESS.apply_to(&message.content).to_string(),
            MessageLevel::Warning => WARNING.apply_to(&message.content).to_string(),
            MessageLevel::Error => ERROR.apply_to(&message.content).to_string(),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdshelfapp::model::{Document, DocumentFields, ImageRef};

    fn display(title: &str, content: &str, tags: &str, index: usize) -> DisplayDoc {
        let fields = DocumentFields::new(title, content)
            .with_category("notes")
            .with_tags_input(tags);
        DisplayDoc {
            doc: Document::new(fields),
            index,
        }
    }

    #[test]
    fn test_fit_pads_short_text() {
        assert_eq!(fit("abc", 5), "abc  ");
    }

    #[test]
    fn test_fit_truncates_by_display_width() {
        let out = fit("布局完全指南", 7);
        assert_eq!(out.width(), 7);
        assert!(out.starts_with("布局完"));
        assert!(out.contains(ELLIPSIS));
    }

    #[test]
    fn test_list_shows_index_title_tags_and_preview() {
        let docs = vec![
            display("First", "# Heading\n\nSome **bold** text", "a, b", 1),
            display("Second", "plain", "", 2),
        ];
        let out = console::strip_ansi_codes(&render_list(&docs, 150)).to_string();

        assert!(out.contains("   1. First"));
        assert!(out.contains("#a #b"));
        assert!(out.contains("Heading Some bold text"));
        assert!(out.contains("   2. Second"));
        assert!(out.contains("notes"));
    }

    #[test]
    fn test_list_preview_is_truncated() {
        let docs = vec![display("T", &"x".repeat(40), "", 1)];
        let out = console::strip_ansi_codes(&render_list(&docs, 10)).to_string();
        assert!(out.contains(&format!("{}...", "x".repeat(10))));
    }

    #[test]
    fn test_affected_has_no_preview() {
        let docs = vec![display("Only row", "body text", "", 1)];
        let out = console::strip_ansi_codes(&render_affected(&docs)).to_string();
        assert_eq!(out.lines().count(), 1);
        assert!(!out.contains("body text"));
    }

    #[test]
    fn test_nav_aligns_counts() {
        let entries = vec![
            NavEntry {
                name: "CSS".into(),
                count: 1,
            },
            NavEntry {
                name: "技术笔记".into(),
                count: 2,
            },
        ];
        let out = console::strip_ansi_codes(&render_nav(&entries)).to_string();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "CSS       1");
        assert_eq!(lines[1], "技术笔记  2");
    }

    #[test]
    fn test_document_shows_content_and_images() {
        let mut dd = display("Doc", "![a](assets/images/a.png)", "x", 4);
        dd.doc.images = vec![ImageRef {
            original_path: "./a.png".into(),
            new_path: "assets/images/a.png".into(),
            alt: "a".into(),
            image_name: "a.png".into(),
        }];
        let out = console::strip_ansi_codes(&render_document(&dd)).to_string();

        assert!(out.starts_with("4. Doc\n"));
        assert!(out.contains("#x"));
        assert!(out.contains(&format!("id: {}", dd.doc.id)));
        assert!(out.contains("![a](assets/images/a.png)\n"));
        assert!(out.contains("(was ./a.png)"));
    }

    #[test]
    fn test_messages_keep_order() {
        let messages = vec![
            CmdMessage::warning("careful"),
            CmdMessage::success("done"),
        ];
        let out = console::strip_ansi_codes(&render_messages(&messages)).to_string();
        assert_eq!(out, "careful\ndone\n");
    }
}
