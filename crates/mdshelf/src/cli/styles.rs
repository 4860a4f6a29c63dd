//! Styles for the mdshelf CLI.
//!
//! Rendering code refers to styles by what the text *is* (a title, a timestamp, a tag),
//! never by color. Changing the look means editing this file only.
//!
//! `console` drops the escape codes when stdout is not a terminal, so piped output and
//! tests see plain text.

use console::Style;
use once_cell::sync::Lazy;

pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static CATEGORY: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static TAG: Lazy<Style> = Lazy::new(|| Style::new().magenta());
pub static TIME: Lazy<Style> = Lazy::new(|| Style::new().dim().italic());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red().bold());
