//! Rewrites local image links in imported Markdown.
//!
//! Imported files usually reference images relative to where they were written
//! (`![logo](../img/logo.png)`). Those paths mean nothing once the text lives on the
//! shelf, so every local link is pointed at `assets/images/<basename>` and the rewrite
//! is recorded as an [`ImageRef`]. Remote (`http://`, `https://`) and inline (`data:`)
//! images are left untouched.
//!
//! The rewrite is idempotent: the basename of `assets/images/x.png` is `x.png`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::model::ImageRef;

/// Directory that rewritten image links point into.
pub const IMAGE_DIR: &str = "assets/images";

static IMAGE_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("image link pattern is valid")
});

const EXTERNAL_PREFIXES: [&str; 3] = ["http://", "https://", "data:"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    pub content: String,
    pub images: Vec<ImageRef>,
}

fn is_external(path: &str) -> bool {
    EXTERNAL_PREFIXES.iter().any(|p| path.starts_with(p))
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Rewrites every local `![alt](path)` in `markdown`.
///
/// `file_name` only identifies the source in log output.
pub fn rewrite_image_links(markdown: &str, file_name: &str) -> RewriteResult {
    let mut images = Vec::new();

    let content = IMAGE_LINK.replace_all(markdown, |caps: &Captures| {
        let alt = &caps[1];
        let path = &caps[2];

        if is_external(path) {
            return caps[0].to_string();
        }

        let image_name = basename(path);
        let new_path = format!("{}/{}", IMAGE_DIR, image_name);
        images.push(ImageRef {
            original_path: path.to_string(),
            new_path: new_path.clone(),
            alt: alt.to_string(),
            image_name: image_name.to_string(),
        });

        format!("![{}]({})", alt, new_path)
    });

    if !images.is_empty() {
        log::debug!(
            "{}: rewrote {} image link(s) into {}",
            file_name,
            images.len(),
            IMAGE_DIR
        );
    }

    RewriteResult {
        content: content.into_owned(),
        images,
    }
}
