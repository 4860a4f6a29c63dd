//! # File Import Boundary
//!
//! Turns a list of paths into in-memory [`ImportedFile`] records ready for
//! [`crate::store::DocumentStore::import_batch`].
//!
//! Every path yields exactly one [`FileOutcome`], in submission order:
//!
//! - **Loaded**: the file was read and its image links rewritten.
//! - **Unsupported**: the extension is not one of the import extensions. Reported, not an
//!   error; the rest of the batch goes ahead.
//! - **Failed**: the file could not be read (missing, permissions).
//!
//! Text that is not valid UTF-8 is decoded lossily, with invalid bytes replaced by
//! `U+FFFD`, and still imported.
//!
//! Reads run on scoped threads, one handle per file, at most [`MAX_CONCURRENT_READS`] at a
//! time. If the OS refuses a thread the file is read on the calling thread instead. All
//! handles are joined before [`read_files`] returns, so callers only ever see a settled
//! list.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use crate::error::{Result, ShelfError};
use crate::images::rewrite_image_links;
use crate::model::ImageRef;

/// Extensions accepted by default, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = [".md", ".markdown", ".txt"];

/// Upper bound on reader threads alive at once.
pub const MAX_CONCURRENT_READS: usize = 16;

/// Length of the content preview shown for each selected file.
pub const IMPORT_PREVIEW_LENGTH: usize = 100;

/// A file read from disk, with its image links already rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedFile {
    pub name: String,
    pub size: u64,
    pub content: String,
    pub images: Vec<ImageRef>,
    pub original_content: String,
}

impl ImportedFile {
    /// Builds a record from raw text, as if it had been read from a file called `name`.
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        let name = name.into();
        let rewritten = rewrite_image_links(text, &name);
        Self {
            size: text.len() as u64,
            content: rewritten.content,
            images: rewritten.images,
            original_content: text.to_string(),
            name,
        }
    }
}

#[derive(Debug)]
pub enum FileOutcome {
    Loaded(ImportedFile),
    Unsupported(String),
    Failed(String, ShelfError),
}

impl FileOutcome {
    pub fn name(&self) -> &str {
        match self {
            FileOutcome::Loaded(file) => &file.name,
            FileOutcome::Unsupported(name) | FileOutcome::Failed(name, _) => name,
        }
    }

    pub fn loaded(&self) -> Option<&ImportedFile> {
        match self {
            FileOutcome::Loaded(file) => Some(file),
            _ => None,
        }
    }
}

fn strip_extension<'a>(name: &'a str, ext: &str) -> Option<&'a str> {
    let cut = name.len().checked_sub(ext.len())?;
    if !name.is_char_boundary(cut) {
        return None;
    }
    let (stem, suffix) = name.split_at(cut);
    suffix.eq_ignore_ascii_case(ext).then_some(stem)
}

/// Whether `name` ends with one of `extensions` (ASCII case-insensitive).
pub fn has_extension<S: AsRef<str>>(name: &str, extensions: &[S]) -> bool {
    extensions
        .iter()
        .any(|ext| strip_extension(name, ext.as_ref()).is_some())
}

/// Whether `name` has one of the default import extensions.
pub fn is_supported(name: &str) -> bool {
    has_extension(name, &SUPPORTED_EXTENSIONS)
}

/// Derives a document title from a file name by dropping one of `extensions`.
///
/// With the default extensions `notes.MD` becomes `notes`; `archive.tar` is returned
/// unchanged.
pub fn title_from_file_name<S: AsRef<str>>(name: &str, extensions: &[S]) -> String {
    extensions
        .iter()
        .filter_map(|ext| strip_extension(name, ext.as_ref()))
        .find(|stem| !stem.is_empty())
        .unwrap_or(name)
        .to_string()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn read_one(path: &Path, name: &str) -> Result<ImportedFile> {
    let bytes = fs::read(path)?;
    let size = bytes.len() as u64;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("{} is not valid UTF-8, replacing invalid bytes", name);
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    let mut file = ImportedFile::from_text(name, &text);
    file.size = size;
    Ok(file)
}

fn settle(name: String, read: Result<ImportedFile>) -> FileOutcome {
    match read {
        Ok(file) => FileOutcome::Loaded(file),
        Err(e) => {
            log::warn!("failed to read {}: {}", name, e);
            FileOutcome::Failed(name, e)
        }
    }
}

/// Reads `paths` concurrently and returns one outcome per path, in submission order.
pub fn read_files<S: AsRef<str>>(paths: &[PathBuf], extensions: &[S]) -> Vec<FileOutcome> {
    let mut outcomes = Vec::with_capacity(paths.len());
    for chunk in paths.chunks(MAX_CONCURRENT_READS) {
        outcomes.extend(read_chunk(chunk, extensions));
    }
    outcomes
}

fn read_chunk<S: AsRef<str>>(paths: &[PathBuf], extensions: &[S]) -> Vec<FileOutcome> {
    thread::scope(|scope| {
        let handles: Vec<_> = paths
            .iter()
            .map(|path| {
                let name = display_name(path);
                if !has_extension(&name, extensions) {
                    log::warn!("skipping {}: unsupported file type", name);
                    return Err(FileOutcome::Unsupported(name));
                }
                let reader_name = name.clone();
                let spawned = thread::Builder::new()
                    .spawn_scoped(scope, move || read_one(path, &reader_name));
                match spawned {
                    Ok(handle) => Ok((name, handle)),
                    Err(e) => {
                        log::debug!("no reader thread for {} ({}), reading inline", name, e);
                        let read = read_one(path, &name);
                        Err(settle(name, read))
                    }
                }
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle {
                Err(outcome) => outcome,
                Ok((name, handle)) => match handle.join() {
                    Ok(read) => settle(name, read),
                    Err(_) => FileOutcome::Failed(
                        name,
                        ShelfError::Api("file reader panicked".to_string()),
                    ),
                },
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_supported_ignores_case() {
        assert!(is_supported("a.md"));
        assert!(is_supported("A.MARKDOWN"));
        assert!(is_supported("notes.Txt"));
        assert!(!is_supported("image.png"));
        assert!(!is_supported("md"));
    }

    #[test]
    fn test_title_from_file_name() {
        let exts = &SUPPORTED_EXTENSIONS;
        assert_eq!(title_from_file_name("notes.md", exts), "notes");
        assert_eq!(title_from_file_name("Guide.MarkDown", exts), "Guide");
        assert_eq!(title_from_file_name("todo.txt", exts), "todo");
        assert_eq!(title_from_file_name("a.b.md", exts), "a.b");
        assert_eq!(title_from_file_name("archive.tar", exts), "archive.tar");
    }

    #[test]
    fn test_title_strips_configured_extension() {
        assert_eq!(title_from_file_name("notes.rst", &[".rst"]), "notes");
        assert_eq!(title_from_file_name("notes.rst", &SUPPORTED_EXTENSIONS), "notes.rst");
    }

    #[test]
    fn test_from_text_rewrites_images_and_keeps_original() {
        let file = ImportedFile::from_text("a.md", "![x](img/x.png)");
        assert_eq!(file.content, "![x](assets/images/x.png)");
        assert_eq!(file.original_content, "![x](img/x.png)");
        assert_eq!(file.images.len(), 1);
        assert_eq!(file.size, 15);
    }

    #[test]
    fn test_read_files_keeps_submission_order() {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();
        for name in ["c.md", "a.png", "b.txt", "missing.md"] {
            let path = dir.path().join(name);
            if name != "missing.md" {
                fs::write(&path, format!("# {}", name)).unwrap();
            }
            paths.push(path);
        }

        let outcomes = read_files(&paths, &SUPPORTED_EXTENSIONS);

        let names: Vec<&str> = outcomes.iter().map(|o| o.name()).collect();
        assert_eq!(names, vec!["c.md", "a.png", "b.txt", "missing.md"]);
        assert!(matches!(outcomes[0], FileOutcome::Loaded(_)));
        assert!(matches!(outcomes[1], FileOutcome::Unsupported(_)));
        assert!(matches!(outcomes[2], FileOutcome::Loaded(_)));
        assert!(matches!(outcomes[3], FileOutcome::Failed(_, ShelfError::Io(_))));
    }

    #[test]
    fn test_read_files_reports_size_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.md");
        fs::write(&path, "hello world").unwrap();

        let outcomes = read_files(&[path], &SUPPORTED_EXTENSIONS);
        let file = outcomes[0].loaded().unwrap();
        assert_eq!(file.size, 11);
        assert_eq!(file.content, "hello world");
    }

    #[test]
    fn test_read_files_custom_extensions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.md");
        fs::write(&path, "x").unwrap();

        let outcomes = read_files(&[path], &[".txt"]);
        assert!(matches!(outcomes[0], FileOutcome::Unsupported(_)));
    }

    #[test]
    fn test_non_utf8_file_is_decoded_lossily() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gbk.txt");
        fs::write(&path, [0xD6u8, 0xD0, 0xCE, 0xC4, 0x0A]).unwrap();

        let outcomes = read_files(&[path], &SUPPORTED_EXTENSIONS);
        let file = outcomes[0].loaded().unwrap();
        assert_eq!(file.size, 5);
        assert!(file.content.contains('\u{FFFD}'));
        assert!(file.content.ends_with('\n'));
    }

    #[test]
    fn test_batches_larger_than_reader_limit_keep_order() {
        let dir = TempDir::new().unwrap();
        let count = MAX_CONCURRENT_READS * 2 + 3;
        let paths: Vec<PathBuf> = (0..count)
            .map(|i| {
                let path = dir.path().join(format!("doc{}.md", i));
                fs::write(&path, format!("body {}", i)).unwrap();
                path
            })
            .collect();

        let outcomes = read_files(&paths, &SUPPORTED_EXTENSIONS);
        assert_eq!(outcomes.len(), count);
        for (i, outcome) in outcomes.iter().enumerate() {
            assert_eq!(outcome.loaded().unwrap().content, format!("body {}", i));
        }
    }
}
