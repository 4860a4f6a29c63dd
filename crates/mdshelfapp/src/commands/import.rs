use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::format::{format_file_size, preview};
use crate::images::IMAGE_DIR;
use crate::import::{FileOutcome, ImportedFile, IMPORT_PREVIEW_LENGTH};
use crate::index::index_visible;
use crate::store::doc_store::ImportDefaults;
use crate::store::{DocumentStore, StorageBackend};

/// Imports the loaded files from `outcomes` as one batch.
///
/// Unsupported and unreadable files are reported as messages and skipped. Fails only
/// when no file could be loaded at all, or when the batch could not be saved.
pub fn run<B: StorageBackend>(
    store: &mut DocumentStore<B>,
    outcomes: Vec<FileOutcome>,
    defaults: &ImportDefaults,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut files: Vec<ImportedFile> = Vec::new();

    for outcome in outcomes {
        match outcome {
            FileOutcome::Loaded(file) => {
                result.add_message(CmdMessage::info(describe_file(&file)));
                files.push(file);
            }
            FileOutcome::Unsupported(name) => {
                result.add_message(CmdMessage::warning(format!(
                    "{}: {}",
                    name,
                    ShelfError::UnsupportedFileType(extension_of(&name))
                )));
            }
            FileOutcome::Failed(name, e) => {
                result.add_message(CmdMessage::error(format!("{}: {}", name, e)));
            }
        }
    }

    if files.is_empty() {
        return Err(ShelfError::Validation(
            "no Markdown files to import".to_string(),
        ));
    }

    let report = store.import_batch(&files, defaults)?;

    for (name, e) in &report.skipped {
        result.add_message(CmdMessage::warning(format!("{} skipped: {}", name, e)));
    }

    let imported = report.imported.len();
    let images = report.image_count();
    if imported > 0 {
        let mut summary = format!("Imported {} document(s)", imported);
        if images > 0 {
            summary.push_str(&format!(
                ", {} image reference(s) now point to {}/. Place the image files there.",
                images, IMAGE_DIR
            ));
        }
        result.add_message(CmdMessage::success(summary));
    }

    let imported_refs: Vec<_> = report.imported.iter().collect();
    let mut affected = index_visible(store.documents(), &imported_refs);
    affected.sort_by_key(|d| d.index);
    Ok(result.with_affected_docs(affected))
}

fn extension_of(name: &str) -> String {
    match name.rfind('.') {
        Some(dot) if dot > 0 => name[dot..].to_string(),
        _ => name.to_string(),
    }
}

fn describe_file(file: &ImportedFile) -> String {
    let mut line = format!("{} ({})", file.name, format_file_size(file.size));
    if !file.images.is_empty() {
        line.push_str(&format!(", {} image reference(s)", file.images.len()));
    }
    let snippet = preview(&file.content, IMPORT_PREVIEW_LENGTH);
    if !snippet.is_empty() {
        line.push_str(": ");
        line.push_str(&snippet.replace('\n', " "));
    }
    line
}
