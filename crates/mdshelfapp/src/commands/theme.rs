use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::StorageBackend;
use crate::theme::Theme;

fn theme_result(theme: Theme) -> CmdResult {
    let mut result = CmdResult {
        theme: Some(theme),
        ..Default::default()
    };
    result.add_message(CmdMessage::info(format!(
        "Theme: {} (code style: {})",
        theme,
        theme.highlight_stylesheet()
    )));
    result
}

pub fn show<B: StorageBackend>(backend: &B) -> Result<CmdResult> {
    Ok(theme_result(Theme::load(backend)))
}

/// Switches between light and dark and persists the choice.
pub fn toggle<B: StorageBackend>(backend: &B) -> Result<CmdResult> {
    let theme = Theme::load(backend).toggle();
    theme.save(backend)?;
    Ok(theme_result(theme))
}
