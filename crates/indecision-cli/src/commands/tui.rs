//! Launch the interactive option picker.

use super::Context;

/// Load the saved options and hand them to the TUI.
pub fn run(ctx: &Context) -> Result<(), String> {
    crate::tui::run(ctx.manager())
}
