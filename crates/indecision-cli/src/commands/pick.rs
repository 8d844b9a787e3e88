use colored::Colorize;
use indecision_core::OptionError;

use super::Context;

pub fn run(ctx: &Context) -> Result<(), String> {
    let mut manager = ctx.manager();

    // Picking is disabled on an empty list, same as the TUI action.
    if !manager.has_options() {
        return Err(format!(
            "{}; add one with `indecision add <text>`",
            OptionError::EmptyList
        ));
    }

    let choice = manager.pick_random().map_err(|e| e.to_string())?;
    println!("{}", choice.bold());
    Ok(())
}
