use colored::Colorize;

use super::{Context, plural};

pub fn run(ctx: &Context, text: &str) -> Result<(), String> {
    let mut manager = ctx.manager();

    if manager.delete_option(text) == 0 {
        println!("  No option named \"{text}\"; nothing removed.");
        return Ok(());
    }

    let count = manager.len();
    println!("Removed \"{text}\"");
    println!("  {}", format!("{count} option{} left", plural(count)).dimmed());
    Ok(())
}
