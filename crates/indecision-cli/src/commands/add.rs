use colored::Colorize;

use super::{Context, plural};

pub fn run(ctx: &Context, text: &str) -> Result<(), String> {
    let mut manager = ctx.manager();
    manager.add_option(text).map_err(|e| e.to_string())?;

    let count = manager.len();
    println!("Added \"{}\"", text.trim());
    println!("  {}", format!("{count} option{}", plural(count)).dimmed());
    Ok(())
}
