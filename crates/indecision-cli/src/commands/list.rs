use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::{Context, plural};

pub fn run(ctx: &Context) -> Result<(), String> {
    let manager = ctx.manager();
    let view = manager.snapshot();

    if let Some(hint) = view.empty_hint() {
        println!("  {hint}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Option"]);

    for (i, option) in view.options.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), option.clone()]);
    }

    println!("{table}");
    println!();
    println!("  {} option{}", view.options.len(), plural(view.options.len()));
    println!("  {}", ctx.store_path().display().to_string().dimmed());
    Ok(())
}
