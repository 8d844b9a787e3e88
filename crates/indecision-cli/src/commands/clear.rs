use super::{Context, plural};

pub fn run(ctx: &Context) -> Result<(), String> {
    let mut manager = ctx.manager();
    let removed = manager.len();
    manager.delete_all_options();

    if removed == 0 {
        println!("  Nothing to remove.");
    } else {
        println!("Removed {removed} option{}", plural(removed));
    }
    Ok(())
}
