//! Lookup example for persisted tooltip state
//!
//! This example rehydrates a tooltip variant from an id passed on the
//! command line, the way a caller would restore "which tooltip was last
//! shown" state.

use bstv::TooltipVariant;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let raw_id = if args.len() > 1 {
        &args[1]
    } else {
        eprintln!("Usage: {} <variant id>", args[0]);
        eprintln!("Example: {} 2", args[0]);
        return Ok(());
    };

    let id: u32 = raw_id.parse()?;
    let variant = TooltipVariant::try_from(id)?;

    println!("id {} is {}", id, variant);
    println!("  title resource: {}", variant.title_ref());
    println!("  text resource:  {}", variant.text_ref());

    Ok(())
}
