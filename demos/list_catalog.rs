//! Catalog listing example for the Shields tooltip variants
//!
//! This example walks the full tooltip catalog and displays each variant
//! with its id and string-resource keys.

use bstv::{get_variant_description, TooltipVariant};

fn main() {
    println!("{:-<72}", "");
    println!("{:<4} {:<30} {:<17} {:<17}", "Id", "Variant", "Title", "Text");
    println!("{:-<72}", "");

    for variant in TooltipVariant::ALL {
        println!(
            "{:<4} {:<30} {:<17} {:<17}",
            variant.id(),
            variant.name(),
            variant.title_ref(),
            variant.text_ref()
        );
    }

    println!("{:-<72}", "");

    for variant in TooltipVariant::ALL {
        if let Some(description) = get_variant_description(variant) {
            println!("\n{}:\n  {}", variant, description);
        }
    }
}
