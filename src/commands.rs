use crate::cli;
use bstv::{query_variants, Catalog, CatalogEntry, TooltipVariant};

/// List all tooltip variants with their ids
pub fn list_variants() -> Result<(), Box<dyn std::error::Error>> {
    let summaries: Vec<serde_json::Value> = TooltipVariant::ALL
        .iter()
        .map(|v| {
            serde_json::json!({
                "name": v.name(),
                "id": v.id(),
            })
        })
        .collect();

    let json = serde_json::to_string_pretty(&summaries)?;
    println!("{}", json);
    Ok(())
}

/// View the tooltip catalog, optionally filtered or narrowed to one entry
pub fn view_catalog(
    query_patterns: &[&str],
    get: Option<String>,
    output_type: cli::OutputType,
) -> Result<(), Box<dyn std::error::Error>> {
    // Handle --get mode: single entry retrieval by name or decimal id
    if let Some(get_key) = get {
        let variant = lookup_variant(&get_key).map_err(|e| {
            anyhow::anyhow!(
                "Failed to look up '{}': {}. Use 'bstv list' to see available variants.",
                get_key,
                e
            )
        })?;

        let json = serde_json::to_string_pretty(&CatalogEntry::new(variant))?;
        println!("{}", json);
        return Ok(());
    }

    // Apply queries if provided
    let variants: Vec<TooltipVariant> = if !query_patterns.is_empty() {
        query_variants(query_patterns)
            .map_err(|e| anyhow::anyhow!("Failed to apply query: {}", e))?
    } else {
        TooltipVariant::ALL.to_vec()
    };

    let json = match output_type {
        cli::OutputType::JsonObject => {
            let catalog: Catalog = variants
                .iter()
                .map(|v| {
                    (
                        v.name().to_string(),
                        serde_json::json!({
                            "id": v.id(),
                            "title": v.title_ref(),
                            "text": v.text_ref(),
                        }),
                    )
                })
                .collect();
            serde_json::to_string_pretty(&catalog)?
        }
        cli::OutputType::JsonArray => {
            let entries: Vec<CatalogEntry> =
                variants.iter().copied().map(CatalogEntry::new).collect();
            serde_json::to_string_pretty(&entries)?
        }
    };

    println!("{}", json);
    Ok(())
}

/// Resolve a --get key: decimal id first, then snake_case name
fn lookup_variant(key: &str) -> bstv::Result<TooltipVariant> {
    if let Ok(id) = key.parse::<u32>() {
        return TooltipVariant::try_from(id);
    }
    TooltipVariant::from_name(key)
}
