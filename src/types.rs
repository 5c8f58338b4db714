use crate::descriptions::get_variant_description;
use crate::variant::TooltipVariant;
use serde::Serialize;
use std::collections::HashMap;

/// Main output structure for the tooltip catalog
/// This is a type alias for the name-keyed HashMap to output at root level
pub type Catalog = HashMap<String, serde_json::Value>;

/// Representation for array output format
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub id: u32,
    pub title: &'static str,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl CatalogEntry {
    /// Build the array-format entry for a variant, description included
    pub fn new(variant: TooltipVariant) -> Self {
        CatalogEntry {
            name: variant.name(),
            id: variant.id(),
            title: variant.title_ref(),
            text: variant.text_ref(),
            description: get_variant_description(variant),
        }
    }
}
