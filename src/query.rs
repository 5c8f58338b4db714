use crate::error::{Error, Result};
use crate::variant::TooltipVariant;
use glob::Pattern;

/// Query tooltip variants by glob patterns (OR logic)
/// Returns variants whose name or resource refs match any of the provided patterns
pub fn query_variants(patterns: &[&str]) -> Result<Vec<TooltipVariant>> {
    // Compile all patterns first to fail fast on invalid patterns
    let compiled_patterns: Vec<Pattern> = patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| Error::InvalidGlobPattern(format!("'{}': {}", p, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    // Keep a variant if ANY pattern matches its name or either resource ref
    let matched = TooltipVariant::ALL
        .iter()
        .copied()
        .filter(|v| {
            compiled_patterns.iter().any(|pattern| {
                pattern.matches(v.name())
                    || pattern.matches(v.title_ref())
                    || pattern.matches(v.text_ref())
            })
        })
        .collect();

    Ok(matched)
}
