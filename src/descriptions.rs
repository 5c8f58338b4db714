//! Tooltip variant descriptions module
//!
//! This module contains a database of descriptions for the Shields tooltip
//! variants. Descriptions are stored in a static HashMap for efficient lookup.

use crate::variant::TooltipVariant;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Static lookup table for tooltip variant descriptions
///
/// Add new descriptions here to include them in JSON array output.
///
/// # Writing Good Descriptions
/// - Describe what the tooltip tells the user, not when the UI shows it
/// - Mention the Shields action the copy refers to
/// - Keep descriptions concise but informative
/// - Use clear, non-technical language when possible
static VARIANT_DESCRIPTIONS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

/// Get the description for a variant name (returns static string reference)
///
/// Internal function that returns `Option<&'static str>` for efficient lookup.
pub(crate) fn get_variant_description_static(name: &str) -> Option<&'static str> {
    VARIANT_DESCRIPTIONS
        .get_or_init(|| {
            HashMap::from([
                (
                    "one_time_ads_tracker_blocked",
                    "Introductory notice shown the first time Shields blocks ads or \
              trackers on a site. The copy points the user at the Shields icon in the \
              address bar, where the blocked items are counted and Shields can be \
              turned off for the site.",
                ),
                (
                    "video_ads_blocked",
                    "Tells the user that Shields blocked the ads inside a video they \
              are watching, so playback continues without interruptions.",
                ),
                (
                    "ads_tracker_blocked",
                    "Summarizes the ads and trackers Shields has blocked on the \
              current site. Trackers are third-party scripts that follow browsing \
              activity across websites; blocking them improves both privacy and page \
              load times.",
                ),
                (
                    "https_upgrade",
                    "Tells the user that Shields upgraded the connection from HTTP to \
              HTTPS, so traffic to the site is encrypted in transit.",
                ),
            ])
        })
        .get(name)
        .copied()
}

/// Get the description for a tooltip variant
///
/// Returns `None` if the variant has no description yet. Every shipped variant
/// is expected to have one; the test below keeps the table exhaustive.
pub fn get_variant_description(variant: TooltipVariant) -> Option<&'static str> {
    get_variant_description_static(variant.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_has_a_description() {
        for variant in TooltipVariant::ALL {
            assert!(
                get_variant_description(variant).is_some(),
                "missing description for {}",
                variant
            );
        }
    }

    #[test]
    fn test_unknown_name_has_no_description() {
        assert_eq!(get_variant_description_static("popup_blocked"), None);
    }
}
