//! The closed set of Shields tooltip variants
//!
//! Shields is the browser's ad- and tracker-blocking feature. Each variant
//! names one tooltip the UI can show to explain a blocking action or upgrade
//! event, and bundles a stable numeric id with the two string-resource keys
//! (title and body text) that the localization catalog resolves to user-facing
//! copy. This crate never resolves those keys itself.

use crate::error::{Error, Result};

/// One Shields tooltip message, with its id and string-resource keys
///
/// The set is closed and fixed at compile time, so the accessors are total
/// functions with no failure mode. Ids are stable wire values that external
/// callers persist (e.g. which tooltip was last shown) and rehydrate through
/// [`TooltipVariant::from_id`] or `TryFrom<u32>`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum TooltipVariant {
    /// First-time notice that ads or trackers were blocked on a page
    OneTimeAdsTrackerBlocked,
    /// Video ads were blocked
    VideoAdsBlocked,
    /// Running tally of blocked ads and trackers
    AdsTrackerBlocked,
    /// The connection was upgraded to HTTPS
    HttpsUpgrade,
}

/// Catalog record backing one variant
struct VariantRecord {
    id: u32,
    title: &'static str,
    text: &'static str,
}

/// Constant catalog table, indexed by variant ordinal
///
/// Ids are contiguous from 0 and must stay in sync with the variant order
/// above; the integration tests pin both properties.
const CATALOG: [VariantRecord; 4] = [
    VariantRecord {
        id: 0,
        title: "tooltip_title_1",
        text: "tooltip_text_1",
    },
    VariantRecord {
        id: 1,
        title: "tooltip_title_2",
        text: "tooltip_text_2",
    },
    VariantRecord {
        id: 2,
        title: "tooltip_title_3",
        text: "tooltip_text_3",
    },
    VariantRecord {
        id: 3,
        title: "tooltip_title_4",
        text: "tooltip_text_4",
    },
];

impl TooltipVariant {
    /// All variants, in id order
    pub const ALL: [TooltipVariant; 4] = [
        TooltipVariant::OneTimeAdsTrackerBlocked,
        TooltipVariant::VideoAdsBlocked,
        TooltipVariant::AdsTrackerBlocked,
        TooltipVariant::HttpsUpgrade,
    ];

    fn record(self) -> &'static VariantRecord {
        &CATALOG[self as usize]
    }

    /// Stable numeric identifier, unique per variant
    pub fn id(self) -> u32 {
        self.record().id
    }

    /// String-resource key for the tooltip title
    pub fn title_ref(self) -> &'static str {
        self.record().title
    }

    /// String-resource key for the tooltip body text
    pub fn text_ref(self) -> &'static str {
        self.record().text
    }

    /// snake_case name, as used by the CLI and in serialized state
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Look up a variant by its persisted id
    ///
    /// Returns `None` for ids outside the catalog. Callers that want an error
    /// value instead can use `TryFrom<u32>`.
    pub fn from_id(id: u32) -> Option<TooltipVariant> {
        TooltipVariant::ALL.iter().copied().find(|v| v.id() == id)
    }

    /// Look up a variant by its snake_case name (case-insensitive)
    pub fn from_name(name: &str) -> Result<TooltipVariant> {
        name.parse()
            .map_err(|_| Error::UnknownVariant(name.to_string()))
    }
}

impl TryFrom<u32> for TooltipVariant {
    type Error = Error;

    fn try_from(id: u32) -> Result<TooltipVariant> {
        TooltipVariant::from_id(id).ok_or(Error::UnknownVariantId { id })
    }
}
