// Integration tests for the Shields tooltip catalog
use bstv::{get_variant_description, query_variants, CatalogEntry, TooltipVariant};
use std::collections::HashSet;

#[test]
fn test_ids_are_unique() {
    let ids: HashSet<u32> = TooltipVariant::ALL.iter().map(|v| v.id()).collect();
    assert_eq!(ids.len(), TooltipVariant::ALL.len());
}

#[test]
fn test_ids_are_contiguous_from_zero() {
    let mut ids: Vec<u32> = TooltipVariant::ALL.iter().map(|v| v.id()).collect();
    ids.sort_unstable();
    let expected: Vec<u32> = (0..TooltipVariant::ALL.len() as u32).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_resource_refs_are_non_empty() {
    for variant in TooltipVariant::ALL {
        assert!(!variant.title_ref().is_empty());
        assert!(!variant.text_ref().is_empty());
    }
}

#[test]
fn test_catalog_literal_values() {
    let expected = [
        (
            TooltipVariant::OneTimeAdsTrackerBlocked,
            0,
            "tooltip_title_1",
            "tooltip_text_1",
        ),
        (
            TooltipVariant::VideoAdsBlocked,
            1,
            "tooltip_title_2",
            "tooltip_text_2",
        ),
        (
            TooltipVariant::AdsTrackerBlocked,
            2,
            "tooltip_title_3",
            "tooltip_text_3",
        ),
        (
            TooltipVariant::HttpsUpgrade,
            3,
            "tooltip_title_4",
            "tooltip_text_4",
        ),
    ];

    for (variant, id, title, text) in expected {
        assert_eq!(variant.id(), id);
        assert_eq!(variant.title_ref(), title);
        assert_eq!(variant.text_ref(), text);
    }
}

#[test]
fn test_accessors_are_referentially_stable() {
    for variant in TooltipVariant::ALL {
        assert_eq!(variant.id(), variant.id());
        assert_eq!(variant.title_ref(), variant.title_ref());
        assert_eq!(variant.text_ref(), variant.text_ref());
    }
}

#[test]
fn test_from_id_round_trip() {
    for variant in TooltipVariant::ALL {
        assert_eq!(TooltipVariant::from_id(variant.id()), Some(variant));
    }
    assert_eq!(TooltipVariant::from_id(TooltipVariant::ALL.len() as u32), None);
}

#[test]
fn test_name_round_trip() {
    for variant in TooltipVariant::ALL {
        assert_eq!(TooltipVariant::from_name(variant.name()).unwrap(), variant);
    }

    // Parse is case-insensitive; unknown names fail
    assert_eq!(
        TooltipVariant::from_name("Video_Ads_Blocked").unwrap(),
        TooltipVariant::VideoAdsBlocked
    );
    assert!(TooltipVariant::from_name("cookie_banner_blocked").is_err());
}

#[test]
fn test_serde_round_trip() {
    let serialized = serde_json::to_string(&TooltipVariant::HttpsUpgrade).unwrap();
    assert_eq!(serialized, "\"https_upgrade\"");

    let deserialized: TooltipVariant = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, TooltipVariant::HttpsUpgrade);
}

#[test]
fn test_persisted_last_shown_state_round_trip() {
    // External callers persist the last-shown tooltip id; a written state
    // file must rehydrate to the same variant.
    let state_dir = tempfile::TempDir::new().unwrap();
    let state_path = state_dir.path().join("shields_tooltip_state.json");

    let state = serde_json::json!({ "last_shown": TooltipVariant::HttpsUpgrade.id() });
    std::fs::write(&state_path, serde_json::to_string_pretty(&state).unwrap()).unwrap();

    let content = std::fs::read_to_string(&state_path).unwrap();
    let reread: serde_json::Value = serde_json::from_str(&content).unwrap();
    let last_shown = reread["last_shown"].as_u64().unwrap() as u32;

    assert_eq!(
        TooltipVariant::from_id(last_shown),
        Some(TooltipVariant::HttpsUpgrade)
    );
}

#[test]
fn test_query_matches_names_and_resource_refs() {
    let by_name = query_variants(&["one_time_*"]).unwrap();
    assert_eq!(by_name, vec![TooltipVariant::OneTimeAdsTrackerBlocked]);

    let by_ref = query_variants(&["tooltip_text_2"]).unwrap();
    assert_eq!(by_ref, vec![TooltipVariant::VideoAdsBlocked]);
}

#[test]
fn test_query_results_stay_in_id_order() {
    let matched = query_variants(&["https_upgrade", "*ads*"]).unwrap();
    let ids: Vec<u32> = matched.iter().map(|v| v.id()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}

#[test]
fn test_catalog_entries_carry_descriptions() {
    for variant in TooltipVariant::ALL {
        let entry = CatalogEntry::new(variant);
        assert_eq!(entry.name, variant.name());
        assert_eq!(entry.id, variant.id());
        assert_eq!(entry.description, get_variant_description(variant));
        assert!(entry.description.is_some());
    }
}
