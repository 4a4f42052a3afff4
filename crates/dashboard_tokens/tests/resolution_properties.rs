use dashboard_tokens::{
    compose, grid_gap_table, heading_size_table, resolve_mode, resolve_status, surface_table,
    ColorClass, Icon, PresentationOverrides, RoomFlags, RoomIndicator, SizeClass, Spacing,
    SurfaceLevel, Theme, ThemeMode, VariantKey, VariantTable,
};
use pretty_assertions::assert_eq;

const NOISE: &[&str] = &["", "_", "X_", "_17", "FAN_", "MOD", "off", "work"];

#[test]
fn error_marker_wins_whenever_no_earlier_marker_is_present() {
    for prefix in NOISE {
        for suffix in NOISE {
            let status = format!("{prefix}ERROR{suffix}");
            let resolved = resolve_status(Some(status.as_str()));
            assert_eq!(resolved.icon, Icon::WarningTriangle, "status {status}");
            assert_eq!(resolved.color, ColorClass::PrimaryBold, "status {status}");
            assert_eq!(resolved.label, status);
        }
    }
}

#[test]
fn earlier_marker_shadows_error_marker() {
    assert_eq!(resolve_status(Some("ERROR_WORK")).icon, Icon::Fire);
    assert_eq!(resolve_status(Some("STANDBY_ERROR")).icon, Icon::Hourglass);
}

#[test]
fn absent_status_differs_from_unmatched_only_in_label() {
    let absent = resolve_status(None);
    let empty = resolve_status(Some(""));
    let unmatched = resolve_status(Some("PURGE"));

    assert_eq!(absent, empty);
    assert_eq!(absent.label, "");
    assert_eq!((absent.icon, absent.color), (unmatched.icon, unmatched.color));
    assert_eq!(unmatched.label, "PURGE");
}

#[test]
fn mode_resolution_matches_priority_order() {
    assert_eq!(resolve_mode(true, true).label, "semi-automatic");
    assert_eq!(resolve_mode(true, false).label, "automatic");
    assert_eq!(resolve_mode(false, true).label, "manual");
    assert_eq!(resolve_mode(false, false).label, "manual");
}

#[test]
fn offline_suffix_hides_battery_suffixes() {
    for critical_battery in [false, true] {
        for low_battery in [false, true] {
            let flags = RoomFlags {
                offline: true,
                critical_battery,
                low_battery,
            };
            assert_eq!(RoomIndicator::from_flags(flags), RoomIndicator::Offline);
        }
    }
}

fn assert_unknown_equals_default<K: VariantKey, B: PartialEq + std::fmt::Debug>(
    table: &VariantTable<K, B>,
) {
    let default = table.resolve(Some(table.default_key()));
    for raw in ["", "unknown", "DEFAULT", "Solid"] {
        assert_eq!(table.resolve_raw(Some(raw)), default, "raw key {raw:?}");
    }
    assert_eq!(table.resolve(None), default);
}

#[test]
fn unknown_variant_keys_resolve_to_declared_default() {
    assert_unknown_equals_default(surface_table());
    assert_unknown_equals_default(heading_size_table());
    assert_unknown_equals_default(grid_gap_table());

    let partial = VariantTable::new(
        [(Spacing::Sm, "tight"), (Spacing::Lg, "loose")],
        Spacing::Sm,
    )
    .expect("valid table");
    assert_eq!(partial.resolve(Some(Spacing::Md)), partial.resolve(None));
    assert_unknown_equals_default(&partial);
}

#[test]
fn label_override_and_extra_classes_compose_independently() {
    let theme = Theme::builtin(ThemeMode::Light);
    let base = resolve_status(Some("WORK")).into_presentation(SizeClass::Sm);
    let base_classes = base.class_list(&theme);

    let composed = compose(
        base.clone(),
        PresentationOverrides::none().label("Heating"),
        ["shadow"],
    );
    assert_eq!(composed.icon, base.icon);
    assert_eq!(composed.color, base.color);
    assert_eq!(composed.size, base.size);
    assert_eq!(composed.label, "Heating");
    assert!(composed.class_list(&theme).starts_with(&base_classes));
    assert!(composed.class_list(&theme).ends_with("shadow"));
}

#[test]
fn repeated_resolution_is_identical() {
    for status in [None, Some("WORK"), Some("ERROR_3"), Some("???")] {
        let first = serde_json::to_string(&resolve_status(status)).expect("serialize");
        let second = serde_json::to_string(&resolve_status(status)).expect("serialize");
        assert_eq!(first, second);
    }
    assert_eq!(
        surface_table().resolve(Some(SurfaceLevel::Glass)),
        surface_table().resolve(Some(SurfaceLevel::Glass))
    );
}
