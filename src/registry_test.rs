use super::*;

#[test]
fn wire_names_are_kebab_case() {
    let cases = [
        (WidgetKind::HuntTable, "\"hunt-table\""),
        (WidgetKind::CurrentGame, "\"current-game\""),
        (WidgetKind::BiggestWin, "\"biggest-win\""),
        (WidgetKind::RunningTotals, "\"running-totals\""),
        (WidgetKind::ProgressBar, "\"progress-bar\""),
        (WidgetKind::NextUp, "\"next-up\""),
        (WidgetKind::RecentResults, "\"recent-results\""),
        (WidgetKind::Leaderboard, "\"leaderboard\""),
        (WidgetKind::CustomText, "\"custom-text\""),
        (WidgetKind::Image, "\"image\""),
        (WidgetKind::Timer, "\"timer\""),
        (WidgetKind::GameImage, "\"game-image\""),
    ];
    for (kind, wire) in cases {
        assert_eq!(serde_json::to_string(&kind).unwrap(), wire);
        assert_eq!(serde_json::from_str::<WidgetKind>(wire).unwrap(), kind);
    }
}

#[test]
fn unknown_kind_fails_to_deserialize() {
    assert!(serde_json::from_str::<WidgetKind>("\"chat-box\"").is_err());
}

#[test]
fn catalog_covers_every_kind_with_sane_defaults() {
    for kind in WidgetKind::ALL {
        let def = kind.def();
        assert!(!def.label.is_empty());
        assert!(!def.description.is_empty());
        assert!(def.default_width >= crate::consts::MIN_WIDGET_WIDTH, "{kind:?}");
        assert!(def.default_height >= crate::consts::MIN_WIDGET_HEIGHT, "{kind:?}");
    }
}

#[test]
fn default_config_matches_its_kind() {
    for kind in WidgetKind::ALL {
        assert_eq!(kind.default_config().kind(), kind);
    }
}

#[test]
fn hunt_category_drives_placeholder_behavior() {
    assert!(WidgetKind::HuntTable.needs_hunt_data());
    assert!(WidgetKind::GameImage.needs_hunt_data());
    assert!(!WidgetKind::CustomText.needs_hunt_data());
    assert!(!WidgetKind::Image.needs_hunt_data());
    assert!(!WidgetKind::Timer.needs_hunt_data());
}
