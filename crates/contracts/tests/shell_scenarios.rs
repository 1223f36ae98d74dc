use contracts::enums::{Language, Theme};
use contracts::shared::i18n::Catalog;
use contracts::shared::navigation::{
    LayoutMode, NavigationPhase, NavigationState, ShellLayout, ViewportClass,
};
use contracts::shared::preferences::{
    decode_slot, KeyValueStorage, MemoryStorage, PreferenceEffect, PreferenceStore,
};
use serde_json::Value;

#[test]
fn resize_round_trip_on_a_laptop() {
    let mut nav = NavigationState::from_width(1024.0);
    assert_eq!(nav, NavigationState { is_open: true, is_mobile: false });
    assert_eq!(ShellLayout::compose(nav).mode, LayoutMode::DesktopExpanded);

    nav.set_viewport_class(ViewportClass::from_width(500.0));
    assert_eq!(nav, NavigationState { is_open: false, is_mobile: true });
    assert!(ShellLayout::compose(nav).show_menu_button);

    nav.toggle();
    assert_eq!(nav, NavigationState { is_open: true, is_mobile: true });
    assert_eq!(nav.phase(), NavigationPhase::MobileOverlayOpen);
    assert!(ShellLayout::compose(nav).show_backdrop);

    nav.set_viewport_class(ViewportClass::from_width(1024.0));
    assert_eq!(nav, NavigationState { is_open: true, is_mobile: false });
    assert_eq!(ShellLayout::compose(nav).content_offset, "16rem");
}

#[test]
fn theme_survives_a_reload() {
    let local_storage = MemoryStorage::new();

    let mut theme = PreferenceStore::<Theme, _>::load(local_storage.clone());
    assert_eq!(theme.get(), Theme::Light);
    assert!(!local_storage.contains("theme-storage"));

    let change = theme.set(Theme::Dark);
    assert_eq!(change.effect, PreferenceEffect::DarkMode(true));

    let raw = local_storage.read("theme-storage").expect("slot written");
    let parsed: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed["state"]["theme"], "dark");
    assert_eq!(decode_slot::<Theme>(&raw), Some(Theme::Dark));

    let after_reload = PreferenceStore::<Theme, _>::load(local_storage);
    assert_eq!(after_reload.get(), Theme::Dark);
    assert_eq!(after_reload.effect(), PreferenceEffect::DarkMode(true));
}

#[test]
fn corrupted_slots_never_break_start_up() {
    for raw in ["", "}{", r#"{"state":{"theme":"sepia"}}"#, r#"{"state":"dark"}"#] {
        let storage = MemoryStorage::with_entry("theme-storage", raw);
        let store = PreferenceStore::<Theme, _>::load(storage.clone());
        assert_eq!(store.get(), Theme::Light);
        assert_eq!(storage.read("theme-storage").as_deref(), Some(raw));
    }
}

#[test]
fn language_switch_changes_the_active_catalog() {
    let storage = MemoryStorage::new();
    let mut language = PreferenceStore::<Language, _>::load(storage.clone());

    let PreferenceEffect::Catalog(active) = language.effect() else {
        panic!("language must map to a catalog effect");
    };
    assert_eq!(Catalog::for_language(active).translate("sidebar.plans"), "Planes");

    let change = language.set(Language::En);
    let PreferenceEffect::Catalog(active) = change.effect else {
        panic!("language must map to a catalog effect");
    };
    assert_eq!(Catalog::for_language(active).translate("sidebar.plans"), "Plans");
    assert_eq!(
        PreferenceStore::<Language, _>::load(storage).get(),
        Language::En
    );
}
