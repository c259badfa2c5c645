use pretty_assertions::assert_eq;
use services::storage::{read_json, BRANDING_KEY};
use services::surface::RecordingSurface;
use services::{BrandingStore, MemoryStore, Presentation};
use shared_types::{
    color_field_path, AppErrorKind, BrandingConfig, BrandingPatch, ContactPatch, ThemeMode,
    COLOR_KEYS,
};
use std::rc::Rc;

struct Fixture {
    storage: Rc<MemoryStore>,
    surface: Rc<RecordingSurface>,
    store: BrandingStore,
}

fn fixture(mode: ThemeMode) -> Fixture {
    let storage = Rc::new(MemoryStore::new());
    let surface = Rc::new(RecordingSurface::new());
    let store = BrandingStore::new(storage.clone(), surface.clone(), mode);
    Fixture {
        storage,
        surface,
        store,
    }
}

#[test]
fn single_color_override_leaves_every_other_key_alone() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        for key in COLOR_KEYS {
            let mut f = fixture(mode);
            let before = f.store.config().clone();

            f.store
                .update(&BrandingPatch::color(mode, key, "#123456").unwrap())
                .unwrap();

            let after = f.store.config();
            let old = before.colors.for_mode(mode).entries();
            for ((k, value), (_, previous)) in after.colors.for_mode(mode).entries().into_iter().zip(old) {
                let expected = if k == key { "#123456" } else { previous };
                assert_eq!(value, expected, "{mode:?} {k} after overriding {key}");
            }
            assert_eq!(after.colors.for_mode(mode.toggled()), before.colors.for_mode(mode.toggled()));
            assert_eq!(after.app_name, before.app_name);
            assert_eq!(after.contact, before.contact);
        }
    }
}

#[test]
fn invalid_color_error_lands_on_the_field_path_the_form_reads() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        for key in COLOR_KEYS {
            let mut f = fixture(mode);
            let err = f
                .store
                .update(&BrandingPatch::color(mode, key, "nope").unwrap())
                .unwrap_err();

            let paths: Vec<&String> = err.field_errors.keys().collect();
            assert_eq!(paths, vec![&color_field_path(mode, key)], "{mode:?} {key}");
        }
    }
}

#[test]
fn persisted_record_is_the_full_merge() {
    let mut f = fixture(ThemeMode::Light);
    f.store
        .update(&BrandingPatch {
            contact: Some(ContactPatch {
                phone: Some("+55 21 3333-4444".to_string()),
                ..ContactPatch::default()
            }),
            ..BrandingPatch::default()
        })
        .unwrap();

    let stored: BrandingConfig = read_json(f.storage.as_ref(), BRANDING_KEY).unwrap().unwrap();
    assert_eq!(&stored, f.store.config());
    assert_eq!(stored.contact.phone, "+55 21 3333-4444");
    assert_eq!(stored.contact.email, BrandingConfig::default().contact.email);
}

#[test]
fn rejected_update_applies_nothing() {
    let mut f = fixture(ThemeMode::Light);
    let applied_before = f.surface.count();

    let err = f
        .store
        .update(&BrandingPatch::color(ThemeMode::Dark, "surface", "teal").unwrap())
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("colors.dark.surface"));
    assert_eq!(f.store.config(), &BrandingConfig::default());
    assert_eq!(f.surface.count(), applied_before);
    assert!(f.storage.is_empty());
}

#[test]
fn reset_after_many_updates_matches_defaults_exactly() {
    let mut f = fixture(ThemeMode::Dark);
    let patches = [
        BrandingPatch {
            app_name: Some("Nogueira Advocacia".to_string()),
            tagline: Some("Tributário".to_string()),
            ..BrandingPatch::default()
        },
        BrandingPatch::color(ThemeMode::Dark, "accent", "#22C55E").unwrap(),
        BrandingPatch::color(ThemeMode::Light, "textSecondary", "#333").unwrap(),
    ];
    for patch in &patches {
        f.store.update(patch).unwrap();
    }

    f.store.reset().unwrap();

    let defaults = BrandingConfig::default();
    assert_eq!(
        serde_json::to_string(f.store.config()).unwrap(),
        serde_json::to_string(&defaults).unwrap()
    );
    assert!(f.storage.is_empty());
    assert_eq!(
        f.surface.last(),
        Some(Presentation::resolve(&defaults, ThemeMode::Dark))
    );
}

#[test]
fn mode_switch_reapplies_without_touching_the_record() {
    let mut f = fixture(ThemeMode::Light);
    f.store
        .update(&BrandingPatch::color(ThemeMode::Dark, "primary", "#ABCDEF").unwrap())
        .unwrap();

    f.store.set_mode(ThemeMode::Dark);

    let applied = f.surface.last().unwrap();
    assert_eq!(applied.mode, ThemeMode::Dark);
    assert_eq!(applied.variable("--color-primary"), Some("#ABCDEF"));
    assert_eq!(f.store.config().colors.dark.primary, "#ABCDEF");
}
