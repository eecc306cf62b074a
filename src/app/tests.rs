use super::{App, AppError};
use crate::lifecycle::{parse_customers, ColorPatch, LifecycleError};
use crate::repository::{CatalogRepository, COLORS_KEY};
use crate::state::PanelState;
use crate::store::{MemoryStore, RecordStore};
use std::path::PathBuf;
use uuid::Uuid;

fn unique_workspace() -> PathBuf {
    let root = std::env::temp_dir().join(format!("pantone-app-test-{}", Uuid::now_v7()));
    std::fs::create_dir_all(&root).expect("temp workspace should be creatable");
    root
}

fn reopen(app: &App<MemoryStore>) -> App<MemoryStore> {
    App::with_store(app.repository().store().clone())
}

fn seeded_app() -> App<MemoryStore> {
    let mut app = App::with_store(MemoryStore::new());
    app.add_color("Ocean", "#1A2B3C", Some("Синие"))
        .expect("ocean should be created");
    app.add_color("Navy", "#000080", Some("Синие"))
        .expect("navy should be created");
    app.add_color("Lemon", "#ff0", Some("Желтые"))
        .expect("lemon should be created");
    app
}

#[test]
fn opening_empty_store_seeds_default_categories_in_memory() {
    let app = App::with_store(MemoryStore::new());
    assert!(app.colors().is_empty());
    assert_eq!(
        app.categories(),
        &["Желтые", "Синие", "Коричневые", "Красные"]
    );
    assert!(app.repository().store().get(COLORS_KEY).is_none());
}

#[test]
fn add_color_persists_and_is_visible_by_search() {
    let mut app = App::with_store(MemoryStore::new());
    let created = app
        .add_color("Ocean", "#1A2B3C", Some("Синие"))
        .expect("create should succeed");
    assert!(created.in_stock);
    assert!(!created.id.is_empty());

    app.set_search_term("ocean");
    assert_eq!(app.visible_colors(), vec![created.clone()]);

    let reopened = reopen(&app);
    assert_eq!(reopened.colors(), &[created]);
}

#[test]
fn add_color_defaults_to_first_category_and_rejects_unknown_ones() {
    let mut app = App::with_store(MemoryStore::new());
    let created = app
        .add_color("Sun", "#fc0", None)
        .expect("create should succeed");
    assert_eq!(created.category, "Желтые");

    let unknown = app.add_color("Moss", "#0f0", Some("Зеленые"));
    assert!(matches!(unknown, Err(AppError::InvalidArgument(_))));
    assert_eq!(app.colors().len(), 1);
}

#[test]
fn invalid_color_is_not_persisted() {
    let mut app = App::with_store(MemoryStore::new());
    let invalid = app.add_color("Ocean", "1A2B3C", Some("Синие"));
    assert!(matches!(
        invalid,
        Err(AppError::Lifecycle(LifecycleError::Validation(_)))
    ));
    let empty_name = app.add_color("", "#123", Some("Синие"));
    assert!(matches!(
        empty_name,
        Err(AppError::Lifecycle(LifecycleError::Validation(_)))
    ));
    assert!(app.colors().is_empty());
    assert!(app.repository().store().get(COLORS_KEY).is_none());
}

#[test]
fn edit_color_trims_customers_and_persists() {
    let mut app = seeded_app();
    let id = app.colors()[0].id.clone();
    let form = app.open_editor(&id).expect("editor should open");
    assert_eq!(app.state().panel, PanelState::Editing(id.clone()));

    let updated = app
        .edit_color(
            &id,
            ColorPatch {
                recipe: Some("3 parts blue".to_string()),
                customers: parse_customers("A, , B,"),
                in_stock: false,
                ..form
            },
        )
        .expect("edit should succeed");
    assert_eq!(
        updated.customers,
        Some(vec!["A".to_string(), "B".to_string()])
    );
    assert_eq!(updated.name, "Ocean");
    assert_eq!(updated.hex, "#1A2B3C");
    assert_eq!(app.state().panel, PanelState::Closed);

    let reopened = reopen(&app);
    let stored = reopened.show_color(&id).expect("color should be stored");
    assert_eq!(stored, &updated);
    assert_eq!(reopened.colors()[0].id, id);
}

#[test]
fn edit_color_rejects_unknown_id_and_category() {
    let mut app = seeded_app();
    let missing = app.edit_color("PAN-missing", ColorPatch {
        category: "Синие".to_string(),
        ..ColorPatch::default()
    });
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    let id = app.colors()[0].id.clone();
    let bad_category = app.edit_color(&id, ColorPatch {
        category: "Зеленые".to_string(),
        ..ColorPatch::default()
    });
    assert!(matches!(bad_category, Err(AppError::InvalidArgument(_))));
}

#[test]
fn edit_unknown_id_with_unknown_category_reports_not_found() {
    let mut app = seeded_app();
    let before = app.colors().to_vec();
    let result = app.edit_color("PAN-missing", ColorPatch {
        category: "Зеленые".to_string(),
        ..ColorPatch::default()
    });
    assert!(matches!(result, Err(AppError::NotFound(id)) if id == "PAN-missing"));
    assert_eq!(app.colors(), before.as_slice());
}

fn app_with_unlisted_category() -> App<MemoryStore> {
    let mut store = MemoryStore::new();
    store
        .put(
            COLORS_KEY,
            r##"[{"id":"PAN-1","name":"Aqua","hex":"#00ffff","category":"Бирюзовые","inStock":true}]"##,
        )
        .expect("seed write should succeed");
    App::with_store(store)
}

#[test]
fn edit_keeps_category_that_left_the_category_list() {
    let mut app = app_with_unlisted_category();
    assert!(!app.categories().iter().any(|label| label == "Бирюзовые"));

    let mut patch = app.open_editor("PAN-1").expect("editor should open");
    patch.recipe = Some("white + cyan".to_string());
    let updated = app
        .edit_color("PAN-1", patch)
        .expect("recipe-only edit should succeed");

    assert_eq!(updated.category, "Бирюзовые");
    assert_eq!(updated.recipe.as_deref(), Some("white + cyan"));
    assert_eq!(app.state().panel, PanelState::Closed);

    let reopened = reopen(&app);
    assert_eq!(reopened.colors(), &[updated]);
}

#[test]
fn edit_cannot_move_color_into_another_unlisted_category() {
    let mut app = app_with_unlisted_category();
    let before = app.colors().to_vec();

    let mut patch = app.open_editor("PAN-1").expect("editor should open");
    patch.category = "Зеленые".to_string();
    let result = app.edit_color("PAN-1", patch);

    assert!(matches!(result, Err(AppError::InvalidArgument(_))));
    assert_eq!(app.colors(), before.as_slice());

    let mut patch = app.open_editor("PAN-1").expect("editor should open");
    patch.category = "Синие".to_string();
    let moved = app
        .edit_color("PAN-1", patch)
        .expect("move to a listed category should succeed");
    assert_eq!(moved.category, "Синие");
}

#[test]
fn delete_unknown_id_reports_not_found_and_keeps_collection() {
    let mut app = seeded_app();
    let before = app.colors().to_vec();
    let result = app.delete_color("PAN-xxx");
    assert!(matches!(result, Err(AppError::NotFound(ref id)) if id == "PAN-xxx"));
    assert_eq!(app.colors(), before.as_slice());
    assert_eq!(reopen(&app).colors(), before.as_slice());
}

#[test]
fn delete_removes_entry_and_persists() {
    let mut app = seeded_app();
    let id = app.colors()[1].id.clone();
    let removed = app.delete_color(&id).expect("delete should succeed");
    assert_eq!(removed.name, "Navy");
    assert_eq!(app.colors().len(), 2);
    assert!(reopen(&app).show_color(&id).is_err());
}

#[test]
fn add_category_appends_and_rejects_duplicates() {
    let mut app = App::with_store(MemoryStore::new());
    app.add_category("Зеленые").expect("create should succeed");
    assert_eq!(app.categories().len(), 5);

    let duplicate = app.add_category("Зеленые");
    assert!(matches!(
        duplicate,
        Err(AppError::Lifecycle(LifecycleError::Duplicate(_)))
    ));
    assert_eq!(app.categories().len(), 5);

    let repo = CatalogRepository::new(app.repository().store().clone());
    assert_eq!(repo.load_categories().last().map(String::as_str), Some("Зеленые"));
}

#[test]
fn category_toggle_twice_returns_to_unfiltered_view() {
    let mut app = seeded_app();
    let unfiltered = app.visible_colors();

    app.toggle_category("Желтые");
    let filtered = app.visible_colors();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Lemon");

    app.toggle_category("Желтые");
    assert_eq!(app.visible_colors(), unfiltered);

    app.toggle_category("Синие");
    app.clear_category();
    assert_eq!(app.visible_colors(), unfiltered);
}

#[test]
fn details_panel_lists_similar_colors() {
    let mut app = seeded_app();
    let ocean = app.colors()[0].id.clone();
    let details = app.open_details(&ocean).expect("details should open");
    assert_eq!(details.color.name, "Ocean");
    assert_eq!(details.similar.len(), 1);
    assert_eq!(details.similar[0].name, "Navy");
    assert_eq!(app.state().panel, PanelState::Details(ocean));

    app.close_panel();
    assert_eq!(app.state().panel, PanelState::Closed);
    assert!(matches!(
        app.open_details("PAN-none"),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn sqlite_backed_app_survives_reopen() {
    let root = unique_workspace();
    let db_path = root.join(".pantone/catalog.sqlite");
    let db_path = db_path.to_str().expect("utf8 path");

    let created = {
        let mut app = App::open(db_path).expect("app should open");
        app.add_category("Зеленые").expect("category should be created");
        app.add_color("Moss", "#0a0", Some("Зеленые"))
            .expect("color should be created")
    };

    let app = App::open(db_path).expect("app should reopen");
    assert_eq!(app.colors(), &[created]);
    assert_eq!(app.categories().len(), 5);

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn ephemeral_app_starts_empty() {
    let app = App::open_ephemeral();
    assert!(app.colors().is_empty());
    assert_eq!(app.categories().len(), 4);
}
