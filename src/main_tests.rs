use crate::cli::EditArgs;
use crate::lifecycle::ColorPatch;

use super::edit_patch;

fn form() -> ColorPatch {
    ColorPatch {
        category: "Синие".to_string(),
        recipe: Some("old recipe".to_string()),
        customers: vec!["Acme".to_string()],
        in_stock: true,
    }
}

fn args() -> EditArgs {
    EditArgs {
        id: "PAN-1".to_string(),
        category: None,
        recipe: None,
        customers: None,
        in_stock: None,
        json: false,
    }
}

#[test]
fn edit_patch_keeps_form_values_for_omitted_flags() {
    assert_eq!(edit_patch(form(), &args()), form());
}

#[test]
fn edit_patch_overrides_given_flags() {
    let patch = edit_patch(
        form(),
        &EditArgs {
            category: Some("Красные".to_string()),
            recipe: Some("new recipe".to_string()),
            customers: Some("A, , B,".to_string()),
            in_stock: Some(false),
            ..args()
        },
    );
    assert_eq!(patch.category, "Красные");
    assert_eq!(patch.recipe.as_deref(), Some("new recipe"));
    assert_eq!(patch.customers, vec!["A", "B"]);
    assert!(!patch.in_stock);
}

#[test]
fn edit_patch_blank_recipe_clears_it() {
    let patch = edit_patch(
        form(),
        &EditArgs {
            recipe: Some("  ".to_string()),
            ..args()
        },
    );
    assert_eq!(patch.recipe, None);
}
