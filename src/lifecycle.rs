use std::error::Error;
use std::fmt;

use crate::color_id::generate_color_id;
use crate::domain::category::contains_label;
use crate::domain::color::{validate_hex, ColorEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewColor {
    pub name: String,
    pub hex: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorPatch {
    pub category: String,
    pub recipe: Option<String>,
    pub customers: Vec<String>,
    pub in_stock: bool,
}

impl ColorPatch {
    /// Patch that leaves every editable field as it is on `color`.
    pub fn from_entry(color: &ColorEntry) -> Self {
        Self {
            category: color.category.clone(),
            recipe: color.recipe.clone(),
            customers: color.customers().to_vec(),
            in_stock: color.in_stock,
        }
    }
}

pub fn create_color(
    input: NewColor,
    existing: &[ColorEntry],
) -> Result<ColorEntry, LifecycleError> {
    if input.name.trim().is_empty() {
        return Err(LifecycleError::Validation(
            "color name cannot be empty".to_string(),
        ));
    }
    validate_hex(&input.hex).map_err(|err| LifecycleError::Validation(err.to_string()))?;

    let id = generate_color_id(|candidate| existing.iter().any(|color| color.id == candidate));
    Ok(ColorEntry {
        id,
        name: input.name,
        hex: input.hex,
        category: input.category,
        recipe: None,
        customers: None,
        in_stock: true,
    })
}

/// Applies the edit form to `existing`. `id`, `name` and `hex` are never touched.
pub fn update_color(existing: &ColorEntry, patch: ColorPatch) -> ColorEntry {
    ColorEntry {
        id: existing.id.clone(),
        name: existing.name.clone(),
        hex: existing.hex.clone(),
        category: patch.category,
        recipe: patch.recipe,
        customers: Some(clean_customers(patch.customers)),
        in_stock: patch.in_stock,
    }
}

/// Splits the comma-joined customer field of the edit form.
pub fn parse_customers(raw: &str) -> Vec<String> {
    clean_customers(raw.split(',').map(str::to_string))
}

fn clean_customers<I>(customers: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    customers
        .into_iter()
        .map(|customer| customer.trim().to_string())
        .filter(|customer| !customer.is_empty())
        .collect()
}

pub fn create_category(label: &str, existing: &[String]) -> Result<Vec<String>, LifecycleError> {
    if label.trim().is_empty() {
        return Err(LifecycleError::Validation(
            "category label cannot be empty".to_string(),
        ));
    }
    if contains_label(existing, label) {
        return Err(LifecycleError::Duplicate(label.to_string()));
    }
    let mut categories = existing.to_vec();
    categories.push(label.to_string());
    Ok(categories)
}

pub fn delete_color(all: &[ColorEntry], id: &str) -> Vec<ColorEntry> {
    all.iter().filter(|color| color.id != id).cloned().collect()
}

/// Replaces the entry sharing `updated.id`; other entries keep their positions.
pub fn replace_color(all: &[ColorEntry], updated: &ColorEntry) -> Vec<ColorEntry> {
    all.iter()
        .map(|color| {
            if color.id == updated.id {
                updated.clone()
            } else {
                color.clone()
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    Validation(String),
    Duplicate(String),
}

impl fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleError::Validation(message) => write!(f, "validation error: {}", message),
            LifecycleError::Duplicate(label) => {
                write!(f, "category '{}' already exists", label)
            }
        }
    }
}

impl Error for LifecycleError {}
