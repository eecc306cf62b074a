use crate::domain::color::ColorEntry;

pub const SIMILAR_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub search_term: String,
    pub selected_category: Option<String>,
}

impl CatalogFilter {
    pub fn summary(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.search_term.is_empty() {
            parts.push(format!("search={}", self.search_term));
        }
        if let Some(category) = self.selected_category.as_deref() {
            parts.push(format!("category={category}"));
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// Entries whose name or id contains `search_term` (case-insensitive) and whose
/// category equals `selected_category` exactly, in their original order.
pub fn visible_colors(
    all: &[ColorEntry],
    search_term: &str,
    selected_category: Option<&str>,
) -> Vec<ColorEntry> {
    let needle = search_term.to_lowercase();
    all.iter()
        .filter(|color| matches_search(color, &needle))
        .filter(|color| selected_category.map_or(true, |category| color.category == category))
        .cloned()
        .collect()
}

pub fn similar_colors(all: &[ColorEntry], target: &ColorEntry) -> Vec<ColorEntry> {
    all.iter()
        .filter(|color| color.id != target.id && color.category == target.category)
        .take(SIMILAR_LIMIT)
        .cloned()
        .collect()
}

fn matches_search(color: &ColorEntry, needle: &str) -> bool {
    needle.is_empty()
        || color.name.to_lowercase().contains(needle)
        || color.id.to_lowercase().contains(needle)
}
