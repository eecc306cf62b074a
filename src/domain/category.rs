/// Seed labels used until the first category document is written.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Желтые", "Синие", "Коричневые", "Красные"];

pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|label| (*label).to_string())
        .collect()
}

pub fn contains_label(categories: &[String], label: &str) -> bool {
    categories.iter().any(|existing| existing == label)
}
