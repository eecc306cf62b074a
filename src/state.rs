use crate::domain::color::ColorEntry;
use crate::query::CatalogFilter;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Editing(String),
    Details(String),
}

/// In-memory catalog owned by the controller. Helpers consume the state and
/// return the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogState {
    pub colors: Vec<ColorEntry>,
    pub categories: Vec<String>,
    pub filter: CatalogFilter,
    pub panel: PanelState,
}

impl CatalogState {
    pub fn new(colors: Vec<ColorEntry>, categories: Vec<String>) -> Self {
        Self {
            colors,
            categories,
            ..Self::default()
        }
    }

    pub fn with_colors(self, colors: Vec<ColorEntry>) -> Self {
        Self { colors, ..self }
    }

    pub fn with_categories(self, categories: Vec<String>) -> Self {
        Self { categories, ..self }
    }

    pub fn with_search_term(mut self, term: &str) -> Self {
        self.filter.search_term = term.to_string();
        self
    }

    /// Selecting the already-selected category clears the selection.
    pub fn with_toggled_category(mut self, category: &str) -> Self {
        self.filter.selected_category = match self.filter.selected_category.take() {
            Some(current) if current == category => None,
            _ => Some(category.to_string()),
        };
        self
    }

    pub fn with_cleared_category(mut self) -> Self {
        self.filter.selected_category = None;
        self
    }

    pub fn with_panel(self, panel: PanelState) -> Self {
        Self { panel, ..self }
    }

    pub fn find_color(&self, id: &str) -> Option<&ColorEntry> {
        self.colors.iter().find(|color| color.id == id)
    }

    pub fn search_term(&self) -> &str {
        &self.filter.search_term
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.filter.selected_category.as_deref()
    }
}
