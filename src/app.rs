use std::error::Error;
use std::fmt;

use serde::Serialize;

use crate::config::ConfigError;
use crate::domain::category::contains_label;
use crate::domain::color::ColorEntry;
use crate::lifecycle::{self, ColorPatch, LifecycleError, NewColor};
use crate::query;
use crate::repository::CatalogRepository;
use crate::state::{CatalogState, PanelState};
use crate::store::{MemoryStore, RecordStore, SqliteStore, StoreError};

pub struct App<S> {
    repo: CatalogRepository<S>,
    state: CatalogState,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ColorDetails {
    pub color: ColorEntry,
    pub similar: Vec<ColorEntry>,
}

impl App<SqliteStore> {
    pub fn open(db_path: &str) -> Result<Self, AppError> {
        Ok(Self::with_store(SqliteStore::open(db_path)?))
    }
}

impl App<MemoryStore> {
    /// Catalog that lives only for this process.
    pub fn open_ephemeral() -> Self {
        Self::with_store(MemoryStore::new())
    }
}

impl<S: RecordStore> App<S> {
    pub fn with_store(store: S) -> Self {
        let repo = CatalogRepository::new(store);
        let colors = repo.load_colors();
        let categories = repo.load_categories();
        log::debug!(
            "loaded {} color(s) and {} categor(ies)",
            colors.len(),
            categories.len()
        );
        Self {
            repo,
            state: CatalogState::new(colors, categories),
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn colors(&self) -> &[ColorEntry] {
        &self.state.colors
    }

    pub fn categories(&self) -> &[String] {
        &self.state.categories
    }

    #[cfg(test)]
    pub fn repository(&self) -> &CatalogRepository<S> {
        &self.repo
    }

    pub fn show_color(&self, id: &str) -> Result<&ColorEntry, AppError> {
        self.state
            .find_color(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    pub fn visible_colors(&self) -> Vec<ColorEntry> {
        query::visible_colors(
            &self.state.colors,
            self.state.search_term(),
            self.state.selected_category(),
        )
    }

    pub fn similar_colors(&self, id: &str) -> Result<Vec<ColorEntry>, AppError> {
        let target = self.show_color(id)?;
        Ok(query::similar_colors(&self.state.colors, target))
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.update_state(|state| state.with_search_term(term));
    }

    pub fn toggle_category(&mut self, category: &str) {
        self.update_state(|state| state.with_toggled_category(category));
    }

    pub fn clear_category(&mut self) {
        self.update_state(CatalogState::with_cleared_category);
    }

    /// Opens the edit panel and returns the form prefilled from the stored entry.
    pub fn open_editor(&mut self, id: &str) -> Result<ColorPatch, AppError> {
        let patch = ColorPatch::from_entry(self.show_color(id)?);
        self.update_state(|state| state.with_panel(PanelState::Editing(id.to_string())));
        Ok(patch)
    }

    pub fn open_details(&mut self, id: &str) -> Result<ColorDetails, AppError> {
        let details = ColorDetails {
            color: self.show_color(id)?.clone(),
            similar: self.similar_colors(id)?,
        };
        self.update_state(|state| state.with_panel(PanelState::Details(id.to_string())));
        Ok(details)
    }

    pub fn close_panel(&mut self) {
        self.update_state(|state| state.with_panel(PanelState::Closed));
    }

    pub fn add_color(
        &mut self,
        name: &str,
        hex: &str,
        category: Option<&str>,
    ) -> Result<ColorEntry, AppError> {
        let category = self.resolve_category(category)?;
        let created = lifecycle::create_color(
            NewColor {
                name: name.to_string(),
                hex: hex.to_string(),
                category,
            },
            &self.state.colors,
        )?;

        let mut colors = self.state.colors.clone();
        colors.push(created.clone());
        self.commit_colors(colors)?;
        log::info!("created color {} ({})", created.id, created.name);
        Ok(created)
    }

    pub fn edit_color(&mut self, id: &str, patch: ColorPatch) -> Result<ColorEntry, AppError> {
        let existing = self.show_color(id)?;
        // Only a move to another category must land on a listed one.
        if patch.category != existing.category
            && !contains_label(&self.state.categories, &patch.category)
        {
            return Err(unknown_category(&patch.category));
        }
        let updated = lifecycle::update_color(existing, patch);
        let colors = lifecycle::replace_color(&self.state.colors, &updated);
        self.commit_colors(colors)?;
        if self.state.panel == PanelState::Editing(id.to_string()) {
            self.close_panel();
        }
        log::info!("updated color {}", updated.id);
        Ok(updated)
    }

    pub fn delete_color(&mut self, id: &str) -> Result<ColorEntry, AppError> {
        let removed = self.show_color(id)?.clone();
        let colors = lifecycle::delete_color(&self.state.colors, id);
        self.commit_colors(colors)?;
        log::info!("deleted color {}", id);
        Ok(removed)
    }

    pub fn add_category(&mut self, label: &str) -> Result<(), AppError> {
        let categories = lifecycle::create_category(label, &self.state.categories)?;
        self.update_state(|state| state.with_categories(categories));
        self.repo.save_categories(&self.state.categories)?;
        log::info!("created category {}", label);
        Ok(())
    }

    /// The create form defaults to the first known category and only offers known ones.
    fn resolve_category(&self, requested: Option<&str>) -> Result<String, AppError> {
        match requested {
            Some(label) if contains_label(&self.state.categories, label) => Ok(label.to_string()),
            Some(label) => Err(unknown_category(label)),
            None => self.state.categories.first().cloned().ok_or_else(|| {
                AppError::InvalidArgument("no categories exist; create one first".to_string())
            }),
        }
    }

    fn commit_colors(&mut self, colors: Vec<ColorEntry>) -> Result<(), AppError> {
        self.update_state(|state| state.with_colors(colors));
        self.repo.save_colors(&self.state.colors)?;
        Ok(())
    }

    fn update_state<F>(&mut self, apply: F)
    where
        F: FnOnce(CatalogState) -> CatalogState,
    {
        let current = std::mem::take(&mut self.state);
        self.state = apply(current);
    }
}

fn unknown_category(label: &str) -> AppError {
    AppError::InvalidArgument(format!("unknown category '{}'", label))
}

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Store(StoreError),
    Lifecycle(LifecycleError),
    Config(ConfigError),
    InvalidArgument(String),
    NotFound(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(err) => write!(f, "I/O error: {}", err),
            AppError::Store(err) => write!(f, "record store error: {}", err),
            AppError::Lifecycle(err) => write!(f, "{}", err),
            AppError::Config(err) => write!(f, "config error: {}", err),
            AppError::InvalidArgument(message) => write!(f, "{}", message),
            AppError::NotFound(id) => write!(f, "color '{}' not found in catalog", id),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Io(err) => Some(err),
            AppError::Store(err) => Some(err),
            AppError::Lifecycle(err) => Some(err),
            AppError::Config(err) => Some(err),
            AppError::InvalidArgument(_) => None,
            AppError::NotFound(_) => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        AppError::Store(value)
    }
}

impl From<LifecycleError> for AppError {
    fn from(value: LifecycleError) -> Self {
        AppError::Lifecycle(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

#[cfg(test)]
mod tests;
