//! # Application State
//!
//! Core business state for Lockin. Domain logic only, no TUI types.
//! Presentation state (focus, scroll) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog          // fixed roster, never mutated
//! ├── selection: Selection      // replaced wholesale on every action
//! ├── prompts: Prompts          // phase-dependent prompt text
//! └── status_message: String    // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use serde::Serialize;

use crate::core::catalog::{Catalog, Item, ItemId};
use crate::core::config::ResolvedConfig;
use crate::core::selection::{Phase, Selection};

pub const DEFAULT_OPEN_PROMPT: &str = "Choose your character";
pub const DEFAULT_LOCKED_PROMPT: &str = "Locked in! Rule out the rest";

#[derive(Debug, Clone, PartialEq)]
pub struct Prompts {
    pub open: String,
    pub locked: String,
}

impl Default for Prompts {
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN_PROMPT.to_string(),
            locked: DEFAULT_LOCKED_PROMPT.to_string(),
        }
    }
}

pub struct App {
    pub catalog: Catalog,
    pub selection: Selection,
    pub prompts: Prompts,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: Selection::new(),
            prompts: Prompts::default(),
            status_message: String::from("Welcome to Lockin!"),
        }
    }

    /// Create an App using prompts from a resolved config.
    pub fn from_config(catalog: Catalog, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(catalog);
        app.prompts = config.prompts.clone();
        app
    }

    pub fn phase(&self) -> Phase {
        self.selection.phase()
    }

    pub fn locked_item(&self) -> Option<&Item> {
        self.selection.locked_item(&self.catalog)
    }

    pub fn prompt(&self) -> &str {
        match self.phase() {
            Phase::Open => &self.prompts.open,
            Phase::Locked => &self.prompts.locked,
        }
    }

    pub fn item_name(&self, id: ItemId) -> &str {
        self.catalog.get(id).map(|item| item.name.as_str()).unwrap_or("?")
    }

    pub fn summary(&self) -> SelectionSummary {
        SelectionSummary {
            phase: self.phase(),
            locked: self.locked_item().map(|item| LockedSummary {
                id: item.id,
                name: item.name.clone(),
                image: item.image.clone(),
            }),
            excluded: self.selection.excluded().collect(),
        }
    }
}

/// Serializable outcome of a session, printed by `--print`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionSummary {
    pub phase: Phase,
    pub locked: Option<LockedSummary>,
    pub excluded: Vec<ItemId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LockedSummary {
    pub id: ItemId,
    pub name: String,
    pub image: String,
}
