//! # Selection
//!
//! The lock-in state machine.
//!
//! ```text
//!            select(x)                 select(L)  → no-op
//!   Open ───────────────▶ Locked(L) ◀─ select(y) → toggle y in excluded
//!    ▲                        │
//!    └──────── reset() ───────┘
//! ```
//!
//! `Selection` is an immutable value. Every transition returns a fresh
//! `Selection`; callers replace the old one wholesale. The first `select`
//! after creation (or after `reset`) always sets the lock, and nothing but
//! `reset` can clear it.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::core::catalog::{Catalog, Item, ItemId};

/// Whether a lock has been made yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Open,
    Locked,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Open => "open",
            Phase::Locked => "locked",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    locked: Option<ItemId>,
    /// Never contains `locked`. Only populated while a lock is set.
    excluded: BTreeSet<ItemId>,
}

impl Selection {
    /// The open state: no lock, nothing excluded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a click on `id` and return the resulting state.
    pub fn select(&self, id: ItemId) -> Selection {
        match self.locked {
            None => Selection {
                locked: Some(id),
                excluded: BTreeSet::new(),
            },
            Some(locked) if locked == id => self.clone(),
            Some(_) => {
                let mut excluded = self.excluded.clone();
                if !excluded.remove(&id) {
                    excluded.insert(id);
                }
                Selection {
                    locked: self.locked,
                    excluded,
                }
            }
        }
    }

    /// Back to the open state, whatever `self` was.
    pub fn reset(&self) -> Selection {
        Selection::new()
    }

    pub fn locked(&self) -> Option<ItemId> {
        self.locked
    }

    pub fn is_locked(&self, id: ItemId) -> bool {
        self.locked == Some(id)
    }

    pub fn is_excluded(&self, id: ItemId) -> bool {
        self.excluded.contains(&id)
    }

    /// Excluded ids in ascending order.
    pub fn excluded(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.excluded.iter().copied()
    }

    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }

    pub fn locked_item<'a>(&self, catalog: &'a Catalog) -> Option<&'a Item> {
        self.locked.and_then(|id| catalog.get(id))
    }

    pub fn phase(&self) -> Phase {
        if self.locked.is_some() {
            Phase::Locked
        } else {
            Phase::Open
        }
    }
}
