//! # Actions
//!
//! Everything that can happen in Lockin becomes an `Action`.
//! User clicks a card? That's `Action::Select(id)`.
//! User presses `r`? That's `Action::Reset`.
//!
//! The `update()` function takes the current state and an action,
//! swaps in the next `Selection`, and returns an `Effect` telling the
//! adapter what to do next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::{debug, info};

use crate::core::catalog::ItemId;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A card was activated. Ids only come from the catalog, so this is always a member.
    Select(ItemId),
    Reset,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} (phase={})", action, app.phase());
    match action {
        Action::Select(id) => {
            let was_locked = app.selection.locked();
            let was_excluded = app.selection.is_excluded(id);
            app.selection = app.selection.select(id);

            let name = app.item_name(id).to_string();
            app.status_message = match was_locked {
                None => {
                    info!("Locked in {} (id={})", name, id);
                    format!("Locked in {}", name)
                }
                Some(locked) if locked == id => format!("{} is already locked in", name),
                Some(_) if was_excluded => format!("Restored {}", name),
                Some(_) => format!("Ruled out {}", name),
            };
            Effect::None
        }
        Action::Reset => {
            info!("Selection reset");
            app.selection = app.selection.reset();
            app.status_message = String::from("Selection reset");
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
