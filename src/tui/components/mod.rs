//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar showing phase and status message
//! - `Card`: One character card (a ratatui `Widget`)
//! - `DetailPanel`: Side panel describing the locked or focused character
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `CardGrid`: Scrollable grid with focus, hit testing and layout caching
//!
//! Components receive external data as "props", never by reaching into
//! global state. The grid reads the `Selection` but only ever reports
//! which card was activated; the adapter decides what that means.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top status bar)
//! ├── card.rs           (Single card widget)
//! ├── card_grid.rs      (Scrollable card container)
//! └── detail_panel.rs   (Locked/focused character details)
//! ```

pub mod card;
pub mod card_grid;
pub mod detail_panel;
mod title_bar;

pub use card_grid::{CardGrid, CardGridState, GridEvent};
pub use detail_panel::DetailPanel;
pub use title_bar::TitleBar;
