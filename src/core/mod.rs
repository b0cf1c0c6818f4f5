//! # Core Application Logic
//!
//! This module contains Lockin's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (roster)     │
//!                    │  • Selection (lock-in)  │
//!                    │  • Action + update()    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: `Catalog`, `Item` and `ItemId`, the fixed roster
//! - [`selection`]: `Selection`, the lock/exclusion state machine
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Layered settings (defaults → file → env → CLI)

pub mod action;
pub mod catalog;
pub mod config;
pub mod selection;
pub mod state;
