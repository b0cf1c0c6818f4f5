//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::catalog::{Catalog, ItemId};
use crate::core::state::App;

/// Creates a test App over the built-in 24-character roster.
pub fn test_app() -> App {
    App::new(Catalog::builtin())
}

/// Creates a test App over a small three-item catalog.
pub fn small_app() -> App {
    let catalog = Catalog::from_toml_str(
        r#"
[[items]]
name = "One"
image = "one.png"

[[items]]
name = "Two"
image = "two.png"
description = "The second of three."

[[items]]
name = "Three"
image = "three.png"
"#,
    )
    .expect("small catalog parses");
    App::new(catalog)
}

/// Id at catalog position `index`. Panics if out of range.
pub fn nth(app: &App, index: usize) -> ItemId {
    app.catalog.id_at(index).expect("index within catalog")
}

/// Flatten a TestBackend buffer into one string of symbols.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}

/// A catalog of `count` items named `Item 0`, `Item 1`, ...
pub fn numbered_catalog(count: usize) -> Catalog {
    let toml: String = (0..count)
        .map(|i| format!("[[items]]\nname = \"Item {i}\"\nimage = \"item{i}.png\"\n\n"))
        .collect();
    Catalog::from_toml_str(&toml).expect("numbered catalog parses")
}
