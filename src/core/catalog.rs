//! # Catalog
//!
//! The fixed, ordered roster of selectable characters.
//!
//! Ids are assigned by position when the catalog is built and an `ItemId`
//! can only be obtained from a `Catalog`. Code outside this module has no
//! way to fabricate an id that isn't in the roster.

use std::fmt;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

/// Position of an item in its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(usize);

impl ItemId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Opaque display reference (usually an image path).
    pub image: String,
    pub description: Option<String>,
}

/// On-disk shape of a catalog entry. Ids come from position, not the file.
#[derive(Debug, Deserialize)]
struct ItemEntry {
    name: String,
    image: String,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<ItemEntry>,
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {}

const BUILTIN_ROSTER: &[(&str, &str)] = &[
    ("Aria", "Wind dancer who never lands in the same place twice."),
    ("Bram", "Retired blacksmith with one last commission."),
    ("Cinder", "Fire mage, short fuse, shorter temper."),
    ("Dax", "Smuggler with a ship held together by tape."),
    ("Elowen", "Forest warden who speaks for the old trees."),
    ("Fenn", "Card sharp. Always has the ace."),
    ("Gale", "Storm chaser and part-time lightning rod."),
    ("Hollis", "Archivist who remembers everything, unfortunately."),
    ("Ione", "Tide caller from the drowned city."),
    ("Jax", "Street brawler with a heart of slightly tarnished gold."),
    ("Kestrel", "Sharpshooter who never misses twice."),
    ("Lumen", "Lighthouse keeper guarding something in the dark."),
    ("Mira", "Illusionist. Nothing she shows you is real."),
    ("Nox", "Night courier for deliveries nobody signs for."),
    ("Orrin", "Stone golem who took up gardening."),
    ("Pell", "Alchemist whose experiments mostly work."),
    ("Quill", "Spymaster who writes everything down."),
    ("Rook", "Tactician who plays ten moves ahead."),
    ("Sable", "Assassin on an extended vacation."),
    ("Thorne", "Knight errant, errant mostly."),
    ("Umber", "Cartographer of places that move."),
    ("Vesper", "Bard whose songs come true."),
    ("Wren", "Tinkerer with a clockwork sparrow."),
    ("Yara", "Desert nomad who reads the stars."),
];

/// Ordered, immutable list of selectable items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    fn from_entries(entries: Vec<ItemEntry>) -> Self {
        let items = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| Item {
                id: ItemId(index),
                name: entry.name,
                image: entry.image,
                description: entry.description,
            })
            .collect();
        Self { items }
    }

    /// The default 24-character roster.
    pub fn builtin() -> Self {
        let entries = BUILTIN_ROSTER
            .iter()
            .enumerate()
            .map(|(index, (name, description))| ItemEntry {
                name: name.to_string(),
                image: format!("characters/{:02}-{}.png", index, name.to_lowercase()),
                description: Some(description.to_string()),
            })
            .collect();
        Self::from_entries(entries)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents).map_err(CatalogError::Parse)?;
        Ok(Self::from_entries(file.items))
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let catalog = Self::from_toml_str(&contents)?;
        info!("Loaded {} catalog items from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The id at catalog position `index`, if the position exists.
    pub fn id_at(&self, index: usize) -> Option<ItemId> {
        self.items.get(index).map(|item| item.id)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.0)
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().map(|item| item.id)
    }
}
