//! # Tile Catalog
//!
//! The closed set of tile types found in the mine and their static metadata.

use serde::{Deserialize, Serialize};

/// Every kind of tile the mine can contain.
///
/// The discriminant doubles as the index into the tile catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Dirt = 0,
    Empty = 1,
    Silver = 2,
    Gold = 3,
    Platinum = 4,
    Diamond = 5,
    Granite = 6,
    Water = 7,
    Spring = 8,
    Sandstone = 9,
    Volcanic = 10,
    Clover = 11,
    Pump = 12,
    Ring = 13,
}

impl TileType {
    /// Number of tile types.
    pub const COUNT: usize = 14;

    /// All tile types in tag order.
    pub const ALL: [TileType; Self::COUNT] = [
        TileType::Dirt,
        TileType::Empty,
        TileType::Silver,
        TileType::Gold,
        TileType::Platinum,
        TileType::Diamond,
        TileType::Granite,
        TileType::Water,
        TileType::Spring,
        TileType::Sandstone,
        TileType::Volcanic,
        TileType::Clover,
        TileType::Pump,
        TileType::Ring,
    ];

    /// Integer tag of this tile type.
    pub const fn tag(self) -> usize {
        self as usize
    }

    /// Looks a tile type up by integer tag.
    pub fn from_tag(tag: usize) -> Option<TileType> {
        Self::ALL.get(tag).copied()
    }

    /// Metadata for this tile type.
    pub fn info(self) -> &'static TileInfo {
        TileCatalog::info(self)
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Single character used by the terminal view.
    pub fn glyph(self) -> char {
        match self {
            TileType::Dirt => '.',
            TileType::Empty => ' ',
            TileType::Silver => 's',
            TileType::Gold => 'g',
            TileType::Platinum => 'p',
            TileType::Diamond => '*',
            TileType::Granite => '#',
            TileType::Water => '~',
            TileType::Spring => 'o',
            TileType::Sandstone => ':',
            TileType::Volcanic => '^',
            TileType::Clover => '%',
            TileType::Pump => '&',
            TileType::Ring => '$',
        }
    }

    /// Whether the player can walk into this tile without digging.
    pub fn is_passable(self) -> bool {
        self == TileType::Empty
    }
}

impl std::fmt::Display for TileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An RGB display colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates a colour from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formats the colour as a `#RRGGBB` hex string.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Static metadata for one tile type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileInfo {
    /// Display name
    pub name: &'static str,
    /// Base dig cost in dollars
    pub dig_cost: i64,
    /// Nominal mineral value; actual payouts come from the economy rules
    pub value: i64,
    /// Display colour
    pub color: Rgb,
}

const fn info(name: &'static str, dig_cost: i64, value: i64, color: Rgb) -> TileInfo {
    TileInfo {
        name,
        dig_cost,
        value,
        color,
    }
}

const CATALOG: [TileInfo; TileType::COUNT] = [
    info("dirt", 20, 0, Rgb::new(0x8B, 0x45, 0x13)),
    info("empty", 0, 0, Rgb::new(0x00, 0x00, 0x00)),
    info("silver", 20, 15, Rgb::new(0xC0, 0xC0, 0xC0)),
    info("gold", 20, 50, Rgb::new(0xFF, 0xD7, 0x00)),
    info("platinum", 20, 250, Rgb::new(0xE5, 0xE4, 0xE2)),
    info("diamond", 20, 1000, Rgb::new(0x00, 0xFF, 0xFF)),
    info("granite", 150, 0, Rgb::new(0x80, 0x80, 0x80)),
    info("water", 150, 0, Rgb::new(0x00, 0x00, 0xFF)),
    info("spring", 20, 0, Rgb::new(0x00, 0xFF, 0x00)),
    info("sandstone", 10, 0, Rgb::new(0xF4, 0xA4, 0x60)),
    info("volcanic rock", 30, 0, Rgb::new(0xFF, 0x00, 0x00)),
    info("clover", 20, 0, Rgb::new(0x00, 0x80, 0x00)),
    info("pump", 20, 0, Rgb::new(0x80, 0x00, 0x80)),
    info("ring", 20, 0, Rgb::new(0xFF, 0xFF, 0x00)),
];

/// Pure lookups into the per-tile metadata table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TileCatalog;

impl TileCatalog {
    /// Full metadata for a tile type.
    pub fn info(tile: TileType) -> &'static TileInfo {
        &CATALOG[tile.tag()]
    }

    /// Metadata by raw tag. Unknown tags fall back to dirt.
    pub fn info_by_tag(tag: usize) -> &'static TileInfo {
        CATALOG.get(tag).unwrap_or(&CATALOG[TileType::Dirt.tag()])
    }

    /// Base dig cost listed for the tile.
    pub fn cost_of(tile: TileType) -> i64 {
        Self::info(tile).dig_cost
    }

    /// Nominal value listed for the tile.
    pub fn value_of(tile: TileType) -> i64 {
        Self::info(tile).value
    }

    /// Display colour of the tile.
    pub fn color_of(tile: TileType) -> Rgb {
        Self::info(tile).color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_index_catalog() {
        for (tag, tile) in TileType::ALL.iter().enumerate() {
            assert_eq!(tile.tag(), tag);
            assert_eq!(TileType::from_tag(tag), Some(*tile));
        }
        assert_eq!(TileType::from_tag(TileType::COUNT), None);
    }

    #[test]
    fn test_catalog_costs() {
        assert_eq!(TileCatalog::cost_of(TileType::Dirt), 20);
        assert_eq!(TileCatalog::cost_of(TileType::Empty), 0);
        assert_eq!(TileCatalog::cost_of(TileType::Granite), 150);
        assert_eq!(TileCatalog::cost_of(TileType::Water), 150);
        assert_eq!(TileCatalog::cost_of(TileType::Sandstone), 10);
        assert_eq!(TileCatalog::cost_of(TileType::Volcanic), 30);
    }

    #[test]
    fn test_catalog_values_and_colors() {
        assert_eq!(TileCatalog::value_of(TileType::Diamond), 1000);
        assert_eq!(TileCatalog::value_of(TileType::Platinum), 250);
        assert_eq!(TileCatalog::color_of(TileType::Gold).to_hex(), "#FFD700");
        assert_eq!(TileCatalog::color_of(TileType::Empty).to_hex(), "#000000");
    }

    #[test]
    fn test_unknown_tag_falls_back_to_dirt() {
        assert_eq!(TileCatalog::info_by_tag(99), TileCatalog::info(TileType::Dirt));
    }

    #[test]
    fn test_only_empty_is_passable() {
        for tile in TileType::ALL {
            assert_eq!(tile.is_passable(), tile == TileType::Empty);
        }
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let mut glyphs: Vec<char> = TileType::ALL.iter().map(|tile| tile.glyph()).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), TileType::COUNT);
        assert_eq!(TileType::Empty.glyph(), ' ');
    }
}
