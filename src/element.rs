//! Element reference data.
//!
//! Everything here is immutable `'static` data loaded once:
//! - The 118-entry periodic table
//! - The fixed pool of round targets
//! - Origin tags (astrophysical formation process)
//! - Extended descriptions for the target elements

mod data;
mod origin;

pub use data::PERIODIC_TABLE;
pub use origin::{origins, Origin};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Atomic numbers of the elements every round is drawn from (B, Ca, K, Na, Mg).
pub const TARGET_POOL: [u8; 5] = [5, 20, 19, 11, 12];

/// A grid coordinate on the periodic table (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row (period). Rows 9 and 10 hold the lanthanide and actinide series.
    pub row: u8,
    /// Column (group).
    pub col: u8,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

/// Chemical category of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Hydrogen on its own.
    Hydrogen,
    /// Group 1 metals.
    AlkaliMetal,
    /// Group 2 metals.
    AlkalineEarthMetal,
    /// d-block metals.
    TransitionMetal,
    /// Post-transition metals.
    PoorMetal,
    /// Semi-metals.
    Metalloid,
    /// Reactive nonmetals.
    Nonmetal,
    /// Group 17.
    Halogen,
    /// Group 18.
    NobleGas,
    /// La through Lu.
    Lanthanide,
    /// Ac through Lr.
    Actinide,
}

impl Category {
    /// The kebab-case tag used in data files and JSON output.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Hydrogen => "hydrogen",
            Self::AlkaliMetal => "alkali-metal",
            Self::AlkalineEarthMetal => "alkaline-earth-metal",
            Self::TransitionMetal => "transition-metal",
            Self::PoorMetal => "poor-metal",
            Self::Metalloid => "metalloid",
            Self::Nonmetal => "nonmetal",
            Self::Halogen => "halogen",
            Self::NobleGas => "noble-gas",
            Self::Lanthanide => "lanthanide",
            Self::Actinide => "actinide",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALL: [Category; 11] = [
            Category::Hydrogen,
            Category::AlkaliMetal,
            Category::AlkalineEarthMetal,
            Category::TransitionMetal,
            Category::PoorMetal,
            Category::Metalloid,
            Category::Nonmetal,
            Category::Halogen,
            Category::NobleGas,
            Category::Lanthanide,
            Category::Actinide,
        ];
        ALL.into_iter()
            .find(|c| c.tag() == s)
            .ok_or_else(|| format!("unknown element category: {s}"))
    }
}

/// A 24-bit display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Build a color from `0xRRGGBB`.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0x00FF_FFFF)
    }

    /// Red, green and blue channels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Static descriptive record for one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Chemical symbol, e.g. `"Na"`.
    pub symbol: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Atomic number; the unique key.
    pub atomic_number: u8,
    /// Grid position.
    pub position: Position,
    /// Chemical category.
    pub category: Category,
    /// One-line description.
    pub description: &'static str,
    /// Display color.
    pub color: Color,
}

impl Element {
    /// Whether this element belongs to the lanthanide or actinide series.
    #[must_use]
    pub const fn is_f_block(&self) -> bool {
        matches!(self.category, Category::Lanthanide | Category::Actinide)
    }

    /// The longer blurb shown on the element card.
    #[must_use]
    pub fn extended_description(&self) -> &'static str {
        extended_description(self.atomic_number)
    }

    /// Formation processes for this element.
    #[must_use]
    pub fn origins(&self) -> &'static [Origin] {
        origins(self.atomic_number)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

/// Look up an element by atomic number.
#[must_use]
pub fn lookup(atomic_number: u8) -> Option<&'static Element> {
    let index = usize::from(atomic_number).checked_sub(1)?;
    PERIODIC_TABLE.get(index)
}

/// Look up an element by its symbol (case-insensitive).
#[must_use]
pub fn lookup_symbol(symbol: &str) -> Option<&'static Element> {
    PERIODIC_TABLE
        .iter()
        .find(|e| e.symbol.eq_ignore_ascii_case(symbol))
}

/// The default target pool in periodic-table order.
#[must_use]
pub fn target_pool() -> Vec<&'static Element> {
    PERIODIC_TABLE
        .iter()
        .filter(|e| TARGET_POOL.contains(&e.atomic_number))
        .collect()
}

/// Longer biology blurb for the target elements; a generic sentence otherwise.
///
/// The text continues the element's name ("Sodium has been shown to...").
#[must_use]
pub fn extended_description(atomic_number: u8) -> &'static str {
    match atomic_number {
        5 => {
            "is a known antimicrobial that has been linked to enhanced wound healing via release of growth factors and cytokines and increased turnover of extracellular matrix."
        }
        11 => {
            "has been shown to play a role in immune cell modulation of T cells and in regulating chemotaxis\u{2014}macrophages migrate toward increasing salt concentrations."
        }
        12 => {
            "supports adhesion of keratinocytes to the extracellular matrix. It can also disrupt pathogens through reactive oxygen species, causing oxidative damage."
        }
        19 => {
            "plays an essential role in cell membrane hyperpolarization of epithelial cells. This polarization enables specialized epithelial functions."
        }
        20 => {
            "is involved in hemostasis, cell migration during wound healing, and as a signal transmitter. Calcium-mediated chemotaxis helps reduce microbial load and aids healing."
        }
        _ => {
            "plays an important role in various biological processes and has unique properties that make it essential for life and technology."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_indexed_by_atomic_number() {
        for (i, element) in PERIODIC_TABLE.iter().enumerate() {
            assert_eq!(usize::from(element.atomic_number), i + 1, "{element}");
        }
    }

    #[test]
    fn test_positions_are_unique() {
        let positions: HashSet<Position> = PERIODIC_TABLE.iter().map(|e| e.position).collect();
        assert_eq!(positions.len(), PERIODIC_TABLE.len());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup(11).map(|e| e.symbol), Some("Na"));
        assert_eq!(lookup(118).map(|e| e.symbol), Some("Og"));
        assert!(lookup(0).is_none());
        assert!(lookup(119).is_none());
        assert_eq!(lookup_symbol("mg").map(|e| e.atomic_number), Some(12));
    }

    #[test]
    fn test_target_pool_in_table_order() {
        let pool: Vec<u8> = target_pool().iter().map(|e| e.atomic_number).collect();
        assert_eq!(pool, vec![5, 11, 12, 19, 20]);
    }

    #[test]
    fn test_f_block_rows() {
        for element in &PERIODIC_TABLE {
            match element.category {
                Category::Lanthanide => assert_eq!(element.position.row, 9),
                Category::Actinide => assert_eq!(element.position.row, 10),
                _ => assert!(element.position.row <= 7, "{element}"),
            }
        }
    }

    #[test]
    fn test_category_tag_roundtrip() {
        for element in &PERIODIC_TABLE {
            assert_eq!(element.category.tag().parse::<Category>(), Ok(element.category));
        }
        assert!("plasma".parse::<Category>().is_err());
    }

    #[test]
    fn test_color() {
        let color = Color::from_hex(0xFF6B6B);
        assert_eq!(color.rgb(), (0xFF, 0x6B, 0x6B));
        assert_eq!(color.to_string(), "#FF6B6B");
    }

    #[test]
    fn test_extended_description_fallback() {
        assert!(extended_description(11).contains("chemotaxis"));
        assert!(extended_description(1).starts_with("plays an important role"));
    }
}
