//! Periodic-table layout.
//!
//! The full table is 18 columns wide, which does not fit a phone screen, so
//! it is shown one half at a time: columns 1-9 or 10-18. Lanthanides and
//! actinides get two extra rows below the main table, starting at column 3.

use crate::element::{Category, Element, PERIODIC_TABLE};
use crate::game::{GameState, Phase};

/// Columns visible at once.
pub const COLUMNS: usize = 9;

/// Rows in the main table.
pub const MAIN_ROWS: usize = 7;

const MIN_CELL: f32 = 32.0;
const MAX_CELL: f32 = 50.0;
const RESERVED_HEIGHT_FRACTION: f32 = 0.35;
const HORIZONTAL_PADDING: f32 = 40.0;

/// Screen size in points (or terminal cells).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

/// Side length of one table cell for a viewport.
///
/// Reserves a third of the height for the rest of the UI and fits nine
/// columns by nine rows (main table plus the two f-block rows), clamped to
/// 32-50.
#[must_use]
pub fn cell_size(viewport: Viewport) -> f32 {
    let available_height = viewport.height * (1.0 - RESERVED_HEIGHT_FRACTION);
    let available_width = viewport.width - HORIZONTAL_PADDING;

    #[allow(clippy::cast_precision_loss)]
    let from_width = available_width / COLUMNS as f32;
    #[allow(clippy::cast_precision_loss)]
    let from_height = available_height / (MAIN_ROWS + 2) as f32;

    from_width.min(from_height).clamp(MIN_CELL, MAX_CELL)
}

/// Which half of the table is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TableHalf {
    /// Columns 1-9.
    #[default]
    Left,
    /// Columns 10-18.
    Right,
}

impl TableHalf {
    /// The other half.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Map an absolute column (1-18) to a visible one (1-9), if on this half.
    #[must_use]
    pub fn visible_col(self, col: usize) -> Option<usize> {
        match self {
            Self::Left if (1..=COLUMNS).contains(&col) => Some(col),
            Self::Right if (COLUMNS + 1..=COLUMNS * 2).contains(&col) => Some(col - COLUMNS),
            _ => None,
        }
    }
}

/// One row of visible cells.
pub type Row = [Option<&'static Element>; COLUMNS];

/// The visible grid for one half of the table.
#[derive(Debug, Clone)]
pub struct TableGrid {
    /// Which half this is.
    pub half: TableHalf,
    /// Main table, row 1 first.
    pub main: [Row; MAIN_ROWS],
    /// Lanthanide row.
    pub lanthanides: Row,
    /// Actinide row.
    pub actinides: Row,
}

impl TableGrid {
    /// Lay out one half of the table.
    #[must_use]
    pub fn build(half: TableHalf) -> Self {
        let mut grid = Self {
            half,
            main: [[None; COLUMNS]; MAIN_ROWS],
            lanthanides: [None; COLUMNS],
            actinides: [None; COLUMNS],
        };

        for element in PERIODIC_TABLE.iter().filter(|e| !e.is_f_block()) {
            let row = usize::from(element.position.row);
            if !(1..=MAIN_ROWS).contains(&row) {
                continue;
            }
            if let Some(col) = half.visible_col(usize::from(element.position.col)) {
                grid.main[row - 1][col - 1] = Some(element);
            }
        }

        place_series(&mut grid.lanthanides, half, Category::Lanthanide);
        place_series(&mut grid.actinides, half, Category::Actinide);

        grid
    }

    /// All rows top to bottom: main rows then the two series rows.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.main
            .iter()
            .chain(std::iter::once(&self.lanthanides))
            .chain(std::iter::once(&self.actinides))
    }

    /// Locate an element on this half as (row index, column index), 0-based
    /// over [`TableGrid::rows`].
    #[must_use]
    pub fn find(&self, atomic_number: u8) -> Option<(usize, usize)> {
        self.rows().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|cell| cell.is_some_and(|e| e.atomic_number == atomic_number))
                .map(|c| (r, c))
        })
    }
}

/// Lay a 15-element f-block series out from column 3.
fn place_series(row: &mut Row, half: TableHalf, category: Category) {
    let series = PERIODIC_TABLE.iter().filter(|e| e.category == category);
    for (i, element) in series.enumerate() {
        if let Some(col) = half.visible_col(i + 3) {
            row[col - 1] = Some(element);
        }
    }
}

/// Which half of the table shows an element.
#[must_use]
pub fn half_of(element: &Element) -> TableHalf {
    let col = if element.is_f_block() {
        let series = PERIODIC_TABLE
            .iter()
            .filter(|e| e.category == element.category)
            .position(|e| e.atomic_number == element.atomic_number)
            .unwrap_or(0);
        series + 3
    } else {
        usize::from(element.position.col)
    };
    if col > COLUMNS {
        TableHalf::Right
    } else {
        TableHalf::Left
    }
}

/// How a cell is drawn for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellRole {
    /// No element at this position.
    Blank,
    /// An ordinary element with its symbol shown.
    Plain,
    /// A target being memorized.
    MemorizeTarget,
    /// A target not yet recalled; its symbol is hidden.
    Hidden,
    /// The target the player is asked to name right now.
    CurrentTarget,
    /// A target recalled correctly.
    Recalled,
}

impl CellRole {
    /// Role of a cell for a state.
    #[must_use]
    pub fn for_cell(state: &GameState, cell: Option<&Element>) -> Self {
        let Some(element) = cell else {
            return Self::Blank;
        };
        let number = element.atomic_number;
        if !state.is_target(number) {
            return Self::Plain;
        }
        match state.phase {
            Phase::Memorize => Self::MemorizeTarget,
            Phase::Recall if state.is_recalled(number) => Self::Recalled,
            Phase::Recall if state.current_target().map(|e| e.atomic_number) == Some(number) => {
                Self::CurrentTarget
            }
            Phase::Recall => Self::Hidden,
            Phase::GameEnd if state.is_recalled(number) => Self::Recalled,
            _ => Self::Plain,
        }
    }

    /// Whether the element's symbol is visible.
    #[must_use]
    pub const fn shows_symbol(self) -> bool {
        matches!(self, Self::Plain | Self::MemorizeTarget | Self::Recalled)
    }
}

/// Indices of the three visible carousel cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselWindow {
    /// Card above the focused one.
    pub previous: usize,
    /// Focused card.
    pub current: usize,
    /// Card below the focused one.
    pub next: usize,
}

impl CarouselWindow {
    /// Window around `index` in a pool of `len` choices, wrapping at both
    /// ends. `None` for an empty pool.
    #[must_use]
    pub fn around(len: usize, index: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let current = index.min(len - 1);
        Some(Self {
            previous: if current == 0 { len - 1 } else { current - 1 },
            current,
            next: if current + 1 == len { 0 } else { current + 1 },
        })
    }
}
