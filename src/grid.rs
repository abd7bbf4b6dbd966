//! Grid Geometry
//!
//! Fixed grid dimensions, cell coordinates and marker placement.

use std::collections::BTreeSet;
use std::fmt;

use crate::models::ClaimEntry;

/// Number of columns
pub const GRID_WIDTH: u32 = 80;
/// Number of rows
pub const GRID_HEIGHT: u32 = 25;

/// Glyph shown in an empty cell
pub const EMPTY_GLYPH: &str = ".";
/// Glyph shown over a claimed cell
pub const MARKER_GLYPH: &str = "☺";

/// In-bounds cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    /// Returns None outside `[0, GRID_WIDTH) x [0, GRID_HEIGHT)`
    pub fn new(x: u32, y: u32) -> Option<Self> {
        (x < GRID_WIDTH && y < GRID_HEIGHT).then_some(Self { x, y })
    }

    /// Build from signed wire coordinates
    pub fn from_signed(x: i64, y: i64) -> Option<Self> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        Self::new(x, y)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cell coordinates of one row, left to right
pub fn row_cells(y: u32) -> impl Iterator<Item = GridPos> {
    (0..GRID_WIDTH).filter_map(move |x| GridPos::new(x, y))
}

/// All cell coordinates in row-major order
#[cfg(test)]
pub fn cells() -> impl Iterator<Item = GridPos> {
    (0..GRID_HEIGHT).flat_map(row_cells)
}

/// Coordinates that get a marker: one per claimed in-bounds cell
pub fn marker_positions(entries: &[ClaimEntry]) -> BTreeSet<GridPos> {
    entries.iter().filter_map(ClaimEntry::pos).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(x: i64, y: i64) -> ClaimEntry {
        ClaimEntry {
            id: None,
            x,
            y,
            name: "n".to_string(),
            message: "m".to_string(),
        }
    }

    #[test]
    fn test_bounds() {
        assert!(GridPos::new(0, 0).is_some());
        assert!(GridPos::new(79, 24).is_some());
        assert!(GridPos::new(80, 0).is_none());
        assert!(GridPos::new(0, 25).is_none());
        assert!(GridPos::from_signed(-1, 3).is_none());
        assert_eq!(GridPos::from_signed(5, 6), GridPos::new(5, 6));
    }

    #[test]
    fn test_display() {
        for pos in cells() {
            assert_eq!(pos.to_string(), format!("({}, {})", pos.x, pos.y));
        }
        assert_eq!(GridPos::new(7, 12).unwrap().to_string(), "(7, 12)");
    }

    #[test]
    fn test_cells_row_major() {
        let all: Vec<_> = cells().collect();
        assert_eq!(all.len(), (GRID_WIDTH * GRID_HEIGHT) as usize);
        assert_eq!(all[0], GridPos { x: 0, y: 0 });
        assert_eq!(all[1], GridPos { x: 1, y: 0 });
        assert_eq!(all[GRID_WIDTH as usize], GridPos { x: 0, y: 1 });
        assert_eq!(*all.last().unwrap(), GridPos { x: 79, y: 24 });
    }

    #[test]
    fn test_marker_positions() {
        let entries = vec![entry(1, 1), entry(2, 3), entry(1, 1), entry(80, 0), entry(-2, 4)];
        let markers = marker_positions(&entries);
        assert_eq!(markers.len(), 2);
        assert!(markers.contains(&GridPos { x: 1, y: 1 }));
        assert!(markers.contains(&GridPos { x: 2, y: 3 }));
    }

    #[test]
    fn test_marker_positions_idempotent() {
        let entries = vec![entry(10, 10), entry(11, 10)];
        let first = marker_positions(&entries);
        let second = marker_positions(&entries.clone());
        assert_eq!(first, second);
        assert_eq!(second.len(), entries.len());
    }
}
