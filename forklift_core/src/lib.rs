use std::fmt;

pub mod map;
pub mod warehouse;

/// Number of columns in the yard.
pub const GRID_WIDTH: usize = 16;
/// Number of rows in the yard.
pub const GRID_HEIGHT: usize = 8;

/// Cell the forklift occupies when a session starts.
pub const START_POSITION: Position = Position { x: 7, y: 3 };

/// Row holding the supply area (the truck bed).
pub const SUPPLY_ROW: usize = 0;
/// Columns of the supply area, end exclusive.
pub const SUPPLY_COLUMNS: std::ops::Range<usize> = 12..16;
/// Rows covered by the rack band, end exclusive.
pub const RACK_ROWS: std::ops::Range<usize> = 5..8;

/// Represents a 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The kinds of cargo that show up in the supply area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FreightType {
    Clothes,
    Fruit,
    NuclearWaste,
    CarParts,
}

impl FreightType {
    pub const ALL: [FreightType; 4] = [
        FreightType::Clothes,
        FreightType::Fruit,
        FreightType::NuclearWaste,
        FreightType::CarParts,
    ];

    /// Stable lowercase name of the freight type.
    pub fn name(self) -> &'static str {
        match self {
            FreightType::Clothes => "clothes",
            FreightType::Fruit => "fruit",
            FreightType::NuclearWaste => "nuclear_waste",
            FreightType::CarParts => "car_parts",
        }
    }
}

impl fmt::Display for FreightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freight_names_are_stable() {
        let names: Vec<_> = FreightType::ALL.iter().map(|f| f.to_string()).collect();
        assert_eq!(names, ["clothes", "fruit", "nuclear_waste", "car_parts"]);
    }

    #[test]
    fn start_and_supply_cells_fit_the_grid() {
        assert!(START_POSITION.x < GRID_WIDTH && START_POSITION.y < GRID_HEIGHT);
        assert!(SUPPLY_COLUMNS.end <= GRID_WIDTH);
        assert!(RACK_ROWS.end <= GRID_HEIGHT);
    }
}
