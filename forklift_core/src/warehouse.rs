use std::collections::HashMap;

use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    FreightType, GRID_HEIGHT, GRID_WIDTH, Position, RACK_ROWS, START_POSITION, SUPPLY_COLUMNS,
    SUPPLY_ROW, map::Grid,
};

/// Represents the static purpose of a cell in the yard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    #[default]
    Floor,
    /// The truck bed where fresh freight appears.
    Supply,
    Rack,
}

/// What the forklift currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarryState {
    #[default]
    Empty,
    Carrying(FreightType),
}

impl CarryState {
    pub fn carried(&self) -> Option<FreightType> {
        match self {
            CarryState::Empty => None,
            CarryState::Carrying(freight) => Some(*freight),
        }
    }
}

/// Commands the input side can issue against the yard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Interact,
    ResetSupply,
    Quit,
}

/// Describes the effect a command had. Every command yields one, even when
/// nothing changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Moved(Position),
    /// The move would have left the grid.
    Blocked,
    PickedUp(FreightType),
    Dropped(FreightType),
    /// Carrying, but the cell below already holds freight.
    CellOccupied,
    /// Empty-handed on a cell with no freight.
    NothingHere,
    Restocked,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forklift {
    pub position: Position,
    pub carry: CarryState,
}

/// Owns the whole game state: the yard layout, the forklift and the freight
/// registry.
#[derive(Debug)]
pub struct Warehouse {
    layout: Grid<Zone>,
    forklift: Forklift,
    freight: HashMap<Position, FreightType>,
    rng: StdRng,
}

impl Warehouse {
    /// Creates a fresh yard with an OS-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a fresh yard whose supply rolls are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut warehouse = Warehouse {
            layout: Grid::from_generator(GRID_WIDTH, GRID_HEIGHT, zone_for),
            forklift: Forklift {
                position: START_POSITION,
                carry: CarryState::Empty,
            },
            freight: HashMap::new(),
            rng,
        };
        warehouse.reset_supply();
        warehouse
    }

    /// Applies a single command and reports what happened.
    pub fn apply(&mut self, command: Command) -> Outcome {
        let outcome = match command {
            Command::MoveLeft => self.move_by(-1, 0),
            Command::MoveRight => self.move_by(1, 0),
            Command::MoveUp => self.move_by(0, -1),
            Command::MoveDown => self.move_by(0, 1),
            Command::Interact => self.interact(),
            Command::ResetSupply => self.reset_supply(),
            Command::Quit => Outcome::Quit,
        };
        debug!("{:?} -> {:?}", command, outcome);
        outcome
    }

    /// Moves the forklift one cell. Moves that would leave the grid are ignored.
    pub fn move_by(&mut self, dx: isize, dy: isize) -> Outcome {
        match self.layout.step(self.forklift.position, dx, dy) {
            Ok(target) => {
                self.forklift.position = target;
                Outcome::Moved(target)
            }
            Err(err) => {
                debug!("Move ignored: {}", err);
                Outcome::Blocked
            }
        }
    }

    /// Refills every supply cell with a random freight type, replacing
    /// whatever was there.
    pub fn reset_supply(&mut self) -> Outcome {
        for x in SUPPLY_COLUMNS {
            let index = self.rng.random_range(0..FreightType::ALL.len());
            self.freight
                .insert(Position::new(x, SUPPLY_ROW), FreightType::ALL[index]);
        }
        info!("Supply area restocked");
        Outcome::Restocked
    }

    /// Picks up the freight under the forklift, or drops the carried freight
    /// onto an empty cell.
    pub fn interact(&mut self) -> Outcome {
        let here = self.forklift.position;
        match self.forklift.carry {
            CarryState::Carrying(freight) => {
                if self.freight.contains_key(&here) {
                    Outcome::CellOccupied
                } else {
                    self.freight.insert(here, freight);
                    self.forklift.carry = CarryState::Empty;
                    Outcome::Dropped(freight)
                }
            }
            CarryState::Empty => match self.freight.remove(&here) {
                Some(freight) => {
                    self.forklift.carry = CarryState::Carrying(freight);
                    Outcome::PickedUp(freight)
                }
                None => Outcome::NothingHere,
            },
        }
    }

    pub fn forklift(&self) -> &Forklift {
        &self.forklift
    }

    pub fn carry_state(&self) -> CarryState {
        self.forklift.carry
    }

    /// The freight registry, keyed by the cell each item occupies.
    pub fn freight(&self) -> &HashMap<Position, FreightType> {
        &self.freight
    }

    pub fn freight_at(&self, position: Position) -> Option<FreightType> {
        self.freight.get(&position).copied()
    }

    pub fn layout(&self) -> &Grid<Zone> {
        &self.layout
    }
}

impl Default for Warehouse {
    fn default() -> Self {
        Self::new()
    }
}

fn zone_for(position: Position) -> Zone {
    if position.y == SUPPLY_ROW && SUPPLY_COLUMNS.contains(&position.x) {
        Zone::Supply
    } else if RACK_ROWS.contains(&position.y) {
        Zone::Rack
    } else {
        Zone::Floor
    }
}

#[cfg(test)]
impl Warehouse {
    /// Teleports the forklift, for setting up test scenarios.
    pub(crate) fn place_forklift(&mut self, position: Position) {
        assert!(self.layout.contains(position));
        self.forklift.position = position;
    }
}
