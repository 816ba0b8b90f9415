use forklift_core::{
    FreightType, Position,
    warehouse::{CarryState, Outcome, Warehouse, Zone},
};
use ratatui::{prelude::*, widgets::*};

/// Terminal columns covered by one grid cell.
pub const TILE_WIDTH: u16 = 4;
/// Terminal rows covered by one grid cell.
pub const TILE_HEIGHT: u16 = 2;

const FLOOR_LIGHT: Color = Color::Rgb(255, 255, 255);
const FLOOR_DARK: Color = Color::Rgb(225, 225, 225);
const SUPPLY_COLOR: Color = Color::Rgb(0, 0, 255);
const RACK_COLOR: Color = Color::Rgb(165, 42, 42);

/// A two-character stand-in for an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub label: &'static str,
    pub color: Color,
}

pub const FORKLIFT_SPRITE: Sprite = Sprite {
    label: "FL",
    color: Color::Rgb(255, 165, 0),
};

pub fn freight_sprite(freight: FreightType) -> Sprite {
    match freight {
        FreightType::Clothes => Sprite {
            label: "Cl",
            color: Color::Magenta,
        },
        FreightType::Fruit => Sprite {
            label: "Fr",
            color: Color::Green,
        },
        FreightType::NuclearWaste => Sprite {
            label: "Nw",
            color: Color::Yellow,
        },
        FreightType::CarParts => Sprite {
            label: "Cp",
            color: Color::Black,
        },
    }
}

/// Draws the yard: floor, supply area, racks, freight and the forklift, in that order.
pub struct YardWidget<'a> {
    warehouse: &'a Warehouse,
}

impl<'a> YardWidget<'a> {
    pub fn new(warehouse: &'a Warehouse) -> Self {
        YardWidget { warehouse }
    }

    /// Total size of the drawn grid, in terminal cells.
    pub fn size(&self) -> (u16, u16) {
        let layout = self.warehouse.layout();
        (
            layout.width() as u16 * TILE_WIDTH,
            layout.height() as u16 * TILE_HEIGHT,
        )
    }
}

impl Widget for YardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (position, zone) in self.warehouse.layout().enumerate() {
            let background = match zone {
                Zone::Supply => SUPPLY_COLOR,
                Zone::Rack => RACK_COLOR,
                Zone::Floor if (position.x + position.y) % 2 == 0 => FLOOR_LIGHT,
                Zone::Floor => FLOOR_DARK,
            };
            buf.set_style(tile_rect(area, position), Style::default().bg(background));
        }

        for (position, freight) in self.warehouse.freight() {
            draw_sprite(buf, tile_rect(area, *position), freight_sprite(*freight));
        }

        let forklift = self.warehouse.forklift();
        let tile = tile_rect(area, forklift.position);
        match forklift.carry {
            CarryState::Empty => draw_sprite(buf, tile, FORKLIFT_SPRITE),
            CarryState::Carrying(freight) => {
                let half_width = TILE_WIDTH / 2;
                let half_height = TILE_HEIGHT / 2;
                // Shrunk forklift bottom-left, its load top-right.
                let lift = Rect::new(tile.x, tile.y + half_height, half_width, half_height);
                let load = Rect::new(tile.x + half_width, tile.y, half_width, half_height);
                // Clear whatever sits under the forklift first.
                for y in tile.top()..tile.bottom() {
                    buf.set_stringn(
                        tile.x,
                        y,
                        " ".repeat(tile.width as usize),
                        tile.width as usize,
                        Style::default(),
                    );
                }
                draw_sprite(buf, lift.intersection(area), FORKLIFT_SPRITE);
                draw_sprite(buf, load.intersection(area), freight_sprite(freight));
            }
        }
    }
}

/// Maps a grid cell to its screen rectangle, clipped to `area`.
fn tile_rect(area: Rect, position: Position) -> Rect {
    Rect::new(
        area.x.saturating_add(position.x as u16 * TILE_WIDTH),
        area.y.saturating_add(position.y as u16 * TILE_HEIGHT),
        TILE_WIDTH,
        TILE_HEIGHT,
    )
    .intersection(area)
}

/// Fills every row of `rect` with the sprite's label, centred.
fn draw_sprite(buf: &mut Buffer, rect: Rect, sprite: Sprite) {
    if rect.is_empty() {
        return;
    }
    let label_width = sprite.label.len() as u16;
    let offset = rect.width.saturating_sub(label_width) / 2;
    let style = Style::default()
        .fg(sprite.color)
        .add_modifier(Modifier::BOLD);
    for y in rect.top()..rect.bottom() {
        buf.set_stringn(
            rect.x + offset,
            y,
            sprite.label,
            (rect.width - offset) as usize,
            style,
        );
    }
}

/// Renders the forklift's position, load and the result of the last command.
pub fn render_status(frame: &mut Frame, area: Rect, warehouse: &Warehouse, last: Option<Outcome>) {
    let forklift = warehouse.forklift();
    let load = match forklift.carry.carried() {
        None => Span::raw("nothing"),
        Some(freight) => Span::styled(
            freight.name(),
            Style::default().fg(freight_sprite(freight).color),
        ),
    };
    let status = Line::from(vec![
        Span::raw(format!("Pos: {}  Carrying: ", forklift.position)),
        load,
        Span::raw(format!(
            "  Freight in yard: {}  Last: {}",
            warehouse.freight().len(),
            last.map(describe).unwrap_or_else(|| "-".to_string())
        )),
    ]);
    let widget = Paragraph::new(status).block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(widget, area);
}

/// Human-readable summary of a command's effect.
pub fn describe(outcome: Outcome) -> String {
    match outcome {
        Outcome::Moved(position) => format!("moved to {}", position),
        Outcome::Blocked => "edge of the yard".to_string(),
        Outcome::PickedUp(freight) => format!("picked up {}", freight),
        Outcome::Dropped(freight) => format!("dropped {}", freight),
        Outcome::CellOccupied => "cell already occupied".to_string(),
        Outcome::NothingHere => "nothing to pick up".to_string(),
        Outcome::Restocked => "supply restocked".to_string(),
        Outcome::Quit => "quitting".to_string(),
    }
}
