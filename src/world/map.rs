//! Grid maps of locations joined by labelled exits
//!
//! Exits are owned by their source location and may be asymmetric, so the
//! location graph is directed. Inside a map every cell gets up to eight
//! exits; [`connect_maps`] adds boundary exits between two maps.

use ahash::AHashMap;

use crate::core::config::SimulationConfig;
use crate::core::error::{DinoError, Result};
use crate::core::types::{ActorId, LocationId, MapId};
use crate::world::ground::Ground;
use crate::world::item::Item;

/// A directed edge of the location graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    pub name: String,
    pub hotkey: String,
    pub destination: LocationId,
}

impl Exit {
    pub fn new(name: impl Into<String>, hotkey: impl Into<String>, destination: LocationId) -> Self {
        Self {
            name: name.into(),
            hotkey: hotkey.into(),
            destination,
        }
    }
}

/// One node of the location graph
#[derive(Debug, Clone)]
pub struct Location {
    pub id: LocationId,
    pub ground: Ground,
    pub items: Vec<Item>,
    pub actor: Option<ActorId>,
    pub exits: Vec<Exit>,
}

impl Location {
    pub fn is_occupied(&self) -> bool {
        self.actor.is_some()
    }
}

/// Neighbour offsets in exit enumeration order, with names and hotkeys
const DIRECTIONS: [(&str, &str, i64, i64); 8] = [
    ("North", "8", 0, -1),
    ("North-East", "9", 1, -1),
    ("East", "6", 1, 0),
    ("South-East", "3", 1, 1),
    ("South", "2", 0, 1),
    ("South-West", "1", -1, 1),
    ("West", "4", -1, 0),
    ("North-West", "7", -1, -1),
];

/// Maps layout characters to ground constructors
pub struct GroundFactory {
    builders: AHashMap<char, Box<dyn Fn() -> Ground>>,
}

impl GroundFactory {
    pub fn new() -> Self {
        Self {
            builders: AHashMap::new(),
        }
    }

    /// Dirt `.`, wall `#`, floor `_`, tree `+`, bush `*`, lake `~`, vending machine `$`
    pub fn standard(config: &SimulationConfig) -> Self {
        let lake_config = config.clone();
        let mut factory = Self::new();
        factory.register('.', Ground::dirt);
        factory.register('#', Ground::wall);
        factory.register('_', Ground::floor);
        factory.register('+', Ground::tree);
        factory.register('*', Ground::bush);
        factory.register('~', move || Ground::lake(&lake_config));
        factory.register('$', Ground::vending_machine);
        factory
    }

    pub fn register(&mut self, symbol: char, builder: impl Fn() -> Ground + 'static) {
        self.builders.insert(symbol, Box::new(builder));
    }

    pub fn build(&self, symbol: char) -> Result<Ground> {
        self.builders
            .get(&symbol)
            .map(|builder| builder())
            .ok_or_else(|| DinoError::InvalidArgument(format!("no ground for layout symbol {symbol:?}")))
    }
}

impl Default for GroundFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// A rectangular grid of locations
#[derive(Debug, Clone)]
pub struct GameMap {
    pub id: MapId,
    width: u32,
    height: u32,
    locations: Vec<Location>,
}

impl GameMap {
    /// Build a map from text rows, one character per location
    pub fn from_layout<S: AsRef<str>>(id: MapId, rows: &[S], factory: &GroundFactory) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count()) as u32;
        if width == 0 || height == 0 {
            return Err(DinoError::Configuration("map layout is empty".into()));
        }

        let mut locations = Vec::with_capacity((width * height) as usize);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() as u32 != width {
                return Err(DinoError::Configuration(format!(
                    "map layout row {y} has {} columns, expected {width}",
                    row.chars().count()
                )));
            }
            for (x, symbol) in row.chars().enumerate() {
                locations.push(Location {
                    id: LocationId::new(id, x as u32, y as u32),
                    ground: factory.build(symbol)?,
                    items: Vec::new(),
                    actor: None,
                    exits: Vec::new(),
                });
            }
        }

        let mut map = Self {
            id,
            width,
            height,
            locations,
        };
        map.link_neighbours();
        Ok(map)
    }

    fn link_neighbours(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let mut exits = Vec::with_capacity(8);
                for (name, hotkey, dx, dy) in DIRECTIONS {
                    let nx = x as i64 + dx;
                    let ny = y as i64 + dy;
                    if nx >= 0 && ny >= 0 && (nx as u32) < self.width && (ny as u32) < self.height {
                        exits.push(Exit::new(name, hotkey, LocationId::new(self.id, nx as u32, ny as u32)));
                    }
                }
                let index = self.index(x, y);
                self.locations[index].exits = exits;
            }
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn x_range(&self) -> std::ops::Range<u32> {
        0..self.width
    }

    pub fn y_range(&self) -> std::ops::Range<u32> {
        0..self.height
    }

    pub fn contains(&self, id: LocationId) -> bool {
        id.map == self.id && id.x < self.width && id.y < self.height
    }

    pub fn at(&self, x: u32, y: u32) -> Option<&Location> {
        (x < self.width && y < self.height).then(|| &self.locations[self.index(x, y)])
    }

    pub fn at_mut(&mut self, x: u32, y: u32) -> Option<&mut Location> {
        if x < self.width && y < self.height {
            let index = self.index(x, y);
            Some(&mut self.locations[index])
        } else {
            None
        }
    }

    pub fn get(&self, id: LocationId) -> Option<&Location> {
        if id.map != self.id {
            return None;
        }
        self.at(id.x, id.y)
    }

    pub fn get_mut(&mut self, id: LocationId) -> Option<&mut Location> {
        if id.map != self.id {
            return None;
        }
        self.at_mut(id.x, id.y)
    }

    /// Locations in row-major order
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn location_ids(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.locations.iter().map(|location| location.id)
    }
}

/// Which shared edge two maps are joined along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// First map sits north of the second; widths must match
    X,
    /// First map sits west of the second; heights must match
    Y,
}

impl Axis {
    pub fn from_token(token: char) -> Result<Self> {
        match token {
            'x' => Ok(Axis::X),
            'y' => Ok(Axis::Y),
            other => Err(DinoError::InvalidArgument(format!(
                "axis must be either 'x' or 'y', got {other:?}"
            ))),
        }
    }
}

/// Join the boundary edges of two maps with mutual exits
pub fn connect_maps(first: &mut GameMap, second: &mut GameMap, axis: Axis) -> Result<()> {
    match axis {
        Axis::X => {
            if first.width != second.width {
                return Err(DinoError::Configuration(format!(
                    "cannot join maps north-south: widths {} and {} differ",
                    first.width, second.width
                )));
            }
            let bottom = first.height - 1;
            for x in first.x_range() {
                let upper = LocationId::new(first.id, x, bottom);
                let lower = LocationId::new(second.id, x, 0);
                if let Some(location) = first.get_mut(upper) {
                    location.exits.push(Exit::new("South", "2", lower));
                }
                if let Some(location) = second.get_mut(lower) {
                    location.exits.push(Exit::new("North", "8", upper));
                }
            }
        }
        Axis::Y => {
            if first.height != second.height {
                return Err(DinoError::Configuration(format!(
                    "cannot join maps east-west: heights {} and {} differ",
                    first.height, second.height
                )));
            }
            let right = first.width - 1;
            for y in first.y_range() {
                let west = LocationId::new(first.id, right, y);
                let east = LocationId::new(second.id, 0, y);
                if let Some(location) = first.get_mut(west) {
                    location.exits.push(Exit::new("East", "6", east));
                }
                if let Some(location) = second.get_mut(east) {
                    location.exits.push(Exit::new("West", "4", west));
                }
            }
        }
    }
    Ok(())
}
