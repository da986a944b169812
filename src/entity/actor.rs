//! Anything that occupies a location and takes turns

use std::fmt;

use crate::core::types::ActorId;
use crate::entity::capability::ActorCapabilities;
use crate::entity::dinosaur::Dinosaur;
use crate::entity::player::Player;
use crate::world::item::Item;

#[derive(Debug, Clone)]
pub enum Actor {
    Player(Player),
    Dinosaur(Dinosaur),
}

impl Actor {
    pub fn id(&self) -> ActorId {
        match self {
            Actor::Player(p) => p.id,
            Actor::Dinosaur(d) => d.id,
        }
    }

    pub fn display_char(&self) -> char {
        match self {
            Actor::Player(p) => p.display_char,
            Actor::Dinosaur(d) => d.display_char,
        }
    }

    pub fn capabilities(&self) -> ActorCapabilities {
        match self {
            Actor::Player(p) => p.capabilities,
            Actor::Dinosaur(d) => d.capabilities,
        }
    }

    pub fn is_conscious(&self) -> bool {
        match self {
            Actor::Player(p) => p.is_conscious(),
            Actor::Dinosaur(d) => d.is_conscious(),
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self, Actor::Player(_))
    }

    pub fn as_dinosaur(&self) -> Option<&Dinosaur> {
        match self {
            Actor::Dinosaur(d) => Some(d),
            Actor::Player(_) => None,
        }
    }

    pub fn as_dinosaur_mut(&mut self) -> Option<&mut Dinosaur> {
        match self {
            Actor::Dinosaur(d) => Some(d),
            Actor::Player(_) => None,
        }
    }

    pub fn as_player(&self) -> Option<&Player> {
        match self {
            Actor::Player(p) => Some(p),
            Actor::Dinosaur(_) => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut Player> {
        match self {
            Actor::Player(p) => Some(p),
            Actor::Dinosaur(_) => None,
        }
    }

    pub fn hurt(&mut self, points: i32) {
        match self {
            Actor::Player(p) => p.hit_points = (p.hit_points - points).max(0),
            Actor::Dinosaur(d) => d.needs.hurt(points),
        }
    }

    pub fn max_hit_points(&self) -> i32 {
        match self {
            Actor::Player(p) => p.max_hit_points,
            Actor::Dinosaur(d) => d.needs.max_hit_points,
        }
    }

    /// Take everything the actor carries
    pub fn drain_inventory(&mut self) -> Vec<Item> {
        match self {
            Actor::Player(p) => std::mem::take(&mut p.inventory),
            Actor::Dinosaur(d) => std::mem::take(&mut d.inventory),
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::Player(p) => p.fmt(f),
            Actor::Dinosaur(d) => d.fmt(f),
        }
    }
}

impl From<Dinosaur> for Actor {
    fn from(dino: Dinosaur) -> Self {
        Actor::Dinosaur(dino)
    }
}

impl From<Player> for Actor {
    fn from(player: Player) -> Self {
        Actor::Player(player)
    }
}
