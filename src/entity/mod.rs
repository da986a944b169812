pub mod actor;
pub mod capability;
pub mod components;
pub mod dinosaur;
pub mod needs;
pub mod player;
pub mod species;

pub use actor::Actor;
pub use capability::{ActorCapabilities, ActorCapability, GroundCapabilities, GroundCapability};
pub use dinosaur::Dinosaur;
pub use player::Player;
pub use species::Species;
