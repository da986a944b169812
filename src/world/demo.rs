//! A small two-map park used by the binary and the integration tests

use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::{GrowthStage, LocationId, MapId};
use crate::entity::dinosaur::Dinosaur;
use crate::entity::player::Player;
use crate::entity::species::Species;
use crate::world::map::{Axis, GroundFactory};
use crate::world::World;

const NORTH_PARK: [&str; 8] = [
    "........................................",
    "....~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~....",
    "....~##############################~....",
    "....~#____________________________#~....",
    "....~#____________________________#~....",
    "....~##############################~....",
    "....~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~....",
    "........................................",
];

const SOUTH_PARK: [&str; 14] = [
    "........................................",
    ".....#######............................",
    ".....#_____#............................",
    ".....###.###.............+++............",
    ".......$..................++++..........",
    "......................+++++.............",
    "........................++++++..........",
    ".........+++...............+++..........",
    "..........++++...........~~~............",
    "...........++...........~~~~~~....+++...",
    ".......................~~~~~~~~..+++++..",
    "........................~~~~~~....+++...",
    "..........................~~............",
    "........................................",
];

/// Where each starting dinosaur goes, with an optional fixed gender
const STARTERS: [(Species, u32, u32, Option<char>); 12] = [
    (Species::Stegosaur, 20, 9, None),
    (Species::Stegosaur, 18, 6, None),
    (Species::Allosaur, 22, 12, None),
    (Species::Allosaur, 32, 6, None),
    (Species::Brachiosaur, 23, 4, Some('M')),
    (Species::Brachiosaur, 25, 3, Some('M')),
    (Species::Brachiosaur, 23, 6, Some('F')),
    (Species::Brachiosaur, 22, 4, Some('F')),
    (Species::Pterodactyl, 34, 10, Some('M')),
    (Species::Pterodactyl, 36, 10, Some('M')),
    (Species::Pterodactyl, 35, 9, Some('F')),
    (Species::Pterodactyl, 35, 11, Some('F')),
];

/// Build the demo park: two maps joined north-south, a player, twelve adults
pub fn demo_park(config: SimulationConfig, rng: &mut ChaCha8Rng) -> Result<World> {
    let mut world = World::new(config);
    let factory = GroundFactory::standard(&world.config);
    let north = world.add_layout(&NORTH_PARK, &factory)?;
    let south = world.add_layout(&SOUTH_PARK, &factory)?;
    world.connect_maps(north, south, Axis::X)?;

    crate::simulation::terrain::seed_initial_growth(&mut world, rng);

    let player = Player::new("Player", world.config.player_hit_points, &mut world.ids);
    world.add_player(player, LocationId::new(south, 8, 2))?;

    for (species, x, y, gender) in STARTERS {
        let dino = Dinosaur::from_tokens(species, "adult", gender, &mut world.ids, rng)?;
        world.add_actor(dino, LocationId::new(south, x, y))?;
    }
    info!(
        maps = world.maps().count(),
        actors = world.actor_count(),
        "demo park ready"
    );
    Ok(world)
}

/// The map the player starts on
pub fn demo_start_map() -> MapId {
    MapId(1)
}
