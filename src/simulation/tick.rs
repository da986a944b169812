//! Turn loop - orchestrates one park turn
//!
//! draw -> weather -> every actor in registration order -> location ticks
//!
//! Actors are resolved over a snapshot taken at the start of the turn, so
//! babies hatched this turn wait for the next one and actors killed earlier
//! in the turn are skipped. Everything runs on one thread and every change
//! is visible to the actors that come later.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::actions::execute::execute;
use crate::core::error::{DinoError, Result};
use crate::core::types::{ActorId, Turn};
use crate::simulation::display::DisplaySink;
use crate::simulation::lifecycle::play_turn;
use crate::simulation::player::{execute_player_command, PlayerCommand, PlayerController};
use crate::simulation::terrain::tick_all_locations;
use crate::simulation::weather::roll_rain;
use crate::world::render::render_map;
use crate::world::World;

/// How the game ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameMode {
    /// Runs until the player leaves
    Sandbox,
    /// Runs until the ledger reaches `target_points` or `max_turns` pass
    Challenge { max_turns: Turn, target_points: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ending {
    Won,
    Lost,
    GameOver,
}

impl Ending {
    pub fn message(self) -> &'static str {
        match self {
            Ending::Won => "###   Player won!   ###",
            Ending::Lost => "###   Player lost.   ###",
            Ending::GameOver => "Game over.",
        }
    }
}

/// Summary of a finished run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub ending: Ending,
    pub turns: Turn,
    pub eco_points: u64,
    pub population: BTreeMap<String, usize>,
}

/// The park plus everything needed to drive it
pub struct Simulation<C: PlayerController, D: DisplaySink> {
    pub world: World,
    pub rng: ChaCha8Rng,
    pub controller: C,
    pub display: D,
    pub mode: GameMode,
    turn: Turn,
}

impl<C: PlayerController, D: DisplaySink> Simulation<C, D> {
    pub fn new(world: World, rng: ChaCha8Rng, controller: C, display: D, mode: GameMode) -> Self {
        Self {
            world,
            rng,
            controller,
            display,
            mode,
            turn: 0,
        }
    }

    pub fn with_seed(world: World, seed: u64, controller: C, display: D, mode: GameMode) -> Self {
        Self::new(world, ChaCha8Rng::seed_from_u64(seed), controller, display, mode)
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn still_running(&self) -> bool {
        if self.world.player_id().is_none() {
            return false;
        }
        match self.mode {
            GameMode::Sandbox => true,
            GameMode::Challenge {
                max_turns,
                target_points,
            } => !self.world.ledger.can_afford(target_points) && self.turn < max_turns,
        }
    }

    pub fn ending(&self) -> Ending {
        match self.mode {
            GameMode::Sandbox => Ending::GameOver,
            GameMode::Challenge { target_points, .. } if self.world.ledger.can_afford(target_points) => {
                Ending::Won
            }
            GameMode::Challenge { .. } => Ending::Lost,
        }
    }

    /// Play turns until the game ends
    pub fn run(&mut self) -> Result<RunSummary> {
        if self.world.player_id().is_none() {
            return Err(DinoError::FatalState(
                "the game cannot start without a player on a map".into(),
            ));
        }
        info!(mode = ?self.mode, actors = self.world.actor_count(), "simulation starting");

        while self.still_running() {
            self.run_turn()?;
        }

        let ending = self.ending();
        self.display.println(ending.message());
        info!(?ending, turns = self.turn, points = self.world.ledger.points(), "simulation finished");
        Ok(self.summary(ending))
    }

    pub fn summary(&self, ending: Ending) -> RunSummary {
        RunSummary {
            ending,
            turns: self.turn,
            eco_points: self.world.ledger.points(),
            population: self
                .world
                .population()
                .into_iter()
                .map(|(species, count)| (species.to_string(), count))
                .collect(),
        }
    }

    /// Play exactly one turn
    pub fn run_turn(&mut self) -> Result<()> {
        debug!(turn = self.turn, "turn start");

        if let Some(map) = self
            .world
            .player_id()
            .and_then(|player| self.world.location_of(player))
            .map(|at| at.map)
        {
            let frame = render_map(&self.world, map);
            self.display.draw(&frame);
        }

        let rain = roll_rain(self.turn, &mut self.rng, &self.world.config);
        if let Some(rain) = rain {
            info!(turn = self.turn, draws = rain.draws, "rain");
            self.display.println("###   It's raining!   ###");
        }

        if let GameMode::Challenge { max_turns, .. } = self.mode {
            let left = max_turns.saturating_sub(self.turn);
            self.display
                .println(&format!("###   {left} moves left!   ###"));
        }

        for id in self.world.actor_ids() {
            if !self.still_running() {
                break;
            }
            let Some(actor) = self.world.actor(id) else {
                continue;
            };
            if actor.is_player() {
                self.play_player(id);
            } else {
                self.play_dinosaur(id)?;
            }
        }

        for line in tick_all_locations(&mut self.world, rain, &mut self.rng)? {
            self.display.println(&line);
        }

        self.turn += 1;
        Ok(())
    }

    fn play_player(&mut self, id: ActorId) {
        let command = self.controller.next_command(&self.world, id);
        match execute_player_command(&mut self.world, id, &command, &mut self.rng) {
            Ok(line) if !line.is_empty() => self.display.println(&line),
            Ok(_) => {}
            Err(err) => {
                warn!(?command, %err, "player command rejected");
                if command != PlayerCommand::Wait {
                    self.display.println(&err.to_string());
                }
            }
        }
    }

    fn play_dinosaur(&mut self, id: ActorId) -> Result<()> {
        let outcome = play_turn(&mut self.world, id, &mut self.rng)?;
        for line in &outcome.messages {
            self.display.println(line);
        }
        let Some(action) = outcome.action else {
            return Ok(());
        };
        debug!(actor = %id, ?action, category = ?action.category(), "action chosen");
        match execute(&mut self.world, id, &action, &mut self.rng) {
            Ok(line) if !line.is_empty() => self.display.println(&line),
            Ok(_) => {}
            Err(err) => warn!(actor = %id, ?action, %err, "action failed"),
        }
        Ok(())
    }
}
