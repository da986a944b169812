pub mod action_select;
pub mod consumption;
pub mod display;
pub mod lifecycle;
pub mod player;
pub mod proximity;
pub mod terrain;
pub mod tick;
pub mod weather;

pub use action_select::{is_fertile, select_action, Behavior};
pub use consumption::{is_food_for, resolve, scout, Nourishment, ResolveMode};
pub use display::{DisplaySink, NullDisplay, RecordingDisplay, StdoutDisplay};
pub use lifecycle::{play_turn, LifecycleOutcome};
pub use player::{execute_player_command, IdlePlayer, PlayerCommand, PlayerController, ScriptedPlayer};
pub use proximity::{hop_distance, next_step, ProximitySearch};
pub use terrain::{seed_initial_growth, tick_all_locations, tick_location};
pub use tick::{Ending, GameMode, RunSummary, Simulation};
pub use weather::{roll_rain, Rainfall};
