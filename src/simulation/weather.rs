//! Rain
//!
//! Rain can only fall on turns divisible by the rain interval. When it does,
//! every lake gains the same number of draws and every dinosaur drinks a
//! little during the location tick.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::SimulationConfig;
use crate::core::types::Turn;

/// Effect of one rainy turn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rainfall {
    /// Draws added to every water source
    pub draws: u32,
    /// Water level gained by every non-player actor
    pub water_bonus: i32,
}

impl Rainfall {
    /// Turn a rainfall fraction into lake draws
    pub fn from_fraction(fraction: f64, config: &SimulationConfig) -> Self {
        Self {
            draws: (fraction * config.rainfall_draw_scale).floor().max(0.0) as u32,
            water_bonus: config.rain_water_bonus,
        }
    }
}

/// Roll for rain at the start of `turn`
pub fn roll_rain(turn: Turn, rng: &mut ChaCha8Rng, config: &SimulationConfig) -> Option<Rainfall> {
    if turn % config.rain_interval != 0 || !rng.gen_bool(config.rain_chance) {
        return None;
    }
    let fraction = config.rainfall_min + rng.gen::<f64>() * config.rainfall_span;
    Some(Rainfall::from_fraction(fraction, config))
}
