//! Capability tags for actors and grounds
//!
//! Capabilities replace per-species branching: "can this actor enter that
//! ground" or "does this plant feed that dinosaur" are answered by asking
//! for tags, never by asking for a concrete species.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// A tag enum that can live in a [`CapabilitySet`]
pub trait Capability: Copy + Eq + fmt::Debug + 'static {
    /// Every variant, in declaration order
    const ALL: &'static [Self];

    /// Bit index of this tag, unique per enum and below 32
    fn index(self) -> u32;
}

/// Tags carried by actors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorCapability {
    Fly,
    Tiny,
    CrushGround,
    Pregnant,
    Female,
    Prey,
    Tall,
    Short,
}

impl Capability for ActorCapability {
    const ALL: &'static [Self] = &[
        Self::Fly,
        Self::Tiny,
        Self::CrushGround,
        Self::Pregnant,
        Self::Female,
        Self::Prey,
        Self::Tall,
        Self::Short,
    ];

    fn index(self) -> u32 {
        self as u32
    }
}

/// Tags carried by grounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroundCapability {
    BlocksShortPlantGrowth,
    ShortPlant,
    Crushable,
    Fertile,
    RechargeFlight,
}

impl Capability for GroundCapability {
    const ALL: &'static [Self] = &[
        Self::BlocksShortPlantGrowth,
        Self::ShortPlant,
        Self::Crushable,
        Self::Fertile,
        Self::RechargeFlight,
    ];

    fn index(self) -> u32 {
        self as u32
    }
}

/// Fixed-size bitset of capability tags
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapabilitySet<T: Capability> {
    bits: u32,
    _tag: PhantomData<T>,
}

impl<T: Capability> CapabilitySet<T> {
    pub fn new() -> Self {
        Self {
            bits: 0,
            _tag: PhantomData,
        }
    }

    pub fn with(mut self, tag: T) -> Self {
        self.add(tag);
        self
    }

    pub fn has(&self, tag: T) -> bool {
        self.bits & (1 << tag.index()) != 0
    }

    pub fn add(&mut self, tag: T) {
        self.bits |= 1 << tag.index();
    }

    pub fn remove(&mut self, tag: T) {
        self.bits &= !(1 << tag.index());
    }

    /// Add or remove `tag` depending on `present`
    pub fn set(&mut self, tag: T, present: bool) {
        if present {
            self.add(tag);
        } else {
            self.remove(tag);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        T::ALL.iter().copied().filter(|tag| self.has(*tag))
    }
}

impl<T: Capability> Default for CapabilitySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Capability> fmt::Debug for CapabilitySet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Capability> FromIterator<T> for CapabilitySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            set.add(tag);
        }
        set
    }
}

pub type ActorCapabilities = CapabilitySet<ActorCapability>;
pub type GroundCapabilities = CapabilitySet<GroundCapability>;
