use crate::club::player::{PlayerPositionType, PlayerSkills};
use crate::club::player::builder::PlayerBuilder;
use crate::shared::round_to_half;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

pub const ABILITY_MAX: u8 = 200;

/// A footballer as seen by the recruitment core. Owned by the world layer;
/// the core only reads it and hands back updated copies on completed transfers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub club_id: Option<u32>,

    pub position: PlayerPositionType,
    pub secondary_positions: Vec<PlayerPositionType>,

    pub age: u8,
    /// Current ability, 1-200
    pub ability: u8,
    /// Ceiling, 1-200
    pub potential: u8,
    /// Recent form, -5 (awful) to 5 (superb)
    pub form: i8,

    pub skills: PlayerSkills,
    pub traits: Vec<PlayerTrait>,

    pub market_value: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerTrait {
    LeadsThePress,
    DwellsOnBall,
    TriesKillerBalls,
    RunsInBehind,
    StaysBack,
    GetsForward,
    PlaysShortPasses,
    HitsLongBalls,
    DivesIntoTackles,
    CutsInside,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    /// Primary or secondary position
    pub fn plays(&self, position: PlayerPositionType) -> bool {
        self.position == position || self.secondary_positions.contains(&position)
    }

    /// Ability expressed on the 0.5-5.0 star scale used in reports and directives.
    pub fn ability_stars(&self) -> f32 {
        Self::stars_for(self.ability)
    }

    pub fn stars_for(ability: u8) -> f32 {
        round_to_half(ability as f32 / 40.0).clamp(0.5, 5.0)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({}, {})", self.name, self.position.code(), self.age)
    }
}
