use crate::club::{PlayerPositionType, PlayerRole, Skill};
use serde::{Deserialize, Serialize};

/// Canonical order: the derived `Ord` sorts critical first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DirectivePriority {
    Critical,
    High,
    Medium,
    Low,
}

impl DirectivePriority {
    pub fn from_gap(gap: f32) -> Self {
        match gap {
            g if g > 30.0 => DirectivePriority::Critical,
            g if g > 20.0 => DirectivePriority::High,
            g if g > 10.0 => DirectivePriority::Medium,
            _ => DirectivePriority::Low,
        }
    }

    /// Share of the club budget earmarked for a directive of this priority
    pub fn budget_share(&self) -> f64 {
        match self {
            DirectivePriority::Critical => 0.40,
            DirectivePriority::High => 0.30,
            DirectivePriority::Medium => 0.20,
            DirectivePriority::Low => 0.10,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DirectivePriority::Critical => "critical",
            DirectivePriority::High => "high",
            DirectivePriority::Medium => "medium",
            DirectivePriority::Low => "low",
        }
    }
}

/// A club's standing recruitment brief for one position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Directive {
    pub id: String,
    pub club_id: u32,
    pub position: PlayerPositionType,
    pub priority: DirectivePriority,
    pub budget_allocation: f64,
    pub age_range: (u8, u8),
    pub min_ability_stars: f32,
    pub key_attributes: Vec<Skill>,
    pub preferred_role: Option<PlayerRole>,
    pub fulfilled: bool,
    pub season: u32,
}

impl Directive {
    pub fn is_active(&self) -> bool {
        !self.fulfilled
    }

    pub fn mark_fulfilled(&self) -> Directive {
        Directive {
            fulfilled: true,
            ..self.clone()
        }
    }

    /// Years outside the age window, 0 inside it
    pub fn age_overshoot(&self, age: u8) -> u8 {
        let (min, max) = self.age_range;
        if age < min {
            min - age
        } else if age > max {
            age - max
        } else {
            0
        }
    }
}
