use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scout {
    pub id: u32,
    pub name: String,
    /// 1-20
    pub persuasion: u8,
    pub specialization: ScoutSpecialization,
    /// 0-100
    pub reputation: f32,
    pub career_tier: CareerTier,
}

impl Scout {
    pub fn with_reputation_delta(&self, delta: f32) -> Scout {
        Scout {
            reputation: (self.reputation + delta).clamp(0.0, 100.0),
            ..self.clone()
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoutSpecialization {
    Youth,
    FirstTeam,
    Regional,
    DataAnalysis,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CareerTier {
    Freelance,
    ClubScout,
    SeniorScout,
    ChiefScout,
    HeadOfRecruitment,
}

impl CareerTier {
    pub const LOWEST: CareerTier = CareerTier::Freelance;
    pub const TOP: CareerTier = CareerTier::HeadOfRecruitment;

    pub fn is_top(&self) -> bool {
        *self == CareerTier::TOP
    }

    pub fn is_lowest(&self) -> bool {
        *self == CareerTier::LOWEST
    }

    /// One step down, `None` at the bottom
    pub fn demoted(&self) -> Option<CareerTier> {
        match self {
            CareerTier::Freelance => None,
            CareerTier::ClubScout => Some(CareerTier::Freelance),
            CareerTier::SeniorScout => Some(CareerTier::ClubScout),
            CareerTier::ChiefScout => Some(CareerTier::SeniorScout),
            CareerTier::HeadOfRecruitment => Some(CareerTier::ChiefScout),
        }
    }
}
