use crate::club::player::{Player, PlayerPositionType, PlayerRole, Skill};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SQUAD_ABILITY: f32 = 100.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    pub id: u32,
    pub name: String,

    pub budget: f64,
    /// 0-100
    pub reputation: u8,

    pub scouting_philosophy: ScoutingPhilosophy,
    pub tactical_identity: TacticalIdentity,
    /// How firmly the club is committed to its identity, 0.0-1.0
    pub identity_strength: f32,

    pub manager: ManagerProfile,

    pub squad: Vec<u32>,
}

impl Club {
    pub fn squad_players<'p>(&self, players: &'p [Player]) -> Vec<&'p Player> {
        players
            .iter()
            .filter(|p| self.squad.contains(&p.id))
            .collect()
    }

    pub fn squad_average_ability(&self, players: &[Player]) -> f32 {
        average_ability(&self.squad_players(players))
    }

    pub fn has_strong_identity(&self) -> bool {
        self.identity_strength >= 0.6
    }
}

/// Mean ability of a squad, or the neutral default for an empty one.
pub fn average_ability(squad: &[&Player]) -> f32 {
    if squad.is_empty() {
        return DEFAULT_SQUAD_ABILITY;
    }
    squad.iter().map(|p| p.ability as f32).sum::<f32>() / squad.len() as f32
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerProfile {
    pub name: String,
    pub preferred_formation: String,
    pub preference: ManagerPreference,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManagerPreference {
    DataDriven,
    EyeTest,
    Balanced,
}

// ─── Scouting philosophy ────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoutingPhilosophy {
    YouthDevelopment,
    WinNow,
    MarketSmart,
    GlobalRecruiter,
}

impl ScoutingPhilosophy {
    /// Preferred signing age window, inclusive
    pub fn age_window(&self) -> (u8, u8) {
        match self {
            ScoutingPhilosophy::YouthDevelopment => (17, 23),
            ScoutingPhilosophy::WinNow => (24, 31),
            ScoutingPhilosophy::MarketSmart => (21, 27),
            ScoutingPhilosophy::GlobalRecruiter => (19, 29),
        }
    }
}

// ─── Tactical identity ──────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TacticalIdentity {
    Possession,
    CounterAttack,
    HighPress,
    DirectPlay,
    WingPlay,
    DefensiveBlock,
}

impl TacticalIdentity {
    pub fn key_skills(&self) -> [Skill; 6] {
        use Skill::*;

        match self {
            TacticalIdentity::Possession => [Passing, FirstTouch, Vision, Composure, Technique, Decisions],
            TacticalIdentity::CounterAttack => [Pace, Acceleration, Finishing, Dribbling, OffTheBall, Anticipation],
            TacticalIdentity::HighPress => [Pressing, Stamina, WorkRate, Aggression, Teamwork, Acceleration],
            TacticalIdentity::DirectPlay => [Strength, Heading, Jumping, Passing, LongShots, Finishing],
            TacticalIdentity::WingPlay => [Crossing, Pace, Dribbling, Stamina, Heading, Acceleration],
            TacticalIdentity::DefensiveBlock => [Positioning, Marking, Tackling, Anticipation, Teamwork, Strength],
        }
    }

    /// Off-ball pressing demand, 0-100
    pub fn pressing_intensity(&self) -> u8 {
        match self {
            TacticalIdentity::HighPress => 90,
            TacticalIdentity::Possession => 65,
            TacticalIdentity::WingPlay => 55,
            TacticalIdentity::DirectPlay => 45,
            TacticalIdentity::CounterAttack => 40,
            TacticalIdentity::DefensiveBlock => 25,
        }
    }

    /// Speed of transitions, 0-100
    pub fn tempo(&self) -> u8 {
        match self {
            TacticalIdentity::CounterAttack => 85,
            TacticalIdentity::HighPress => 80,
            TacticalIdentity::WingPlay => 70,
            TacticalIdentity::DirectPlay => 65,
            TacticalIdentity::Possession => 45,
            TacticalIdentity::DefensiveBlock => 35,
        }
    }

    /// Role the identity asks for at a position, if it has an opinion.
    pub fn role_hint(&self, position: PlayerPositionType) -> Option<PlayerRole> {
        use PlayerPositionType::*;

        let role = match (self, position) {
            (TacticalIdentity::Possession, DefenderCenter) => PlayerRole::BallPlayingDefender,
            (TacticalIdentity::Possession, DefensiveMidfielder | MidfielderCenter) => PlayerRole::DeepLyingPlaymaker,
            (TacticalIdentity::Possession, AttackingMidfielderCenter) => PlayerRole::AdvancedPlaymaker,
            (TacticalIdentity::Possession, WingerLeft | WingerRight) => PlayerRole::InsideForward,
            (TacticalIdentity::Possession, ForwardCenter) => PlayerRole::FalseNine,

            (TacticalIdentity::CounterAttack, WingerLeft | WingerRight) => PlayerRole::Winger,
            (TacticalIdentity::CounterAttack, Striker) => PlayerRole::Poacher,
            (TacticalIdentity::CounterAttack, AttackingMidfielderCenter) => PlayerRole::ShadowStriker,
            (TacticalIdentity::CounterAttack, DefensiveMidfielder) => PlayerRole::Anchor,

            (TacticalIdentity::HighPress, Striker | ForwardCenter) => PlayerRole::PressingForward,
            (TacticalIdentity::HighPress, MidfielderCenter) => PlayerRole::BoxToBox,
            (TacticalIdentity::HighPress, DefenderLeft | DefenderRight) => PlayerRole::WingBack,
            (TacticalIdentity::HighPress, WingerLeft | WingerRight) => PlayerRole::InsideForward,

            (TacticalIdentity::DirectPlay, Striker | ForwardCenter) => PlayerRole::TargetMan,
            (TacticalIdentity::DirectPlay, DefenderCenter) => PlayerRole::Stopper,
            (TacticalIdentity::DirectPlay, MidfielderCenter) => PlayerRole::BoxToBox,

            (TacticalIdentity::WingPlay, DefenderLeft | DefenderRight) => PlayerRole::WingBack,
            (TacticalIdentity::WingPlay, WingerLeft | WingerRight) => PlayerRole::Winger,
            (TacticalIdentity::WingPlay, Striker) => PlayerRole::TargetMan,

            (TacticalIdentity::DefensiveBlock, DefenderCenter) => PlayerRole::Stopper,
            (TacticalIdentity::DefensiveBlock, DefenderLeft | DefenderRight) => PlayerRole::FullBack,
            (TacticalIdentity::DefensiveBlock, DefensiveMidfielder) => PlayerRole::Anchor,
            (TacticalIdentity::DefensiveBlock, Striker) => PlayerRole::Poacher,

            _ => return None,
        };

        Some(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_hints_fit_their_position() {
        let identities = [
            TacticalIdentity::Possession,
            TacticalIdentity::CounterAttack,
            TacticalIdentity::HighPress,
            TacticalIdentity::DirectPlay,
            TacticalIdentity::WingPlay,
            TacticalIdentity::DefensiveBlock,
        ];

        for identity in identities {
            for position in PlayerPositionType::OUTFIELD {
                if let Some(role) = identity.role_hint(position) {
                    assert!(role.suits_position(position), "{:?} {:?}", identity, position);
                }
            }
        }
    }

    #[test]
    fn test_empty_squad_average_is_neutral() {
        assert_eq!(average_ability(&[]), DEFAULT_SQUAD_ABILITY);
    }

    #[test]
    fn test_philosophy_windows_are_ordered() {
        for philosophy in [
            ScoutingPhilosophy::YouthDevelopment,
            ScoutingPhilosophy::WinNow,
            ScoutingPhilosophy::MarketSmart,
            ScoutingPhilosophy::GlobalRecruiter,
        ] {
            let (min, max) = philosophy.age_window();
            assert!(min < max);
        }
    }
}
