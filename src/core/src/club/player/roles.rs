use crate::club::player::{PlayerPositionType, PlayerSkills, Skill};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    Goalkeeper,
    BallPlayingDefender,
    Stopper,
    FullBack,
    WingBack,
    Anchor,
    DeepLyingPlaymaker,
    BoxToBox,
    AdvancedPlaymaker,
    ShadowStriker,
    Winger,
    InsideForward,
    Poacher,
    TargetMan,
    PressingForward,
    FalseNine,
}

impl PlayerRole {
    pub const ALL: [PlayerRole; 16] = [
        PlayerRole::Goalkeeper,
        PlayerRole::BallPlayingDefender,
        PlayerRole::Stopper,
        PlayerRole::FullBack,
        PlayerRole::WingBack,
        PlayerRole::Anchor,
        PlayerRole::DeepLyingPlaymaker,
        PlayerRole::BoxToBox,
        PlayerRole::AdvancedPlaymaker,
        PlayerRole::ShadowStriker,
        PlayerRole::Winger,
        PlayerRole::InsideForward,
        PlayerRole::Poacher,
        PlayerRole::TargetMan,
        PlayerRole::PressingForward,
        PlayerRole::FalseNine,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PlayerRole::Goalkeeper => "Goalkeeper",
            PlayerRole::BallPlayingDefender => "Ball-Playing Defender",
            PlayerRole::Stopper => "Stopper",
            PlayerRole::FullBack => "Full-Back",
            PlayerRole::WingBack => "Wing-Back",
            PlayerRole::Anchor => "Anchor",
            PlayerRole::DeepLyingPlaymaker => "Deep-Lying Playmaker",
            PlayerRole::BoxToBox => "Box-to-Box Midfielder",
            PlayerRole::AdvancedPlaymaker => "Advanced Playmaker",
            PlayerRole::ShadowStriker => "Shadow Striker",
            PlayerRole::Winger => "Winger",
            PlayerRole::InsideForward => "Inside Forward",
            PlayerRole::Poacher => "Poacher",
            PlayerRole::TargetMan => "Target Man",
            PlayerRole::PressingForward => "Pressing Forward",
            PlayerRole::FalseNine => "False Nine",
        }
    }

    pub fn positions(&self) -> &'static [PlayerPositionType] {
        use PlayerPositionType::*;

        match self {
            PlayerRole::Goalkeeper => &[Goalkeeper],
            PlayerRole::BallPlayingDefender | PlayerRole::Stopper => &[DefenderCenter],
            PlayerRole::FullBack | PlayerRole::WingBack => &[DefenderLeft, DefenderRight],
            PlayerRole::Anchor => &[DefensiveMidfielder],
            PlayerRole::DeepLyingPlaymaker => &[DefensiveMidfielder, MidfielderCenter],
            PlayerRole::BoxToBox => &[MidfielderCenter],
            PlayerRole::AdvancedPlaymaker => &[AttackingMidfielderCenter, MidfielderCenter],
            PlayerRole::ShadowStriker => &[AttackingMidfielderCenter],
            PlayerRole::Winger | PlayerRole::InsideForward => &[WingerLeft, WingerRight],
            PlayerRole::Poacher => &[Striker],
            PlayerRole::TargetMan | PlayerRole::PressingForward => &[Striker, ForwardCenter],
            PlayerRole::FalseNine => &[ForwardCenter],
        }
    }

    pub fn key_skills(&self) -> [Skill; 5] {
        use Skill::*;

        match self {
            PlayerRole::Goalkeeper => [Positioning, Anticipation, Composure, Decisions, Agility],
            PlayerRole::BallPlayingDefender => [Passing, Composure, Vision, Marking, Tackling],
            PlayerRole::Stopper => [Tackling, Strength, Heading, Aggression, Marking],
            PlayerRole::FullBack => [Marking, Tackling, Positioning, Pace, Stamina],
            PlayerRole::WingBack => [Crossing, Pace, Stamina, WorkRate, Dribbling],
            PlayerRole::Anchor => [Positioning, Tackling, Anticipation, Decisions, Teamwork],
            PlayerRole::DeepLyingPlaymaker => [Passing, Vision, Composure, Decisions, Technique],
            PlayerRole::BoxToBox => [Stamina, WorkRate, Passing, Tackling, OffTheBall],
            PlayerRole::AdvancedPlaymaker => [Vision, Passing, Technique, FirstTouch, Decisions],
            PlayerRole::ShadowStriker => [OffTheBall, Finishing, Anticipation, Acceleration, Composure],
            PlayerRole::Winger => [Crossing, Dribbling, Pace, Acceleration, Agility],
            PlayerRole::InsideForward => [Dribbling, Finishing, Acceleration, OffTheBall, Technique],
            PlayerRole::Poacher => [Finishing, OffTheBall, Anticipation, Composure, Acceleration],
            PlayerRole::TargetMan => [Heading, Strength, Jumping, FirstTouch, Teamwork],
            PlayerRole::PressingForward => [Pressing, WorkRate, Stamina, Aggression, Acceleration],
            PlayerRole::FalseNine => [FirstTouch, Passing, Vision, Dribbling, Technique],
        }
    }

    pub fn suits_position(&self, position: PlayerPositionType) -> bool {
        self.positions().contains(&position)
    }

    /// Role suitability on 0-100: mean of the role's key attributes scaled from 1-20.
    pub fn suitability(&self, skills: &PlayerSkills) -> f32 {
        (skills.average_of(&self.key_skills()) * 5.0).clamp(0.0, 100.0)
    }

    pub fn for_position(position: PlayerPositionType) -> impl Iterator<Item = PlayerRole> {
        PlayerRole::ALL
            .into_iter()
            .filter(move |role| role.suits_position(position))
    }

    /// Best-suited role for the position and its suitability. Every position has at least one role.
    pub fn best_for(position: PlayerPositionType, skills: &PlayerSkills) -> (PlayerRole, f32) {
        PlayerRole::for_position(position)
            .map(|role| (role, role.suitability(skills)))
            .fold(None, |best: Option<(PlayerRole, f32)>, candidate| match best {
                Some(b) if b.1 >= candidate.1 => Some(b),
                _ => Some(candidate),
            })
            .unwrap_or((PlayerRole::BoxToBox, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_position_has_a_role() {
        let mut all = PlayerPositionType::OUTFIELD.to_vec();
        all.push(PlayerPositionType::Goalkeeper);

        for position in all {
            assert!(PlayerRole::for_position(position).count() > 0, "{}", position.code());
        }
    }

    #[test]
    fn test_suitability_scale() {
        let skills = PlayerSkills::uniform(20.0);
        assert_eq!(PlayerRole::Poacher.suitability(&skills), 100.0);

        let skills = PlayerSkills::uniform(10.0);
        assert_eq!(PlayerRole::Poacher.suitability(&skills), 50.0);
    }

    #[test]
    fn test_best_for_prefers_stronger_profile() {
        let skills = PlayerSkills::uniform(8.0)
            .with(Skill::Heading, 19.0)
            .with(Skill::Strength, 19.0)
            .with(Skill::Jumping, 18.0);

        let (role, score) = PlayerRole::best_for(PlayerPositionType::Striker, &skills);
        assert_eq!(role, PlayerRole::TargetMan);
        assert!(score > 60.0);
    }
}
