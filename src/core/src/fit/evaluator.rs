use crate::club::{
    Club, Player, PlayerRole, PlayerTrait, ScoutingPhilosophy, Skill,
    TacticalIdentity,
};
use crate::fit::Formation;
use serde::{Deserialize, Serialize};

const POSITION_WEIGHT: f32 = 0.25;
const ROLE_WEIGHT: f32 = 0.30;
const TACTICAL_WEIGHT: f32 = 0.25;
const AGE_WEIGHT: f32 = 0.20;

const NEUTRAL_POSITION_FIT: f32 = 50.0;
const AGE_DECAY_PER_YEAR: f32 = 5.0;
const TRAIT_MODIFIER: f32 = 5.0;

const STRENGTH_THRESHOLD: f32 = 15.0;
const WEAKNESS_THRESHOLD: f32 = 8.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemFitResult {
    pub player_id: u32,
    pub club_id: u32,
    pub overall_fit: f32,
    pub position_fit: f32,
    pub role_fit: f32,
    pub tactical_fit: f32,
    pub age_fit: f32,
    pub suggested_role: PlayerRole,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Scores how well a player slots into a club's formation, roles, style and age profile.
pub struct SystemFitEvaluator;

impl SystemFitEvaluator {
    pub fn evaluate(player: &Player, club: &Club) -> SystemFitResult {
        let position_fit = Self::position_fit(player, &club.manager.preferred_formation);
        let (suggested_role, role_fit) = Self::role_fit(player, club);
        let tactical_fit = Self::tactical_fit(player, club.tactical_identity);
        let age_fit = Self::age_fit(player.age, club.scouting_philosophy);

        let overall_fit = (position_fit * POSITION_WEIGHT
            + role_fit * ROLE_WEIGHT
            + tactical_fit * TACTICAL_WEIGHT
            + age_fit * AGE_WEIGHT)
            .clamp(0.0, 100.0);

        let (strengths, weaknesses) = Self::strengths_and_weaknesses(player, club.tactical_identity);

        SystemFitResult {
            player_id: player.id,
            club_id: club.id,
            overall_fit,
            position_fit,
            role_fit,
            tactical_fit,
            age_fit,
            suggested_role,
            strengths,
            weaknesses,
        }
    }

    pub fn position_fit(player: &Player, formation: &str) -> f32 {
        let Some(formation) = Formation::parse(formation) else {
            return NEUTRAL_POSITION_FIT;
        };

        if formation.uses(player.position) {
            100.0
        } else if player.secondary_positions.iter().any(|p| formation.uses(*p)) {
            80.0
        } else if formation.count_for(player.position.position_group()) > 0 {
            60.0
        } else {
            25.0
        }
    }

    /// Best natural role for the player, and the suitability of the role the club wants there.
    pub fn role_fit(player: &Player, club: &Club) -> (PlayerRole, f32) {
        let (best_role, best_score) = PlayerRole::best_for(player.position, &player.skills);

        let wanted = if club.has_strong_identity() {
            club.tactical_identity.role_hint(player.position)
        } else {
            None
        };

        match wanted {
            Some(role) => (best_role, role.suitability(&player.skills)),
            None => (best_role, best_score),
        }
    }

    pub fn tactical_fit(player: &Player, identity: TacticalIdentity) -> f32 {
        let skills = &player.skills;
        let mut score = skills.average_of(&identity.key_skills()) * 5.0;

        if identity.pressing_intensity() >= 70 {
            if skills.get(Skill::Stamina) < 12.0 {
                score -= 10.0;
            }
            if skills.get(Skill::Pressing) < 12.0 {
                score -= 10.0;
            }
        }

        if identity.tempo() >= 70 && skills.get(Skill::Pace) < 11.0 {
            score -= 8.0;
        }

        if identity.tempo() < 40 && skills.get(Skill::Positioning) < 11.0 {
            score -= 8.0;
        }

        for player_trait in &player.traits {
            score += Self::trait_modifier(*player_trait, identity);
        }

        score.clamp(0.0, 100.0)
    }

    pub fn age_fit(age: u8, philosophy: ScoutingPhilosophy) -> f32 {
        let (min, max) = philosophy.age_window();
        let overshoot = if age < min {
            min - age
        } else if age > max {
            age - max
        } else {
            0
        };

        (100.0 - overshoot as f32 * AGE_DECAY_PER_YEAR).max(0.0)
    }

    fn trait_modifier(player_trait: PlayerTrait, identity: TacticalIdentity) -> f32 {
        use PlayerTrait::*;
        use TacticalIdentity::*;

        match (player_trait, identity) {
            (LeadsThePress, HighPress) => TRAIT_MODIFIER,
            (LeadsThePress, DefensiveBlock) => -TRAIT_MODIFIER,
            (DwellsOnBall, Possession) => TRAIT_MODIFIER,
            (DwellsOnBall, CounterAttack | HighPress) => -TRAIT_MODIFIER,
            (TriesKillerBalls, CounterAttack) => TRAIT_MODIFIER,
            (TriesKillerBalls, DefensiveBlock) => -TRAIT_MODIFIER,
            (RunsInBehind, CounterAttack | DirectPlay) => TRAIT_MODIFIER,
            (RunsInBehind, Possession) => -TRAIT_MODIFIER,
            (StaysBack, DefensiveBlock) => TRAIT_MODIFIER,
            (StaysBack, HighPress | WingPlay) => -TRAIT_MODIFIER,
            (GetsForward, WingPlay | HighPress) => TRAIT_MODIFIER,
            (GetsForward, DefensiveBlock) => -TRAIT_MODIFIER,
            (PlaysShortPasses, Possession) => TRAIT_MODIFIER,
            (PlaysShortPasses, DirectPlay) => -TRAIT_MODIFIER,
            (HitsLongBalls, DirectPlay) => TRAIT_MODIFIER,
            (HitsLongBalls, Possession) => -TRAIT_MODIFIER,
            (DivesIntoTackles, HighPress) => TRAIT_MODIFIER,
            (DivesIntoTackles, DefensiveBlock) => -TRAIT_MODIFIER,
            (CutsInside, Possession) => TRAIT_MODIFIER,
            (CutsInside, WingPlay) => -TRAIT_MODIFIER,
            _ => 0.0,
        }
    }

    fn strengths_and_weaknesses(player: &Player, identity: TacticalIdentity) -> (Vec<String>, Vec<String>) {
        let mut strengths = Vec::new();
        let mut weaknesses = Vec::new();

        for skill in identity.key_skills() {
            let value = player.skills.get(skill);
            if value >= STRENGTH_THRESHOLD {
                strengths.push(skill.name().to_string());
            } else if value <= WEAKNESS_THRESHOLD {
                weaknesses.push(skill.name().to_string());
            }
        }

        (strengths, weaknesses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{ManagerPreference, ManagerProfile, PlayerPositionType, PlayerSkills};

    fn club(identity: TacticalIdentity, formation: &str) -> Club {
        Club {
            id: 3,
            name: "Harbour Town".to_string(),
            budget: 4_000_000.0,
            reputation: 55,
            scouting_philosophy: ScoutingPhilosophy::MarketSmart,
            tactical_identity: identity,
            identity_strength: 0.9,
            manager: ManagerProfile {
                name: "B. Coach".to_string(),
                preferred_formation: formation.to_string(),
                preference: ManagerPreference::Balanced,
            },
            squad: vec![],
        }
    }

    fn presser(stamina: f32) -> Player {
        Player::builder()
            .id(10)
            .name("Runner")
            .position(PlayerPositionType::Striker)
            .age(24)
            .ability(120)
            .skills(
                PlayerSkills::uniform(14.0)
                    .with(Skill::Stamina, stamina)
                    .with(Skill::Pressing, 16.0),
            )
            .traits(vec![PlayerTrait::LeadsThePress])
            .build()
            .expect("player")
    }

    #[test]
    fn test_composite_weights() {
        let player = presser(16.0);
        let result = SystemFitEvaluator::evaluate(&player, &club(TacticalIdentity::HighPress, "4-3-3"));

        let expected = result.position_fit * 0.25
            + result.role_fit * 0.30
            + result.tactical_fit * 0.25
            + result.age_fit * 0.20;
        assert!((result.overall_fit - expected).abs() < 1e-3);
        assert_eq!(result.position_fit, 100.0);
        assert_eq!(result.age_fit, 100.0);
    }

    #[test]
    fn test_unparseable_formation_is_neutral() {
        let player = presser(16.0);
        assert_eq!(SystemFitEvaluator::position_fit(&player, "whatever"), 50.0);
    }

    #[test]
    fn test_position_fit_tiers() {
        let mut player = presser(16.0);
        player.position = PlayerPositionType::ForwardCenter;
        // 4-3-3 has no CF slot but fields forwards
        assert_eq!(SystemFitEvaluator::position_fit(&player, "4-3-3"), 60.0);

        player.secondary_positions = vec![PlayerPositionType::Striker];
        assert_eq!(SystemFitEvaluator::position_fit(&player, "4-3-3"), 80.0);
    }

    #[test]
    fn test_high_press_penalises_low_stamina() {
        let fit = SystemFitEvaluator::tactical_fit(&presser(16.0), TacticalIdentity::HighPress);
        let tired = SystemFitEvaluator::tactical_fit(&presser(8.0), TacticalIdentity::HighPress);
        assert!(fit - tired >= 10.0);
    }

    #[test]
    fn test_trait_modifiers_are_symmetric() {
        let player = presser(16.0);
        let mut without = player.clone();
        without.traits.clear();

        let with_trait = SystemFitEvaluator::tactical_fit(&player, TacticalIdentity::DefensiveBlock);
        let base = SystemFitEvaluator::tactical_fit(&without, TacticalIdentity::DefensiveBlock);
        assert_eq!(base - with_trait, 5.0);
    }

    #[test]
    fn test_age_fit_decay() {
        assert_eq!(SystemFitEvaluator::age_fit(25, ScoutingPhilosophy::MarketSmart), 100.0);
        assert_eq!(SystemFitEvaluator::age_fit(29, ScoutingPhilosophy::MarketSmart), 90.0);
        assert_eq!(SystemFitEvaluator::age_fit(19, ScoutingPhilosophy::MarketSmart), 90.0);
        assert_eq!(SystemFitEvaluator::age_fit(60, ScoutingPhilosophy::YouthDevelopment), 0.0);
    }

    #[test]
    fn test_strengths_and_weaknesses_from_identity() {
        let player = Player::builder()
            .id(2)
            .name("Playmaker")
            .position(PlayerPositionType::MidfielderCenter)
            .age(23)
            .ability(130)
            .skills(
                PlayerSkills::uniform(11.0)
                    .with(Skill::Passing, 18.0)
                    .with(Skill::Composure, 6.0),
            )
            .build()
            .expect("player");

        let result = SystemFitEvaluator::evaluate(&player, &club(TacticalIdentity::Possession, "4-3-3"));
        assert_eq!(result.strengths, vec!["passing".to_string()]);
        assert_eq!(result.weaknesses, vec!["composure".to_string()]);
    }
}
