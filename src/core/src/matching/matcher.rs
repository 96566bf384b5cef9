use crate::club::{Player, PlayerRole};
use crate::directives::Directive;
use crate::scout::ScoutReport;
use log::debug;
use serde::{Deserialize, Serialize};

pub const MATCH_THRESHOLD: f32 = 50.0;

const PRIMARY_POSITION_POINTS: f32 = 30.0;
const SECONDARY_POSITION_POINTS: f32 = 20.0;
const ADJACENT_POSITION_POINTS: f32 = 10.0;

const AGE_POINTS: f32 = 20.0;
const AGE_DECAY_PER_YEAR: f32 = 2.0;

const ABILITY_GATE_POINTS: f32 = 20.0;

const KEY_ATTRIBUTE_POINTS: f32 = 5.0;
const KEY_ATTRIBUTE_CAP: f32 = 15.0;
const KEY_ATTRIBUTE_MIN_ASSESSMENT: f32 = 12.0;

const PREFERRED_ROLE_WEIGHT: f32 = 0.15;
const ANY_ROLE_WEIGHT: f32 = 0.05;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub position: f32,
    pub age: f32,
    pub ability: f32,
    pub key_attributes: f32,
    pub role: f32,
}

impl MatchBreakdown {
    pub fn total(&self) -> f32 {
        self.position + self.age + self.ability + self.key_attributes + self.role
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectiveMatch {
    pub directive_id: String,
    pub score: f32,
    pub breakdown: MatchBreakdown,
}

pub struct ReportMatcher;

impl ReportMatcher {
    /// Best-scoring active directive for the report, if any clears the threshold.
    pub fn best_match(report: &ScoutReport, player: &Player, directives: &[Directive]) -> Option<DirectiveMatch> {
        let best = directives
            .iter()
            .filter(|d| d.is_active())
            .map(|directive| {
                let breakdown = Self::score(report, player, directive);
                DirectiveMatch {
                    directive_id: directive.id.clone(),
                    score: breakdown.total(),
                    breakdown,
                }
            })
            .fold(None::<DirectiveMatch>, |best, candidate| match best {
                Some(current) if current.score >= candidate.score => Some(current),
                _ => Some(candidate),
            })?;

        debug!(
            "report {} best directive {} scored {:.1}",
            report.id, best.directive_id, best.score
        );

        (best.score >= MATCH_THRESHOLD).then_some(best)
    }

    pub fn score(report: &ScoutReport, player: &Player, directive: &Directive) -> MatchBreakdown {
        MatchBreakdown {
            position: Self::position_points(player, directive),
            age: Self::age_points(player.age, directive),
            ability: Self::ability_points(report, directive),
            key_attributes: Self::key_attribute_points(report, directive),
            role: Self::role_points(player, directive),
        }
    }

    fn position_points(player: &Player, directive: &Directive) -> f32 {
        if player.position == directive.position {
            PRIMARY_POSITION_POINTS
        } else if player.secondary_positions.contains(&directive.position) {
            SECONDARY_POSITION_POINTS
        } else if player.position.is_adjacent_to(directive.position) {
            ADJACENT_POSITION_POINTS
        } else {
            0.0
        }
    }

    fn age_points(age: u8, directive: &Directive) -> f32 {
        (AGE_POINTS - directive.age_overshoot(age) as f32 * AGE_DECAY_PER_YEAR).max(0.0)
    }

    fn ability_points(report: &ScoutReport, directive: &Directive) -> f32 {
        if report.perceived_stars >= directive.min_ability_stars {
            ABILITY_GATE_POINTS
        } else {
            0.0
        }
    }

    fn key_attribute_points(report: &ScoutReport, directive: &Directive) -> f32 {
        let matched = directive
            .key_attributes
            .iter()
            .filter_map(|skill| report.assessed(*skill))
            .filter(|value| *value >= KEY_ATTRIBUTE_MIN_ASSESSMENT)
            .count();

        (matched as f32 * KEY_ATTRIBUTE_POINTS).min(KEY_ATTRIBUTE_CAP)
    }

    fn role_points(player: &Player, directive: &Directive) -> f32 {
        match directive.preferred_role {
            Some(role) => role.suitability(&player.skills) * PREFERRED_ROLE_WEIGHT,
            None => {
                let (_, suitability) = PlayerRole::best_for(directive.position, &player.skills);
                suitability * ANY_ROLE_WEIGHT
            }
        }
    }
}
