use crate::board::BoardProfile;
use crate::club::{average_ability, Club, Player, PlayerPositionType, Skill};
use crate::directives::{Directive, DirectivePriority};
use crate::shared::{round_to_half, SimRng};
use itertools::Itertools;
use log::debug;

const MIN_DIRECTIVES: i32 = 2;
const MAX_DIRECTIVES: i32 = 4;
const MIN_SIGNING_AGE: i32 = 15;

/// Inputs the generator reads for one club. The squad is the club's current roster.
pub struct DirectiveRequest<'a> {
    pub club: &'a Club,
    pub squad: &'a [&'a Player],
    pub season: u32,
    pub board: Option<&'a BoardProfile>,
}

pub struct DirectiveGenerator;

impl DirectiveGenerator {
    /// Analyse the squad and emit this season's prioritised briefs, critical first.
    pub fn generate(request: &DirectiveRequest<'_>, rng: &mut SimRng) -> Vec<Directive> {
        let club = request.club;
        let gaps = Self::position_gaps(request.squad);

        let keep = rng.range_i32(MIN_DIRECTIVES, MAX_DIRECTIVES) as usize;

        let directives: Vec<Directive> = gaps
            .into_iter()
            .take(keep)
            .enumerate()
            .map(|(index, (position, gap))| {
                Self::build_directive(request, position, gap, index, rng)
            })
            .sorted_by_key(|d| d.priority)
            .collect();

        debug!(
            "directives: club {} season {} -> {} briefs ({})",
            club.id,
            request.season,
            directives.len(),
            directives
                .iter()
                .map(|d| format!("{}:{}", d.position.code(), d.priority.label()))
                .join(", ")
        );

        directives
    }

    /// Positive gaps between squad average and position average, largest first.
    /// An unoccupied position averages 0 so its gap is as large as it gets.
    pub fn position_gaps(squad: &[&Player]) -> Vec<(PlayerPositionType, f32)> {
        let squad_average = average_ability(squad);

        PlayerPositionType::OUTFIELD
            .iter()
            .map(|position| {
                let covering: Vec<f32> = squad
                    .iter()
                    .filter(|p| p.plays(*position))
                    .map(|p| p.ability as f32)
                    .collect();

                let position_average = if covering.is_empty() {
                    0.0
                } else {
                    covering.iter().sum::<f32>() / covering.len() as f32
                };

                (*position, squad_average - position_average)
            })
            .filter(|(_, gap)| *gap > 0.0)
            .sorted_by(|a, b| b.1.total_cmp(&a.1))
            .collect()
    }

    fn build_directive(
        request: &DirectiveRequest<'_>,
        position: PlayerPositionType,
        gap: f32,
        index: usize,
        rng: &mut SimRng,
    ) -> Directive {
        let club = request.club;
        let priority = DirectivePriority::from_gap(gap);

        let budget_factor = request.board.map(|b| b.budget_factor()).unwrap_or(1.0) as f64;
        let budget_allocation = (club.budget * priority.budget_share() * budget_factor).round();

        let preferred_role = if club.has_strong_identity() {
            club.tactical_identity.role_hint(position)
        } else {
            None
        };

        Directive {
            id: format!("dir-{}-{}-{}-{}", club.id, position.code(), request.season, index),
            club_id: club.id,
            position,
            priority,
            budget_allocation,
            age_range: Self::age_range(club, request.board),
            min_ability_stars: Self::min_ability_stars(club.reputation, request.board),
            key_attributes: Self::key_attributes(position, rng),
            preferred_role,
            fulfilled: false,
            season: request.season,
        }
    }

    fn age_range(club: &Club, board: Option<&BoardProfile>) -> (u8, u8) {
        let (min, max) = club.scouting_philosophy.age_window();
        let flex = board.map(|b| b.age_flexibility()).unwrap_or(0);

        let mut low = (min as i32 - flex).max(MIN_SIGNING_AGE);
        let mut high = max as i32 + flex;
        if low > high {
            let mid = (min as i32 + max as i32) / 2;
            low = mid;
            high = mid;
        }

        (low as u8, high as u8)
    }

    /// Reputation-banded star floor scaled by board difficulty.
    pub fn min_ability_stars(reputation: u8, board: Option<&BoardProfile>) -> f32 {
        let base = match reputation {
            r if r >= 80 => 3.5,
            r if r >= 65 => 3.0,
            r if r >= 50 => 2.5,
            r if r >= 30 => 2.0,
            _ => 1.5,
        };
        let multiplier = board.map(|b| b.difficulty_multiplier()).unwrap_or(1.0);

        round_to_half(base * multiplier).clamp(0.5, 5.0)
    }

    fn key_attributes(position: PlayerPositionType, rng: &mut SimRng) -> Vec<Skill> {
        let pool = Self::attribute_pool(position);
        let mut attributes: Vec<Skill> = pool.iter().take(3).copied().collect();

        if let Some(extra) = rng.pick(&pool[3.min(pool.len())..]) {
            attributes.push(*extra);
        }

        attributes
    }

    /// Position-specific ordered attribute pool; the first three are always demanded.
    pub fn attribute_pool(position: PlayerPositionType) -> &'static [Skill] {
        use PlayerPositionType::*;
        use Skill::*;

        match position {
            Goalkeeper => &[Positioning, Anticipation, Composure, Agility, Decisions],
            DefenderCenter => &[Marking, Tackling, Heading, Positioning, Strength, Composure, Jumping],
            DefenderLeft | DefenderRight => &[Pace, Tackling, Crossing, Stamina, Marking, Positioning, WorkRate],
            DefensiveMidfielder => &[Tackling, Positioning, Passing, Anticipation, Stamina, Teamwork],
            MidfielderCenter => &[Passing, Vision, Stamina, WorkRate, Decisions, Technique, Tackling],
            AttackingMidfielderCenter => &[Vision, Passing, Technique, FirstTouch, Dribbling, LongShots],
            WingerLeft | WingerRight => &[Pace, Dribbling, Crossing, Acceleration, Finishing, Technique],
            Striker => &[Finishing, OffTheBall, Composure, Acceleration, Heading, Strength],
            ForwardCenter => &[FirstTouch, Finishing, Passing, Vision, Strength, Technique],
        }
    }
}
