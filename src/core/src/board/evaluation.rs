use crate::board::{BoardPersonality, BoardProfile, BoardReaction, BoardReactionType};
use crate::scout::CareerTier;
use crate::shared::{calendar_week, SimRng};
use log::{debug, info};

/// Week on which unfulfilled directives count as missed.
pub const DIRECTIVE_DEADLINE_WEEK: u32 = 36;

const REACTION_JITTER: f32 = 1.5;
const DEMOTION_CHANCE: f32 = 0.6;
const WARNING_INTERVAL: u32 = 4;
const PRAISE_INTERVAL: u32 = 6;

/// What the department did this week, as seen from the boardroom.
#[derive(Debug, Clone, Default)]
pub struct BoardWeekInput {
    pub week: u32,
    pub season: u32,
    pub reports_submitted: u32,
    pub observations_made: u32,
    /// Season-to-date counts, the board remembers which it already judged
    pub season_hits: u32,
    pub season_flops: u32,
    pub unfulfilled_directives: u32,
    pub career_tier: Option<CareerTier>,
}

impl BoardWeekInput {
    pub fn calendar_week(&self) -> u32 {
        calendar_week(self.season, self.week)
    }
}

#[derive(Debug, Clone)]
pub struct BoardEvaluation {
    pub profile: BoardProfile,
    pub reaction: Option<BoardReaction>,
}

pub struct BoardEvaluator;

impl BoardEvaluator {
    /// Weekly board review: accumulate deltas, then pick at most one reaction.
    pub fn evaluate_week(board: &BoardProfile, input: &BoardWeekInput, rng: &mut SimRng) -> BoardEvaluation {
        let temperament = board.temperament();
        let mut profile = board.clone();

        if profile.acknowledged_season != input.season {
            profile.acknowledged_season = input.season;
            profile.acknowledged_hits = 0;
            profile.acknowledged_flops = 0;
        }

        let mut satisfaction_delta = 0.0f32;
        let mut patience_delta = 0.0f32;

        // Reports
        satisfaction_delta += (input.reports_submitted as f32 * temperament.report_value)
            .min(temperament.report_cap);

        // Successful signings not yet credited
        let new_hits = input.season_hits.saturating_sub(profile.acknowledged_hits);
        if new_hits > 0 {
            satisfaction_delta += new_hits as f32 * temperament.success_bonus;
            profile.acknowledged_hits = input.season_hits;
        }

        // Flops not yet punished
        let new_flops = input.season_flops.saturating_sub(profile.acknowledged_flops);
        if new_flops > 0 {
            satisfaction_delta -= new_flops as f32 * temperament.flop_penalty;
            patience_delta -= new_flops as f32 * temperament.flop_patience_drain;
            profile.acknowledged_flops = input.season_flops;
        }

        // Directive deadline, checked once
        if input.week == DIRECTIVE_DEADLINE_WEEK && input.unfulfilled_directives > 0 {
            satisfaction_delta -= input.unfulfilled_directives as f32 * temperament.missed_directive_penalty;
            patience_delta -= input.unfulfilled_directives as f32 * 2.0;
        }

        // Idle week
        if input.reports_submitted == 0 && input.observations_made == 0 {
            satisfaction_delta -= temperament.idle_penalty;
            patience_delta -= 1.0;
        }

        // Ultimatum deadline reached
        if profile.ultimatum_issued
            && profile.ultimatum_deadline.is_some_and(|deadline| input.calendar_week() >= deadline)
        {
            if profile.satisfaction + satisfaction_delta < temperament.thresholds.warning {
                satisfaction_delta -= temperament.ultimatum_missed_penalty;
                patience_delta -= 15.0;
                debug!("board: ultimatum missed in week {}", input.week);
            }
            profile = profile.clear_ultimatum();
        }

        satisfaction_delta += rng.jitter(REACTION_JITTER);

        if satisfaction_delta > 0.0 {
            patience_delta += 1.0;
        }

        profile.satisfaction += satisfaction_delta;
        profile.patience += patience_delta;
        let profile = profile.normalized();

        let (profile, reaction) = Self::react(profile, input, rng);

        if let Some(reaction) = &reaction {
            info!(
                "board ({}): {:?} in week {} at satisfaction {:.1}",
                profile.personality.name(),
                reaction.reaction_type,
                input.week,
                profile.satisfaction
            );
        }

        BoardEvaluation {
            profile: profile.normalized(),
            reaction,
        }
    }

    fn react(
        mut profile: BoardProfile,
        input: &BoardWeekInput,
        rng: &mut SimRng,
    ) -> (BoardProfile, Option<BoardReaction>) {
        let temperament = profile.temperament();
        let thresholds = temperament.thresholds;
        let week = input.week;
        let satisfaction = profile.satisfaction;

        if satisfaction < thresholds.firing && profile.patience < 10.0 {
            let can_demote = input
                .career_tier
                .is_some_and(|tier| !tier.is_lowest());

            let reaction = if can_demote && rng.chance(DEMOTION_CHANCE) {
                BoardReaction::new(
                    BoardReactionType::Demotion,
                    "satisfaction below firing threshold",
                    week,
                    Self::message(profile.personality, BoardReactionType::Demotion),
                )
            } else {
                BoardReaction::new(
                    BoardReactionType::Firing,
                    "satisfaction below firing threshold",
                    week,
                    Self::message(profile.personality, BoardReactionType::Firing),
                )
            };
            return (profile, Some(reaction));
        }

        if satisfaction < thresholds.critical {
            if !profile.ultimatum_issued {
                profile.ultimatum_issued = true;
                let now = input.calendar_week();
                profile.ultimatum_deadline = Some(now + temperament.ultimatum_weeks);
                profile.ultimatum_issued_week = Some(now);
                profile.budget_multiplier *= 0.9;

                let reaction = BoardReaction::new(
                    BoardReactionType::Ultimatum,
                    "satisfaction below critical threshold",
                    week,
                    format!(
                        "{} You have {} weeks to turn this around.",
                        Self::message(profile.personality, BoardReactionType::Ultimatum),
                        temperament.ultimatum_weeks
                    ),
                );
                return (profile, Some(reaction));
            }

            profile.budget_multiplier *= 0.95;
            let reaction = BoardReaction::new(
                BoardReactionType::BudgetCut,
                "satisfaction below critical threshold under ultimatum",
                week,
                Self::message(profile.personality, BoardReactionType::BudgetCut),
            );
            return (profile, Some(reaction));
        }

        if satisfaction < thresholds.warning {
            if week % WARNING_INTERVAL == 0 {
                let reaction = BoardReaction::new(
                    BoardReactionType::Warning,
                    "satisfaction below warning threshold",
                    week,
                    Self::message(profile.personality, BoardReactionType::Warning),
                );
                return (profile, Some(reaction));
            }
            return (profile, None);
        }

        if satisfaction > thresholds.praise && week % PRAISE_INTERVAL == 0 {
            let reaction_type = if rng.chance(0.5) {
                profile.budget_multiplier *= 1.1;
                BoardReactionType::BudgetIncrease
            } else {
                BoardReactionType::Praise
            };

            let profile = profile.clear_ultimatum();
            let reaction = BoardReaction::new(
                reaction_type,
                "satisfaction above praise threshold",
                week,
                Self::message(profile.personality, reaction_type),
            );
            return (profile, Some(reaction));
        }

        (profile, None)
    }

    fn message(personality: BoardPersonality, reaction: BoardReactionType) -> &'static str {
        match (reaction, personality) {
            (BoardReactionType::Praise, BoardPersonality::HandsOff) => "The board notes the department is ticking along nicely.",
            (BoardReactionType::Praise, _) => "The board is delighted with the recruitment department's work.",
            (BoardReactionType::BudgetIncrease, BoardPersonality::PennyPinching) => "Against all instinct, the board has loosened the purse strings.",
            (BoardReactionType::BudgetIncrease, _) => "Impressed by recent work, the board has increased the recruitment budget.",
            (BoardReactionType::Warning, BoardPersonality::Impatient) => "The board expects results now, not next season.",
            (BoardReactionType::Warning, BoardPersonality::Ambitious) => "The board expected far more ambition from its recruitment team.",
            (BoardReactionType::Warning, _) => "The board has concerns about the direction of the recruitment department.",
            (BoardReactionType::Ultimatum, BoardPersonality::PennyPinching) => "The board questions whether the department is worth what it costs.",
            (BoardReactionType::Ultimatum, _) => "The board has issued an ultimatum.",
            (BoardReactionType::BudgetCut, _) => "Recruitment spending has been cut further while the ultimatum stands.",
            (BoardReactionType::Firing, _) => "The board has decided to terminate your contract.",
            (BoardReactionType::Demotion, _) => "The board has moved you to a lesser role within the organisation.",
        }
    }
}
