use crate::club::Player;
use crate::context::RecruitmentContext;
use crate::response::{feedback_for, ClubResponse, ClubResponseType};
use crate::shared::SimRng;
use log::info;

const FORM_SWING: f32 = 5.0;
const ABOVE_AVERAGE_BONUS: f32 = 10.0;
const WELL_BELOW_MARGIN: f32 = 15.0;
const WELL_BELOW_SHIFT: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialWeights {
    pub signed: f32,
    pub interested: f32,
    pub does_not_fit: f32,
}

/// Settles a trial once the player has been seen up close.
pub struct TrialResolver;

impl TrialResolver {
    pub fn weights(player: &Player, squad_average: f32) -> TrialWeights {
        let mut weights = TrialWeights {
            signed: 60.0,
            interested: 25.0,
            does_not_fit: 15.0,
        };

        let form_shift = player.form as f32 * FORM_SWING;
        weights.signed += form_shift;
        weights.does_not_fit -= form_shift;

        let ability = player.ability as f32;
        if ability > squad_average {
            weights.signed += ABOVE_AVERAGE_BONUS;
        } else if ability < squad_average - WELL_BELOW_MARGIN {
            weights.signed -= WELL_BELOW_SHIFT;
            weights.does_not_fit += WELL_BELOW_SHIFT;
        }

        TrialWeights {
            signed: weights.signed.max(0.0),
            interested: weights.interested.max(0.0),
            does_not_fit: weights.does_not_fit.max(0.0),
        }
    }

    pub fn resolve(player: &Player, squad_average: f32, rng: &mut SimRng) -> ClubResponseType {
        let weights = Self::weights(player, squad_average);

        rng.weighted_choice(&[
            (ClubResponseType::Signed, weights.signed),
            (ClubResponseType::Interested, weights.interested),
            (ClubResponseType::DoesNotFit, weights.does_not_fit),
        ])
        .unwrap_or(ClubResponseType::Interested)
    }

    /// Follow-up answer for a report that earned a trial; `None` for any other response
    /// or when the club or player has left the world.
    pub fn conclude(ctx: &RecruitmentContext<'_>, trial: &ClubResponse, rng: &mut SimRng) -> Option<ClubResponse> {
        if trial.response != ClubResponseType::Trial {
            return None;
        }

        let club = ctx.club(trial.club_id)?;
        let player = ctx.player(trial.player_id)?;
        let squad_average = club.squad_average_ability(ctx.players);

        let outcome = Self::resolve(player, squad_average, rng);

        info!("trial of {} at {} ended '{}'", player.name, club.name, outcome.label());

        Some(ClubResponse {
            report_id: trial.report_id.clone(),
            club_id: club.id,
            player_id: player.id,
            directive_id: trial.directive_id.clone(),
            response: outcome,
            feedback: feedback_for(outcome, &player.name, &club.name),
            reputation_delta: outcome.reputation_delta(),
            week: ctx.week,
            season: ctx.season,
        })
    }
}
