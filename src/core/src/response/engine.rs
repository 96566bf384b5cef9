use crate::club::{Club, ManagerPreference, Player};
use crate::context::RecruitmentContext;
use crate::directives::Directive;
use crate::fit::SystemFitEvaluator;
use crate::matching::ReportMatcher;
use crate::response::{feedback_for, ClubResponse, ClubResponseType};
use crate::scout::{ConvictionLevel, ScoutReport};
use crate::shared::SimRng;
use log::{debug, info};

const PRICE_TOLERANCE: f64 = 1.5;
const MIN_POSITION_FIT: f32 = 30.0;
const MIN_TACTICAL_FIT: f32 = 35.0;
const DATA_DRIVEN_MIN_QUALITY: f32 = 40.0;

const PERSUASION_BASELINE: f32 = 10.0;
const QUALITY_BONUS_THRESHOLD: f32 = 70.0;
const QUALITY_BONUS_PER_POINT: f32 = 0.5;
const LOAN_MAX_AGE: u8 = 21;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseWeights {
    pub interested: f32,
    pub trial: f32,
    pub signed: f32,
    pub does_not_fit: f32,
}

impl Default for ResponseWeights {
    fn default() -> Self {
        ResponseWeights {
            interested: 40.0,
            trial: 25.0,
            signed: 10.0,
            does_not_fit: 25.0,
        }
    }
}

impl ResponseWeights {
    fn clamped(self) -> Self {
        ResponseWeights {
            interested: self.interested.max(0.0),
            trial: self.trial.max(0.0),
            signed: self.signed.max(0.0),
            does_not_fit: self.does_not_fit.max(0.0),
        }
    }

    fn options(&self) -> [(ClubResponseType, f32); 4] {
        [
            (ClubResponseType::Interested, self.interested),
            (ClubResponseType::Trial, self.trial),
            (ClubResponseType::Signed, self.signed),
            (ClubResponseType::DoesNotFit, self.does_not_fit),
        ]
    }
}

/// Decides how a club reacts to a report submitted against its directives.
pub struct ClubResponseEngine;

impl ClubResponseEngine {
    pub fn respond(
        ctx: &RecruitmentContext<'_>,
        report: &ScoutReport,
        club_id: u32,
        directives: &[Directive],
        rng: &mut SimRng,
    ) -> ClubResponse {
        let (Some(club), Some(player)) = (ctx.club(club_id), ctx.player(report.player_id)) else {
            debug!("report {} refers to a club or player no longer in the world", report.id);
            return Self::build(ctx, report, club_id, None, ClubResponseType::Ignored, "the club", "the player");
        };

        let matched = ReportMatcher::best_match(report, player, directives)
            .and_then(|m| directives.iter().find(|d| d.id == m.directive_id));

        let Some(directive) = matched else {
            return Self::build(ctx, report, club.id, None, ClubResponseType::Ignored, &club.name, &player.name);
        };

        let response = Self::decide(ctx, report, club, player, directive, rng);

        info!(
            "{} responded '{}' to report {} on {}",
            club.name,
            response.label(),
            report.id,
            player.name
        );

        Self::build(ctx, report, club.id, Some(directive.id.clone()), response, &club.name, &player.name)
    }

    fn decide(
        ctx: &RecruitmentContext<'_>,
        report: &ScoutReport,
        club: &Club,
        player: &Player,
        directive: &Directive,
        rng: &mut SimRng,
    ) -> ClubResponseType {
        if player.market_value > directive.budget_allocation * PRICE_TOLERANCE {
            return ClubResponseType::TooExpensive;
        }

        let fit = SystemFitEvaluator::evaluate(player, club);
        if fit.position_fit < MIN_POSITION_FIT || fit.tactical_fit < MIN_TACTICAL_FIT {
            return ClubResponseType::DoesNotFit;
        }

        if club.manager.preference == ManagerPreference::DataDriven && report.quality_score < DATA_DRIVEN_MIN_QUALITY {
            return ClubResponseType::DoesNotFit;
        }

        let weights = Self::weights(ctx.scout.persuasion, report);
        let drawn = rng
            .weighted_choice(&weights.options())
            .unwrap_or(ClubResponseType::Interested);

        if drawn == ClubResponseType::Signed
            && player.age <= LOAN_MAX_AGE
            && player.market_value > directive.budget_allocation
        {
            ClubResponseType::LoanSigned
        } else {
            drawn
        }
    }

    pub fn weights(persuasion: u8, report: &ScoutReport) -> ResponseWeights {
        let mut weights = ResponseWeights::default();

        let above = (persuasion as f32 - PERSUASION_BASELINE).max(0.0);
        weights.interested += above * 2.0;
        weights.signed += above;
        weights.does_not_fit -= above;

        let (trial_bonus, signed_bonus) = Self::conviction_bonus(report.conviction);
        weights.trial += trial_bonus;
        weights.signed += signed_bonus;

        if report.quality_score >= QUALITY_BONUS_THRESHOLD {
            weights.signed += (report.quality_score - QUALITY_BONUS_THRESHOLD) * QUALITY_BONUS_PER_POINT;
        }

        weights.clamped()
    }

    fn conviction_bonus(conviction: ConvictionLevel) -> (f32, f32) {
        match conviction {
            ConvictionLevel::Note => (0.0, 0.0),
            ConvictionLevel::Recommend => (5.0, 2.0),
            ConvictionLevel::StrongRecommend => (8.0, 5.0),
            ConvictionLevel::TablePound => (10.0, 10.0),
        }
    }

    fn build(
        ctx: &RecruitmentContext<'_>,
        report: &ScoutReport,
        club_id: u32,
        directive_id: Option<String>,
        response: ClubResponseType,
        club_name: &str,
        player_name: &str,
    ) -> ClubResponse {
        ClubResponse {
            report_id: report.id.clone(),
            club_id,
            player_id: report.player_id,
            directive_id,
            response,
            feedback: feedback_for(response, player_name, club_name),
            reputation_delta: response.reputation_delta(),
            week: ctx.week,
            season: ctx.season,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{
        ManagerProfile, PlayerPositionType, PlayerRole, PlayerSkills, ScoutingPhilosophy, Skill, TacticalIdentity,
    };
    use crate::directives::DirectivePriority;
    use crate::scout::{CareerTier, Scout, ScoutSpecialization};
    use std::collections::BTreeMap;

    fn club(preference: ManagerPreference) -> Club {
        Club {
            id: 1,
            name: "Rovers".to_string(),
            budget: 10_000_000.0,
            reputation: 60,
            scouting_philosophy: ScoutingPhilosophy::MarketSmart,
            tactical_identity: TacticalIdentity::Possession,
            identity_strength: 0.4,
            manager: ManagerProfile {
                name: "A. Boss".to_string(),
                preferred_formation: "4-3-3".to_string(),
                preference,
            },
            squad: vec![],
        }
    }

    fn player(value: f64, age: u8) -> Player {
        Player::builder()
            .id(5)
            .name("T. Target")
            .position(PlayerPositionType::Striker)
            .age(age)
            .ability(120)
            .skills(PlayerSkills::uniform(15.0))
            .market_value(value)
            .build()
            .expect("player")
    }

    fn scout(persuasion: u8) -> Scout {
        Scout {
            id: 1,
            name: "S. Eye".to_string(),
            persuasion,
            specialization: ScoutSpecialization::FirstTeam,
            reputation: 40.0,
            career_tier: CareerTier::ClubScout,
        }
    }

    fn directive() -> Directive {
        Directive {
            id: "dir-1-ST-1-0".to_string(),
            club_id: 1,
            position: PlayerPositionType::Striker,
            priority: DirectivePriority::Critical,
            budget_allocation: 2_000_000.0,
            age_range: (18, 30),
            min_ability_stars: 2.5,
            key_attributes: vec![Skill::Finishing, Skill::Composure],
            preferred_role: Some(PlayerRole::Poacher),
            fulfilled: false,
            season: 1,
        }
    }

    fn report(conviction: ConvictionLevel, quality: f32) -> ScoutReport {
        let mut assessments = BTreeMap::new();
        assessments.insert(Skill::Finishing, 15.0);
        assessments.insert(Skill::Composure, 14.0);

        ScoutReport {
            id: "rep-1".to_string(),
            scout_id: 1,
            player_id: 5,
            conviction,
            perceived_stars: 3.0,
            quality_score: quality,
            attribute_assessments: assessments,
            week: 4,
            season: 1,
        }
    }

    #[test]
    fn test_no_match_is_ignored() {
        let clubs = vec![club(ManagerPreference::Balanced)];
        let players = vec![player(1_000_000.0, 24)];
        let scout = scout(10);
        let ctx = RecruitmentContext::new(4, 1, &clubs, &players, &scout);
        let mut rng = SimRng::seeded(1);

        let response = ClubResponseEngine::respond(&ctx, &report(ConvictionLevel::Note, 50.0), 1, &[], &mut rng);
        assert_eq!(response.response, ClubResponseType::Ignored);
        assert_eq!(response.reputation_delta, 0.0);
        assert!(response.directive_id.is_none());
    }

    #[test]
    fn test_too_expensive_before_fit() {
        let clubs = vec![club(ManagerPreference::DataDriven)];
        let players = vec![player(3_500_000.0, 24)];
        let scout = scout(10);
        let ctx = RecruitmentContext::new(4, 1, &clubs, &players, &scout);
        let mut rng = SimRng::seeded(1);

        let response =
            ClubResponseEngine::respond(&ctx, &report(ConvictionLevel::Note, 10.0), 1, &[directive()], &mut rng);
        assert_eq!(response.response, ClubResponseType::TooExpensive);
        assert_eq!(response.directive_id.as_deref(), Some("dir-1-ST-1-0"));
    }

    #[test]
    fn test_data_driven_manager_rejects_thin_reports() {
        let clubs = vec![club(ManagerPreference::DataDriven)];
        let players = vec![player(1_000_000.0, 24)];
        let scout = scout(10);
        let ctx = RecruitmentContext::new(4, 1, &clubs, &players, &scout);
        let mut rng = SimRng::seeded(1);

        let response =
            ClubResponseEngine::respond(&ctx, &report(ConvictionLevel::TablePound, 30.0), 1, &[directive()], &mut rng);
        assert_eq!(response.response, ClubResponseType::DoesNotFit);
        assert_eq!(response.reputation_delta, -1.0);
    }

    #[test]
    fn test_weights_adjustments() {
        let weights = ClubResponseEngine::weights(15, &report(ConvictionLevel::TablePound, 80.0));

        assert_eq!(weights.interested, 50.0);
        assert_eq!(weights.trial, 35.0);
        // 10 base + 5 persuasion + 10 conviction + 5 quality
        assert_eq!(weights.signed, 30.0);
        assert_eq!(weights.does_not_fit, 20.0);
    }

    #[test]
    fn test_weights_never_negative() {
        let weights = ClubResponseEngine::weights(40, &report(ConvictionLevel::Note, 0.0));
        assert_eq!(weights.does_not_fit, 0.0);
    }

    #[test]
    fn test_young_overpriced_signing_becomes_loan() {
        let clubs = vec![club(ManagerPreference::Balanced)];
        let players = vec![player(2_500_000.0, 19)];
        let scout = scout(20);
        let ctx = RecruitmentContext::new(4, 1, &clubs, &players, &scout);

        for seed in 0..200 {
            let mut rng = SimRng::seeded(seed);
            let response =
                ClubResponseEngine::respond(&ctx, &report(ConvictionLevel::TablePound, 100.0), 1, &[directive()], &mut rng);
            assert_ne!(response.response, ClubResponseType::Signed);
        }
    }

    #[test]
    fn test_draws_are_reproducible() {
        let clubs = vec![club(ManagerPreference::Balanced)];
        let players = vec![player(1_000_000.0, 24)];
        let scout = scout(12);
        let ctx = RecruitmentContext::new(4, 1, &clubs, &players, &scout);
        let report = report(ConvictionLevel::Recommend, 60.0);

        let first = ClubResponseEngine::respond(&ctx, &report, 1, &[directive()], &mut SimRng::seeded(42));
        let second = ClubResponseEngine::respond(&ctx, &report, 1, &[directive()], &mut SimRng::seeded(42));
        assert_eq!(first.response, second.response);
    }
}
