use crate::board::{hold_board_meeting, BoardEvaluator, BoardReactionType, BoardWeekInput};
use crate::club::{Club, Player};
use crate::directives::{DirectiveGenerator, DirectiveRequest};
use crate::notifications::{Notification, NotificationFactory};
use crate::pipeline::{CareerState, PendingTrial, SponsoredDeal, WeekActions, SEASON_WEEKS};
use crate::response::{ClubResponse, ClubResponseEngine, ClubResponseType, TrialResolver};
use crate::scout::{CareerTier, ConvictionLevel};
use crate::shared::SimRng;
use crate::tracker::{Accountability, OutcomeClassifier, PerformanceSimulator, TransferOutcome, TransferRecord};
use crate::transfers::{CompletedTransfer, NegotiationEngine, NegotiationEvent, NegotiationPhase, TransferMarket};
use log::{debug, info};

#[derive(Debug, Clone)]
pub struct WeekOutcome {
    pub state: CareerState,
    pub notifications: Vec<Notification>,
}

/// Runs one simulated week over the whole recruitment pipeline.
///
/// Order within a week: board review, directive refresh, report responses,
/// trials, negotiations and completions, then the season review in the last week.
/// The incoming state is never touched; the successor is returned.
pub struct WeeklyProcessor;

impl WeeklyProcessor {
    pub fn process_week(state: &CareerState, actions: &WeekActions, rng: &mut SimRng) -> WeekOutcome {
        let mut notifications = Vec::new();

        let state = state.clone();
        let state = Self::review_board(state, actions, rng, &mut notifications);
        let state = Self::refresh_directives(state, rng, &mut notifications);
        let state = Self::handle_reports(state, actions, rng, &mut notifications);
        let state = Self::resolve_trials(state, rng, &mut notifications);
        let state = Self::advance_negotiations(state, actions, rng, &mut notifications);
        let state = Self::settle_negotiations(state, actions, rng, &mut notifications);
        let state = Self::review_season(state, rng, &mut notifications);
        let state = Self::advance_calendar(state, actions);

        WeekOutcome { state, notifications }
    }

    // ─── Board ──────────────────────────────────────────────────────────

    fn review_board(
        mut state: CareerState,
        actions: &WeekActions,
        rng: &mut SimRng,
        notes: &mut Vec<Notification>,
    ) -> CareerState {
        let Some(mut board) = state.board.take() else {
            return state;
        };

        if actions.request_board_meeting {
            if let Some(after_meeting) = hold_board_meeting(&board, state.scout.career_tier, state.calendar_week()) {
                board = after_meeting;
            }
        }

        let input = BoardWeekInput {
            week: state.week,
            season: state.season,
            reports_submitted: state.last_week_reports,
            observations_made: state.last_week_observations,
            season_hits: state.season_hits,
            season_flops: state.season_flops,
            unfulfilled_directives: state.employer_open_directives(),
            career_tier: Some(state.scout.career_tier),
        };

        let evaluation = BoardEvaluator::evaluate_week(&board, &input, rng);
        state.board = Some(evaluation.profile);

        if let Some(reaction) = evaluation.reaction {
            notes.push(NotificationFactory::new(state.week, state.season, rng).board(&reaction));

            match reaction.reaction_type {
                BoardReactionType::Firing => {
                    info!("{} was dismissed in week {}", state.scout.name, state.week);
                    state.scout.career_tier = CareerTier::LOWEST;
                    state.employer_id = None;
                    state.board = None;
                }
                BoardReactionType::Demotion => {
                    if let Some(lower) = state.scout.career_tier.demoted() {
                        state.scout.career_tier = lower;
                    }
                    state.board = None;
                }
                _ => {}
            }
        }

        state
    }

    // ─── Directives ─────────────────────────────────────────────────────

    fn refresh_directives(mut state: CareerState, rng: &mut SimRng, notes: &mut Vec<Notification>) -> CareerState {
        if state.directives_season == Some(state.season) {
            return state;
        }

        let mut directives = Vec::new();
        for club in &state.clubs {
            let squad = club.squad_players(&state.players);
            let is_employer = state.employer_id == Some(club.id);
            let request = DirectiveRequest {
                club,
                squad: &squad,
                season: state.season,
                board: if is_employer { state.board.as_ref() } else { None },
            };

            let issued = DirectiveGenerator::generate(&request, rng);
            if is_employer {
                notes.push(NotificationFactory::new(state.week, state.season, rng).directives(&club.name, &issued));
            }
            directives.extend(issued);
        }

        if let (Some(board), Some(employer)) = (state.board.as_ref(), state.employer_id) {
            let issued = directives.iter().filter(|d| d.club_id == employer).count() as u32;
            state.board = Some(board.with_directive_history(issued));
        }

        info!("season {}: {} directives issued across {} clubs", state.season, directives.len(), state.clubs.len());
        state.directives = directives;
        state.directives_season = Some(state.season);
        state
    }

    // ─── Reports, responses and trials ──────────────────────────────────

    fn handle_reports(
        mut state: CareerState,
        actions: &WeekActions,
        rng: &mut SimRng,
        notes: &mut Vec<Notification>,
    ) -> CareerState {
        for submission in &actions.reports {
            let directives = state.directives_for(submission.club_id);
            let response = {
                let ctx = state.context();
                ClubResponseEngine::respond(&ctx, &submission.report, submission.club_id, &directives, rng)
            };

            notes.push(NotificationFactory::new(state.week, state.season, rng).club_response(&response));
            state = Self::apply_response(state, response, submission.report.conviction, rng, notes);
        }

        state
    }

    fn resolve_trials(mut state: CareerState, rng: &mut SimRng, notes: &mut Vec<Notification>) -> CareerState {
        let (due, waiting): (Vec<PendingTrial>, Vec<PendingTrial>) = std::mem::take(&mut state.pending_trials)
            .into_iter()
            .partition(|t| (t.response.season, t.response.week) < (state.season, state.week));
        state.pending_trials = waiting;

        for trial in due {
            let verdict = {
                let ctx = state.context();
                TrialResolver::conclude(&ctx, &trial.response, rng)
            };

            // club or player gone: the trial simply lapses
            let Some(verdict) = verdict else { continue };

            notes.push(NotificationFactory::new(state.week, state.season, rng).trial_result(&verdict));
            state = Self::apply_response(state, verdict, trial.conviction, rng, notes);
        }

        state
    }

    fn apply_response(
        mut state: CareerState,
        response: ClubResponse,
        conviction: ConvictionLevel,
        rng: &mut SimRng,
        notes: &mut Vec<Notification>,
    ) -> CareerState {
        state.scout = state.scout.with_reputation_delta(response.reputation_delta);

        if response.response.is_signing() {
            state = Self::fulfil_directive(state, &response);
        }

        match response.response {
            ClubResponseType::Trial => state.pending_trials.push(PendingTrial {
                response: response.clone(),
                conviction,
            }),
            // loans are arranged without a fee negotiation
            ClubResponseType::Signed => state = Self::open_talks(state, &response, conviction, rng, notes),
            _ => {}
        }

        state.responses.push(response);
        state
    }

    fn fulfil_directive(mut state: CareerState, response: &ClubResponse) -> CareerState {
        if let Some(id) = &response.directive_id {
            state.directives = state
                .directives
                .iter()
                .map(|d| if &d.id == id { d.mark_fulfilled() } else { d.clone() })
                .collect();
        }
        state
    }

    fn open_talks(
        mut state: CareerState,
        response: &ClubResponse,
        conviction: ConvictionLevel,
        rng: &mut SimRng,
        notes: &mut Vec<Notification>,
    ) -> CareerState {
        let negotiation = {
            let ctx = state.context();
            NegotiationEngine::initiate(&ctx, response.player_id, response.club_id, &state.negotiations, rng)
        };

        if let Some(negotiation) = negotiation {
            notes.push(NotificationFactory::new(state.week, state.season, rng).negotiation_opened(&negotiation));
            state.sponsored.push(SponsoredDeal {
                negotiation_id: negotiation.id.clone(),
                report_id: response.report_id.clone(),
                conviction,
            });
            state.negotiations.push(negotiation);
        }

        state
    }

    // ─── Negotiations ───────────────────────────────────────────────────

    fn advance_negotiations(
        mut state: CareerState,
        actions: &WeekActions,
        rng: &mut SimRng,
        notes: &mut Vec<Notification>,
    ) -> CareerState {
        for id in &actions.walk_aways {
            let Some(index) = state.negotiations.iter().position(|n| &n.id == id) else {
                continue;
            };
            if let Some((collapsed, penalty)) = NegotiationEngine::walk_away(&state.negotiations[index]) {
                state.scout = state.scout.with_reputation_delta(penalty);
                state.negotiations[index] = collapsed;
            }
        }

        for submission in &actions.offers {
            let Some(index) = state.negotiations.iter().position(|n| n.id == submission.negotiation_id) else {
                continue;
            };
            if let Some((next, response)) =
                NegotiationEngine::submit_offer(&state.negotiations[index], submission.offer.clone(), state.calendar_week(), rng)
            {
                debug!("negotiation {}: {}", next.id, response.message);
                state.negotiations[index] = next;
            }
        }

        let market = {
            let ctx = state.context();
            TransferMarket::process_week(&ctx, &state.negotiations, rng)
        };

        for event in &market.events {
            // expiries are reported when the negotiation is closed
            if let NegotiationEvent::RivalBid { .. } = event {
                notes.push(NotificationFactory::new(state.week, state.season, rng).market_event(event));
            }
        }

        state.negotiations = market.negotiations;
        state
    }

    fn settle_negotiations(
        mut state: CareerState,
        actions: &WeekActions,
        rng: &mut SimRng,
        notes: &mut Vec<Notification>,
    ) -> CareerState {
        let (closed, open): (Vec<_>, Vec<_>) = std::mem::take(&mut state.negotiations)
            .into_iter()
            .partition(|n| n.is_terminal());
        state.negotiations = open;

        for negotiation in closed {
            notes.push(NotificationFactory::new(state.week, state.season, rng).negotiation_closed(&negotiation));

            if negotiation.phase == NegotiationPhase::Completed {
                let relationship = actions.relationship_with(negotiation.player_id);
                let completed = CompletedTransfer::complete(&negotiation, &state.clubs, &state.players, relationship);

                if let Some(transfer) = completed {
                    notes.push(NotificationFactory::new(state.week, state.season, rng).transfer(&transfer));
                    if transfer.moved() {
                        state = Self::apply_transfer(state, &transfer, rng);
                    }
                }
            }

            state.closed_negotiations.push(negotiation);
        }

        state
    }

    fn apply_transfer(mut state: CareerState, transfer: &CompletedTransfer, rng: &mut SimRng) -> CareerState {
        state.clubs = state
            .clubs
            .iter()
            .map(|club| Self::replace_club(club, transfer))
            .collect();
        state.players = state
            .players
            .iter()
            .map(|p| Self::replace_player(p, &transfer.player))
            .collect();

        let conviction = state
            .sponsored
            .iter()
            .find(|s| s.negotiation_id == transfer.negotiation_id)
            .map(|s| s.conviction);

        if let Some(conviction) = conviction {
            if let Some(record) = TransferRecord::open(transfer, state.scout.id, conviction, state.season, rng) {
                state.records.push(record);
            }
        }

        state
    }

    fn replace_club(club: &Club, transfer: &CompletedTransfer) -> Club {
        if club.id == transfer.buyer.id {
            transfer.buyer.clone()
        } else if club.id == transfer.seller.id {
            transfer.seller.clone()
        } else {
            club.clone()
        }
    }

    fn replace_player(player: &Player, moved: &Player) -> Player {
        if player.id == moved.id {
            moved.clone()
        } else {
            player.clone()
        }
    }

    // ─── Season review ──────────────────────────────────────────────────

    fn review_season(mut state: CareerState, rng: &mut SimRng, notes: &mut Vec<Notification>) -> CareerState {
        if state.week != SEASON_WEEKS {
            return state;
        }

        let mut hits = 0;
        let mut flops = 0;

        let records = std::mem::take(&mut state.records);
        let mut reviewed = Vec::with_capacity(records.len());

        for record in records {
            let was_settled = record.is_settled();
            let snapshot = {
                let ctx = state.context();
                PerformanceSimulator::snapshot(&ctx, &record, rng)
            };
            let mut record = OutcomeClassifier::classify(&snapshot);

            if !was_settled {
                match record.outcome {
                    Some(TransferOutcome::Hit) => hits += 1,
                    Some(TransferOutcome::Flop) => flops += 1,
                    _ => {}
                }
            }

            if let Some((applied, delta)) = Accountability::apply(&record) {
                state.scout = state.scout.with_reputation_delta(delta);
                let name = state
                    .player(applied.player_id)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| "The player".to_string());
                notes.push(NotificationFactory::new(state.week, state.season, rng).verdict(&applied, &name, delta));
                record = applied;
            }

            reviewed.push(record);
        }

        state.records = reviewed;
        state.season_hits = hits;
        state.season_flops = flops;
        state
    }

    fn advance_calendar(mut state: CareerState, actions: &WeekActions) -> CareerState {
        state.last_week_reports = actions.reports.len() as u32;
        state.last_week_observations = actions.observations_made;

        state.week += 1;
        if state.week > SEASON_WEEKS {
            state.week = 1;
            state.season += 1;
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardPersonality, BoardProfile};
    use crate::club::{
        ManagerPreference, ManagerProfile, PlayerPositionType, PlayerSkills, ScoutingPhilosophy, TacticalIdentity,
    };
    use crate::notifications::NotificationType;
    use crate::pipeline::{OfferSubmission, ReportSubmission};
    use crate::scout::{Scout, ScoutReport, ScoutSpecialization};
    use crate::transfers::{CollapseReason, SellerPersonality, TransferNegotiation, TransferOffer};
    use std::collections::BTreeMap;

    fn club(id: u32, squad: Vec<u32>) -> Club {
        Club {
            id,
            name: format!("Club {id}"),
            budget: 12_000_000.0,
            reputation: 55,
            scouting_philosophy: ScoutingPhilosophy::MarketSmart,
            tactical_identity: TacticalIdentity::Possession,
            identity_strength: 0.7,
            manager: ManagerProfile {
                name: "Manager".to_string(),
                preferred_formation: "4-3-3".to_string(),
                preference: ManagerPreference::Balanced,
            },
            squad,
        }
    }

    fn player(id: u32, club_id: u32, position: PlayerPositionType, ability: u8) -> Player {
        Player::builder()
            .id(id)
            .name(format!("Player {id}"))
            .club_id(club_id)
            .position(position)
            .age(24)
            .ability(ability)
            .skills(PlayerSkills::uniform(ability as f32 / 10.0))
            .market_value(1_000_000.0)
            .build()
            .expect("player")
    }

    fn state(personality: BoardPersonality) -> CareerState {
        let players = vec![
            player(1, 1, PlayerPositionType::DefenderCenter, 120),
            player(2, 1, PlayerPositionType::MidfielderCenter, 110),
            player(3, 1, PlayerPositionType::Goalkeeper, 100),
            player(4, 2, PlayerPositionType::Striker, 130),
            player(5, 2, PlayerPositionType::WingerLeft, 90),
            player(6, 3, PlayerPositionType::DefenderLeft, 105),
        ];
        let clubs = vec![club(1, vec![1, 2, 3]), club(2, vec![4, 5]), club(3, vec![6])];
        let scout = Scout {
            id: 1,
            name: "Scout".to_string(),
            persuasion: 12,
            specialization: ScoutSpecialization::FirstTeam,
            reputation: 50.0,
            career_tier: CareerTier::HeadOfRecruitment,
        };

        CareerState::new(clubs, players, scout, Some(1), Some(BoardProfile::new(personality, 1)), 1)
    }

    fn report(player_id: u32) -> ScoutReport {
        ScoutReport {
            id: format!("rep-{player_id}"),
            scout_id: 1,
            player_id,
            conviction: ConvictionLevel::StrongRecommend,
            perceived_stars: 3.5,
            quality_score: 80.0,
            attribute_assessments: BTreeMap::new(),
            week: 1,
            season: 1,
        }
    }

    fn negotiation(id: &str, phase: NegotiationPhase, deadline: u32) -> TransferNegotiation {
        TransferNegotiation {
            id: id.to_string(),
            player_id: 4,
            from_club_id: 2,
            to_club_id: 1,
            phase,
            rounds: vec![],
            max_rounds: 3,
            rival_bids: vec![],
            deadline,
            personality: SellerPersonality::Reasonable,
            agent_involved: false,
            agent_demands: None,
            market_value: 1_000_000.0,
            initial_asking_price: 1_200_000.0,
            current_asking_price: 1_200_000.0,
            agreed_fee: None,
            started_week: deadline.saturating_sub(4),
            collapse_reason: None,
        }
    }

    #[test]
    fn test_calendar_rolls_over_after_last_week() {
        let mut current = state(BoardPersonality::Patient);
        let mut rng = SimRng::seeded(1);

        for _ in 0..SEASON_WEEKS {
            current = WeeklyProcessor::process_week(&current, &WeekActions::default(), &mut rng).state;
        }

        assert_eq!(current.week, 1);
        assert_eq!(current.season, 2);
    }

    #[test]
    fn test_directives_issued_once_per_season() {
        let mut rng = SimRng::seeded(2);
        let first = WeeklyProcessor::process_week(&state(BoardPersonality::Patient), &WeekActions::default(), &mut rng);

        assert!(!first.state.directives.is_empty());
        assert!(first.state.directives.iter().all(|d| d.season == 1));
        assert!(first.state.board.as_ref().is_some_and(|b| b.directive_history > 0));

        let second = WeeklyProcessor::process_week(&first.state, &WeekActions::default(), &mut rng);
        let ids = |s: &CareerState| s.directives.iter().map(|d| d.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&first.state), ids(&second.state));
    }

    #[test]
    fn test_incoming_state_is_untouched() {
        let original = state(BoardPersonality::Impatient);
        let before = serde_json::to_string(&original).expect("serialize");
        let mut rng = SimRng::seeded(3);

        let _ = WeeklyProcessor::process_week(&original, &WeekActions::default(), &mut rng);
        assert_eq!(serde_json::to_string(&original).expect("serialize"), before);
    }

    #[test]
    fn test_same_seed_same_career() {
        let run = |seed: u64| {
            let mut rng = SimRng::seeded(seed);
            let mut current = state(BoardPersonality::Ambitious);
            for week in 0..20 {
                let actions = WeekActions {
                    observations_made: 1,
                    reports: vec![ReportSubmission {
                        club_id: 1,
                        report: report(4 + week % 3),
                    }],
                    ..WeekActions::default()
                };
                current = WeeklyProcessor::process_week(&current, &actions, &mut rng).state;
            }
            serde_json::to_string(&current).expect("serialize")
        };

        assert_eq!(run(77), run(77));
    }

    #[test]
    fn test_board_stays_in_bounds_while_idle() {
        let mut current = state(BoardPersonality::Impatient);
        let mut rng = SimRng::seeded(4);
        let mut dismissed = false;

        for _ in 0..(SEASON_WEEKS * 2) {
            let outcome = WeeklyProcessor::process_week(&current, &WeekActions::default(), &mut rng);
            if let Some(board) = &outcome.state.board {
                assert!((0.0..=100.0).contains(&board.satisfaction));
                assert!((0.0..=100.0).contains(&board.patience));
                assert!((0.5..=2.0).contains(&board.budget_multiplier));
            } else {
                dismissed = true;
                assert!(!outcome.state.scout.career_tier.is_top());
            }
            current = outcome.state;
        }

        // an impatient board does not tolerate two idle seasons
        assert!(dismissed);
    }

    #[test]
    fn test_report_for_missing_club_is_ignored() {
        let mut rng = SimRng::seeded(5);
        let actions = WeekActions {
            reports: vec![ReportSubmission {
                club_id: 99,
                report: report(4),
            }],
            ..WeekActions::default()
        };

        let outcome = WeeklyProcessor::process_week(&state(BoardPersonality::Patient), &actions, &mut rng);
        assert_eq!(outcome.state.responses.len(), 1);
        assert_eq!(outcome.state.responses[0].response, ClubResponseType::Ignored);
    }

    #[test]
    fn test_due_trial_is_resolved() {
        let mut current = state(BoardPersonality::Patient);
        current.week = 5;
        current.pending_trials.push(PendingTrial {
            response: ClubResponse {
                report_id: "rep-4".to_string(),
                club_id: 1,
                player_id: 4,
                directive_id: None,
                response: ClubResponseType::Trial,
                feedback: String::new(),
                reputation_delta: 2.0,
                week: 4,
                season: 1,
            },
            conviction: ConvictionLevel::Recommend,
        });

        let mut rng = SimRng::seeded(6);
        let outcome = WeeklyProcessor::process_week(&current, &WeekActions::default(), &mut rng);

        assert!(outcome.state.pending_trials.is_empty());
        assert!(outcome.state.responses.iter().any(|r| r.report_id == "rep-4"));
    }

    #[test]
    fn test_agreed_deal_moves_player_and_opens_record() {
        let mut current = state(BoardPersonality::Patient);
        current.negotiations.push(negotiation("neg-test", NegotiationPhase::Completed, 5));
        current.negotiations[0].agreed_fee = Some(1_150_000.0);
        current.sponsored.push(SponsoredDeal {
            negotiation_id: "neg-test".to_string(),
            report_id: "rep-4".to_string(),
            conviction: ConvictionLevel::TablePound,
        });

        let mut actions = WeekActions::default();
        actions.relationships.insert(4, 0.9);
        let mut rng = SimRng::seeded(7);
        let outcome = WeeklyProcessor::process_week(&current, &actions, &mut rng);
        let next = outcome.state;

        assert!(next.negotiations.is_empty());
        assert_eq!(next.closed_negotiations.len(), 1);
        assert_eq!(next.player(4).and_then(|p| p.club_id), Some(1));
        assert!(next.clubs[0].squad.contains(&4));
        assert!(!next.clubs[1].squad.contains(&4));
        assert_eq!(next.records.len(), 1);
        assert_eq!(next.records[0].conviction, ConvictionLevel::TablePound);
    }

    #[test]
    fn test_late_season_talks_expire_in_the_next_season() {
        let mut current = state(BoardPersonality::Patient);
        current.week = 36;
        current.negotiations.push(negotiation("neg-late", NegotiationPhase::Initial, current.calendar_week() + 4));

        let mut rng = SimRng::seeded(8);
        for _ in 0..6 {
            current = WeeklyProcessor::process_week(&current, &WeekActions::default(), &mut rng).state;
        }

        assert_eq!((current.season, current.week), (2, 4));
        assert!(current.negotiations.is_empty());
        assert_eq!(current.closed_negotiations.len(), 1);
        assert_eq!(current.closed_negotiations[0].collapse_reason, Some(CollapseReason::Expired));
    }

    #[test]
    fn test_offer_after_deadline_does_not_close_a_deal() {
        let mut current = state(BoardPersonality::Patient);
        current.week = 10;
        current.negotiations.push(negotiation("neg-stale", NegotiationPhase::CounterOffer, 9));

        let actions = WeekActions {
            offers: vec![OfferSubmission {
                negotiation_id: "neg-stale".to_string(),
                offer: TransferOffer::new(5_000_000.0),
            }],
            ..WeekActions::default()
        };
        let mut rng = SimRng::seeded(9);
        let next = WeeklyProcessor::process_week(&current, &actions, &mut rng).state;

        assert_eq!(next.closed_negotiations.len(), 1);
        assert_eq!(next.closed_negotiations[0].phase, NegotiationPhase::Collapsed);
        assert_eq!(next.closed_negotiations[0].collapse_reason, Some(CollapseReason::Expired));
        assert_eq!(next.player(4).and_then(|p| p.club_id), Some(2));
    }

    #[test]
    fn test_directives_refresh_once_even_when_nothing_is_needed() {
        let players: Vec<Player> = PlayerPositionType::OUTFIELD
            .iter()
            .enumerate()
            .map(|(index, position)| player(index as u32 + 1, 1, *position, 100))
            .collect();
        let squad = players.iter().map(|p| p.id).collect();
        let mut current = state(BoardPersonality::Patient);
        current.clubs = vec![club(1, squad)];
        current.players = players;

        let mut rng = SimRng::seeded(10);
        let mut briefings = 0;
        for _ in 0..3 {
            let outcome = WeeklyProcessor::process_week(&current, &WeekActions::default(), &mut rng);
            briefings += outcome
                .notifications
                .iter()
                .filter(|n| n.notification_type == NotificationType::Directives)
                .count();
            current = outcome.state;
        }

        assert!(current.directives.is_empty());
        assert_eq!(current.directives_season, Some(1));
        assert_eq!(briefings, 1);
    }
}
