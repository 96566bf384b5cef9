use scout_core::pipeline::CareerState;
use scout_core::scout::CareerTier;
use scout_core::tracker::TransferOutcome;
use scout_core::transfers::NegotiationPhase;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct CareerSummary {
    pub seed: u64,
    pub season: u32,
    pub week: u32,
    pub scout: String,
    pub career_tier: CareerTier,
    pub reputation: f32,
    pub employer: Option<String>,
    pub board_satisfaction: Option<f32>,
    pub board_patience: Option<f32>,
    pub reports_answered: usize,
    pub responses: BTreeMap<String, usize>,
    pub negotiations_agreed: usize,
    pub negotiations_collapsed: usize,
    pub transfers_tracked: usize,
    pub outcomes: BTreeMap<String, usize>,
    pub notifications: usize,
}

impl CareerSummary {
    pub fn from_state(state: &CareerState, seed: u64, notifications: usize) -> Self {
        let mut responses = BTreeMap::new();
        for response in &state.responses {
            *responses.entry(response.response.label().to_string()).or_insert(0) += 1;
        }

        let mut outcomes = BTreeMap::new();
        for record in &state.records {
            let label = record.outcome.unwrap_or(TransferOutcome::TooEarly).label();
            *outcomes.entry(label.to_string()).or_insert(0) += 1;
        }

        let agreed = state
            .closed_negotiations
            .iter()
            .filter(|n| n.phase == NegotiationPhase::Completed)
            .count();

        CareerSummary {
            seed,
            season: state.season,
            week: state.week,
            scout: state.scout.name.clone(),
            career_tier: state.scout.career_tier,
            reputation: state.scout.reputation,
            employer: state
                .employer_id
                .and_then(|id| state.clubs.iter().find(|c| c.id == id))
                .map(|c| c.name.clone()),
            board_satisfaction: state.board.as_ref().map(|b| b.satisfaction),
            board_patience: state.board.as_ref().map(|b| b.patience),
            reports_answered: state.responses.len(),
            responses,
            negotiations_agreed: agreed,
            negotiations_collapsed: state.closed_negotiations.len() - agreed,
            transfers_tracked: state.records.len(),
            outcomes,
            notifications,
        }
    }
}
