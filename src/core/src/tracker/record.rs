use crate::scout::ConvictionLevel;
use crate::shared::SimRng;
use crate::transfers::CompletedTransfer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransferOutcome {
    Hit,
    Decent,
    Flop,
    TooEarly,
}

impl TransferOutcome {
    /// Hit, decent and flop are verdicts; they never change once reached.
    pub fn is_final(&self) -> bool {
        !matches!(self, TransferOutcome::TooEarly)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransferOutcome::Hit => "hit",
            TransferOutcome::Decent => "decent",
            TransferOutcome::Flop => "flop",
            TransferOutcome::TooEarly => "too early to tell",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeNarrative {
    Injury,
    TacticalMismatch,
    CharacterIssues,
    Overrated,
    PerfectFit,
    ExceededExpectations,
    SlowAdaptation,
    LateBloom,
}

impl OutcomeNarrative {
    pub fn describe(&self) -> &'static str {
        match self {
            OutcomeNarrative::Injury => "never managed to stay on the pitch",
            OutcomeNarrative::TacticalMismatch => "never looked at home in the system",
            OutcomeNarrative::CharacterIssues => "attitude problems overshadowed the football",
            OutcomeNarrative::Overrated => "was simply not as good as the report suggested",
            OutcomeNarrative::PerfectFit => "slotted straight in and never looked back",
            OutcomeNarrative::ExceededExpectations => "has kept improving beyond anyone's projection",
            OutcomeNarrative::SlowAdaptation => "took time to settle but has become a solid contributor",
            OutcomeNarrative::LateBloom => "struggled early before finding their feet",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonPerformance {
    pub season: u32,
    pub appearances: u32,
    pub goals: u32,
    pub assists: u32,
    /// 0-100
    pub average_rating: f32,
    pub ability: u8,
    pub form: i8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub id: String,
    pub player_id: u32,
    pub scout_id: u32,
    pub from_club_id: u32,
    pub to_club_id: u32,
    pub fee: f64,
    pub ability_at_transfer: u8,
    pub conviction: ConvictionLevel,
    pub season: u32,
    pub season_performance: Vec<SeasonPerformance>,
    pub outcome: Option<TransferOutcome>,
    pub narrative: Option<OutcomeNarrative>,
    pub accountability_applied: bool,
}

impl TransferRecord {
    /// Starts tracking a move the scout's report led to. `None` if the player stayed put.
    pub fn open(
        transfer: &CompletedTransfer,
        scout_id: u32,
        conviction: ConvictionLevel,
        season: u32,
        rng: &mut SimRng,
    ) -> Option<TransferRecord> {
        if !transfer.moved() {
            return None;
        }

        Some(TransferRecord {
            id: rng.next_id("trf"),
            player_id: transfer.player.id,
            scout_id,
            from_club_id: transfer.seller.id,
            to_club_id: transfer.buyer.id,
            fee: transfer.fee,
            ability_at_transfer: transfer.player.ability,
            conviction,
            season,
            season_performance: Vec::new(),
            outcome: None,
            narrative: None,
            accountability_applied: false,
        })
    }

    pub fn has_season(&self, season: u32) -> bool {
        self.season_performance.iter().any(|p| p.season == season)
    }

    pub fn average_rating(&self) -> Option<f32> {
        if self.season_performance.is_empty() {
            return None;
        }
        let total: f32 = self.season_performance.iter().map(|p| p.average_rating).sum();
        Some(total / self.season_performance.len() as f32)
    }

    pub fn is_settled(&self) -> bool {
        self.outcome.is_some_and(|o| o.is_final())
    }
}
