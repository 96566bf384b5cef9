use crate::transfers::TransferOffer;
use serde::{Deserialize, Serialize};

pub const NEGOTIATION_WINDOW_WEEKS: u32 = 4;
pub const MIN_ROUNDS: u32 = 2;
pub const MAX_ROUNDS: u32 = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NegotiationPhase {
    Initial,
    CounterOffer,
    FinalOffer,
    Completed,
    Collapsed,
}

impl NegotiationPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, NegotiationPhase::Completed | NegotiationPhase::Collapsed)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SellerPersonality {
    Hardball,
    Reasonable,
    Desperate,
    Prestige,
}

/// What a seller's personality fixes for the whole negotiation
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NegotiationTerms {
    pub asking_multiplier: f64,
    pub base_rounds: u32,
    pub concession_rate: f64,
    pub add_on_acceptance: f64,
}

impl SellerPersonality {
    pub fn terms(&self) -> NegotiationTerms {
        match self {
            SellerPersonality::Hardball => NegotiationTerms {
                asking_multiplier: 1.5,
                base_rounds: 3,
                concession_rate: 0.15,
                add_on_acceptance: 0.4,
            },
            SellerPersonality::Reasonable => NegotiationTerms {
                asking_multiplier: 1.2,
                base_rounds: 3,
                concession_rate: 0.30,
                add_on_acceptance: 0.7,
            },
            SellerPersonality::Desperate => NegotiationTerms {
                asking_multiplier: 0.95,
                base_rounds: 4,
                concession_rate: 0.45,
                add_on_acceptance: 0.9,
            },
            SellerPersonality::Prestige => NegotiationTerms {
                asking_multiplier: 1.7,
                base_rounds: 2,
                concession_rate: 0.10,
                add_on_acceptance: 0.5,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SellerPersonality::Hardball => "hardball",
            SellerPersonality::Reasonable => "reasonable",
            SellerPersonality::Desperate => "desperate",
            SellerPersonality::Prestige => "prestige",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDemands {
    /// Fraction on top of current wages
    pub wage_premium: f32,
    pub signing_bonus: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Accepted,
    Countered,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationRound {
    pub number: u32,
    pub week: u32,
    pub offer: TransferOffer,
    pub effective_value: f64,
    pub asking_price: f64,
    pub outcome: RoundOutcome,
    pub counter_price: Option<f64>,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RivalBid {
    pub club_id: u32,
    pub amount: f64,
    pub week: u32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollapseReason {
    OfferRejected,
    RoundsExhausted,
    Expired,
    WalkedAway,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferNegotiation {
    pub id: String,
    pub player_id: u32,
    pub from_club_id: u32,
    pub to_club_id: u32,
    pub phase: NegotiationPhase,
    pub rounds: Vec<NegotiationRound>,
    pub max_rounds: u32,
    pub rival_bids: Vec<RivalBid>,
    /// Last calendar week offers are heard in
    pub deadline: u32,
    pub personality: SellerPersonality,
    pub agent_involved: bool,
    pub agent_demands: Option<AgentDemands>,
    pub market_value: f64,
    pub initial_asking_price: f64,
    pub current_asking_price: f64,
    pub agreed_fee: Option<f64>,
    /// Calendar week talks opened
    pub started_week: u32,
    pub collapse_reason: Option<CollapseReason>,
}

impl TransferNegotiation {
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// 1-based number of the round the next offer would be
    pub fn next_round(&self) -> u32 {
        self.rounds.len() as u32 + 1
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds.len() as u32
    }

    pub fn highest_rival_bid(&self) -> Option<f64> {
        self.rival_bids.iter().map(|b| b.amount).reduce(f64::max)
    }

    pub fn is_past_deadline(&self, calendar_week: u32) -> bool {
        calendar_week > self.deadline
    }

    pub(crate) fn collapsed(mut self, reason: CollapseReason) -> Self {
        self.phase = NegotiationPhase::Collapsed;
        self.collapse_reason = Some(reason);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_phases() {
        assert!(NegotiationPhase::Completed.is_terminal());
        assert!(NegotiationPhase::Collapsed.is_terminal());
        assert!(!NegotiationPhase::FinalOffer.is_terminal());
    }

    #[test]
    fn test_personality_terms() {
        let prestige = SellerPersonality::Prestige.terms();
        assert_eq!(prestige.asking_multiplier, 1.7);
        assert_eq!(prestige.base_rounds, 2);

        let desperate = SellerPersonality::Desperate.terms();
        assert!(desperate.asking_multiplier < 1.0);
        assert_eq!(desperate.base_rounds, 4);
    }
}
