use crate::club::{Club, Player, ABILITY_MAX};
use crate::context::RecruitmentContext;
use crate::shared::SimRng;
use crate::transfers::{
    AgentDemands, CollapseReason, NegotiationPhase, NegotiationRound, RoundOutcome, SellerPersonality,
    TransferNegotiation, TransferOffer, MAX_ROUNDS, MIN_ROUNDS, NEGOTIATION_WINDOW_WEEKS,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};

const PRESTIGE_REPUTATION: u8 = 80;
const DESPERATE_BUDGET_RATIO: f64 = 0.5;
const HARDBALL_ABILITY: u8 = 150;

const AGENT_CHANCE: f32 = 0.6;

const ACCEPT_RATIO: f64 = 0.95;
const LAST_CHANCE_RATIO: f64 = 0.85;
const LAST_CHANCE_PROBABILITY: f32 = 0.4;
const INSULT_RATIO: f64 = 0.5;
const ROUND_ESCALATION: f64 = 0.25;
const COUNTER_JITTER: f32 = 0.02;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferResponse {
    pub outcome: RoundOutcome,
    pub asking_price: f64,
    pub counter_price: Option<f64>,
    pub message: String,
}

/// Drives a negotiation one offer at a time. Each call takes the current
/// negotiation by reference and returns its successor.
pub struct NegotiationEngine;

impl NegotiationEngine {
    /// Opens talks for `player_id` on behalf of `buyer_id`. `None` when the player
    /// is already under negotiation, would be bought from their own club, or either
    /// side no longer exists.
    pub fn initiate(
        ctx: &RecruitmentContext<'_>,
        player_id: u32,
        buyer_id: u32,
        open: &[TransferNegotiation],
        rng: &mut SimRng,
    ) -> Option<TransferNegotiation> {
        if open.iter().any(|n| n.player_id == player_id && !n.is_terminal()) {
            debug!("player {player_id} already has talks in progress");
            return None;
        }

        let player = ctx.player(player_id)?;
        let seller = ctx.club(player.club_id?)?;
        let buyer = ctx.club(buyer_id)?;

        if buyer.id == seller.id {
            return None;
        }

        let personality = Self::choose_personality(seller, player, rng);
        let terms = personality.terms();

        let max_rounds = (terms.base_rounds as i32 + rng.range_i32(-1, 1)).clamp(MIN_ROUNDS as i32, MAX_ROUNDS as i32) as u32;
        let asking_price = (player.market_value * terms.asking_multiplier).round();

        let agent_involved = rng.chance(AGENT_CHANCE);
        let agent_demands = agent_involved.then(|| Self::agent_demands(player));

        let negotiation = TransferNegotiation {
            id: rng.next_id("neg"),
            player_id: player.id,
            from_club_id: seller.id,
            to_club_id: buyer.id,
            phase: NegotiationPhase::Initial,
            rounds: Vec::new(),
            max_rounds,
            rival_bids: Vec::new(),
            deadline: ctx.calendar_week() + NEGOTIATION_WINDOW_WEEKS,
            personality,
            agent_involved,
            agent_demands,
            market_value: player.market_value,
            initial_asking_price: asking_price,
            current_asking_price: asking_price,
            agreed_fee: None,
            started_week: ctx.calendar_week(),
            collapse_reason: None,
        };

        info!(
            "{} opened talks with {} ({}) for {}: asking {:.0}, {} rounds",
            buyer.name,
            seller.name,
            personality.name(),
            player.name,
            asking_price,
            max_rounds
        );

        Some(negotiation)
    }

    pub fn choose_personality(seller: &Club, player: &Player, rng: &mut SimRng) -> SellerPersonality {
        if seller.reputation >= PRESTIGE_REPUTATION {
            return SellerPersonality::Prestige;
        }
        if seller.budget < player.market_value * DESPERATE_BUDGET_RATIO {
            return SellerPersonality::Desperate;
        }
        if player.ability >= HARDBALL_ABILITY {
            return SellerPersonality::Hardball;
        }

        rng.weighted_choice(&[
            (SellerPersonality::Hardball, 25.0),
            (SellerPersonality::Reasonable, 50.0),
            (SellerPersonality::Desperate, 10.0),
            (SellerPersonality::Prestige, 15.0),
        ])
        .unwrap_or(SellerPersonality::Reasonable)
    }

    fn agent_demands(player: &Player) -> AgentDemands {
        let quality = player.ability as f32 / ABILITY_MAX as f32;

        AgentDemands {
            wage_premium: 0.05 + 0.15 * quality,
            signing_bonus: (player.market_value * (0.02 + 0.06 * quality as f64)).round(),
        }
    }

    /// One round of bidding in `week` (calendar week). `None` once the negotiation
    /// has finished or its deadline has passed.
    pub fn submit_offer(
        negotiation: &TransferNegotiation,
        offer: TransferOffer,
        week: u32,
        rng: &mut SimRng,
    ) -> Option<(TransferNegotiation, OfferResponse)> {
        if negotiation.is_terminal() || negotiation.is_past_deadline(week) {
            return None;
        }

        let terms = negotiation.personality.terms();
        let asking = negotiation.current_asking_price;
        let round = negotiation.next_round();
        let effective = offer.effective_value(terms.add_on_acceptance);
        let ratio = if asking > 0.0 { effective / asking } else { 1.0 };
        let last_round = round >= negotiation.max_rounds;

        let mut next = negotiation.clone();

        let accepted = ratio >= ACCEPT_RATIO
            || (last_round && ratio >= LAST_CHANCE_RATIO && rng.chance(LAST_CHANCE_PROBABILITY));

        let (outcome, counter_price, message) = if accepted {
            next.phase = NegotiationPhase::Completed;
            next.agreed_fee = Some(offer.cash);
            (RoundOutcome::Accepted, None, "Offer accepted. The clubs have agreed a fee.".to_string())
        } else if ratio < INSULT_RATIO {
            next = next.collapsed(CollapseReason::OfferRejected);
            (RoundOutcome::Rejected, None, "The offer was dismissed out of hand. Talks are over.".to_string())
        } else if last_round {
            next = next.collapsed(CollapseReason::RoundsExhausted);
            (RoundOutcome::Rejected, None, "The selling club has run out of patience.".to_string())
        } else {
            let counter = Self::counter_price(&next, effective, round, rng);
            next.current_asking_price = counter;
            next.phase = if round + 1 >= next.max_rounds {
                NegotiationPhase::FinalOffer
            } else {
                NegotiationPhase::CounterOffer
            };
            let message = format!("The selling club came back asking {counter:.0}.");
            (RoundOutcome::Countered, Some(counter), message)
        };

        next.rounds.push(NegotiationRound {
            number: round,
            week,
            offer,
            effective_value: effective,
            asking_price: asking,
            outcome,
            counter_price,
        });

        debug!(
            "negotiation {} round {}/{}: offer {:.0} vs asking {:.0} -> {:?}",
            next.id, round, next.max_rounds, effective, asking, next.phase
        );

        let response = OfferResponse {
            outcome,
            asking_price: next.current_asking_price,
            counter_price,
            message,
        };

        Some((next, response))
    }

    /// Seller's next asking price: concedes part of the gap, more as rounds go by,
    /// but never drops below the bid on the table or a rival's bid, and never rises.
    pub fn counter_price(negotiation: &TransferNegotiation, effective_offer: f64, round: u32, rng: &mut SimRng) -> f64 {
        let asking = negotiation.current_asking_price;
        let gap = asking - effective_offer;
        let concession = negotiation.personality.terms().concession_rate * (1.0 + ROUND_ESCALATION * (round as f64 - 1.0));

        let mut counter = (asking - gap * concession) * (1.0 + rng.jitter(COUNTER_JITTER) as f64);
        counter = counter.max(effective_offer);
        if let Some(rival) = negotiation.highest_rival_bid() {
            counter = counter.max(rival);
        }

        counter.min(asking).round()
    }

    /// Buyer pulls out. Returns the collapsed negotiation and the scout's reputation hit.
    pub fn walk_away(negotiation: &TransferNegotiation) -> Option<(TransferNegotiation, f32)> {
        if negotiation.is_terminal() {
            return None;
        }

        let penalty = if negotiation.rounds_played() < 2 { -1.0 } else { -3.0 };
        info!("walked away from negotiation {} after {} rounds", negotiation.id, negotiation.rounds_played());

        Some((negotiation.clone().collapsed(CollapseReason::WalkedAway), penalty))
    }
}
