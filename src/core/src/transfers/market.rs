use crate::club::{Club, ABILITY_MAX};
use crate::context::RecruitmentContext;
use crate::shared::SimRng;
use crate::transfers::{CollapseReason, RivalBid, TransferNegotiation};
use log::{debug, info};
use serde::{Deserialize, Serialize};

const RIVAL_BASE_CHANCE: f32 = 0.05;
const RIVAL_DESIRABILITY_BONUS: f32 = 0.07;
const RIVAL_CHANCE_JITTER: f32 = 0.02;
const RIVAL_CHANCE_RANGE: (f32, f32) = (0.05, 0.15);

const RIVAL_BUDGET_RATIO: f64 = 0.9;
const RIVAL_REPUTATION_SPREAD: u8 = 25;
const RIVAL_BID_RANGE: (f32, f32) = (0.9, 1.1);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NegotiationEvent {
    Expired { negotiation_id: String, player_id: u32 },
    RivalBid { negotiation_id: String, player_id: u32, bid: RivalBid },
}

#[derive(Debug, Clone)]
pub struct MarketWeek {
    pub negotiations: Vec<TransferNegotiation>,
    pub events: Vec<NegotiationEvent>,
}

/// Weekly pass over every negotiation: deadlines first, then rival interest.
pub struct TransferMarket;

impl TransferMarket {
    pub fn process_week(
        ctx: &RecruitmentContext<'_>,
        negotiations: &[TransferNegotiation],
        rng: &mut SimRng,
    ) -> MarketWeek {
        let mut events = Vec::new();

        let negotiations = negotiations
            .iter()
            .map(|negotiation| {
                if negotiation.is_terminal() {
                    return negotiation.clone();
                }

                if negotiation.is_past_deadline(ctx.calendar_week()) {
                    info!("negotiation {} expired in season {} week {}", negotiation.id, ctx.season, ctx.week);
                    events.push(NegotiationEvent::Expired {
                        negotiation_id: negotiation.id.clone(),
                        player_id: negotiation.player_id,
                    });
                    return negotiation.clone().collapsed(CollapseReason::Expired);
                }

                match Self::rival_bid(ctx, negotiation, rng) {
                    Some(bid) => {
                        events.push(NegotiationEvent::RivalBid {
                            negotiation_id: negotiation.id.clone(),
                            player_id: negotiation.player_id,
                            bid,
                        });
                        Self::with_rival_bid(negotiation, bid)
                    }
                    None => negotiation.clone(),
                }
            })
            .collect();

        MarketWeek { negotiations, events }
    }

    pub fn rival_chance(ability: u8, rng: &mut SimRng) -> f32 {
        let desirability = ability as f32 / ABILITY_MAX as f32;
        (RIVAL_BASE_CHANCE + RIVAL_DESIRABILITY_BONUS * desirability + rng.jitter(RIVAL_CHANCE_JITTER))
            .clamp(RIVAL_CHANCE_RANGE.0, RIVAL_CHANCE_RANGE.1)
    }

    fn rival_bid(ctx: &RecruitmentContext<'_>, negotiation: &TransferNegotiation, rng: &mut SimRng) -> Option<RivalBid> {
        let player = ctx.player(negotiation.player_id)?;
        let buyer = ctx.club(negotiation.to_club_id)?;

        let chance = Self::rival_chance(player.ability, rng);
        if !rng.chance(chance) {
            return None;
        }

        let candidates: Vec<(u32, f32)> = Self::eligible_rivals(ctx.clubs, negotiation, buyer)
            .map(|club| (club.id, (club.reputation as f32).max(1.0)))
            .collect();

        let club_id = rng.weighted_choice(&candidates)?;
        let multiplier = rng.range_f32(RIVAL_BID_RANGE.0, RIVAL_BID_RANGE.1) as f64;

        debug!("club {} lodged a rival bid for player {}", club_id, player.id);

        Some(RivalBid {
            club_id,
            amount: (negotiation.market_value * multiplier).round(),
            week: ctx.week,
        })
    }

    fn eligible_rivals<'c>(
        clubs: &'c [Club],
        negotiation: &'c TransferNegotiation,
        buyer: &'c Club,
    ) -> impl Iterator<Item = &'c Club> {
        clubs.iter().filter(move |club| {
            club.id != negotiation.from_club_id
                && club.id != negotiation.to_club_id
                && club.budget >= negotiation.market_value * RIVAL_BUDGET_RATIO
                && club.reputation.abs_diff(buyer.reputation) <= RIVAL_REPUTATION_SPREAD
        })
    }

    /// Records the bid; a bid above the asking price becomes the new asking price.
    pub fn with_rival_bid(negotiation: &TransferNegotiation, bid: RivalBid) -> TransferNegotiation {
        let mut next = negotiation.clone();
        next.rival_bids.push(bid);
        if bid.amount > next.current_asking_price {
            next.current_asking_price = bid.amount;
        }
        next
    }
}
