use crate::club::{Club, Player};
use crate::transfers::{NegotiationPhase, TransferNegotiation};
use log::info;
use serde::{Deserialize, Serialize};

const AGENT_WILLINGNESS_BONUS: f32 = 0.15;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerWillingness {
    EnthusiasticAccept,
    ReluctantAccept,
    ReluctantReject,
    HardReject,
}

impl PlayerWillingness {
    pub fn from_score(score: f32) -> Self {
        match score {
            s if s >= 0.6 => PlayerWillingness::EnthusiasticAccept,
            s if s >= 0.4 => PlayerWillingness::ReluctantAccept,
            s if s >= 0.25 => PlayerWillingness::ReluctantReject,
            _ => PlayerWillingness::HardReject,
        }
    }

    pub fn accepts(&self) -> bool {
        matches!(
            self,
            PlayerWillingness::EnthusiasticAccept | PlayerWillingness::ReluctantAccept
        )
    }

    pub fn describe(&self, player: &str, club: &str) -> String {
        match self {
            PlayerWillingness::EnthusiasticAccept => format!("{player} can't wait to get started at {club}."),
            PlayerWillingness::ReluctantAccept => format!("{player} has agreed to join {club}, if without much enthusiasm."),
            PlayerWillingness::ReluctantReject => format!("{player} has thought it over and decided {club} is not the right move."),
            PlayerWillingness::HardReject => format!("{player} has flatly refused to talk to {club}."),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedTransfer {
    pub negotiation_id: String,
    pub player: Player,
    pub buyer: Club,
    pub seller: Club,
    pub fee: f64,
    pub willingness: PlayerWillingness,
    pub message: String,
}

impl CompletedTransfer {
    pub fn moved(&self) -> bool {
        self.willingness.accepts()
    }

    /// Closes out an agreed deal. The clubs have shaken hands; whether the player
    /// actually moves is down to them. `None` unless the fee was agreed and all
    /// three parties still exist.
    pub fn complete(
        negotiation: &TransferNegotiation,
        clubs: &[Club],
        players: &[Player],
        relationship: f32,
    ) -> Option<CompletedTransfer> {
        if negotiation.phase != NegotiationPhase::Completed {
            return None;
        }

        let fee = negotiation.agreed_fee?;
        let player = players.iter().find(|p| p.id == negotiation.player_id)?;
        let buyer = clubs.iter().find(|c| c.id == negotiation.to_club_id)?;
        let seller = clubs.iter().find(|c| c.id == negotiation.from_club_id)?;

        let score = relationship + if negotiation.agent_involved { AGENT_WILLINGNESS_BONUS } else { 0.0 };
        let willingness = PlayerWillingness::from_score(score);
        let message = willingness.describe(&player.name, &buyer.name);

        if !willingness.accepts() {
            info!("{} turned down the move to {}", player.name, buyer.name);
            return Some(CompletedTransfer {
                negotiation_id: negotiation.id.clone(),
                player: player.clone(),
                buyer: buyer.clone(),
                seller: seller.clone(),
                fee,
                willingness,
                message,
            });
        }

        let signing_bonus = negotiation.agent_demands.map(|d| d.signing_bonus).unwrap_or(0.0);

        let mut moved = player.clone();
        moved.club_id = Some(buyer.id);

        let mut buyer = buyer.clone();
        buyer.budget -= fee + signing_bonus;
        buyer.squad.push(moved.id);

        let mut seller = seller.clone();
        seller.budget += fee;
        seller.squad.retain(|id| *id != moved.id);

        info!("{} joined {} from {} for {:.0}", moved.name, buyer.name, seller.name, fee);

        Some(CompletedTransfer {
            negotiation_id: negotiation.id.clone(),
            player: moved,
            buyer,
            seller,
            fee,
            willingness,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{ManagerPreference, ManagerProfile, PlayerPositionType, ScoutingPhilosophy, TacticalIdentity};
    use crate::transfers::SellerPersonality;

    fn club(id: u32, squad: Vec<u32>) -> Club {
        Club {
            id,
            name: format!("Club {id}"),
            budget: 10_000_000.0,
            reputation: 50,
            scouting_philosophy: ScoutingPhilosophy::MarketSmart,
            tactical_identity: TacticalIdentity::DirectPlay,
            identity_strength: 0.5,
            manager: ManagerProfile {
                name: "Manager".to_string(),
                preferred_formation: "4-4-2".to_string(),
                preference: ManagerPreference::Balanced,
            },
            squad,
        }
    }

    fn agreed(agent: bool) -> TransferNegotiation {
        TransferNegotiation {
            id: "neg-1".to_string(),
            player_id: 8,
            from_club_id: 2,
            to_club_id: 1,
            phase: NegotiationPhase::Completed,
            rounds: vec![],
            max_rounds: 3,
            rival_bids: vec![],
            deadline: 14,
            personality: SellerPersonality::Reasonable,
            agent_involved: agent,
            agent_demands: None,
            market_value: 1_000_000.0,
            initial_asking_price: 1_200_000.0,
            current_asking_price: 1_200_000.0,
            agreed_fee: Some(1_150_000.0),
            started_week: 10,
            collapse_reason: None,
        }
    }

    fn world() -> (Vec<Club>, Vec<Player>) {
        let player = Player::builder()
            .id(8)
            .name("M. Mover")
            .club_id(2)
            .position(PlayerPositionType::MidfielderCenter)
            .age(26)
            .ability(110)
            .build()
            .expect("player");
        (vec![club(1, vec![]), club(2, vec![8, 9])], vec![player])
    }

    #[test]
    fn test_willingness_tiers() {
        assert_eq!(PlayerWillingness::from_score(0.6), PlayerWillingness::EnthusiasticAccept);
        assert_eq!(PlayerWillingness::from_score(0.45), PlayerWillingness::ReluctantAccept);
        assert_eq!(PlayerWillingness::from_score(0.3), PlayerWillingness::ReluctantReject);
        assert_eq!(PlayerWillingness::from_score(0.1), PlayerWillingness::HardReject);
    }

    #[test]
    fn test_completion_moves_player_and_money() {
        let (clubs, players) = world();
        let done = CompletedTransfer::complete(&agreed(false), &clubs, &players, 0.7).expect("complete");

        assert!(done.moved());
        assert_eq!(done.player.club_id, Some(1));
        assert_eq!(done.buyer.squad, vec![8]);
        assert_eq!(done.seller.squad, vec![9]);
        assert_eq!(done.buyer.budget, 8_850_000.0);
        assert_eq!(done.seller.budget, 11_150_000.0);
    }

    #[test]
    fn test_agent_tips_a_reluctant_player() {
        let (clubs, players) = world();
        let without = CompletedTransfer::complete(&agreed(false), &clubs, &players, 0.3).expect("complete");
        let with = CompletedTransfer::complete(&agreed(true), &clubs, &players, 0.3).expect("complete");

        assert!(!without.moved());
        assert!(with.moved());
    }

    #[test]
    fn test_rejection_leaves_rosters_alone() {
        let (clubs, players) = world();
        let done = CompletedTransfer::complete(&agreed(false), &clubs, &players, 0.1).expect("complete");

        assert_eq!(done.willingness, PlayerWillingness::HardReject);
        assert_eq!(done.player.club_id, Some(2));
        assert_eq!(done.seller.squad, vec![8, 9]);
        assert_eq!(done.buyer.budget, 10_000_000.0);
    }

    #[test]
    fn test_unfinished_or_orphaned_deals_do_nothing() {
        let (clubs, players) = world();
        let mut open = agreed(false);
        open.phase = NegotiationPhase::FinalOffer;
        assert!(CompletedTransfer::complete(&open, &clubs, &players, 0.9).is_none());

        assert!(CompletedTransfer::complete(&agreed(false), &clubs[..1], &players, 0.9).is_none());
    }
}
