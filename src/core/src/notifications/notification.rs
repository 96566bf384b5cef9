use crate::board::{BoardReaction, BoardReactionType};
use crate::directives::Directive;
use crate::response::{ClubResponse, ClubResponseType};
use crate::shared::{season_and_week, SimRng};
use crate::tracker::TransferRecord;
use crate::transfers::{CollapseReason, CompletedTransfer, NegotiationEvent, TransferNegotiation};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationType {
    Directives,
    ClubResponse,
    TrialResult,
    Negotiation,
    RivalBid,
    Transfer,
    TransferVerdict,
    Board,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub week: u32,
    pub season: u32,
    pub notification_type: NotificationType,
    pub title: String,
    pub body: String,
    pub read: bool,
    pub action_required: bool,
    pub related_id: Option<String>,
}

/// Stamps notifications with the week they were raised in.
pub struct NotificationFactory<'r> {
    week: u32,
    season: u32,
    rng: &'r mut SimRng,
}

impl<'r> NotificationFactory<'r> {
    pub fn new(week: u32, season: u32, rng: &'r mut SimRng) -> Self {
        NotificationFactory { week, season, rng }
    }

    fn make(
        &mut self,
        notification_type: NotificationType,
        title: String,
        body: String,
        action_required: bool,
        related_id: Option<String>,
    ) -> Notification {
        Notification {
            id: self.rng.next_id("ntf"),
            week: self.week,
            season: self.season,
            notification_type,
            title,
            body,
            read: false,
            action_required,
            related_id,
        }
    }

    pub fn directives(&mut self, club_name: &str, directives: &[Directive]) -> Notification {
        let positions = directives
            .iter()
            .map(|d| format!("{} ({})", d.position.code(), d.priority.label()))
            .join(", ");

        self.make(
            NotificationType::Directives,
            format!("New recruitment brief from {club_name}"),
            format!("{club_name} want targets at: {positions}."),
            false,
            None,
        )
    }

    pub fn club_response(&mut self, response: &ClubResponse) -> Notification {
        self.make(
            NotificationType::ClubResponse,
            format!("Report {}: {}", response.report_id, response.response.label()),
            response.feedback.clone(),
            response.response == ClubResponseType::Trial,
            Some(response.report_id.clone()),
        )
    }

    pub fn trial_result(&mut self, response: &ClubResponse) -> Notification {
        self.make(
            NotificationType::TrialResult,
            format!("Trial verdict: {}", response.response.label()),
            response.feedback.clone(),
            false,
            Some(response.report_id.clone()),
        )
    }

    pub fn negotiation_opened(&mut self, negotiation: &TransferNegotiation) -> Notification {
        let (season, week) = season_and_week(negotiation.deadline);
        self.make(
            NotificationType::Negotiation,
            "Talks opened".to_string(),
            format!(
                "The selling club is playing {} and wants {:.0}. Deadline: season {} week {}.",
                negotiation.personality.name(),
                negotiation.current_asking_price,
                season,
                week
            ),
            true,
            Some(negotiation.id.clone()),
        )
    }

    pub fn negotiation_closed(&mut self, negotiation: &TransferNegotiation) -> Notification {
        let body = match negotiation.collapse_reason {
            Some(CollapseReason::OfferRejected) => "The selling club walked out after a derisory offer.",
            Some(CollapseReason::RoundsExhausted) => "No agreement could be reached in the rounds available.",
            Some(CollapseReason::Expired) => "The deadline passed without a deal.",
            Some(CollapseReason::WalkedAway) => "You pulled out of the negotiation.",
            None => "A fee has been agreed.",
        };

        self.make(
            NotificationType::Negotiation,
            "Negotiation closed".to_string(),
            body.to_string(),
            false,
            Some(negotiation.id.clone()),
        )
    }

    pub fn market_event(&mut self, event: &NegotiationEvent) -> Notification {
        match event {
            NegotiationEvent::Expired { negotiation_id, .. } => self.make(
                NotificationType::Negotiation,
                "Negotiation expired".to_string(),
                "The deadline passed without a deal.".to_string(),
                false,
                Some(negotiation_id.clone()),
            ),
            NegotiationEvent::RivalBid { negotiation_id, bid, .. } => self.make(
                NotificationType::RivalBid,
                "Rival bid lodged".to_string(),
                format!("Another club has bid {:.0} for the player.", bid.amount),
                true,
                Some(negotiation_id.clone()),
            ),
        }
    }

    pub fn transfer(&mut self, transfer: &CompletedTransfer) -> Notification {
        let title = if transfer.moved() {
            format!("{} signs for {}", transfer.player.name, transfer.buyer.name)
        } else {
            format!("{} stays put", transfer.player.name)
        };

        self.make(
            NotificationType::Transfer,
            title,
            transfer.message.clone(),
            false,
            Some(transfer.negotiation_id.clone()),
        )
    }

    pub fn verdict(&mut self, record: &TransferRecord, player_name: &str, reputation_delta: f32) -> Notification {
        let verdict = record.outcome.map(|o| o.label()).unwrap_or("pending");
        let story = record.narrative.map(|n| n.describe()).unwrap_or("");

        self.make(
            NotificationType::TransferVerdict,
            format!("{player_name}: {verdict}"),
            format!("{player_name} {story}. Reputation {reputation_delta:+.0}."),
            false,
            Some(record.id.clone()),
        )
    }

    pub fn board(&mut self, reaction: &BoardReaction) -> Notification {
        let title = match reaction.reaction_type {
            BoardReactionType::Praise => "The board is pleased",
            BoardReactionType::BudgetIncrease => "Budget increased",
            BoardReactionType::Warning => "Board warning",
            BoardReactionType::Ultimatum => "Board ultimatum",
            BoardReactionType::BudgetCut => "Budget cut",
            BoardReactionType::Firing => "You have been dismissed",
            BoardReactionType::Demotion => "You have been demoted",
        };

        self.make(
            NotificationType::Board,
            title.to_string(),
            reaction.message.clone(),
            reaction.requires_action(),
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_notification() {
        let mut rng = SimRng::seeded(1);
        let mut factory = NotificationFactory::new(12, 2, &mut rng);
        let reaction = BoardReaction::new(BoardReactionType::Ultimatum, "satisfaction", 12, "Deliver by week 20.");

        let notification = factory.board(&reaction);
        assert_eq!(notification.week, 12);
        assert_eq!(notification.season, 2);
        assert!(notification.action_required);
        assert!(!notification.read);
        assert!(notification.id.starts_with("ntf-"));
    }

    #[test]
    fn test_ids_are_distinct() {
        let mut rng = SimRng::seeded(1);
        let mut factory = NotificationFactory::new(1, 1, &mut rng);
        let reaction = BoardReaction::new(BoardReactionType::Praise, "satisfaction", 1, "Well done.");

        let a = factory.board(&reaction);
        let b = factory.board(&reaction);
        assert_ne!(a.id, b.id);
    }
}
