use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardReactionType {
    Praise,
    BudgetIncrease,
    Warning,
    Ultimatum,
    BudgetCut,
    Firing,
    Demotion,
}

/// Output of one weekly evaluation. Delivered as a notification, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardReaction {
    pub reaction_type: BoardReactionType,
    pub trigger: String,
    pub week: u32,
    pub message: String,
}

impl BoardReaction {
    pub fn new(reaction_type: BoardReactionType, trigger: impl Into<String>, week: u32, message: impl Into<String>) -> Self {
        BoardReaction {
            reaction_type,
            trigger: trigger.into(),
            week,
            message: message.into(),
        }
    }

    /// Ends the current career state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.reaction_type,
            BoardReactionType::Firing | BoardReactionType::Demotion
        )
    }

    pub fn requires_action(&self) -> bool {
        matches!(
            self.reaction_type,
            BoardReactionType::Ultimatum | BoardReactionType::Warning
        )
    }
}
