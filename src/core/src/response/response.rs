use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClubResponseType {
    Ignored,
    Interested,
    Trial,
    DoesNotFit,
    TooExpensive,
    Signed,
    LoanSigned,
}

impl ClubResponseType {
    /// Reputation the scout gains or loses from this kind of answer
    pub fn reputation_delta(&self) -> f32 {
        match self {
            ClubResponseType::Ignored => 0.0,
            ClubResponseType::Interested => 1.0,
            ClubResponseType::Trial => 2.0,
            ClubResponseType::DoesNotFit => -1.0,
            ClubResponseType::TooExpensive => 0.0,
            ClubResponseType::Signed => 5.0,
            ClubResponseType::LoanSigned => 3.0,
        }
    }

    pub fn is_signing(&self) -> bool {
        matches!(self, ClubResponseType::Signed | ClubResponseType::LoanSigned)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClubResponseType::Ignored => "ignored",
            ClubResponseType::Interested => "interested",
            ClubResponseType::Trial => "trial",
            ClubResponseType::DoesNotFit => "does not fit",
            ClubResponseType::TooExpensive => "too expensive",
            ClubResponseType::Signed => "signed",
            ClubResponseType::LoanSigned => "loan signed",
        }
    }
}

/// The club's answer to one submitted report. Never changes once made.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubResponse {
    pub report_id: String,
    pub club_id: u32,
    pub player_id: u32,
    pub directive_id: Option<String>,
    pub response: ClubResponseType,
    pub feedback: String,
    pub reputation_delta: f32,
    pub week: u32,
    pub season: u32,
}

pub(crate) fn feedback_for(response: ClubResponseType, player: &str, club: &str) -> String {
    match response {
        ClubResponseType::Ignored => {
            format!("{club} filed your report on {player} without comment. It doesn't address anything they are looking for.")
        }
        ClubResponseType::Interested => {
            format!("{club} want to keep tabs on {player}. Keep the reports coming.")
        }
        ClubResponseType::Trial => {
            format!("{club} have invited {player} in for a trial. The next few weeks will tell.")
        }
        ClubResponseType::DoesNotFit => {
            format!("{club} don't see {player} fitting the way they play.")
        }
        ClubResponseType::TooExpensive => {
            format!("{club} like {player}, but the price is well beyond what they have set aside.")
        }
        ClubResponseType::Signed => {
            format!("{club} have moved to sign {player} on the strength of your report.")
        }
        ClubResponseType::LoanSigned => {
            format!("{club} have agreed to bring {player} in on loan.")
        }
    }
}
