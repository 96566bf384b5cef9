use crate::board::BoardProfile;
use crate::club::{Club, Player};
use crate::context::RecruitmentContext;
use crate::directives::Directive;
use crate::response::ClubResponse;
use crate::scout::{ConvictionLevel, Scout, ScoutReport};
use crate::shared::calendar_week;
use crate::tracker::TransferRecord;
use crate::transfers::{TransferNegotiation, TransferOffer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use crate::shared::SEASON_WEEKS;

/// Relationship score assumed for a player nobody has told us about.
pub const DEFAULT_RELATIONSHIP: f32 = 0.5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSubmission {
    pub club_id: u32,
    pub report: ScoutReport,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferSubmission {
    pub negotiation_id: String,
    pub offer: TransferOffer,
}

/// Everything the scout did this week.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeekActions {
    pub observations_made: u32,
    pub reports: Vec<ReportSubmission>,
    pub offers: Vec<OfferSubmission>,
    pub walk_aways: Vec<String>,
    /// Player id to relationship score, 0-1
    pub relationships: BTreeMap<u32, f32>,
    pub request_board_meeting: bool,
}

impl WeekActions {
    pub fn relationship_with(&self, player_id: u32) -> f32 {
        self.relationships
            .get(&player_id)
            .copied()
            .unwrap_or(DEFAULT_RELATIONSHIP)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingTrial {
    pub response: ClubResponse,
    pub conviction: ConvictionLevel,
}

/// Ties a negotiation back to the report that started it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SponsoredDeal {
    pub negotiation_id: String,
    pub report_id: String,
    pub conviction: ConvictionLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerState {
    pub week: u32,
    pub season: u32,

    pub clubs: Vec<Club>,
    pub players: Vec<Player>,
    pub scout: Scout,
    pub employer_id: Option<u32>,
    pub board: Option<BoardProfile>,

    pub directives: Vec<Directive>,
    /// Season the current directive set was issued for
    pub directives_season: Option<u32>,
    pub responses: Vec<ClubResponse>,
    pub pending_trials: Vec<PendingTrial>,

    pub negotiations: Vec<TransferNegotiation>,
    pub closed_negotiations: Vec<TransferNegotiation>,
    pub sponsored: Vec<SponsoredDeal>,

    pub records: Vec<TransferRecord>,

    pub last_week_reports: u32,
    pub last_week_observations: u32,

    /// Verdicts from the latest season review, judged by the board in the season they are announced
    pub season_hits: u32,
    pub season_flops: u32,
}

impl CareerState {
    pub fn new(
        clubs: Vec<Club>,
        players: Vec<Player>,
        scout: Scout,
        employer_id: Option<u32>,
        board: Option<BoardProfile>,
        season: u32,
    ) -> Self {
        CareerState {
            week: 1,
            season,
            clubs,
            players,
            scout,
            employer_id,
            board,
            directives: Vec::new(),
            directives_season: None,
            responses: Vec::new(),
            pending_trials: Vec::new(),
            negotiations: Vec::new(),
            closed_negotiations: Vec::new(),
            sponsored: Vec::new(),
            records: Vec::new(),
            last_week_reports: 0,
            last_week_observations: 0,
            season_hits: 0,
            season_flops: 0,
        }
    }

    pub fn context(&self) -> RecruitmentContext<'_> {
        RecruitmentContext::new(self.week, self.season, &self.clubs, &self.players, &self.scout)
            .with_board(self.board.as_ref())
    }

    pub fn calendar_week(&self) -> u32 {
        calendar_week(self.season, self.week)
    }

    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn directives_for(&self, club_id: u32) -> Vec<Directive> {
        self.directives
            .iter()
            .filter(|d| d.club_id == club_id && d.season == self.season)
            .cloned()
            .collect()
    }

    pub fn employer_open_directives(&self) -> u32 {
        self.employer_id.map_or(0, |employer| {
            self.directives
                .iter()
                .filter(|d| d.club_id == employer && d.season == self.season && d.is_active())
                .count() as u32
        })
    }
}
