use crate::board::BoardProfile;
use crate::club::{Club, Player};
use crate::scout::Scout;
use crate::shared::calendar_week;

/// Read-only snapshot of everything a pipeline step may consult.
/// Built once per tick by the caller and threaded through each call.
#[derive(Clone, Copy)]
pub struct RecruitmentContext<'a> {
    pub week: u32,
    pub season: u32,
    pub clubs: &'a [Club],
    pub players: &'a [Player],
    pub scout: &'a Scout,
    pub board: Option<&'a BoardProfile>,
}

impl<'a> RecruitmentContext<'a> {
    pub fn new(week: u32, season: u32, clubs: &'a [Club], players: &'a [Player], scout: &'a Scout) -> Self {
        RecruitmentContext {
            week,
            season,
            clubs,
            players,
            scout,
            board: None,
        }
    }

    pub fn with_board(self, board: Option<&'a BoardProfile>) -> Self {
        RecruitmentContext { board, ..self }
    }

    /// Current week on the never-resetting calendar used for deadlines
    pub fn calendar_week(&self) -> u32 {
        calendar_week(self.season, self.week)
    }

    pub fn club(&self, id: u32) -> Option<&'a Club> {
        self.clubs.iter().find(|c| c.id == id)
    }

    pub fn player(&self, id: u32) -> Option<&'a Player> {
        self.players.iter().find(|p| p.id == id)
    }
}
