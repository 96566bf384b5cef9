use crate::board::BoardProfile;
use crate::scout::CareerTier;
use log::debug;

const EXTENSION_WEEKS: u32 = 2;
/// Latest an ultimatum deadline may be pushed, relative to the week it was issued
const MAX_DEADLINE_OFFSET: u32 = 12;

/// Requested board meeting in calendar week `now`. Only the head of recruitment
/// gets a seat at the table; below the top tier there is no meeting and no result.
pub fn hold_board_meeting(board: &BoardProfile, tier: CareerTier, now: u32) -> Option<BoardProfile> {
    if !tier.is_top() {
        return None;
    }

    let temperament = board.temperament();
    let mut profile = board.clone();

    profile.satisfaction += temperament.meeting_satisfaction;
    profile.patience += temperament.meeting_patience;

    if profile.ultimatum_issued {
        if let Some(deadline) = profile.ultimatum_deadline {
            let issued = profile.ultimatum_issued_week.unwrap_or(now);
            let extended = (deadline + EXTENSION_WEEKS).min(issued + MAX_DEADLINE_OFFSET);
            profile.ultimatum_deadline = Some(extended.max(deadline));
        }
    }

    debug!(
        "board meeting in calendar week {}: satisfaction {:.1} -> {:.1}",
        now, board.satisfaction, profile.satisfaction
    );

    Some(profile.normalized())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardPersonality;
    use crate::shared::calendar_week;

    #[test]
    fn test_meeting_requires_top_tier() {
        let board = BoardProfile::new(BoardPersonality::Patient, 1);
        assert!(hold_board_meeting(&board, CareerTier::ChiefScout, 5).is_none());
        assert!(hold_board_meeting(&board, CareerTier::HeadOfRecruitment, 5).is_some());
    }

    #[test]
    fn test_meeting_boosts_and_extends_up_to_cap() {
        let mut board = BoardProfile::new(BoardPersonality::Patient, 1);
        board.satisfaction = 30.0;
        board.patience = 30.0;
        board.ultimatum_issued = true;
        board.ultimatum_issued_week = Some(10);
        board.ultimatum_deadline = Some(18);

        let after = hold_board_meeting(&board, CareerTier::HeadOfRecruitment, 12).expect("meeting");
        assert_eq!(after.satisfaction, 36.0);
        assert_eq!(after.patience, 38.0);
        assert_eq!(after.ultimatum_deadline, Some(20));

        let again = hold_board_meeting(&after, CareerTier::HeadOfRecruitment, 13).expect("meeting");
        assert_eq!(again.ultimatum_deadline, Some(22));

        let capped = hold_board_meeting(&again, CareerTier::HeadOfRecruitment, 14).expect("meeting");
        assert_eq!(capped.ultimatum_deadline, Some(22));
    }

    #[test]
    fn test_extension_counts_across_season_rollover() {
        let mut board = BoardProfile::new(BoardPersonality::Patient, 1);
        board.ultimatum_issued = true;
        board.ultimatum_issued_week = Some(calendar_week(1, 34));
        board.ultimatum_deadline = Some(calendar_week(2, 4));

        let after = hold_board_meeting(&board, CareerTier::HeadOfRecruitment, calendar_week(2, 2)).expect("meeting");
        assert_eq!(after.ultimatum_deadline, Some(calendar_week(2, 6)));
        assert!(after.ultimatum_deadline > Some(calendar_week(1, 38)));
    }
}
