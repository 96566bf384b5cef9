/// Weeks in one season. Week 1 follows the last week of the previous season.
pub const SEASON_WEEKS: u32 = 38;

/// Weeks elapsed since the first week of season 1, counting that week as 1.
/// Deadlines are stored on this scale so they survive the season rollover.
pub fn calendar_week(season: u32, week: u32) -> u32 {
    season.saturating_sub(1) * SEASON_WEEKS + week
}

/// Inverse of [`calendar_week`]: `(season, week)`.
pub fn season_and_week(calendar_week: u32) -> (u32, u32) {
    let elapsed = calendar_week.saturating_sub(1);
    (elapsed / SEASON_WEEKS + 1, elapsed % SEASON_WEEKS + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_season_keeps_its_week_numbers() {
        assert_eq!(calendar_week(1, 1), 1);
        assert_eq!(calendar_week(1, SEASON_WEEKS), SEASON_WEEKS);
    }

    #[test]
    fn test_rollover_continues_counting() {
        assert_eq!(calendar_week(2, 1), SEASON_WEEKS + 1);
        assert!(calendar_week(2, 2) > calendar_week(1, 36));
        assert_eq!(calendar_week(3, 4), 2 * SEASON_WEEKS + 4);
        assert_eq!(season_and_week(calendar_week(2, 4)), (2, 4));
        assert_eq!(season_and_week(SEASON_WEEKS), (1, SEASON_WEEKS));
    }
}
