use crate::scout::ConvictionLevel;
use crate::tracker::{OutcomeNarrative, PerformanceSimulator, TransferOutcome, TransferRecord};
use log::info;

pub const MIN_SEASONS_FOR_VERDICT: usize = 2;
const HIT_RATING: f32 = 70.0;
const FLOP_RATING: f32 = 40.0;
/// Rise from first to last season that reads as a player growing into the move
const LATE_BLOOM_RISE: f32 = 10.0;
/// Margins over and under the rating the fee's ability implied
const EXCEEDED_MARGIN: f32 = 25.0;
const OVERRATED_MARGIN: f32 = 15.0;
const INJURY_APPEARANCES: f32 = 12.0;

pub struct OutcomeClassifier;

impl OutcomeClassifier {
    /// Settles the verdict once two seasons are on file. A verdict already
    /// reached is kept as is.
    pub fn classify(record: &TransferRecord) -> TransferRecord {
        if record.is_settled() {
            return record.clone();
        }

        let mut next = record.clone();

        let average = match record.average_rating() {
            Some(avg) if record.season_performance.len() >= MIN_SEASONS_FOR_VERDICT => avg,
            _ => {
                next.outcome = Some(TransferOutcome::TooEarly);
                return next;
            }
        };

        let outcome = if average >= HIT_RATING {
            TransferOutcome::Hit
        } else if average < FLOP_RATING {
            TransferOutcome::Flop
        } else {
            TransferOutcome::Decent
        };

        next.outcome = Some(outcome);
        next.narrative = Self::narrative(record, outcome);

        info!(
            "transfer {} judged a {} (average rating {:.1})",
            record.id,
            outcome.label(),
            average
        );

        next
    }

    /// Flavour for the notification; the verdict itself only looks at ratings.
    pub fn narrative(record: &TransferRecord, outcome: TransferOutcome) -> Option<OutcomeNarrative> {
        let first = record.season_performance.first()?;
        let last = record.season_performance.last()?;
        let average = record.average_rating()?;
        let seasons = record.season_performance.len() as f32;
        let avg_apps = record.season_performance.iter().map(|p| p.appearances as f32).sum::<f32>() / seasons;

        let trend = last.average_rating - first.average_rating;
        let versus_expected = average - PerformanceSimulator::expected_rating(record.ability_at_transfer);

        let narrative = match outcome {
            TransferOutcome::Hit if trend >= LATE_BLOOM_RISE => OutcomeNarrative::LateBloom,
            TransferOutcome::Hit if versus_expected >= EXCEEDED_MARGIN => OutcomeNarrative::ExceededExpectations,
            TransferOutcome::Hit => OutcomeNarrative::PerfectFit,
            TransferOutcome::Decent => OutcomeNarrative::SlowAdaptation,
            TransferOutcome::Flop if avg_apps < INJURY_APPEARANCES => OutcomeNarrative::Injury,
            TransferOutcome::Flop if versus_expected <= -OVERRATED_MARGIN => OutcomeNarrative::Overrated,
            TransferOutcome::Flop if last.form <= -3 => OutcomeNarrative::CharacterIssues,
            TransferOutcome::Flop => OutcomeNarrative::TacticalMismatch,
            TransferOutcome::TooEarly => return None,
        };

        Some(narrative)
    }
}

pub struct Accountability;

impl Accountability {
    /// Reputation change owed to the scout for a settled transfer.
    pub fn delta(conviction: ConvictionLevel, outcome: TransferOutcome) -> f32 {
        use ConvictionLevel::*;
        use TransferOutcome::*;

        match (conviction, outcome) {
            (_, TooEarly) | (Note, _) => 0.0,
            (Recommend, Hit) => 3.0,
            (Recommend, Decent) => 1.0,
            (Recommend, Flop) => -2.0,
            (StrongRecommend, Hit) => 6.0,
            (StrongRecommend, Decent) => 1.0,
            (StrongRecommend, Flop) => -5.0,
            (TablePound, Hit) => 10.0,
            (TablePound, Decent) => 2.0,
            (TablePound, Flop) => -10.0,
        }
    }

    /// Settles the scout's account for this transfer exactly once. `None` while
    /// there's no verdict yet or after it has already been applied.
    pub fn apply(record: &TransferRecord) -> Option<(TransferRecord, f32)> {
        if record.accountability_applied {
            return None;
        }

        let outcome = record.outcome.filter(|o| o.is_final())?;
        let delta = Self::delta(record.conviction, outcome);

        let mut next = record.clone();
        next.accountability_applied = true;

        Some((next, delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::SeasonPerformance;

    fn season(season: u32, rating: f32, apps: u32, ability: u8, form: i8) -> SeasonPerformance {
        SeasonPerformance {
            season,
            appearances: apps,
            goals: 0,
            assists: 0,
            average_rating: rating,
            ability,
            form,
        }
    }

    fn record(conviction: ConvictionLevel, seasons: Vec<SeasonPerformance>) -> TransferRecord {
        TransferRecord {
            id: "trf-1".to_string(),
            player_id: 1,
            scout_id: 1,
            from_club_id: 2,
            to_club_id: 3,
            fee: 500_000.0,
            ability_at_transfer: 100,
            conviction,
            season: 1,
            season_performance: seasons,
            outcome: None,
            narrative: None,
            accountability_applied: false,
        }
    }

    #[test]
    fn test_one_season_is_too_early() {
        let r = OutcomeClassifier::classify(&record(ConvictionLevel::Recommend, vec![season(1, 90.0, 30, 100, 0)]));
        assert_eq!(r.outcome, Some(TransferOutcome::TooEarly));
        assert!(r.narrative.is_none());
    }

    #[test]
    fn test_rating_thresholds() {
        let hit = OutcomeClassifier::classify(&record(
            ConvictionLevel::Recommend,
            vec![season(1, 72.0, 30, 100, 0), season(2, 68.0, 30, 100, 0)],
        ));
        assert_eq!(hit.outcome, Some(TransferOutcome::Hit));
        assert_eq!(hit.narrative, Some(OutcomeNarrative::PerfectFit));

        let flop = OutcomeClassifier::classify(&record(
            ConvictionLevel::Recommend,
            vec![season(1, 35.0, 8, 100, 0), season(2, 40.0, 10, 100, 0)],
        ));
        assert_eq!(flop.outcome, Some(TransferOutcome::Flop));
        assert_eq!(flop.narrative, Some(OutcomeNarrative::Injury));

        let decent = OutcomeClassifier::classify(&record(
            ConvictionLevel::Recommend,
            vec![season(1, 40.0, 30, 100, 0), season(2, 60.0, 30, 100, 0)],
        ));
        assert_eq!(decent.outcome, Some(TransferOutcome::Decent));
    }

    #[test]
    fn test_every_narrative_follows_from_ratings_alone() {
        // ability never changes after the move, so only ratings, minutes and form drive the story
        let cases = [
            (vec![season(1, 72.0, 30, 100, 0), season(2, 68.0, 30, 100, 0)], OutcomeNarrative::PerfectFit),
            (vec![season(1, 80.0, 30, 100, 0), season(2, 80.0, 30, 100, 0)], OutcomeNarrative::ExceededExpectations),
            (vec![season(1, 60.0, 30, 100, 0), season(2, 82.0, 30, 100, 0)], OutcomeNarrative::LateBloom),
            (vec![season(1, 50.0, 30, 100, 0), season(2, 56.0, 30, 100, 0)], OutcomeNarrative::SlowAdaptation),
            (vec![season(1, 36.0, 8, 100, 0), season(2, 36.0, 10, 100, 0)], OutcomeNarrative::Injury),
            (vec![season(1, 30.0, 30, 100, 0), season(2, 30.0, 30, 100, 0)], OutcomeNarrative::Overrated),
            (vec![season(1, 38.0, 30, 100, 0), season(2, 38.0, 30, 100, -4)], OutcomeNarrative::CharacterIssues),
            (vec![season(1, 38.0, 30, 100, 0), season(2, 38.0, 30, 100, 0)], OutcomeNarrative::TacticalMismatch),
        ];

        for (seasons, expected) in cases {
            let judged = OutcomeClassifier::classify(&record(ConvictionLevel::Recommend, seasons));
            assert_eq!(judged.narrative, Some(expected));
        }
    }

    #[test]
    fn test_verdict_is_permanent() {
        let flop = OutcomeClassifier::classify(&record(
            ConvictionLevel::Recommend,
            vec![season(1, 30.0, 30, 90, 0), season(2, 30.0, 30, 90, 0)],
        ));
        assert_eq!(flop.narrative, Some(OutcomeNarrative::Overrated));

        let mut later = flop.clone();
        later.season_performance.push(season(3, 99.0, 38, 140, 5));
        later.season_performance.push(season(4, 99.0, 38, 140, 5));

        assert_eq!(OutcomeClassifier::classify(&later).outcome, Some(TransferOutcome::Flop));
    }

    #[test]
    fn test_accountability_table() {
        assert_eq!(Accountability::delta(ConvictionLevel::TablePound, TransferOutcome::Hit), 10.0);
        assert_eq!(Accountability::delta(ConvictionLevel::TablePound, TransferOutcome::Flop), -10.0);
        assert_eq!(Accountability::delta(ConvictionLevel::StrongRecommend, TransferOutcome::Flop), -5.0);
        assert_eq!(Accountability::delta(ConvictionLevel::Note, TransferOutcome::Flop), 0.0);
        assert_eq!(Accountability::delta(ConvictionLevel::Recommend, TransferOutcome::TooEarly), 0.0);
    }

    #[test]
    fn test_accountability_applies_once() {
        let settled = OutcomeClassifier::classify(&record(
            ConvictionLevel::TablePound,
            vec![season(1, 80.0, 30, 100, 0), season(2, 80.0, 30, 100, 0)],
        ));

        let (applied, delta) = Accountability::apply(&settled).expect("verdict");
        assert_eq!(delta, 10.0);
        assert!(applied.accountability_applied);
        assert!(Accountability::apply(&applied).is_none());
    }

    #[test]
    fn test_no_accountability_before_verdict() {
        let early = OutcomeClassifier::classify(&record(ConvictionLevel::TablePound, vec![]));
        assert!(Accountability::apply(&early).is_none());
    }
}
