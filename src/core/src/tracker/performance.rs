use crate::club::{Player, PlayerFieldPositionGroup, PlayerPositionType, ABILITY_MAX, DEFAULT_SQUAD_ABILITY};
use crate::context::RecruitmentContext;
use crate::shared::SimRng;
use crate::tracker::{SeasonPerformance, TransferRecord};
use log::debug;

const BENCHED_MARGIN: f32 = 15.0;
const QUALITY_FACTOR_RANGE: (f32, f32) = (0.5, 1.5);
const RATING_NOISE: f32 = 8.0;

pub struct PerformanceSimulator;

impl PerformanceSimulator {
    /// Adds this season's numbers to the record. A season already on file, or a
    /// player who is no longer in the world, leaves the record as it was.
    pub fn snapshot(ctx: &RecruitmentContext<'_>, record: &TransferRecord, rng: &mut SimRng) -> TransferRecord {
        if record.has_season(ctx.season) {
            return record.clone();
        }

        let Some(player) = ctx.player(record.player_id) else {
            return record.clone();
        };

        let squad_average = player
            .club_id
            .and_then(|id| ctx.club(id))
            .or_else(|| ctx.club(record.to_club_id))
            .map(|club| club.squad_average_ability(ctx.players))
            .unwrap_or(DEFAULT_SQUAD_ABILITY);

        let performance = Self::simulate_season(player, squad_average, ctx.season, rng);

        debug!(
            "{} season {}: {} apps, {} goals, {} assists, rated {:.0}",
            player.name, ctx.season, performance.appearances, performance.goals, performance.assists, performance.average_rating
        );

        let mut next = record.clone();
        next.season_performance.push(performance);
        next
    }

    /// Rating a player of this ability earns in a squad of equals on neutral form.
    pub fn expected_rating(ability: u8) -> f32 {
        30.0 + 40.0 * ability as f32 / ABILITY_MAX as f32
    }

    pub fn simulate_season(player: &Player, squad_average: f32, season: u32, rng: &mut SimRng) -> SeasonPerformance {
        let ability = player.ability as f32;

        let (min_apps, max_apps) = Self::appearance_range(player.position.position_group());
        let mut appearances = rng.range_i32(min_apps, max_apps) as u32;
        if ability < squad_average - BENCHED_MARGIN {
            appearances /= 2;
        }

        let quality = if squad_average > 0.0 {
            (ability / squad_average).clamp(QUALITY_FACTOR_RANGE.0, QUALITY_FACTOR_RANGE.1)
        } else {
            1.0
        };

        let (goal_rate, assist_rate) = Self::output_rates(player.position);
        let goals = (appearances as f32 * goal_rate * quality).round() as u32;
        let assists = (appearances as f32 * assist_rate * quality).round() as u32;

        let standing = (0.3 * (ability - squad_average)).clamp(-15.0, 15.0);
        let rating = Self::expected_rating(player.ability) + standing + 2.0 * player.form as f32
            + rng.gaussian(0.0, RATING_NOISE);

        SeasonPerformance {
            season,
            appearances,
            goals,
            assists,
            average_rating: rating.clamp(0.0, 100.0).round(),
            ability: player.ability,
            form: player.form,
        }
    }

    fn appearance_range(group: PlayerFieldPositionGroup) -> (i32, i32) {
        match group {
            PlayerFieldPositionGroup::Goalkeeper => (30, 38),
            PlayerFieldPositionGroup::Defender => (25, 38),
            PlayerFieldPositionGroup::Midfielder => (22, 38),
            PlayerFieldPositionGroup::Forward => (20, 36),
        }
    }

    /// Goals and assists per appearance
    fn output_rates(position: PlayerPositionType) -> (f32, f32) {
        use PlayerPositionType::*;

        match position {
            Striker => (0.45, 0.12),
            ForwardCenter => (0.40, 0.15),
            WingerLeft | WingerRight => (0.25, 0.20),
            AttackingMidfielderCenter => (0.20, 0.25),
            MidfielderCenter => (0.08, 0.12),
            DefensiveMidfielder => (0.04, 0.06),
            DefenderCenter => (0.03, 0.02),
            DefenderLeft | DefenderRight => (0.02, 0.08),
            Goalkeeper => (0.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Club, ManagerPreference, ManagerProfile, ScoutingPhilosophy, TacticalIdentity};
    use crate::scout::{CareerTier, ConvictionLevel, Scout, ScoutSpecialization};

    fn player(id: u32, ability: u8, position: PlayerPositionType) -> Player {
        Player::builder()
            .id(id)
            .name(format!("Player {id}"))
            .club_id(1)
            .position(position)
            .age(25)
            .ability(ability)
            .build()
            .expect("player")
    }

    fn world(signing_ability: u8) -> (Vec<Club>, Vec<Player>, Scout) {
        let players = vec![
            player(1, signing_ability, PlayerPositionType::Striker),
            player(2, 120, PlayerPositionType::DefenderCenter),
            player(3, 120, PlayerPositionType::MidfielderCenter),
        ];
        let club = Club {
            id: 1,
            name: "Home".to_string(),
            budget: 1_000_000.0,
            reputation: 50,
            scouting_philosophy: ScoutingPhilosophy::WinNow,
            tactical_identity: TacticalIdentity::Possession,
            identity_strength: 0.5,
            manager: ManagerProfile {
                name: "Manager".to_string(),
                preferred_formation: "4-3-3".to_string(),
                preference: ManagerPreference::Balanced,
            },
            squad: vec![1, 2, 3],
        };
        let scout = Scout {
            id: 1,
            name: "S".to_string(),
            persuasion: 10,
            specialization: ScoutSpecialization::FirstTeam,
            reputation: 50.0,
            career_tier: CareerTier::ClubScout,
        };
        (vec![club], players, scout)
    }

    fn record() -> TransferRecord {
        TransferRecord {
            id: "trf-1".to_string(),
            player_id: 1,
            scout_id: 1,
            from_club_id: 9,
            to_club_id: 1,
            fee: 1_000_000.0,
            ability_at_transfer: 120,
            conviction: ConvictionLevel::StrongRecommend,
            season: 1,
            season_performance: vec![],
            outcome: None,
            narrative: None,
            accountability_applied: false,
        }
    }

    #[test]
    fn test_scenario_repeated_snapshot_is_identical() {
        let (clubs, players, scout) = world(120);
        let ctx = RecruitmentContext::new(38, 2, &clubs, &players, &scout);
        let mut rng = SimRng::seeded(12);

        let once = PerformanceSimulator::snapshot(&ctx, &record(), &mut rng);
        let twice = PerformanceSimulator::snapshot(&ctx, &once, &mut rng);

        assert_eq!(once.season_performance.len(), 1);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_missing_player_leaves_record_unchanged() {
        let (clubs, _, scout) = world(120);
        let ctx = RecruitmentContext::new(38, 2, &clubs, &[], &scout);
        let mut rng = SimRng::seeded(12);

        assert_eq!(PerformanceSimulator::snapshot(&ctx, &record(), &mut rng), record());
    }

    #[test]
    fn test_season_numbers_stay_in_range() {
        let striker = player(1, 150, PlayerPositionType::Striker);
        let mut rng = SimRng::seeded(99);

        for season in 0..50 {
            let perf = PerformanceSimulator::simulate_season(&striker, 120.0, season, &mut rng);
            assert!((20..=36).contains(&perf.appearances));
            assert!((0.0..=100.0).contains(&perf.average_rating));
            assert_eq!(perf.average_rating, perf.average_rating.round());
            assert!(perf.goals <= perf.appearances);
        }
    }

    #[test]
    fn test_fringe_player_gets_fewer_games() {
        let fringe = player(1, 60, PlayerPositionType::DefenderCenter);
        let mut rng = SimRng::seeded(3);

        for season in 0..20 {
            let perf = PerformanceSimulator::simulate_season(&fringe, 120.0, season, &mut rng);
            assert!(perf.appearances <= 19);
        }
    }
}
