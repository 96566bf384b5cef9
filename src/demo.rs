use crate::config::SimulationConfig;
use color_eyre::eyre::{eyre, Result};
use scout_core::board::BoardProfile;
use scout_core::club::{
    Club, ManagerPreference, ManagerProfile, Player, PlayerPositionType, PlayerSkills, PlayerTrait,
    ScoutingPhilosophy, Skill, TacticalIdentity,
};
use scout_core::directives::Directive;
use scout_core::pipeline::{CareerState, OfferSubmission, ReportSubmission, WeekActions};
use scout_core::scout::{ConvictionLevel, Scout, ScoutReport, ScoutSpecialization};
use scout_core::shared::{round_to_half, SimRng};
use scout_core::transfers::{AddOnKind, TransferOffer};
use std::collections::BTreeMap;

const CLUB_NAMES: [&str; 16] = [
    "Northbridge Athletic",
    "Port Ellis",
    "Redmoor Town",
    "Castleford Rovers",
    "Ashgrove United",
    "Saltmarsh City",
    "Kingsway Albion",
    "Westhollow",
    "Blackwater Wanderers",
    "Elmstead Villa",
    "Harrowgate",
    "Stonebridge County",
    "Fairhaven",
    "Millbrook Orient",
    "Lakeside Borough",
    "Oakham Forest",
];

const FIRST_NAMES: [&str; 16] = [
    "Jonas", "Mateo", "Kwame", "Luca", "Tomas", "Ryan", "Idris", "Niko", "Sami", "Owen", "Rafael", "Emil",
    "Daniel", "Yusuf", "Leon", "Marco",
];

const LAST_NAMES: [&str; 16] = [
    "Hale", "Okafor", "Berg", "Costa", "Novak", "Reid", "Santos", "Kowalski", "Mensah", "Larsen", "Duarte",
    "Fischer", "Quinn", "Adeyemi", "Moreau", "Varga",
];

const FORMATIONS: [&str; 6] = ["4-3-3", "4-4-2", "4-2-3-1", "3-5-2", "5-3-2", "4-1-4-1"];

const SQUAD_TEMPLATE: [PlayerPositionType; 18] = [
    PlayerPositionType::Goalkeeper,
    PlayerPositionType::Goalkeeper,
    PlayerPositionType::DefenderCenter,
    PlayerPositionType::DefenderCenter,
    PlayerPositionType::DefenderCenter,
    PlayerPositionType::DefenderLeft,
    PlayerPositionType::DefenderRight,
    PlayerPositionType::DefensiveMidfielder,
    PlayerPositionType::MidfielderCenter,
    PlayerPositionType::MidfielderCenter,
    PlayerPositionType::AttackingMidfielderCenter,
    PlayerPositionType::WingerLeft,
    PlayerPositionType::WingerRight,
    PlayerPositionType::Striker,
    PlayerPositionType::Striker,
    PlayerPositionType::ForwardCenter,
    PlayerPositionType::MidfielderCenter,
    PlayerPositionType::DefenderCenter,
];

const PHILOSOPHIES: [ScoutingPhilosophy; 4] = [
    ScoutingPhilosophy::YouthDevelopment,
    ScoutingPhilosophy::WinNow,
    ScoutingPhilosophy::MarketSmart,
    ScoutingPhilosophy::GlobalRecruiter,
];

const IDENTITIES: [TacticalIdentity; 6] = [
    TacticalIdentity::Possession,
    TacticalIdentity::CounterAttack,
    TacticalIdentity::HighPress,
    TacticalIdentity::DirectPlay,
    TacticalIdentity::WingPlay,
    TacticalIdentity::DefensiveBlock,
];

const PREFERENCES: [ManagerPreference; 3] = [
    ManagerPreference::DataDriven,
    ManagerPreference::EyeTest,
    ManagerPreference::Balanced,
];

const TRAITS: [PlayerTrait; 10] = [
    PlayerTrait::LeadsThePress,
    PlayerTrait::DwellsOnBall,
    PlayerTrait::TriesKillerBalls,
    PlayerTrait::RunsInBehind,
    PlayerTrait::StaysBack,
    PlayerTrait::GetsForward,
    PlayerTrait::PlaysShortPasses,
    PlayerTrait::HitsLongBalls,
    PlayerTrait::DivesIntoTackles,
    PlayerTrait::CutsInside,
];

// ─── World ──────────────────────────────────────────────────────────

/// Builds a small league to run the recruitment pipeline against.
pub struct WorldGenerator<'c> {
    config: &'c SimulationConfig,
    next_player_id: u32,
}

impl<'c> WorldGenerator<'c> {
    pub fn new(config: &'c SimulationConfig) -> Self {
        WorldGenerator {
            config,
            next_player_id: 1,
        }
    }

    pub fn generate(mut self, rng: &mut SimRng) -> Result<CareerState> {
        let mut clubs = Vec::with_capacity(self.config.clubs as usize);
        let mut players = Vec::new();

        for index in 0..self.config.clubs {
            let mut club = Self::generate_club(index + 1, rng);

            for slot in 0..self.config.squad_size as usize {
                // leave holes so directive generation has gaps to find
                if !rng.chance(0.85) {
                    continue;
                }
                let position = SQUAD_TEMPLATE[slot % SQUAD_TEMPLATE.len()];
                let player = self.generate_player(club.id, club.reputation, position, rng)?;
                club.squad.push(player.id);
                players.push(player);
            }

            clubs.push(club);
        }

        let scout = Scout {
            id: 1,
            name: self.config.scout_name.clone(),
            persuasion: rng.range_i32(8, 16) as u8,
            specialization: ScoutSpecialization::FirstTeam,
            reputation: 40.0,
            career_tier: self.config.starting_tier,
        };

        let employer = clubs.first().map(|c| c.id);
        let board = if scout.career_tier.is_top() {
            Some(BoardProfile::new(self.config.board_personality()?, 1))
        } else {
            None
        };

        Ok(CareerState::new(clubs, players, scout, employer, board, 1))
    }

    fn generate_club(id: u32, rng: &mut SimRng) -> Club {
        let reputation = rng.range_i32(25, 90) as u8;
        let name = CLUB_NAMES[(id as usize - 1) % CLUB_NAMES.len()];

        Club {
            id,
            name: name.to_string(),
            budget: ((500_000.0 + (reputation as f64).powi(2) * 2_500.0) / 1_000.0).round() * 1_000.0,
            reputation,
            scouting_philosophy: rng.pick(&PHILOSOPHIES).copied().unwrap_or(ScoutingPhilosophy::MarketSmart),
            tactical_identity: rng.pick(&IDENTITIES).copied().unwrap_or(TacticalIdentity::Possession),
            identity_strength: rng.range_f32(0.2, 1.0),
            manager: ManagerProfile {
                name: Self::person_name(rng),
                preferred_formation: rng.pick(&FORMATIONS).copied().unwrap_or("4-4-2").to_string(),
                preference: rng.pick(&PREFERENCES).copied().unwrap_or(ManagerPreference::Balanced),
            },
            squad: Vec::new(),
        }
    }

    fn generate_player(
        &mut self,
        club_id: u32,
        reputation: u8,
        position: PlayerPositionType,
        rng: &mut SimRng,
    ) -> Result<Player> {
        let id = self.next_player_id;
        self.next_player_id += 1;

        let ability = rng.gaussian(40.0 + reputation as f32 * 1.2, 18.0).clamp(20.0, 190.0) as u8;
        let age = rng.range_i32(17, 34) as u8;
        let headroom = (30 - (age as i32 - 17) * 2).max(0);
        let potential = (ability as i32 + rng.range_i32(0, headroom)).min(200) as u8;

        let mut traits = Vec::new();
        for _ in 0..rng.range_i32(0, 2) {
            if let Some(t) = rng.pick(&TRAITS) {
                if !traits.contains(t) {
                    traits.push(*t);
                }
            }
        }

        Player::builder()
            .id(id)
            .name(Self::person_name(rng))
            .club_id(club_id)
            .position(position)
            .secondary_positions(Self::secondary_positions(position, rng))
            .age(age)
            .ability(ability)
            .potential(potential)
            .form(rng.range_i32(-2, 2) as i8)
            .skills(Self::generate_skills(ability, rng))
            .traits(traits)
            .market_value(Self::market_value(ability, age))
            .build()
            .map_err(|e| eyre!("generated player {id} is invalid: {e}"))
    }

    fn generate_skills(ability: u8, rng: &mut SimRng) -> PlayerSkills {
        let base = ability as f32 / 10.0;
        Skill::ALL
            .iter()
            .fold(PlayerSkills::uniform(base), |skills, skill| {
                skills.with(*skill, (base + rng.jitter(3.0)).round())
            })
    }

    fn secondary_positions(position: PlayerPositionType, rng: &mut SimRng) -> Vec<PlayerPositionType> {
        if !rng.chance(0.3) {
            return Vec::new();
        }
        rng.pick(position.adjacent()).copied().into_iter().collect()
    }

    fn market_value(ability: u8, age: u8) -> f64 {
        let base = (ability as f64 / 10.0).powi(3) * 1_000.0;
        let age_factor = match age {
            0..=23 => 1.2,
            24..=30 => 1.0,
            _ => 0.6,
        };
        ((base * age_factor) / 1_000.0).round() * 1_000.0
    }

    fn person_name(rng: &mut SimRng) -> String {
        let first = rng.pick(&FIRST_NAMES).copied().unwrap_or("Sam");
        let last = rng.pick(&LAST_NAMES).copied().unwrap_or("Smith");
        format!("{first} {last}")
    }
}

// ─── Autopilot ──────────────────────────────────────────────────────

/// Stands in for the human player: writes reports against open directives,
/// bids in running negotiations and occasionally asks the board for a meeting.
pub struct AutoScout {
    reports_per_week: u32,
}

impl AutoScout {
    pub fn new(reports_per_week: u32) -> Self {
        AutoScout { reports_per_week }
    }

    pub fn plan_week(&self, state: &CareerState, rng: &mut SimRng) -> WeekActions {
        let mut actions = WeekActions {
            observations_made: rng.range_i32(1, 4) as u32,
            ..WeekActions::default()
        };

        for _ in 0..self.reports_per_week {
            if let Some(submission) = Self::write_report(state, rng) {
                actions.reports.push(submission);
            }
        }

        for negotiation in &state.negotiations {
            if negotiation.rounds.len() >= 2 && negotiation.current_asking_price > negotiation.market_value * 2.0 {
                actions.walk_aways.push(negotiation.id.clone());
                continue;
            }

            let mut offer = TransferOffer::new((negotiation.current_asking_price * rng.range_f32(0.8, 1.0) as f64).round());
            if rng.chance(0.3) {
                offer = offer.with_add_on(AddOnKind::Appearance, (negotiation.market_value * 0.1).round());
            }

            actions.offers.push(OfferSubmission {
                negotiation_id: negotiation.id.clone(),
                offer,
            });
            actions.relationships.insert(negotiation.player_id, rng.range_f32(0.2, 0.9));
        }

        actions.request_board_meeting = state.board.as_ref().is_some_and(|board| {
            board.satisfaction < board.temperament().thresholds.warning
        }) && rng.chance(0.25);

        actions
    }

    fn write_report(state: &CareerState, rng: &mut SimRng) -> Option<ReportSubmission> {
        let club_id = match state.employer_id {
            Some(id) => id,
            None => rng.pick(&state.clubs)?.id,
        };

        let open: Vec<&Directive> = state
            .directives
            .iter()
            .filter(|d| d.club_id == club_id && d.season == state.season && d.is_active())
            .collect();
        let directive = *rng.pick(&open)?;

        let candidates: Vec<&Player> = state
            .players
            .iter()
            .filter(|p| p.club_id != Some(club_id) && p.plays(directive.position))
            .collect();
        let player = *rng.pick(&candidates)?;

        let perceived_stars = round_to_half(player.ability_stars() + rng.jitter(0.5)).clamp(0.5, 5.0);

        let attribute_assessments: BTreeMap<Skill, f32> = directive
            .key_attributes
            .iter()
            .map(|skill| (*skill, (player.skills.get(*skill) + rng.jitter(2.0)).round().clamp(1.0, 20.0)))
            .collect();

        let margin = perceived_stars - directive.min_ability_stars;
        let conviction = match margin {
            m if m >= 1.0 => ConvictionLevel::TablePound,
            m if m >= 0.5 => ConvictionLevel::StrongRecommend,
            m if m >= 0.0 => ConvictionLevel::Recommend,
            _ => ConvictionLevel::Note,
        };

        Some(ReportSubmission {
            club_id,
            report: ScoutReport {
                id: rng.next_id("rep"),
                scout_id: state.scout.id,
                player_id: player.id,
                conviction,
                perceived_stars,
                quality_score: rng.range_f32(40.0, 95.0).round(),
                attribute_assessments,
                week: state.week,
                season: state.season,
            },
        })
    }
}
