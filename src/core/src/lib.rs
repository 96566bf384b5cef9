pub mod board;
pub mod club;
pub mod context;
pub mod directives;
pub mod fit;
pub mod matching;
pub mod notifications;
pub mod pipeline;
pub mod response;
pub mod scout;
pub mod tracker;
pub mod transfers;

pub mod shared;

pub use context::*;

pub use club::{
    Club, ManagerPreference, ManagerProfile, Player, PlayerBuilder, PlayerFieldPositionGroup,
    PlayerPositionType, PlayerRole, PlayerSkills, PlayerTrait, ScoutingPhilosophy, Skill,
    TacticalIdentity,
};
pub use pipeline::{CareerState, WeekActions, WeekOutcome, WeeklyProcessor};
pub use shared::SimRng;
