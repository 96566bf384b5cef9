use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerPositionType {
    Goalkeeper,
    DefenderCenter,
    DefenderLeft,
    DefenderRight,
    DefensiveMidfielder,
    MidfielderCenter,
    AttackingMidfielderCenter,
    WingerLeft,
    WingerRight,
    Striker,
    ForwardCenter,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerFieldPositionGroup {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerPositionType {
    /// The ten outfield categories a squad is evaluated against.
    pub const OUTFIELD: [PlayerPositionType; 10] = [
        PlayerPositionType::DefenderCenter,
        PlayerPositionType::DefenderLeft,
        PlayerPositionType::DefenderRight,
        PlayerPositionType::DefensiveMidfielder,
        PlayerPositionType::MidfielderCenter,
        PlayerPositionType::AttackingMidfielderCenter,
        PlayerPositionType::WingerLeft,
        PlayerPositionType::WingerRight,
        PlayerPositionType::Striker,
        PlayerPositionType::ForwardCenter,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PlayerPositionType::Goalkeeper => "GK",
            PlayerPositionType::DefenderCenter => "CB",
            PlayerPositionType::DefenderLeft => "LB",
            PlayerPositionType::DefenderRight => "RB",
            PlayerPositionType::DefensiveMidfielder => "CDM",
            PlayerPositionType::MidfielderCenter => "CM",
            PlayerPositionType::AttackingMidfielderCenter => "CAM",
            PlayerPositionType::WingerLeft => "LW",
            PlayerPositionType::WingerRight => "RW",
            PlayerPositionType::Striker => "ST",
            PlayerPositionType::ForwardCenter => "CF",
        }
    }

    pub fn position_group(&self) -> PlayerFieldPositionGroup {
        match self {
            PlayerPositionType::Goalkeeper => PlayerFieldPositionGroup::Goalkeeper,
            PlayerPositionType::DefenderCenter
            | PlayerPositionType::DefenderLeft
            | PlayerPositionType::DefenderRight => PlayerFieldPositionGroup::Defender,
            PlayerPositionType::DefensiveMidfielder
            | PlayerPositionType::MidfielderCenter
            | PlayerPositionType::AttackingMidfielderCenter => PlayerFieldPositionGroup::Midfielder,
            PlayerPositionType::WingerLeft
            | PlayerPositionType::WingerRight
            | PlayerPositionType::Striker
            | PlayerPositionType::ForwardCenter => PlayerFieldPositionGroup::Forward,
        }
    }

    pub fn is_defender(&self) -> bool {
        self.position_group() == PlayerFieldPositionGroup::Defender
    }

    pub fn is_midfielder(&self) -> bool {
        self.position_group() == PlayerFieldPositionGroup::Midfielder
    }

    pub fn is_forward(&self) -> bool {
        self.position_group() == PlayerFieldPositionGroup::Forward
    }

    /// Neighbouring positions a player can cover with little retraining.
    pub fn adjacent(&self) -> &'static [PlayerPositionType] {
        use PlayerPositionType::*;

        match self {
            Goalkeeper => &[],
            DefenderCenter => &[DefensiveMidfielder, DefenderLeft, DefenderRight],
            DefenderLeft => &[DefenderCenter, WingerLeft],
            DefenderRight => &[DefenderCenter, WingerRight],
            DefensiveMidfielder => &[DefenderCenter, MidfielderCenter],
            MidfielderCenter => &[DefensiveMidfielder, AttackingMidfielderCenter],
            AttackingMidfielderCenter => &[MidfielderCenter, ForwardCenter, WingerLeft, WingerRight],
            WingerLeft => &[DefenderLeft, WingerRight, AttackingMidfielderCenter],
            WingerRight => &[DefenderRight, WingerLeft, AttackingMidfielderCenter],
            Striker => &[ForwardCenter],
            ForwardCenter => &[Striker, AttackingMidfielderCenter],
        }
    }

    pub fn is_adjacent_to(&self, other: PlayerPositionType) -> bool {
        self.adjacent().contains(&other)
    }
}
