use crate::club::{PlayerFieldPositionGroup, PlayerPositionType};

/// A parsed formation string such as "4-3-3" or "4-2-3-1".
#[derive(Debug, Clone, PartialEq)]
pub struct Formation {
    pub defenders: u8,
    pub midfielders: u8,
    pub forwards: u8,
    pub slots: Vec<PlayerPositionType>,
}

impl Formation {
    /// `None` for anything that is not 3-5 lines of outfielders adding up to ten.
    pub fn parse(description: &str) -> Option<Formation> {
        let lines: Vec<u8> = description
            .trim()
            .split('-')
            .map(|part| part.trim().parse::<u8>().ok())
            .collect::<Option<Vec<u8>>>()?;

        if lines.len() < 3 || lines.len() > 5 {
            return None;
        }
        if lines.iter().any(|n| *n == 0 || *n > 6) {
            return None;
        }
        if lines.iter().map(|n| *n as u32).sum::<u32>() != 10 {
            return None;
        }

        let defenders = lines[0];
        let forwards = lines[lines.len() - 1];
        let midfield_lines = &lines[1..lines.len() - 1];
        let midfielders: u8 = midfield_lines.iter().sum();

        let mut slots = Self::defensive_slots(defenders);
        slots.extend(Self::midfield_slots(midfield_lines));
        slots.extend(Self::forward_slots(forwards));

        Some(Formation {
            defenders,
            midfielders,
            forwards,
            slots,
        })
    }

    pub fn count_for(&self, group: PlayerFieldPositionGroup) -> u8 {
        match group {
            PlayerFieldPositionGroup::Goalkeeper => 1,
            PlayerFieldPositionGroup::Defender => self.defenders,
            PlayerFieldPositionGroup::Midfielder => self.midfielders,
            PlayerFieldPositionGroup::Forward => self.forwards,
        }
    }

    pub fn uses(&self, position: PlayerPositionType) -> bool {
        position == PlayerPositionType::Goalkeeper || self.slots.contains(&position)
    }

    fn defensive_slots(count: u8) -> Vec<PlayerPositionType> {
        use PlayerPositionType::*;

        match count {
            4 => vec![DefenderLeft, DefenderCenter, DefenderCenter, DefenderRight],
            5 => vec![DefenderLeft, DefenderCenter, DefenderCenter, DefenderCenter, DefenderRight],
            n => vec![DefenderCenter; n as usize],
        }
    }

    fn midfield_slots(lines: &[u8]) -> Vec<PlayerPositionType> {
        use PlayerPositionType::*;

        match lines {
            [single] => match single {
                1 => vec![DefensiveMidfielder],
                2 => vec![MidfielderCenter, MidfielderCenter],
                3 => vec![DefensiveMidfielder, MidfielderCenter, MidfielderCenter],
                4 => vec![WingerLeft, MidfielderCenter, MidfielderCenter, WingerRight],
                5 => vec![WingerLeft, MidfielderCenter, DefensiveMidfielder, MidfielderCenter, WingerRight],
                n => vec![MidfielderCenter; *n as usize],
            },
            [holding, middle @ .., attacking] => {
                let mut slots = vec![DefensiveMidfielder; *holding as usize];
                for line in middle {
                    slots.extend(vec![MidfielderCenter; *line as usize]);
                }
                slots.extend(match attacking {
                    1 => vec![AttackingMidfielderCenter],
                    2 => vec![AttackingMidfielderCenter, AttackingMidfielderCenter],
                    3 => vec![WingerLeft, AttackingMidfielderCenter, WingerRight],
                    4 => vec![WingerLeft, AttackingMidfielderCenter, AttackingMidfielderCenter, WingerRight],
                    n => vec![AttackingMidfielderCenter; *n as usize],
                });
                slots
            }
            [] => Vec::new(),
        }
    }

    fn forward_slots(count: u8) -> Vec<PlayerPositionType> {
        use PlayerPositionType::*;

        match count {
            1 => vec![Striker],
            2 => vec![Striker, ForwardCenter],
            3 => vec![WingerLeft, Striker, WingerRight],
            n => vec![Striker; n as usize],
        }
    }
}
