use serde::{Deserialize, Serialize};

/// Individual attribute on the 1-20 scale.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    // technical
    Crossing,
    Dribbling,
    Finishing,
    FirstTouch,
    Heading,
    LongShots,
    Marking,
    Passing,
    Tackling,
    Technique,
    // mental
    Aggression,
    Anticipation,
    Composure,
    Decisions,
    Leadership,
    OffTheBall,
    Positioning,
    Pressing,
    Teamwork,
    Vision,
    WorkRate,
    // physical
    Acceleration,
    Agility,
    Jumping,
    Pace,
    Stamina,
    Strength,
}

impl Skill {
    pub const ALL: [Skill; 27] = [
        Skill::Crossing,
        Skill::Dribbling,
        Skill::Finishing,
        Skill::FirstTouch,
        Skill::Heading,
        Skill::LongShots,
        Skill::Marking,
        Skill::Passing,
        Skill::Tackling,
        Skill::Technique,
        Skill::Aggression,
        Skill::Anticipation,
        Skill::Composure,
        Skill::Decisions,
        Skill::Leadership,
        Skill::OffTheBall,
        Skill::Positioning,
        Skill::Pressing,
        Skill::Teamwork,
        Skill::Vision,
        Skill::WorkRate,
        Skill::Acceleration,
        Skill::Agility,
        Skill::Jumping,
        Skill::Pace,
        Skill::Stamina,
        Skill::Strength,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Skill::Crossing => "crossing",
            Skill::Dribbling => "dribbling",
            Skill::Finishing => "finishing",
            Skill::FirstTouch => "first touch",
            Skill::Heading => "heading",
            Skill::LongShots => "long shots",
            Skill::Marking => "marking",
            Skill::Passing => "passing",
            Skill::Tackling => "tackling",
            Skill::Technique => "technique",
            Skill::Aggression => "aggression",
            Skill::Anticipation => "anticipation",
            Skill::Composure => "composure",
            Skill::Decisions => "decisions",
            Skill::Leadership => "leadership",
            Skill::OffTheBall => "off the ball",
            Skill::Positioning => "positioning",
            Skill::Pressing => "pressing",
            Skill::Teamwork => "teamwork",
            Skill::Vision => "vision",
            Skill::WorkRate => "work rate",
            Skill::Acceleration => "acceleration",
            Skill::Agility => "agility",
            Skill::Jumping => "jumping",
            Skill::Pace => "pace",
            Skill::Stamina => "stamina",
            Skill::Strength => "strength",
        }
    }
}

#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct PlayerSkills {
    pub technical: Technical,
    pub mental: Mental,
    pub physical: Physical,
}

impl PlayerSkills {
    /// Every attribute set to the same value, handy as a baseline.
    pub fn uniform(value: f32) -> Self {
        PlayerSkills {
            technical: Technical {
                crossing: value,
                dribbling: value,
                finishing: value,
                first_touch: value,
                heading: value,
                long_shots: value,
                marking: value,
                passing: value,
                tackling: value,
                technique: value,
            },
            mental: Mental {
                aggression: value,
                anticipation: value,
                composure: value,
                decisions: value,
                leadership: value,
                off_the_ball: value,
                positioning: value,
                pressing: value,
                teamwork: value,
                vision: value,
                work_rate: value,
            },
            physical: Physical {
                acceleration: value,
                agility: value,
                jumping: value,
                pace: value,
                stamina: value,
                strength: value,
            },
        }
    }

    pub fn get(&self, skill: Skill) -> f32 {
        match skill {
            Skill::Crossing => self.technical.crossing,
            Skill::Dribbling => self.technical.dribbling,
            Skill::Finishing => self.technical.finishing,
            Skill::FirstTouch => self.technical.first_touch,
            Skill::Heading => self.technical.heading,
            Skill::LongShots => self.technical.long_shots,
            Skill::Marking => self.technical.marking,
            Skill::Passing => self.technical.passing,
            Skill::Tackling => self.technical.tackling,
            Skill::Technique => self.technical.technique,
            Skill::Aggression => self.mental.aggression,
            Skill::Anticipation => self.mental.anticipation,
            Skill::Composure => self.mental.composure,
            Skill::Decisions => self.mental.decisions,
            Skill::Leadership => self.mental.leadership,
            Skill::OffTheBall => self.mental.off_the_ball,
            Skill::Positioning => self.mental.positioning,
            Skill::Pressing => self.mental.pressing,
            Skill::Teamwork => self.mental.teamwork,
            Skill::Vision => self.mental.vision,
            Skill::WorkRate => self.mental.work_rate,
            Skill::Acceleration => self.physical.acceleration,
            Skill::Agility => self.physical.agility,
            Skill::Jumping => self.physical.jumping,
            Skill::Pace => self.physical.pace,
            Skill::Stamina => self.physical.stamina,
            Skill::Strength => self.physical.strength,
        }
    }

    pub fn with(mut self, skill: Skill, value: f32) -> Self {
        let value = value.clamp(1.0, 20.0);
        let slot = match skill {
            Skill::Crossing => &mut self.technical.crossing,
            Skill::Dribbling => &mut self.technical.dribbling,
            Skill::Finishing => &mut self.technical.finishing,
            Skill::FirstTouch => &mut self.technical.first_touch,
            Skill::Heading => &mut self.technical.heading,
            Skill::LongShots => &mut self.technical.long_shots,
            Skill::Marking => &mut self.technical.marking,
            Skill::Passing => &mut self.technical.passing,
            Skill::Tackling => &mut self.technical.tackling,
            Skill::Technique => &mut self.technical.technique,
            Skill::Aggression => &mut self.mental.aggression,
            Skill::Anticipation => &mut self.mental.anticipation,
            Skill::Composure => &mut self.mental.composure,
            Skill::Decisions => &mut self.mental.decisions,
            Skill::Leadership => &mut self.mental.leadership,
            Skill::OffTheBall => &mut self.mental.off_the_ball,
            Skill::Positioning => &mut self.mental.positioning,
            Skill::Pressing => &mut self.mental.pressing,
            Skill::Teamwork => &mut self.mental.teamwork,
            Skill::Vision => &mut self.mental.vision,
            Skill::WorkRate => &mut self.mental.work_rate,
            Skill::Acceleration => &mut self.physical.acceleration,
            Skill::Agility => &mut self.physical.agility,
            Skill::Jumping => &mut self.physical.jumping,
            Skill::Pace => &mut self.physical.pace,
            Skill::Stamina => &mut self.physical.stamina,
            Skill::Strength => &mut self.physical.strength,
        };
        *slot = value;
        self
    }

    /// Mean of the given attributes, 0 for an empty slice.
    pub fn average_of(&self, skills: &[Skill]) -> f32 {
        if skills.is_empty() {
            return 0.0;
        }
        skills.iter().map(|s| self.get(*s)).sum::<f32>() / skills.len() as f32
    }
}

#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Technical {
    pub crossing: f32,
    pub dribbling: f32,
    pub finishing: f32,
    pub first_touch: f32,
    pub heading: f32,
    pub long_shots: f32,
    pub marking: f32,
    pub passing: f32,
    pub tackling: f32,
    pub technique: f32,
}

impl Technical {
    pub fn average(&self) -> f32 {
        (self.crossing
            + self.dribbling
            + self.finishing
            + self.first_touch
            + self.heading
            + self.long_shots
            + self.marking
            + self.passing
            + self.tackling
            + self.technique)
            / 10.0
    }
}

#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Mental {
    pub aggression: f32,
    pub anticipation: f32,
    pub composure: f32,
    pub decisions: f32,
    pub leadership: f32,
    pub off_the_ball: f32,
    pub positioning: f32,
    pub pressing: f32,
    pub teamwork: f32,
    pub vision: f32,
    pub work_rate: f32,
}

impl Mental {
    pub fn average(&self) -> f32 {
        (self.aggression
            + self.anticipation
            + self.composure
            + self.decisions
            + self.leadership
            + self.off_the_ball
            + self.positioning
            + self.pressing
            + self.teamwork
            + self.vision
            + self.work_rate)
            / 11.0
    }
}

#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Physical {
    pub acceleration: f32,
    pub agility: f32,
    pub jumping: f32,
    pub pace: f32,
    pub stamina: f32,
    pub strength: f32,
}

impl Physical {
    pub fn average(&self) -> f32 {
        (self.acceleration + self.agility + self.jumping + self.pace + self.stamina + self.strength)
            / 6.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_averages() {
        let skills = PlayerSkills::uniform(12.0);
        assert_eq!(skills.technical.average(), 12.0);
        assert_eq!(skills.mental.average(), 12.0);
        assert_eq!(skills.physical.average(), 12.0);
    }

    #[test]
    fn test_with_sets_single_skill() {
        let skills = PlayerSkills::uniform(10.0).with(Skill::Pressing, 18.0);
        assert_eq!(skills.get(Skill::Pressing), 18.0);
        assert_eq!(skills.mental.pressing, 18.0);
        assert_eq!(skills.get(Skill::Stamina), 10.0);
    }

    #[test]
    fn test_with_clamps_to_scale() {
        let skills = PlayerSkills::uniform(10.0)
            .with(Skill::Pace, 25.0)
            .with(Skill::Strength, -3.0);
        assert_eq!(skills.get(Skill::Pace), 20.0);
        assert_eq!(skills.get(Skill::Strength), 1.0);
    }

    #[test]
    fn test_average_of() {
        let skills = PlayerSkills::uniform(10.0).with(Skill::Vision, 20.0);
        assert_eq!(skills.average_of(&[Skill::Vision, Skill::Passing]), 15.0);
        assert_eq!(skills.average_of(&[]), 0.0);
    }
}
