use crate::club::player::{Player, PlayerPositionType, PlayerSkills, PlayerTrait};

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<u32>,
    name: Option<String>,
    club_id: Option<u32>,
    position: Option<PlayerPositionType>,
    secondary_positions: Option<Vec<PlayerPositionType>>,
    age: Option<u8>,
    ability: Option<u8>,
    potential: Option<u8>,
    form: Option<i8>,
    skills: Option<PlayerSkills>,
    traits: Option<Vec<PlayerTrait>>,
    market_value: Option<f64>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn club_id(mut self, club_id: u32) -> Self {
        self.club_id = Some(club_id);
        self
    }

    pub fn position(mut self, position: PlayerPositionType) -> Self {
        self.position = Some(position);
        self
    }

    pub fn secondary_positions(mut self, positions: Vec<PlayerPositionType>) -> Self {
        self.secondary_positions = Some(positions);
        self
    }

    pub fn age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    pub fn ability(mut self, ability: u8) -> Self {
        self.ability = Some(ability);
        self
    }

    pub fn potential(mut self, potential: u8) -> Self {
        self.potential = Some(potential);
        self
    }

    pub fn form(mut self, form: i8) -> Self {
        self.form = Some(form);
        self
    }

    pub fn skills(mut self, skills: PlayerSkills) -> Self {
        self.skills = Some(skills);
        self
    }

    pub fn traits(mut self, traits: Vec<PlayerTrait>) -> Self {
        self.traits = Some(traits);
        self
    }

    pub fn market_value(mut self, market_value: f64) -> Self {
        self.market_value = Some(market_value);
        self
    }

    pub fn build(self) -> Result<Player, String> {
        let ability = self.ability.ok_or("ability is required")?.clamp(1, 200);

        Ok(Player {
            id: self.id.ok_or("id is required")?,
            name: self.name.ok_or("name is required")?,
            club_id: self.club_id,
            position: self.position.ok_or("position is required")?,
            secondary_positions: self.secondary_positions.unwrap_or_default(),
            age: self.age.ok_or("age is required")?,
            ability,
            potential: self.potential.unwrap_or(ability).max(ability),
            form: self.form.unwrap_or(0).clamp(-5, 5),
            skills: self.skills.unwrap_or_else(|| PlayerSkills::uniform(10.0)),
            traits: self.traits.unwrap_or_default(),
            market_value: self.market_value.unwrap_or(0.0).max(0.0),
        })
    }
}
