use crate::club::player::Skill;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How strongly the scout stands behind a report.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConvictionLevel {
    Note,
    Recommend,
    StrongRecommend,
    TablePound,
}

impl ConvictionLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ConvictionLevel::Note => "note",
            ConvictionLevel::Recommend => "recommendation",
            ConvictionLevel::StrongRecommend => "strong recommendation",
            ConvictionLevel::TablePound => "table-pound",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutReport {
    pub id: String,
    pub scout_id: u32,
    pub player_id: u32,
    pub conviction: ConvictionLevel,
    /// Scout's perceived ability, 0.5-5.0 stars
    pub perceived_stars: f32,
    /// Thoroughness of the write-up, 0-100
    pub quality_score: f32,
    /// Scout's 1-20 read on the attributes they actually assessed
    pub attribute_assessments: BTreeMap<Skill, f32>,
    pub week: u32,
    pub season: u32,
}

impl ScoutReport {
    pub fn assessed(&self, skill: Skill) -> Option<f32> {
        self.attribute_assessments.get(&skill).copied()
    }
}
