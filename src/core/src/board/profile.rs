use serde::{Deserialize, Serialize};

pub const SATISFACTION_RANGE: (f32, f32) = (0.0, 100.0);
pub const PATIENCE_RANGE: (f32, f32) = (0.0, 100.0);
pub const BUDGET_MULTIPLIER_RANGE: (f32, f32) = (0.5, 2.0);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardPersonality {
    Patient,
    Impatient,
    PennyPinching,
    Ambitious,
    HandsOff,
}

/// The four satisfaction thresholds that drive board reactions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoardThresholds {
    pub praise: f32,
    pub warning: f32,
    pub critical: f32,
    pub firing: f32,
}

/// Per-personality magnitudes for the weekly evaluation.
#[derive(Debug, Copy, Clone)]
pub struct BoardTemperament {
    pub thresholds: BoardThresholds,
    pub report_value: f32,
    pub report_cap: f32,
    pub success_bonus: f32,
    pub missed_directive_penalty: f32,
    pub flop_penalty: f32,
    pub flop_patience_drain: f32,
    pub idle_penalty: f32,
    pub ultimatum_missed_penalty: f32,
    pub meeting_satisfaction: f32,
    pub meeting_patience: f32,
    pub ultimatum_weeks: u32,
}

impl BoardPersonality {
    pub const ALL: [BoardPersonality; 5] = [
        BoardPersonality::Patient,
        BoardPersonality::Impatient,
        BoardPersonality::PennyPinching,
        BoardPersonality::Ambitious,
        BoardPersonality::HandsOff,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BoardPersonality::Patient => "patient",
            BoardPersonality::Impatient => "impatient",
            BoardPersonality::PennyPinching => "penny-pinching",
            BoardPersonality::Ambitious => "ambitious",
            BoardPersonality::HandsOff => "hands-off",
        }
    }

    pub fn temperament(&self) -> BoardTemperament {
        match self {
            BoardPersonality::Patient => BoardTemperament {
                thresholds: BoardThresholds { praise: 75.0, warning: 40.0, critical: 25.0, firing: 10.0 },
                report_value: 1.0,
                report_cap: 4.0,
                success_bonus: 6.0,
                missed_directive_penalty: 2.0,
                flop_penalty: 4.0,
                flop_patience_drain: 3.0,
                idle_penalty: 0.5,
                ultimatum_missed_penalty: 10.0,
                meeting_satisfaction: 6.0,
                meeting_patience: 8.0,
                ultimatum_weeks: 8,
            },
            BoardPersonality::Impatient => BoardTemperament {
                thresholds: BoardThresholds { praise: 85.0, warning: 55.0, critical: 40.0, firing: 25.0 },
                report_value: 0.8,
                report_cap: 3.0,
                success_bonus: 5.0,
                missed_directive_penalty: 4.0,
                flop_penalty: 8.0,
                flop_patience_drain: 8.0,
                idle_penalty: 2.0,
                ultimatum_missed_penalty: 20.0,
                meeting_satisfaction: 3.0,
                meeting_patience: 3.0,
                ultimatum_weeks: 4,
            },
            BoardPersonality::PennyPinching => BoardTemperament {
                thresholds: BoardThresholds { praise: 80.0, warning: 45.0, critical: 30.0, firing: 15.0 },
                report_value: 1.0,
                report_cap: 4.0,
                success_bonus: 7.0,
                missed_directive_penalty: 3.0,
                flop_penalty: 7.0,
                flop_patience_drain: 5.0,
                idle_penalty: 1.0,
                ultimatum_missed_penalty: 15.0,
                meeting_satisfaction: 4.0,
                meeting_patience: 4.0,
                ultimatum_weeks: 6,
            },
            BoardPersonality::Ambitious => BoardTemperament {
                thresholds: BoardThresholds { praise: 85.0, warning: 50.0, critical: 35.0, firing: 20.0 },
                report_value: 0.8,
                report_cap: 3.0,
                success_bonus: 8.0,
                missed_directive_penalty: 5.0,
                flop_penalty: 6.0,
                flop_patience_drain: 5.0,
                idle_penalty: 1.5,
                ultimatum_missed_penalty: 15.0,
                meeting_satisfaction: 4.0,
                meeting_patience: 3.0,
                ultimatum_weeks: 6,
            },
            BoardPersonality::HandsOff => BoardTemperament {
                thresholds: BoardThresholds { praise: 70.0, warning: 35.0, critical: 20.0, firing: 10.0 },
                report_value: 0.5,
                report_cap: 2.0,
                success_bonus: 4.0,
                missed_directive_penalty: 1.0,
                flop_penalty: 3.0,
                flop_patience_drain: 2.0,
                idle_penalty: 0.0,
                ultimatum_missed_penalty: 8.0,
                meeting_satisfaction: 2.0,
                meeting_patience: 5.0,
                ultimatum_weeks: 8,
            },
        }
    }

    /// Years added to (or removed from) each end of a directive's age window.
    pub fn age_flexibility(&self) -> i32 {
        match self {
            BoardPersonality::HandsOff => 2,
            BoardPersonality::Patient => 1,
            BoardPersonality::PennyPinching => 0,
            BoardPersonality::Impatient | BoardPersonality::Ambitious => -1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardProfile {
    pub personality: BoardPersonality,
    pub satisfaction: f32,
    pub patience: f32,
    pub budget_multiplier: f32,

    pub ultimatum_issued: bool,
    pub ultimatum_deadline: Option<u32>,
    pub ultimatum_issued_week: Option<u32>,

    /// Season the acknowledged outcome counters belong to
    pub acknowledged_season: u32,
    pub acknowledged_hits: u32,
    pub acknowledged_flops: u32,

    /// Directives issued under this board so far
    pub directive_history: u32,
}

impl BoardProfile {
    pub fn new(personality: BoardPersonality, season: u32) -> Self {
        BoardProfile {
            personality,
            satisfaction: 60.0,
            patience: 60.0,
            budget_multiplier: 1.0,
            ultimatum_issued: false,
            ultimatum_deadline: None,
            ultimatum_issued_week: None,
            acknowledged_season: season,
            acknowledged_hits: 0,
            acknowledged_flops: 0,
            directive_history: 0,
        }
    }

    pub fn temperament(&self) -> BoardTemperament {
        self.personality.temperament()
    }

    /// Clamp every bounded field back into range.
    pub fn normalized(mut self) -> Self {
        self.satisfaction = self.satisfaction.clamp(SATISFACTION_RANGE.0, SATISFACTION_RANGE.1);
        self.patience = self.patience.clamp(PATIENCE_RANGE.0, PATIENCE_RANGE.1);
        self.budget_multiplier = self
            .budget_multiplier
            .clamp(BUDGET_MULTIPLIER_RANGE.0, BUDGET_MULTIPLIER_RANGE.1);
        self
    }

    pub fn clear_ultimatum(mut self) -> Self {
        self.ultimatum_issued = false;
        self.ultimatum_deadline = None;
        self.ultimatum_issued_week = None;
        self
    }

    pub fn with_directive_history(&self, issued: u32) -> Self {
        BoardProfile {
            directive_history: self.directive_history + issued,
            ..self.clone()
        }
    }

    // ─── Feedback into directive generation ─────────────────────────

    /// Multiplier applied to a directive's minimum star requirement.
    pub fn difficulty_multiplier(&self) -> f32 {
        let band = match self.satisfaction {
            s if s >= 75.0 => 0.85,
            s if s >= 50.0 => 1.0,
            s if s >= 30.0 => 1.15,
            _ => 1.3,
        };

        let escalation = if self.personality == BoardPersonality::Ambitious {
            (0.05 * (self.directive_history / 10) as f32).min(0.2)
        } else {
            0.0
        };

        band + escalation
    }

    /// Multiplier applied to a directive's budget allocation.
    pub fn budget_factor(&self) -> f32 {
        let penalty = if self.personality == BoardPersonality::PennyPinching {
            0.75
        } else {
            1.0
        };
        self.budget_multiplier * penalty
    }

    pub fn age_flexibility(&self) -> i32 {
        self.personality.age_flexibility()
    }
}
