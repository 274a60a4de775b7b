// ABOUTME: Preference questionnaire posted to the routines endpoint
// ABOUTME: Typed answer enums with wire names, bounds validation, and a form-state draft
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::questionnaire::{
    DEFAULT_SPACE_CONSTRAINT, DEFAULT_WORKOUT_DURATION_MINUTES, MAX_SPACE_CONSTRAINT,
    MIN_SPACE_CONSTRAINT,
};
use crate::errors::{RoutineError, RoutineResult};

/// How often the user wants to train
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every day
    Daily,
    /// Once a week
    Weekly,
    /// Twice a week
    Biweekly,
    /// Now and then
    Occasionally,
}

/// Primary training goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitnessGoal {
    /// Lose weight
    #[serde(rename = "weight loss")]
    WeightLoss,
    /// Build muscle
    #[serde(rename = "muscle gain")]
    MuscleGain,
    /// Maintain general fitness
    #[serde(rename = "staying fit")]
    StayingFit,
    /// Improve endurance
    #[serde(rename = "endurance")]
    Endurance,
}

/// Where the workouts happen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutLocation {
    /// At home
    Home,
    /// At a gym
    Gym,
    /// Outside
    Outdoors,
}

/// Self-reported training experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// New to training
    Beginner,
    /// Some experience
    Intermediate,
    /// Experienced
    Advanced,
}

macro_rules! wire_names {
    ($ty:ty { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Name used on the wire
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($name => Ok(Self::$variant),)+
                    other => Err(format!(
                        "unknown value '{other}', expected one of: {}",
                        [$($name),+].join(", ")
                    )),
                }
            }
        }
    };
}

wire_names!(Frequency {
    Daily => "daily",
    Weekly => "weekly",
    Biweekly => "biweekly",
    Occasionally => "occasionally",
});

wire_names!(FitnessGoal {
    WeightLoss => "weight loss",
    MuscleGain => "muscle gain",
    StayingFit => "staying fit",
    Endurance => "endurance",
});

wire_names!(WorkoutLocation {
    Home => "home",
    Gym => "gym",
    Outdoors => "outdoors",
});

wire_names!(ExperienceLevel {
    Beginner => "beginner",
    Intermediate => "intermediate",
    Advanced => "advanced",
});

/// Completed questionnaire as posted to the routines endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    /// Training frequency
    pub frequency: Frequency,
    /// Primary goal
    pub fitness_goal: FitnessGoal,
    /// Training location
    pub workout_location: WorkoutLocation,
    /// Available space on a 0-10 scale
    pub space_constraint: u8,
    /// Whether any equipment is available
    pub has_equipment: bool,
    /// Experience level
    pub experience_level: ExperienceLevel,
    /// Desired session length in minutes
    pub workout_duration: u32,
}

impl Questionnaire {
    /// Check numeric bounds
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuestionnaire` when `space_constraint` is above the
    /// maximum or `workout_duration` is zero.
    pub fn validate(&self) -> RoutineResult<()> {
        if !(MIN_SPACE_CONSTRAINT..=MAX_SPACE_CONSTRAINT).contains(&self.space_constraint) {
            return Err(RoutineError::invalid_questionnaire(
                "space_constraint",
                format!(
                    "must be between {MIN_SPACE_CONSTRAINT} and {MAX_SPACE_CONSTRAINT}, got {}",
                    self.space_constraint
                ),
            ));
        }
        if self.workout_duration == 0 {
            return Err(RoutineError::invalid_questionnaire(
                "workout_duration",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Questionnaire form state while the user is still answering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionnaireDraft {
    /// Selected frequency
    pub frequency: Option<Frequency>,
    /// Selected goal
    pub fitness_goal: Option<FitnessGoal>,
    /// Selected location
    pub workout_location: Option<WorkoutLocation>,
    /// Space slider value
    pub space_constraint: u8,
    /// Equipment switch
    pub has_equipment: bool,
    /// Selected experience level
    pub experience_level: Option<ExperienceLevel>,
    /// Duration slider value in minutes
    pub workout_duration: u32,
}

impl Default for QuestionnaireDraft {
    fn default() -> Self {
        Self {
            frequency: None,
            fitness_goal: None,
            workout_location: None,
            space_constraint: DEFAULT_SPACE_CONSTRAINT,
            has_equipment: false,
            experience_level: None,
            workout_duration: DEFAULT_WORKOUT_DURATION_MINUTES,
        }
    }
}

impl QuestionnaireDraft {
    /// Turn the form state into a validated questionnaire
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuestionnaire` naming the first unanswered choice, or
    /// the first bound that [`Questionnaire::validate`] rejects.
    pub fn into_questionnaire(self) -> RoutineResult<Questionnaire> {
        let questionnaire = Questionnaire {
            frequency: self.frequency.ok_or_else(unanswered("frequency"))?,
            fitness_goal: self.fitness_goal.ok_or_else(unanswered("fitness_goal"))?,
            workout_location: self
                .workout_location
                .ok_or_else(unanswered("workout_location"))?,
            space_constraint: self.space_constraint,
            has_equipment: self.has_equipment,
            experience_level: self
                .experience_level
                .ok_or_else(unanswered("experience_level"))?,
            workout_duration: self.workout_duration,
        };
        questionnaire.validate()?;
        Ok(questionnaire)
    }
}

fn unanswered(field: &'static str) -> impl FnOnce() -> RoutineError {
    move || RoutineError::invalid_questionnaire(field, "no option selected")
}
