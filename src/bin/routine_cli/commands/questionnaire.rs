// ABOUTME: Questionnaire submission command for routine-cli
// ABOUTME: Turns CLI answers into a validated questionnaire and posts it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

use anyhow::Result;
use routine_planner::auth::AuthSession;
use routine_planner::client::QuestionnaireClient;
use routine_planner::config::ClientConfig;
use routine_planner::constants::messages::{ROUTINE_CREATED_BODY, ROUTINE_CREATED_TITLE};
use routine_planner::models::{
    ExperienceLevel, FitnessGoal, Frequency, QuestionnaireDraft, WorkoutLocation,
};
use tracing::info;

/// Answers collected from the command line
pub struct Answers {
    pub frequency: Frequency,
    pub goal: FitnessGoal,
    pub location: WorkoutLocation,
    pub experience: ExperienceLevel,
    pub space: u8,
    pub equipment: bool,
    pub duration: u32,
}

impl From<Answers> for QuestionnaireDraft {
    fn from(answers: Answers) -> Self {
        Self {
            frequency: Some(answers.frequency),
            fitness_goal: Some(answers.goal),
            workout_location: Some(answers.location),
            space_constraint: answers.space,
            has_equipment: answers.equipment,
            experience_level: Some(answers.experience),
            workout_duration: answers.duration,
        }
    }
}

/// Validate and submit the questionnaire
pub async fn submit(answers: Answers) -> Result<()> {
    let questionnaire = QuestionnaireDraft::from(answers).into_questionnaire()?;

    let config = ClientConfig::from_env()?;
    let session = AuthSession::from_config(&config);
    let client = QuestionnaireClient::new(&config)?;

    info!(auth.established = session.is_established(), "Submitting questionnaire");
    let reply = client.submit(&questionnaire, &session).await?;

    println!("{ROUTINE_CREATED_TITLE}: {ROUTINE_CREATED_BODY}");
    if !reply.is_null() {
        println!("{}", serde_json::to_string_pretty(&reply)?);
    }
    Ok(())
}
