// ABOUTME: Command modules for routine-cli
// ABOUTME: Workout fetch/group and questionnaire submission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

pub mod questionnaire;
pub mod workout;
