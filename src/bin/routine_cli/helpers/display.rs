// ABOUTME: Output formatting helpers for routine-cli
// ABOUTME: Renders summary cards, day tabs, and exercise rows as plain text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Routine Planner Contributors

use anyhow::Result;
use routine_planner::models::Workout;
use routine_planner::presenter::{day_tabs, exercise_rows, summary_cards};
use routine_planner::state::DashboardState;

/// Print the view model as pretty JSON
pub fn display_json(workout: Option<&Workout>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&workout)?);
    Ok(())
}

/// Print summary cards, the tab strip, and the active day's rows
pub fn display_dashboard(state: &DashboardState) {
    let Some(workout) = state.workout.as_ref() else {
        println!("No workout loaded.");
        return;
    };

    let cards = summary_cards(workout);
    println!("\nYour Workout");
    println!("{}", "=".repeat(60));
    println!(
        "   Duration: {}",
        cards
            .estimated_duration_minutes
            .map_or_else(|| "-".to_owned(), |m| format!("{m} min"))
    );
    println!(
        "   Calories: {}",
        cards
            .total_calories
            .map_or_else(|| "-".to_owned(), |c| format!("{c:.0} kcal"))
    );
    if !cards.target_muscle_groups.is_empty() {
        println!("   Targets: {}", cards.target_muscle_groups.join(", "));
    }
    println!(
        "   Plan: {} days, {} exercises",
        cards.training_days, cards.exercise_count
    );

    let tabs: Vec<String> = day_tabs(workout)
        .into_iter()
        .map(|tab| {
            if state.active_tab == Some(tab.index) {
                format!("[{}]", tab.label)
            } else {
                tab.label
            }
        })
        .collect();
    println!("\n{}", tabs.join("  "));
    println!("{}", "-".repeat(60));

    let Some(group) = state.active_group() else {
        println!("No exercises scheduled.");
        return;
    };
    for row in exercise_rows(group) {
        println!("{:<32} {:>8}  {:>8}", row.name, row.sets_badge, row.effort_badge);
        if let Some(notes) = row.notes {
            println!("   {notes}");
        }
    }
}
