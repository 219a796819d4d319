//! Scoreboard text

use bevy::prelude::*;

use crate::dice3d::throw_control::ThrowControlState;
use crate::dice3d::types::*;

/// Build the scoreboard text from the recorded results
pub fn format_results(results: &RollResults, throw_state: &ThrowControlState) -> String {
    let mut text = format!(
        "Holding: {}  (1: D6, 2: D20, 3: Bottle)\n",
        throw_state.selection.name()
    );

    if throw_state.release_intensity > throw_state.default_release_intensity {
        text.push_str(&format!(
            "Power: {:.0}\n",
            throw_state.release_intensity
        ));
    }

    if results.entries.is_empty() {
        text.push_str("Hold SPACE to charge, release to throw\nPress C to clear");
        return text;
    }

    let values: Vec<String> = results
        .recent()
        .iter()
        .map(|entry| match entry.value {
            Some(value) => format!("{} {}", entry.variant.name(), value),
            None => format!("{} ?", entry.variant.name()),
        })
        .collect();

    text.push_str(&format!(
        "Results: {}\nTOTAL: {}",
        values.join(", "),
        results.total()
    ));
    text
}

/// System to update the results display text
pub fn update_results_display(
    results: Res<RollResults>,
    throw_state: Res<ThrowControlState>,
    mut text_query: Query<&mut Text, With<ResultsText>>,
) {
    if !results.is_changed() && !throw_state.is_changed() {
        return;
    }

    for mut text in text_query.iter_mut() {
        text.0 = format_results(&results, &throw_state);
    }
}
