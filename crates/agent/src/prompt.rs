//! Prompt composition — readings, tier policy, and context rendered into
//! one instruction string.
//!
//! The template is deterministic: identical inputs always yield
//! byte-identical prompts. When room area is absent its clause is omitted
//! entirely rather than rendering a placeholder. No escaping is performed
//! on field values; they are constrained to numeric types and a controlled
//! vocabulary.

use wattwise_core::readings::ReadingSet;
use wattwise_core::tier::AccessTier;

/// Render the outbound prompt.
///
/// `context` is the augmentation text; when non-empty it is embedded
/// verbatim between the reading summary and the closing instruction.
pub fn compose(readings: &ReadingSet, tier: &AccessTier, context: &str) -> String {
    let mut prompt = format!(
        "Temp: {}, Occupancy: {}, Power: {}W",
        readings.temperature, readings.occupancy, readings.power_watts
    );

    if let Some(area) = readings.room_area_sq_m {
        prompt.push_str(&format!(", Room Area: {area} sqm"));
    }

    prompt.push_str(&format!(
        ", Peak: {}, Access Level: {} ({}).",
        if readings.peak_hours { "Yes" } else { "No" },
        tier.as_str(),
        tier.style(),
    ));

    if !context.is_empty() {
        prompt.push(' ');
        prompt.push_str(context);
    }

    prompt.push_str(" Best HVAC mode & temp?");
    prompt
}
