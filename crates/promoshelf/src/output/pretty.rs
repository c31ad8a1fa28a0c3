//! Pretty output formatting.

use promoshelf_core::shelf::Brochure;

use crate::state::ShelfState;

/// Format a brochure for display.
pub fn format_brochure(brochure: &Brochure) -> String {
    let name = if brochure.publisher_name.is_empty() {
        "(unknown publisher)"
    } else {
        brochure.publisher_name.as_str()
    };
    let mut output = format!("{}\n  ID: {}", name, brochure.id);
    if brochure.premium {
        output.push_str(" [premium]");
    }
    if let Some(distance) = brochure.distance {
        output.push_str(&format!("\n  Distance: {:.1} km", distance));
    }
    if let Some(image) = &brochure.brochure_image {
        output.push_str(&format!("\n  Image: {}", image));
    }
    output
}

/// Format brochures for display.
pub fn format_brochures(brochures: &[Brochure]) -> String {
    if brochures.is_empty() {
        return "No brochures found.".to_string();
    }
    let mut output = format!("BROCHURES ({})\n", brochures.len());
    output.push_str(&"-".repeat(40));
    for brochure in brochures {
        output.push_str(&format!("\n{}", format_brochure(brochure)));
        output.push('\n');
    }
    output
}

/// Format the list state for display.
pub fn format_state(state: &ShelfState) -> String {
    if state.error {
        return "Brochures could not be loaded.".to_string();
    }
    let mut output = format!("Within {:.1} km", state.filter.distance_km);
    if !state.filter.has_active_filter() {
        output.push_str(" (default)");
    }
    output.push('\n');
    output.push_str(&format_brochures(&state.items));
    output
}
