//! Queries - read-only projections over a lot
//!
//! Every query walks occupied spots in ascending order and compares
//! registrations and colors case-insensitively.

use crate::lot::{LotState, SpotNumber, Vehicle};

/// Separator used when a query result is rendered on one line
pub const RESULT_SEPARATOR: &str = ", ";

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

fn matching<'a, F>(state: &'a LotState, pred: F) -> impl Iterator<Item = (SpotNumber, &'a Vehicle)>
where
    F: Fn(&Vehicle) -> bool + 'a,
{
    state.iter().filter(move |(_, vehicle)| pred(*vehicle))
}

/// One line per occupied spot: `<spot> <registration> <color>`
pub fn status(state: &LotState) -> Vec<String> {
    if state.is_empty() {
        return vec!["Parking lot is empty.".to_string()];
    }
    state
        .iter()
        .map(|(spot, v)| format!("{} {} {}", spot, v.registration, v.color))
        .collect()
}

/// Registrations of vehicles with the given color
pub fn registrations_by_color(state: &LotState, color: &str) -> Vec<String> {
    matching(state, move |v| eq_ignore_case(&v.color, color))
        .map(|(_, v)| v.registration.clone())
        .collect()
}

/// Spots holding vehicles with the given color
pub fn spots_by_color(state: &LotState, color: &str) -> Vec<SpotNumber> {
    matching(state, move |v| eq_ignore_case(&v.color, color))
        .map(|(spot, _)| spot)
        .collect()
}

/// Spots holding vehicles with the given registration
pub fn spots_by_registration(state: &LotState, registration: &str) -> Vec<SpotNumber> {
    matching(state, move |v| eq_ignore_case(&v.registration, registration))
        .map(|(spot, _)| spot)
        .collect()
}

/// Render a color query result, or the not-found message
pub fn render_by_color<T: ToString>(results: &[T], color: &str) -> String {
    render(results)
        .unwrap_or_else(|| format!("No cars with color {} were found.", color))
}

/// Render a registration query result, or the not-found message
pub fn render_by_registration<T: ToString>(results: &[T], registration: &str) -> String {
    render(results).unwrap_or_else(|| {
        format!(
            "No cars with registration number {} were found.",
            registration
        )
    })
}

fn render<T: ToString>(results: &[T]) -> Option<String> {
    if results.is_empty() {
        return None;
    }
    let parts: Vec<String> = results.iter().map(ToString::to_string).collect();
    Some(parts.join(RESULT_SEPARATOR))
}
