//! Illustrative split of a compatibility score across matching factors.
//!
//! The weights are a fixed approximation. The backend computes the real
//! score, and the panel says so.

use leptos::prelude::*;
use models::display::{BreakdownRow, compatibility_breakdown};

use crate::components::match_status_badge::ScoreBadge;

#[component]
pub fn CompatibilityBreakdown(score: f64) -> impl IntoView {
    let rows = compatibility_breakdown(score);
    view! {
        <section class="breakdown">
            <header class="breakdown__header">
                <span>"Compatibility"</span>
                <ScoreBadge score=score/>
            </header>
            <table class="breakdown__table">
                <tbody>
                    {rows.into_iter().map(breakdown_row).collect::<Vec<_>>()}
                </tbody>
            </table>
            <p class="breakdown__note">
                "Approximate breakdown for illustration. The overall score comes from the matching service."
            </p>
        </section>
    }
}

fn breakdown_row(row: BreakdownRow) -> impl IntoView {
    let max_points = row.weight * 100.0;
    let fill = if max_points > 0.0 { row.points / max_points * 100.0 } else { 0.0 };
    view! {
        <tr class="breakdown__row">
            <th scope="row">{row.label}</th>
            <td class="breakdown__weight">{format!("{}%", row.weight_percent())}</td>
            <td class="breakdown__bar">
                <span class="bar"><span class="bar__fill" style=format!("width: {fill:.0}%")></span></span>
            </td>
            <td class="breakdown__points">{format!("{:.1} pts", row.points)}</td>
        </tr>
    }
}
