//! Progress bar from the server-reported level toward the next one.

use leptos::prelude::*;
use models::BuddyLevel;
use models::display::LevelProgress;

#[component]
pub fn LevelProgressBar(level: BuddyLevel, points: u32) -> impl IntoView {
    let progress = LevelProgress::new(level, points);
    let caption = match progress.next {
        Some(next) => format!("{} points to {}", progress.points_to_next, next.label()),
        None => "Top level reached".to_owned(),
    };
    view! {
        <div class="level-progress">
            <div class="level-progress__labels">
                <span class=format!("level-chip level-chip--{}", level.label().to_ascii_lowercase())>
                    {level.label()}
                </span>
                <span class="level-progress__points">{format!("{points} pts")}</span>
            </div>
            <div
                class="bar level-progress__bar"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=progress.percent().to_string()
            >
                <span class="bar__fill" style=format!("width: {}%", progress.percent())></span>
            </div>
            <span class="level-progress__caption">{caption}</span>
        </div>
    }
}
