//! Version Footer Component
//!
//! Read-only build info injected by build.rs: current commit id and
//! message, plus a short trailing commit history.

use leptos::prelude::*;

/// Separator used by build.rs to join history lines
const HISTORY_SEP: char = '\u{1f}';

/// Footer showing the build's commit and recent history
#[component]
pub fn VersionFooter() -> impl IntoView {
    let commit = env!("APP_COMMIT");
    let message = env!("APP_COMMIT_MESSAGE");
    let history: Vec<&'static str> = env!("APP_COMMIT_HISTORY")
        .split(HISTORY_SEP)
        .filter(|line| !line.trim().is_empty())
        .collect();

    let current = if message.is_empty() {
        commit.to_string()
    } else {
        format!("{commit} {message}")
    };

    view! {
        <footer class="version-footer">
            <span class="version-current">{current}</span>
            {(!history.is_empty()).then(|| view! {
                <ul class="version-history">
                    {history
                        .into_iter()
                        .map(|line| view! { <li>{line}</li> })
                        .collect_view()}
                </ul>
            })}
        </footer>
    }
}
