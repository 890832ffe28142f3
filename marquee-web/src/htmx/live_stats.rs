//! Live statistics and metrics HTMX handlers

use std::time::Instant;

use axum::extract::State;
use axum::response::Html;
use chrono::Utc;
use sysinfo::System;

use marquee_core::party::JoinReadiness;

use crate::components::stats;
use crate::server::AppState;

/// Formats elapsed time from start instant into human-readable string
fn format_elapsed_time(started_at: Instant) -> String {
    let elapsed = started_at.elapsed();
    let total_seconds = elapsed.as_secs();

    if total_seconds < 60 {
        format!("{total_seconds}s")
    } else if total_seconds < 3600 {
        let minutes = total_seconds / 60;
        format!("{minutes}m")
    } else if total_seconds < 86400 {
        let hours = total_seconds / 3600;
        format!("{hours}h")
    } else {
        let days = total_seconds / 86400;
        format!("{days}d")
    }
}

/// Real-time system metrics fragment for the monitoring dashboard.
pub async fn monitoring_stats(State(state): State<AppState>) -> Html<String> {
    let mut system = System::new_all();
    system.refresh_all();

    let used_memory_gb = system.used_memory() as f64 / 1_073_741_824.0;
    let total_memory_gb = system.total_memory() as f64 / 1_073_741_824.0;
    let cpu_count = system.cpus().len();

    let parties = state.parties.active_parties().await;
    let viewers: usize = parties.iter().map(|p| p.participants.len()).sum();

    let stat_cards = vec![
        stats::stat_card(
            &format_elapsed_time(state.server_started_at),
            "Server Uptime",
            None,
            None,
            None,
        ),
        stats::stat_card(
            &format!("{used_memory_gb:.1}/{total_memory_gb:.1}"),
            "Memory",
            Some("GB"),
            None,
            None,
        ),
        stats::stat_card(&cpu_count.to_string(), "CPU Cores", None, None, None),
        stats::stat_card(&parties.len().to_string(), "Active Parties", None, None, None),
        stats::stat_card(
            &viewers.to_string(),
            "Viewers",
            None,
            None,
            Some("text-green-400"),
        ),
    ];

    Html(stats::stats_grid(&stat_cards))
}

/// Live party list fragment for the admin parties view.
pub async fn admin_parties_list(State(state): State<AppState>) -> Html<String> {
    let parties = state.parties.active_parties().await;
    let min_buffer = state.parties.min_join_buffer_secs();

    if parties.is_empty() {
        return Html(
            r#"<div class="text-center py-8 text-gray-400">No active parties</div>"#.to_string(),
        );
    }

    let rows = parties
        .iter()
        .map(|party| {
            let status = match party.join_readiness(min_buffer) {
                JoinReadiness::Ready => stats::status_indicator("ready", "accepting joins"),
                JoinReadiness::NotReady { .. } => {
                    stats::status_indicator("buffering", "warming up")
                }
            };

            let age_mins = Utc::now()
                .signed_duration_since(party.created_at)
                .num_minutes()
                .max(0);

            format!(
                r#"<tr class="border-t border-gray-700">
                    <td class="px-4 py-3 text-marquee-400 font-mono">{}</td>
                    <td class="px-4 py-3 text-white">{}</td>
                    <td class="px-4 py-3 text-gray-400">{}</td>
                    <td class="px-4 py-3 text-gray-400">{}/{}</td>
                    <td class="px-4 py-3 text-gray-400">{age_mins}m ago</td>
                    <td class="px-4 py-3">{status}</td>
                </tr>"#,
                party.code,
                party.title,
                party.host,
                party.participants.len(),
                party.max_participants,
            )
        })
        .collect::<Vec<_>>()
        .join("");

    Html(format!(
        r#"<table class="w-full text-sm">
            <thead>
                <tr class="text-left text-gray-400">
                    <th class="px-4 py-2">Code</th>
                    <th class="px-4 py-2">Title</th>
                    <th class="px-4 py-2">Host</th>
                    <th class="px-4 py-2">Viewers</th>
                    <th class="px-4 py-2">Started</th>
                    <th class="px-4 py-2">Status</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>"#
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_time_picks_largest_unit() {
        let now = Instant::now();
        assert!(format_elapsed_time(now).ends_with('s'));
    }
}
