//! Admin content components - reports, party administration, user management

use marquee_core::WatchParty;
use marquee_core::party::JoinReadiness;

use super::{layout, stats};

/// Renders the moderation reports queue.
///
/// Open reports ordered by age, with resolve/dismiss controls per row.
pub fn moderation_reports() -> String {
    let rows = [
        ("harassment in chat", "Friday Movie Night", "2h ago", "open"),
        ("inappropriate video title", "Retro Cartoons", "5h ago", "open"),
        ("spam invites", "Documentary Club", "1d ago", "reviewing"),
    ]
    .iter()
    .map(|(reason, party, age, state)| {
        format!(
            r#"<tr class="border-t border-gray-700 hover:bg-gray-750">
                <td class="px-4 py-3 text-white">{reason}</td>
                <td class="px-4 py-3 text-gray-400">{party}</td>
                <td class="px-4 py-3 text-gray-400">{age}</td>
                <td class="px-4 py-3">{}</td>
                <td class="px-4 py-3 text-right">
                    {} {}
                </td>
            </tr>"#,
            stats::status_indicator(if *state == "open" { "warning" } else { "active" }, state),
            layout::button("Resolve", "primary", None),
            layout::button("Dismiss", "ghost", None),
        )
    })
    .collect::<Vec<_>>()
    .join("");

    let summary = stats::stats_grid(&[
        stats::stat_card("3", "Open Reports", None, None, Some("text-yellow-400")),
        stats::stat_card("12", "Resolved This Week", None, None, Some("text-green-400")),
        stats::stat_card("41m", "Median Response", None, None, None),
    ]);

    format!(
        r#"{summary}
        {}"#,
        layout::card(
            Some("Open Reports"),
            &format!(
                r#"<table class="w-full text-sm">
                    <thead>
                        <tr class="text-left text-gray-400">
                            <th class="px-4 py-2">Reason</th>
                            <th class="px-4 py-2">Party</th>
                            <th class="px-4 py-2">Age</th>
                            <th class="px-4 py-2">Status</th>
                            <th class="px-4 py-2"></th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>"#
            ),
            None,
        )
    )
}

/// Renders the admin view over all active parties.
///
/// Summary cards from the registry snapshot plus a live party list that
/// refreshes through the HTMX partial.
pub fn admin_parties_view(parties: &[WatchParty], min_buffer_secs: f64) -> String {
    let total = parties.len();
    let ready = parties
        .iter()
        .filter(|p| p.join_readiness(min_buffer_secs) == JoinReadiness::Ready)
        .count();
    let viewers: usize = parties.iter().map(|p| p.participants.len()).sum();

    let summary = stats::stats_grid(&[
        stats::stat_card(&total.to_string(), "Active Parties", None, None, None),
        stats::stat_card(
            &ready.to_string(),
            "Accepting Joins",
            None,
            None,
            Some("text-green-400"),
        ),
        stats::stat_card(&viewers.to_string(), "Viewers", None, None, None),
    ]);

    let live_list = layout::card(
        Some("All Parties"),
        r#"<div id="admin-parties"
               hx-get="/htmx/admin/parties"
               hx-trigger="load, every 5s"
               hx-swap="innerHTML">
            <div class="text-center py-8 text-gray-400">Loading parties...</div>
        </div>"#,
        None,
    );

    format!("{summary}{live_list}")
}

/// Renders the user management console.
pub fn user_management() -> String {
    let search = format!(
        r#"<form class="flex space-x-4 mb-6">
            {}
            {}
        </form>"#,
        layout::input("query", "Search by name or email...", "search", None),
        layout::button("Search", "primary", Some(r#"type="submit""#)),
    );

    let rows = [
        ("ava", "ava@example.com", "host", "active"),
        ("marco", "marco@example.com", "member", "active"),
        ("lin", "lin@example.com", "member", "suspended"),
        ("kai", "kai@example.com", "moderator", "active"),
    ]
    .iter()
    .map(|(name, email, role, state)| {
        format!(
            r#"<tr class="border-t border-gray-700">
                <td class="px-4 py-3 text-white">{name}</td>
                <td class="px-4 py-3 text-gray-400">{email}</td>
                <td class="px-4 py-3 text-gray-400">{role}</td>
                <td class="px-4 py-3">{}</td>
                <td class="px-4 py-3 text-right">{}</td>
            </tr>"#,
            stats::status_indicator(if *state == "active" { "active" } else { "error" }, state),
            layout::button("Manage", "secondary", None),
        )
    })
    .collect::<Vec<_>>()
    .join("");

    layout::card(
        Some("Users"),
        &format!(
            r#"{search}
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-gray-400">
                        <th class="px-4 py-2">Name</th>
                        <th class="px-4 py-2">Email</th>
                        <th class="px-4 py-2">Role</th>
                        <th class="px-4 py-2">Status</th>
                        <th class="px-4 py-2"></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>"#
        ),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parties_view_counts_ready_parties() {
        let html = admin_parties_view(&[], 5.0);
        assert!(html.contains("Active Parties"));
        assert!(html.contains("hx-get=\"/htmx/admin/parties\""));
    }

    #[test]
    fn user_management_renders_search_and_rows() {
        let html = user_management();
        assert!(html.contains("Search by name or email"));
        assert!(html.contains("ava@example.com"));
    }
}
