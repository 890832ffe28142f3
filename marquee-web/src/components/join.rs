//! Join party content component
//!
//! The only deferred-rendering surface: the page ships a placeholder that
//! polls the join partial, and the partial swaps in the real content exactly
//! once, when the party is ready.

use marquee_core::WatchParty;

use super::{layout, stats};

/// Renders the deferred-content shell for the join page.
///
/// The placeholder text stays visible until the partial reports readiness;
/// the swap replaces the whole container in one piece.
pub fn join_shell(code: Option<&str>) -> String {
    let partial_url = match code {
        Some(code) => format!("/htmx/join/content?code={code}"),
        None => "/htmx/join/content".to_string(),
    };

    format!(
        r#"<div id="join-content"
               hx-get="{partial_url}"
               hx-trigger="load, every 2s"
               hx-swap="innerHTML">
            {}
        </div>"#,
        loading_placeholder(None)
    )
}

/// Renders the loading placeholder shown while the join flow is not ready.
pub fn loading_placeholder(detail: Option<&str>) -> String {
    let detail_html = detail
        .map(|d| format!(r#"<p class="text-gray-500 text-sm mt-2">{d}</p>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="text-center py-12 text-gray-400">
            <div class="text-lg">Loading...</div>
            {detail_html}
        </div>"#
    )
}

/// Renders the join form for users arriving without a code.
pub fn join_form() -> String {
    layout::card(
        Some("Join a Watch Party"),
        &format!(
            r#"<form method="get" action="/join" class="space-y-4">
                {}
                <div class="pt-2">{}</div>
            </form>
            <p class="text-gray-500 text-sm mt-4 text-center">Ask the host for their party code</p>"#,
            layout::input(
                "code",
                "Party code, e.g. QX7M2R",
                "text",
                Some(r#"required autocomplete="off" maxlength="6""#)
            ),
            layout::button("Join Party", "primary", Some(r#"type="submit""#)),
        ),
        None,
    )
}

/// Renders the party lobby once the party accepts joins.
pub fn party_lobby(party: &WatchParty) -> String {
    let participants = party
        .participants
        .iter()
        .map(|name| {
            format!(
                r#"<li class="flex items-center space-x-2 py-1">
                    <div class="w-2 h-2 bg-green-400 rounded-full"></div>
                    <span class="text-white text-sm">{name}</span>
                </li>"#
            )
        })
        .collect::<Vec<_>>()
        .join("");

    layout::card(
        Some(&party.title),
        &format!(
            r#"<div class="space-y-4">
                <div class="flex justify-between text-sm">
                    <span class="text-gray-400">Now playing</span>
                    <span class="text-white">{}</span>
                </div>
                <div class="flex justify-between text-sm">
                    <span class="text-gray-400">Party code</span>
                    <span class="text-marquee-400 font-mono">{}</span>
                </div>
                {}
                <ul class="pt-2">{participants}</ul>
                <div class="pt-2">{}</div>
            </div>"#,
            party.video,
            party.code,
            stats::status_indicator("ready", "Host connected, stream buffered"),
            layout::button("Enter Party", "primary", None),
        ),
        None,
    )
}

/// Renders a terminal error card for a code that cannot resolve to a party.
pub fn join_error(message: &str) -> String {
    layout::card(
        Some("Unable to Join"),
        &format!(
            r#"<p class="text-gray-400 text-sm mb-4">{message}</p>
            <a href="/join" class="text-marquee-400 hover:text-marquee-300 text-sm">Try another code</a>"#
        ),
        None,
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use marquee_core::JoinCode;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn shell_contains_literal_loading_text() {
        let html = join_shell(None);
        assert!(html.contains("Loading..."));
        assert!(html.contains(r#"hx-get="/htmx/join/content""#));
    }

    #[test]
    fn shell_forwards_code_to_partial() {
        let html = join_shell(Some("QX7M2R"));
        assert!(html.contains("/htmx/join/content?code=QX7M2R"));
    }

    #[test]
    fn lobby_lists_participants_without_placeholder() {
        let party = WatchParty {
            id: Uuid::new_v4(),
            code: JoinCode::parse("QX7M2R").unwrap(),
            title: "Movie Night".to_string(),
            host: "ava".to_string(),
            video: "Interstellar (2014)".to_string(),
            participants: vec!["ava".to_string(), "ben".to_string()],
            max_participants: 25,
            buffered_secs: 12.0,
            host_connected: true,
            created_at: Utc::now(),
        };

        let html = party_lobby(&party);
        assert!(html.contains("Movie Night"));
        assert!(html.contains("ben"));
        assert!(!html.contains("Loading..."));
    }
}
