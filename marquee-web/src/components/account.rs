//! Account and settings content components - billing, events, languages,
//! integrations, security

use super::{layout, stats};

/// Renders the billing address form.
pub fn billing_address_view() -> String {
    layout::card(
        Some("Billing Address"),
        &format!(
            r#"<form class="space-y-4">
                {}
                {}
                <div class="grid grid-cols-2 gap-4">
                    {}
                    {}
                </div>
                {}
                <div class="pt-2">{}</div>
            </form>"#,
            layout::input("line1", "Street address", "text", Some("required")),
            layout::input("line2", "Apartment, suite (optional)", "text", None),
            layout::input("city", "City", "text", Some("required")),
            layout::input("postal_code", "Postal code", "text", Some("required")),
            layout::input("country", "Country", "text", Some("required")),
            layout::button("Save Address", "primary", Some(r#"type="submit""#)),
        ),
        None,
    )
}

/// Renders the event scheduling system.
pub fn event_scheduling_system() -> String {
    let events = [
        ("Fri 20:00", "Friday Movie Night", "Interstellar (2014)"),
        ("Sat 15:00", "Retro Cartoons", "Samurai Jack marathon"),
        ("Sun 19:30", "Documentary Club", "Planet Earth II E04"),
    ]
    .iter()
    .map(|(when, party, video)| {
        format!(
            r#"<div class="flex items-center justify-between py-3 border-t border-gray-700 first:border-t-0">
                <div>
                    <div class="text-white">{party}</div>
                    <div class="text-gray-400 text-sm">{video}</div>
                </div>
                <div class="text-marquee-400 text-sm font-mono">{when}</div>
            </div>"#
        )
    })
    .collect::<Vec<_>>()
    .join("");

    let schedule_form = layout::card(
        Some("Schedule an Event"),
        &format!(
            r#"<form class="flex space-x-4">
                {}
                {}
                {}
            </form>"#,
            layout::input("title", "Event title", "text", Some("required")),
            layout::input("starts_at", "", "datetime-local", Some("required")),
            layout::button("Schedule", "primary", Some(r#"type="submit""#)),
        ),
        None,
    );

    format!(
        "{}{schedule_form}",
        layout::card(Some("Upcoming Events"), &events, None)
    )
}

/// Renders translation coverage per locale.
pub fn multi_language_system() -> String {
    let locales = [
        ("English", "en", 100),
        ("Deutsch", "de", 94),
        ("Español", "es", 88),
        ("日本語", "ja", 71),
        ("Português", "pt-BR", 63),
    ]
    .iter()
    .map(|(name, tag, pct)| {
        format!(
            r#"<div class="py-3 border-t border-gray-700 first:border-t-0">
                <div class="flex justify-between text-sm mb-2">
                    <span class="text-white">{name} <span class="text-gray-500 font-mono">{tag}</span></span>
                </div>
                {}
            </div>"#,
            stats::progress_bar(*pct, None, None)
        )
    })
    .collect::<Vec<_>>()
    .join("");

    layout::card(
        Some("Translation Coverage"),
        &locales,
        Some(r#"<span class="text-gray-500 text-sm">5 locales</span>"#),
    )
}

/// Renders API keys and connected services.
pub fn integration_api_system() -> String {
    let keys = layout::card(
        Some("API Keys"),
        &format!(
            r#"<div class="space-y-3">
                <div class="flex items-center justify-between">
                    <span class="text-white font-mono text-sm">mq_live_****4f2a</span>
                    {}
                </div>
                <div class="flex items-center justify-between">
                    <span class="text-white font-mono text-sm">mq_test_****9c1d</span>
                    {}
                </div>
            </div>"#,
            layout::button("Revoke", "danger", None),
            layout::button("Revoke", "danger", None),
        ),
        Some(r#"<button class="text-marquee-400 hover:text-marquee-300 text-sm">New Key</button>"#),
    );

    let webhooks = [
        ("party.created", "active"),
        ("party.ended", "active"),
        ("report.filed", "warning"),
    ]
    .iter()
    .map(|(event, state)| {
        format!(
            r#"<div class="py-2 border-t border-gray-700 first:border-t-0">{}</div>"#,
            stats::status_indicator(state, event)
        )
    })
    .collect::<Vec<_>>()
    .join("");

    format!(
        "{keys}{}",
        layout::card(Some("Webhooks"), &webhooks, None)
    )
}

/// Renders session and account protection settings.
pub fn advanced_security_system() -> String {
    let summary = stats::stats_grid(&[
        stats::stat_card("2", "Active Sessions", None, None, None),
        stats::stat_card("On", "Two-Factor Auth", None, None, Some("text-green-400")),
        stats::stat_card("0", "Suspicious Logins", Some("30d"), None, Some("text-green-400")),
    ]);

    let sessions = [
        ("Firefox on Linux", "this device", "active"),
        ("Mobile app", "last seen 2d ago", "warning"),
    ]
    .iter()
    .map(|(device, detail, state)| {
        format!(
            r#"<div class="flex items-center justify-between py-3 border-t border-gray-700 first:border-t-0">
                <div>
                    <div class="text-white text-sm">{device}</div>
                    <div class="text-gray-500 text-xs">{detail}</div>
                </div>
                <div class="flex items-center space-x-4">
                    {}
                    {}
                </div>
            </div>"#,
            stats::status_indicator(state, ""),
            layout::button("Sign out", "ghost", None),
        )
    })
    .collect::<Vec<_>>()
    .join("");

    format!(
        "{summary}{}",
        layout::card(Some("Sessions"), &sessions, None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn billing_form_has_required_fields() {
        let html = billing_address_view();
        assert!(html.contains(r#"name="line1""#));
        assert!(html.contains(r#"name="postal_code""#));
        assert!(html.contains("Save Address"));
    }

    #[test]
    fn language_coverage_lists_locales() {
        let html = multi_language_system();
        assert!(html.contains("Deutsch"));
        assert!(html.contains("width: 94%"));
    }
}
