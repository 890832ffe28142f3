//! Operations content components - deployment, docs, moderation system,
//! monitoring, testing, video processing

use super::{layout, stats};

/// Renders the deployment pipeline stages.
pub fn deployment_pipeline() -> String {
    let stages = [
        ("Build", "passed", 100),
        ("Integration Tests", "passed", 100),
        ("Canary", "active", 60),
        ("Full Rollout", "pending", 0),
    ]
    .iter()
    .map(|(stage, state, pct)| {
        format!(
            r#"<div class="flex items-center justify-between py-3 border-t border-gray-700 first:border-t-0">
                <div class="flex-1">{}</div>
                <div class="w-48">{}</div>
            </div>"#,
            stats::status_indicator(state, stage),
            stats::progress_bar(*pct, None, None),
        )
    })
    .collect::<Vec<_>>()
    .join("");

    let summary = stats::stats_grid(&[
        stats::stat_card("v0.9.4", "Current Release", None, None, None),
        stats::stat_card("14m", "Last Deploy", Some("ago"), None, None),
        stats::stat_card("0", "Failed Rollouts", Some("30d"), None, Some("text-green-400")),
    ]);

    format!(
        "{summary}{}",
        layout::card(Some("Pipeline"), &stages, None)
    )
}

/// Renders the documentation manager.
pub fn documentation_manager() -> String {
    let sections = [
        ("Getting Started", "8 pages", "updated 3d ago"),
        ("Hosting a Party", "12 pages", "updated 1d ago"),
        ("Moderation Guide", "6 pages", "updated 2w ago"),
        ("API Reference", "23 pages", "updated 5h ago"),
    ]
    .iter()
    .map(|(title, pages, updated)| {
        format!(
            r##"<a href="#" class="group bg-gray-800 border border-gray-700 rounded-lg p-6 hover:border-marquee-500 transition-colors">
                <h3 class="text-white font-semibold mb-2">{title}</h3>
                <p class="text-gray-400 text-sm">{pages}</p>
                <p class="text-gray-500 text-xs mt-1">{updated}</p>
            </a>"##
        )
    })
    .collect::<Vec<_>>()
    .join("");

    layout::grid("grid-cols-1 md:grid-cols-2", &sections)
}

/// Renders the automated content moderation system.
pub fn content_moderation_system() -> String {
    let summary = stats::stats_grid(&[
        stats::stat_card("18", "Queued Items", None, None, Some("text-yellow-400")),
        stats::stat_card("97.2", "Auto-resolved", Some("%"), None, Some("text-green-400")),
        stats::stat_card("4", "Active Rules", None, None, None),
    ]);

    let rules = [
        ("Chat profanity filter", "active"),
        ("Video title screening", "active"),
        ("Invite rate limiting", "active"),
        ("Link blocklist", "warning"),
    ]
    .iter()
    .map(|(rule, state)| {
        format!(
            r#"<div class="py-2 border-t border-gray-700 first:border-t-0">{}</div>"#,
            stats::status_indicator(state, rule)
        )
    })
    .collect::<Vec<_>>()
    .join("");

    format!(
        "{summary}{}",
        layout::card(Some("Moderation Rules"), &rules, None)
    )
}

/// Renders the live monitoring dashboard.
///
/// System metrics refresh through the HTMX partial; the static shell shows
/// service indicators.
pub fn monitoring_dashboard() -> String {
    let live_metrics = r#"<div id="monitoring-stats"
           hx-get="/htmx/monitoring/stats"
           hx-trigger="load, every 5s"
           hx-swap="innerHTML">
        <div class="text-center py-8 text-gray-400">Loading metrics...</div>
    </div>"#;

    let services = format!(
        r#"<div class="space-y-3">
            {}
            {}
            {}
        </div>"#,
        stats::status_indicator("online", "Web Server"),
        stats::status_indicator("active", "Party Registry"),
        stats::status_indicator("active", "Static Assets"),
    );

    format!(
        r#"{live_metrics}
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="lg:col-span-2"></div>
            {}
        </div>"#,
        layout::card(Some("Services"), &services, None)
    )
}

/// Renders the testing suite dashboard.
pub fn testing_suite_dashboard() -> String {
    let suites = [
        ("route table", 9, 9),
        ("party registry", 7, 7),
        ("join flow", 6, 6),
        ("page rendering", 11, 10),
    ]
    .iter()
    .map(|(suite, total, passed)| {
        let state = if passed == total { "passed" } else { "failed" };
        format!(
            r#"<tr class="border-t border-gray-700">
                <td class="px-4 py-3 text-white">{suite}</td>
                <td class="px-4 py-3 text-gray-400">{passed}/{total}</td>
                <td class="px-4 py-3">{}</td>
            </tr>"#,
            stats::status_indicator(state, state)
        )
    })
    .collect::<Vec<_>>()
    .join("");

    layout::card(
        Some("Latest Run"),
        &format!(
            r#"<table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-gray-400">
                        <th class="px-4 py-2">Suite</th>
                        <th class="px-4 py-2">Passed</th>
                        <th class="px-4 py-2">Status</th>
                    </tr>
                </thead>
                <tbody>{suites}</tbody>
            </table>"#
        ),
        Some(r#"<span class="text-gray-500 text-sm">triggered by deploy</span>"#),
    )
}

/// Renders the video processing pipeline.
pub fn video_processing_pipeline() -> String {
    let jobs = [
        ("Interstellar (2014)", "1080p remux", 100),
        ("Planet Earth II E03", "720p transcode", 84),
        ("Mushishi E12", "subtitle extraction", 37),
    ]
    .iter()
    .map(|(video, kind, pct)| {
        format!(
            r#"<div class="py-4 border-t border-gray-700 first:border-t-0">
                <div class="flex justify-between text-sm mb-2">
                    <span class="text-white">{video}</span>
                    <span class="text-gray-400">{kind}</span>
                </div>
                {}
            </div>"#,
            stats::progress_bar(*pct, None, None)
        )
    })
    .collect::<Vec<_>>()
    .join("");

    let summary = stats::stats_grid(&[
        stats::stat_card("3", "Jobs Running", None, None, None),
        stats::stat_card("1.8", "Throughput", Some("x realtime"), None, None),
        stats::stat_card("0", "Failed Jobs", Some("24h"), None, Some("text-green-400")),
    ]);

    format!(
        "{summary}{}",
        layout::card(Some("Processing Queue"), &jobs, None)
    )
}
