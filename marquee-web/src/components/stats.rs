//! Statistics and metrics components

/// Renders a statistics card with value, label, and optional trend.
pub fn stat_card(
    value: &str,
    label: &str,
    unit: Option<&str>,
    trend: Option<&str>,
    color: Option<&str>,
) -> String {
    let unit_html = unit
        .map(|u| format!(r#"<span class="text-sm text-gray-400 ml-1">{u}</span>"#))
        .unwrap_or_default();

    let trend_html = trend
        .map(|t| format!(r#"<div class="text-xs text-gray-500 mt-1">{t}</div>"#))
        .unwrap_or_default();

    let value_color = color.unwrap_or("text-marquee-500");

    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg p-6 text-center">
            <div class="text-2xl font-bold {value_color} mb-1">
                {value}{unit_html}
            </div>
            <div class="text-gray-400 text-sm">{label}</div>
            {trend_html}
        </div>"#
    )
}

/// Renders a progress bar with percentage and optional label.
pub fn progress_bar(percentage: u32, label: Option<&str>, color: Option<&str>) -> String {
    let progress_color = color.unwrap_or("bg-marquee-500");
    let label_html = label
        .map(|l| {
            format!(
                r#"<div class="flex justify-between text-sm text-gray-400 mb-2">
            <span>{l}</span>
            <span>{percentage}%</span>
        </div>"#
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div>
            {label_html}
            <div class="w-full bg-gray-700 rounded-full h-2 overflow-hidden">
                <div class="{progress_color} h-full rounded-full transition-all duration-300 ease-out"
                     style="width: {percentage}%"></div>
            </div>
        </div>"#
    )
}

/// Renders a stats grid container.
///
/// Column count adapts to the number of cards.
pub fn stats_grid(stats: &[String]) -> String {
    let grid_cols = match stats.len() {
        1..=2 => "grid-cols-1 md:grid-cols-2",
        3..=4 => "grid-cols-2 md:grid-cols-4",
        5..=6 => "grid-cols-2 md:grid-cols-3 lg:grid-cols-6",
        _ => "grid-cols-2 md:grid-cols-4 lg:grid-cols-6",
    };

    format!(
        r#"<div class="grid {} gap-6 mb-8">
            {}
        </div>"#,
        grid_cols,
        stats.join("")
    )
}

/// Renders a metric with icon and description.
pub fn metric_item(icon: &str, value: &str, label: &str, description: Option<&str>) -> String {
    let desc_html = description
        .map(|d| format!(r#"<p class="text-xs text-gray-500 mt-1">{d}</p>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="flex items-center space-x-3 p-4 bg-gray-800 rounded-lg border border-gray-700">
            <div class="text-2xl">{icon}</div>
            <div class="flex-1">
                <div class="text-lg font-semibold text-white">{value}</div>
                <div class="text-sm text-gray-400">{label}</div>
                {desc_html}
            </div>
        </div>"#
    )
}

/// Renders a status indicator dot with label.
///
/// Supports status types: online/active/ready (green), warning/pending
/// (yellow), error/failed (red).
pub fn status_indicator(status: &str, label: &str) -> String {
    let (color_class, pulse_class) = match status {
        "online" | "active" | "ready" | "passed" => ("bg-green-400", "status-pulse"),
        "warning" | "pending" | "buffering" => ("bg-yellow-400", ""),
        "error" | "failed" | "offline" => ("bg-red-400", ""),
        _ => ("bg-gray-400", ""),
    };

    format!(
        r#"<div class="flex items-center space-x-2">
            <div class="w-2 h-2 {color_class} rounded-full {pulse_class}"></div>
            <span class="text-sm text-gray-400">{label}</span>
        </div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_card_renders_value_and_unit() {
        let html = stat_card("42", "Active Parties", Some("live"), None, None);
        assert!(html.contains("42"));
        assert!(html.contains("Active Parties"));
        assert!(html.contains("live"));
    }

    #[test]
    fn status_indicator_maps_colors() {
        assert!(status_indicator("ready", "Stream").contains("bg-green-400"));
        assert!(status_indicator("buffering", "Stream").contains("bg-yellow-400"));
        assert!(status_indicator("failed", "Stream").contains("bg-red-400"));
    }

    #[test]
    fn progress_bar_clamps_to_declared_width() {
        let html = progress_bar(73, Some("Transcode"), None);
        assert!(html.contains("width: 73%"));
        assert!(html.contains("Transcode"));
    }
}
