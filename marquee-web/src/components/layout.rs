//! Layout components - headers, cards, containers, navigation

use crate::routes::{LayoutKind, RouteBinding};

/// Renders a page header with title and optional subtitle.
///
/// Creates a header section establishing page context at the top of the main
/// content area.
pub fn page_header(title: &str, subtitle: Option<&str>, actions: Option<&str>) -> String {
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="text-gray-400 mt-2">{s}</p>"#))
        .unwrap_or_default();

    let actions_html = actions
        .map(|a| format!(r#"<div class="flex items-center space-x-4">{a}</div>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="flex items-start justify-between mb-8">
            <div>
                <h1 class="text-3xl font-bold text-white">{title}</h1>
                {subtitle_html}
            </div>
            {actions_html}
        </div>"#
    )
}

/// Renders a card container with optional header and actions.
pub fn card(title: Option<&str>, content: &str, actions: Option<&str>) -> String {
    let header_html = title
        .map(|t| {
            let actions_html = actions
                .map(|a| format!(r#"<div class="flex items-center space-x-2">{a}</div>"#))
                .unwrap_or_default();

            format!(
                r#"<div class="flex items-center justify-between mb-6">
                <h3 class="text-lg font-semibold text-white">{t}</h3>
                {actions_html}
            </div>"#
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg p-6 mb-6">
            {header_html}
            {content}
        </div>"#
    )
}

/// Renders the main navigation bar.
///
/// Highlights the active section based on the current route path.
pub fn nav_bar(active_path: &str) -> String {
    let nav_item = |href: &str, label: &str| {
        let active_class = if active_path.starts_with(href) {
            "nav-active text-marquee-500 bg-marquee-500 bg-opacity-10"
        } else {
            "text-gray-300 hover:text-marquee-500 hover:bg-gray-700"
        };

        format!(
            r#"<a href="{href}" class="px-3 py-2 rounded-md text-sm font-medium transition-colors {active_class}">{label}</a>"#
        )
    };

    format!(
        r#"<nav class="bg-gray-800 border-b border-gray-700 sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-8">
                        <a href="/admin/parties" class="text-2xl font-bold text-marquee-500">Marquee</a>
                        <div class="hidden md:flex space-x-6">
                            {}
                            {}
                            {}
                            {}
                            {}
                        </div>
                    </div>

                    <!-- Connection status -->
                    <div class="flex items-center space-x-4">
                        <div class="flex items-center space-x-2 text-sm text-gray-400">
                            <div class="w-2 h-2 bg-green-400 rounded-full status-pulse"></div>
                            <span>Live</span>
                        </div>
                    </div>
                </div>
            </div>
        </nav>"#,
        nav_item("/admin", "Admin"),
        nav_item("/dashboard/analytics", "Analytics"),
        nav_item("/dashboard/events", "Events"),
        nav_item("/dashboard/admin/monitoring", "Monitoring"),
        nav_item("/join", "Join a Party")
    )
}

/// Renders a grid container for responsive layouts.
pub fn grid(columns: &str, content: &str) -> String {
    format!(r#"<div class="grid {columns} gap-6">{content}</div>"#)
}

/// Renders a button with Tailwind styling.
pub fn button(text: &str, variant: &str, attributes: Option<&str>) -> String {
    let base_classes = "px-4 py-2 rounded-lg font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-gray-900";

    let variant_classes = match variant {
        "primary" => "bg-marquee-500 hover:bg-marquee-600 text-white focus:ring-marquee-500",
        "secondary" => "bg-gray-700 hover:bg-gray-600 text-white focus:ring-gray-500",
        "danger" => "bg-red-600 hover:bg-red-700 text-white focus:ring-red-500",
        "ghost" => "text-gray-300 hover:text-white hover:bg-gray-700 focus:ring-gray-500",
        _ => "bg-gray-600 hover:bg-gray-700 text-white focus:ring-gray-500",
    };

    let attrs = attributes.unwrap_or("");

    format!(r#"<button class="{base_classes} {variant_classes}" {attrs}>{text}</button>"#)
}

/// Renders an input field with Tailwind styling.
pub fn input(name: &str, placeholder: &str, input_type: &str, attributes: Option<&str>) -> String {
    let attrs = attributes.unwrap_or("");

    format!(
        r#"<input type="{input_type}" name="{name}" placeholder="{placeholder}"
                  class="w-full px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-marquee-500 focus:border-transparent"
                  {attrs} />"#
    )
}

/// Wraps content in the route's layout preset.
///
/// Applies the container styling class for the binding's [`LayoutKind`] and,
/// where the binding declares one, the heading block with its static
/// title/description text.
pub fn apply_layout(binding: &RouteBinding, content: &str) -> String {
    let heading = binding
        .heading
        .map(|h| page_header(h, binding.subtitle, None))
        .unwrap_or_default();

    match binding.layout {
        LayoutKind::Standard => format!(
            r#"<div class="max-w-7xl mx-auto px-4 py-8 space-y-6">
                {heading}
                {content}
            </div>"#
        ),
        LayoutKind::NarrowCentered => format!(
            r#"<div class="max-w-md mx-auto px-4 py-12 space-y-6">
                {heading}
                {content}
            </div>"#
        ),
        LayoutKind::FullWidth => format!(
            r#"<div class="w-full px-4 py-8 space-y-6">
                {heading}
                {content}
            </div>"#
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{ContentComponent, binding_for};

    #[test]
    fn standard_layout_includes_heading_text() {
        let binding = binding_for(ContentComponent::UserManagement);
        let html = apply_layout(binding, "<p>body</p>");
        assert!(html.contains("User Management"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("max-w-7xl"));
    }

    #[test]
    fn narrow_layout_without_heading_renders_content_only() {
        let binding = binding_for(ContentComponent::JoinParty);
        let html = apply_layout(binding, "<p>join</p>");
        assert!(html.contains("max-w-md"));
        assert!(!html.contains("<h1"));
    }

    #[test]
    fn nav_highlights_active_section() {
        let html = nav_bar("/dashboard/events");
        assert!(html.contains(r#"href="/dashboard/events" class="px-3 py-2 rounded-md text-sm font-medium transition-colors nav-active"#));
    }
}
