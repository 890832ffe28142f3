//! Full page handlers composed from the route table
//!
//! Each handler resolves its route binding, invokes the bound content
//! component, wraps it in the binding's layout preset, and renders the full
//! document with the declared metadata. All pages share the same base
//! template with HTMX and Tailwind CSS.

pub mod account;
pub mod admin;
pub mod analytics;
pub mod join;
pub mod operations;

pub use account::{
    billing_address_page, events_page, i18n_page, integrations_page, security_page,
};
pub use admin::{admin_parties_page, moderation_reports_page, user_management_page};
pub use analytics::{advanced_analytics_page, video_analytics_page};
pub use join::join_page;
pub use operations::{
    content_moderation_page, deployment_page, documentation_page, monitoring_page, testing_page,
    video_processing_page,
};

use axum::response::Html;

use crate::components::layout;
use crate::routes::RouteBinding;

/// Renders a full page for a route binding.
///
/// Applies the binding's layout preset around the component output and sets
/// the document title and description from the declared metadata. Routes
/// without metadata fall back to the bare site title.
pub(crate) fn render_page(binding: &RouteBinding, component_html: &str) -> Html<String> {
    let (title, description_meta) = match binding.metadata {
        Some(metadata) => (
            format!("{} - Marquee", metadata.title),
            format!(
                r#"<meta name="description" content="{}">"#,
                metadata.description
            ),
        ),
        None => ("Marquee".to_string(), String::new()),
    };

    let body = layout::apply_layout(binding, component_html);

    Html(format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <meta name="viewport" content="width=device-width, initial-scale=1.0">
            <title>{title}</title>
            {description_meta}
            <link rel="stylesheet" href="/static/css/main.css">
            <script src="https://unpkg.com/htmx.org@1.9.10"></script>
            <script src="https://cdn.tailwindcss.com"></script>
            <script>
                tailwind.config = {{
                    theme: {{
                        extend: {{
                            colors: {{
                                'marquee': {{
                                    '50': '#faf5ff',
                                    '400': '#c084fc',
                                    '500': '#a855f7',
                                    '600': '#9333ea',
                                }}
                            }}
                        }}
                    }}
                }}
            </script>
        </head>
        <body class="bg-gray-900 text-white min-h-screen">
            {}
            <main>
                {body}
            </main>
        </body>
        </html>"#,
        layout::nav_bar(binding.path),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{ContentComponent, binding_for};

    #[test]
    fn declared_metadata_lands_in_head() {
        let binding = binding_for(ContentComponent::ModerationReports);
        let Html(page) = render_page(binding, "<p>x</p>");
        assert!(page.contains("<title>Moderation Reports - Marquee</title>"));
        assert!(
            page.contains(r#"content="Review and resolve user-submitted moderation reports""#)
        );
    }

    #[test]
    fn missing_metadata_falls_back_to_site_title() {
        let binding = binding_for(ContentComponent::JoinParty);
        let Html(page) = render_page(binding, "<p>x</p>");
        assert!(page.contains("<title>Marquee</title>"));
        assert!(!page.contains(r#"meta name="description""#));
    }
}
