//! Static route table binding every page path to its metadata, layout
//! preset, and content component.
//!
//! The table is built once at compile time and never mutated; it is the
//! single place a path, its document metadata, and its component meet.
//! Path parameters are forwarded to components verbatim - no validation or
//! coercion happens at this layer.

/// Document metadata declared for a route, consumed by the head renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMetadata {
    pub title: &'static str,
    pub description: &'static str,
}

/// Container styling preset applied around a content component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Vertical stack with a heading block above the content
    Standard,
    /// Centered narrow column
    NarrowCentered,
    /// Full-width container, no width cap
    FullWidth,
}

/// The content components a route can bind.
///
/// Each is an opaque renderable unit living in [`crate::components`]; pages
/// never reach inside them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentComponent {
    ModerationReports,
    AdminPartiesView,
    UserManagement,
    DeploymentPipeline,
    DocumentationManager,
    ContentModerationSystem,
    MonitoringDashboard,
    TestingSuiteDashboard,
    VideoProcessingPipeline,
    AdvancedAnalyticsDashboard,
    VideoAnalyticsView,
    BillingAddressView,
    EventSchedulingSystem,
    MultiLanguageSystem,
    IntegrationApiSystem,
    AdvancedSecuritySystem,
    JoinParty,
}

/// Binding of one path to at most one metadata record and exactly one
/// content component.
#[derive(Debug, Clone, Copy)]
pub struct RouteBinding {
    /// Path pattern in axum syntax; parameters appear as `{name}`
    pub path: &'static str,
    pub metadata: Option<RouteMetadata>,
    /// Heading text rendered in the layout wrapper, where the layout has one
    pub heading: Option<&'static str>,
    pub subtitle: Option<&'static str>,
    pub layout: LayoutKind,
    pub component: ContentComponent,
}

/// Every page route the server exposes.
pub const ROUTE_TABLE: &[RouteBinding] = &[
    RouteBinding {
        path: "/admin/moderation/reports",
        metadata: Some(RouteMetadata {
            title: "Moderation Reports",
            description: "Review and resolve user-submitted moderation reports",
        }),
        heading: Some("Moderation Reports"),
        subtitle: Some("Review and resolve user-submitted reports"),
        layout: LayoutKind::Standard,
        component: ContentComponent::ModerationReports,
    },
    RouteBinding {
        path: "/admin/parties",
        metadata: Some(RouteMetadata {
            title: "Watch Parties",
            description: "Administer all active watch parties",
        }),
        heading: Some("Watch Parties"),
        subtitle: Some("All active parties across the platform"),
        layout: LayoutKind::Standard,
        component: ContentComponent::AdminPartiesView,
    },
    RouteBinding {
        path: "/admin/users",
        metadata: Some(RouteMetadata {
            title: "User Management",
            description: "Search, inspect, and manage user accounts",
        }),
        heading: Some("User Management"),
        subtitle: Some("Search and manage user accounts"),
        layout: LayoutKind::Standard,
        component: ContentComponent::UserManagement,
    },
    RouteBinding {
        path: "/dashboard/admin/deployment",
        metadata: Some(RouteMetadata {
            title: "Deployment Pipeline",
            description: "Release stages and deployment health",
        }),
        heading: Some("Deployment Pipeline"),
        subtitle: Some("Release stages and rollout status"),
        layout: LayoutKind::Standard,
        component: ContentComponent::DeploymentPipeline,
    },
    RouteBinding {
        path: "/dashboard/admin/documentation",
        metadata: Some(RouteMetadata {
            title: "Documentation",
            description: "Manage platform documentation and guides",
        }),
        heading: Some("Documentation"),
        subtitle: Some("Platform guides and internal docs"),
        layout: LayoutKind::Standard,
        component: ContentComponent::DocumentationManager,
    },
    RouteBinding {
        path: "/dashboard/admin/moderation",
        metadata: Some(RouteMetadata {
            title: "Content Moderation",
            description: "Automated moderation queue and rule configuration",
        }),
        heading: Some("Content Moderation"),
        subtitle: Some("Moderation queue and rules"),
        layout: LayoutKind::Standard,
        component: ContentComponent::ContentModerationSystem,
    },
    RouteBinding {
        path: "/dashboard/admin/monitoring",
        metadata: Some(RouteMetadata {
            title: "Monitoring",
            description: "Live system health and resource usage",
        }),
        heading: Some("Monitoring"),
        subtitle: Some("Live system health"),
        layout: LayoutKind::FullWidth,
        component: ContentComponent::MonitoringDashboard,
    },
    RouteBinding {
        path: "/dashboard/admin/testing",
        metadata: Some(RouteMetadata {
            title: "Testing Suite",
            description: "Test suite runs and coverage",
        }),
        heading: Some("Testing Suite"),
        subtitle: Some("Suite runs and coverage"),
        layout: LayoutKind::Standard,
        component: ContentComponent::TestingSuiteDashboard,
    },
    RouteBinding {
        path: "/dashboard/admin/video-processing",
        metadata: Some(RouteMetadata {
            title: "Video Processing",
            description: "Transcode jobs and processing throughput",
        }),
        heading: Some("Video Processing"),
        subtitle: Some("Transcode jobs and throughput"),
        layout: LayoutKind::Standard,
        component: ContentComponent::VideoProcessingPipeline,
    },
    RouteBinding {
        path: "/dashboard/analytics/advanced",
        metadata: Some(RouteMetadata {
            title: "Advanced Analytics",
            description: "Platform-wide engagement and viewing analytics",
        }),
        heading: Some("Advanced Analytics"),
        subtitle: Some("Engagement across all parties"),
        layout: LayoutKind::FullWidth,
        component: ContentComponent::AdvancedAnalyticsDashboard,
    },
    RouteBinding {
        path: "/dashboard/analytics/video/{video_id}",
        metadata: Some(RouteMetadata {
            title: "Video Analytics",
            description: "Viewing analytics for a single video",
        }),
        heading: Some("Video Analytics"),
        subtitle: Some("Per-video viewing breakdown"),
        layout: LayoutKind::Standard,
        component: ContentComponent::VideoAnalyticsView,
    },
    RouteBinding {
        path: "/dashboard/billing/address",
        metadata: Some(RouteMetadata {
            title: "Billing Address",
            description: "Update the billing address on your account",
        }),
        heading: Some("Billing Address"),
        subtitle: Some("Update your billing details"),
        layout: LayoutKind::NarrowCentered,
        component: ContentComponent::BillingAddressView,
    },
    RouteBinding {
        path: "/dashboard/events",
        metadata: Some(RouteMetadata {
            title: "Events",
            description: "Schedule and manage upcoming watch events",
        }),
        heading: Some("Events"),
        subtitle: Some("Upcoming scheduled watch events"),
        layout: LayoutKind::Standard,
        component: ContentComponent::EventSchedulingSystem,
    },
    RouteBinding {
        path: "/dashboard/i18n",
        metadata: Some(RouteMetadata {
            title: "Languages",
            description: "Translation coverage and language settings",
        }),
        heading: Some("Languages"),
        subtitle: Some("Translation coverage per locale"),
        layout: LayoutKind::Standard,
        component: ContentComponent::MultiLanguageSystem,
    },
    RouteBinding {
        path: "/dashboard/integrations",
        metadata: Some(RouteMetadata {
            title: "Integrations",
            description: "API keys, webhooks, and connected services",
        }),
        heading: Some("Integrations"),
        subtitle: Some("API keys and connected services"),
        layout: LayoutKind::Standard,
        component: ContentComponent::IntegrationApiSystem,
    },
    RouteBinding {
        path: "/dashboard/security/advanced",
        metadata: Some(RouteMetadata {
            title: "Security",
            description: "Sessions, two-factor auth, and audit trail",
        }),
        heading: Some("Security"),
        subtitle: Some("Sessions and account protection"),
        layout: LayoutKind::Standard,
        component: ContentComponent::AdvancedSecuritySystem,
    },
    RouteBinding {
        path: "/join",
        metadata: None,
        heading: None,
        subtitle: None,
        layout: LayoutKind::NarrowCentered,
        component: ContentComponent::JoinParty,
    },
];

/// Reverse lookup from component to its binding.
///
/// # Panics
/// Panics if the component is missing from [`ROUTE_TABLE`]; the table's
/// totality is enforced by tests.
pub fn binding_for(component: ContentComponent) -> &'static RouteBinding {
    ROUTE_TABLE
        .iter()
        .find(|binding| binding.component == component)
        .expect("every content component is registered in ROUTE_TABLE")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn table_lists_all_seventeen_routes() {
        assert_eq!(ROUTE_TABLE.len(), 17);
    }

    #[test]
    fn paths_are_unique() {
        let paths: HashSet<&str> = ROUTE_TABLE.iter().map(|b| b.path).collect();
        assert_eq!(paths.len(), ROUTE_TABLE.len());
    }

    #[test]
    fn binding_is_injective() {
        let components: HashSet<ContentComponent> =
            ROUTE_TABLE.iter().map(|b| b.component).collect();
        assert_eq!(components.len(), ROUTE_TABLE.len());
    }

    #[test]
    fn every_component_resolves_to_a_binding() {
        for binding in ROUTE_TABLE {
            assert_eq!(binding_for(binding.component).path, binding.path);
        }
    }

    #[test]
    fn declared_metadata_matches_registration() {
        let binding = binding_for(ContentComponent::ModerationReports);
        let metadata = binding.metadata.unwrap();
        assert_eq!(metadata.title, "Moderation Reports");
        assert_eq!(binding.heading, Some("Moderation Reports"));

        let users = binding_for(ContentComponent::UserManagement);
        assert_eq!(users.metadata.unwrap().title, "User Management");
    }

    #[test]
    fn join_route_is_narrow_and_headingless() {
        let join = binding_for(ContentComponent::JoinParty);
        assert_eq!(join.path, "/join");
        assert_eq!(join.layout, LayoutKind::NarrowCentered);
        assert!(join.metadata.is_none());
        assert!(join.heading.is_none());
    }

    #[test]
    fn video_route_declares_its_parameter() {
        let video = binding_for(ContentComponent::VideoAnalyticsView);
        assert!(video.path.ends_with("/{video_id}"));
    }
}
