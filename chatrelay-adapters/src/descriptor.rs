//! Adapter descriptor system.
//!
//! A descriptor contains all the static configuration for a platform:
//! - Metadata (display name, home page)
//! - URL routes (which hosts it serves)
//! - Extract plan (how to read a conversation)
//! - Input plan (where the composer lives)

use chatrelay_core::PlatformKind;
use chatrelay_dom::{ExtractPipeline, ExtractSettings, InputLocator};
use serde::Serialize;

// ============================================================================
// Adapter Descriptor
// ============================================================================

/// Complete descriptor for a platform adapter.
pub struct AdapterDescriptor {
    /// Platform identifier.
    pub id: PlatformKind,
    /// Display metadata.
    pub metadata: AdapterMetadata,
    /// URL routing.
    pub routes: RouteConfig,
    /// How to extract a conversation.
    pub extract_plan: ExtractPlan,
    /// How to find the composer.
    pub input: InputPlan,
}

impl AdapterDescriptor {
    /// Creates a new descriptor builder.
    pub fn builder(id: PlatformKind) -> AdapterDescriptorBuilder {
        AdapterDescriptorBuilder::new(id)
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &str {
        &self.metadata.display_name
    }

    /// Builds the extraction pipeline for this platform.
    pub fn build_pipeline(&self, settings: &ExtractSettings) -> ExtractPipeline {
        (self.extract_plan.build_pipeline)(settings)
    }

    /// Builds the input locator for this platform.
    pub fn input_locator(&self) -> InputLocator {
        InputLocator::new(self.input.selectors)
    }

    /// Returns true if this adapter serves `host` (exact or subdomain).
    pub fn serves_host(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        self.routes.hosts.iter().any(|route| {
            host == *route
                || host
                    .strip_suffix(route)
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    }

    /// Serializable summary for listings.
    pub fn summary(&self) -> AdapterSummary {
        AdapterSummary {
            id: self.id.id(),
            display_name: self.metadata.display_name.clone(),
            home_url: self.metadata.home_url.clone(),
            hosts: self.routes.hosts.to_vec(),
            site_specific: self.extract_plan.site_specific,
            strategies: self
                .build_pipeline(&ExtractSettings::default())
                .strategy_ids()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl std::fmt::Debug for AdapterDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterDescriptor")
            .field("id", &self.id)
            .field("hosts", &self.routes.hosts)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// Display metadata for a platform.
#[derive(Debug, Clone)]
pub struct AdapterMetadata {
    /// Human-readable name ("Meta AI").
    pub display_name: String,
    /// Landing page.
    pub home_url: String,
}

impl AdapterMetadata {
    /// Default metadata derived from the platform kind.
    pub fn for_platform(id: PlatformKind) -> Self {
        Self {
            display_name: id.display_name().to_string(),
            home_url: id.home_url().to_string(),
        }
    }
}

// ============================================================================
// Route Config
// ============================================================================

/// Hosts served by an adapter.
#[derive(Debug, Clone, Default)]
pub struct RouteConfig {
    /// Registrable hosts; subdomains match too.
    pub hosts: &'static [&'static str],
}

// ============================================================================
// Extract Plan
// ============================================================================

/// Configuration for how to extract a conversation.
pub struct ExtractPlan {
    /// Whether the platform has its own selectors (vs. the generic chain).
    pub site_specific: bool,
    /// Function to build the extraction pipeline.
    pub build_pipeline: fn(&ExtractSettings) -> ExtractPipeline,
}

impl Default for ExtractPlan {
    fn default() -> Self {
        Self {
            site_specific: false,
            build_pipeline: |_| ExtractPipeline::new(),
        }
    }
}

// ============================================================================
// Input Plan
// ============================================================================

/// Ordered composer selectors.
#[derive(Debug, Clone, Default)]
pub struct InputPlan {
    /// Selectors tried in order.
    pub selectors: &'static [&'static str],
}

// ============================================================================
// Summary
// ============================================================================

/// Serializable view of a descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct AdapterSummary {
    /// Platform id.
    pub id: &'static str,
    /// Display name.
    pub display_name: String,
    /// Landing page.
    pub home_url: String,
    /// Hosts served.
    pub hosts: Vec<&'static str>,
    /// Whether site-specific selectors exist.
    pub site_specific: bool,
    /// Strategy ids in evaluation order.
    pub strategies: Vec<String>,
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`AdapterDescriptor`].
pub struct AdapterDescriptorBuilder {
    id: PlatformKind,
    metadata: Option<AdapterMetadata>,
    routes: RouteConfig,
    extract_plan: ExtractPlan,
    input: InputPlan,
}

impl AdapterDescriptorBuilder {
    /// Creates a new builder for the given platform.
    pub fn new(id: PlatformKind) -> Self {
        Self {
            id,
            metadata: None,
            routes: RouteConfig::default(),
            extract_plan: ExtractPlan::default(),
            input: InputPlan::default(),
        }
    }

    /// Sets the metadata.
    #[must_use]
    pub fn metadata(mut self, metadata: AdapterMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Sets the hosts served.
    #[must_use]
    pub fn hosts(mut self, hosts: &'static [&'static str]) -> Self {
        self.routes = RouteConfig { hosts };
        self
    }

    /// Sets the extract plan.
    #[must_use]
    pub fn extract_plan(mut self, plan: ExtractPlan) -> Self {
        self.extract_plan = plan;
        self
    }

    /// Sets the composer selectors.
    #[must_use]
    pub fn input_selectors(mut self, selectors: &'static [&'static str]) -> Self {
        self.input = InputPlan { selectors };
        self
    }

    /// Builds the descriptor.
    pub fn build(self) -> AdapterDescriptor {
        AdapterDescriptor {
            id: self.id,
            metadata: self
                .metadata
                .unwrap_or_else(|| AdapterMetadata::for_platform(self.id)),
            routes: self.routes,
            extract_plan: self.extract_plan,
            input: self.input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let desc = AdapterDescriptor::builder(PlatformKind::You).hosts(&["you.com"]).build();
        assert_eq!(desc.display_name(), "You.com");
        assert!(desc.build_pipeline(&ExtractSettings::default()).is_empty());
        assert!(desc.input.selectors.is_empty());
    }

    #[test]
    fn test_serves_host() {
        let desc = AdapterDescriptor::builder(PlatformKind::ChatGpt)
            .hosts(&["chatgpt.com", "chat.openai.com"])
            .build();
        assert!(desc.serves_host("chatgpt.com"));
        assert!(desc.serves_host("www.chatgpt.com"));
        assert!(desc.serves_host("CHAT.OPENAI.COM"));
        assert!(!desc.serves_host("notchatgpt.com"));
        assert!(!desc.serves_host("openai.com"));
    }
}
