//! Adapter registry for managing all platform descriptors.
//!
//! The registry provides static access to every adapter and resolves page
//! URLs to the adapter that serves them.

use std::collections::HashMap;
use std::sync::OnceLock;

use chatrelay_core::PlatformKind;
use tracing::debug;
use url::Url;

use crate::chatgpt::chatgpt_descriptor;
use crate::claude::claude_descriptor;
use crate::descriptor::AdapterDescriptor;
use crate::error::AdapterError;
use crate::gemini::gemini_descriptor;
use crate::generic::{copilot_descriptor, meta_descriptor, perplexity_descriptor, you_descriptor};
use crate::grok::grok_descriptor;
use crate::poe::poe_descriptor;

// ============================================================================
// Static Registry
// ============================================================================

/// Static storage for all adapter descriptors.
static DESCRIPTORS: OnceLock<Vec<AdapterDescriptor>> = OnceLock::new();

/// Static storage for id to platform mapping.
static ID_MAP: OnceLock<HashMap<&'static str, PlatformKind>> = OnceLock::new();

/// Initializes all adapter descriptors.
///
/// Order matters for URL resolution: the first adapter serving a host wins.
/// 1. Site-specific adapters (Claude, ChatGPT, Gemini, Grok)
/// 2. Generic-chain adapters (Perplexity, Copilot)
/// 3. Poe
/// 4. Generic-chain adapters (Meta AI, You.com)
fn init_descriptors() -> Vec<AdapterDescriptor> {
    vec![
        claude_descriptor(),
        chatgpt_descriptor(),
        gemini_descriptor(),
        grok_descriptor(),
        perplexity_descriptor(),
        copilot_descriptor(),
        poe_descriptor(),
        meta_descriptor(),
        you_descriptor(),
    ]
}

/// Builds the id to platform mapping.
fn build_id_map(descriptors: &[AdapterDescriptor]) -> HashMap<&'static str, PlatformKind> {
    descriptors.iter().map(|d| (d.id.id(), d.id)).collect()
}

// ============================================================================
// Adapter Registry
// ============================================================================

/// Global registry of all adapter descriptors.
pub struct AdapterRegistry;

impl AdapterRegistry {
    /// Returns all adapter descriptors.
    pub fn all() -> &'static [AdapterDescriptor] {
        DESCRIPTORS.get_or_init(init_descriptors)
    }

    /// Gets an adapter descriptor by platform.
    pub fn get(id: PlatformKind) -> Option<&'static AdapterDescriptor> {
        Self::all().iter().find(|d| d.id == id)
    }

    /// Returns the id to platform mapping.
    pub fn id_map() -> &'static HashMap<&'static str, PlatformKind> {
        ID_MAP.get_or_init(|| build_id_map(Self::all()))
    }

    /// Looks up an adapter by platform id (`"chatgpt"`, `"meta"`, ...).
    pub fn get_by_id(id: &str) -> Option<&'static AdapterDescriptor> {
        let kind = Self::id_map().get(id.trim().to_ascii_lowercase().as_str())?;
        Self::get(*kind)
    }

    /// Resolves the adapter serving a page URL.
    ///
    /// Parses the URL and matches its host (or a subdomain of it). Strings
    /// that do not parse as URLs are matched by substring, so `claude.ai/chat`
    /// still resolves.
    pub fn for_url(url: &str) -> Option<&'static AdapterDescriptor> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }

        let found = match Url::parse(url) {
            Ok(parsed) => {
                let host = parsed.host_str()?;
                Self::all().iter().find(|d| d.serves_host(host))
            }
            Err(error) => {
                debug!(url, error = %error, "Not a URL, matching by substring");
                let lowered = url.to_ascii_lowercase();
                Self::all()
                    .iter()
                    .find(|d| d.routes.hosts.iter().any(|host| lowered.contains(host)))
            }
        };

        debug!(url, platform = ?found.map(|d| d.id), "Resolved adapter");
        found
    }

    /// Resolves an explicit platform id, else the URL.
    pub fn resolve(
        platform: Option<&str>,
        url: Option<&str>,
    ) -> Result<&'static AdapterDescriptor, AdapterError> {
        if let Some(id) = platform {
            return Self::get_by_id(id).ok_or_else(|| AdapterError::UnknownPlatform(id.to_string()));
        }
        let url = url.unwrap_or_default();
        Self::for_url(url).ok_or_else(|| AdapterError::UnsupportedUrl(url.to_string()))
    }

    /// Returns the number of registered adapters.
    pub fn count() -> usize {
        Self::all().len()
    }

    /// Returns all platform kinds.
    pub fn kinds() -> Vec<PlatformKind> {
        Self::all().iter().map(|d| d.id).collect()
    }

    /// Returns adapters with site-specific selectors.
    pub fn site_specific() -> Vec<&'static AdapterDescriptor> {
        Self::all()
            .iter()
            .filter(|d| d.extract_plan.site_specific)
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
