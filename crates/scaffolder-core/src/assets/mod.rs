//! Remote wrapper assets
//!
//! This module provides:
//! - The fixed table of wrapper files per variant
//! - The asset source (base URL, overridable per product)
//! - The HTTP fetcher that streams an asset onto disk
//! - Wrapper provisioning that drives the fetcher for a variant

pub mod fetcher;
pub mod wrapper;

use crate::config::WrapperVariant;
use crate::product::ProductConfig;
use anyhow::{Context, Result};
use url::Url;

pub use fetcher::{AssetFetcher, HttpFetcher};
pub use wrapper::provision_wrapper;

/// One wrapper file: where it lives on the asset host and where it lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapperAsset {
    /// File name on the asset host
    pub remote_name: &'static str,
    /// Destination relative to the project root
    pub destination: &'static str,
}

const REACT_ASSETS: &[WrapperAsset] = &[
    WrapperAsset {
        remote_name: "react-wrapper.js",
        destination: "src/wrappers/react/Wrapper.js",
    },
    WrapperAsset {
        remote_name: "react-helper.js",
        destination: "src/wrappers/react/Helper.js",
    },
];

const VUE_ASSETS: &[WrapperAsset] = &[
    WrapperAsset {
        remote_name: "vue-wrapper.js",
        destination: "src/wrappers/vue/Wrapper.js",
    },
    WrapperAsset {
        remote_name: "vue-helper.js",
        destination: "src/wrappers/vue/Helper.js",
    },
];

impl WrapperVariant {
    /// Wrapper files in fetch order; empty for unknown variants
    pub fn assets(&self) -> &'static [WrapperAsset] {
        match self {
            WrapperVariant::React => REACT_ASSETS,
            WrapperVariant::Vue => VUE_ASSETS,
            WrapperVariant::Unknown(_) => &[],
        }
    }

    /// Directory holding the variant's wrapper files
    pub fn directory(&self) -> Option<&'static str> {
        match self {
            WrapperVariant::React => Some("src/wrappers/react"),
            WrapperVariant::Vue => Some("src/wrappers/vue"),
            WrapperVariant::Unknown(_) => None,
        }
    }
}

/// Base URL that wrapper file names are resolved against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSource {
    base: Url,
}

impl AssetSource {
    /// Wrap a base URL; it must accept path segments so file names can be appended
    pub fn new(base: Url) -> Result<Self> {
        if base.cannot_be_a_base() {
            anyhow::bail!("Asset URL cannot have path segments: {}", base);
        }
        Ok(Self { base })
    }

    /// Use the product's default host unless its environment variable overrides it
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        let url_str = std::env::var(config.asset_url_env())
            .unwrap_or_else(|_| config.default_asset_url().to_string());
        let url = Url::parse(&url_str).with_context(|| format!("Invalid asset URL: {}", url_str))?;
        Self::new(url)
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Build the asset URL by appending the file name, preserving query parameters
    ///
    /// `new` only accepts bases that take path segments, so the append always applies.
    pub fn url_for(&self, asset: &WrapperAsset) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(asset.remote_name);
        }
        url
    }
}
