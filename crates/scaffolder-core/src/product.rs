//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a scaffolding binary implements to
//! configure its identity, defaults and asset host.

/// Configuration trait for scaffolding products
///
/// Each product implements this trait to define:
/// - Product identity (name, display name, banner)
/// - The remote host serving wrapper files
/// - The sample project name offered as the first default
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, user agent)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// ASCII banner printed before the questions in plain mode
    fn banner(&self) -> Option<&'static str> {
        None
    }

    /// Default base URL for fetching wrapper files
    fn default_asset_url(&self) -> &'static str;

    /// Environment variable name for overriding the asset URL
    fn asset_url_env(&self) -> &'static str;

    /// Default answer for the project name question
    fn default_project_name(&self) -> &'static str;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}
