//! Scaffolder Core - Shared library for Motion project scaffolding
//!
//! This library collects a handful of answers, then lays out a project
//! directory, renders its configuration and documentation files, and pulls
//! the selected UI wrapper files from a remote host.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Template rendering, asset fetching, wrapper provisioning
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and `ProjectBuilder`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{AssetSource, HttpFetcher, ProjectBuilder, RunConfig, ConsoleReporter};
//!
//! let config = RunConfig::from_answers("acme", "yes", "yes", "vue");
//! let fetcher = HttpFetcher::new("motion", ConsoleReporter);
//! let builder = ProjectBuilder::new(".", AssetSource::from_config(&MyConfig)?, fetcher, ConsoleReporter);
//! let root = builder.provision(&config).await?;
//! ```

pub mod assets;
pub mod config;
pub mod error;
pub mod product;
pub mod project;
pub mod prompt;
pub mod report;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use assets::{provision_wrapper, AssetFetcher, AssetSource, HttpFetcher, WrapperAsset};
pub use config::{RunConfig, WrapperVariant};
pub use error::ScaffoldError;
pub use product::ProductConfig;
pub use project::ProjectBuilder;
pub use prompt::{collect_answers, normalize_answer, LinePrompter, Prompter};
pub use report::{ConsoleReporter, Level, RecordingReporter, Reporter};
pub use templates::GeneratedFile;

#[cfg(feature = "tui")]
pub use tui::run;
