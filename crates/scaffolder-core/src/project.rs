//! End-to-end project provisioning
//!
//! Steps run strictly in order and the first error stops the run. Nothing is
//! rolled back: directories and files written before a failure stay on disk.

use crate::assets::{provision_wrapper, AssetFetcher, AssetSource};
use crate::config::RunConfig;
use crate::error::{Result, ScaffoldError};
use crate::report::Reporter;
use crate::templates::{self, GeneratedFile};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Fixed subdirectories created under every project root
pub const SUBDIRECTORIES: &[&str] = &["src", "src/wrappers", "public"];

/// Drives the provisioning pipeline for one run
pub struct ProjectBuilder<F, R> {
    parent: PathBuf,
    source: AssetSource,
    fetcher: F,
    reporter: R,
}

impl<F: AssetFetcher, R: Reporter> ProjectBuilder<F, R> {
    /// `parent` is the directory the project root is created in
    pub fn new(parent: impl Into<PathBuf>, source: AssetSource, fetcher: F, reporter: R) -> Self {
        Self {
            parent: parent.into(),
            source,
            fetcher,
            reporter,
        }
    }

    /// Create the project described by `config`, returning its root
    pub async fn provision(&self, config: &RunConfig) -> Result<PathBuf> {
        let root_path = self.parent.join(&config.project_name);
        fs::create_dir_all(&root_path)
            .await
            .map_err(ScaffoldError::filesystem(&root_path))?;

        let root = enter(&root_path).await?;

        for dir in SUBDIRECTORIES {
            let path = root.join(dir);
            fs::create_dir_all(&path)
                .await
                .map_err(ScaffoldError::filesystem(&path))?;
        }

        write_file(
            &root,
            &templates::package_json(config.use_typescript, config.install_motion),
        )
        .await?;

        // Its presence is what marks a TypeScript project
        if config.use_typescript {
            write_file(&root, &templates::tsconfig()).await?;
        }

        provision_wrapper(
            &config.wrapper,
            &root,
            &self.source,
            &self.fetcher,
            &self.reporter,
        )
        .await?;

        write_file(&root, &templates::readme(&config.project_name)).await?;

        self.report_next_steps(&config.project_name);

        Ok(root)
    }

    fn report_next_steps(&self, project_name: &str) {
        self.reporter.success("Project directories created.");
        self.reporter.info("Next steps:");
        self.reporter.step(&format!("1) cd {}", project_name));
        self.reporter
            .step("2) Install dependencies: npm install (or yarn install)");
        self.reporter
            .step("3) Start building your fancy Motion project!");
    }
}

/// Resolve the freshly created root into the working context for later steps
async fn enter(root: &Path) -> Result<PathBuf> {
    let resolved = fs::canonicalize(root)
        .await
        .map_err(ScaffoldError::filesystem(root))?;
    let metadata = fs::metadata(&resolved)
        .await
        .map_err(ScaffoldError::filesystem(&resolved))?;

    if !metadata.is_dir() {
        return Err(ScaffoldError::Filesystem {
            path: resolved,
            source: std::io::Error::other("not a directory"),
        });
    }

    Ok(resolved)
}

async fn write_file(root: &Path, file: &GeneratedFile) -> Result<()> {
    let path = root.join(file.path);
    fs::write(&path, &file.content)
        .await
        .map_err(ScaffoldError::filesystem(&path))
}
