//! Wrapper file provisioning for the selected UI framework

use super::{AssetFetcher, AssetSource};
use crate::config::WrapperVariant;
use crate::error::{Result, ScaffoldError};
use crate::report::Reporter;
use std::path::Path;
use tokio::fs;

/// Download the wrapper files for `variant` under `root`
///
/// Files are fetched in table order and the first failure stops the run.
/// Unknown variants are skipped with a warning and count as success.
pub async fn provision_wrapper<F, R>(
    variant: &WrapperVariant,
    root: &Path,
    source: &AssetSource,
    fetcher: &F,
    reporter: &R,
) -> Result<()>
where
    F: AssetFetcher,
    R: Reporter,
{
    let Some(directory) = variant.directory() else {
        reporter.warning("Unknown wrapper. Skipping wrapper setup.");
        return Ok(());
    };

    let wrapper_dir = root.join(directory);
    fs::create_dir_all(&wrapper_dir)
        .await
        .map_err(ScaffoldError::filesystem(&wrapper_dir))?;

    reporter.progress(&format!(
        "Downloading {} wrapper files...",
        variant.display_name()
    ));

    for asset in variant.assets() {
        let url = source.url_for(asset);
        fetcher.fetch(&url, &root.join(asset.destination)).await?;
    }

    Ok(())
}
