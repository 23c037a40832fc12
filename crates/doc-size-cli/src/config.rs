use anyhow::{Context, Result};
use doc_size::ResolveOptions;
use std::path::Path;

/// Load resolve options from a JSON file.
///
/// The file holds either a bare `[width, height]` array or an options
/// object such as `{ "dimensions": "a4", "units": "cm" }`.
pub async fn load_options(path: impl AsRef<Path>) -> Result<ResolveOptions> {
    let path = path.as_ref();
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let options = ResolveOptions::from_json_str(&json)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    log::debug!("Loaded options from {}: {:?}", path.display(), options);
    Ok(options)
}
