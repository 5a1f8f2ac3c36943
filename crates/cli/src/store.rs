use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use league::{LeagueRegistry, persistence};

/// Read the league saved at `path`. A missing file is an empty league.
pub async fn load(path: &Path) -> Result<LeagueRegistry> {
    match tokio::fs::read(path).await {
        Ok(bytes) => {
            let registry = persistence::decode(&bytes)
                .with_context(|| format!("Failed to load league from {}", path.display()))?;
            tracing::debug!("Loaded league from {}", path.display());
            Ok(registry)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("No save file at {}, starting an empty league", path.display());
            Ok(LeagueRegistry::new())
        }
        Err(e) => Err(e).with_context(|| format!("Cannot read {}", path.display())),
    }
}

/// Write the league to `path` through a sibling temp file so an interrupted
/// save never leaves a half-written league behind.
pub async fn save(path: &Path, registry: &LeagueRegistry) -> Result<()> {
    let bytes = persistence::encode(registry).context("Failed to encode league")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Cannot create {}", parent.display()))?;
    }

    let staging = staging_path(path);
    tokio::fs::write(&staging, bytes)
        .await
        .with_context(|| format!("Cannot write {}", staging.display()))?;
    tokio::fs::rename(&staging, path)
        .await
        .with_context(|| format!("Cannot replace {}", path.display()))?;

    tracing::debug!("Saved league to {}", path.display());
    Ok(())
}

pub async fn exists(path: &Path) -> Result<bool> {
    tokio::fs::try_exists(path)
        .await
        .with_context(|| format!("Cannot inspect {}", path.display()))
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_path_is_a_sibling() {
        assert_eq!(
            staging_path(Path::new("saves/league.json")),
            PathBuf::from("saves/league.json.tmp")
        );
    }
}
