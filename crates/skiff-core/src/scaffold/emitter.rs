//! Artifact materialization onto the filesystem

use super::manifest::Artifact;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Write every artifact beneath `target_dir`, creating the directory and
/// any intermediate directories, overwriting existing files without
/// warning. Any failure aborts immediately; completed writes are not
/// rolled back. Returns the relative paths written, in artifact order.
pub async fn write_artifacts(target_dir: &Path, artifacts: &[Artifact]) -> Result<Vec<String>> {
    fs::create_dir_all(target_dir)
        .await
        .with_context(|| format!("Failed to create project directory: {}", target_dir.display()))?;

    let mut written = Vec::new();

    for artifact in artifacts {
        let target_path = target_dir.join(&artifact.relative_path);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&target_path, &artifact.content)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;

        written.push(artifact.relative_path.clone());
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_writes_nested_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("my-app");

        let artifacts = vec![
            Artifact::new("package.json", "{}\n"),
            Artifact::new("src/index.ts", "export {}\n"),
        ];

        let written = write_artifacts(&target, &artifacts).await.unwrap();
        assert_eq!(written, ["package.json", "src/index.ts"]);
        assert_eq!(
            std::fs::read_to_string(target.join("src/index.ts")).unwrap(),
            "export {}\n"
        );
    }

    #[tokio::test]
    async fn test_overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().to_path_buf();
        std::fs::write(target.join("package.json"), "old").unwrap();

        let artifacts = vec![Artifact::new("package.json", "new\n")];
        write_artifacts(&target, &artifacts).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(target.join("package.json")).unwrap(),
            "new\n"
        );
    }

    #[tokio::test]
    async fn test_creates_missing_intermediate_directories() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("deep").join("my-app");

        let artifacts = vec![Artifact::new("src/routes.ts", "export {}\n")];
        write_artifacts(&target, &artifacts).await.unwrap();

        assert!(target.join("src/routes.ts").exists());
    }
}
