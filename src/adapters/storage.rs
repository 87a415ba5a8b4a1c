use crate::core::Storage;
use crate::utils::error::{PortalError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Filesystem-backed storage rooted at `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Resolves symlinks and requires the target to stay under the base path.
    async fn resolve_inside_base(&self, path: &str) -> Result<PathBuf> {
        let not_found = || PortalError::FileNotFound {
            path: path.to_string(),
        };

        let base = canonical(&self.base_path).await?.ok_or_else(not_found)?;
        let resolved = canonical(&self.base_path.join(path))
            .await?
            .ok_or_else(not_found)?;

        if !resolved.starts_with(&base) {
            tracing::warn!("Refusing to read {} outside {}", path, base.display());
            return Err(not_found());
        }
        Ok(resolved)
    }
}

async fn canonical(path: &Path) -> Result<Option<PathBuf>> {
    match tokio::fs::canonicalize(path).await {
        Ok(resolved) => Ok(Some(resolved)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let resolved = self.resolve_inside_base(path).await?;

        // 目錄一律視為找不到
        if !tokio::fs::metadata(&resolved).await?.is_file() {
            return Err(PortalError::FileNotFound {
                path: path.to_string(),
            });
        }

        let data = tokio::fs::read(resolved).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_read_nested_file() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write_file("nested/list.html", b"<ul></ul>").await.unwrap();
        let data = storage.read_file("nested/list.html").await.unwrap();

        assert_eq!(data, b"<ul></ul>");
    }

    #[tokio::test]
    async fn test_directory_is_not_a_file() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("assets")).unwrap();
        let storage = LocalStorage::new(dir.path());

        let result = storage.read_file("assets").await;
        assert!(matches!(result, Err(PortalError::FileNotFound { .. })));

        let result = storage.read_file("missing.html").await;
        assert!(matches!(result, Err(PortalError::FileNotFound { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlink_escaping_base_is_not_found() {
        let outer = TempDir::new().unwrap();
        std::fs::write(outer.path().join("secret.txt"), "do not serve").unwrap();
        let root = outer.path().join("public");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(root.join("inside.txt"), "ok").unwrap();
        std::os::unix::fs::symlink(outer.path().join("secret.txt"), root.join("leak.txt")).unwrap();
        std::os::unix::fs::symlink(root.join("inside.txt"), root.join("alias.txt")).unwrap();
        let storage = LocalStorage::new(&root);

        let result = storage.read_file("leak.txt").await;
        assert!(matches!(result, Err(PortalError::FileNotFound { .. })));

        // 指向根目錄內的連結仍可讀取
        assert_eq!(storage.read_file("alias.txt").await.unwrap(), b"ok");
    }
}
