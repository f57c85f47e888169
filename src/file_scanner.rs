use crate::core::FileSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use walkdir::WalkDir;

/// `git ls-files` で追跡対象ファイルを列挙する
///
/// `-z` でNUL区切りにし、非ASCIIのパスがクォートされないようにする。
#[derive(Debug, Clone, Default)]
pub struct GitFileSource;

impl GitFileSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileSource for GitFileSource {
    async fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let output = Command::new("git")
            .args(["ls-files", "-z"])
            .current_dir(root)
            .output()
            .await
            .with_context(|| format!("Failed to run git ls-files in: {}", root.display()))?;

        if !output.status.success() {
            anyhow::bail!(
                "git ls-files failed in {}: {}",
                root.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .split('\0')
            .filter(|entry| !entry.is_empty())
            .map(PathBuf::from)
            .collect())
    }

    fn name(&self) -> &'static str {
        "git"
    }
}

/// ディレクトリを再帰的に走査する（`.git` は除外）
#[derive(Debug, Clone, Default)]
pub struct WalkdirFileSource;

impl WalkdirFileSource {
    pub fn new() -> Self {
        Self
    }

    pub fn scan_directory(directory: &Path) -> Result<Vec<PathBuf>> {
        let mut file_paths = Vec::new();

        let walker = WalkDir::new(directory)
            .sort_by(|a, b| a.file_name().cmp(b.file_name()))
            .into_iter()
            .filter_entry(|entry| entry.file_name() != ".git");

        for entry in walker {
            let entry = entry?;

            if entry.file_type().is_file() {
                let relative = entry
                    .path()
                    .strip_prefix(directory)
                    .unwrap_or(entry.path())
                    .to_path_buf();
                file_paths.push(relative);
            }
        }

        Ok(file_paths)
    }
}

#[async_trait]
impl FileSource for WalkdirFileSource {
    async fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let root = root.to_path_buf();
        tokio::task::spawn_blocking(move || Self::scan_directory(&root)).await?
    }

    fn name(&self) -> &'static str {
        "walkdir"
    }
}

/// 主ソースが失敗した場合に副ソースへ切り替える
pub struct FallbackFileSource<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> FallbackFileSource<P, S>
where
    P: FileSource,
    S: FileSource,
{
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl FallbackFileSource<GitFileSource, WalkdirFileSource> {
    /// git管理下ならgit、そうでなければディレクトリ走査
    pub fn standard() -> Self {
        Self::new(GitFileSource::new(), WalkdirFileSource::new())
    }
}

#[async_trait]
impl<P, S> FileSource for FallbackFileSource<P, S>
where
    P: FileSource,
    S: FileSource,
{
    async fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        match self.primary.list_files(root).await {
            Ok(files) => Ok(files),
            Err(error) => {
                tracing::warn!(
                    source = self.primary.name(),
                    fallback = self.secondary.name(),
                    error = %error,
                    "file listing failed, falling back"
                );
                self.secondary.list_files(root).await
            }
        }
    }

    fn name(&self) -> &'static str {
        self.primary.name()
    }
}
