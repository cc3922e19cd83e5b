use anyhow::Result;
use futures::stream::{Stream, StreamExt};
use glob::glob;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// Configuration for file discovery behavior
#[derive(Debug, Clone, Default)]
pub struct DiscoveryConfig {
    /// Descend into subdirectories instead of scanning only the top level
    pub recursive: bool,
}

impl DiscoveryConfig {
    /// Glob pattern for `.txt` files under `root_dir`
    fn pattern(&self, root_dir: &Path) -> String {
        let root = glob::Pattern::escape(&root_dir.display().to_string());
        if self.recursive {
            format!("{root}/**/*.txt")
        } else {
            format!("{root}/*.txt")
        }
    }
}

/// Result of file discovery validation
#[derive(Debug, Clone)]
pub struct FileValidation {
    pub path: PathBuf,
    pub error: Option<String>,
}

/// Discovers all `.txt` files under the given root directory.
/// Returns an async stream of validated file paths.
///
/// # Arguments
/// * `root_dir` - Directory to scan
/// * `config` - Discovery configuration (recursion)
///
/// # Returns
/// Stream of `FileValidation` results containing file paths and validation status
pub fn discover_files(
    root_dir: impl AsRef<Path>,
    config: DiscoveryConfig,
) -> impl Stream<Item = Result<FileValidation>> {
    let root_path = root_dir.as_ref().to_path_buf();

    futures::stream::unfold(
        DiscoveryState::new(root_path, config),
        |mut state| async move {
            state.next_file().await.map(|result| (result, state))
        }
    )
}

/// Internal state for file discovery iteration
struct DiscoveryState {
    root_dir: PathBuf,
    config: DiscoveryConfig,
    glob_iter: Option<glob::Paths>,
}

impl DiscoveryState {
    fn new(root_dir: PathBuf, config: DiscoveryConfig) -> Self {
        Self {
            root_dir,
            config,
            glob_iter: None,
        }
    }

    async fn next_file(&mut self) -> Option<Result<FileValidation>> {
        // Initialize glob iterator on first call
        if self.glob_iter.is_none() {
            let pattern = self.config.pattern(&self.root_dir);
            debug!("Starting file discovery with pattern: {}", pattern);

            match glob(&pattern) {
                Ok(paths) => {
                    self.glob_iter = Some(paths);
                    info!("File discovery initialized for root: {}", self.root_dir.display());
                }
                Err(e) => {
                    return Some(Err(anyhow::anyhow!("Failed to create glob pattern: {}", e)));
                }
            }
        }

        let glob_iter = self.glob_iter.as_mut()?;
        loop {
            match glob_iter.next() {
                Some(Ok(path)) => {
                    debug!("Found file: {}", path.display());
                    return Some(Ok(validate_file(path).await));
                }
                Some(Err(e)) => {
                    // Unreadable directory entries are skipped, never fatal
                    warn!("Glob iteration error: {}", e);
                }
                None => {
                    info!("File discovery completed");
                    return None;
                }
            }
        }
    }
}

async fn validate_file(path: PathBuf) -> FileValidation {
    debug!("Validating file: {}", path.display());

    let error = match fs::metadata(&path).await {
        Ok(metadata) if metadata.is_file() => None,
        Ok(_) => Some(format!("Path is not a file: {}", path.display())),
        Err(e) => Some(format!("Cannot access file {}: {}", path.display(), e)),
    };

    if let Some(ref error) = error {
        warn!("{}", error);
    }

    // UTF-8 validation happens naturally when the document is read
    FileValidation { path, error }
}

/// Collect all discovered files into a Vec for easier processing
pub async fn collect_discovered_files(
    root_dir: impl AsRef<Path>,
    config: DiscoveryConfig,
) -> Result<Vec<FileValidation>> {
    let mut files = Vec::new();
    let mut stream = Box::pin(discover_files(root_dir, config));

    while let Some(result) = stream.next().await {
        files.push(result?);
    }

    let valid_count = files.iter().filter(|f| f.error.is_none()).count();
    let invalid_count = files.len() - valid_count;

    if invalid_count > 0 {
        warn!("Found {} files with validation issues", invalid_count);
    }

    info!("File discovery summary: {} valid, {} invalid", valid_count, invalid_count);

    Ok(files)
}

/// Convenience function returning only the paths that passed validation
pub async fn find_text_files<P: AsRef<Path>>(root_dir: P, config: DiscoveryConfig) -> Result<Vec<PathBuf>> {
    let validations = collect_discovered_files(root_dir, config).await?;

    Ok(validations
        .into_iter()
        .filter(|v| v.error.is_none())
        .map(|v| v.path)
        .collect())
}
