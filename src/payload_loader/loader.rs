use crate::payload_loader::payload::{Payload, PayloadError, PayloadKind};
use futures::stream::FuturesUnordered;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinError;
use tokio::{fs, task};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::ReadDirStream;
use tracing::{debug, info, instrument, warn};

#[derive(Debug)]
pub struct LoadedPayload {
    path: PathBuf,
    payload: Payload,
}

impl LoadedPayload {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        file_name(&self.path)
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }
}

/// Loads every recorded payload with the given extension from `directory`, sorted by path.
///
/// Files that cannot be read or do not validate are logged and skipped.
#[instrument]
pub async fn load_payloads_from(directory: &str, extension: &str, kind: PayloadKind) -> Result<Vec<LoadedPayload>, LoaderError> {
    info!("📁 Loading payloads...");
    let files = list_files(directory, extension)
        .await
        .map_err(|e| LoaderError::Io { source: e, path: None })?;

    let results = load_files(files, kind).await;
    let (payloads, errors): (Vec<_>, Vec<_>) = results.into_iter().partition(Result::is_ok);

    for error in errors.iter().filter_map(|res| res.as_ref().err()) {
        log_error(error);
    }

    info!("📁 Loading payloads... OK, {} loaded, {} failed", payloads.len(), errors.len());
    let mut payloads = payloads.into_iter().filter_map(Result::ok).collect::<Vec<_>>();
    payloads.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(payloads)
}

#[instrument]
async fn list_files(directory: &str, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let dir = fs::read_dir(directory).await?;
    let mut entries = ReadDirStream::new(dir);

    while let Some(entry) = entries.next().await {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
                    files.push(path);
                } else {
                    debug!("Skipping '{}'", file_name(&path));
                }
            }
            Err(err) => warn!("⚠️ Unable to read directory entry: {}", err),
        }
    }

    Ok(files)
}

#[instrument(skip_all)]
async fn load_files(paths: Vec<PathBuf>, kind: PayloadKind) -> Vec<Result<LoadedPayload, LoaderError>> {
    FuturesUnordered::from_iter(paths.into_iter().map(|path| async move {
        match fs::read_to_string(&path).await {
            Ok(content) => {
                task::spawn_blocking(move || match Payload::parse(kind, &content) {
                    Ok(payload) => Ok(LoadedPayload { path, payload }),
                    Err(source) => Err(LoaderError::Payload { source, path }),
                })
                .await?
            }
            Err(err) => Err(LoaderError::Io {
                source: err,
                path: Some(path),
            }),
        }
    }))
    .collect()
    .await
}

#[instrument(skip_all)]
fn log_error(error: &LoaderError) {
    match error {
        LoaderError::Payload { source, path } => warn!("⚠️ Failed to load '{}': {}", file_name(path), source),
        LoaderError::Io { source, path } => match path {
            Some(path) => warn!("⚠️ Failed to load '{}': {}", file_name(path), source),
            None => warn!("⚠️ {}", source),
        },
        LoaderError::JoinError(err) => warn!("⚠️ {}", err),
    }
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|s| s.to_str()).unwrap_or("unknown")
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{}", source)]
    Payload { source: PayloadError, path: PathBuf },
    #[error("{}", source)]
    Io { source: io::Error, path: Option<PathBuf> },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::ValidationErrorKind;
    use std::env::temp_dir;
    use test_log::test;

    fn resource(name: &str) -> PathBuf {
        PathBuf::from(format!("{}/tests/resources/{}", env!("CARGO_MANIFEST_DIR"), name))
    }

    #[test(tokio::test)]
    async fn list_files_returns_all_relevant_files() -> io::Result<()> {
        let dir = temp_dir().join(format!("fressnapftracker-list-files-{}", std::process::id()));
        fs::create_dir_all(&dir).await?;

        let file1 = dir.join("tracker.json");
        let file2 = dir.join("notes.txt");
        let file3 = dir.join("tracker2.json");

        fs::write(&file1, "{}").await?;
        fs::write(&file2, "text").await?;
        fs::write(&file3, "{}").await?;

        let mut files = list_files(dir.to_string_lossy().as_ref(), "json").await?;
        files.sort();
        fs::remove_dir_all(&dir).await?;

        assert_eq!(files, vec![file1, file3]);

        Ok(())
    }

    #[test(tokio::test)]
    async fn load_files_returns_a_payload_for_a_valid_file() {
        let path = resource("payloads/trackers/rex.json");
        assert!(path.is_file(), "expected path to be a file");

        let result = load_files(vec![path], PayloadKind::Tracker).await;
        assert_eq!(result.len(), 1);
        match &result[0] {
            Ok(loaded) => {
                assert_eq!(loaded.file_name(), "rex.json");
                assert!(matches!(loaded.payload(), Payload::Tracker(tracker) if tracker.name() == "Rex" && tracker.battery() == 80));
            }
            Err(err) => panic!("Expected a payload, found {:?}", err),
        }
    }

    #[test(tokio::test)]
    async fn load_files_returns_an_error_for_an_invalid_file() {
        let path = resource("payloads/trackers/missing_battery.json");
        assert!(path.is_file(), "expected path to be a file");

        let result = load_files(vec![path], PayloadKind::Tracker).await;
        assert_eq!(result.len(), 1);
        match &result[0] {
            Err(LoaderError::Payload {
                source: PayloadError::Validation(err),
                path: _,
            }) => {
                assert_eq!(err.path(), &"battery");
                assert_eq!(err.kind(), &ValidationErrorKind::Missing);
            }
            other => panic!("Expected a validation error, found {:?}", other),
        }
    }

    #[test(tokio::test)]
    async fn load_files_returns_an_error_for_a_missing_file() {
        let result = load_files(vec![resource("payloads/trackers/nope.json")], PayloadKind::Tracker).await;

        assert!(matches!(&result[0], Err(LoaderError::Io { path: Some(_), .. })));
    }

    #[test(tokio::test)]
    async fn load_payloads_from_skips_invalid_files() -> Result<(), LoaderError> {
        let directory = resource("payloads/trackers");

        let payloads = load_payloads_from(directory.to_string_lossy().as_ref(), "json", PayloadKind::Tracker).await?;

        let names = payloads.iter().map(LoadedPayload::file_name).collect::<Vec<_>>();
        assert_eq!(names, vec!["bello.json", "rex.json"]);
        assert_eq!(payloads[1].path(), directory.join("rex.json"));

        Ok(())
    }

    #[test(tokio::test)]
    async fn load_payloads_from_fails_for_a_missing_directory() {
        let result = load_payloads_from("/definitely/not/a/directory", "json", PayloadKind::Tracker).await;

        assert!(matches!(result, Err(LoaderError::Io { path: None, .. })));
    }
}
