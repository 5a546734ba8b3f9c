//! Read observers
//!
//! Every successful single-record read is reported to a [`ReadObserver`].
//! The default observer does nothing; [`JsonFileObserver`] writes the record
//! to `<directory>/<Entity>JsonFile.json` in the background.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::models::Entity;

/// Receives every record fetched by identity
pub trait ReadObserver: Send + Sync {
    fn entity_read(&self, entity: &'static str, payload: Value);
}

/// Observer that ignores every read
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ReadObserver for NoopObserver {
    fn entity_read(&self, _entity: &'static str, _payload: Value) {}
}

/// Observer dumping the last record read of each type to a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileObserver {
    directory: PathBuf,
}

impl JsonFileObserver {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// File the records of `entity` are written to
    pub fn path_for(&self, entity: &str) -> PathBuf {
        self.directory.join(format!("{}JsonFile.json", entity))
    }
}

impl ReadObserver for JsonFileObserver {
    fn entity_read(&self, entity: &'static str, payload: Value) {
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                tracing::warn!("No runtime available, skipping {} dump", entity);
                return;
            }
        };

        let directory = self.directory.clone();
        let path = self.path_for(entity);
        handle.spawn(async move {
            if let Err(e) = write_dump(&directory, &path, &payload).await {
                tracing::warn!("Failed to write {}: {}", path.display(), e);
            }
        });
    }
}

pub(crate) async fn write_dump(directory: &Path, path: &Path, payload: &Value) -> std::io::Result<()> {
    tokio::fs::create_dir_all(directory).await?;
    let bytes = serde_json::to_vec_pretty(payload)?;
    tokio::fs::write(path, bytes).await
}

/// Report `entity` to `observer`
pub fn record_read<E: Entity + Serialize>(observer: &dyn ReadObserver, entity: &E) {
    match serde_json::to_value(entity) {
        Ok(payload) => observer.entity_read(E::NAME, payload),
        Err(e) => tracing::warn!("Cannot serialize {} {}: {}", E::NAME, entity.key(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<(&'static str, Value)>>);

    impl ReadObserver for Recorder {
        fn entity_read(&self, entity: &'static str, payload: Value) {
            self.0.lock().unwrap().push((entity, payload));
        }
    }

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("librarian-dump-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_record_read_passes_entity_name_and_payload() {
        let recorder = Recorder::default();
        let city = City::new("11000", "Belgrade").unwrap();
        record_read(&recorder, &city);

        let reads = recorder.0.lock().unwrap();
        assert_eq!(reads.len(), 1);
        assert_eq!(reads[0].0, "City");
        assert_eq!(reads[0].1["city_name"], "Belgrade");
    }

    #[test]
    fn test_file_name_follows_entity() {
        let observer = JsonFileObserver::new("/tmp/dumps");
        assert_eq!(
            observer.path_for("Book"),
            PathBuf::from("/tmp/dumps/BookJsonFile.json")
        );
    }

    #[test]
    fn test_observer_without_runtime_is_silent() {
        let observer = JsonFileObserver::new(scratch_dir());
        observer.entity_read("City", serde_json::json!({"postal_code": "11000"}));
    }

    #[tokio::test]
    async fn test_write_dump_creates_directory() {
        let directory = scratch_dir();
        let path = directory.join("CityJsonFile.json");
        let payload = serde_json::json!({"postal_code": "11000", "city_name": "Belgrade"});

        write_dump(&directory, &path, &payload).await.unwrap();

        let written: Value = serde_json::from_slice(&tokio::fs::read(&path).await.unwrap()).unwrap();
        assert_eq!(written, payload);
        let _ = tokio::fs::remove_dir_all(&directory).await;
    }

    #[tokio::test]
    async fn test_json_file_observer_writes_in_background() {
        let directory = scratch_dir();
        let observer = JsonFileObserver::new(&directory);
        let city = City::new("21000", "Novi Sad").unwrap();
        record_read(&observer, &city);

        let path = observer.path_for("City");
        let mut found = false;
        for _ in 0..100 {
            if let Ok(bytes) = tokio::fs::read(&path).await {
                if let Ok(value) = serde_json::from_slice::<Value>(&bytes) {
                    assert_eq!(value["city_name"], "Novi Sad");
                    found = true;
                    break;
                }
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert!(found, "dump file was not written");
        let _ = tokio::fs::remove_dir_all(&directory).await;
    }
}
