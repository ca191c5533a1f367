use crate::errors::AppError;
use crate::models::AppData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/activities.json"))
}

/// Missing or unreadable data yields an empty collection. Parse failures are
/// logged, never surfaced: a corrupted snapshot starts the tracker empty.
pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse activities file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read activities file: {err}");
            AppData::default()
        }
    }
}

/// Overwrites the whole snapshot. No partial writes, no versioning.
pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, ActivityCategory, ActivityType};

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("climate_tracker_{tag}_{}_{nanos}.json", std::process::id()));
        path
    }

    fn sample(id: &str) -> Activity {
        Activity {
            id: id.to_string(),
            date: "2024-01-01".into(),
            category: ActivityCategory::Travel,
            kind: ActivityType::Car,
            amount: 10.0,
            unit: "km".into(),
            co2: 1.92,
        }
    }

    #[tokio::test]
    async fn load_missing_file_yields_empty_collection() {
        let data = load_data(&temp_path("missing")).await;
        assert!(data.activities.is_empty());
    }

    #[tokio::test]
    async fn load_corrupt_file_yields_empty_collection() {
        let path = temp_path("corrupt");
        fs::write(&path, b"{not json").await.unwrap();
        let data = load_data(&path).await;
        assert!(data.activities.is_empty());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persist_then_load_preserves_order() {
        let path = temp_path("roundtrip");
        let data = AppData {
            activities: vec![sample("a"), sample("b"), sample("c")],
        };

        persist_data(&path, &data).await.unwrap();
        let loaded = load_data(&path).await;
        let ids: Vec<&str> = loaded.activities.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn removal_survives_a_reload() {
        let path = temp_path("removal");
        let mut data = AppData {
            activities: vec![sample("a"), sample("b"), sample("c")],
        };
        persist_data(&path, &data).await.unwrap();

        data.activities.retain(|activity| activity.id != "b");
        persist_data(&path, &data).await.unwrap();

        let loaded = load_data(&path).await;
        let ids: Vec<&str> = loaded.activities.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        let _ = fs::remove_file(&path).await;
    }
}
