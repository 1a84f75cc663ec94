//! Saving and loading day plans as JSON.
//!
//! The file is the hand-off to the stopover ranking stage: a JSON array with
//! one entry per night, each an array of `{name, node_id, coord}` objects.
//! Non-ASCII station names are written as-is.

use std::path::Path;

use tracing::info;

use crate::domain::DayPlan;

/// Errors from reading or writing a plan file.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Write `days` to `path` as pretty-printed JSON.
///
/// Creates parent directories if they don't exist.
pub fn save_day_plans(path: impl AsRef<Path>, days: &[DayPlan]) -> Result<(), ExportError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
    }

    let json = serde_json::to_string_pretty(days)?;
    std::fs::write(path, json).map_err(|e| ExportError::io(path, e))?;

    info!(path = %path.display(), days = days.len(), "saved day plans");
    Ok(())
}

/// Read day plans previously written by [`save_day_plans`].
pub fn load_day_plans(path: impl AsRef<Path>) -> Result<Vec<DayPlan>, ExportError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coord, StationId, StopCandidate};
    use tempfile::tempdir;

    fn candidate(name: &str, id: &str, coord: Coord) -> StopCandidate {
        StopCandidate {
            name: name.to_string(),
            id: StationId::parse(id).unwrap(),
            coord,
        }
    }

    fn sample() -> Vec<DayPlan> {
        vec![
            DayPlan::new(vec![
                candidate("郡山", "00003116", Coord::new(37.5, 140.25)),
                candidate("矢板", "00005240", Coord::unknown()),
            ]),
            DayPlan::new(vec![candidate("仙台", "00004012", Coord::unknown())]),
        ]
    }

    #[test]
    fn save_creates_directories_and_keeps_names_readable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/plan.json");

        save_day_plans(&path, &sample()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("郡山"));
        assert!(text.contains("\"node_id\": \"00003116\""));
        assert!(text.contains("\"lat\": null"));
    }

    #[test]
    fn saved_file_has_nested_array_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan.json");
        save_day_plans(&path, &sample()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let days = value.as_array().unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].as_array().unwrap().len(), 2);
        assert_eq!(days[0][0]["name"], "郡山");
        assert_eq!(days[1][0]["coord"]["lon"], serde_json::Value::Null);

        assert_eq!(load_day_plans(&path).unwrap(), sample());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = load_day_plans(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }

    #[test]
    fn load_rejects_invalid_station_id() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"[[{"name": "x", "node_id": "", "coord": {"lat": null, "lon": null}}]]"#)
            .unwrap();

        assert!(matches!(load_day_plans(&path), Err(ExportError::Json(_))));
    }
}
