//! JSON documents read from disk: the behavioral snapshot and stage lists.

use std::path::Path;

use anyhow::Context;
use forge_core::behavior::BehaviorSnapshot;
use forge_core::entities::ExistingStage;
use serde::de::DeserializeOwned;

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} file '{}'", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid {what} JSON in '{}'", path.display()))
}

/// Load the snapshot at `path`, or an empty snapshot when none is given.
pub fn read_snapshot(path: Option<&Path>) -> anyhow::Result<BehaviorSnapshot> {
    path.map_or_else(
        || Ok(BehaviorSnapshot::default()),
        |path| read_json(path, "snapshot"),
    )
}

/// Load an `ExistingStage` array.
pub fn read_stages(path: &Path) -> anyhow::Result<Vec<ExistingStage>> {
    read_json(path, "stages")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn json_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn snapshot_reads_camel_case() {
        let file = json_file(r#"{"focusKeywords":["saas"],"aiInteractionCount":4}"#);
        let snapshot = read_snapshot(Some(file.path())).unwrap();
        assert_eq!(snapshot.focus_keywords, ["saas"]);
        assert_eq!(snapshot.ai_interaction_count, Some(4));
    }

    #[test]
    fn missing_snapshot_is_empty() {
        assert!(read_snapshot(None).unwrap().is_empty());
    }

    #[test]
    fn stages_read_with_defaults() {
        let file = json_file(r#"[{"id":"a","title":"Research","isCompleted":true},{"id":"b","title":"Build"}]"#);
        let stages = read_stages(file.path()).unwrap();
        assert_eq!(stages.len(), 2);
        assert!(stages[0].is_completed);
        assert_eq!(stages[1].description, "");
    }

    #[test]
    fn bad_json_names_the_file() {
        let file = json_file("not json");
        let err = read_stages(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid stages JSON"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_snapshot(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read snapshot file"));
    }
}
