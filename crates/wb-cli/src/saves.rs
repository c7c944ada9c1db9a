//! Save-file management.
//!
//! Saves are JSON records in a flat directory, one file per session. A fresh
//! save is named by its creation timestamp, which makes file stems double as
//! a sort key; an explicit overwrite target is accepted by name.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use wb_core::SaveRecord;

/// The default save directory under the platform data directory.
pub fn default_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("wegbuch").join("saves"))
        .unwrap_or_else(|| PathBuf::from("saves"))
}

/// Write a record to the directory. Without an explicit name the creation
/// timestamp becomes the file stem. Returns the path written.
pub fn write(dir: &Path, record: &SaveRecord, name: Option<&str>) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let stem = name.map_or_else(|| record.file_stem(), str::to_string);
    let path = dir.join(format!("{stem}.json"));
    let json = record.to_json().map_err(io::Error::other)?;
    fs::write(&path, json)?;
    Ok(path)
}

/// Read a save file. Unreadable or malformed files yield the sentinel
/// record, which callers must refuse to resume from.
pub fn read(path: &Path) -> SaveRecord {
    match fs::read_to_string(path) {
        Ok(text) => SaveRecord::from_json(&text),
        Err(_) => SaveRecord::sentinel(),
    }
}

/// List save files in the directory, oldest first.
pub fn list(dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .flatten()
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect(),
        Err(_) => Vec::new(),
    };
    paths.sort();
    paths
}

#[cfg(test)]
mod tests {
    use wb_core::PlayerState;

    use super::*;

    fn record(millis: i64) -> SaveRecord {
        let mut state = PlayerState::new("Nim", "wayfarer", "", 8);
        state.created_at = millis;
        SaveRecord::from_state(&state)
    }

    #[test]
    fn write_names_fresh_saves_by_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), &record(1_700_000_000_000), None).unwrap();
        assert_eq!(path.file_name().unwrap(), "1700000000000.json");
        assert!(path.exists());
    }

    #[test]
    fn write_honors_explicit_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), &record(1), Some("slot1")).unwrap();
        assert_eq!(path.file_name().unwrap(), "slot1.json");
    }

    #[test]
    fn read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let rec = record(42);
        let path = write(dir.path(), &rec, None).unwrap();
        assert_eq!(read(&path), rec);
    }

    #[test]
    fn read_missing_file_is_sentinel() {
        assert!(read(Path::new("/no/such/save.json")).is_sentinel());
    }

    #[test]
    fn read_garbage_is_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not a record").unwrap();
        assert!(read(&path).is_sentinel());
    }

    #[test]
    fn list_sorts_oldest_first() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), &record(2_000), None).unwrap();
        write(dir.path(), &record(1_000), None).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        let paths = list(dir.path());
        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("1000.json"));
        assert!(paths[1].ends_with("2000.json"));
    }

    #[test]
    fn list_missing_dir_is_empty() {
        assert!(list(Path::new("/no/such/dir")).is_empty());
    }
}
