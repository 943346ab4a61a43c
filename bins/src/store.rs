use log::warn;
use parking_lot::Mutex;
use session::TokenStore;
use std::{collections::HashMap, fs, path::PathBuf};

/// Token store backed by a small JSON file, so a CLI run can reuse the
/// previous sign-in. Every write flushes the whole map; the file is tiny.
pub struct FileStore {
    path: PathBuf,
    map: Mutex<HashMap<String, String>>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let map = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(map) => Some(map),
                Err(err) => {
                    warn!("session file {} is unreadable: {err}", path.display());
                    None
                }
            })
            .unwrap_or_default();
        FileStore {
            path,
            map: Mutex::new(map),
        }
    }

    fn flush(&self, map: &HashMap<String, String>) {
        match serde_json::to_string_pretty(map) {
            Ok(raw) => {
                if let Err(err) = fs::write(&self.path, raw) {
                    warn!("failed to write session file {}: {err}", self.path.display());
                }
            }
            Err(err) => warn!("failed to serialize session: {err}"),
        }
    }
}

impl TokenStore for FileStore {
    fn load(&self, key: &str) -> Option<String> {
        self.map.lock().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        let mut map = self.map.lock();
        map.insert(key.to_owned(), value.to_owned());
        self.flush(&map);
    }

    fn remove(&self, key: &str) {
        let mut map = self.map.lock();
        map.remove(key);
        self.flush(&map);
    }
}
