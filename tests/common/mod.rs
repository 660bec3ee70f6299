#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use plainini::Document;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Scratch directory removed again when dropped.
pub struct Scratch {
    dir: PathBuf,
}

impl Scratch {
    pub fn new(label: &str) -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join(format!(
            "plainini-{label}-{}-{id}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub fn ini(&self, name: &str, text: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, text).unwrap();
        path
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

/// Header and pair lines of a written file; blank lines dropped.
pub fn content_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Section name -> sorted (key, value) pairs, ignoring order.
pub fn snapshot(doc: &Document) -> Vec<(String, Vec<(String, String)>)> {
    let mut sections: Vec<_> = doc
        .sections()
        .map(|(name, section)| {
            let mut pairs: Vec<_> = section
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            pairs.sort();
            (name.to_string(), pairs)
        })
        .collect();
    sections.sort();
    sections
}
