//! File-backed collaborators: the noise-word file and the list of documents to index.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{IndexError, Result};
use crate::keyword::NoiseWords;

/// One document handed to the builder: its identifier and its raw tokens.
#[derive(Debug, Clone)]
pub struct Document<T> {
    pub id: String,
    pub tokens: T,
}

impl NoiseWords {
    /// Reads whitespace-separated noise words. Entries are lowercased to match keywords.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| IndexError::read(path, e))?;
        let words: NoiseWords = text.split_whitespace().map(str::to_lowercase).collect();
        tracing::debug!(path = %path.display(), count = words.len(), "loaded noise words");
        Ok(words)
    }
}

/// Ordered document names plus the directory relative names are resolved against.
#[derive(Debug, Clone)]
pub struct DocumentList {
    root: PathBuf,
    names: Vec<String>,
}

impl DocumentList {
    /// Reads a whitespace-separated list of document paths. Relative entries are
    /// resolved against the list file's directory; the entry itself is the document id.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| IndexError::read(path, e))?;
        let names = text.split_whitespace().map(str::to_string).collect();
        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(Self { root, names })
    }

    /// Every `.txt` file below `dir`, in path order so builds are reproducible.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut names = Vec::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| IndexError::Walk { path: dir.to_path_buf(), source: e })?;
            let p = entry.path();
            if !entry.file_type().is_file() || p.extension().and_then(|s| s.to_str()) != Some("txt") {
                continue;
            }
            if let Ok(rel) = p.strip_prefix(dir) {
                names.push(rel.to_string_lossy().into_owned());
            }
        }
        Ok(Self { root: dir.to_path_buf(), names })
    }

    pub fn names(&self) -> &[String] { &self.names }

    pub fn len(&self) -> usize { self.names.len() }

    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    fn resolve(&self, name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() { p.to_path_buf() } else { self.root.join(p) }
    }

    /// Reads documents lazily, in list order. A missing file surfaces as
    /// [`IndexError::SourceUnavailable`] when its turn comes.
    pub fn documents(&self) -> impl Iterator<Item = Result<Document<std::vec::IntoIter<String>>>> + '_ {
        self.names.iter().map(move |name| {
            let path = self.resolve(name);
            let text = fs::read_to_string(&path).map_err(|e| IndexError::read(&path, e))?;
            let tokens: Vec<String> = text.split_whitespace().map(str::to_string).collect();
            Ok(Document { id: name.clone(), tokens: tokens.into_iter() })
        })
    }
}
