//! Audio clip library
//!
//! Bundled-resource resolution by logical name. Clip bytes are opaque to
//! the library; only the engine that registers them interprets the format.

use std::borrow::Cow;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

/// Logical name of the one clip shipped with the library
pub const BUNDLED_CLIP_NAME: &str = "gauge_recovery";

static BUNDLED_CLIP_DATA: &[u8] = include_bytes!("../assets/gauge_recovery.wav");

/// A named audio clip with opaque sample bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    name: String,
    data: Cow<'static, [u8]>,
}

impl AudioClip {
    /// Creates a clip from owned bytes.
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data: Cow::Owned(data),
        }
    }

    /// Creates a clip from bytes embedded in the binary.
    pub fn from_static(name: impl Into<String>, data: &'static [u8]) -> Self {
        Self {
            name: name.into(),
            data: Cow::Borrowed(data),
        }
    }

    /// The logical name the clip resolves under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw clip bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Clip size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the clip carries no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Name → clip map with bundled defaults
///
/// Absence of a requested clip is reported as `None` from
/// [`AudioLibrary::resolve`]; deciding whether that is an error belongs to
/// the caller.
#[derive(Debug, Clone, Default)]
pub struct AudioLibrary {
    clips: HashMap<String, AudioClip>,
}

impl AudioLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a library holding the built-in clip set.
    pub fn bundled() -> Self {
        let mut library = Self::new();
        library.insert(AudioClip::from_static(BUNDLED_CLIP_NAME, BUNDLED_CLIP_DATA));
        library
    }

    /// Creates a library from every `*.wav` file in a directory.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures from reading the directory or its files.
    pub fn from_dir(path: &Path) -> io::Result<Self> {
        let mut library = Self::new();
        library.merge_dir(path)?;
        Ok(library)
    }

    /// Loads every `*.wav` file in a directory under its file stem,
    /// returning how many clips were added. Existing entries with the same
    /// name are replaced.
    ///
    /// # Errors
    ///
    /// Propagates I/O failures from reading the directory or its files.
    pub fn merge_dir(&mut self, path: &Path) -> io::Result<usize> {
        let mut added = 0;
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let file_path = entry.path();
            let is_wav = file_path
                .extension()
                .and_then(OsStr::to_str)
                .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"));
            if !is_wav {
                continue;
            }
            let Some(stem) = file_path.file_stem().and_then(OsStr::to_str) else {
                continue;
            };
            let data = fs::read(&file_path)?;
            debug!(clip = stem, bytes = data.len(), "loaded audio clip");
            self.insert(AudioClip::new(stem, data));
            added += 1;
        }
        Ok(added)
    }

    /// Inserts a clip, returning the previous clip registered under the
    /// same name.
    pub fn insert(&mut self, clip: AudioClip) -> Option<AudioClip> {
        self.clips.insert(clip.name.clone(), clip)
    }

    /// Looks up a clip by logical name.
    pub fn resolve(&self, name: &str) -> Option<&AudioClip> {
        self.clips.get(name)
    }

    /// Iterates over the logical names in the library.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.clips.keys().map(String::as_str)
    }

    /// Number of clips in the library.
    pub fn len(&self) -> usize {
        self.clips.len()
    }

    /// Whether the library holds no clips.
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
