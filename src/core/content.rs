//=========================================================================
// Content Cache
//=========================================================================
//
// Eager asset loading into an in-memory cache.
//
// Assets are addressed by kind and bare name (no extension); the cache
// probes the kind's known extensions under the content root. Loading is
// fallible and returns Result; the engine's preload pass is the one that
// decides failures are non-fatal.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

//=== AssetKind ===========================================================

/// The two asset kinds the engine preloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Texture,
    Font,
}

impl AssetKind {
    /// Filename extensions probed for this kind, in order.
    fn extensions(self) -> &'static [&'static str] {
        match self {
            AssetKind::Texture => &["png", "jpg"],
            AssetKind::Font => &["ttf", "otf"],
        }
    }

    fn label(self) -> &'static str {
        match self {
            AssetKind::Texture => "texture",
            AssetKind::Font => "font",
        }
    }
}

//=== ContentError ========================================================

/// Asset loading errors.
#[derive(Debug)]
pub enum ContentError {
    /// No file with a known extension exists under the content root.
    NotFound { kind: AssetKind, name: String },

    /// A candidate file exists but could not be read.
    Io(io::Error),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, name } => {
                write!(f, "{} asset `{}` not found", kind.label(), name)
            }
            Self::Io(e) => write!(f, "asset read failed: {}", e),
        }
    }
}

impl std::error::Error for ContentError {}

impl From<io::Error> for ContentError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

//=== ContentCache ========================================================

/// In-memory asset cache rooted at the configured content directory.
///
/// `load` reads asset bytes eagerly so later `get` calls never touch the
/// filesystem mid-frame.
pub struct ContentCache {
    root: PathBuf,
    entries: HashMap<(AssetKind, String), Vec<u8>>,
}

impl ContentCache {
    /// Creates an empty cache rooted at `root`. No I/O is performed.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: HashMap::new(),
        }
    }

    /// Content root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    //--- Loading ----------------------------------------------------------

    /// Loads an asset into the cache, probing the kind's extensions.
    ///
    /// Reloading an already-cached asset is a no-op.
    pub fn load(&mut self, kind: AssetKind, name: &str) -> Result<(), ContentError> {
        let key = (kind, name.to_owned());
        if self.entries.contains_key(&key) {
            return Ok(());
        }

        for ext in kind.extensions() {
            let path = self.root.join(name).with_extension(ext);
            if path.is_file() {
                let bytes = fs::read(&path)?;
                debug!(
                    target: "content",
                    "Loaded {} `{}` ({} bytes)",
                    kind.label(),
                    name,
                    bytes.len()
                );
                self.entries.insert(key, bytes);
                return Ok(());
            }
        }

        Err(ContentError::NotFound {
            kind,
            name: name.to_owned(),
        })
    }

    //--- Queries ----------------------------------------------------------

    /// Raw bytes of a previously loaded asset.
    pub fn get(&self, kind: AssetKind, name: &str) -> Option<&[u8]> {
        self.entries
            .get(&(kind, name.to_owned()))
            .map(Vec::as_slice)
    }

    /// Whether an asset is already cached.
    pub fn contains(&self, kind: AssetKind, name: &str) -> bool {
        self.entries.contains_key(&(kind, name.to_owned()))
    }

    /// Number of cached assets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Unique scratch directory under the system temp dir.
    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "stagecraft_content_{}_{}",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn root_is_the_configured_directory() {
        let cache = ContentCache::new("assets/menu");
        assert_eq!(cache.root(), Path::new("assets/menu"));
    }

    #[test]
    fn load_missing_asset_returns_not_found() {
        let dir = scratch_dir("missing");
        let mut cache = ContentCache::new(&dir);

        let err = cache.load(AssetKind::Texture, "nope").unwrap_err();
        match err {
            ContentError::NotFound { kind, name } => {
                assert_eq!(kind, AssetKind::Texture);
                assert_eq!(name, "nope");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert!(cache.is_empty());
    }

    #[test]
    fn load_reads_bytes_by_extension_probe() {
        let dir = scratch_dir("probe");
        fs::write(dir.join("logo.png"), b"fake-png").unwrap();

        let mut cache = ContentCache::new(&dir);
        cache.load(AssetKind::Texture, "logo").unwrap();

        assert!(cache.contains(AssetKind::Texture, "logo"));
        assert_eq!(cache.get(AssetKind::Texture, "logo"), Some(&b"fake-png"[..]));
    }

    #[test]
    fn kinds_do_not_collide() {
        let dir = scratch_dir("kinds");
        fs::write(dir.join("title.png"), b"img").unwrap();
        fs::write(dir.join("title.ttf"), b"fnt").unwrap();

        let mut cache = ContentCache::new(&dir);
        cache.load(AssetKind::Texture, "title").unwrap();
        cache.load(AssetKind::Font, "title").unwrap();

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(AssetKind::Texture, "title"), Some(&b"img"[..]));
        assert_eq!(cache.get(AssetKind::Font, "title"), Some(&b"fnt"[..]));
    }

    #[test]
    fn reload_is_noop() {
        let dir = scratch_dir("reload");
        fs::write(dir.join("logo.png"), b"v1").unwrap();

        let mut cache = ContentCache::new(&dir);
        cache.load(AssetKind::Texture, "logo").unwrap();

        // Change the file; the cache must keep the original bytes.
        fs::write(dir.join("logo.png"), b"v2").unwrap();
        cache.load(AssetKind::Texture, "logo").unwrap();

        assert_eq!(cache.get(AssetKind::Texture, "logo"), Some(&b"v1"[..]));
    }

    #[test]
    fn error_display_is_descriptive() {
        let err = ContentError::NotFound {
            kind: AssetKind::Font,
            name: "menu".to_owned(),
        };
        assert_eq!(err.to_string(), "font asset `menu` not found");
    }
}
