use std::{
    io::Read,
    path::{Path, PathBuf},
};

use crate::foundation::error::{ReelError, ReelResult};

/// Normalized relative reference to a static file (e.g. `voiceover.mp3`).
///
/// Construction normalizes separators and rejects absolute paths and `..` segments, so two refs
/// naming the same file compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetRef(String);

impl AssetRef {
    /// Parse and normalize a relative asset path.
    pub fn new(source: &str) -> ReelResult<Self> {
        Ok(Self(normalize_rel_path(source)?))
    }

    /// Normalized path with `/` separators.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AssetRef {
    type Error = ReelError;

    fn try_from(value: String) -> ReelResult<Self> {
        Self::new(&value)
    }
}

impl From<AssetRef> for String {
    fn from(value: AssetRef) -> Self {
        value.0
    }
}

/// Normalize a relative asset path to `/`-separated segments.
pub fn normalize_rel_path(source: &str) -> ReelResult<String> {
    let s = source.trim().replace('\\', "/");
    if s.is_empty() {
        return Err(ReelError::asset("asset path must be non-empty"));
    }
    if s.starts_with('/') {
        return Err(ReelError::asset(format!(
            "asset path \"{source}\" must be relative"
        )));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(ReelError::asset(format!(
                "asset path \"{source}\" must not contain '..'"
            )));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(ReelError::asset(format!(
            "asset path \"{source}\" must contain a file name"
        )));
    }

    Ok(out.join("/"))
}

/// Static asset loader used by rendering drivers.
pub trait AssetResolver: Send + Sync {
    /// Filesystem location of `asset`; fails when it does not exist.
    fn resolve(&self, asset: &AssetRef) -> ReelResult<PathBuf>;

    /// Open `asset` for reading.
    fn open(&self, asset: &AssetRef) -> ReelResult<Box<dyn Read + Send>> {
        let path = self.resolve(asset)?;
        let file = std::fs::File::open(&path)
            .map_err(|e| ReelError::asset(format!("open \"{}\": {e}", path.display())))?;
        Ok(Box::new(file))
    }

    /// Read the whole asset into memory.
    fn read_bytes(&self, asset: &AssetRef) -> ReelResult<Vec<u8>> {
        let mut out = Vec::new();
        self.open(asset)?
            .read_to_end(&mut out)
            .map_err(|e| ReelError::asset(format!("read \"{asset}\": {e}")))?;
        Ok(out)
    }
}

/// Resolver rooted at a static-files directory.
#[derive(Clone, Debug)]
pub struct StaticDir {
    root: PathBuf,
}

impl StaticDir {
    /// Resolver for files under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetResolver for StaticDir {
    fn resolve(&self, asset: &AssetRef) -> ReelResult<PathBuf> {
        let path = asset
            .as_str()
            .split('/')
            .fold(self.root.clone(), |p, part| p.join(part));
        if !path.is_file() {
            return Err(ReelError::asset(format!(
                "asset \"{asset}\" not found under \"{}\"",
                self.root.display()
            )));
        }
        tracing::trace!(%asset, path = %path.display(), "resolved asset");
        Ok(path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
