use std::path::{Component, Path, PathBuf};

use crate::error::Result;

/// Make `dir` absolute against the current working directory and normalize it.
pub fn absolute_dir(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        return Ok(normalize(dir));
    }
    let cwd = std::env::current_dir()?;
    Ok(normalize(&cwd.join(dir)))
}

/// Resolve a texture reference against an absolute base directory.
///
/// An absolute `reference` replaces the base. `.` and `..` components are
/// folded lexically; symlinks are not followed and the file need not exist.
pub fn resolve_texture_path(base_dir: &Path, reference: &str) -> PathBuf {
    normalize(&base_dir.join(reference))
}

/// Lexical normalization: drops `.`, folds `..` into its parent, never climbs above the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` == `/`
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::Normal(part) => out.push(part),
        }
    }
    out
}
