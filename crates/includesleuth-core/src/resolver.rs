/// Quoted-include path resolution.
///
/// A quoted target is resolved against the directory of the file that
/// contains it — never the process working directory and never a search
/// path. Angle-bracket targets are not resolved at all; the tracer has no
/// system include path and does not guess one.
///
/// Resolved paths are normalised lexically (no filesystem access) so that
/// `inc/./a.h` and `inc/sub/../a.h` both become `inc/a.h` and deduplicate
/// against each other in the [`VisitedSet`](crate::model::VisitedSet).
use std::path::{Component, Path, PathBuf};

/// Resolve `target` relative to the directory containing `including_file`.
///
/// An absolute `target` replaces the directory, following ordinary path-join
/// rules.
pub fn resolve_quoted(including_file: &Path, target: &str) -> PathBuf {
    let dir = including_file.parent().unwrap_or_else(|| Path::new(""));
    normalize(&dir.join(target))
}

/// Lexically clean a path: drop `.` components and fold `..` into the
/// preceding normal component where there is one.
///
/// A `..` that would climb above a relative path's start is kept; one that
/// would climb above the root is dropped. An empty result becomes `.`.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
