use std::path::{Component, Path, PathBuf};

/// Resolve `.` and `..` lexically, without touching the filesystem.
///
/// Rebuilding from components also drops trailing separators. `..` at the
/// root stays at the root.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut ret = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir => ret.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => ret.push(c),
        }
    }
    ret
}
