use std::path::{Component, Path, PathBuf};

/// Probe order for relative imports, matching the bundler convention.
const EXTENSIONS: [&str; 4] = ["tsx", "ts", "jsx", "js"];

/// Resolve a raw import specifier against the directory of the importing
/// file.
///
/// Non-relative specifiers name external packages and resolve to `None`
/// without touching the filesystem. Relative specifiers probe
/// `<candidate>.<ext>` and then `<candidate>/index.<ext>` in a fixed
/// extension order; `None` simply means no dependency edge is recorded.
pub fn resolve_import(from: &Path, specifier: &str) -> Option<PathBuf> {
    if !specifier.starts_with('.') {
        return None;
    }

    let dir = from.parent().unwrap_or_else(|| Path::new(""));
    let candidate = normalize(&dir.join(specifier));

    for ext in EXTENSIONS {
        let probe = append_extension(&candidate, ext);
        if probe.is_file() {
            return Some(probe);
        }
    }

    for ext in EXTENSIONS {
        let probe = candidate.join(format!("index.{ext}"));
        if probe.is_file() {
            return Some(probe);
        }
    }

    None
}

/// Append an extension rather than `Path::with_extension`, which would
/// clobber dotted specifiers like `./styles.module`.
fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut buf = path.as_os_str().to_os_string();
    buf.push(format!(".{ext}"));
    PathBuf::from(buf)
}

/// Lexically remove `.` and `..` components so resolved paths line up with
/// the registry keys produced by the file walker.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }

    out
}
