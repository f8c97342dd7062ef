mod graph;
mod violations;

pub use graph::DependencyGraph;
pub use violations::detect_violations;

use crate::config::Config;
use crate::model::{AnalysisResult, Module, Stats};
use crate::parser::{ComponentParser, resolve_import};
use crate::style;
use ignore::WalkBuilder;
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Source extensions considered part of the component tree.
const SOURCE_EXTENSIONS: [&str; 4] = ["tsx", "ts", "jsx", "js"];

/// Directories never worth descending into, on top of gitignore rules.
const DEFAULT_EXCLUDES: [&str; 4] = ["node_modules", "dist", ".next", "build"];

/// Discover candidate files under `root` and analyze them.
pub fn analyze(root: &Path, config: &Config) -> AnalysisResult {
    let files = discover_files(root, config);
    analyze_files(root, &files, config)
}

/// Build the module registry and dependency edges for a fixed file set.
///
/// Registration must fully complete before resolution starts so that forward
/// and circular imports resolve no matter the file-processing order. Reads
/// run in parallel; `collect` joins them all before resolution begins.
pub fn analyze_files(root: &Path, files: &[PathBuf], config: &Config) -> AnalysisResult {
    let parser = ComponentParser::new();

    // Registration pass. A file that cannot be read or parsed is skipped,
    // keeping the run alive on partial results.
    let mut modules: Vec<Module> = files
        .par_iter()
        .filter_map(|path| match parser.inspect(path) {
            Ok(inspection) => Some(Module::new(
                path.clone(),
                display_name(path, root),
                inspection.boundary,
                inspection.imports,
            )),
            Err(e) => {
                style::warning(&format!("Skipping {}: {}", path.display(), e));
                None
            }
        })
        .collect();

    let index_by_path: HashMap<PathBuf, usize> = modules
        .iter()
        .enumerate()
        .map(|(index, module)| (module.path.clone(), index))
        .collect();

    // Resolution pass. Specifiers that resolve outside the registry (external
    // packages, assets, dangling paths) produce no edge.
    for index in 0..modules.len() {
        let mut dependencies = Vec::new();

        for specifier in &modules[index].imports {
            let Some(resolved) = resolve_import(&modules[index].path, specifier) else {
                continue;
            };
            if let Some(&target) = index_by_path.get(&resolved) {
                if config.dedupe_edges && dependencies.contains(&target) {
                    continue;
                }
                dependencies.push(target);
            }
        }

        modules[index].dependencies = dependencies;
    }

    let violations = detect_violations(&modules);
    let stats = Stats::tally(&modules, &violations);
    let dependency_graph = DependencyGraph::build(&modules).into_inner();

    AnalysisResult {
        project_name: project_name(root),
        modules,
        violations,
        stats,
        dependency_graph,
    }
}

/// Walk `root` collecting source files, skipping dependency and build
/// directories. Results are sorted for deterministic registration order.
pub fn discover_files(root: &Path, config: &Config) -> Vec<PathBuf> {
    let mut excluded: Vec<String> = DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect();
    excluded.extend(config.exclude.iter().cloned());

    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .filter_entry(move |entry| {
            entry
                .file_name()
                .to_str()
                .map_or(true, |name| !excluded.iter().any(|ex| ex == name))
        })
        .build();

    let mut files = Vec::new();
    for entry in walker.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if SOURCE_EXTENSIONS.contains(&ext) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    files
}

/// Derive a display name: path relative to the analysis root, extension
/// dropped, with `index` files taking their parent directory's name.
fn display_name(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let stem = relative.file_stem().and_then(|s| s.to_str()).unwrap_or("");

    let name = if stem.eq_ignore_ascii_case("index") {
        relative
            .parent()
            .and_then(|dir| dir.file_name())
            .and_then(|s| s.to_str())
            .unwrap_or("")
    } else {
        stem
    };

    capitalize(name)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

fn project_name(root: &Path) -> String {
    root.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("project")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_come_from_the_file_stem() {
        let root = Path::new("/project");
        assert_eq!(
            display_name(Path::new("/project/components/Button.tsx"), root),
            "Button"
        );
        assert_eq!(display_name(Path::new("/project/page.tsx"), root), "Page");
    }

    #[test]
    fn index_files_take_the_parent_directory_name() {
        let root = Path::new("/project");
        assert_eq!(
            display_name(Path::new("/project/utils/index.ts"), root),
            "Utils"
        );
        assert_eq!(
            display_name(Path::new("/project/widgets/INDEX.TS"), root),
            "Widgets"
        );
    }

    #[test]
    fn root_level_index_has_no_parent_name() {
        assert_eq!(
            display_name(Path::new("/project/index.ts"), Path::new("/project")),
            ""
        );
    }

    #[test]
    fn capitalize_handles_empty_and_unicode() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("button"), "Button");
        assert_eq!(capitalize("éclair"), "Éclair");
    }
}
