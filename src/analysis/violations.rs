use crate::model::{BoundaryType, Module, Violation};

/// Scan resolved edges for server modules that import client modules.
///
/// Modules are visited in registry order and each module's dependencies in
/// resolution order, so the output is deterministic. One violation is
/// emitted per qualifying edge, duplicate edges included.
pub fn detect_violations(modules: &[Module]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for module in modules {
        if module.boundary != BoundaryType::Server {
            continue;
        }

        for &dep in &module.dependencies {
            let target = &modules[dep];
            if target.boundary == BoundaryType::Client {
                violations.push(Violation::server_imports_client(module, target));
            }
        }
    }

    violations
}
