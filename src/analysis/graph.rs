use crate::model::Module;
use petgraph::graph::{DiGraph, NodeIndex};
use std::path::PathBuf;

/// Graph view over the resolved registry.
///
/// Node insertion order follows module registration order and edge insertion
/// order follows each module's dependency order, so node indices line up
/// with registry indices and renderers get stable ids for free.
pub struct DependencyGraph {
    graph: DiGraph<PathBuf, ()>,
}

impl DependencyGraph {
    pub fn build(modules: &[Module]) -> Self {
        let mut graph = DiGraph::new();
        let mut nodes: Vec<NodeIndex> = Vec::with_capacity(modules.len());

        for module in modules {
            nodes.push(graph.add_node(module.path.clone()));
        }

        for (index, module) in modules.iter().enumerate() {
            for &dep in &module.dependencies {
                graph.add_edge(nodes[index], nodes[dep], ());
            }
        }

        Self { graph }
    }

    pub fn graph(&self) -> &DiGraph<PathBuf, ()> {
        &self.graph
    }

    pub fn into_inner(self) -> DiGraph<PathBuf, ()> {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BoundaryType;
    use petgraph::visit::EdgeRef;

    #[test]
    fn preserves_edge_order_and_parallel_edges() {
        let mut a = Module::new(
            PathBuf::from("/app/a.tsx"),
            "A".to_string(),
            BoundaryType::Server,
            Vec::new(),
        );
        a.dependencies = vec![1, 1];
        let b = Module::new(
            PathBuf::from("/app/b.tsx"),
            "B".to_string(),
            BoundaryType::Client,
            Vec::new(),
        );

        let graph = DependencyGraph::build(&[a, b]).into_inner();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);

        for edge in graph.edge_references() {
            assert_eq!(edge.source().index(), 0);
            assert_eq!(edge.target().index(), 1);
        }
    }
}
