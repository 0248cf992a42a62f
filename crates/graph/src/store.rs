use crate::error::Result;
use crate::types::{DepNode, GraphSnapshot};
use depscope_protocol::ExtractionBatch;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Directed dependency graph over one extraction batch.
///
/// Holds nodes keyed by stable id plus a label index for query-time lookup.
/// [`DependencyGraph::load`] is the only mutator: it wipes the store and
/// rebuilds from one batch, so the store always reflects exactly the most
/// recent extraction.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    graph: DiGraph<DepNode, ()>,
    by_id: HashMap<String, NodeIndex>,
    by_label: HashMap<String, NodeIndex>,
    files: BTreeMap<String, String>,
}

impl DependencyGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire graph with the contents of one extraction batch.
    ///
    /// Phase 1 registers one node per record and builds the label index
    /// (last-indexed record wins a contested label). Phase 2 resolves each
    /// declared dependency name through that index, synthesizing placeholder
    /// nodes for names that resolve to nothing and external nodes for
    /// declared external dependencies. Identical edges collapse to one.
    pub fn load(&mut self, batch: &ExtractionBatch) {
        self.graph = DiGraph::new();
        self.by_id.clear();
        self.by_label.clear();
        self.files = batch.files.clone();

        for record in &batch.records {
            let node = DepNode::resolved(
                &record.file,
                &record.function,
                &record.code,
                self.files.get(&record.file).cloned(),
            );
            let idx = self.intern(node);
            self.by_label.insert(record.function.clone(), idx);
        }

        for record in &batch.records {
            let from_id = DepNode::resolved_id(&record.file, &record.function);
            let Some(&from) = self.by_id.get(&from_id) else {
                continue;
            };

            for dep in &record.dependencies {
                let to = match self.by_label.get(dep) {
                    Some(&idx) => idx,
                    None => self.intern_secondary(DepNode::unresolved(dep)),
                };
                self.graph.update_edge(from, to, ());
            }

            for ext in &record.dependencies_external {
                let to = self.intern_secondary(DepNode::external(ext));
                self.graph.update_edge(from, to, ());
            }
        }

        log::info!(
            "Loaded dependency graph: {} nodes, {} edges, {} files",
            self.graph.node_count(),
            self.graph.edge_count(),
            self.files.len()
        );
    }

    /// Look up the node currently indexed under `label`.
    ///
    /// Labels are not unique; on collision the winner is the last-indexed
    /// record, deterministic for a given batch order.
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<NodeIndex> {
        self.by_label.get(label).copied()
    }

    #[must_use]
    pub fn node(&self, idx: NodeIndex) -> Option<&DepNode> {
        self.graph.node_weight(idx)
    }

    pub fn neighbors_directed(
        &self,
        idx: NodeIndex,
        direction: Direction,
    ) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(idx, direction)
    }

    #[must_use]
    pub fn file_content(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Persist the graph as a snapshot file.
    ///
    /// The write is atomic (temp file + rename): a concurrent reader opens
    /// either the previous generation or this one, never a partial file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let bytes = serde_json::to_vec_pretty(&self.snapshot())?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, bytes)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Reopen a graph persisted by [`DependencyGraph::save`].
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let snapshot: GraphSnapshot = serde_json::from_slice(&bytes)?;

        let mut store = Self::new();
        store.files = snapshot.files;
        for node in snapshot.nodes {
            let label = node.label.clone();
            let synthesized = node.file.is_empty();
            let idx = store.intern(node);
            // Rebuild the label index with the same precedence as load:
            // resolved nodes in order, placeholders/externals never override.
            if synthesized {
                store.by_label.entry(label).or_insert(idx);
            } else {
                store.by_label.insert(label, idx);
            }
        }
        for (src, dst) in snapshot.edges {
            if let (Some(&from), Some(&to)) = (store.by_id.get(&src), store.by_id.get(&dst)) {
                store.graph.update_edge(from, to, ());
            }
        }

        log::debug!(
            "Opened graph snapshot {}: {} nodes, {} edges",
            path.display(),
            store.graph.node_count(),
            store.graph.edge_count()
        );
        Ok(store)
    }

    fn snapshot(&self) -> GraphSnapshot {
        let nodes: Vec<DepNode> = self.graph.node_weights().cloned().collect();
        let edges: Vec<(String, String)> = self
            .graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(a, b)| (self.graph[a].id.clone(), self.graph[b].id.clone()))
            .collect();

        GraphSnapshot {
            nodes,
            edges,
            files: self.files.clone(),
        }
    }

    /// Insert or merge a node by id; a re-registered id keeps one node and
    /// takes the newer attributes.
    fn intern(&mut self, node: DepNode) -> NodeIndex {
        match self.by_id.get(&node.id) {
            Some(&idx) => {
                self.graph[idx] = node;
                idx
            }
            None => {
                let id = node.id.clone();
                let idx = self.graph.add_node(node);
                self.by_id.insert(id, idx);
                idx
            }
        }
    }

    /// Intern a placeholder/external node. These only claim a label no
    /// resolved record owns, so they stay findable without shadowing real
    /// functions.
    fn intern_secondary(&mut self, node: DepNode) -> NodeIndex {
        let label = node.label.clone();
        let idx = self.intern(node);
        self.by_label.entry(label).or_insert(idx);
        idx
    }
}
