use crate::depth::{DepthSpec, HopRange};
use crate::store::DependencyGraph;
use crate::types::DepNode;
use petgraph::graph::NodeIndex;
use petgraph::Direction;
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

/// Outcome of one context query.
///
/// `ancestors` and `descendants` are deduplicated but unordered; display
/// ordering is the report assembler's responsibility.
#[derive(Debug, Clone, Default)]
pub struct ContextResult {
    /// The label the query asked for, echoed for report headers.
    pub target_label: String,

    /// False is a normal outcome, not an error.
    pub target_found: bool,

    pub target: Option<DepNode>,

    /// Nodes reachable along reverse edges within the parent window,
    /// excluding the target itself.
    pub ancestors: Vec<DepNode>,

    /// Nodes reachable along forward edges within the child window.
    pub descendants: Vec<DepNode>,

    /// Distinct non-empty file paths across target, ancestors, descendants.
    pub touched_files: BTreeSet<String>,

    /// Full text of touched files the store knows, captured here so that
    /// rendering needs no store access.
    pub file_contents: BTreeMap<String, String>,
}

/// Compute the bounded bidirectional context of `target_label`.
pub fn traverse(graph: &DependencyGraph, target_label: &str, depth: &DepthSpec) -> ContextResult {
    let Some(target_idx) = graph.find_by_label(target_label) else {
        log::debug!("context target '{target_label}' not found in graph");
        return ContextResult {
            target_label: target_label.to_string(),
            ..ContextResult::default()
        };
    };

    let mut ancestor_idx = walk(graph, target_idx, Direction::Incoming, depth.parents);
    // The parent window opens at hop 0, so the walk collects the target
    // itself; strip it after the fact.
    ancestor_idx.retain(|&idx| idx != target_idx);

    let descendant_idx = walk(graph, target_idx, Direction::Outgoing, depth.children);

    let target = graph.node(target_idx).cloned();
    let ancestors = materialize(graph, &ancestor_idx);
    let descendants = materialize(graph, &descendant_idx);

    let mut touched_files = BTreeSet::new();
    for node in target.iter().chain(&ancestors).chain(&descendants) {
        if !node.file.is_empty() {
            touched_files.insert(node.file.clone());
        }
    }

    let file_contents = touched_files
        .iter()
        .filter_map(|path| {
            graph
                .file_content(path)
                .map(|content| (path.clone(), content.to_string()))
        })
        .collect();

    log::debug!(
        "context for '{target_label}': {} ancestors, {} descendants, {} files",
        ancestors.len(),
        descendants.len(),
        touched_files.len()
    );

    ContextResult {
        target_label: target_label.to_string(),
        target_found: true,
        target,
        ancestors,
        descendants,
        touched_files,
        file_contents,
    }
}

/// Breadth-first walk from `start` collecting every node whose hop distance
/// falls inside `range`. The visited set keys on node index, so a node
/// reachable via multiple paths is collected once, at its shortest distance.
fn walk(
    graph: &DependencyGraph,
    start: NodeIndex,
    direction: Direction,
    range: HopRange,
) -> Vec<NodeIndex> {
    if range.is_empty() {
        return Vec::new();
    }

    let mut visited: HashSet<NodeIndex> = HashSet::from([start]);
    let mut queue: VecDeque<(NodeIndex, usize)> = VecDeque::from([(start, 0)]);
    let mut collected = Vec::new();

    while let Some((current, hop)) = queue.pop_front() {
        if range.contains(hop) {
            collected.push(current);
        }
        if !range.allows_step_from(hop) {
            continue;
        }
        for next in graph.neighbors_directed(current, direction) {
            if visited.insert(next) {
                queue.push_back((next, hop + 1));
            }
        }
    }

    collected
}

fn materialize(graph: &DependencyGraph, indices: &[NodeIndex]) -> Vec<DepNode> {
    indices
        .iter()
        .filter_map(|&idx| graph.node(idx).cloned())
        .collect()
}
