use rustc_hash::FxHashSet;

use super::frontier::Frontier;

/// One discovered page. `parent` is an index into the node table, `None`
/// only for the root. Nodes are only ever appended, so every non-root
/// node's parent index is strictly smaller than its own and the parent
/// chain always terminates at the root.
#[derive(Debug, Clone)]
pub struct PageNode {
    pub parent: Option<usize>,
    pub reference: String,
}

/// All mutable state of one search run: the append-only node table, the
/// frontier, and the set of references discovered so far.
pub struct SearchState {
    pub node_table: Vec<PageNode>,
    pub frontier: Frontier,
    pub seen: FxHashSet<String>,
    pub pages_fetched: usize,
}

impl SearchState {
    pub fn new(start_link: &str) -> Self {
        let mut frontier = Frontier::new();
        frontier.push(0, 0.0);

        Self {
            node_table: vec![PageNode {
                parent: None,
                reference: start_link.to_string(),
            }],
            frontier,
            seen: FxHashSet::default(),
            pages_fetched: 0,
        }
    }

    /// Records a newly seen link as a child of `parent` and queues it for
    /// expansion. Returns the new node's index.
    pub fn discover(&mut self, parent: usize, reference: &str, value: f64) -> usize {
        self.seen.insert(reference.to_string());
        self.node_table.push(PageNode {
            parent: Some(parent),
            reference: reference.to_string(),
        });

        let new_index = self.node_table.len() - 1;
        self.frontier.push(new_index, value);
        new_index
    }

    /// Number of nodes on the chain from `index` to the root, inclusive.
    /// Links discovered while expanding `index` sit this many edges from
    /// the root.
    pub fn hop_depth(&self, index: usize) -> usize {
        let mut hops = 0;
        let mut cursor = Some(index);

        while let Some(node_index) = cursor {
            cursor = self.node_table[node_index].parent;
            hops += 1;
        }

        hops
    }
}
