use super::state::PageNode;

/// Walks parent links from `found_index` back to the root and returns the
/// references ordered start -> target.
pub fn reconstruct_path(node_table: &[PageNode], found_index: usize) -> Vec<String> {
    let mut path = Vec::new();
    let mut cursor = Some(found_index);

    while let Some(index) = cursor {
        path.push(node_table[index].reference.clone());
        cursor = node_table[index].parent;
    }

    path.reverse();
    path
}
