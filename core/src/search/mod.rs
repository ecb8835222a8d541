mod frontier;
mod state;
pub mod utils;

use std::time::Instant;

use crate::embedding::{TextEmbedder, is_zero_vector};
use crate::fetch::PageLinkFetcher;
use crate::labels::page_label;
use crate::scoring::{frontier_value, relevance_score};
use crate::search_config::SearchConfig;

pub use frontier::Frontier;
pub use state::{PageNode, SearchState};
pub use utils::reconstruct_path;

/// (path, pages fetched, elapsed seconds)
pub type PathResult = (Option<Vec<String>>, usize, f64);

/// Runs a full search from `start_link` and reconstructs the path on
/// success.
pub fn find_path(
    start_link: &str,
    target_link: &str,
    fetcher: &mut dyn PageLinkFetcher,
    embedder: &dyn TextEmbedder,
    config: &SearchConfig,
) -> PathResult {
    let search_timer = Instant::now();

    let mut search_state = SearchState::new(start_link);
    let found = best_first_search(target_link, &mut search_state, fetcher, embedder, config);
    let path = found.map(|index| reconstruct_path(&search_state.node_table, index));

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    (path, search_state.pages_fetched, elapsed_time)
}

/// Expands frontier pages in best-first order until the target reference is
/// discovered or the frontier is exhausted. Returns the node-table index of
/// the target on success.
///
/// Candidate links are scored by the similarity of their label to the
/// target's label, penalized by the depth of the page they were found on;
/// the frontier yields the lowest combined value first.
pub fn best_first_search(
    target_link: &str,
    state: &mut SearchState,
    fetcher: &mut dyn PageLinkFetcher,
    embedder: &dyn TextEmbedder,
    config: &SearchConfig,
) -> Option<usize> {
    let target_embedding = embedder.embed(page_label(target_link));
    if is_zero_vector(&target_embedding) {
        // The heuristic cannot be computed, so nothing is crawled.
        return None;
    }

    while let Some(current) = state.frontier.pop() {
        if let Some(budget) = config.page_budget {
            if state.pages_fetched >= budget {
                return None;
            }
        }

        let hops = state.hop_depth(current);
        let links = fetcher.fetch(&state.node_table[current].reference);
        state.pages_fetched += 1;

        let labels: Vec<String> = links
            .iter()
            .map(|link| page_label(link).to_string())
            .collect();
        let embeddings = embedder.embed_batch(&labels);

        for (link, embedding) in links.iter().zip(embeddings) {
            if state.seen.contains(link.as_str()) {
                continue;
            }

            let similarity = relevance_score(&target_embedding, &embedding);
            let value = frontier_value(similarity, hops, config.depth_penalty);
            let new_index = state.discover(current, link, value);

            if link == target_link {
                // Early exit: remaining candidates in this batch are not
                // recorded.
                return Some(new_index);
            }
        }
    }

    None
}
