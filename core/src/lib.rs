pub mod embedding;
pub mod fetch;
pub mod labels;
pub mod scoring;
pub mod search;
pub mod search_config;

// Re-export commonly used items
pub use embedding::{Embedding, TextEmbedder, is_zero_vector};
pub use fetch::PageLinkFetcher;
pub use labels::page_label;
pub use scoring::{frontier_value, relevance_score};
pub use search::{PageNode, PathResult, SearchState, best_first_search, find_path, reconstruct_path};
pub use search_config::SearchConfig;
