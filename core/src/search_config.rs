/// Configuration for the best-first search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Similarity penalty per hop of path depth
    pub depth_penalty: f64,
    /// Stop after fetching this many pages (None = run until the frontier
    /// empties)
    pub page_budget: Option<usize>,
}

impl SearchConfig {
    pub fn new(depth_penalty: f64, page_budget: Option<usize>) -> Self {
        Self {
            depth_penalty,
            page_budget,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_penalty: 0.1,
            page_budget: None,
        }
    }
}
