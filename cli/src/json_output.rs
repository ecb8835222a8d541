use serde::{Deserialize, Serialize};

use crate::args::{Args, EmbedderKind};

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub embedder: String,
    pub depth_penalty: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_budget: Option<usize>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub pages_fetched: usize,
}

pub fn create_json_output(
    path: Option<Vec<String>>,
    pages_fetched: usize,
    search_duration: f64,
    args: &Args,
) -> JsonOutput {
    let embedder = match args.embedder {
        EmbedderKind::Word2vec => "word2vec",
        EmbedderKind::Remote => "remote",
    };

    JsonOutput {
        query: JsonQuery {
            from: args.start_link.clone(),
            to: args.target_link.clone(),
            options: JsonOptions {
                embedder: embedder.to_string(),
                depth_penalty: args.depth_penalty,
                page_budget: args.page_budget,
            },
        },
        result: JsonResult {
            found: path.is_some(),
            path,
        },
        stats: JsonStats {
            search_time_ms: (search_duration * 1000.0) as u64,
            pages_fetched,
        },
    }
}
