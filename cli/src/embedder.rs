use byteorder::{LittleEndian, ReadBytesExt};
use memmap2::Mmap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{
    error::Error,
    fs::File,
    io::{Cursor, Read},
    path::Path,
    time::Duration,
};
use wikipath_core::{Embedding, TextEmbedder};

/// Dimensionality served by the remote sentence-embedding service.
pub const REMOTE_EMBEDDING_LEN: usize = 384;

/// Word-vector table backend: a label embeds as the unit-normalized mean of
/// its known word vectors, or the zero sentinel when no word is known.
pub struct WordTableEmbedder {
    vectors: FxHashMap<String, Vec<f64>>,
    dimension: usize,
}

impl WordTableEmbedder {
    /// Loads a table from its little-endian binary form: a `u32` word count
    /// and `u32` dimension header, then per word a length-prefixed UTF-8
    /// string followed by `dimension` f64 components.
    pub fn load(table_path: &Path) -> Result<Self, Box<dyn Error>> {
        let file = File::open(table_path)?;
        let data = unsafe { Mmap::map(&file)? };
        Self::parse(&data)
    }

    fn parse(data: &[u8]) -> Result<Self, Box<dyn Error>> {
        let mut cursor = Cursor::new(data);
        let word_count = cursor.read_u32::<LittleEndian>()? as usize;
        let dimension = cursor.read_u32::<LittleEndian>()? as usize;

        let mut vectors = FxHashMap::with_capacity_and_hasher(word_count, Default::default());
        for _ in 0..word_count {
            let word = read_length_prefixed_string(&mut cursor)?;
            let mut vector = Vec::with_capacity(dimension);
            for _ in 0..dimension {
                vector.push(cursor.read_f64::<LittleEndian>()?);
            }
            vectors.insert(word, vector);
        }

        Ok(Self { vectors, dimension })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

impl TextEmbedder for WordTableEmbedder {
    fn embed(&self, label: &str) -> Embedding {
        let words = tokenize_label(label);
        let known: Vec<&Vec<f64>> = words
            .iter()
            .filter_map(|word| self.vectors.get(word.as_str()))
            .collect();

        if known.is_empty() {
            return vec![0.0; self.dimension];
        }

        let mut mean = vec![0.0; self.dimension];
        for vector in &known {
            for (accumulated, component) in mean.iter_mut().zip(vector.iter()) {
                *accumulated += component;
            }
        }
        for component in &mut mean {
            *component /= known.len() as f64;
        }

        normalize(mean)
    }
}

fn read_length_prefixed_string(cursor: &mut Cursor<&[u8]>) -> Result<String, Box<dyn Error>> {
    let length = cursor.read_u16::<LittleEndian>()? as usize;
    let mut bytes = vec![0u8; length];
    cursor.read_exact(&mut bytes)?;
    Ok(String::from_utf8(bytes)?)
}

/// Splits a label on whitespace, underscores, brackets, hyphens, and
/// hashtags; pieces are lowercased and empty pieces dropped.
pub fn tokenize_label(label: &str) -> Vec<String> {
    label
        .split(|c: char| {
            c.is_whitespace() || matches!(c, '(' | ')' | '[' | ']' | '{' | '}' | '_' | '-' | '#')
        })
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

fn normalize(mut vector: Vec<f64>) -> Vec<f64> {
    let magnitude = vector.iter().map(|component| component * component).sum::<f64>().sqrt();
    if magnitude > 0.0 {
        for component in &mut vector {
            *component /= magnitude;
        }
    }
    vector
}

/// Remote sentence-embedding service backend. The service returns
/// unit-length vectors; transport or decode failures degrade to the zero
/// sentinel so the search treats the affected labels as unembeddable.
pub struct RemoteEmbedder {
    client: reqwest::blocking::Client,
    endpoint: String,
    dimension: usize,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    texts: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f64>>,
}

impl RemoteEmbedder {
    pub fn new(endpoint: String) -> Result<Self, Box<dyn Error>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            dimension: REMOTE_EMBEDDING_LEN,
        })
    }

    fn request(&self, labels: &[String]) -> Result<Vec<Embedding>, reqwest::Error> {
        let response: EmbedResponse = self
            .client
            .post(&self.endpoint)
            .json(&EmbedRequest { texts: labels })
            .send()?
            .error_for_status()?
            .json()?;

        Ok(response.embeddings)
    }

    fn zero_batch(&self, count: usize) -> Vec<Embedding> {
        (0..count).map(|_| vec![0.0; self.dimension]).collect()
    }
}

impl TextEmbedder for RemoteEmbedder {
    fn embed(&self, label: &str) -> Embedding {
        self.embed_batch(&[label.to_string()])
            .into_iter()
            .next()
            .unwrap_or_else(|| vec![0.0; self.dimension])
    }

    fn embed_batch(&self, labels: &[String]) -> Vec<Embedding> {
        match self.request(labels) {
            Ok(embeddings) if embeddings.len() == labels.len() => embeddings,
            _ => self.zero_batch(labels.len()),
        }
    }
}

/// The configured embedding backend, selected by `--embedder`.
pub enum EmbedderBackend {
    WordTable(WordTableEmbedder),
    Remote(RemoteEmbedder),
}

impl TextEmbedder for EmbedderBackend {
    fn embed(&self, label: &str) -> Embedding {
        match self {
            Self::WordTable(embedder) => embedder.embed(label),
            Self::Remote(embedder) => embedder.embed(label),
        }
    }

    fn embed_batch(&self, labels: &[String]) -> Vec<Embedding> {
        match self {
            Self::WordTable(embedder) => embedder.embed_batch(labels),
            Self::Remote(embedder) => embedder.embed_batch(labels),
        }
    }
}
