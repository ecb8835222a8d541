use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;
use tempfile::NamedTempFile;
use wikipath::{WordTableEmbedder, tokenize_label};
use wikipath_core::{TextEmbedder, is_zero_vector};

fn write_word(file: &mut NamedTempFile, word: &str, vector: &[f64]) {
    file.write_u16::<LittleEndian>(word.len() as u16).unwrap();
    file.write_all(word.as_bytes()).unwrap();
    for &component in vector {
        file.write_f64::<LittleEndian>(component).unwrap();
    }
}

fn create_test_table() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();

    file.write_u32::<LittleEndian>(3).unwrap(); // word count
    file.write_u32::<LittleEndian>(3).unwrap(); // dimension
    write_word(&mut file, "hello", &[1.0, 0.0, 0.0]);
    write_word(&mut file, "world", &[0.0, 1.0, 0.0]);
    write_word(&mut file, "python", &[0.0, 0.0, 1.0]);
    file.flush().unwrap();

    file
}

#[test]
fn test_load_reads_header_and_entries() {
    let file = create_test_table();
    let embedder = WordTableEmbedder::load(file.path()).unwrap();
    assert_eq!(embedder.dimension(), 3);
}

#[test]
fn test_single_known_word_embeds_to_its_vector() {
    let file = create_test_table();
    let embedder = WordTableEmbedder::load(file.path()).unwrap();

    let embedding = embedder.embed("python");
    assert_eq!(embedding, vec![0.0, 0.0, 1.0]);
}

#[test]
fn test_multi_word_label_is_normalized_mean() {
    let file = create_test_table();
    let embedder = WordTableEmbedder::load(file.path()).unwrap();

    // mean([1,0,0], [0,1,0]) = [0.5, 0.5, 0], unit-normalized.
    let embedding = embedder.embed("Hello_World");
    let expected = 1.0 / 2.0_f64.sqrt();
    assert!((embedding[0] - expected).abs() < 1e-12);
    assert!((embedding[1] - expected).abs() < 1e-12);
    assert_eq!(embedding[2], 0.0);

    let magnitude: f64 = embedding.iter().map(|c| c * c).sum::<f64>().sqrt();
    assert!((magnitude - 1.0).abs() < 1e-12);
}

#[test]
fn test_unknown_words_are_ignored_in_the_mean() {
    let file = create_test_table();
    let embedder = WordTableEmbedder::load(file.path()).unwrap();

    assert_eq!(embedder.embed("python zzzz"), embedder.embed("python"));
}

#[test]
fn test_unrepresentable_label_embeds_to_zero_sentinel() {
    let file = create_test_table();
    let embedder = WordTableEmbedder::load(file.path()).unwrap();

    let embedding = embedder.embed("Zzyzx");
    assert_eq!(embedding.len(), 3);
    assert!(is_zero_vector(&embedding));
}

#[test]
fn test_batch_matches_individual_embeddings() {
    let file = create_test_table();
    let embedder = WordTableEmbedder::load(file.path()).unwrap();

    let labels = vec!["hello".to_string(), "world".to_string()];
    let batch = embedder.embed_batch(&labels);
    assert_eq!(batch[0], embedder.embed("hello"));
    assert_eq!(batch[1], embedder.embed("world"));
}

#[test]
fn test_tokenize_splits_on_separators_and_lowercases() {
    assert_eq!(
        tokenize_label("Python_(programming_language)"),
        vec!["python", "programming", "language"]
    );
    assert_eq!(tokenize_label("Rock-and-roll #1"), vec!["rock", "and", "roll", "1"]);
    assert_eq!(tokenize_label("  "), Vec::<String>::new());
}
