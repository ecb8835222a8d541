use indicatif::{ProgressBar, ProgressStyle};
use std::{
    fs,
    io::{Read, Write},
    path::PathBuf,
};

const VECTORS_URL: &str =
    "https://github.com/malbiruk/wikipath/releases/download/data-v1.0.0/wikipath-words-300d.bin";

/// Returns the path to the word-vector table, downloading it into
/// ~/.wikipath on first use.
pub fn ensure_vectors_downloaded() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let data_dir = home_dir.join(".wikipath");
    let vectors_path = data_dir.join("vectors.bin");

    if vectors_path.exists() {
        return Ok(vectors_path);
    }

    println!("📦 Word vectors not found, downloading...");
    fs::create_dir_all(&data_dir)?;
    download_with_progress(VECTORS_URL, &vectors_path)?;
    println!("✅ Word vectors ready!");

    Ok(vectors_path)
}

fn download_with_progress(url: &str, dest: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let mut response = reqwest::blocking::get(url)?;
    let total_size = response.content_length().unwrap_or(0);

    let pb = ProgressBar::new(total_size);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})")?
            .progress_chars("#>-"),
    );

    let mut file = fs::File::create(dest)?;
    let mut downloaded: u64 = 0;
    let mut buffer = [0; 8192];

    loop {
        let bytes_read = response.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        file.write_all(&buffer[..bytes_read])?;
        downloaded += bytes_read as u64;
        pb.set_position(downloaded);
    }

    pb.finish_with_message("Download complete");
    Ok(())
}
