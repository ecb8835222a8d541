use crate::args::{Args, EmbedderKind};
use crate::colors::ColorScheme;

pub fn display_search_info(args: &Args, colors: &ColorScheme) {
    if args.quiet {
        return;
    }

    println!(
        "🔎 Finding path from {} to {}",
        colors.page_link(&args.start_link),
        colors.page_link(&args.target_link)
    );

    match args.embedder {
        EmbedderKind::Word2vec => println!("⚙️  Scoring links with the word-vector table"),
        EmbedderKind::Remote => println!("⚙️  Scoring links via {}", args.endpoint),
    }

    if args.depth_penalty != 0.1 {
        println!(
            "⚡ Using depth penalty {}",
            colors.number(&format!("{:.2}", args.depth_penalty))
        );
    }

    if let Some(budget) = args.page_budget {
        println!("🔝 Giving up after {} pages", colors.number(&budget.to_string()));
    }

    println!("🔍 Searching...");
}

pub fn display_search_results(
    path: Option<&[String]>,
    pages_fetched: usize,
    search_duration: f64,
    args: &Args,
    colors: &ColorScheme,
) {
    if !args.quiet {
        println!("\n---\n");
    }

    match path {
        Some(path) => {
            if !args.quiet {
                println!(
                    "{}",
                    colors.success(&format!("✅ Found path with {} steps:\n", path.len() - 1))
                );
            }
            for line in format_enumerated_path(path, colors) {
                println!("{line}");
            }
        }
        None => {
            println!(
                "{} {} and {}",
                colors.error("❌ No path found between"),
                colors.page_link(&args.start_link),
                colors.page_link(&args.target_link)
            );
        }
    }

    if args.verbose {
        display_search_statistics(pages_fetched, search_duration, colors);
    }
}

/// Formats a path as a zero-padded, zero-indexed enumerated list, one line
/// per step.
pub fn format_enumerated_path(path: &[String], colors: &ColorScheme) -> Vec<String> {
    let max_index = path.len().saturating_sub(1);
    let padding = max_index.to_string().len();

    path.iter()
        .enumerate()
        .map(|(step_index, link)| {
            format!(
                "{} {}",
                colors.step_number(&format!("[{step_index:0padding$}]")),
                colors.page_link(link)
            )
        })
        .collect()
}

fn display_search_statistics(pages_fetched: usize, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Fetched {} pages in {} sec",
        colors.stats("📊"),
        colors.number(&pages_fetched.to_string()),
        colors.number(&format!("{search_duration:.3}"))
    );
}
