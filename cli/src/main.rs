use clap::Parser;
use wikipath::app::WikipathApp;
use wikipath::args::Args;
use wikipath::colors::ColorScheme;
use wikipath::display::{display_search_info, display_search_results};
use wikipath::json_output::create_json_output;
use wikipath_core::{SearchConfig, find_path};

fn main() {
    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color);

    let mut app = match WikipathApp::new(&args) {
        Ok(app) => app,
        Err(error) => {
            eprintln!("{} {}", colors.error("❌ Error:"), error);
            std::process::exit(1);
        }
    };

    display_search_info(&args, &colors);

    let config = SearchConfig::new(args.depth_penalty, args.page_budget);
    let (path, pages_fetched, search_duration) = find_path(
        &args.start_link,
        &args.target_link,
        &mut app.fetcher,
        &app.embedder,
        &config,
    );

    let found = path.is_some();

    if args.json {
        let output = create_json_output(path, pages_fetched, search_duration, &args);
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON output should serialize")
        );
    } else {
        display_search_results(path.as_deref(), pages_fetched, search_duration, &args, &colors);
    }

    if !found {
        std::process::exit(1);
    }
}
