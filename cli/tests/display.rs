use wikipath::colors::ColorScheme;
use wikipath::display::format_enumerated_path;

fn plain_colors() -> ColorScheme {
    // Force colors off so assertions see the raw text.
    ColorScheme::new(false)
}

#[test]
fn test_short_path_uses_single_digit_indices() {
    let colors = plain_colors();
    let path = vec!["A".to_string(), "B".to_string()];

    let lines = format_enumerated_path(&path, &colors);
    assert_eq!(lines, vec!["[0] A", "[1] B"]);
}

#[test]
fn test_long_path_zero_pads_indices() {
    let colors = plain_colors();
    let path: Vec<String> = (0..11).map(|i| format!("Page{i}")).collect();

    let lines = format_enumerated_path(&path, &colors);
    assert_eq!(lines[0], "[00] Page0");
    assert_eq!(lines[9], "[09] Page9");
    assert_eq!(lines[10], "[10] Page10");
}

#[test]
fn test_single_node_path() {
    let colors = plain_colors();
    let path = vec!["A".to_string()];

    let lines = format_enumerated_path(&path, &colors);
    assert_eq!(lines, vec!["[0] A"]);
}
