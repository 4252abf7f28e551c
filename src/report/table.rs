use crate::analysis::{FrameRow, PriceFrame};
use crate::report::escape_html;

pub const TABLE_CLASSES: &str = "table table-striped table-bordered";

/// Renders the most recent `rows` rows of the frame, oldest first, with the
/// two moving-average columns. Missing averages print as `NaN`.
pub fn render_table(frame: &PriceFrame, rows: usize) -> String {
    let headers = [
        "Date".to_string(),
        "Open".to_string(),
        "High".to_string(),
        "Low".to_string(),
        "Close".to_string(),
        "Volume".to_string(),
        format!("MA{}", frame.short_window),
        format!("MA{}", frame.long_window),
    ];

    let mut html = String::new();
    html.push_str(&format!("<table border=\"1\" class=\"{TABLE_CLASSES}\">\n"));
    html.push_str("  <thead>\n    <tr style=\"text-align: right;\">\n");
    for header in &headers {
        html.push_str(&format!("      <th>{}</th>\n", escape_html(header)));
    }
    html.push_str("    </tr>\n  </thead>\n  <tbody>\n");
    for row in frame.tail(rows) {
        write_row(&mut html, &row);
    }
    html.push_str("  </tbody>\n</table>");
    html
}

fn write_row(html: &mut String, row: &FrameRow) {
    html.push_str("    <tr>\n");
    html.push_str(&format!("      <th>{}</th>\n", row.date.format("%Y-%m-%d")));
    for value in [row.open, row.high, row.low, row.close] {
        html.push_str(&format!("      <td>{}</td>\n", format_price(Some(value))));
    }
    html.push_str(&format!("      <td>{:.0}</td>\n", row.volume));
    for value in [row.ma_short, row.ma_long] {
        html.push_str(&format!("      <td>{}</td>\n", format_price(value)));
    }
    html.push_str("    </tr>\n");
}

fn format_price(value: Option<f64>) -> String {
    match value {
        Some(value) if value.is_finite() => format!("{value:.6}"),
        _ => "NaN".to_string(),
    }
}
