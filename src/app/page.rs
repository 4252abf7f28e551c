use crate::app::pipeline::PageOutcome;
use crate::report::escape_html;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
const BOOTSTRAP_CDN: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

pub fn render_page(outcome: Option<&PageOutcome>) -> String {
    let ticker_value = outcome
        .and_then(PageOutcome::ticker)
        .map(|ticker| escape_html(ticker.as_str()))
        .unwrap_or_default();

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n");
    html.push_str("  <title>Stock Chart Viewer</title>\n");
    html.push_str(&format!("  <link rel=\"stylesheet\" href=\"{BOOTSTRAP_CDN}\">\n"));
    html.push_str(&format!("  <script src=\"{PLOTLY_CDN}\" charset=\"utf-8\"></script>\n"));
    html.push_str("</head>\n<body class=\"container py-4\">\n");
    html.push_str("  <h1>Stock Chart Viewer</h1>\n");
    html.push_str("  <form method=\"post\" action=\"/\" class=\"row g-2 mb-4\">\n");
    html.push_str(&format!(
        "    <div class=\"col-auto\"><input type=\"text\" name=\"ticker\" class=\"form-control\" placeholder=\"Ticker (e.g. AAPL)\" value=\"{ticker_value}\" required></div>\n"
    ));
    html.push_str("    <div class=\"col-auto\"><button type=\"submit\" class=\"btn btn-primary\">Show chart</button></div>\n");
    html.push_str("  </form>\n");

    if let Some(outcome) = outcome {
        if let Some(message) = outcome.error_message() {
            html.push_str(&format!(
                "  <div class=\"alert alert-danger\" role=\"alert\">{}</div>\n",
                escape_html(&message)
            ));
        }
        if let Some(chart) = outcome.chart_html() {
            html.push_str(&format!("  <section id=\"chart\">\n{chart}\n  </section>\n"));
        }
        if let Some(table) = outcome.table_html() {
            html.push_str("  <h2 class=\"mt-4\">Last trading days</h2>\n");
            html.push_str(&format!("  <section id=\"table\">\n{table}\n  </section>\n"));
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}
