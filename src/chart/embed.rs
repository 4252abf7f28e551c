use crate::chart::figure::Figure;
use crate::models::Ticker;
use crate::{Error, Result};

pub fn chart_div_id(ticker: &Ticker) -> String {
    let suffix: String = ticker
        .as_str()
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect();
    format!("chart-{suffix}")
}

/// A `<div>` plus the `<script>` that draws into it. Expects plotly.js to be
/// loaded by the surrounding page.
pub fn to_embed_html(figure: &Figure, div_id: &str) -> Result<String> {
    let data = script_json(&figure.data)?;
    let layout = script_json(&figure.layout)?;
    Ok(format!(
        "<div id=\"{div_id}\" class=\"plotly-graph-div\" style=\"height:600px; width:100%;\"></div>\n\
         <script type=\"text/javascript\">\n\
         if (document.getElementById(\"{div_id}\")) {{ Plotly.newPlot(\"{div_id}\", {data}, {layout}, {{\"responsive\": true}}); }}\n\
         </script>"
    ))
}

fn script_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let text = serde_json::to_string(value)
        .map_err(|err| Error::new(format!("chart serialization failed: {err}")))?;
    Ok(text.replace("</", "<\\/"))
}
