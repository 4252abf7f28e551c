use crate::analysis::PriceFrame;
use crate::models::Ticker;
use serde::Serialize;

pub const SHORT_MA_COLOR: &str = "blue";
pub const LONG_MA_COLOR: &str = "orange";
pub const MA_LINE_WIDTH: f64 = 1.5;
pub const VOLUME_OPACITY: f64 = 0.3;

/// Plotly figure: `data` holds the traces, `layout` the axes and theme.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Candlestick(CandlestickTrace),
    Scatter(ScatterTrace),
    Bar(BarTrace),
}

impl Trace {
    pub fn name(&self) -> &str {
        match self {
            Trace::Candlestick(trace) => &trace.name,
            Trace::Scatter(trace) => &trace.name,
            Trace::Bar(trace) => &trace.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CandlestickTrace {
    pub name: String,
    pub x: Vec<String>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<Option<f64>>,
    pub line: LineStyle,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarTrace {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub yaxis: String,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

impl AxisTitle {
    fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RangeSlider {
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct XAxis {
    pub title: AxisTitle,
    pub rangeslider: RangeSlider,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct YAxis {
    pub title: AxisTitle,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SecondaryYAxis {
    pub title: AxisTitle,
    pub overlaying: String,
    pub side: String,
    pub showgrid: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    pub title: AxisTitle,
    pub xaxis: XAxis,
    pub yaxis: YAxis,
    pub yaxis2: SecondaryYAxis,
    pub template: Template,
}

/// Inline form of the `plotly_dark` theme; plotly.js only accepts template
/// objects, not registered names.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Template {
    pub layout: TemplateLayout,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TemplateLayout {
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
    pub font: TemplateFont,
    pub xaxis: TemplateAxis,
    pub yaxis: TemplateAxis,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TemplateFont {
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TemplateAxis {
    pub gridcolor: String,
    pub linecolor: String,
    pub zerolinecolor: String,
}

impl Template {
    pub fn plotly_dark() -> Self {
        let axis = TemplateAxis {
            gridcolor: "#283442".to_string(),
            linecolor: "#506784".to_string(),
            zerolinecolor: "#283442".to_string(),
        };
        Self {
            layout: TemplateLayout {
                paper_bgcolor: "rgb(17,17,17)".to_string(),
                plot_bgcolor: "rgb(17,17,17)".to_string(),
                font: TemplateFont {
                    color: "#f2f5fa".to_string(),
                },
                xaxis: axis.clone(),
                yaxis: axis,
            },
        }
    }
}

/// Unit word for moving-average trace names, one bar per `interval`.
pub fn interval_label(interval: &str) -> &'static str {
    match interval {
        "1wk" => "Week",
        "1mo" => "Month",
        _ => "Day",
    }
}

pub fn build_figure(ticker: &Ticker, frame: &PriceFrame, interval: &str) -> Figure {
    let x = frame.dates();
    let unit = interval_label(interval);

    let candles = CandlestickTrace {
        name: "Candlesticks".to_string(),
        x: x.clone(),
        open: frame.column(|bar| bar.open),
        high: frame.column(|bar| bar.high),
        low: frame.column(|bar| bar.low),
        close: frame.column(|bar| bar.close),
    };
    let short_ma = ScatterTrace {
        name: format!("{}-{unit} MA", frame.short_window),
        x: x.clone(),
        y: frame.ma_short.clone(),
        line: LineStyle {
            color: SHORT_MA_COLOR.to_string(),
            width: MA_LINE_WIDTH,
        },
    };
    let long_ma = ScatterTrace {
        name: format!("{}-{unit} MA", frame.long_window),
        x: x.clone(),
        y: frame.ma_long.clone(),
        line: LineStyle {
            color: LONG_MA_COLOR.to_string(),
            width: MA_LINE_WIDTH,
        },
    };
    let volume = BarTrace {
        name: "Volume".to_string(),
        x,
        y: frame.column(|bar| bar.volume),
        yaxis: "y2".to_string(),
        opacity: VOLUME_OPACITY,
    };

    Figure {
        data: vec![
            Trace::Candlestick(candles),
            Trace::Scatter(short_ma),
            Trace::Scatter(long_ma),
            Trace::Bar(volume),
        ],
        layout: Layout {
            title: AxisTitle::new(format!("{ticker} Stock Price (Candlestick + Volume)")),
            xaxis: XAxis {
                title: AxisTitle::new("Date"),
                rangeslider: RangeSlider { visible: false },
            },
            yaxis: YAxis {
                title: AxisTitle::new("Price (USD)"),
            },
            yaxis2: SecondaryYAxis {
                title: AxisTitle::new("Volume"),
                overlaying: "y".to_string(),
                side: "right".to_string(),
                showgrid: false,
            },
            template: Template::plotly_dark(),
        },
    }
}
