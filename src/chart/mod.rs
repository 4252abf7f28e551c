pub mod embed;
pub mod figure;

pub use embed::{chart_div_id, to_embed_html};
pub use figure::{
    build_figure, interval_label, AxisTitle, BarTrace, CandlestickTrace, Figure, Layout,
    LineStyle, ScatterTrace, Template, Trace,
};
