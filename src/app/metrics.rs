use crate::app::pipeline::PageOutcome;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

static START_TIME: OnceLock<i64> = OnceLock::new();

static REQUESTS_TOTAL: AtomicU64 = AtomicU64::new(0);
static RENDERED_TOTAL: AtomicU64 = AtomicU64::new(0);
static NO_DATA_TOTAL: AtomicU64 = AtomicU64::new(0);
static ERRORS_TOTAL: AtomicU64 = AtomicU64::new(0);

pub fn init_start_time() {
    let _ = START_TIME.set(now_epoch());
}

pub fn record_outcome(outcome: &PageOutcome) {
    REQUESTS_TOTAL.fetch_add(1, Ordering::Relaxed);
    let counter = match outcome {
        PageOutcome::Rendered { .. } => &RENDERED_TOTAL,
        PageOutcome::NoData { .. } => &NO_DATA_TOTAL,
        PageOutcome::Failed { .. } => &ERRORS_TOTAL,
    };
    counter.fetch_add(1, Ordering::Relaxed);
}

pub fn snapshot() -> Vec<(&'static str, u64)> {
    vec![
        ("stockview_requests_total", REQUESTS_TOTAL.load(Ordering::Relaxed)),
        ("stockview_rendered_total", RENDERED_TOTAL.load(Ordering::Relaxed)),
        ("stockview_no_data_total", NO_DATA_TOTAL.load(Ordering::Relaxed)),
        ("stockview_errors_total", ERRORS_TOTAL.load(Ordering::Relaxed)),
        (
            "stockview_start_time",
            START_TIME.get().copied().unwrap_or(0).max(0) as u64,
        ),
    ]
}

pub fn render_text() -> String {
    let mut output = String::new();
    for (name, value) in snapshot() {
        output.push_str(&format!("{name} {value}\n"));
    }
    output
}

pub fn now_epoch() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs() as i64)
        .unwrap_or(0)
}
