//! Chart builders
//!
//! Builds the two dashboard figures from a filtered record subset. The
//! line chart windows on the *subset's* own latest date, while the map
//! pins to the *full* dataset's latest date supplied by the caller; the
//! two panels intentionally disagree when a selection has no rows on the
//! global latest date.

use crate::dataset::CaseRecord;
use crate::view::figure::{Figure, Layout, Trace, PALETTE};
use chrono::{Duration, NaiveDate};

/// Days of history shown in the line chart.
const LINE_CHART_WINDOW_DAYS: i64 = 30;

/// Diameter the largest bubble on the map scales to.
const MAP_MAX_BUBBLE_PX: f64 = 40.0;

/// Build the time-series line chart for a filtered subset.
///
/// Restricts to records dated within the last 30 days of the subset's own
/// maximum valid date, one series per country in first-appearance order.
/// Records with unparseable dates never fall inside the window. An empty
/// subset (or one with no valid dates) yields a figure with zero traces.
pub fn line_chart(records: &[CaseRecord]) -> Figure {
    let layout = Layout::time_series("COVID-19 Cases Over Time (Last 30 Days)");

    let Some(latest) = records.iter().filter_map(|r| r.date.valid()).max() else {
        return Figure {
            data: Vec::new(),
            layout,
        };
    };
    let cutoff = latest - Duration::days(LINE_CHART_WINDOW_DAYS);

    let mut traces: Vec<Trace> = Vec::new();
    for record in records {
        let Some(date) = record.date.valid() else {
            continue;
        };
        if date < cutoff {
            continue;
        }

        let idx = match traces.iter().position(|t| t.name == record.country) {
            Some(idx) => idx,
            None => {
                let color = PALETTE[traces.len() % PALETTE.len()];
                traces.push(Trace::lines(record.country.clone(), color));
                traces.len() - 1
            }
        };

        let trace = &mut traces[idx];
        if let (Some(x), Some(y)) = (trace.x.as_mut(), trace.y.as_mut()) {
            x.push(date.format("%Y-%m-%d").to_string());
            y.push(record.cases);
        }
    }

    Figure {
        data: traces,
        layout,
    }
}

/// Build the world bubble map for a filtered subset.
///
/// `latest` must be the full dataset's maximum date, not the subset's:
/// a selection with no rows on that date renders an empty map even while
/// the line chart still shows the subset's own 30-day window. Records
/// without coordinates are dropped. Bubble areas are proportional to case
/// counts, scaled against the largest count on the map.
pub fn case_map(records: &[CaseRecord], latest: Option<NaiveDate>) -> Figure {
    let layout = Layout::world_map("COVID-19 Cases Worldwide");

    let Some(latest) = latest else {
        return Figure {
            data: Vec::new(),
            layout,
        };
    };

    let mut traces: Vec<Trace> = Vec::new();
    let mut max_cases = 0u64;
    for record in records {
        if record.date.valid() != Some(latest) {
            continue;
        }
        let (Some(lat), Some(long)) = (record.lat, record.long) else {
            continue;
        };

        let idx = match traces.iter().position(|t| t.name == record.country) {
            Some(idx) => idx,
            None => {
                let color = PALETTE[traces.len() % PALETTE.len()];
                traces.push(Trace::geo_markers(record.country.clone(), color));
                traces.len() - 1
            }
        };

        let trace = &mut traces[idx];
        if let (Some(lats), Some(lons), Some(texts)) =
            (trace.lat.as_mut(), trace.lon.as_mut(), trace.text.as_mut())
        {
            lats.push(lat);
            lons.push(long);
            texts.push(format!("{}: {} cases", record.country, record.cases));
        }
        if let Some(sizes) = trace.marker.as_mut().and_then(|m| m.size.as_mut()) {
            sizes.push(record.cases as f64);
        }
        max_cases = max_cases.max(record.cases);
    }

    // Plotly area sizing: sizeref scales the largest bubble to the target
    // diameter. Guard against a zero max so sizeref stays positive.
    let sizeref = 2.0 * (max_cases.max(1) as f64) / MAP_MAX_BUBBLE_PX.powi(2);
    for trace in &mut traces {
        if let Some(marker) = trace.marker.as_mut() {
            marker.sizeref = Some(sizeref);
        }
    }

    Figure {
        data: traces,
        layout,
    }
}
