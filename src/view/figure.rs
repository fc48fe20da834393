//! Plotly figure model
//!
//! Minimal serde model of the Plotly figure JSON the dashboard page feeds
//! to `Plotly.react`. Only the attributes the two chart panels use are
//! modeled; optional fields are skipped when unset so the emitted JSON
//! stays close to what Plotly expects.

use serde::Serialize;

/// A complete figure: traces plus layout
#[derive(Debug, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// One data series
#[derive(Debug, Serialize)]
pub struct Trace {
    /// Trace type: "scatter" or "scattergeo"
    #[serde(rename = "type")]
    pub kind: String,
    /// Series name shown in the legend (country)
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// X values (ISO dates) for scatter traces
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<String>>,
    /// Y values (case counts) for scatter traces
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<u64>>,
    /// Latitudes for scattergeo traces
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<Vec<f64>>,
    /// Longitudes for scattergeo traces
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<Vec<f64>>,
    /// Hover text per point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
}

impl Trace {
    /// A lines-mode scatter trace for the time-series chart.
    pub fn lines(name: impl Into<String>, color: &str) -> Self {
        Self {
            kind: "scatter".to_string(),
            name: name.into(),
            mode: Some("lines".to_string()),
            x: Some(Vec::new()),
            y: Some(Vec::new()),
            lat: None,
            lon: None,
            text: None,
            marker: None,
            line: Some(Line {
                color: color.to_string(),
            }),
        }
    }

    /// A markers-mode scattergeo trace for the bubble map.
    pub fn geo_markers(name: impl Into<String>, color: &str) -> Self {
        Self {
            kind: "scattergeo".to_string(),
            name: name.into(),
            mode: Some("markers".to_string()),
            x: None,
            y: None,
            lat: Some(Vec::new()),
            lon: Some(Vec::new()),
            text: Some(Vec::new()),
            marker: Some(Marker {
                size: Some(Vec::new()),
                sizemode: Some("area".to_string()),
                sizeref: None,
                sizemin: Some(2.0),
                color: Some(color.to_string()),
            }),
            line: None,
        }
    }
}

/// Line styling
#[derive(Debug, Serialize)]
pub struct Line {
    pub color: String,
}

/// Marker styling, with Plotly's area-based bubble sizing
#[derive(Debug, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizemode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizeref: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizemin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Figure layout
#[derive(Debug, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
}

impl Layout {
    /// Layout for the time-series line chart.
    pub fn time_series(title: &str) -> Self {
        Self {
            title: Title {
                text: title.to_string(),
            },
            xaxis: Some(Axis {
                title: "Date".to_string(),
            }),
            yaxis: Some(Axis {
                title: "Cases".to_string(),
            }),
            geo: None,
        }
    }

    /// Layout for the world bubble map.
    pub fn world_map(title: &str) -> Self {
        Self {
            title: Title {
                text: title.to_string(),
            },
            xaxis: None,
            yaxis: None,
            geo: Some(Geo {
                projection: Projection {
                    kind: "natural earth".to_string(),
                },
                showland: true,
            }),
        }
    }
}

/// Title text wrapper
#[derive(Debug, Serialize)]
pub struct Title {
    pub text: String,
}

/// Axis title wrapper
#[derive(Debug, Serialize)]
pub struct Axis {
    pub title: String,
}

/// Geo subplot settings
#[derive(Debug, Serialize)]
pub struct Geo {
    pub projection: Projection,
    pub showland: bool,
}

/// Map projection
#[derive(Debug, Serialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: String,
}

/// Shared trace color palette
pub const PALETTE: [&str; 5] = ["#4CAF50", "#2196F3", "#FF9800", "#9C27B0", "#F44336"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_trace_omits_geo_fields() {
        let trace = Trace::lines("Canada", PALETTE[0]);
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["type"], "scatter");
        assert_eq!(json["name"], "Canada");
        assert!(json.get("lat").is_none());
        assert!(json.get("marker").is_none());
    }

    #[test]
    fn test_geo_trace_omits_cartesian_fields() {
        let trace = Trace::geo_markers("Canada", PALETTE[1]);
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["type"], "scattergeo");
        assert!(json.get("x").is_none());
        assert_eq!(json["marker"]["sizemode"], "area");
    }
}
