use super::super::domain::WiscarDimension;
use super::views::WiscarScores;
use serde::Serialize;
use std::f64::consts::PI;

const CENTER: f64 = 150.0;
const RADIUS: f64 = 100.0;
const LABEL_OFFSET: f64 = 30.0;
const GRID_LEVELS: [u8; 5] = [20, 40, 60, 80, 100];

/// Radar-chart geometry for the six WISCAR axes on a 300x300 canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WiscarProfile {
    pub center: (f64, f64),
    pub radius: f64,
    /// Reference rings drawn behind the polygon, as percentages of the radius.
    pub grid_levels: [u8; 5],
    pub axes: Vec<ProfileAxis>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAxis {
    pub dimension: WiscarDimension,
    pub label: &'static str,
    pub value: u8,
    /// Polygon vertex for this axis, scaled by `value`.
    pub point: (f64, f64),
    pub label_position: (f64, f64),
}

impl WiscarProfile {
    pub fn from_scores(scores: &WiscarScores) -> Self {
        let count = WiscarDimension::ordered().len() as f64;
        let axes = scores
            .entries()
            .iter()
            .enumerate()
            .map(|(index, (dimension, value))| {
                // First axis points straight up.
                let angle = (index as f64 * 2.0 * PI) / count - PI / 2.0;
                let reach = f64::from(*value) / 100.0 * RADIUS;
                ProfileAxis {
                    dimension: *dimension,
                    label: dimension.chart_label(),
                    value: *value,
                    point: polar(angle, reach),
                    label_position: polar(angle, RADIUS + LABEL_OFFSET),
                }
            })
            .collect();

        Self {
            center: (CENTER, CENTER),
            radius: RADIUS,
            grid_levels: GRID_LEVELS,
            axes,
        }
    }

    /// Vertices formatted as an SVG `points` attribute.
    pub fn polygon_points(&self) -> String {
        self.axes
            .iter()
            .map(|axis| format!("{},{}", axis.point.0, axis.point.1))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn polar(angle: f64, distance: f64) -> (f64, f64) {
    (
        CENTER + angle.cos() * distance,
        CENTER + angle.sin() * distance,
    )
}
