use std::f64::consts::{FRAC_PI_2, TAU};

use crate::models::{Category, Incident};

pub const CHART_HEADER: (&str, &str) = ("Product", "Count");

const PALETTE: [&str; 6] = [
    "#3366cc", "#dc3912", "#ff9900", "#109618", "#990099", "#0099c6",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartRow {
    pub label: String,
    pub count: usize,
}

/// Count-by-product table behind the "Product Distribution" chart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartSeries {
    rows: Vec<ChartRow>,
}

/// Groups the visible incidents by product, in first-seen order.
pub fn product_distribution(incidents: &[Incident]) -> ChartSeries {
    let mut rows: Vec<ChartRow> = Vec::new();

    for incident in incidents {
        let label = incident.product.label();
        match rows.iter_mut().find(|row| row.label == label) {
            Some(row) => row.count += 1,
            None => rows.push(ChartRow {
                label: label.to_string(),
                count: 1,
            }),
        }
    }

    ChartSeries { rows }
}

impl ChartSeries {
    pub fn total(&self) -> usize {
        self.rows.iter().map(|row| row.count).sum()
    }

    /// A header-only table carries nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header row followed by one `[label, count]` row per product.
    pub fn data_table(&self) -> Vec<[String; 2]> {
        let mut table = vec![[CHART_HEADER.0.to_string(), CHART_HEADER.1.to_string()]];
        table.extend(
            self.rows
                .iter()
                .map(|row| [row.label.clone(), row.count.to_string()]),
        );
        table
    }

    pub fn slices(&self, geometry: DonutGeometry) -> Vec<Slice> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }

        let mut consumed = 0usize;
        self.rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let start = consumed as f64 / total as f64;
                consumed += row.count;
                let end = consumed as f64 / total as f64;

                Slice {
                    label: row.label.clone(),
                    count: row.count,
                    fraction: end - start,
                    color: PALETTE[idx % PALETTE.len()],
                    path: geometry.slice_path(start, end),
                }
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub label: String,
    pub count: usize,
    pub fraction: f64,
    pub color: &'static str,
    pub path: String,
}

impl Slice {
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.fraction * 100.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DonutGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    /// Inner radius as a share of the outer one.
    pub hole: f64,
}

impl Default for DonutGeometry {
    fn default() -> Self {
        Self {
            cx: 100.0,
            cy: 100.0,
            radius: 90.0,
            hole: 0.4,
        }
    }
}

impl DonutGeometry {
    pub fn view_box(&self) -> String {
        format!(
            "0 0 {} {}",
            fmt_num(self.cx * 2.0),
            fmt_num(self.cy * 2.0)
        )
    }

    /// SVG path for the ring segment between two fractions of a full turn,
    /// clockwise from twelve o'clock.
    fn slice_path(&self, start: f64, end: f64) -> String {
        let outer = self.radius;
        let inner = self.radius * self.hole;

        if end - start >= 1.0 - f64::EPSILON {
            // One arc cannot close on itself; draw each circle as two halves.
            return format!(
                "{} {}",
                self.circle_path(outer, 1),
                self.circle_path(inner, 0)
            );
        }

        let a0 = start * TAU - FRAC_PI_2;
        let a1 = end * TAU - FRAC_PI_2;
        let large_arc = u8::from(end - start > 0.5);
        let (ox0, oy0) = self.point(outer, a0);
        let (ox1, oy1) = self.point(outer, a1);
        let (ix1, iy1) = self.point(inner, a1);
        let (ix0, iy0) = self.point(inner, a0);

        format!(
            "M {} {} A {r} {r} 0 {large_arc} 1 {} {} L {} {} A {ir} {ir} 0 {large_arc} 0 {} {} Z",
            fmt_num(ox0),
            fmt_num(oy0),
            fmt_num(ox1),
            fmt_num(oy1),
            fmt_num(ix1),
            fmt_num(iy1),
            fmt_num(ix0),
            fmt_num(iy0),
            r = fmt_num(outer),
            ir = fmt_num(inner),
        )
    }

    fn circle_path(&self, radius: f64, sweep: u8) -> String {
        let r = fmt_num(radius);
        let top = fmt_num(self.cy - radius);
        let bottom = fmt_num(self.cy + radius);
        let cx = fmt_num(self.cx);
        format!(
            "M {cx} {top} A {r} {r} 0 1 {sweep} {cx} {bottom} A {r} {r} 0 1 {sweep} {cx} {top} Z"
        )
    }

    fn point(&self, radius: f64, angle: f64) -> (f64, f64) {
        (
            self.cx + radius * angle.cos(),
            self.cy + radius * angle.sin(),
        )
    }
}

fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid "-0" in path data.
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}
