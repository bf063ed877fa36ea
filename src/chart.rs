//! SVG chart geometry and value formatting
//!
//! Everything here is pure so the panels can be checked without a renderer:
//! a `ChartFrame` maps series values to pixel positions, and `ValueScale`
//! decides how values are printed on ticks, tooltips and bar labels.

use crate::shaping::SeriesPoint;

const PA_PER_MPA: f64 = 1_000_000.0;

/// Display transform applied to a series. Stored values never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueScale {
    #[default]
    Raw,
    /// Pascal values shown in MPa
    Megapascal,
}

impl ValueScale {
    pub fn tick(self, value: f64) -> String {
        match self {
            ValueScale::Raw => format_plain(value),
            ValueScale::Megapascal => format!("{:.1} MPa", value / PA_PER_MPA),
        }
    }

    pub fn tooltip(self, value: f64) -> String {
        match self {
            ValueScale::Raw => format_plain(value),
            ValueScale::Megapascal => format!("{:.2} MPa", value / PA_PER_MPA),
        }
    }

    pub fn bar_label(self, value: f64) -> String {
        match self {
            ValueScale::Raw => format_plain(value),
            ValueScale::Megapascal => format!("{:.1}", value / PA_PER_MPA),
        }
    }
}

/// Compact number formatting for axis ticks and tooltips
pub fn format_plain(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-3..1e5).contains(&magnitude) {
        return format!("{value:.2e}");
    }
    let text = format!("{value:.4}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.to_string()
}

/// Outer size and inner plotting margins, in px
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSize {
    pub width: f64,
    pub height: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    /// Rotation of the category labels, degrees
    pub label_angle: f64,
}

impl ChartSize {
    /// 600x400 with room for rotated category labels
    pub const WIDE: ChartSize = ChartSize {
        width: 600.0,
        height: 400.0,
        top: 20.0,
        right: 30.0,
        bottom: 70.0,
        left: 80.0,
        label_angle: -30.0,
    };

    pub const COMPACT: ChartSize = ChartSize {
        width: 500.0,
        height: 300.0,
        top: 10.0,
        right: 20.0,
        bottom: 40.0,
        left: 70.0,
        label_angle: 0.0,
    };

    pub fn plot_width(&self) -> f64 {
        (self.width - self.left - self.right).max(1.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(1.0)
    }
}

/// Y axis domain with evenly spaced "nice" ticks. Always contains zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Domain {
    const TARGET_TICKS: f64 = 5.0;

    pub fn fit(values: &[f64]) -> Self {
        let finite = values.iter().copied().filter(|v| v.is_finite());
        let (lo, hi) = finite.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if lo == hi {
            return Domain { min: 0.0, max: 1.0, step: 0.2 };
        }
        let step = nice_step((hi - lo) / Self::TARGET_TICKS);
        Domain {
            min: (lo / step).floor() * step,
            max: (hi / step).ceil() * step,
            step,
        }
    }

    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (0..=count)
            .map(|k| {
                let tick = self.min + k as f64 * self.step;
                // snap float noise around zero so it prints as "0"
                if tick.abs() < self.step * 1e-9 { 0.0 } else { tick }
            })
            .collect()
    }
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Maps category index and value to pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub size: ChartSize,
    pub domain: Domain,
    pub count: usize,
}

impl ChartFrame {
    pub fn new(size: ChartSize, points: &[SeriesPoint]) -> Self {
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        Self {
            size,
            domain: Domain::fit(&values),
            count: points.len(),
        }
    }

    pub fn band_width(&self) -> f64 {
        self.size.plot_width() / self.count.max(1) as f64
    }

    /// Horizontal centre of category `index`
    pub fn x(&self, index: usize) -> f64 {
        self.size.left + self.band_width() * (index as f64 + 0.5)
    }

    pub fn y(&self, value: f64) -> f64 {
        let span = self.domain.max - self.domain.min;
        let ratio = (value - self.domain.min) / span;
        self.size.top + self.size.plot_height() * (1.0 - ratio)
    }

    pub fn x_axis_y(&self) -> f64 {
        self.size.top + self.size.plot_height()
    }

    pub fn plot_right(&self) -> f64 {
        self.size.left + self.size.plot_width()
    }
}

/// One y axis tick: pixel row and printed label
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub y: f64,
    pub label: String,
}

pub fn y_ticks(frame: &ChartFrame, scale: ValueScale) -> Vec<Tick> {
    frame
        .domain
        .ticks()
        .into_iter()
        .map(|value| Tick {
            y: frame.y(value),
            label: scale.tick(value),
        })
        .collect()
}

/// One vertex of a line series
#[derive(Debug, Clone, PartialEq)]
pub struct LineVertex {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub tooltip: String,
}

pub fn line_vertices(frame: &ChartFrame, points: &[SeriesPoint], scale: ValueScale) -> Vec<LineVertex> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| LineVertex {
            x: frame.x(i),
            y: frame.y(p.value),
            label: p.label.clone(),
            tooltip: format!("{}: {}", p.label, scale.tooltip(p.value)),
        })
        .collect()
}

/// SVG `points` attribute for a polyline through the vertices, in index order
pub fn polyline_path(vertices: &[LineVertex]) -> String {
    vertices
        .iter()
        .map(|v| format!("{:.2},{:.2}", v.x, v.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One bar, anchored at zero
#[derive(Debug, Clone, PartialEq)]
pub struct BarShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub label: String,
    pub value_label: String,
    pub tooltip: String,
}

pub fn bar_shapes(frame: &ChartFrame, points: &[SeriesPoint], scale: ValueScale) -> Vec<BarShape> {
    const FILL_RATIO: f64 = 0.7;

    let width = frame.band_width() * FILL_RATIO;
    let zero = frame.y(0.0);
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let top = frame.y(p.value);
            BarShape {
                x: frame.x(i) - width / 2.0,
                y: top.min(zero),
                width,
                height: (top - zero).abs(),
                center_x: frame.x(i),
                label: p.label.clone(),
                value_label: scale.bar_label(p.value),
                tooltip: format!("{}: {}", p.label, scale.tooltip(p.value)),
            }
        })
        .collect()
}
