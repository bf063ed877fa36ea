pub mod axes;
pub mod bar_chart;
pub mod displacement_panel;
pub mod force_panel;
pub mod line_chart;
pub mod stress_panel;

pub use axes::ChartAxes;
pub use bar_chart::BarChart;
pub use displacement_panel::DisplacementPanel;
pub use force_panel::ForcePanel;
pub use line_chart::LineChart;
pub use stress_panel::StressPanel;
