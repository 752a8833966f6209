pub mod anchor;
pub mod line_metrics;
