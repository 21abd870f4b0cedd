pub mod chart;
pub mod styles;

#[cfg(test)]
mod tests;

pub use chart::{render_chart, render_chart_async};
