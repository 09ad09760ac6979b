pub mod controls_view;
pub mod flows_view;
pub mod sweep_plot_view;

pub use controls_view::{ControlsView, SliderValues};
pub use flows_view::FlowsView;
pub use sweep_plot_view::SweepPlotView;
