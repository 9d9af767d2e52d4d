pub mod form_view;
pub mod wheel_canvas;
pub mod wheel_panel;
pub mod wheel_utils;

pub use form_view::FormView;
pub use wheel_panel::WheelPanel;
