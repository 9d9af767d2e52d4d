pub mod pacing;
pub mod prize_service;
pub mod wheel_view;

pub use pacing::GlooPacer;
pub use prize_service::GlooPrizeClient;
pub use wheel_view::YewWheelView;
