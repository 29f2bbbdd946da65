mod curve_view;
mod hud;
mod start_screen;
mod status_bar;

pub use curve_view::CurveWidget;
pub use hud::HudWidget;
pub use start_screen::StartScreenWidget;
pub use status_bar::StatusBarWidget;
