pub mod layout;
pub mod surface;
pub mod theme;
mod widget;

pub use layout::calculate_widget_chunks;
pub use surface::TerminalSurface;
pub use theme::AmbientCycle;
pub use widget::draw_widget;
