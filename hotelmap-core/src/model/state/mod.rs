mod browser_action;
mod browser_state;
mod view_mode;

pub use browser_action::BrowserAction;
pub use browser_state::BrowserState;
pub use view_mode::ViewMode;
