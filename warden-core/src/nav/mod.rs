//! Screen navigation
//!
//! The [`Navigator`] owns the current screen and the navigation timers and
//! turns button edges plus elapsed time into screen changes, session side
//! effects and [`RenderCommand`]s.

pub mod command;
pub mod context;
pub mod home;
pub mod info;
pub mod input;
pub mod machine;
pub mod screen;

pub use command::{RenderCommand, Transition};
pub use context::NavContext;
pub use home::{HomeBanner, HomeView};
pub use info::{InfoPageView, InfoRow};
pub use input::{Button, ButtonEdges};
pub use machine::Navigator;
pub use screen::{InfoPage, ScreenId};
