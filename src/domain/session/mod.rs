//! Session domain module

mod info;
mod platform;

pub use info::{
    SessionInfo, CURRENT_DESKTOP_VAR, DESKTOP_SESSION_VAR, GNOME_SHELL_MODE_VAR,
    SESSION_TYPE_VAR, WAYLAND_DISPLAY_VAR, X11_DISPLAY_VAR,
};
pub use platform::Platform;
