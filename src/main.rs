#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod infra;
mod ui;
mod util;

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use crate::util::version::APP_NAME;

fn main() {
    configure_linux_graphics();

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = builder.with_cfg(desktop! {
        DesktopConfig::new().with_window(WindowBuilder::new().with_title(APP_NAME))
    });

    builder.launch(app::App);
}

/// Explicit-sync on Wayland crashes some driver/WebKit combinations. Steer
/// wgpu to GL and WebKit away from DMABUF unless the user set either knob.
fn configure_linux_graphics() {
    if std::env::var("WAYLAND_DISPLAY").is_err() {
        return;
    }
    if std::env::var("WGPU_BACKEND").is_err() {
        std::env::set_var("WGPU_BACKEND", "gl");
    }
    if std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err() {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }
}
