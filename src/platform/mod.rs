//! Per-platform implementations of [`crate::controller::TextInputService`].

#[cfg(target_os = "windows")]
mod windows_impl;

#[cfg(target_os = "macos")]
mod macos_impl;

#[cfg(target_os = "linux")]
mod linux_impl;

#[cfg(target_os = "windows")]
pub use windows_impl::SystemInputService;

#[cfg(target_os = "macos")]
pub use macos_impl::SystemInputService;

#[cfg(target_os = "linux")]
pub use linux_impl::SystemInputService;

/// Verbose diagnostics toggle, exported by the CLI layer.
#[cfg(any(target_os = "macos", target_os = "windows"))]
pub(crate) fn verbose() -> bool {
    std::env::var_os("IMCTL_VERBOSE").is_some()
}
