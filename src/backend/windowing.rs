// glhandles
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

use glfw::{Action, CursorMode, Key, Modifiers, Scancode, WindowHint};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WindowError {
    #[error("GLFW initialization failed: {0}")]
    Init(String),
    #[error("GLFW is not initialized")]
    NotInitialized,
    #[error("Failed to create window \"{0}\"")]
    Creation(String),
    #[error("Unknown window {0}")]
    UnknownWindow(WindowId),
    #[error("Failed to load OpenGL function pointers")]
    GlLoad,
}

/// Handle of a window created through a [`Windowing`] backend.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WindowId(pub(crate) usize);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub type ErrorCallback = Box<dyn FnMut(glfw::Error, String)>;
pub type KeyCallback = Box<dyn FnMut(WindowId, Key, Scancode, Action, Modifiers)>;
pub type CursorPosCallback = Box<dyn FnMut(WindowId, f64, f64)>;
pub type FramebufferSizeCallback = Box<dyn FnMut(WindowId, i32, i32)>;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputMode {
    Cursor(CursorMode),
    StickyKeys(bool),
    StickyMouseButtons(bool),
}

/// Window system operations used by applications and [`crate::Window`].
///
/// Callbacks run from inside [`Windowing::poll_events`] on the calling
/// thread. Each `set_*_callback` returns the callback it replaced.
pub trait Windowing {
    /// Initializes the library. Calling it again is a no-op.
    fn init(&self) -> Result<(), WindowError>;

    /// Hint applied to windows created afterwards.
    fn window_hint(&self, hint: WindowHint);

    fn create_window(&self, width: u32, height: u32, title: &str)
        -> Result<WindowId, WindowError>;

    fn destroy_window(&self, window: WindowId);

    fn make_context_current(&self, window: WindowId);

    /// Processes pending events and dispatches them to callbacks.
    fn poll_events(&self);

    fn set_error_callback(&self, callback: ErrorCallback) -> Option<ErrorCallback>;

    fn set_key_callback(&self, window: WindowId, callback: KeyCallback) -> Option<KeyCallback>;

    fn set_cursor_pos_callback(
        &self,
        window: WindowId,
        callback: CursorPosCallback,
    ) -> Option<CursorPosCallback>;

    fn set_framebuffer_size_callback(
        &self,
        window: WindowId,
        callback: FramebufferSizeCallback,
    ) -> Option<FramebufferSizeCallback>;

    fn set_input_mode(&self, window: WindowId, mode: InputMode);

    fn set_window_should_close(&self, window: WindowId, value: bool);

    /// `true` for unknown windows, so loops over a dead window end.
    fn window_should_close(&self, window: WindowId) -> bool;

    fn swap_buffers(&self, window: WindowId);

    /// Destroys every remaining window and shuts the library down.
    fn terminate(&self);

    /// Loads OpenGL function pointers through `window`'s context.
    ///
    /// Fails when core entry points cannot be resolved; nothing in the
    /// [`crate::backend::NativeGl`] driver is usable after that.
    fn load_gl(&self, window: WindowId) -> Result<(), WindowError>;
}
