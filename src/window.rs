// glhandles
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;

use crate::{backend::*, config::WindowConfig};

/// Owned window created through a [`Windowing`] backend.
///
/// The window is destroyed when dropped.
pub struct Window<'w> {
    windowing: &'w dyn Windowing,
    id: WindowId,
}

impl<'w> Window<'w> {
    pub fn create(
        windowing: &'w dyn Windowing,
        width: u32,
        height: u32,
        title: &str,
    ) -> Result<Self, WindowError> {
        let id = windowing.create_window(width, height, title)?;
        log::debug!("Window {id} created ({width}x{height}, \"{title}\")");
        Ok(Self { windowing, id })
    }

    /// Opens a window ready for rendering.
    ///
    /// Initializes the backend, applies the hints of `config`, creates the
    /// window, makes its context current, sets the cursor mode and loads
    /// OpenGL through the new context.
    pub fn open(windowing: &'w dyn Windowing, config: &WindowConfig) -> Result<Self, WindowError> {
        windowing.init()?;
        for hint in config.hints() {
            windowing.window_hint(hint);
        }

        let window = Self::create(windowing, config.width, config.height, &config.title)?;
        window.make_current();
        window.set_input_mode(InputMode::Cursor(config.cursor_mode.into()));
        windowing.load_gl(window.id)?;
        Ok(window)
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn make_current(&self) {
        self.windowing.make_context_current(self.id);
    }

    pub fn should_close(&self) -> bool {
        self.windowing.window_should_close(self.id)
    }

    pub fn set_should_close(&self, value: bool) {
        self.windowing.set_window_should_close(self.id, value);
    }

    pub fn swap_buffers(&self) {
        self.windowing.swap_buffers(self.id);
    }

    pub fn set_input_mode(&self, mode: InputMode) {
        self.windowing.set_input_mode(self.id, mode);
    }

    pub fn set_key_callback(&self, callback: KeyCallback) -> Option<KeyCallback> {
        self.windowing.set_key_callback(self.id, callback)
    }

    pub fn set_cursor_pos_callback(&self, callback: CursorPosCallback) -> Option<CursorPosCallback> {
        self.windowing.set_cursor_pos_callback(self.id, callback)
    }

    pub fn set_framebuffer_size_callback(
        &self,
        callback: FramebufferSizeCallback,
    ) -> Option<FramebufferSizeCallback> {
        self.windowing.set_framebuffer_size_callback(self.id, callback)
    }
}

impl Drop for Window<'_> {
    fn drop(&mut self) {
        self.windowing.destroy_window(self.id);
        log::debug!("Window {} destroyed", self.id);
    }
}

impl fmt::Debug for Window<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
