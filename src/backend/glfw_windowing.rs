// glhandles
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

use glfw::{Context, WindowEvent, WindowHint};
use std::{cell::RefCell, rc::Rc};

use super::windowing::*;

struct GlfwWindow {
    handle: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
    key_callback: Option<KeyCallback>,
    cursor_pos_callback: Option<CursorPosCallback>,
    framebuffer_size_callback: Option<FramebufferSizeCallback>,
}

/// [`Windowing`] backed by GLFW.
///
/// Window ids are indices into a slot list and are never reused within
/// one instance. GLFW is terminated when the instance is dropped or
/// [`Windowing::terminate`] is called.
pub struct GlfwWindowing {
    glfw: RefCell<Option<glfw::Glfw>>,
    windows: RefCell<Vec<Option<GlfwWindow>>>,
    error_callback: Rc<RefCell<Option<ErrorCallback>>>,
}

impl GlfwWindowing {
    /// Initializes GLFW with an error callback that logs every error.
    pub fn new() -> Result<Self, WindowError> {
        let windowing = Self {
            glfw: RefCell::new(None),
            windows: RefCell::new(Vec::new()),
            error_callback: Rc::new(RefCell::new(None)),
        };
        windowing.set_error_callback(Box::new(|error, description| {
            log::error!("GLFW error: error_code={error:?}, description=\"{description}\"");
        }));
        windowing.init()?;
        Ok(windowing)
    }

    fn with_window<T>(&self, window: WindowId, f: impl FnOnce(&mut GlfwWindow) -> T) -> Option<T> {
        let mut windows = self.windows.borrow_mut();
        let entry = windows.get_mut(window.0).and_then(Option::as_mut);
        if entry.is_none() {
            log::warn!("Ignoring call on unknown window {window}");
        }
        entry.map(f)
    }

    fn dispatch(&self, window: WindowId, event: WindowEvent) {
        // Callbacks are taken out of their slot while they run so they
        // may call back into this backend.
        match event {
            WindowEvent::Key(key, scancode, action, mods) => {
                let Some(mut callback) = self.with_window(window, |w| w.key_callback.take()).flatten()
                else {
                    return;
                };
                callback(window, key, scancode, action, mods);
                self.with_window(window, move |w| {
                    w.key_callback.get_or_insert(callback);
                });
            }
            WindowEvent::CursorPos(x, y) => {
                let Some(mut callback) = self
                    .with_window(window, |w| w.cursor_pos_callback.take())
                    .flatten()
                else {
                    return;
                };
                callback(window, x, y);
                self.with_window(window, move |w| {
                    w.cursor_pos_callback.get_or_insert(callback);
                });
            }
            WindowEvent::FramebufferSize(width, height) => {
                let Some(mut callback) = self
                    .with_window(window, |w| w.framebuffer_size_callback.take())
                    .flatten()
                else {
                    return;
                };
                callback(window, width, height);
                self.with_window(window, move |w| {
                    w.framebuffer_size_callback.get_or_insert(callback);
                });
            }
            _ => {}
        }
    }
}

impl Windowing for GlfwWindowing {
    fn init(&self) -> Result<(), WindowError> {
        let mut glfw = self.glfw.borrow_mut();
        if glfw.is_some() {
            return Ok(());
        }

        let slot = Rc::clone(&self.error_callback);
        let forward = move |error: glfw::Error, description: String| {
            if let Some(callback) = slot.borrow_mut().as_mut() {
                callback(error, description);
            }
        };
        *glfw = Some(glfw::init(forward).map_err(|err| WindowError::Init(err.to_string()))?);
        log::debug!("GLFW initialized");
        Ok(())
    }

    fn window_hint(&self, hint: WindowHint) {
        match self.glfw.borrow_mut().as_mut() {
            Some(glfw) => glfw.window_hint(hint),
            None => log::warn!("Window hint {hint:?} ignored: GLFW is not initialized"),
        }
    }

    fn create_window(
        &self,
        width: u32,
        height: u32,
        title: &str,
    ) -> Result<WindowId, WindowError> {
        let (handle, events) = {
            let mut glfw = self.glfw.borrow_mut();
            let glfw = glfw.as_mut().ok_or(WindowError::NotInitialized)?;
            glfw.create_window(width, height, title, glfw::WindowMode::Windowed)
                .ok_or_else(|| WindowError::Creation(title.to_string()))?
        };

        let mut windows = self.windows.borrow_mut();
        let id = WindowId(windows.len());
        windows.push(Some(GlfwWindow {
            handle,
            events,
            key_callback: None,
            cursor_pos_callback: None,
            framebuffer_size_callback: None,
        }));
        log::debug!("Created window {id} ({width}x{height}, \"{title}\")");
        Ok(id)
    }

    fn destroy_window(&self, window: WindowId) {
        let removed = self
            .windows
            .borrow_mut()
            .get_mut(window.0)
            .and_then(Option::take);
        if removed.is_some() {
            log::debug!("Destroyed window {window}");
        }
    }

    fn make_context_current(&self, window: WindowId) {
        self.with_window(window, |w| w.handle.make_current());
    }

    fn poll_events(&self) {
        if let Some(glfw) = self.glfw.borrow_mut().as_mut() {
            glfw.poll_events();
        }

        let pending: Vec<(WindowId, WindowEvent)> = self
            .windows
            .borrow()
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|w| (WindowId(index), w)))
            .flat_map(|(id, w)| glfw::flush_messages(&w.events).map(move |(_, event)| (id, event)))
            .collect();

        for (window, event) in pending {
            self.dispatch(window, event);
        }
    }

    fn set_error_callback(&self, callback: ErrorCallback) -> Option<ErrorCallback> {
        self.error_callback.borrow_mut().replace(callback)
    }

    fn set_key_callback(&self, window: WindowId, callback: KeyCallback) -> Option<KeyCallback> {
        self.with_window(window, |w| {
            w.handle.set_key_polling(true);
            w.key_callback.replace(callback)
        })
        .flatten()
    }

    fn set_cursor_pos_callback(
        &self,
        window: WindowId,
        callback: CursorPosCallback,
    ) -> Option<CursorPosCallback> {
        self.with_window(window, |w| {
            w.handle.set_cursor_pos_polling(true);
            w.cursor_pos_callback.replace(callback)
        })
        .flatten()
    }

    fn set_framebuffer_size_callback(
        &self,
        window: WindowId,
        callback: FramebufferSizeCallback,
    ) -> Option<FramebufferSizeCallback> {
        self.with_window(window, |w| {
            w.handle.set_framebuffer_size_polling(true);
            w.framebuffer_size_callback.replace(callback)
        })
        .flatten()
    }

    fn set_input_mode(&self, window: WindowId, mode: InputMode) {
        self.with_window(window, |w| match mode {
            InputMode::Cursor(cursor) => w.handle.set_cursor_mode(cursor),
            InputMode::StickyKeys(value) => w.handle.set_sticky_keys(value),
            InputMode::StickyMouseButtons(value) => w.handle.set_sticky_mouse_buttons(value),
        });
    }

    fn set_window_should_close(&self, window: WindowId, value: bool) {
        self.with_window(window, |w| w.handle.set_should_close(value));
    }

    fn window_should_close(&self, window: WindowId) -> bool {
        self.with_window(window, |w| w.handle.should_close())
            .unwrap_or(true)
    }

    fn swap_buffers(&self, window: WindowId) {
        self.with_window(window, |w| w.handle.swap_buffers());
    }

    fn terminate(&self) {
        self.windows.borrow_mut().clear();
        if self.glfw.borrow_mut().take().is_some() {
            log::debug!("GLFW terminated");
        }
    }

    fn load_gl(&self, window: WindowId) -> Result<(), WindowError> {
        self.with_window(window, |w| {
            gl::load_with(|symbol| w.handle.get_proc_address(symbol) as *const _);
        })
        .ok_or(WindowError::UnknownWindow(window))?;

        let loaded = gl::GetString::is_loaded()
            && gl::CreateShader::is_loaded()
            && gl::GenBuffers::is_loaded()
            && gl::GenVertexArrays::is_loaded()
            && gl::Viewport::is_loaded();
        if !loaded {
            return Err(WindowError::GlLoad);
        }
        log::debug!("OpenGL function pointers loaded for window {window}");
        Ok(())
    }
}

impl Drop for GlfwWindowing {
    fn drop(&mut self) {
        self.terminate();
    }
}
