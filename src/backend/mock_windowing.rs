// glhandles
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

//! Recording [`Windowing`] double for tests.
//!
//! Windows exist only as ids. Events queued with
//! [`MockWindowing::queue_event`] reach the registered callbacks on the
//! next [`Windowing::poll_events`], in queue order.

use glfw::{Action, Key, Modifiers, Scancode, WindowHint};
use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet, VecDeque},
};

use super::windowing::*;

#[derive(Clone, Debug, PartialEq)]
pub enum WindowCall {
    Init,
    /// Debug rendering of the hint.
    WindowHint(String),
    CreateWindow {
        width: u32,
        height: u32,
        title: String,
    },
    DestroyWindow(WindowId),
    MakeContextCurrent(WindowId),
    PollEvents,
    SetErrorCallback,
    SetKeyCallback(WindowId),
    SetCursorPosCallback(WindowId),
    SetFramebufferSizeCallback(WindowId),
    SetInputMode(WindowId, InputMode),
    SetWindowShouldClose(WindowId, bool),
    WindowShouldClose(WindowId),
    SwapBuffers(WindowId),
    Terminate,
    LoadGl(WindowId),
}

#[derive(Debug)]
pub enum MockEvent {
    Error(glfw::Error, String),
    Key(WindowId, Key, Scancode, Action, Modifiers),
    CursorPos(WindowId, f64, f64),
    FramebufferSize(WindowId, i32, i32),
}

#[derive(Default)]
struct WindowCallbacks {
    key: Option<KeyCallback>,
    cursor_pos: Option<CursorPosCallback>,
    framebuffer_size: Option<FramebufferSizeCallback>,
}

pub struct MockWindowing {
    calls: RefCell<Vec<WindowCall>>,
    next_window: Cell<usize>,
    live_windows: RefCell<HashSet<WindowId>>,
    should_close: RefCell<HashSet<WindowId>>,
    callbacks: RefCell<HashMap<WindowId, WindowCallbacks>>,
    error_callback: RefCell<Option<ErrorCallback>>,
    events: RefCell<VecDeque<MockEvent>>,
    fail_init: Cell<bool>,
    fail_create: Cell<bool>,
    fail_load_gl: Cell<bool>,
}

impl MockWindowing {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            next_window: Cell::new(0),
            live_windows: RefCell::new(HashSet::new()),
            should_close: RefCell::new(HashSet::new()),
            callbacks: RefCell::new(HashMap::new()),
            error_callback: RefCell::new(None),
            events: RefCell::new(VecDeque::new()),
            fail_init: Cell::new(false),
            fail_create: Cell::new(false),
            fail_load_gl: Cell::new(false),
        }
    }

    pub fn fail_init(&self, fail: bool) {
        self.fail_init.set(fail);
    }

    pub fn fail_create(&self, fail: bool) {
        self.fail_create.set(fail);
    }

    pub fn fail_load_gl(&self, fail: bool) {
        self.fail_load_gl.set(fail);
    }

    pub fn queue_event(&self, event: MockEvent) {
        self.events.borrow_mut().push_back(event);
    }

    pub fn calls(&self) -> Vec<WindowCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, predicate: impl Fn(&WindowCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| predicate(call)).count()
    }

    pub fn live_windows(&self) -> usize {
        self.live_windows.borrow().len()
    }

    fn record(&self, call: WindowCall) {
        self.calls.borrow_mut().push(call);
    }

    fn dispatch(&self, event: MockEvent) {
        // Same take-call-restore pattern as the GLFW backend.
        match event {
            MockEvent::Error(error, description) => {
                let callback = self.error_callback.borrow_mut().take();
                if let Some(mut callback) = callback {
                    callback(error, description);
                    self.error_callback.borrow_mut().get_or_insert(callback);
                }
            }
            MockEvent::Key(window, key, scancode, action, mods) => {
                let callback = self.take_callback(window, |c| c.key.take());
                if let Some(mut callback) = callback {
                    callback(window, key, scancode, action, mods);
                    self.restore_callback(window, |c| {
                        c.key.get_or_insert(callback);
                    });
                }
            }
            MockEvent::CursorPos(window, x, y) => {
                let callback = self.take_callback(window, |c| c.cursor_pos.take());
                if let Some(mut callback) = callback {
                    callback(window, x, y);
                    self.restore_callback(window, |c| {
                        c.cursor_pos.get_or_insert(callback);
                    });
                }
            }
            MockEvent::FramebufferSize(window, width, height) => {
                let callback = self.take_callback(window, |c| c.framebuffer_size.take());
                if let Some(mut callback) = callback {
                    callback(window, width, height);
                    self.restore_callback(window, |c| {
                        c.framebuffer_size.get_or_insert(callback);
                    });
                }
            }
        }
    }

    fn take_callback<T>(
        &self,
        window: WindowId,
        take: impl FnOnce(&mut WindowCallbacks) -> Option<T>,
    ) -> Option<T> {
        self.callbacks.borrow_mut().get_mut(&window).and_then(take)
    }

    fn restore_callback(&self, window: WindowId, restore: impl FnOnce(&mut WindowCallbacks)) {
        if let Some(callbacks) = self.callbacks.borrow_mut().get_mut(&window) {
            restore(callbacks);
        }
    }
}

impl Default for MockWindowing {
    fn default() -> Self {
        Self::new()
    }
}

impl Windowing for MockWindowing {
    fn init(&self) -> Result<(), WindowError> {
        self.record(WindowCall::Init);
        if self.fail_init.get() {
            return Err(WindowError::Init("mock init failure".to_string()));
        }
        Ok(())
    }

    fn window_hint(&self, hint: WindowHint) {
        self.record(WindowCall::WindowHint(format!("{hint:?}")));
    }

    fn create_window(
        &self,
        width: u32,
        height: u32,
        title: &str,
    ) -> Result<WindowId, WindowError> {
        self.record(WindowCall::CreateWindow {
            width,
            height,
            title: title.to_string(),
        });
        if self.fail_create.get() {
            return Err(WindowError::Creation(title.to_string()));
        }
        let id = WindowId(self.next_window.get());
        self.next_window.set(id.0 + 1);
        self.live_windows.borrow_mut().insert(id);
        self.callbacks
            .borrow_mut()
            .insert(id, WindowCallbacks::default());
        Ok(id)
    }

    fn destroy_window(&self, window: WindowId) {
        self.record(WindowCall::DestroyWindow(window));
        self.live_windows.borrow_mut().remove(&window);
        self.callbacks.borrow_mut().remove(&window);
        self.should_close.borrow_mut().remove(&window);
    }

    fn make_context_current(&self, window: WindowId) {
        self.record(WindowCall::MakeContextCurrent(window));
    }

    fn poll_events(&self) {
        self.record(WindowCall::PollEvents);
        loop {
            let event = self.events.borrow_mut().pop_front();
            match event {
                Some(event) => self.dispatch(event),
                None => break,
            }
        }
    }

    fn set_error_callback(&self, callback: ErrorCallback) -> Option<ErrorCallback> {
        self.record(WindowCall::SetErrorCallback);
        self.error_callback.borrow_mut().replace(callback)
    }

    fn set_key_callback(&self, window: WindowId, callback: KeyCallback) -> Option<KeyCallback> {
        self.record(WindowCall::SetKeyCallback(window));
        self.callbacks
            .borrow_mut()
            .get_mut(&window)
            .and_then(|c| c.key.replace(callback))
    }

    fn set_cursor_pos_callback(
        &self,
        window: WindowId,
        callback: CursorPosCallback,
    ) -> Option<CursorPosCallback> {
        self.record(WindowCall::SetCursorPosCallback(window));
        self.callbacks
            .borrow_mut()
            .get_mut(&window)
            .and_then(|c| c.cursor_pos.replace(callback))
    }

    fn set_framebuffer_size_callback(
        &self,
        window: WindowId,
        callback: FramebufferSizeCallback,
    ) -> Option<FramebufferSizeCallback> {
        self.record(WindowCall::SetFramebufferSizeCallback(window));
        self.callbacks
            .borrow_mut()
            .get_mut(&window)
            .and_then(|c| c.framebuffer_size.replace(callback))
    }

    fn set_input_mode(&self, window: WindowId, mode: InputMode) {
        self.record(WindowCall::SetInputMode(window, mode));
    }

    fn set_window_should_close(&self, window: WindowId, value: bool) {
        self.record(WindowCall::SetWindowShouldClose(window, value));
        let mut should_close = self.should_close.borrow_mut();
        if value {
            should_close.insert(window);
        } else {
            should_close.remove(&window);
        }
    }

    fn window_should_close(&self, window: WindowId) -> bool {
        self.record(WindowCall::WindowShouldClose(window));
        !self.live_windows.borrow().contains(&window)
            || self.should_close.borrow().contains(&window)
    }

    fn swap_buffers(&self, window: WindowId) {
        self.record(WindowCall::SwapBuffers(window));
    }

    fn terminate(&self) {
        self.record(WindowCall::Terminate);
        self.live_windows.borrow_mut().clear();
        self.callbacks.borrow_mut().clear();
    }

    fn load_gl(&self, window: WindowId) -> Result<(), WindowError> {
        self.record(WindowCall::LoadGl(window));
        if !self.live_windows.borrow().contains(&window) {
            return Err(WindowError::UnknownWindow(window));
        }
        if self.fail_load_gl.get() {
            return Err(WindowError::GlLoad);
        }
        Ok(())
    }
}
