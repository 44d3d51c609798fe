// glhandles
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

use bytemuck::Pod;
use std::fmt;

use crate::{backend::Gl, enumerates::*, identifier::*};

/// Owned OpenGL buffer object.
///
/// The buffer is deleted when dropped. [`Buffer::take`] moves the name
/// into a new wrapper and leaves this one empty, so the name is still
/// deleted exactly once.
pub struct Buffer<'gl> {
    gl: &'gl dyn Gl,
    id: BufferId,
    target: BufferTarget,
}

impl<'gl> Buffer<'gl> {
    /// Allocates `amount` buffers with a single driver call.
    ///
    /// The buffers have no target yet; see [`Buffer::set_target`].
    pub fn build(gl: &'gl dyn Gl, amount: usize) -> Vec<Self> {
        assert!(amount > 0, "amount > 0");

        gl.new_buffers(amount)
            .into_iter()
            .map(|id| Self::with_id(gl, id, BufferTarget::Undefined))
            .collect()
    }

    pub fn new(gl: &'gl dyn Gl, target: BufferTarget) -> Self {
        Self::with_id(gl, BufferId::default(), target)
    }

    /// Adopts `id`, or allocates a fresh buffer when `id` is zero.
    pub fn with_id(gl: &'gl dyn Gl, id: BufferId, target: BufferTarget) -> Self {
        let id = if id.is_valid() {
            id
        } else {
            gl.new_buffers(1).into_iter().next().unwrap_or_default()
        };
        log::debug!("Buffer {id} created with target {target}");
        Self { gl, id, target }
    }

    pub fn bind(&self) {
        debug_assert!(self.id.is_valid(), "binding an empty buffer");
        debug_assert!(
            self.target != BufferTarget::Undefined,
            "binding a buffer without target"
        );
        self.gl.bind_buffer(self.target, &self.id);
    }

    /// Replaces the data store of the buffer.
    ///
    /// The buffer must be bound to its target.
    pub fn load<T: Pod>(&self, data: &[T]) {
        self.gl.buffer_data(self.target, bytemuck::cast_slice(data));
    }

    pub fn id(&self) -> &BufferId {
        &self.id
    }

    pub fn target(&self) -> BufferTarget {
        self.target
    }

    pub fn set_target(&mut self, target: BufferTarget) {
        self.target = target;
    }

    /// Moves the buffer out, leaving an empty one with no target.
    pub fn take(&mut self) -> Self {
        Self {
            gl: self.gl,
            id: self.id.take(),
            target: std::mem::take(&mut self.target),
        }
    }

    /// Deletes the buffer now. No-op when already empty.
    pub fn destroy(&mut self) {
        if !self.id.is_valid() {
            return;
        }
        self.gl.delete_buffers(std::slice::from_ref(&self.id));
        log::debug!("Buffer {} deleted", self.id);
        self.id.clear();
    }
}

impl Drop for Buffer<'_> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl fmt::Debug for Buffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("id", &self.id)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Buffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "buffer id={}, target={}", self.id, self.target)
    }
}
