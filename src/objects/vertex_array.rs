// glhandles
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use std::fmt;

use super::buffer::Buffer;
use crate::{backend::Gl, enumerates::*, identifier::*};

/// Interleaved vertex layout uploaded by [`VertexArray::load`].
///
/// Attribute locations: 0 = position, 1 = texture coordinate, 2 = normal.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub tex_coord: Vec2,
    pub normal: Vec3,
}

impl Vertex {
    pub const fn new(position: Vec3, tex_coord: Vec2, normal: Vec3) -> Self {
        Self {
            position,
            tex_coord,
            normal,
        }
    }
}

/// Describes a float attribute from a field of a `#[repr(C)]` vertex type.
///
/// ```ignore
/// set_attribute!(vao, 0, Vertex::position);
/// ```
///
/// expands to `vao.set_attribute(0, components, stride, offset)` with
/// the component count, stride and offset derived from the field. The
/// vertex type must implement `bytemuck::Zeroable` and its fields must
/// be tightly packed `f32` data. The array buffer must be bound.
#[macro_export]
macro_rules! set_attribute {
    ($vao:expr, $loc:expr, $t:ident :: $field:ident) => {{
        let sample = <$t as ::bytemuck::Zeroable>::zeroed();
        let components =
            (::std::mem::size_of_val(&sample.$field) / ::std::mem::size_of::<f32>()) as i32;
        let offset = ::std::mem::offset_of!($t, $field);
        let stride = ::std::mem::size_of::<$t>();
        $vao.set_attribute($loc, components, stride, offset)
    }};
}

/// Owned OpenGL vertex array object together with its two buffers.
///
/// The array buffer holds [`Vertex`] data and the element buffer holds
/// `u32` indices. Both are allocated with the vertex array and deleted
/// with it.
pub struct VertexArray<'gl> {
    gl: &'gl dyn Gl,
    id: VertexArrayId,
    array_buffer: Buffer<'gl>,
    element_buffer: Buffer<'gl>,
}

impl<'gl> VertexArray<'gl> {
    pub fn new(gl: &'gl dyn Gl) -> Self {
        Self::with_id(gl, VertexArrayId::default())
    }

    /// Adopts `id`, or allocates a fresh vertex array when `id` is zero.
    ///
    /// The two owned buffers are always allocated.
    pub fn with_id(gl: &'gl dyn Gl, id: VertexArrayId) -> Self {
        let (array_buffer, element_buffer) = Self::new_buffers(gl);
        let id = if id.is_valid() {
            id
        } else {
            gl.new_vertex_arrays(1).into_iter().next().unwrap_or_default()
        };
        log::debug!("Vertex array {id} created");

        Self {
            gl,
            id,
            array_buffer,
            element_buffer,
        }
    }

    /// Allocates `amount` vertex arrays with a single driver call.
    pub fn build(gl: &'gl dyn Gl, amount: usize) -> Vec<Self> {
        assert!(amount > 0, "amount > 0");

        gl.new_vertex_arrays(amount)
            .into_iter()
            .map(|id| Self::with_id(gl, id))
            .collect()
    }

    pub fn bind(&self) {
        debug_assert!(self.id.is_valid(), "binding an empty vertex array");
        self.gl.bind_vertex_array(&self.id);
    }

    /// Configures a float vertex attribute and enables it.
    ///
    /// The vertex array and the array buffer must be bound.
    pub fn set_attribute(&self, location: u32, components: i32, stride: usize, offset: usize) {
        self.gl.vertex_attrib_pointer(location, components, stride, offset);
        self.gl.enable_vertex_attrib_array(location);
    }

    /// Uploads `vertices` into the array buffer and describes the
    /// [`Vertex`] layout. The vertex array is left bound.
    pub fn load(&self, vertices: &[Vertex]) {
        self.bind();
        self.array_buffer.bind();
        self.array_buffer.load(vertices);

        set_attribute!(self, 0, Vertex::position);
        set_attribute!(self, 1, Vertex::tex_coord);
        set_attribute!(self, 2, Vertex::normal);
    }

    /// Same as [`VertexArray::load`], also filling the element buffer.
    pub fn load_indexed(&self, vertices: &[Vertex], indices: &[u32]) {
        self.load(vertices);
        self.element_buffer.bind();
        self.element_buffer.load(indices);
    }

    /// The array buffer and the element buffer, in that order.
    pub fn buffers(&self) -> [&Buffer<'gl>; 2] {
        [&self.array_buffer, &self.element_buffer]
    }

    pub fn id(&self) -> &VertexArrayId {
        &self.id
    }

    /// Moves the vertex array and its buffers out, leaving an empty one.
    pub fn take(&mut self) -> Self {
        Self {
            gl: self.gl,
            id: self.id.take(),
            array_buffer: self.array_buffer.take(),
            element_buffer: self.element_buffer.take(),
        }
    }

    /// Deletes the vertex array and its buffers now. No-op when already
    /// empty.
    pub fn destroy(&mut self) {
        if self.id.is_valid() {
            self.gl.delete_vertex_arrays(std::slice::from_ref(&self.id));
            log::debug!("Vertex array {} deleted", self.id);
            self.id.clear();
        }
        self.array_buffer.destroy();
        self.element_buffer.destroy();
    }

    fn new_buffers(gl: &'gl dyn Gl) -> (Buffer<'gl>, Buffer<'gl>) {
        let mut buffers = Buffer::build(gl, 2).into_iter();
        let mut array_buffer = buffers
            .next()
            .unwrap_or_else(|| Buffer::new(gl, BufferTarget::Array));
        let mut element_buffer = buffers
            .next()
            .unwrap_or_else(|| Buffer::new(gl, BufferTarget::ElementArray));
        array_buffer.set_target(BufferTarget::Array);
        element_buffer.set_target(BufferTarget::ElementArray);
        (array_buffer, element_buffer)
    }
}

impl Drop for VertexArray<'_> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl fmt::Debug for VertexArray<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexArray")
            .field("id", &self.id)
            .field("array_buffer", &self.array_buffer)
            .field("element_buffer", &self.element_buffer)
            .finish_non_exhaustive()
    }
}
