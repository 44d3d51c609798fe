// glhandles
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

use glam::{Mat4, Vec3, Vec4};
use std::ffi::CStr;

use crate::{enumerates::*, identifier::*};

/// Value passed to `glUniform*`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Uniform {
    Float(f32),
    Int(i32),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
}

impl From<f32> for Uniform {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<i32> for Uniform {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<Vec3> for Uniform {
    fn from(value: Vec3) -> Self {
        Self::Vec3(value)
    }
}

impl From<[f32; 3]> for Uniform {
    fn from(value: [f32; 3]) -> Self {
        Self::Vec3(Vec3::from_array(value))
    }
}

impl From<Vec4> for Uniform {
    fn from(value: Vec4) -> Self {
        Self::Vec4(value)
    }
}

impl From<[f32; 4]> for Uniform {
    fn from(value: [f32; 4]) -> Self {
        Self::Vec4(Vec4::from_array(value))
    }
}

impl From<Mat4> for Uniform {
    fn from(value: Mat4) -> Self {
        Self::Mat4(value)
    }
}

/// Every OpenGL command the object wrappers issue.
///
/// Each method maps to exactly one OpenGL entry point (or one query
/// pair, for the info logs) and runs synchronously on the calling
/// thread. Only [`Gl::compile`] and [`Gl::link`] report errors; all
/// other commands are fire-and-forget, and callers who care can poll
/// [`Gl::get_error`].
///
/// Methods take `&self` so that any number of wrappers can share one
/// driver. Implementations keep their bookkeeping in `Cell`/`RefCell`.
pub trait Gl {
    /// `glActiveTexture(GL_TEXTURE0 + unit)`.
    fn activate_texture_unit(&self, unit: u32);

    fn attach_shader(&self, program: &ProgramId, shader: &ShaderId);

    fn bind_buffer(&self, target: BufferTarget, buffer: &BufferId);

    fn bind_texture(&self, target: TextureTarget, texture: &TextureId);

    fn bind_vertex_array(&self, array: &VertexArrayId);

    /// Uploads `data` to the buffer bound at `target` (`GL_STATIC_DRAW`).
    fn buffer_data(&self, target: BufferTarget, data: &[u8]);

    /// Clears the color and depth buffers.
    fn clear(&self);

    fn set_clear_color(&self, color: Vec4);

    /// Compiles the shader and reports `glGetError` right after.
    fn compile(&self, shader: &ShaderId) -> ErrorCode;

    fn new_program(&self) -> ProgramId;

    fn new_shader(&self, kind: ShaderType) -> ShaderId;

    fn new_buffers(&self, count: usize) -> Vec<BufferId>;

    fn new_textures(&self, count: usize) -> Vec<TextureId>;

    fn new_vertex_arrays(&self, count: usize) -> Vec<VertexArrayId>;

    fn delete_buffers(&self, buffers: &[BufferId]);

    fn delete_program(&self, program: &ProgramId);

    fn delete_shader(&self, shader: &ShaderId);

    fn delete_textures(&self, textures: &[TextureId]);

    fn delete_vertex_arrays(&self, arrays: &[VertexArrayId]);

    fn disable(&self, feature: Feature);

    fn enable(&self, feature: Feature);

    /// Draws `count` vertices as triangles starting at `first`.
    fn draw_arrays(&self, first: i32, count: usize);

    /// Draws `count` `u32` indices from the bound element buffer as triangles.
    fn draw_elements(&self, count: usize);

    fn enable_vertex_attrib_array(&self, index: u32);

    fn generate_mipmap(&self, target: TextureTarget);

    fn get_error(&self) -> ErrorCode;

    fn program_info_log(&self, program: &ProgramId) -> String;

    fn shader_info_log(&self, shader: &ShaderId) -> String;

    fn program_parameter(&self, program: &ProgramId, parameter: ProgramParameter) -> i32;

    fn shader_parameter(&self, shader: &ShaderId, parameter: ShaderParameter) -> i32;

    /// Location of the named uniform, `-1` when the program has none.
    fn uniform_location(&self, program: &ProgramId, name: &CStr) -> i32;

    /// Links the program and reports `glGetError` right after.
    fn link(&self, program: &ProgramId) -> ErrorCode;

    /// Applies `mode` to both front and back faces.
    fn polygon_mode(&self, mode: PolygonMode);

    fn shader_source(&self, shader: &ShaderId, sources: &[&str]);

    /// Specifies level 0 of the texture bound at `target`.
    ///
    /// `data` may be `None` to allocate storage without uploading.
    fn tex_image_2d(
        &self,
        target: TextureTarget,
        width: u32,
        height: u32,
        format: TextureFormat,
        data: Option<&[u8]>,
    );

    fn tex_parameter(
        &self,
        target: TextureTarget,
        name: TextureParameter,
        value: TextureParameterValue,
    );

    fn set_uniform(&self, location: i32, value: Uniform);

    fn use_program(&self, program: &ProgramId);

    /// Describes a tightly packed `f32` attribute at `index`.
    fn vertex_attrib_pointer(&self, index: u32, components: i32, stride: usize, offset: usize);

    fn set_viewport(&self, width: u32, height: u32);
}
