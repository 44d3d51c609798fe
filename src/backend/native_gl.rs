// glhandles
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

use gl::types::*;
use glam::Vec4;
use std::{cell::RefCell, ffi::CStr, os::raw::c_void};

use super::driver::*;
use crate::{enumerates::*, identifier::*};

/// Context state the driver has set through this instance.
///
/// OpenGL keeps these bindings as hidden per-context globals. The
/// driver mirrors every change it makes so the current bindings can be
/// inspected without a round trip to the GL.
#[derive(Clone, Debug, PartialEq)]
pub struct GlState {
    pub active_texture_unit: u32,
    pub current_program: GLuint,
    pub vertex_array: GLuint,
    pub array_buffer: GLuint,
    pub element_array_buffer: GLuint,
    pub texture_2d: GLuint,
    pub clear_color: Vec4,
    pub polygon_mode: PolygonMode,
    pub viewport: (u32, u32),
}

impl Default for GlState {
    fn default() -> Self {
        Self {
            active_texture_unit: 0,
            current_program: 0,
            vertex_array: 0,
            array_buffer: 0,
            element_array_buffer: 0,
            texture_2d: 0,
            clear_color: Vec4::ZERO,
            polygon_mode: PolygonMode::Fill,
            viewport: (0, 0),
        }
    }
}

/// [`Gl`] implementation calling straight into the loaded OpenGL
/// function pointers.
///
/// Function pointers must already be loaded for the current context,
/// e.g. with [`crate::backend::Windowing::load_gl`]. Calling a command
/// whose pointer was never loaded panics inside the `gl` crate.
pub struct NativeGl {
    state: RefCell<GlState>,
}

impl NativeGl {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(GlState::default()),
        }
    }

    /// Snapshot of the bindings set through this driver.
    pub fn state(&self) -> GlState {
        self.state.borrow().clone()
    }

    /// Routes `GL_KHR_debug` messages to the log.
    ///
    /// Returns `false` when the context exposes no debug extension.
    #[cfg(debug_assertions)]
    pub fn enable_debug_output(&self) -> bool {
        super::debug_output::install()
    }
}

impl Default for NativeGl {
    fn default() -> Self {
        Self::new()
    }
}

fn raw_names<K>(ids: &[Identifier<K>]) -> Vec<GLuint> {
    ids.iter().map(Identifier::get).collect()
}

fn gen_names<K>(count: usize, gen: unsafe fn(GLsizei, *mut GLuint)) -> Vec<Identifier<K>> {
    let mut names = vec![0; count];
    unsafe { gen(count as GLsizei, names.as_mut_ptr()) };
    names.into_iter().map(Identifier::new).collect()
}

fn read_info_log(length: GLint, fetch: impl FnOnce(GLsizei, *mut GLsizei, *mut GLchar)) -> String {
    if length <= 0 {
        return String::new();
    }
    let mut log = vec![0u8; length as usize];
    let mut written = 0;
    fetch(length, &mut written, log.as_mut_ptr() as *mut GLchar);
    log.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&log).into_owned()
}

impl Gl for NativeGl {
    fn activate_texture_unit(&self, unit: u32) {
        unsafe { gl::ActiveTexture(gl::TEXTURE0 + unit) };
        self.state.borrow_mut().active_texture_unit = unit;
    }

    fn attach_shader(&self, program: &ProgramId, shader: &ShaderId) {
        unsafe { gl::AttachShader(program.get(), shader.get()) };
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: &BufferId) {
        unsafe { gl::BindBuffer(target.raw(), buffer.get()) };
        let mut state = self.state.borrow_mut();
        match target {
            BufferTarget::Array => state.array_buffer = buffer.get(),
            BufferTarget::ElementArray => state.element_array_buffer = buffer.get(),
            BufferTarget::Undefined => {}
        }
    }

    fn bind_texture(&self, target: TextureTarget, texture: &TextureId) {
        unsafe { gl::BindTexture(target.raw(), texture.get()) };
        if target == TextureTarget::Texture2D {
            self.state.borrow_mut().texture_2d = texture.get();
        }
    }

    fn bind_vertex_array(&self, array: &VertexArrayId) {
        unsafe { gl::BindVertexArray(array.get()) };
        self.state.borrow_mut().vertex_array = array.get();
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8]) {
        unsafe {
            gl::BufferData(
                target.raw(),
                data.len() as GLsizeiptr,
                data.as_ptr() as *const c_void,
                gl::STATIC_DRAW,
            );
        }
    }

    fn clear(&self) {
        unsafe { gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT) };
    }

    fn set_clear_color(&self, color: Vec4) {
        unsafe { gl::ClearColor(color.x, color.y, color.z, color.w) };
        self.state.borrow_mut().clear_color = color;
    }

    fn compile(&self, shader: &ShaderId) -> ErrorCode {
        unsafe {
            gl::CompileShader(shader.get());
            ErrorCode::from_raw(gl::GetError())
        }
    }

    fn new_program(&self) -> ProgramId {
        ProgramId::new(unsafe { gl::CreateProgram() })
    }

    fn new_shader(&self, kind: ShaderType) -> ShaderId {
        ShaderId::new(unsafe { gl::CreateShader(kind.raw()) })
    }

    fn new_buffers(&self, count: usize) -> Vec<BufferId> {
        gen_names(count, gl::GenBuffers)
    }

    fn new_textures(&self, count: usize) -> Vec<TextureId> {
        gen_names(count, gl::GenTextures)
    }

    fn new_vertex_arrays(&self, count: usize) -> Vec<VertexArrayId> {
        gen_names(count, gl::GenVertexArrays)
    }

    fn delete_buffers(&self, buffers: &[BufferId]) {
        let names = raw_names(buffers);
        unsafe { gl::DeleteBuffers(names.len() as GLsizei, names.as_ptr()) };

        // Deleting a bound buffer reverts its binding to zero.
        let mut state = self.state.borrow_mut();
        if names.contains(&state.array_buffer) {
            state.array_buffer = 0;
        }
        if names.contains(&state.element_array_buffer) {
            state.element_array_buffer = 0;
        }
    }

    fn delete_program(&self, program: &ProgramId) {
        unsafe { gl::DeleteProgram(program.get()) };
    }

    fn delete_shader(&self, shader: &ShaderId) {
        unsafe { gl::DeleteShader(shader.get()) };
    }

    fn delete_textures(&self, textures: &[TextureId]) {
        let names = raw_names(textures);
        unsafe { gl::DeleteTextures(names.len() as GLsizei, names.as_ptr()) };

        let mut state = self.state.borrow_mut();
        if names.contains(&state.texture_2d) {
            state.texture_2d = 0;
        }
    }

    fn delete_vertex_arrays(&self, arrays: &[VertexArrayId]) {
        let names = raw_names(arrays);
        unsafe { gl::DeleteVertexArrays(names.len() as GLsizei, names.as_ptr()) };

        let mut state = self.state.borrow_mut();
        if names.contains(&state.vertex_array) {
            state.vertex_array = 0;
        }
    }

    fn disable(&self, feature: Feature) {
        unsafe { gl::Disable(feature.raw()) };
    }

    fn enable(&self, feature: Feature) {
        unsafe { gl::Enable(feature.raw()) };
    }

    fn draw_arrays(&self, first: i32, count: usize) {
        unsafe { gl::DrawArrays(gl::TRIANGLES, first, count as GLsizei) };
    }

    fn draw_elements(&self, count: usize) {
        unsafe {
            gl::DrawElements(
                gl::TRIANGLES,
                count as GLsizei,
                gl::UNSIGNED_INT,
                std::ptr::null(),
            )
        };
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { gl::EnableVertexAttribArray(index) };
    }

    fn generate_mipmap(&self, target: TextureTarget) {
        unsafe { gl::GenerateMipmap(target.raw()) };
    }

    fn get_error(&self) -> ErrorCode {
        ErrorCode::from_raw(unsafe { gl::GetError() })
    }

    fn program_info_log(&self, program: &ProgramId) -> String {
        let length = self.program_parameter(program, ProgramParameter::InfoLogLength);
        read_info_log(length, |capacity, written, buffer| unsafe {
            gl::GetProgramInfoLog(program.get(), capacity, written, buffer)
        })
    }

    fn shader_info_log(&self, shader: &ShaderId) -> String {
        let length = self.shader_parameter(shader, ShaderParameter::InfoLogLength);
        read_info_log(length, |capacity, written, buffer| unsafe {
            gl::GetShaderInfoLog(shader.get(), capacity, written, buffer)
        })
    }

    fn program_parameter(&self, program: &ProgramId, parameter: ProgramParameter) -> i32 {
        let mut value = 0;
        unsafe { gl::GetProgramiv(program.get(), parameter.raw(), &mut value) };
        value
    }

    fn shader_parameter(&self, shader: &ShaderId, parameter: ShaderParameter) -> i32 {
        let mut value = 0;
        unsafe { gl::GetShaderiv(shader.get(), parameter.raw(), &mut value) };
        value
    }

    fn uniform_location(&self, program: &ProgramId, name: &CStr) -> i32 {
        unsafe { gl::GetUniformLocation(program.get(), name.as_ptr()) }
    }

    fn link(&self, program: &ProgramId) -> ErrorCode {
        unsafe {
            gl::LinkProgram(program.get());
            ErrorCode::from_raw(gl::GetError())
        }
    }

    fn polygon_mode(&self, mode: PolygonMode) {
        unsafe { gl::PolygonMode(gl::FRONT_AND_BACK, mode.raw()) };
        self.state.borrow_mut().polygon_mode = mode;
    }

    fn shader_source(&self, shader: &ShaderId, sources: &[&str]) {
        // Explicit lengths, so the sources need no NUL terminator.
        let pointers: Vec<*const GLchar> = sources
            .iter()
            .map(|source| source.as_ptr() as *const GLchar)
            .collect();
        let lengths: Vec<GLint> = sources.iter().map(|source| source.len() as GLint).collect();
        unsafe {
            gl::ShaderSource(
                shader.get(),
                sources.len() as GLsizei,
                pointers.as_ptr(),
                lengths.as_ptr(),
            )
        };
    }

    fn tex_image_2d(
        &self,
        target: TextureTarget,
        width: u32,
        height: u32,
        format: TextureFormat,
        data: Option<&[u8]>,
    ) {
        let pixels = data.map_or(std::ptr::null(), |data| data.as_ptr() as *const c_void);
        unsafe {
            // Rows of red and RGB texels are tightly packed.
            gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
            gl::TexImage2D(
                target.raw(),
                0,
                format.internal_format() as GLint,
                width as GLsizei,
                height as GLsizei,
                0,
                format.raw(),
                gl::UNSIGNED_BYTE,
                pixels,
            );
        }
    }

    fn tex_parameter(
        &self,
        target: TextureTarget,
        name: TextureParameter,
        value: TextureParameterValue,
    ) {
        unsafe { gl::TexParameteri(target.raw(), name.raw(), value.raw()) };
    }

    fn set_uniform(&self, location: i32, value: Uniform) {
        unsafe {
            match value {
                Uniform::Float(v) => gl::Uniform1f(location, v),
                Uniform::Int(v) => gl::Uniform1i(location, v),
                Uniform::Vec3(v) => gl::Uniform3f(location, v.x, v.y, v.z),
                Uniform::Vec4(v) => gl::Uniform4f(location, v.x, v.y, v.z, v.w),
                Uniform::Mat4(m) => {
                    let columns = m.to_cols_array();
                    gl::UniformMatrix4fv(location, 1, gl::FALSE, columns.as_ptr());
                }
            }
        }
    }

    fn use_program(&self, program: &ProgramId) {
        unsafe { gl::UseProgram(program.get()) };
        self.state.borrow_mut().current_program = program.get();
    }

    fn vertex_attrib_pointer(&self, index: u32, components: i32, stride: usize, offset: usize) {
        unsafe {
            gl::VertexAttribPointer(
                index,
                components,
                gl::FLOAT,
                gl::FALSE,
                stride as GLsizei,
                offset as *const c_void,
            );
        }
    }

    fn set_viewport(&self, width: u32, height: u32) {
        unsafe { gl::Viewport(0, 0, width as GLsizei, height as GLsizei) };
        self.state.borrow_mut().viewport = (width, height);
    }
}
