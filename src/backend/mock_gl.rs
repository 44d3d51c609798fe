// glhandles
// Copyright (c) 2025 Harlen Batagelo
// SPDX-License-Identifier: GPL-3.0-or-later

//! Recording [`Gl`] double for tests.
//!
//! Every command is appended to a call log as a [`GlCall`]. Queries
//! answer from scripted values, falling back to a successful driver:
//! fresh sequential names, `GL_NO_ERROR`, `GL_TRUE` statuses and an
//! empty info log.

use gl::types::*;
use glam::Vec4;
use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, VecDeque},
    ffi::CStr,
};

use super::driver::*;
use crate::{enumerates::*, identifier::*};

/// One recorded driver command. Object names are stored raw.
#[derive(Clone, Debug, PartialEq)]
pub enum GlCall {
    ActivateTextureUnit(u32),
    AttachShader { program: GLuint, shader: GLuint },
    BindBuffer(BufferTarget, GLuint),
    BindTexture(TextureTarget, GLuint),
    BindVertexArray(GLuint),
    BufferData(BufferTarget, Vec<u8>),
    Clear,
    SetClearColor(Vec4),
    Compile(GLuint),
    NewProgram,
    NewShader(ShaderType),
    NewBuffers(usize),
    NewTextures(usize),
    NewVertexArrays(usize),
    DeleteBuffers(Vec<GLuint>),
    DeleteProgram(GLuint),
    DeleteShader(GLuint),
    DeleteTextures(Vec<GLuint>),
    DeleteVertexArrays(Vec<GLuint>),
    Disable(Feature),
    Enable(Feature),
    DrawArrays { first: i32, count: usize },
    DrawElements(usize),
    EnableVertexAttribArray(u32),
    GenerateMipmap(TextureTarget),
    GetError,
    ProgramInfoLog(GLuint),
    ShaderInfoLog(GLuint),
    ProgramParameter(GLuint, ProgramParameter),
    ShaderParameter(GLuint, ShaderParameter),
    UniformLocation(GLuint, String),
    Link(GLuint),
    PolygonMode(PolygonMode),
    ShaderSource(GLuint, Vec<String>),
    TexImage2D {
        target: TextureTarget,
        width: u32,
        height: u32,
        format: TextureFormat,
        bytes: Option<usize>,
    },
    TexParameter(TextureTarget, TextureParameter, TextureParameterValue),
    SetUniform(i32, Uniform),
    UseProgram(GLuint),
    VertexAttribPointer {
        index: u32,
        components: i32,
        stride: usize,
        offset: usize,
    },
    SetViewport(u32, u32),
}

pub struct MockGl {
    calls: RefCell<Vec<GlCall>>,
    next_name: Cell<GLuint>,
    scripted_names: RefCell<VecDeque<GLuint>>,
    compile_results: RefCell<VecDeque<ErrorCode>>,
    link_results: RefCell<VecDeque<ErrorCode>>,
    compile_status: Cell<bool>,
    link_status: Cell<bool>,
    info_log: RefCell<String>,
    uniform_locations: RefCell<HashMap<String, i32>>,
    pending_error: Cell<ErrorCode>,
}

impl MockGl {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            next_name: Cell::new(1),
            scripted_names: RefCell::new(VecDeque::new()),
            compile_results: RefCell::new(VecDeque::new()),
            link_results: RefCell::new(VecDeque::new()),
            compile_status: Cell::new(true),
            link_status: Cell::new(true),
            info_log: RefCell::new(String::new()),
            uniform_locations: RefCell::new(HashMap::new()),
            pending_error: Cell::new(ErrorCode::NoError),
        }
    }

    /// Names handed out, in order, by the next allocations of any kind.
    pub fn queue_names(&self, names: &[GLuint]) {
        self.scripted_names.borrow_mut().extend(names);
    }

    /// Result of the next [`Gl::compile`] call.
    pub fn queue_compile_result(&self, result: ErrorCode) {
        self.compile_results.borrow_mut().push_back(result);
    }

    /// Result of the next [`Gl::link`] call.
    pub fn queue_link_result(&self, result: ErrorCode) {
        self.link_results.borrow_mut().push_back(result);
    }

    pub fn set_compile_status(&self, success: bool) {
        self.compile_status.set(success);
    }

    pub fn set_link_status(&self, success: bool) {
        self.link_status.set(success);
    }

    /// Info log returned for both shaders and programs.
    pub fn set_info_log(&self, log: &str) {
        *self.info_log.borrow_mut() = log.to_string();
    }

    pub fn set_uniform_location(&self, name: &str, location: i32) {
        self.uniform_locations
            .borrow_mut()
            .insert(name.to_string(), location);
    }

    /// Error reported by the next [`Gl::get_error`] call.
    pub fn raise_error(&self, error: ErrorCode) {
        self.pending_error.set(error);
    }

    pub fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, predicate: impl Fn(&GlCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| predicate(call)).count()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }

    fn allocate<K>(&self, count: usize) -> Vec<Identifier<K>> {
        (0..count).map(|_| Identifier::new(self.next_name())).collect()
    }

    fn next_name(&self) -> GLuint {
        if let Some(name) = self.scripted_names.borrow_mut().pop_front() {
            return name;
        }
        let name = self.next_name.get();
        self.next_name.set(name + 1);
        name
    }
}

impl Default for MockGl {
    fn default() -> Self {
        Self::new()
    }
}

fn status(success: bool) -> i32 {
    if success {
        gl::TRUE as i32
    } else {
        gl::FALSE as i32
    }
}

impl Gl for MockGl {
    fn activate_texture_unit(&self, unit: u32) {
        self.record(GlCall::ActivateTextureUnit(unit));
    }

    fn attach_shader(&self, program: &ProgramId, shader: &ShaderId) {
        self.record(GlCall::AttachShader {
            program: program.get(),
            shader: shader.get(),
        });
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: &BufferId) {
        self.record(GlCall::BindBuffer(target, buffer.get()));
    }

    fn bind_texture(&self, target: TextureTarget, texture: &TextureId) {
        self.record(GlCall::BindTexture(target, texture.get()));
    }

    fn bind_vertex_array(&self, array: &VertexArrayId) {
        self.record(GlCall::BindVertexArray(array.get()));
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8]) {
        self.record(GlCall::BufferData(target, data.to_vec()));
    }

    fn clear(&self) {
        self.record(GlCall::Clear);
    }

    fn set_clear_color(&self, color: Vec4) {
        self.record(GlCall::SetClearColor(color));
    }

    fn compile(&self, shader: &ShaderId) -> ErrorCode {
        self.record(GlCall::Compile(shader.get()));
        self.compile_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_default()
    }

    fn new_program(&self) -> ProgramId {
        self.record(GlCall::NewProgram);
        ProgramId::new(self.next_name())
    }

    fn new_shader(&self, kind: ShaderType) -> ShaderId {
        self.record(GlCall::NewShader(kind));
        ShaderId::new(self.next_name())
    }

    fn new_buffers(&self, count: usize) -> Vec<BufferId> {
        self.record(GlCall::NewBuffers(count));
        self.allocate(count)
    }

    fn new_textures(&self, count: usize) -> Vec<TextureId> {
        self.record(GlCall::NewTextures(count));
        self.allocate(count)
    }

    fn new_vertex_arrays(&self, count: usize) -> Vec<VertexArrayId> {
        self.record(GlCall::NewVertexArrays(count));
        self.allocate(count)
    }

    fn delete_buffers(&self, buffers: &[BufferId]) {
        self.record(GlCall::DeleteBuffers(
            buffers.iter().map(Identifier::get).collect(),
        ));
    }

    fn delete_program(&self, program: &ProgramId) {
        self.record(GlCall::DeleteProgram(program.get()));
    }

    fn delete_shader(&self, shader: &ShaderId) {
        self.record(GlCall::DeleteShader(shader.get()));
    }

    fn delete_textures(&self, textures: &[TextureId]) {
        self.record(GlCall::DeleteTextures(
            textures.iter().map(Identifier::get).collect(),
        ));
    }

    fn delete_vertex_arrays(&self, arrays: &[VertexArrayId]) {
        self.record(GlCall::DeleteVertexArrays(
            arrays.iter().map(Identifier::get).collect(),
        ));
    }

    fn disable(&self, feature: Feature) {
        self.record(GlCall::Disable(feature));
    }

    fn enable(&self, feature: Feature) {
        self.record(GlCall::Enable(feature));
    }

    fn draw_arrays(&self, first: i32, count: usize) {
        self.record(GlCall::DrawArrays { first, count });
    }

    fn draw_elements(&self, count: usize) {
        self.record(GlCall::DrawElements(count));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(GlCall::EnableVertexAttribArray(index));
    }

    fn generate_mipmap(&self, target: TextureTarget) {
        self.record(GlCall::GenerateMipmap(target));
    }

    fn get_error(&self) -> ErrorCode {
        self.record(GlCall::GetError);
        self.pending_error.replace(ErrorCode::NoError)
    }

    fn program_info_log(&self, program: &ProgramId) -> String {
        self.record(GlCall::ProgramInfoLog(program.get()));
        self.info_log.borrow().clone()
    }

    fn shader_info_log(&self, shader: &ShaderId) -> String {
        self.record(GlCall::ShaderInfoLog(shader.get()));
        self.info_log.borrow().clone()
    }

    fn program_parameter(&self, program: &ProgramId, parameter: ProgramParameter) -> i32 {
        self.record(GlCall::ProgramParameter(program.get(), parameter));
        match parameter {
            ProgramParameter::LinkStatus => status(self.link_status.get()),
            ProgramParameter::InfoLogLength => self.info_log.borrow().len() as i32,
            ProgramParameter::AttachedShaders => 0,
        }
    }

    fn shader_parameter(&self, shader: &ShaderId, parameter: ShaderParameter) -> i32 {
        self.record(GlCall::ShaderParameter(shader.get(), parameter));
        match parameter {
            ShaderParameter::CompileStatus => status(self.compile_status.get()),
            ShaderParameter::InfoLogLength => self.info_log.borrow().len() as i32,
        }
    }

    fn uniform_location(&self, program: &ProgramId, name: &CStr) -> i32 {
        let name = name.to_string_lossy().into_owned();
        let location = self
            .uniform_locations
            .borrow()
            .get(&name)
            .copied()
            .unwrap_or(-1);
        self.record(GlCall::UniformLocation(program.get(), name));
        location
    }

    fn link(&self, program: &ProgramId) -> ErrorCode {
        self.record(GlCall::Link(program.get()));
        self.link_results.borrow_mut().pop_front().unwrap_or_default()
    }

    fn polygon_mode(&self, mode: PolygonMode) {
        self.record(GlCall::PolygonMode(mode));
    }

    fn shader_source(&self, shader: &ShaderId, sources: &[&str]) {
        self.record(GlCall::ShaderSource(
            shader.get(),
            sources.iter().map(|source| source.to_string()).collect(),
        ));
    }

    fn tex_image_2d(
        &self,
        target: TextureTarget,
        width: u32,
        height: u32,
        format: TextureFormat,
        data: Option<&[u8]>,
    ) {
        self.record(GlCall::TexImage2D {
            target,
            width,
            height,
            format,
            bytes: data.map(<[u8]>::len),
        });
    }

    fn tex_parameter(
        &self,
        target: TextureTarget,
        name: TextureParameter,
        value: TextureParameterValue,
    ) {
        self.record(GlCall::TexParameter(target, name, value));
    }

    fn set_uniform(&self, location: i32, value: Uniform) {
        self.record(GlCall::SetUniform(location, value));
    }

    fn use_program(&self, program: &ProgramId) {
        self.record(GlCall::UseProgram(program.get()));
    }

    fn vertex_attrib_pointer(&self, index: u32, components: i32, stride: usize, offset: usize) {
        self.record(GlCall::VertexAttribPointer {
            index,
            components,
            stride,
            offset,
        });
    }

    fn set_viewport(&self, width: u32, height: u32) {
        self.record(GlCall::SetViewport(width, height));
    }
}
