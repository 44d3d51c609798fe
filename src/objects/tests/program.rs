use glam::{Mat4, Vec3};
use pretty_assertions::assert_eq;

use super::super::*;
use crate::{
    backend::{
        mock_gl::{GlCall, MockGl},
        Uniform,
    },
    enumerates::{ErrorCode, ShaderType},
    identifier::ProgramId,
};

fn vertex_shader(gl: &MockGl) -> Shader<'_> {
    Shader::new(gl, ShaderType::Vertex, Some("void main() {}")).unwrap()
}

#[test]
fn test_add_shader_attaches_and_retains() {
    let gl = MockGl::new();
    gl.queue_names(&[10, 11]);
    let mut program = Program::new(&gl);
    let shader = vertex_shader(&gl);

    program.add_shader(shader);
    assert_eq!(program.shader_count(), 1);
    assert_eq!(
        gl.count(|call| *call == GlCall::AttachShader { program: 10, shader: 11 }),
        1
    );
    assert_eq!(
        gl.count(|call| matches!(call, GlCall::DeleteShader(_))),
        0
    );
}

#[test]
fn test_successful_link_releases_shaders() {
    let gl = MockGl::new();
    gl.queue_names(&[1, 2, 3]);
    let mut program = Program::new(&gl);
    program.add_shader(vertex_shader(&gl));
    program.add_shader(Shader::new(&gl, ShaderType::Fragment, Some("")).unwrap());

    program.link().unwrap();
    assert_eq!(program.shader_count(), 0);
    assert_eq!(
        gl.count(|call| matches!(call, GlCall::DeleteShader(_))),
        2
    );
    assert!(program.id().is_valid());
}

#[test]
fn test_link_status_false_keeps_program() {
    let gl = MockGl::new();
    gl.queue_names(&[4, 5]);
    gl.set_link_status(false);
    gl.set_info_log("undefined reference to main");
    let mut program = Program::new(&gl);
    program.add_shader(vertex_shader(&gl));

    let err = program.link().unwrap_err();
    match err {
        ShaderError::LinkError(log) => assert_eq!(log, "undefined reference to main"),
        err => panic!("unexpected error: {err}"),
    }
    assert_eq!(program.id().get(), 4);
    assert_eq!(program.shader_count(), 1);
    assert_eq!(
        gl.count(|call| matches!(call, GlCall::DeleteProgram(_))),
        0
    );
}

#[test]
fn test_link_call_error() {
    let gl = MockGl::new();
    gl.queue_link_result(ErrorCode::InvalidValue);
    let mut program = Program::new(&gl);

    let err = program.link().unwrap_err();
    assert!(matches!(
        err,
        ShaderError::LinkCallError(ErrorCode::InvalidValue)
    ));
    assert!(program.id().is_valid());
}

#[test]
fn test_relink_after_failure() {
    let gl = MockGl::new();
    let mut program = Program::new(&gl);
    program.add_shader(vertex_shader(&gl));

    gl.set_link_status(false);
    assert!(program.link().is_err());
    gl.set_link_status(true);
    program.link().unwrap();
    assert_eq!(program.shader_count(), 0);
}

#[test]
fn test_set_uniform_uses_looked_up_location() {
    let gl = MockGl::new();
    gl.set_uniform_location("uColor", 3);
    let program = Program::new(&gl);

    program.use_program();
    program.set_uniform("uColor", Vec3::new(1.0, 0.5, 0.0)).unwrap();
    program.set_uniform("uModel", Mat4::IDENTITY).unwrap();

    let calls = gl.calls();
    assert!(calls.contains(&GlCall::SetUniform(
        3,
        Uniform::Vec3(Vec3::new(1.0, 0.5, 0.0))
    )));
    assert!(calls.contains(&GlCall::SetUniform(-1, Uniform::Mat4(Mat4::IDENTITY))));
}

#[test]
fn test_uniform_name_with_nul_fails() {
    let gl = MockGl::new();
    let program = Program::new(&gl);

    let err = program.uniform_location("bad\0name").unwrap_err();
    assert!(matches!(err, ShaderError::NulError(_)));
}

#[test]
fn test_equality_by_id() {
    let gl = MockGl::new();
    gl.queue_names(&[6, 7]);
    let mut first = Program::new(&gl);
    let mut second = Program::new(&gl);
    assert!(first != second);

    let moved = first.take();
    assert_eq!(*moved.id(), ProgramId::new(6));
    assert!(first != moved);

    second.destroy();
    assert!(first == second);
}

#[test]
fn test_drop_deletes_program_once() {
    let gl = MockGl::new();
    gl.queue_names(&[12]);
    let mut program = Program::new(&gl);
    program.destroy();
    drop(program);

    assert_eq!(gl.count(|call| *call == GlCall::DeleteProgram(12)), 1);
}
