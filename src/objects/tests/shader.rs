use std::fs;

use super::super::*;
use crate::{
    backend::mock_gl::{GlCall, MockGl},
    enumerates::{ErrorCode, ShaderType},
};

fn is_delete_shader(call: &GlCall) -> bool {
    matches!(call, GlCall::DeleteShader(_))
}

#[test]
fn test_no_source_skips_compile() {
    let gl = MockGl::new();
    let shader = Shader::new(&gl, ShaderType::Vertex, None).unwrap();

    assert!(shader.id().is_valid());
    assert_eq!(gl.calls(), vec![GlCall::NewShader(ShaderType::Vertex)]);
}

#[test]
fn test_successful_compile() {
    let gl = MockGl::new();
    gl.queue_names(&[5]);
    let shader = Shader::new(&gl, ShaderType::Fragment, Some("")).unwrap();

    assert_eq!(shader.id().get(), 5);
    assert_eq!(
        gl.count(|call| matches!(call, GlCall::ShaderSource(5, _))),
        1
    );
    assert_eq!(gl.count(|call| matches!(call, GlCall::Compile(5))), 1);
    assert_eq!(gl.count(is_delete_shader), 0);

    drop(shader);
    assert_eq!(gl.count(|call| *call == GlCall::DeleteShader(5)), 1);
}

#[test]
fn test_source_is_passed_verbatim() {
    let gl = MockGl::new();
    gl.queue_names(&[1]);
    let source = "#version 410\nvoid main() {}\n";
    let _shader = Shader::new(&gl, ShaderType::Vertex, Some(source)).unwrap();

    assert!(gl
        .calls()
        .contains(&GlCall::ShaderSource(1, vec![source.to_string()])));
}

#[test]
fn test_compile_status_false_reports_info_log() {
    let gl = MockGl::new();
    gl.queue_names(&[8]);
    gl.set_compile_status(false);
    gl.set_info_log("0:1: syntax error");

    let err = Shader::new(&gl, ShaderType::Fragment, Some("bogus")).unwrap_err();
    match err {
        ShaderError::CompileError(log) => assert_eq!(log, "0:1: syntax error"),
        err => panic!("unexpected error: {err}"),
    }
    assert_eq!(gl.count(|call| *call == GlCall::DeleteShader(8)), 1);
}

#[test]
fn test_compile_status_false_with_empty_log_uses_fallback() {
    let gl = MockGl::new();
    gl.set_compile_status(false);

    let err = Shader::new(&gl, ShaderType::Vertex, Some("bogus")).unwrap_err();
    match err {
        ShaderError::CompileError(log) => assert_eq!(log, UNSPECIFIED_COMPILE_ERROR),
        err => panic!("unexpected error: {err}"),
    }
    assert_eq!(gl.count(is_delete_shader), 1);
}

#[test]
fn test_compile_call_error_deletes_shader() {
    let gl = MockGl::new();
    gl.queue_compile_result(ErrorCode::InvalidOperation);

    let err = Shader::new(&gl, ShaderType::Geometry, Some("")).unwrap_err();
    assert!(matches!(
        err,
        ShaderError::CompileCallError(ErrorCode::InvalidOperation)
    ));
    assert!(err.to_string().starts_with("Error compiling shader: "));
    // Status is not queried after a failed call.
    assert_eq!(
        gl.count(|call| matches!(call, GlCall::ShaderParameter(..))),
        0
    );
    assert_eq!(gl.count(is_delete_shader), 1);
}

#[test]
fn test_missing_file_fails_before_driver_calls() {
    let gl = MockGl::new();
    let path = std::env::temp_dir().join("glhandles-missing-shader.vert");
    let _ = fs::remove_file(&path);

    let err = Shader::from_path(&gl, ShaderType::Vertex, &path).unwrap_err();
    assert!(matches!(err, ShaderError::FileNotFound(ref missing) if *missing == path));
    assert!(gl.calls().is_empty());
}

#[test]
fn test_from_path_compiles_file_contents() {
    let gl = MockGl::new();
    gl.queue_names(&[2]);
    let path = std::env::temp_dir().join("glhandles-from-path.frag");
    let source = "#version 410\nout vec4 color;\nvoid main() { color = vec4(1.0); }\n";
    fs::write(&path, source).unwrap();

    let shader = Shader::from_path(&gl, ShaderType::Fragment, &path).unwrap();
    assert_eq!(shader.id().get(), 2);
    assert!(gl
        .calls()
        .contains(&GlCall::ShaderSource(2, vec![source.to_string()])));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_take_and_destroy() {
    let gl = MockGl::new();
    gl.queue_names(&[3]);
    let mut source = Shader::new(&gl, ShaderType::Vertex, None).unwrap();

    let mut taken = source.take();
    assert!(!source.id().is_valid());
    assert_eq!(taken.id().get(), 3);

    taken.destroy();
    taken.destroy();
    drop(taken);
    drop(source);
    assert_eq!(gl.count(is_delete_shader), 1);
}
