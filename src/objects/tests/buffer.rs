use pretty_assertions::assert_eq;

use super::super::*;
use crate::{
    backend::mock_gl::{GlCall, MockGl},
    enumerates::BufferTarget,
    identifier::BufferId,
};

fn is_new_buffers(call: &GlCall) -> bool {
    matches!(call, GlCall::NewBuffers(_))
}

fn is_delete_buffers(call: &GlCall) -> bool {
    matches!(call, GlCall::DeleteBuffers(_))
}

#[test]
fn test_explicit_id_skips_allocation() {
    let gl = MockGl::new();
    let buffer = Buffer::with_id(&gl, BufferId::new(7), BufferTarget::Array);

    assert_eq!(buffer.id().get(), 7);
    assert_eq!(buffer.target(), BufferTarget::Array);
    assert_eq!(gl.count(is_new_buffers), 0);
}

#[test]
fn test_missing_id_allocates_once() {
    let gl = MockGl::new();
    gl.queue_names(&[42]);
    let buffer = Buffer::new(&gl, BufferTarget::ElementArray);

    assert_eq!(buffer.id().get(), 42);
    assert_eq!(gl.calls(), vec![GlCall::NewBuffers(1)]);
}

#[test]
fn test_build_allocates_in_one_call() {
    let gl = MockGl::new();
    gl.queue_names(&[1, 2]);

    let buffers = Buffer::build(&gl, 2);
    let ids: Vec<_> = buffers.iter().map(|buffer| buffer.id().get()).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(buffers
        .iter()
        .all(|buffer| buffer.target() == BufferTarget::Undefined));
    assert_eq!(gl.calls(), vec![GlCall::NewBuffers(2)]);

    drop(buffers);
    assert_eq!(
        gl.calls()
            .into_iter()
            .filter(is_delete_buffers)
            .collect::<Vec<_>>(),
        vec![
            GlCall::DeleteBuffers(vec![1]),
            GlCall::DeleteBuffers(vec![2])
        ]
    );
}

#[test]
#[should_panic(expected = "amount > 0")]
fn test_build_zero_panics() {
    let gl = MockGl::new();
    let _ = Buffer::build(&gl, 0);
}

#[test]
fn test_drop_deletes_once() {
    let gl = MockGl::new();
    {
        let _buffer = Buffer::with_id(&gl, BufferId::new(3), BufferTarget::Array);
    }
    assert_eq!(gl.calls(), vec![GlCall::DeleteBuffers(vec![3])]);
}

#[test]
fn test_destroy_is_idempotent() {
    let gl = MockGl::new();
    let mut buffer = Buffer::with_id(&gl, BufferId::new(3), BufferTarget::Array);

    buffer.destroy();
    buffer.destroy();
    assert!(!buffer.id().is_valid());
    drop(buffer);
    assert_eq!(gl.count(is_delete_buffers), 1);
}

#[test]
fn test_take_empties_source() {
    let gl = MockGl::new();
    let mut source = Buffer::with_id(&gl, BufferId::new(9), BufferTarget::ElementArray);

    let taken = source.take();
    assert!(!source.id().is_valid());
    assert_eq!(source.target(), BufferTarget::Undefined);
    assert_eq!(taken.id().get(), 9);
    assert_eq!(taken.target(), BufferTarget::ElementArray);

    drop(source);
    assert_eq!(gl.count(is_delete_buffers), 0);
    drop(taken);
    assert_eq!(gl.calls(), vec![GlCall::DeleteBuffers(vec![9])]);
}

#[test]
fn test_replacing_live_buffer_frees_old_handle() {
    let gl = MockGl::new();
    let mut buffer = Buffer::with_id(&gl, BufferId::new(1), BufferTarget::Array);
    assert_eq!(buffer.id().get(), 1);

    buffer = Buffer::with_id(&gl, BufferId::new(2), BufferTarget::Array);
    assert_eq!(gl.calls(), vec![GlCall::DeleteBuffers(vec![1])]);
    assert_eq!(buffer.id().get(), 2);
}

#[test]
fn test_bind_and_load() {
    let gl = MockGl::new();
    let buffer = Buffer::with_id(&gl, BufferId::new(4), BufferTarget::Array);

    buffer.bind();
    buffer.load(&[1.0f32, -2.0]);

    let mut expected = 1.0f32.to_ne_bytes().to_vec();
    expected.extend_from_slice(&(-2.0f32).to_ne_bytes());
    assert_eq!(
        gl.calls(),
        vec![
            GlCall::BindBuffer(BufferTarget::Array, 4),
            GlCall::BufferData(BufferTarget::Array, expected),
        ]
    );
}

#[test]
fn test_set_target() {
    let gl = MockGl::new();
    let mut buffer = Buffer::with_id(&gl, BufferId::new(5), BufferTarget::Undefined);

    buffer.set_target(BufferTarget::ElementArray);
    buffer.bind();
    assert_eq!(
        gl.calls(),
        vec![GlCall::BindBuffer(BufferTarget::ElementArray, 5)]
    );
}
