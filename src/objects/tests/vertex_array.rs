use glam::{Vec2, Vec3};
use pretty_assertions::assert_eq;

use super::super::*;
use crate::{
    backend::mock_gl::{GlCall, MockGl},
    enumerates::BufferTarget,
    identifier::VertexArrayId,
};

fn triangle() -> [Vertex; 3] {
    [
        Vertex::new(Vec3::new(-1.0, -1.0, 0.0), Vec2::new(0.0, 0.0), Vec3::Z),
        Vertex::new(Vec3::new(1.0, -1.0, 0.0), Vec2::new(1.0, 0.0), Vec3::Z),
        Vertex::new(Vec3::new(0.0, 1.0, 0.0), Vec2::new(0.5, 1.0), Vec3::Z),
    ]
}

#[test]
fn test_vertex_layout() {
    assert_eq!(std::mem::size_of::<Vertex>(), 32);
    assert_eq!(std::mem::offset_of!(Vertex, tex_coord), 12);
    assert_eq!(std::mem::offset_of!(Vertex, normal), 20);
}

#[test]
fn test_new_allocates_two_tagged_buffers() {
    let gl = MockGl::new();
    gl.queue_names(&[1, 2, 3]);
    let vao = VertexArray::new(&gl);

    let [array, element] = vao.buffers();
    assert_eq!((array.id().get(), array.target()), (1, BufferTarget::Array));
    assert_eq!(
        (element.id().get(), element.target()),
        (2, BufferTarget::ElementArray)
    );
    assert_eq!(vao.id().get(), 3);
    assert_eq!(
        gl.calls(),
        vec![GlCall::NewBuffers(2), GlCall::NewVertexArrays(1)]
    );
}

#[test]
fn test_explicit_id_still_allocates_buffers() {
    let gl = MockGl::new();
    let vao = VertexArray::with_id(&gl, VertexArrayId::new(50));

    assert_eq!(vao.id().get(), 50);
    assert_eq!(gl.calls(), vec![GlCall::NewBuffers(2)]);
    let targets: Vec<_> = vao.buffers().iter().map(|buffer| buffer.target()).collect();
    assert_eq!(targets, vec![BufferTarget::Array, BufferTarget::ElementArray]);
}

#[test]
fn test_build_allocates_arrays_in_one_call() {
    let gl = MockGl::new();
    let arrays = VertexArray::build(&gl, 3);

    assert_eq!(arrays.len(), 3);
    assert_eq!(
        gl.count(|call| matches!(call, GlCall::NewVertexArrays(_))),
        1
    );
    assert_eq!(gl.count(|call| *call == GlCall::NewBuffers(2)), 3);
}

#[test]
fn test_load_describes_vertex_layout() {
    let gl = MockGl::new();
    gl.queue_names(&[1, 2, 3]);
    let vao = VertexArray::new(&gl);
    gl.clear_calls();

    let vertices = triangle();
    vao.load(&vertices);

    let attribute = |index, components, offset| GlCall::VertexAttribPointer {
        index,
        components,
        stride: 32,
        offset,
    };
    assert_eq!(
        gl.calls(),
        vec![
            GlCall::BindVertexArray(3),
            GlCall::BindBuffer(BufferTarget::Array, 1),
            GlCall::BufferData(
                BufferTarget::Array,
                bytemuck::cast_slice(&vertices).to_vec()
            ),
            attribute(0, 3, 0),
            GlCall::EnableVertexAttribArray(0),
            attribute(1, 2, 12),
            GlCall::EnableVertexAttribArray(1),
            attribute(2, 3, 20),
            GlCall::EnableVertexAttribArray(2),
        ]
    );
}

#[test]
fn test_load_indexed_fills_element_buffer() {
    let gl = MockGl::new();
    gl.queue_names(&[1, 2, 3]);
    let vao = VertexArray::new(&gl);
    gl.clear_calls();

    vao.load_indexed(&triangle(), &[0, 1, 2]);

    let calls = gl.calls();
    assert!(calls.contains(&GlCall::BindBuffer(BufferTarget::ElementArray, 2)));
    assert!(calls.contains(&GlCall::BufferData(
        BufferTarget::ElementArray,
        bytemuck::cast_slice(&[0u32, 1, 2]).to_vec()
    )));
}

#[test]
fn test_drop_deletes_array_and_buffers() {
    let gl = MockGl::new();
    gl.queue_names(&[1, 2, 3]);
    drop(VertexArray::new(&gl));

    let deletes: Vec<_> = gl
        .calls()
        .into_iter()
        .filter(|call| {
            matches!(
                call,
                GlCall::DeleteVertexArrays(_) | GlCall::DeleteBuffers(_)
            )
        })
        .collect();
    assert_eq!(
        deletes,
        vec![
            GlCall::DeleteVertexArrays(vec![3]),
            GlCall::DeleteBuffers(vec![1]),
            GlCall::DeleteBuffers(vec![2]),
        ]
    );
}

#[test]
fn test_take_moves_buffers() {
    let gl = MockGl::new();
    gl.queue_names(&[1, 2, 3]);
    let mut source = VertexArray::new(&gl);

    let taken = source.take();
    assert!(!source.id().is_valid());
    assert!(source.buffers().iter().all(|buffer| !buffer.id().is_valid()));
    assert_eq!(taken.id().get(), 3);

    drop(source);
    assert_eq!(gl.count(|call| matches!(call, GlCall::DeleteBuffers(_))), 0);
    drop(taken);
    assert_eq!(gl.count(|call| matches!(call, GlCall::DeleteBuffers(_))), 2);
}
