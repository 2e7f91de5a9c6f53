//! Integration tests for camera movement against voxel terrain
//!
//! These tests drive the camera the way the application loop does:
//! 1. Build a voxel field and hand its solid cells to the camera
//! 2. Step and rotate through the public camera operations
//! 3. Check the resulting pose and clearance

use std::f32::consts::PI;

use fourspace_input::{CameraControl, CameraController, InputState};
use fourspace_math::{Affine5, Vec4};
use fourspace_render::{decode_view_projection, encode_view_projection, Camera4D, UniformLayout};
use fourspace_world::{Scenario, VoxelCoord, VoxelField};

const EPSILON: f32 = 0.001;

/// Camera at (0.5, 2, 0, 7) looking along +w, right along +x
fn camera_beside_marker(field: &VoxelField) -> Camera4D {
    let mut camera = Camera4D::new();
    camera.set_eye(Vec4::new(0.5, 2.0, 0.0, 7.0));
    camera.set_look(Vec4::new(0.5, 2.0, 0.0, 8.0));
    camera.set_up_dir(Vec4::Y);
    camera.set_right_dir(Vec4::X);
    camera.update_view();
    camera.set_terrain(field);
    camera
}

// ==================== Rotation ====================

#[test]
fn test_half_turn_twice_restores_view() {
    let mut camera = Camera4D::new();
    let original = *camera.view();

    camera.rotate_plane(0, 3, PI);
    assert!(!camera.view().approx_eq(&original, EPSILON));
    camera.rotate_plane(0, 3, PI);
    assert!(camera.view().approx_eq(&original, EPSILON));
}

#[test]
fn test_world_space_rotation_order_matters() {
    let mut a = Camera4D::new();
    let mut b = Camera4D::new();

    a.rotate_right(0.3);
    a.rotate_ana(0.4);
    b.rotate_ana(0.4);
    b.rotate_right(0.3);

    assert!(!a.view().approx_eq(b.view(), EPSILON));
}

// ==================== Collision ====================

#[test]
fn test_marker_voxel_pushes_camera_back() {
    let field = Scenario::Wall.build(9);
    assert!(field.contains_occupied_cell(VoxelCoord::new(2, 2, 0, 7)));

    let mut camera = camera_beside_marker(&field);
    let start = camera.position();
    assert!((start.x - 0.5).abs() < EPSILON);

    // Probe ends up 0.3 inside the voxel at x = 2
    camera.move_right(0.3);

    let p = camera.position();
    let face = 2.0 - 0.5;
    assert!(face - p.x >= camera.radius() - EPSILON, "camera x {} too close to face {}", p.x, face);
    assert!((p.x - 0.5).abs() < EPSILON, "camera x {}", p.x);
    assert!((p.y - 2.0).abs() < EPSILON && (p.w - 7.0).abs() < EPSILON);
}

#[test]
fn test_free_movement_away_from_terrain() {
    let field = Scenario::Wall.build(9);
    let mut camera = camera_beside_marker(&field);

    camera.move_left(0.3);
    assert!((camera.position().x - 0.2).abs() < EPSILON);
}

#[test]
fn test_walking_into_block_stops_at_radius() {
    let field = Scenario::Block.build(9);
    let mut camera = Camera4D::new();
    camera.set_eye(Vec4::new(2.0, 2.0, 2.0, -5.0));
    camera.set_look(Vec4::new(2.0, 2.0, 2.0, 0.0));
    camera.update_view();
    camera.set_terrain(&field);

    for _ in 0..60 {
        camera.move_forward(0.1);
    }

    // The block occupies w = 0 only; its face is at w = -0.5
    let w = camera.position().w;
    assert!(w <= -1.5 + EPSILON, "camera w {} inside clearance", w);
    assert!(w > -1.7, "camera w {} stopped too early", w);
}

// ==================== Controller ====================

#[test]
fn test_controller_drives_camera() {
    let controller = CameraController::new();
    let mut input = InputState::new();
    let mut camera = Camera4D::new();

    input.process_mouse_motion(100.0, 0.0);
    let pos = controller.update(&mut input, &mut camera);

    assert_eq!(pos, CameraControl::position(&camera));
    // 100 px * 0.001 rad/px * sensitivity 2
    let expected = Affine5::rotate(0, 3, 0.2) * *Camera4D::new().view();
    assert!(camera.view().approx_eq(&expected, EPSILON));
}

// ==================== Render boundary ====================

#[test]
fn test_view_projection_survives_encoding() {
    let mut camera = Camera4D::new();
    camera.rotate_ana(0.25);
    camera.move_forward(1.0);

    let vp = camera.view_projection();
    let bytes = encode_view_projection(&vp, UniformLayout::V1);
    let decoded = decode_view_projection(&bytes, UniformLayout::V1).unwrap();
    assert_eq!(decoded, vp);
}
