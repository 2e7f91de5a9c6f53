//! 4D Camera with six rotation planes and voxel collision
//!
//! The camera is a pair of [`Affine5`] transforms:
//! - `view`, rebuilt by [`Camera4D::update_view`] from eye/look/up/right and
//!   then mutated in place by every movement and rotation
//! - `projection`, rebuilt by [`Camera4D::update_projection`] from the lens
//!   parameters
//!
//! Movement and rotation steps are left-multiplied onto `view`, so they act
//! in view space: "forward" is always where the camera currently looks.
//! View space looks down `-w`, with x right, y up and z toward ana.

use std::collections::HashSet;

use fourspace_input::CameraControl;
use fourspace_math::{Affine5, Vec4};
use fourspace_world::{VoxelCoord, VoxelField};

/// Default rotation sensitivity multiplier
pub const DEFAULT_SENSITIVITY: f32 = 2.0;

/// 4D Camera for viewing 4D space
#[derive(Clone, Debug)]
pub struct Camera4D {
    eye: Vec4,
    look: Vec4,
    up: Vec4,
    right: Vec4,

    /// Vertical field of view in radians
    fovy: f32,
    aspect_x: f32,
    aspect_w: f32,
    z_near: f32,
    z_far: f32,

    /// Collision half-extent along each axis
    radius: f32,
    /// Multiplier applied to every rotation angle
    sensitivity: f32,

    view: Affine5,
    projection: Affine5,

    /// Snapshot of solid voxels used for collision
    terrain: HashSet<VoxelCoord>,
}

impl Default for Camera4D {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera4D {
    /// Create a camera at the default pose
    ///
    /// Eye at `(0, 0, 0, -5)` looking at the origin, up `+y`, right `+x`,
    /// 30 degree field of view. `view` and `projection` are already built.
    pub fn new() -> Self {
        let mut camera = Self {
            eye: Vec4::new(0.0, 0.0, 0.0, -5.0),
            look: Vec4::ZERO,
            up: Vec4::Y,
            right: Vec4::X,
            fovy: 30.0f32.to_radians(),
            aspect_x: 1.77,
            aspect_w: 1.0,
            z_near: 0.1,
            z_far: 100.0,
            radius: 1.0,
            sensitivity: DEFAULT_SENSITIVITY,
            view: Affine5::IDENTITY,
            projection: Affine5::IDENTITY,
            terrain: HashSet::new(),
        };
        camera.update_view();
        camera.update_projection();
        camera
    }

    // ---- Setup ----

    pub fn set_eye(&mut self, eye: Vec4) {
        self.eye = eye;
    }

    pub fn set_look(&mut self, look: Vec4) {
        self.look = look;
    }

    pub fn set_up_dir(&mut self, up: Vec4) {
        self.up = up;
    }

    pub fn set_right_dir(&mut self, right: Vec4) {
        self.right = right;
    }

    /// Rebuild `view` from eye, look, up and right
    ///
    /// Discards every movement and rotation applied since the last rebuild.
    pub fn update_view(&mut self) {
        self.view = Affine5::look_at(self.eye, self.look, self.up, self.right);
    }

    /// Set the vertical field of view in radians
    pub fn set_fovy(&mut self, fovy: f32) {
        self.fovy = fovy;
    }

    pub fn set_aspect_x(&mut self, aspect_x: f32) {
        self.aspect_x = aspect_x;
    }

    pub fn set_aspect_w(&mut self, aspect_w: f32) {
        self.aspect_w = aspect_w;
    }

    pub fn set_z_near(&mut self, z_near: f32) {
        self.z_near = z_near;
    }

    pub fn set_z_far(&mut self, z_far: f32) {
        self.z_far = z_far;
    }

    /// Rebuild `projection` from the lens parameters
    pub fn update_projection(&mut self) {
        self.projection =
            Affine5::perspective(self.fovy, self.aspect_x, self.aspect_w, self.z_near, self.z_far);
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    /// Replace the collision snapshot with the solid voxels of `field`
    pub fn set_terrain(&mut self, field: &VoxelField) {
        self.set_terrain_cells(field.occupied_cells());
    }

    /// Replace the collision snapshot with an explicit set of solid voxels
    pub fn set_terrain_cells<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = VoxelCoord>,
    {
        self.terrain = cells.into_iter().collect();
        log::debug!("Camera collision set: {} voxels", self.terrain.len());
    }

    /// Return to the configured pose
    pub fn reset(&mut self) {
        self.update_view();
    }

    // ---- Accessors ----

    pub fn view(&self) -> &Affine5 {
        &self.view
    }

    pub fn projection(&self) -> &Affine5 {
        &self.projection
    }

    /// Combined transform for the renderer: projection applied after view
    pub fn view_projection(&self) -> Affine5 {
        Affine5::compose(&self.projection, &self.view)
    }

    /// World-space camera position
    pub fn position(&self) -> Vec4 {
        self.view.eye_position()
    }

    pub fn fovy(&self) -> f32 {
        self.fovy
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    // ---- Rotation ----

    /// Rotate the view in plane `(a, b)` by a raw angle (no sensitivity)
    pub fn rotate_plane(&mut self, a: usize, b: usize, angle: f32) {
        self.view = Affine5::rotate(a, b, angle) * self.view;
    }

    /// Tilt the line of sight toward up
    pub fn rotate_up(&mut self, angle: f32) {
        self.rotate_plane(1, 3, self.sensitivity * angle);
    }

    pub fn rotate_down(&mut self, angle: f32) {
        self.rotate_plane(1, 3, -self.sensitivity * angle);
    }

    /// Turn the line of sight toward right
    pub fn rotate_right(&mut self, angle: f32) {
        self.rotate_plane(0, 3, self.sensitivity * angle);
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.rotate_plane(0, 3, -self.sensitivity * angle);
    }

    /// Turn the line of sight toward ana
    pub fn rotate_ana(&mut self, angle: f32) {
        self.rotate_plane(2, 3, self.sensitivity * angle);
    }

    pub fn rotate_kata(&mut self, angle: f32) {
        self.rotate_plane(2, 3, -self.sensitivity * angle);
    }

    /// Roll about the line of sight, lifting the right side
    pub fn roll_left(&mut self, angle: f32) {
        self.rotate_plane(0, 1, self.sensitivity * angle);
    }

    pub fn roll_right(&mut self, angle: f32) {
        self.rotate_plane(0, 1, -self.sensitivity * angle);
    }

    // ---- Movement ----

    fn step(&mut self, axis: usize, amount: f32) {
        self.view = Affine5::translate(axis, amount) * self.view;
        self.resolve_collision();
    }

    pub fn move_forward(&mut self, amount: f32) {
        self.step(3, amount);
    }

    pub fn move_backward(&mut self, amount: f32) {
        self.step(3, -amount);
    }

    pub fn move_right(&mut self, amount: f32) {
        self.step(0, -amount);
    }

    pub fn move_left(&mut self, amount: f32) {
        self.step(0, amount);
    }

    pub fn move_up(&mut self, amount: f32) {
        self.step(1, -amount);
    }

    pub fn move_down(&mut self, amount: f32) {
        self.step(1, amount);
    }

    pub fn move_ana(&mut self, amount: f32) {
        self.step(2, -amount);
    }

    pub fn move_kata(&mut self, amount: f32) {
        self.step(2, amount);
    }

    // ---- Collision ----

    /// Push the camera out of solid voxels along the world axes
    ///
    /// The position is read once, then the probes `c + radius * e` and
    /// `c - radius * e` are tested for x, y, z and w in that order. When a
    /// probe's nearest voxel is solid, the camera is moved back along that
    /// axis by the probe's depth inside the voxel. Corrections are not
    /// re-checked against each other, so a diagonal corner can leave some
    /// residual penetration.
    pub fn resolve_collision(&mut self) {
        if self.terrain.is_empty() {
            return;
        }

        let c = self.position();
        for axis in 0..4 {
            for sign in [1.0f32, -1.0] {
                let mut probe = c;
                probe[axis] += sign * self.radius;

                let cell = VoxelCoord::nearest(probe);
                if !self.terrain.contains(&cell) {
                    continue;
                }

                let depth = 0.5 + sign * (probe[axis] - cell.center()[axis]);
                log::trace!("Collision with {:?} on axis {}: depth {}", cell, axis, depth);
                // Right-multiplying moves the camera by -offset in world space
                self.view = self.view * Affine5::translate(axis, sign * depth);
            }
        }
    }
}

impl CameraControl for Camera4D {
    fn move_forward(&mut self, amount: f32) {
        Camera4D::move_forward(self, amount);
    }

    fn move_backward(&mut self, amount: f32) {
        Camera4D::move_backward(self, amount);
    }

    fn move_left(&mut self, amount: f32) {
        Camera4D::move_left(self, amount);
    }

    fn move_right(&mut self, amount: f32) {
        Camera4D::move_right(self, amount);
    }

    fn move_up(&mut self, amount: f32) {
        Camera4D::move_up(self, amount);
    }

    fn move_down(&mut self, amount: f32) {
        Camera4D::move_down(self, amount);
    }

    fn move_ana(&mut self, amount: f32) {
        Camera4D::move_ana(self, amount);
    }

    fn move_kata(&mut self, amount: f32) {
        Camera4D::move_kata(self, amount);
    }

    fn rotate_up(&mut self, angle: f32) {
        Camera4D::rotate_up(self, angle);
    }

    fn rotate_down(&mut self, angle: f32) {
        Camera4D::rotate_down(self, angle);
    }

    fn rotate_left(&mut self, angle: f32) {
        Camera4D::rotate_left(self, angle);
    }

    fn rotate_right(&mut self, angle: f32) {
        Camera4D::rotate_right(self, angle);
    }

    fn rotate_ana(&mut self, angle: f32) {
        Camera4D::rotate_ana(self, angle);
    }

    fn rotate_kata(&mut self, angle: f32) {
        Camera4D::rotate_kata(self, angle);
    }

    fn roll_left(&mut self, angle: f32) {
        Camera4D::roll_left(self, angle);
    }

    fn roll_right(&mut self, angle: f32) {
        Camera4D::roll_right(self, angle);
    }

    fn position(&self) -> Vec4 {
        Camera4D::position(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fourspace_math::{mat4, Vec5};

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        (a - b).length() < EPSILON
    }

    /// Direction the camera looks along, in world space
    fn forward(camera: &Camera4D) -> Vec4 {
        -mat4::row(&camera.view().m, 3)
    }

    #[test]
    fn test_default_pose() {
        let camera = Camera4D::new();
        assert!(vec_approx_eq(camera.position(), Vec4::new(0.0, 0.0, 0.0, -5.0)));
        assert!(vec_approx_eq(forward(&camera), Vec4::W));
        assert!((camera.fovy() - 30.0f32.to_radians()).abs() < EPSILON);
    }

    #[test]
    fn test_moves_follow_view_directions() {
        let cases: [(fn(&mut Camera4D, f32), Vec4); 8] = [
            (Camera4D::move_forward, Vec4::new(0.0, 0.0, 0.0, 1.0)),
            (Camera4D::move_backward, Vec4::new(0.0, 0.0, 0.0, -1.0)),
            (Camera4D::move_right, Vec4::new(1.0, 0.0, 0.0, 0.0)),
            (Camera4D::move_left, Vec4::new(-1.0, 0.0, 0.0, 0.0)),
            (Camera4D::move_up, Vec4::new(0.0, 1.0, 0.0, 0.0)),
            (Camera4D::move_down, Vec4::new(0.0, -1.0, 0.0, 0.0)),
            // Default frame has ana along -z
            (Camera4D::move_ana, Vec4::new(0.0, 0.0, -1.0, 0.0)),
            (Camera4D::move_kata, Vec4::new(0.0, 0.0, 1.0, 0.0)),
        ];

        for (i, (step, dir)) in cases.iter().enumerate() {
            let mut camera = Camera4D::new();
            let start = camera.position();
            step(&mut camera, 0.5);
            let moved = camera.position() - start;
            assert!(vec_approx_eq(moved, *dir * 0.5), "case {}: moved {:?}", i, moved);
        }
    }

    #[test]
    fn test_rotate_right_turns_toward_right() {
        let mut camera = Camera4D::new();
        camera.rotate_right(0.1);
        let f = forward(&camera);
        assert!(f.x > 0.0 && f.w > 0.0, "forward {:?}", f);
        assert!((f.x - 0.2f32.sin()).abs() < EPSILON);
    }

    #[test]
    fn test_rotate_up_tilts_toward_up() {
        let mut camera = Camera4D::new();
        camera.rotate_up(0.1);
        assert!(forward(&camera).y > 0.0);

        camera.rotate_down(0.1);
        assert!(vec_approx_eq(forward(&camera), Vec4::W));
    }

    #[test]
    fn test_rotation_keeps_position() {
        let mut camera = Camera4D::new();
        camera.rotate_ana(0.3);
        camera.roll_left(0.2);
        camera.rotate_left(0.7);
        assert!(vec_approx_eq(camera.position(), Vec4::new(0.0, 0.0, 0.0, -5.0)));
    }

    #[test]
    fn test_sensitivity_scales_angles() {
        let mut a = Camera4D::new();
        let mut b = Camera4D::new();
        b.set_sensitivity(1.0);

        a.rotate_kata(0.1);
        b.rotate_kata(0.2);
        assert!(a.view().approx_eq(b.view(), EPSILON));
    }

    #[test]
    fn test_view_projection_is_projection_after_view() {
        let camera = Camera4D::new();
        let p = Vec5::point(Vec4::new(0.3, -0.2, 0.1, 2.0));

        let combined = camera.view_projection().apply(p);
        let sequential = camera.projection().apply(camera.view().apply(p));
        assert!(vec_approx_eq(combined.v, sequential.v));
        assert!((combined.h - sequential.h).abs() < EPSILON);
    }

    #[test]
    fn test_origin_projects_inside_depth_range() {
        // Origin sits 5 units ahead of the default eye
        let camera = Camera4D::new();
        let ndc = camera.view_projection().apply(Vec5::point(Vec4::ZERO)).project();
        assert!(ndc.x.abs() < EPSILON && ndc.y.abs() < EPSILON);
        assert!(ndc.w > 0.0 && ndc.w < 1.0, "depth {}", ndc.w);
    }

    #[test]
    fn test_reset_restores_pose() {
        let mut camera = Camera4D::new();
        let original = *camera.view();
        camera.move_forward(2.0);
        camera.rotate_ana(1.0);
        camera.reset();
        assert!(camera.view().approx_eq(&original, EPSILON));
    }

    #[test]
    fn test_projection_rebuilds_on_demand() {
        let mut camera = Camera4D::new();
        let before = *camera.projection();
        camera.set_fovy(1.2);
        assert_eq!(*camera.projection(), before);
        camera.update_projection();
        assert_ne!(*camera.projection(), before);
    }

    #[test]
    fn test_no_terrain_no_collision() {
        let mut camera = Camera4D::new();
        camera.move_forward(5.0);
        assert!(vec_approx_eq(camera.position(), Vec4::ZERO));
    }

    #[test]
    fn test_collision_pushes_back_along_forward() {
        // Solid voxel straight ahead of the default pose
        let mut camera = Camera4D::new();
        camera.set_terrain_cells([VoxelCoord::new(0, 0, 0, -3)]);

        camera.move_forward(0.6);
        let w = camera.position().w;
        // Voxel face sits at w = -3.5; the camera keeps a full radius from it
        assert!((w - -4.5).abs() < EPSILON, "camera w {}", w);
    }
}
