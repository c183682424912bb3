use crate::math::{mat4, transform, vec3, Mat4, Vec3};

const WORLD_UP: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };

pub struct Camera {
    pub pos: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera {
    pub fn new(pos: Vec3, yaw: f32, pitch: f32) -> Self {
        Self { pos, yaw, pitch }
    }

    // Back-vector is the camera-local +Z.
    pub fn forward(&self) -> Vec3 {
        vec3(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        )
    }

    fn forward_horizontal(&self) -> Vec3 {
        vec3(self.yaw.sin(), 0.0, self.yaw.cos())
    }

    fn right(&self) -> Vec3 {
        let back = self.forward() * -1.0;
        back.cross(WORLD_UP).normalize()
    }

    pub fn view_matrix(&self) -> Mat4 {
        let cam_z = self.forward() * -1.0;
        let cam_x = cam_z.cross(WORLD_UP).normalize();
        let cam_y = cam_x.cross(cam_z).normalize();

        let rotation_inv = mat4(
            cam_x.x, cam_y.x, cam_z.x, 0.0,
            cam_x.y, cam_y.y, cam_z.y, 0.0,
            cam_x.z, cam_y.z, cam_z.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
        .transpose();

        let translation_inv = transform::translation(self.pos * -1.0);
        rotation_inv * translation_inv
    }

    pub fn move_forward(&mut self, delta: Vec3) {
        let right = self.right();
        let forward = self.forward_horizontal();
        self.pos = self.pos + right * delta.x + WORLD_UP * delta.y + forward * delta.z;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(vec3(0.0, 0.0, -2.0), 0.0, 0.0)
    }
}
