use cgmath::{Point3, Vector3, Zero};

use crate::constants::stamina::STAMINA_MAX;

/// Observer state advanced by the solver each tick.
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub position: Point3<f32>,
    pub velocity: Vector3<f32>,
    /// Horizontal facing in radians
    pub yaw: f32,
    /// Look pitch in radians
    pub pitch: f32,
    pub grounded: bool,
    /// True while sustained lift was applied this tick
    pub flying: bool,
    /// Always within [0, STAMINA_MAX]
    pub stamina: f32,
}

impl PlayerState {
    pub fn new(position: Point3<f32>) -> Self {
        Self {
            position,
            velocity: Vector3::zero(),
            yaw: 0.0,
            pitch: 0.0,
            grounded: false,
            flying: false,
            stamina: STAMINA_MAX,
        }
    }

    pub fn set_look(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch;
    }

    pub fn drain_stamina(&mut self, amount: f32) {
        self.stamina = (self.stamina - amount).max(0.0);
    }

    pub fn regen_stamina(&mut self, amount: f32) {
        self.stamina = (self.stamina + amount).min(STAMINA_MAX);
    }
}
