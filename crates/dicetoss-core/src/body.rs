//! Read-only view of a physics body.

use crate::euler::EulerAngles;

/// What the roll tracker needs to observe from the physics engine each tick.
///
/// Implementations sample externally owned state; nothing here mutates the
/// body.
pub trait PhysicsBody {
    /// Current orientation in degrees.
    fn orientation_euler(&self) -> EulerAngles;

    /// Magnitude of the current angular velocity, in radians per second.
    fn angular_speed(&self) -> f32;
}

/// A fixed sample of body state, for replaying traces outside an engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SampledBody {
    pub orientation: EulerAngles,
    pub angular_speed: f32,
}

impl SampledBody {
    pub fn new(orientation: EulerAngles, angular_speed: f32) -> Self {
        Self {
            orientation,
            angular_speed,
        }
    }

    pub fn with_angular_speed(mut self, angular_speed: f32) -> Self {
        self.angular_speed = angular_speed;
        self
    }
}

impl PhysicsBody for SampledBody {
    fn orientation_euler(&self) -> EulerAngles {
        self.orientation
    }

    fn angular_speed(&self) -> f32 {
        self.angular_speed
    }
}
