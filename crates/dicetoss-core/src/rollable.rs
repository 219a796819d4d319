//! Motion lifecycle and reporting for a single thrown object.

use serde::Serialize;

use crate::body::PhysicsBody;
use crate::resolver::{is_plausible_rest, resolve, UNKNOWN_FACE};
use crate::settings::{RollSettings, SettlePolicy};
use crate::variant::RollableVariant;

/// Where an object is in its roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum MotionState {
    #[default]
    AtRest,
    Moving,
    /// Terminal until the object is despawned.
    Settled,
}

/// Result of asking an object for its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RollOutcome {
    /// Still moving, or the body was unavailable.
    Pending,
    /// Settled, but no face matched. Ask again on a later tick.
    Unknown,
    /// A face was read for the first time this settle.
    Reported(u32),
    /// The face was already reported; carries the cached value.
    AlreadyReported(u32),
}

impl RollOutcome {
    /// Face value, with 0 for pending or unknown outcomes.
    pub fn value(&self) -> u32 {
        match self {
            RollOutcome::Pending | RollOutcome::Unknown => UNKNOWN_FACE,
            RollOutcome::Reported(v) | RollOutcome::AlreadyReported(v) => *v,
        }
    }

    /// Whether this call is the one that should be counted.
    pub fn is_new_report(&self) -> bool {
        matches!(self, RollOutcome::Reported(_))
    }
}

/// Roll tracking state for one thrown object.
///
/// The physics body is owned elsewhere and passed in on every tick; `None`
/// means it has been destroyed and the tick is skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RollableObject {
    variant: RollableVariant,
    motion_state: MotionState,
    has_started_moving: bool,
    settle_countdown: Option<i32>,
    reported_value: Option<u32>,
}

impl RollableObject {
    pub fn new(variant: RollableVariant) -> Self {
        Self {
            variant,
            motion_state: MotionState::AtRest,
            has_started_moving: false,
            settle_countdown: None,
            reported_value: None,
        }
    }

    pub fn variant(&self) -> RollableVariant {
        self.variant
    }

    pub fn motion_state(&self) -> MotionState {
        self.motion_state
    }

    pub fn has_started_moving(&self) -> bool {
        self.has_started_moving
    }

    pub fn is_settled(&self) -> bool {
        self.motion_state == MotionState::Settled
    }

    pub fn has_reported_value(&self) -> bool {
        self.reported_value.is_some()
    }

    pub fn reported_value(&self) -> Option<u32> {
        self.reported_value
    }

    /// Remaining debounce ticks, once armed.
    pub fn settle_countdown(&self) -> Option<i32> {
        self.settle_countdown
    }

    /// Advance the lifecycle by one tick.
    pub fn update_motion<B: PhysicsBody>(&mut self, body: Option<&B>, settings: &RollSettings) {
        let Some(body) = body else {
            return;
        };
        let motion = &settings.motion;
        let speed = body.angular_speed();

        match self.motion_state {
            MotionState::AtRest => {
                if speed > motion.moving_threshold {
                    self.motion_state = MotionState::Moving;
                    self.has_started_moving = true;
                    log::debug!("{} started moving (w = {speed:.3})", self.variant.name());
                }
            }
            MotionState::Moving => {
                if !self.has_started_moving || speed >= motion.settled_threshold {
                    self.settle_countdown = None;
                    return;
                }

                if motion.settle_policy == SettlePolicy::AngleBand
                    && is_plausible_rest(
                        self.variant,
                        &body.orientation_euler(),
                        motion.angle_band_degrees,
                    )
                {
                    self.settle();
                    return;
                }

                let countdown = match self.settle_countdown {
                    None => motion.settle_debounce_ticks,
                    Some(remaining) => remaining - 1,
                };
                self.settle_countdown = Some(countdown);

                if countdown < 0 {
                    self.settle();
                }
            }
            MotionState::Settled => {}
        }
    }

    fn settle(&mut self) {
        self.motion_state = MotionState::Settled;
        self.settle_countdown = None;
        log::debug!("{} settled", self.variant.name());
    }

    /// Read the face value of a settled object.
    ///
    /// The first successful read latches the value; later reads return
    /// [`RollOutcome::AlreadyReported`] without resolving again.
    pub fn read_value<B: PhysicsBody>(
        &mut self,
        body: Option<&B>,
        settings: &RollSettings,
    ) -> RollOutcome {
        if !self.is_settled() {
            return RollOutcome::Pending;
        }
        if let Some(value) = self.reported_value {
            return RollOutcome::AlreadyReported(value);
        }
        let Some(body) = body else {
            return RollOutcome::Pending;
        };

        match resolve(self.variant, &body.orientation_euler(), &settings.resolver) {
            UNKNOWN_FACE => RollOutcome::Unknown,
            value => {
                self.reported_value = Some(value);
                log::debug!("{} reported {value}", self.variant.name());
                RollOutcome::Reported(value)
            }
        }
    }
}
