//! Hero domain: components and physics layers for the locomotion core.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::hero::tuning::JumpLevel;

/// Physics layers for collision and probe filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// The hero character
    Hero,
}

#[derive(Component, Debug)]
pub struct Hero;

/// Facing carries the horizontal direction; speed stays a magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    /// Facing matching a directional intent, `None` when the axis is neutral.
    pub fn from_axis(axis: f32) -> Option<Self> {
        if axis > 0.0 {
            Some(Facing::Right)
        } else if axis < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }
}

/// Kinematic state of the hero. `speed` is always a non-negative magnitude,
/// `vertical` is signed (negative = falling).
#[derive(Component, Debug, Default)]
pub struct Motion {
    pub speed: f32,
    pub vertical: f32,
    pub facing: Facing,
}

/// Contact flags, refreshed once per fixed tick before motion resolution.
#[derive(Component, Debug, Default)]
pub struct Contacts {
    pub on_ground: bool,
    pub wall_left: bool,
    pub wall_right: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum JumpPhase {
    #[default]
    Grounded,
    /// Constant-velocity rise; `level` indexes the jump level in use.
    Impulsion { elapsed: f32, level: usize },
    Falling,
}

/// Jump state machine plus the input-smoothing timers layered on top.
///
/// `coyote_timer` is a countdown seeded when ground contact is lost;
/// `jump_buffer_elapsed` counts up and the buffer is armed while it is
/// below the configured window.
#[derive(Component, Debug)]
pub struct JumpMachine {
    pub phase: JumpPhase,
    pub charge_index: usize,
    pub coyote_timer: f32,
    pub jump_buffer_elapsed: f32,
}

impl Default for JumpMachine {
    fn default() -> Self {
        Self {
            phase: JumpPhase::Grounded,
            charge_index: 0,
            coyote_timer: 0.0,
            // Starts saturated so the buffer is not armed at spawn.
            jump_buffer_elapsed: f32::INFINITY,
        }
    }
}

impl JumpMachine {
    pub fn is_jumping(&self) -> bool {
        self.phase != JumpPhase::Grounded
    }

    pub fn is_impulsing(&self) -> bool {
        matches!(self.phase, JumpPhase::Impulsion { .. })
    }

    pub fn coyote_active(&self) -> bool {
        self.coyote_timer > 0.0
    }

    pub fn buffer_armed(&self, buffer_duration: f32) -> bool {
        self.jump_buffer_elapsed < buffer_duration
    }

    /// A jump may start while not impulsing, as long as the hero is
    /// grounded, inside the coyote window, or still holds a jump charge.
    /// Coyote only substitutes for ground contact, never for the charge
    /// gate: a charge must remain.
    pub fn can_start(&self, on_ground: bool, level_count: usize) -> bool {
        let charge_remains = self.charge_index < level_count;
        let ground_like = on_ground || (self.coyote_active() && charge_remains);
        !self.is_impulsing() && (ground_like || charge_remains)
    }

    /// Begins an impulsion on the current charge and consumes it.
    /// The charge index may saturate past the configured levels; lookups
    /// clamp to the last level. Any start cancels a pending buffer and
    /// consumes the coyote window.
    pub fn start(&mut self) {
        self.phase = JumpPhase::Impulsion {
            elapsed: 0.0,
            level: self.charge_index,
        };
        self.charge_index += 1;
        self.coyote_timer = 0.0;
        self.jump_buffer_elapsed = f32::INFINITY;
    }

    /// Handles a jump press: starts immediately when eligible, otherwise
    /// arms the jump buffer.
    pub fn press(&mut self, on_ground: bool, level_count: usize) -> bool {
        if self.can_start(on_ground, level_count) {
            self.start();
            true
        } else {
            self.jump_buffer_elapsed = 0.0;
            false
        }
    }

    /// Fires a buffered jump the tick the hero becomes ground-eligible
    /// within the buffer window. A buffered press substitutes for the
    /// press, not for ground contact, so only grounded/coyote eligibility
    /// applies here, and the coyote path still needs a remaining charge.
    pub fn try_buffered(
        &mut self,
        on_ground: bool,
        level_count: usize,
        buffer_duration: f32,
    ) -> bool {
        if self.buffer_armed(buffer_duration)
            && !self.is_impulsing()
            && (on_ground || (self.coyote_active() && self.charge_index < level_count))
        {
            self.start();
            true
        } else {
            false
        }
    }

    /// Advances the coyote countdown and the buffer window.
    pub fn tick_timers(&mut self, on_ground: bool, dt: f32) {
        if !on_ground && self.coyote_timer > 0.0 {
            self.coyote_timer -= dt;
        }
        self.jump_buffer_elapsed += dt;
    }

    /// Early cutoff for variable jump height. Only takes effect once the
    /// active level's minimum duration has elapsed.
    pub fn stop_impulsion(&mut self, levels: &[JumpLevel]) {
        if let JumpPhase::Impulsion { elapsed, level } = self.phase {
            let min_duration = JumpLevel::clamped(levels, level).map_or(0.0, |l| l.min_duration);
            if elapsed >= min_duration {
                self.phase = JumpPhase::Falling;
            }
        }
    }
}

/// Timed horizontal-speed override. While active, the dash is the sole
/// writer of the horizontal speed magnitude.
#[derive(Component, Debug, Default)]
pub struct DashState {
    pub active: bool,
    pub elapsed: f32,
    pub saved_speed: f32,
}

impl DashState {
    /// Saves the current speed and activates the dash. Requests while a
    /// dash is already running are ignored.
    pub fn start(&mut self, current_speed: f32) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.elapsed = 0.0;
        self.saved_speed = current_speed;
        true
    }

    /// Advances the dash. Returns the speed to restore when the dash ends
    /// this tick: the pre-dash value, floored at zero.
    pub fn tick(&mut self, dt: f32, duration: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        self.elapsed += dt;
        if self.elapsed >= duration {
            self.active = false;
            self.elapsed = 0.0;
            Some(self.saved_speed.max(0.0))
        } else {
            None
        }
    }
}
