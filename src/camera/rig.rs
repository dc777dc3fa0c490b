//! Camera domain: the profile/transition/follow/damping engine.

use bevy::prelude::*;

use crate::camera::profile::{CameraProfile, CameraProfileKind, CameraTransition};

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy)]
struct TransitionState {
    elapsed: f32,
    duration: f32,
    start_position: Vec2,
    start_size: f32,
}

/// Explicitly constructed camera engine, handed around as a resource.
///
/// Holds the active profile, the per-axis damped position and any in-flight
/// profile transition. `advance` is the per-render-tick algorithm: resolve
/// the raw target, damp it, then blend from the transition snapshot toward
/// it while a transition plays.
#[derive(Resource, Debug)]
pub struct CameraRig {
    default_profile: CameraProfile,
    active: CameraProfile,
    damped_position: Vec2,
    position: Vec2,
    size: f32,
    last_follow_destination: Vec2,
    transition: Option<TransitionState>,
    reseed_damping: bool,
}

impl CameraRig {
    pub fn new(default_profile: CameraProfile) -> Self {
        let position = default_profile.position;
        let size = default_profile.size;
        Self {
            active: default_profile.clone(),
            default_profile,
            damped_position: position,
            position,
            size,
            last_follow_destination: position,
            transition: None,
            reseed_damping: true,
        }
    }

    pub fn active_profile(&self) -> &CameraProfile {
        &self.active
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.transition, Some(t) if t.elapsed < t.duration)
    }

    /// Switches to `profile`, optionally blending from the current framing
    /// over the transition's duration.
    pub fn enter_profile(&mut self, profile: CameraProfile, transition: Option<CameraTransition>) {
        info!("Camera profile enter: {}", profile.id);
        self.active = profile;
        if let Some(transition) = transition {
            self.play_transition(transition);
        }
        self.reseed_damping = true;
    }

    /// Reverts to the default profile, but only if `profile_id` is the
    /// active profile. Exiting a non-active profile is a no-op.
    pub fn exit_profile(&mut self, profile_id: &str, transition: Option<CameraTransition>) {
        if self.active.id != profile_id {
            return;
        }
        info!("Camera profile exit: {}", profile_id);
        self.active = self.default_profile.clone();
        if let Some(transition) = transition {
            self.play_transition(transition);
        }
        self.reseed_damping = true;
    }

    fn play_transition(&mut self, transition: CameraTransition) {
        self.transition = Some(TransitionState {
            elapsed: 0.0,
            duration: transition.duration,
            start_position: self.position,
            start_size: self.size,
        });
    }

    /// Advances the engine by `dt` and returns the framing to apply.
    /// `follow_anchor` is the resolved anchor of the active profile's
    /// follow target, if any; a missing target falls back to the profile's
    /// static position.
    pub fn advance(&mut self, follow_anchor: Option<Vec2>, dt: f32) -> (Vec2, f32) {
        let raw_target = self.resolve_target(follow_anchor);
        if self.reseed_damping {
            self.damped_position = raw_target;
            self.reseed_damping = false;
        }
        let damped = self.apply_damping(raw_target, dt);

        let (position, size) = match self.transition {
            Some(state) if state.elapsed < state.duration => {
                let state = TransitionState {
                    elapsed: state.elapsed + dt,
                    ..state
                };
                // A zero-length transition completes instantly.
                let percent = if state.duration <= 0.0 {
                    1.0
                } else {
                    (state.elapsed / state.duration).clamp(0.0, 1.0)
                };
                self.transition = Some(state);
                (
                    state.start_position.lerp(damped, percent),
                    lerp(state.start_size, self.active.size, percent),
                )
            }
            _ => {
                self.transition = None;
                (damped, self.active.size)
            }
        };

        self.position = position;
        self.size = size;
        (position, size)
    }

    fn resolve_target(&mut self, follow_anchor: Option<Vec2>) -> Vec2 {
        if self.active.kind == CameraProfileKind::FollowTarget {
            if let Some(anchor) = follow_anchor {
                self.last_follow_destination = anchor;
                return self.last_follow_destination;
            }
        }
        self.active.position
    }

    fn apply_damping(&mut self, target: Vec2, dt: f32) -> Vec2 {
        let horizontal = self.active.horizontal_damping;
        if horizontal.enabled {
            self.damped_position.x =
                lerp(self.damped_position.x, target.x, horizontal.factor * dt);
        } else {
            self.damped_position.x = target.x;
        }

        let vertical = self.active.vertical_damping;
        if vertical.enabled {
            self.damped_position.y = lerp(self.damped_position.y, target.y, vertical.factor * dt);
        } else {
            self.damped_position.y = target.y;
        }

        self.damped_position
    }
}
