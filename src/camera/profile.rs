//! Camera domain: framing profiles and transition descriptors.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The position a camera tracks for a followed entity. It may deliberately
/// differ from the entity's transform (the hero holds its last grounded y
/// while airborne).
#[derive(Component, Debug, Default)]
pub struct FollowAnchor {
    pub position: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum CameraProfileKind {
    #[default]
    Static,
    FollowTarget,
}

/// Per-axis exponential smoothing toward the target.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Damping {
    pub enabled: bool,
    pub factor: f32,
}

impl Default for Damping {
    fn default() -> Self {
        Self {
            enabled: false,
            factor: 5.0,
        }
    }
}

/// An authored framing profile, read-only at runtime.
#[derive(Debug, Clone)]
pub struct CameraProfile {
    pub id: String,
    pub kind: CameraProfileKind,
    pub position: Vec2,
    /// Orthographic half-height.
    pub size: f32,
    pub follow_target: Option<Entity>,
    pub horizontal_damping: Damping,
    pub vertical_damping: Damping,
    /// Advisory framing bounds; never enforced by the rig.
    pub bounds: Option<Rect>,
}

impl CameraProfile {
    pub fn fixed(id: impl Into<String>, position: Vec2, size: f32) -> Self {
        Self {
            id: id.into(),
            kind: CameraProfileKind::Static,
            position,
            size,
            follow_target: None,
            horizontal_damping: Damping::default(),
            vertical_damping: Damping::default(),
            bounds: None,
        }
    }
}

/// Timed linear blend played when switching profiles.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct CameraTransition {
    pub duration: f32,
}

/// Authored profiles by id, for scripted profile switches.
#[derive(Resource, Debug, Default)]
pub struct CameraProfileRegistry {
    profiles: HashMap<String, CameraProfile>,
}

impl CameraProfileRegistry {
    pub fn insert(&mut self, profile: CameraProfile) {
        self.profiles.insert(profile.id.clone(), profile);
    }

    pub fn get(&self, id: &str) -> Option<&CameraProfile> {
        self.profiles.get(id)
    }
}
