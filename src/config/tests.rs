//! Config domain: unit tests for authored data parsing and fallbacks.

use bevy::prelude::*;

use super::data::{CameraConfig, CameraProfileDef};
use super::loader::{ron_options, sanitize_tuning};
use crate::camera::CameraProfileKind;
use crate::hero::HeroTuning;

// -----------------------------------------------------------------------------
// Camera profile defs
// -----------------------------------------------------------------------------

#[test]
fn test_minimal_profile_def_parses_with_defaults() {
    let def: CameraProfileDef = ron::from_str(
        r#"(
            id: "zone",
            kind: Static,
            position: (12.0, -3.0),
            size: 480.0,
        )"#,
    )
    .unwrap();

    assert_eq!(def.id, "zone");
    assert_eq!(def.kind, CameraProfileKind::Static);
    assert!(!def.follow_hero);
    assert!(!def.horizontal_damping.enabled);
    assert!(def.bounds.is_none());

    let profile = def.build(None);
    assert_eq!(profile.position, Vec2::new(12.0, -3.0));
    assert!(profile.follow_target.is_none());
}

#[test]
fn test_follow_def_resolves_the_hero_entity() {
    let def: CameraProfileDef = ron::from_str(
        r#"(
            id: "follow",
            kind: FollowTarget,
            size: 360.0,
            follow_hero: true,
            horizontal_damping: (enabled: true, factor: 5.0),
        )"#,
    )
    .unwrap();

    let profile = def.build(Some(Entity::PLACEHOLDER));
    assert_eq!(profile.kind, CameraProfileKind::FollowTarget);
    assert_eq!(profile.follow_target, Some(Entity::PLACEHOLDER));
    assert!(profile.horizontal_damping.enabled);

    // Without a hero the profile still builds, just untargeted.
    let unresolved = def.build(None);
    assert!(unresolved.follow_target.is_none());
}

#[test]
fn test_bounds_build_into_a_rect() {
    // The bare bounds tuple relies on IMPLICIT_SOME, so this goes through
    // the loader's options like the asset files do.
    let def: CameraProfileDef = ron_options()
        .from_str(
            r#"(
            id: "zone",
            kind: Static,
            size: 480.0,
            bounds: (400.0, -100.0, 1400.0, 500.0),
        )"#,
        )
        .unwrap();

    let bounds = def.build(None).bounds.unwrap();
    assert_eq!(bounds.min, Vec2::new(400.0, -100.0));
    assert_eq!(bounds.max, Vec2::new(1400.0, 500.0));
}

// -----------------------------------------------------------------------------
// Defaults and sanitizing
// -----------------------------------------------------------------------------

#[test]
fn test_default_camera_config_is_self_consistent() {
    let config = CameraConfig::default();
    assert!(
        config
            .profiles
            .iter()
            .any(|p| p.id == config.default_profile)
    );
}

#[test]
fn test_sanitize_restores_missing_jump_levels() {
    let mut tuning = HeroTuning::default();
    tuning.jump_levels.clear();
    let tuning = sanitize_tuning(tuning);
    assert!(!tuning.jump_levels.is_empty());
}
