//! Hero domain: system modules for the locomotion pipeline.

pub(crate) mod contacts;
pub(crate) mod input;
pub(crate) mod locomotion;

pub(crate) use contacts::detect_contacts;
pub(crate) use input::{clear_pressed, sample_input};
pub(crate) use locomotion::{
    resolve_dash, resolve_horizontal, resolve_jump, resolve_vertical, tick_timers,
    update_follow_anchor, update_orient_visual, write_velocity,
};
