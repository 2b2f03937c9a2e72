//! Glint engine crate.
//!
//! A minimal real-time renderer: one window, one wgpu device, one textured
//! quad per frame, driven by a first-person camera. This crate owns the
//! platform + GPU runtime pieces; the viewer binary supplies configuration
//! and the per-frame application logic.

pub mod camera;
pub mod core;
pub mod device;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod render;
pub mod shader;
pub mod texture;
pub mod time;
pub mod window;
