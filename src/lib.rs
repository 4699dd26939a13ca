//! Animated parallax starfield background: twinkling stars, pulsing nebula
//! washes and the occasional shooting star, drawn once per display refresh.
//! Also carries the contact webhook used alongside it.

pub mod canvas;
pub mod config;
pub mod constants;
pub mod contact;
pub mod engine;
pub mod error;
pub mod ffmpeg;
pub mod host;
pub mod input;
pub mod starfield;
pub mod state;

pub use self::starfield::StarfieldEngine;
