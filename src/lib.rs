//! Fortune Wheel - a spin-the-wheel toy
//!
//! Library half of the application: configuration, the host-facing game
//! contract and the systems the event loop drives.

pub mod config;
pub mod game;
pub mod systems;
