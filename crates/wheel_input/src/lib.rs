//! Fortune Wheel Input Handling
//!
//! This crate maps winit keyboard events onto the wheel's single action.

mod spin_controller;

pub use spin_controller::SpinController;
