//! # Tap-dance Types
//!
//! Fundamental type definitions shared by the tap-dance crates.
//!
//! ## Modules
//!
//! - [`keycode`] - HID keyboard usage codes
//! - [`modifier`] - Modifier byte of a HID keyboard report
//! - [`action`] - Key steps (press / release of one key) emitted by tap-dance actions
//! - [`dance`] - Interaction observations and dance outcomes
//!
//! ## Integration
//!
//! - **tapdance**: the engine classifies observations and applies key steps
//! - **tapdance-config**: configuration parsing produces these types

#![cfg_attr(not(test), no_std)]

pub mod action;
pub mod dance;
pub mod keycode;
pub mod modifier;
