//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in tandem-core, written against `embedded-hal` 1.0 digital pins:
//!
//! - Relay motor driver for the actuator pair
//! - GPIO switch sampler for the manual controls and limit switches

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod motor;
pub mod switch;

#[cfg(test)]
pub(crate) mod mock;
