//! Location adapters. Implement LocationPort.

pub mod configured;

pub use configured::ConfiguredLocation;
