//! Independent condition classifiers.
//!
//! Each submodule reduces raw measurements to one discrete status. They share
//! inputs but never each other's outputs, so they can run in any order.

pub mod bearing;
pub mod hydraulic;
pub mod spectral;
pub mod structural;
pub mod thermal;
pub mod vibration;
