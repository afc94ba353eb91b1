//! Domain services

pub mod shift_inference;

pub use shift_inference::{infer_shift, ShiftInference};
