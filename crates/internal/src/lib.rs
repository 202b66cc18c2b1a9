//! Internal utilities shared by the mchybrid crates. Not a stable API.

#![forbid(unsafe_code)]

pub mod constant_time;
