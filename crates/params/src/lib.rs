//! Constant values for mchybrid
//!
//! Parameter tables for Classic McEliece and sizes of the symmetric and hash
//! primitives the pipeline is built on.

#![no_std]
#![forbid(unsafe_code)]

pub mod pqc;
pub mod utils;
