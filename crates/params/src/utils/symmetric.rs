//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// CBC initialization vector size in bytes (one AES block)
pub const CBC_IV_SIZE: usize = AES_BLOCK_SIZE;
