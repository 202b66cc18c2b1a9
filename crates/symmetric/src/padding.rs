//! PKCS#7 padding
//!
//! `pad` always appends between 1 and `block_size` bytes, each equal to the
//! number appended, so a block-aligned input gains a full block. `unpad`
//! inspects the whole final block regardless of the claimed padding length,
//! so its running time does not depend on where the padding check fails.

use mchybrid_api::{Error, Result};
use mchybrid_internal::constant_time::{ct_eq_choice, ct_lt};
use subtle::ConstantTimeEq;

/// Append PKCS#7 padding for the given block size (1..=255)
pub fn pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    if block_size == 0 || block_size > u8::MAX as usize {
        return Err(Error::InvalidParameter {
            context: "PKCS#7 pad",
            message: format!("block size {} out of range", block_size),
        });
    }

    let pad_len = block_size - data.len() % block_size;
    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    out.resize(data.len() + pad_len, pad_len as u8);
    Ok(out)
}

/// Strip PKCS#7 padding, returning the unpadded prefix of `data`
///
/// Fails with [`Error::Padding`] when the input is not block aligned or the
/// padding bytes are malformed.
pub fn unpad(data: &[u8], block_size: usize) -> Result<&[u8]> {
    if block_size == 0 || block_size > u8::MAX as usize {
        return Err(Error::InvalidParameter {
            context: "PKCS#7 unpad",
            message: format!("block size {} out of range", block_size),
        });
    }
    if data.is_empty() || data.len() % block_size != 0 {
        return Err(Error::Padding {
            context: "PKCS#7 input is not block aligned",
        });
    }

    let last_block = &data[data.len() - block_size..];
    let pad_len = last_block[block_size - 1];

    // 1 <= pad_len <= block_size
    let mut valid = !pad_len.ct_eq(&0) & !ct_lt(block_size as u8, pad_len);

    for (i, &byte) in last_block.iter().rev().enumerate() {
        let in_padding = ct_lt(i as u8, pad_len);
        let matches = ct_eq_choice([byte], [pad_len]);
        // Bytes outside the padding are accepted unconditionally
        valid &= matches | !in_padding;
    }

    if !bool::from(valid) {
        return Err(Error::Padding {
            context: "PKCS#7 padding is malformed",
        });
    }

    // Only reached on valid padding, so pad_len is now public
    Ok(&data[..data.len() - pad_len as usize])
}
