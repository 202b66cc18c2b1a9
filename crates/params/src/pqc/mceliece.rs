//! Constants for Classic McEliece key encapsulation mechanism
//!
//! Sizes follow the round-4 submission. The `f` variants share sizes with
//! their base sets and differ only in how key generation searches for a
//! systematic form.

/// Prefix shared by every Classic McEliece mechanism name
pub const MCELIECE_FAMILY: &str = "Classic-McEliece";

/// Parameter set used when the caller does not ask for one
pub const DEFAULT_PARAMETER_SET: &str = "Classic-McEliece-348864";

/// Structure containing one Classic McEliece parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct McElieceParams {
    /// Mechanism name as reported by the capability
    pub name: &'static str,

    /// Code length
    pub n: usize,

    /// Field extension degree
    pub m: usize,

    /// Error correction capability
    pub t: usize,

    /// NIST security category
    pub security_level: u8,

    /// Uses the semi-systematic ("fast") key generation
    pub fast_keygen: bool,

    /// Public key size in bytes
    pub public_key_size: usize,

    /// Secret key size in bytes
    pub secret_key_size: usize,

    /// Ciphertext size in bytes
    pub ciphertext_size: usize,

    /// Shared secret size in bytes
    pub shared_secret_size: usize,
}

impl McElieceParams {
    /// Code dimension `k = n - m*t`
    pub const fn k(&self) -> usize {
        self.n - self.m * self.t
    }
}

macro_rules! mceliece_params {
    ($name:expr, $n:expr, $m:expr, $t:expr, $level:expr, $fast:expr, $pk:expr, $sk:expr, $ct:expr) => {
        McElieceParams {
            name: $name,
            n: $n,
            m: $m,
            t: $t,
            security_level: $level,
            fast_keygen: $fast,
            public_key_size: $pk,
            secret_key_size: $sk,
            ciphertext_size: $ct,
            shared_secret_size: 32,
        }
    };
}

/// McEliece-348864 parameters (NIST security level 1)
pub const MCELIECE_348864: McElieceParams =
    mceliece_params!("Classic-McEliece-348864", 3488, 12, 64, 1, false, 261120, 6492, 96);

/// McEliece-348864f parameters (NIST security level 1)
pub const MCELIECE_348864F: McElieceParams =
    mceliece_params!("Classic-McEliece-348864f", 3488, 12, 64, 1, true, 261120, 6492, 96);

/// McEliece-460896 parameters (NIST security level 3)
pub const MCELIECE_460896: McElieceParams =
    mceliece_params!("Classic-McEliece-460896", 4608, 13, 96, 3, false, 524160, 13608, 156);

/// McEliece-460896f parameters (NIST security level 3)
pub const MCELIECE_460896F: McElieceParams =
    mceliece_params!("Classic-McEliece-460896f", 4608, 13, 96, 3, true, 524160, 13608, 156);

/// McEliece-6688128 parameters (NIST security level 5)
pub const MCELIECE_6688128: McElieceParams =
    mceliece_params!("Classic-McEliece-6688128", 6688, 13, 128, 5, false, 1044992, 13932, 208);

/// McEliece-6688128f parameters (NIST security level 5)
pub const MCELIECE_6688128F: McElieceParams =
    mceliece_params!("Classic-McEliece-6688128f", 6688, 13, 128, 5, true, 1044992, 13932, 208);

/// McEliece-6960119 parameters (NIST security level 5)
pub const MCELIECE_6960119: McElieceParams =
    mceliece_params!("Classic-McEliece-6960119", 6960, 13, 119, 5, false, 1047319, 13948, 194);

/// McEliece-6960119f parameters (NIST security level 5)
pub const MCELIECE_6960119F: McElieceParams =
    mceliece_params!("Classic-McEliece-6960119f", 6960, 13, 119, 5, true, 1047319, 13948, 194);

/// McEliece-8192128 parameters (NIST security level 5)
pub const MCELIECE_8192128: McElieceParams =
    mceliece_params!("Classic-McEliece-8192128", 8192, 13, 128, 5, false, 1357824, 14120, 208);

/// McEliece-8192128f parameters (NIST security level 5)
pub const MCELIECE_8192128F: McElieceParams =
    mceliece_params!("Classic-McEliece-8192128f", 8192, 13, 128, 5, true, 1357824, 14120, 208);

/// Every parameter set, smallest first
pub const ALL_PARAMETER_SETS: [McElieceParams; 10] = [
    MCELIECE_348864,
    MCELIECE_348864F,
    MCELIECE_460896,
    MCELIECE_460896F,
    MCELIECE_6688128,
    MCELIECE_6688128F,
    MCELIECE_6960119,
    MCELIECE_6960119F,
    MCELIECE_8192128,
    MCELIECE_8192128F,
];

/// Look up a parameter set by its exact mechanism name
pub fn by_name(name: &str) -> Option<&'static McElieceParams> {
    ALL_PARAMETER_SETS.iter().find(|p| p.name == name)
}
