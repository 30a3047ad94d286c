use super::params::{PARAM_DIGEST_SIZE, PARAM_SALT_SIZE, PARAM_SEED_SIZE};

/// Security-parameter sized value stored at every node of the seed tree
pub type Seed = [u8; PARAM_SEED_SIZE];

/// Per-signature public salt (2λ bytes)
pub type Salt = [u8; PARAM_SALT_SIZE];

/// Digest of the domain separated hash (2λ bytes)
pub type Hash = [u8; PARAM_DIGEST_SIZE];
