pub fn u8s_from_str(input: &str) -> [u8; 32] {
    blake3::hash(input.as_bytes()).into()
}

/// Seed for the `index`-th member of a family of seeds sharing `base`.
pub fn derive_seed(base: &str, index: u64) -> [u8; 32] {
    u8s_from_str(&format!("{}:{}", base, index))
}
