use rand::Rng;

/// Characters used for id suffixes
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random id suffix (36^12 ≈ 4.7e18 values)
pub const ID_SUFFIX_LEN: usize = 12;

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate an opaque entity id: `<prefix>_<12 random [0-9a-z]>`.
///
/// Used by the arrangement store for every entity it creates; callers never
/// pick ids themselves.
pub fn generate_id(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("{prefix}_{suffix}")
}
