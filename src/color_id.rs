use sha2::{Digest, Sha256};
use uuid::Uuid;

pub const COLOR_ID_PREFIX: &str = "PAN";
const SHORT_HASH_LEN: usize = 9;
const FALLBACK_LEN: usize = 12;

/// Generates a `PAN-xxxxxxxxx` id that `exists` does not report as taken.
pub fn generate_color_id<F>(mut exists: F) -> String
where
    F: FnMut(&str) -> bool,
{
    for _ in 0..64 {
        let seed = Uuid::now_v7().to_string();
        let mut hasher = Sha256::new();
        hasher.update(seed.as_bytes());
        let digest = format!("{:x}", hasher.finalize());
        let candidate = format!("{}-{}", COLOR_ID_PREFIX, &digest[..SHORT_HASH_LEN]);
        if !exists(&candidate) {
            return candidate;
        }
    }

    format!(
        "{}-{}",
        COLOR_ID_PREFIX,
        &Uuid::now_v7().simple().to_string()[..FALLBACK_LEN]
    )
}
