//! Request signing: MD5 over `appid + q + salt + seckey`.

use rand::Rng;

/// Lowercase hex MD5 of the concatenated fields, no separators.
pub fn sign(query: &str, app_id: &str, salt: u32, secret_key: &str) -> String {
    let plain = format!("{app_id}{query}{salt}{secret_key}");
    format!("{:x}", md5::compute(plain.as_bytes()))
}

/// Fresh six-digit salt.
pub fn new_salt() -> u32 {
    rand::thread_rng().gen_range(100_000..=999_999)
}
