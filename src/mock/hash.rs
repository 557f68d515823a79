// Polynomial string hash used to seed mock attributes

/// Hash a key into a non-negative seed.
///
/// Walks the key's UTF-16 code units and folds them with `h * 31 + c` in
/// wrapping 32-bit signed arithmetic, then takes the absolute value. This is
/// the same number the browser-side `((h << 5) - h + c) | 0` / `Math.abs`
/// idiom produces, so seeds line up with the console's own mock data.
pub fn hash_code(key: &str) -> u32 {
    let hash = key
        .encode_utf16()
        .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(unit as i32));
    hash.unsigned_abs()
}
