use std::hash::{DefaultHasher, Hash, Hasher};

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Turns a `--seed` argument into a board seed. Numbers are used as-is, any
/// other text is hashed.
pub(crate) fn seed_from_arg(arg: &str) -> u64 {
    match arg.trim().parse() {
        Ok(seed) => seed,
        Err(_) => {
            let mut hasher = DefaultHasher::new();
            arg.hash(&mut hasher);
            hasher.finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_seed_is_used_directly() {
        assert_eq!(seed_from_arg("42"), 42);
        assert_eq!(seed_from_arg(" 7 "), 7);
    }

    #[test]
    fn text_seed_is_stable() {
        assert_eq!(seed_from_arg("party"), seed_from_arg("party"));
        assert_ne!(seed_from_arg("party"), seed_from_arg("office"));
    }
}
