//! Ingest keys handed to broadcasters.

const STREAM_KEY_BYTES: usize = 16;

/// A fresh 128-bit key, hex encoded (32 characters)
pub fn generate_stream_key() -> String {
    let random_bytes: Vec<u8> = (0..STREAM_KEY_BYTES).map(|_| rand::random::<u8>()).collect();
    const_hex::encode(random_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_key_shape() {
        let key = generate_stream_key();
        assert_eq!(key.len(), 32);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_generated_keys_differ() {
        assert_ne!(generate_stream_key(), generate_stream_key());
    }
}
