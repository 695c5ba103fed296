//! Base-58 text form for delivered payloads.
//!
//! Every payload that leaves the bridge (public key, signed transaction,
//! message signature) crosses the channel as base-58 text.

/// Encode raw bytes to their base-58 text form.
pub fn to_base58(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_vector() {
        assert_eq!(to_base58(&[0x01, 0x02, 0x03]), "Ldp");
    }

    #[test]
    fn empty_input_is_empty_string() {
        assert_eq!(to_base58(&[]), "");
    }

    #[test]
    fn leading_zeros_map_to_ones() {
        assert_eq!(to_base58(&[0x00, 0x00, 0x01]), "112");
    }

    #[test]
    fn deterministic() {
        let key = [0xde, 0xad, 0xbe, 0xef];
        assert_eq!(to_base58(&key), to_base58(&key));
    }
}
