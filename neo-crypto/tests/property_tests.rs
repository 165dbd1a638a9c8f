//! Property-based tests for neo-crypto

use neo_crypto::{Base58, Crypto, KeyPair};
use proptest::prelude::*;

proptest! {
    #[test]
    fn hash160_is_ripemd_of_sha256(data in any::<Vec<u8>>()) {
        prop_assert_eq!(Crypto::hash160(&data), Crypto::ripemd160(&Crypto::sha256(&data)));
    }

    #[test]
    fn base58check_rejects_truncation(data in prop::collection::vec(any::<u8>(), 1..64)) {
        let encoded = Base58::encode_check(&data);
        prop_assert_eq!(Base58::decode_check(&encoded).unwrap(), data);
        prop_assert!(Base58::decode_check(&encoded[..encoded.len() - 1]).is_err());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn signatures_verify_only_for_the_signed_message(
        message in prop::collection::vec(any::<u8>(), 0..256),
        flip in any::<usize>(),
    ) {
        let key_pair = KeyPair::generate(&mut rand::thread_rng());
        let signature = key_pair.sign(&message).unwrap();
        prop_assert!(key_pair.verify(&message, &signature).is_ok());

        let mut tampered = message.clone();
        if tampered.is_empty() {
            tampered.push(0);
        } else {
            let index = flip % tampered.len();
            tampered[index] ^= 0x01;
        }
        prop_assert!(key_pair.verify(&tampered, &signature).is_err());
    }
}
