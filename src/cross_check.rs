//! Known-answer tests against the NIST SP 800-38G FF1 samples.
//!
//! Samples 1-3 use AES-128, 4-6 AES-192 and 7-9 AES-256. Every sample is run
//! in both directions.

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::alphabet::Alphabet;
    use crate::*;

    const KEY_128: &str = "2b7e151628aed2a6abf7158809cf4f3c";
    const KEY_192: &str = "2b7e151628aed2a6abf7158809cf4f3cef4359d8d580aa4f";
    const KEY_256: &str = "2b7e151628aed2a6abf7158809cf4f3cef4359d8d580aa4f7f036d6f04fc6a94";

    const TWEAK_DECIMAL: &str = "39383736353433323130";
    const TWEAK_BASE36: &str = "3737373770717273373737";

    const BASE36: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

    fn check<Prf: BlockPrf>(
        cipher: &Ff1<Prf>,
        tweak_hex: &str,
        alphabet: &Alphabet,
        plaintext: &str,
        expected: &str,
    ) {
        let tweak = hex::decode(tweak_hex).unwrap();
        let digits = alphabet.encode(plaintext).unwrap();

        let encrypted = cipher.encrypt(&tweak, alphabet.radix(), &digits).unwrap();
        let ciphertext: String = alphabet.decode(&encrypted).unwrap();
        assert_eq!(ciphertext, expected, "encrypt {plaintext} tweak {tweak_hex:?}");

        let decrypted: Vec<u16> = cipher.decrypt(&tweak, alphabet.radix(), &encrypted).unwrap();
        assert_eq!(alphabet.decode(&decrypted).unwrap(), plaintext);
    }

    fn key(hex_key: &str) -> Vec<u8> {
        hex::decode(hex_key).unwrap()
    }

    #[test]
    fn nist_sample_1_aes128_radix10() {
        let cipher = Ff1_128::new(&key(KEY_128)).unwrap();
        check(&cipher, "", &Alphabet::numeric(), "0123456789", "2433477484");
    }

    #[test]
    fn nist_sample_2_aes128_radix10_tweak() {
        let cipher = Ff1_128::new(&key(KEY_128)).unwrap();
        check(&cipher, TWEAK_DECIMAL, &Alphabet::numeric(), "0123456789", "6124200773");
    }

    #[test]
    fn nist_sample_3_aes128_radix36() {
        let cipher = Ff1_128::new(&key(KEY_128)).unwrap();
        let alphabet = Alphabet::new(BASE36.chars()).unwrap();
        check(&cipher, TWEAK_BASE36, &alphabet, "0123456789abcdefghi", "a9tv40mll9kdu509eum");
    }

    #[test]
    fn nist_sample_4_aes192_radix10() {
        let cipher = Ff1_192::new(&key(KEY_192)).unwrap();
        check(&cipher, "", &Alphabet::numeric(), "0123456789", "2830668132");
    }

    #[test]
    fn nist_sample_5_aes192_radix10_tweak() {
        let cipher = Ff1_192::new(&key(KEY_192)).unwrap();
        check(&cipher, TWEAK_DECIMAL, &Alphabet::numeric(), "0123456789", "2496655549");
    }

    #[test]
    fn nist_sample_6_aes192_radix36() {
        let cipher = Ff1_192::new(&key(KEY_192)).unwrap();
        let alphabet = Alphabet::new(BASE36.chars()).unwrap();
        check(&cipher, TWEAK_BASE36, &alphabet, "0123456789abcdefghi", "xbj3kv35jrawxv32ysr");
    }

    #[test]
    fn nist_sample_7_aes256_radix10() {
        let cipher = Ff1_256::new(&key(KEY_256)).unwrap();
        check(&cipher, "", &Alphabet::numeric(), "0123456789", "6657667009");
    }

    #[test]
    fn nist_sample_8_aes256_radix10_tweak() {
        let cipher = Ff1_256::new(&key(KEY_256)).unwrap();
        check(&cipher, TWEAK_DECIMAL, &Alphabet::numeric(), "0123456789", "1001623463");
    }

    #[test]
    fn nist_sample_9_aes256_radix36() {
        let cipher = Ff1_256::new(&key(KEY_256)).unwrap();
        let alphabet = Alphabet::new(BASE36.chars()).unwrap();
        check(&cipher, TWEAK_BASE36, &alphabet, "0123456789abcdefghi", "xs8a0azh2avyalyzuwd");
    }

    #[test]
    fn context_matches_engine_for_decimal_input() {
        let raw_key = key(KEY_256);
        let ctx = EncryptionContext::configure(&raw_key, "").unwrap();
        assert_eq!(ctx.encrypt("0123456789").unwrap(), "6657667009");
        assert_eq!(ctx.decrypt("6657667009").unwrap(), "0123456789");
    }
}
