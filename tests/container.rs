use proptest::prelude::*;
use sealbyte::config::{MIN_CONTAINER_SIZE, SALT_SIZE, TAG_SIZE, VERSION_SIZE};
use sealbyte::{Error, Header, decrypt, derive_key, encrypt, is_container};

#[test]
fn hello_world_container() {
    let container = encrypt(b"hello world", b"Tr0ub4dor&3").unwrap();

    assert_eq!(container.len(), 32 + 11 + 16);
    assert_eq!(&container[..4], &[0x01, 0x00, 0x00, 0x00]);
    assert_eq!(decrypt(&container, b"Tr0ub4dor&3").unwrap(), b"hello world");
    assert_eq!(decrypt(&container, b"wrong").unwrap_err(), Error::AuthenticationFailed);
}

#[test]
fn header_matches_key_derivation() {
    let password = b"correct horse battery staple";
    let container = encrypt(b"payload", password).unwrap();
    let (header, sealed) = Header::parse(&container).unwrap();

    assert_eq!(sealed.len(), b"payload".len() + TAG_SIZE);

    // Re-deriving with the stored salt is deterministic.
    let k1 = derive_key(password, header.salt()).unwrap();
    let k2 = derive_key(password, header.salt()).unwrap();
    assert_eq!(k1.expose(), k2.expose());
}

#[test]
fn every_short_input_is_malformed() {
    let junk = [0x01u8; MIN_CONTAINER_SIZE];
    for len in 0..MIN_CONTAINER_SIZE {
        assert_eq!(decrypt(&junk[..len], b"pw").unwrap_err(), Error::MalformedContainer { len });
        assert!(!is_container(&junk[..len]));
    }
}

#[test]
fn foreign_version_is_rejected_before_derivation() {
    let mut container = encrypt(b"layout v1", b"pw").unwrap();
    container[..4].copy_from_slice(&7u32.to_le_bytes());

    assert_eq!(decrypt(&container, b"pw").unwrap_err(), Error::UnsupportedVersion(7));
    assert!(!is_container(&container));
}

#[test]
fn concurrent_encryptions_are_independent() {
    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            std::thread::spawn(move || {
                let plaintext = vec![i; 64];
                let password = format!("password-{i}");
                let container = encrypt(&plaintext, password.as_bytes()).unwrap();
                assert_eq!(decrypt(&container, password.as_bytes()).unwrap(), plaintext);
                container
            })
        })
        .collect();

    let containers: Vec<Vec<u8>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let salts: std::collections::HashSet<&[u8]> = containers.iter().map(|c| &c[4..4 + SALT_SIZE]).collect();
    assert_eq!(salts.len(), containers.len());
}

proptest! {
    // every case runs several 310k-round derivations
    #![proptest_config(ProptestConfig { cases: 6, .. ProptestConfig::default() })]

    #[test]
    fn roundtrip(plaintext in proptest::collection::vec(any::<u8>(), 0..512), password in ".{0,24}") {
        let container = encrypt(&plaintext, password.as_bytes()).unwrap();
        prop_assert_eq!(container.len(), MIN_CONTAINER_SIZE + plaintext.len());
        prop_assert_eq!(decrypt(&container, password.as_bytes()).unwrap(), plaintext);
    }

    #[test]
    fn wrong_password_rejected(plaintext in proptest::collection::vec(any::<u8>(), 0..128), password in "[a-z]{1,12}", suffix in "[A-Z0-9]{1,4}") {
        let container = encrypt(&plaintext, password.as_bytes()).unwrap();
        let wrong = format!("{password}{suffix}");
        prop_assert_eq!(decrypt(&container, wrong.as_bytes()).unwrap_err(), Error::AuthenticationFailed);
    }

    #[test]
    fn single_bit_flip_detected(plaintext in proptest::collection::vec(any::<u8>(), 1..128), offset in any::<prop::sample::Index>(), bit in 0u8..8) {
        let container = encrypt(&plaintext, b"tamper-test").unwrap();

        // anywhere past the version field: salt, nonce, ciphertext or tag
        let pos = VERSION_SIZE + offset.index(container.len() - VERSION_SIZE);
        let mut tampered = container.clone();
        tampered[pos] ^= 1 << bit;

        prop_assert_eq!(decrypt(&tampered, b"tamper-test").unwrap_err(), Error::AuthenticationFailed);
    }
}
