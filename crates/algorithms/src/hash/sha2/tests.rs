use super::*;

#[test]
fn test_sha256_empty() {
    // NIST test vector: empty string.
    let expected = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    let hash = Sha256::digest(&[]).unwrap();
    assert_eq!(hex::encode(&hash), expected);
}

#[test]
fn test_sha256_abc() {
    // NIST test vector: "abc".
    let expected = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
    let hash = Sha256::digest(b"abc").unwrap();
    assert_eq!(hex::encode(&hash), expected);
}

#[test]
fn test_sha256_two_block_message() {
    // NIST test vector spanning two compression blocks.
    let expected = "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1";
    let hash = Sha256::digest(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq").unwrap();
    assert_eq!(hex::encode(&hash), expected);
}

#[test]
fn test_sha256_padding_boundary() {
    // 56 bytes forces the length field into an extra block.
    let expected = "b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a";
    let hash = Sha256::digest(&[0x61u8; 56]).unwrap();
    assert_eq!(hex::encode(&hash), expected);
}

#[test]
fn test_incremental_matches_one_shot() {
    let message = b"the quick brown fox jumps over the lazy dog, repeatedly";
    let one_shot = Sha256::digest(message).unwrap();

    let mut hasher = Sha256::new();
    for chunk in message.chunks(7) {
        hasher.update(chunk).unwrap();
    }
    assert_eq!(hasher.finalize().unwrap(), one_shot);
}

#[test]
fn test_trait_metadata() {
    assert_eq!(Sha256::output_size(), 32);
    assert_eq!(Sha256::block_size(), 64);
    assert_eq!(Sha256::name(), "SHA-256");
    assert_eq!(Sha256::digest(&[]).unwrap().len(), 32);
}
