//! PDF encryption algorithms.
//!
//! This module implements the cryptographic algorithms specified in the PDF specification
//! for key derivation and password validation.
//!
//! PDF Spec: Section 7.6.3 - Standard Security Handler

use md5::{Digest, Md5};
use sha2::{Digest as Sha2Digest, Sha256, Sha384, Sha512};

/// Padding string used in PDF encryption (32 bytes).
///
/// PDF Spec: Algorithm 2, step 1
const PADDING: &[u8; 32] = b"\x28\xBF\x4E\x5E\x4E\x75\x8A\x41\
                              \x64\x00\x4E\x56\xFF\xFA\x01\x08\
                              \x2E\x2E\x00\xB6\xD0\x68\x3E\x80\
                              \x2F\x0C\xA9\xFE\x64\x53\x69\x7A";

/// Compute the encryption key from a password (Algorithm 2).
///
/// PDF Spec: Section 7.6.3.3 - Algorithm 2: Computing an encryption key
///
/// # Arguments
///
/// * `password` - User or owner password (up to 32 bytes)
/// * `owner_key` - 32-byte owner password hash from encryption dictionary
/// * `permissions` - User access permissions (P field)
/// * `file_id` - First element of file identifier array
/// * `revision` - Encryption revision number (R field)
/// * `key_length` - Key length in bytes
/// * `encrypt_metadata` - Whether to encrypt metadata
///
/// # Returns
///
/// The derived encryption key
pub fn compute_encryption_key(
    password: &[u8],
    owner_key: &[u8],
    permissions: i32,
    file_id: &[u8],
    revision: u32,
    key_length: usize,
    encrypt_metadata: bool,
) -> Vec<u8> {
    let mut hasher = Md5::new();

    // Step a: Pad or truncate password to 32 bytes
    let mut padded_password = [0u8; 32];
    let pass_len = password.len().min(32);
    padded_password[..pass_len].copy_from_slice(&password[..pass_len]);
    if pass_len < 32 {
        padded_password[pass_len..].copy_from_slice(&PADDING[..(32 - pass_len)]);
    }

    // Step b: Pass the password to MD5
    hasher.update(padded_password);

    // Step c: Pass the owner password hash
    hasher.update(owner_key);

    // Step d: Pass permissions as 32-bit little-endian
    hasher.update(permissions.to_le_bytes());

    // Step e: Pass the file identifier
    hasher.update(file_id);

    // Step f: For R >= 4, if EncryptMetadata is false, pass 0xFFFFFFFF
    if revision >= 4 && !encrypt_metadata {
        hasher.update([0xFF, 0xFF, 0xFF, 0xFF]);
    }

    // Step g: Finish MD5 hash
    let mut hash = hasher.finalize().to_vec();

    // Step h: For R >= 3, do 50 additional MD5 iterations on first key_length bytes
    if revision >= 3 {
        for _ in 0..50 {
            let mut hasher = Md5::new();
            hasher.update(&hash[..key_length]);
            hash = hasher.finalize().to_vec();
        }
    }

    // Step i: Return first key_length bytes
    hash[..key_length].to_vec()
}

/// Compute the owner password hash stored as /O (Algorithm 3).
///
/// PDF Spec: Section 7.6.3.4 - Algorithm 3: Computing the encryption
/// dictionary's O (owner password) value.
///
/// # Arguments
///
/// * `owner_password` - Owner password (empty if none set; falls back to
///   the user password per the spec's own convention)
/// * `user_password` - User password
/// * `revision` - Encryption revision (R field)
/// * `key_length` - Key length in bytes
pub fn compute_owner_password_hash(
    owner_password: &[u8],
    user_password: &[u8],
    revision: u32,
    key_length: usize,
) -> Vec<u8> {
    // Step a: pad the owner password
    let padded_owner = pad_password(owner_password);

    // Step b: MD5 hash of the padded owner password
    let mut hasher = Md5::new();
    hasher.update(&padded_owner);
    let mut hash = hasher.finalize().to_vec();

    // Step c: for R >= 3, 50 additional MD5 rounds on the first key_length bytes
    if revision >= 3 {
        for _ in 0..50 {
            let mut hasher = Md5::new();
            hasher.update(&hash[..key_length]);
            hash = hasher.finalize().to_vec();
        }
    }

    let rc4_key = &hash[..key_length];

    // Step e/f: RC4-encrypt the padded user password with the derived key
    let mut output = super::rc4::rc4_crypt(rc4_key, &pad_password(user_password));

    // Step g: for R >= 3, 19 more encryptions with the key XORed by round number
    if revision >= 3 {
        for i in 1..=19u8 {
            let modified_key: Vec<u8> = rc4_key.iter().map(|b| b ^ i).collect();
            output = super::rc4::rc4_crypt(&modified_key, &output);
        }
    }

    output
}

/// Compute the user password hash stored as /U (Algorithm 4/5).
///
/// PDF Spec: Section 7.6.3.4 - Algorithm 4/5. This is the write-side
/// counterpart of [`authenticate_user_password`]'s internal comparison
/// value: given the already-derived file encryption key, it produces the
/// bytes that belong in the trailer's /U entry.
pub fn compute_user_password_hash(encryption_key: &[u8], file_id: &[u8], revision: u32) -> Vec<u8> {
    if revision >= 3 {
        compute_user_key_r3(encryption_key, file_id)
    } else {
        compute_user_key_r2(encryption_key)
    }
}

/// Pad or truncate a password to 32 bytes using the standard padding.
///
/// PDF Spec: Algorithm 2, step 1
#[allow(dead_code)]
pub fn pad_password(password: &[u8]) -> Vec<u8> {
    let mut padded = Vec::with_capacity(32);
    let pass_len = password.len().min(32);
    padded.extend_from_slice(&password[..pass_len]);
    if pass_len < 32 {
        padded.extend_from_slice(&PADDING[..(32 - pass_len)]);
    }
    padded
}

/// Authenticate the user password (Algorithm 4/5).
///
/// PDF Spec: Section 7.6.3.4 - Algorithm 4/5: User password authentication
///
/// Returns the encryption key if authentication succeeds.
pub fn authenticate_user_password(
    password: &[u8],
    user_key: &[u8],
    owner_key: &[u8],
    permissions: i32,
    file_id: &[u8],
    revision: u32,
    key_length: usize,
    encrypt_metadata: bool,
) -> Option<Vec<u8>> {
    // Compute encryption key from password
    let key = compute_encryption_key(
        password,
        owner_key,
        permissions,
        file_id,
        revision,
        key_length,
        encrypt_metadata,
    );

    // Compute expected user key
    let expected_user_key = if revision >= 3 {
        compute_user_key_r3(&key, file_id)
    } else {
        compute_user_key_r2(&key)
    };

    // Compare first 16 bytes (constant-time comparison)
    let matches = constant_time_compare(&user_key[..16], &expected_user_key[..16]);

    if matches { Some(key) } else { None }
}

/// Compute the user password hash for R=2 (Algorithm 4).
///
/// PDF Spec: Section 7.6.3.4 - Algorithm 4
fn compute_user_key_r2(key: &[u8]) -> Vec<u8> {
    // Encrypt padding string with key
    super::rc4::rc4_crypt(key, PADDING)
}

/// Compute the user password hash for R>=3 (Algorithm 5).
///
/// PDF Spec: Section 7.6.3.4 - Algorithm 5
fn compute_user_key_r3(key: &[u8], file_id: &[u8]) -> Vec<u8> {
    // Step a: Create MD5 hash of padding + file ID
    let mut hasher = Md5::new();
    hasher.update(PADDING);
    hasher.update(file_id);
    let mut hash = hasher.finalize().to_vec();

    // Step b: Encrypt the hash 20 times with modified keys
    for i in 0..20 {
        let mut modified_key = key.to_vec();
        for byte in &mut modified_key {
            *byte ^= i as u8;
        }
        hash = super::rc4::rc4_crypt(&modified_key, &hash);
    }

    // Step c: Append 16 arbitrary bytes (we use zeros)
    hash.extend_from_slice(&[0u8; 16]);
    hash
}

/// Authenticate the owner password (Algorithm 7).
///
/// PDF Spec: Section 7.6.3.4 - Algorithm 7: Owner password authentication.
/// Recovers the padded user password by reversing Algorithm 3's RC4 chain
/// against the stored /O entry, then re-runs user-password authentication
/// with the recovered password to obtain the file encryption key.
///
/// Returns the encryption key if authentication succeeds.
pub fn authenticate_owner_password(
    password: &[u8],
    owner_key: &[u8],
    user_key: &[u8],
    permissions: i32,
    file_id: &[u8],
    revision: u32,
    key_length: usize,
    encrypt_metadata: bool,
) -> Option<Vec<u8>> {
    // Step a: pad the owner password, MD5 hash, 50 extra rounds for R>=3
    // (same derivation as compute_owner_password_hash, stopping before the
    // RC4 pass since we need the key to decrypt rather than encrypt).
    let padded_owner = pad_password(password);
    let mut hasher = Md5::new();
    hasher.update(&padded_owner);
    let mut hash = hasher.finalize().to_vec();
    if revision >= 3 {
        for _ in 0..50 {
            let mut hasher = Md5::new();
            hasher.update(&hash[..key_length]);
            hash = hasher.finalize().to_vec();
        }
    }
    let rc4_key = &hash[..key_length];

    // Step b: reverse Algorithm 3's RC4 chain against /O to recover the
    // padded user password. R>=3 applied 19 forward passes with the key
    // XORed by round number 1..=19, then one final pass with the plain
    // key; undoing that means decrypting in reverse round order.
    let mut recovered = owner_key.to_vec();
    if revision >= 3 {
        for i in (1..=19u8).rev() {
            let modified_key: Vec<u8> = rc4_key.iter().map(|b| b ^ i).collect();
            recovered = super::rc4::rc4_crypt(&modified_key, &recovered);
        }
    }
    recovered = super::rc4::rc4_crypt(rc4_key, &recovered);

    // Step c: the recovered bytes are the padded user password; try it
    // through the ordinary user-password authentication path.
    authenticate_user_password(
        &recovered,
        user_key,
        owner_key,
        permissions,
        file_id,
        revision,
        key_length,
        encrypt_metadata,
    )
}

/// Hash function for R=5 (deprecated but still seen in the wild).
///
/// A single SHA-256 round over password || salt || udata. `udata` is empty
/// for user-password hashing, or the 48-byte /U string for owner-password
/// hashing.
fn hash_r5(password: &[u8], salt: &[u8], udata: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(password);
    hasher.update(salt);
    hasher.update(udata);
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Hardened hash function for R=6 (ISO 32000-2 Algorithm 2.B).
///
/// Iterates a round function at least 64 times, each round re-hashing with
/// SHA-256, SHA-384, or SHA-512 depending on the modulus of the round's
/// AES-128-CBC output, terminating once the last output byte no longer
/// exceeds `round - 32`.
fn hash_r6(password: &[u8], salt: &[u8], udata: &[u8]) -> [u8; 32] {
    let mut k: Vec<u8> = {
        let mut hasher = Sha256::new();
        hasher.update(password);
        hasher.update(salt);
        hasher.update(udata);
        hasher.finalize().to_vec()
    };

    let mut round: u32 = 0;
    loop {
        let mut k1 = Vec::with_capacity((password.len() + k.len() + udata.len()) * 64);
        for _ in 0..64 {
            k1.extend_from_slice(password);
            k1.extend_from_slice(&k);
            k1.extend_from_slice(udata);
        }

        let aes_key = &k[0..16];
        let iv = &k[16..32];
        let e = super::aes::aes128_cbc_encrypt_no_padding(aes_key, iv, &k1);

        let sum: u32 = e[0..16].iter().map(|&b| b as u32).sum();
        match sum % 3 {
            0 => {
                let mut hasher = Sha256::new();
                hasher.update(&e);
                k = hasher.finalize().to_vec();
            },
            1 => {
                let mut hasher = Sha384::new();
                hasher.update(&e);
                k = hasher.finalize().to_vec();
            },
            _ => {
                let mut hasher = Sha512::new();
                hasher.update(&e);
                k = hasher.finalize().to_vec();
            },
        }

        round += 1;
        if round >= 64 {
            let last = *e.last().expect("AES output is non-empty") as u32;
            if last <= round.saturating_sub(32) {
                break;
            }
        }
    }

    let mut out = [0u8; 32];
    out.copy_from_slice(&k[0..32]);
    out
}

/// Authenticate a password against the AES-256 (V=5) /U entry and unwrap
/// the file encryption key from /UE.
///
/// PDF 2.0 spec (ISO 32000-2): Algorithm 2.A / 8.1 (user password).
///
/// # Arguments
///
/// * `password` - Candidate password (UTF-8, already SASLprep-normalized by
///   the caller if needed; this function treats it as opaque bytes)
/// * `user_key` - 48-byte /U entry: 32-byte hash, 8-byte validation salt,
///   8-byte key salt
/// * `user_encryption` - 32-byte /UE entry (wrapped file key)
/// * `revision` - Encryption revision (5 or 6)
pub fn authenticate_user_password_aes256(
    password: &[u8],
    user_key: &[u8],
    user_encryption: &[u8],
    revision: u32,
) -> Option<Vec<u8>> {
    if user_key.len() < 48 || user_encryption.len() != 32 {
        return None;
    }

    let hash = &user_key[0..32];
    let validation_salt = &user_key[32..40];
    let key_salt = &user_key[40..48];

    let computed = if revision >= 6 {
        hash_r6(password, validation_salt, &[])
    } else {
        hash_r5(password, validation_salt, &[])
    };

    if !constant_time_compare(&computed, hash) {
        return None;
    }

    let intermediate_key = if revision >= 6 {
        hash_r6(password, key_salt, &[])
    } else {
        hash_r5(password, key_salt, &[])
    };

    super::aes::aes256_cbc_decrypt_no_padding(&intermediate_key, &[0u8; 16], user_encryption).ok()
}

/// Authenticate a password against the AES-256 (V=5) /O entry and unwrap
/// the file encryption key from /OE.
///
/// The owner-password variant hashes password || salt || the full 48-byte
/// /U string (the "udata" vector in ISO 32000-2's terminology).
pub fn authenticate_owner_password_aes256(
    password: &[u8],
    owner_key: &[u8],
    owner_encryption: &[u8],
    user_key: &[u8],
    revision: u32,
) -> Option<Vec<u8>> {
    if owner_key.len() < 48 || owner_encryption.len() != 32 || user_key.len() < 48 {
        return None;
    }

    let hash = &owner_key[0..32];
    let validation_salt = &owner_key[32..40];
    let key_salt = &owner_key[40..48];
    let udata = &user_key[0..48];

    let computed = if revision >= 6 {
        hash_r6(password, validation_salt, udata)
    } else {
        hash_r5(password, validation_salt, udata)
    };

    if !constant_time_compare(&computed, hash) {
        return None;
    }

    let intermediate_key = if revision >= 6 {
        hash_r6(password, key_salt, udata)
    } else {
        hash_r5(password, key_salt, udata)
    };

    super::aes::aes256_cbc_decrypt_no_padding(&intermediate_key, &[0u8; 16], owner_encryption).ok()
}

/// Constant-time comparison to prevent timing attacks.
///
/// Returns true if the slices are equal.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }

    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes::cipher::{BlockEncryptMut, KeyIvInit};

    #[test]
    fn test_pad_password() {
        let password = b"test";
        let padded = pad_password(password);
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[..4], b"test");
        assert_eq!(&padded[4..], &PADDING[..28]);
    }

    #[test]
    fn test_pad_password_long() {
        let password = b"this is a very long password that exceeds 32 bytes";
        let padded = pad_password(password);
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[..], &password[..32]);
    }

    #[test]
    fn test_pad_password_exact() {
        let password = &[0u8; 32];
        let padded = pad_password(password);
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[..], password);
    }

    #[test]
    fn test_constant_time_compare_equal() {
        let a = b"test1234test1234";
        let b = b"test1234test1234";
        assert!(constant_time_compare(a, b));
    }

    #[test]
    fn test_constant_time_compare_not_equal() {
        let a = b"test1234test1234";
        let b = b"test1234test1235";
        assert!(!constant_time_compare(a, b));
    }

    #[test]
    fn test_constant_time_compare_different_length() {
        let a = b"test";
        let b = b"testing";
        assert!(!constant_time_compare(a, b));
    }

    #[test]
    fn test_hash_r5_deterministic() {
        let a = hash_r5(b"password", b"saltsalt", &[]);
        let b = hash_r5(b"password", b"saltsalt", &[]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn test_hash_r5_differs_by_salt() {
        let a = hash_r5(b"password", b"saltsalt", &[]);
        let b = hash_r5(b"password", b"different", &[]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_r6_deterministic_and_terminates() {
        let a = hash_r6(b"password", b"saltsalt", &[]);
        let b = hash_r6(b"password", b"saltsalt", &[]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn test_hash_r6_differs_from_r5() {
        let r5 = hash_r5(b"password", b"saltsalt", &[]);
        let r6 = hash_r6(b"password", b"saltsalt", &[]);
        assert_ne!(r5, r6);
    }

    #[test]
    fn test_authenticate_user_password_aes256_round_trip() {
        // Build a synthetic /U and /UE as a real encoder would, then verify
        // authentication recovers the same file key.
        let password = b"secret";
        let validation_salt = [0x01u8; 8];
        let key_salt = [0x02u8; 8];
        let file_key = [0xABu8; 32];

        let hash = hash_r6(password, &validation_salt, &[]);
        let mut user_key = Vec::with_capacity(48);
        user_key.extend_from_slice(&hash);
        user_key.extend_from_slice(&validation_salt);
        user_key.extend_from_slice(&key_salt);

        let intermediate_key = hash_r6(password, &key_salt, &[]);
        let encryptor = cbc::Encryptor::<aes::Aes256>::new((&intermediate_key[..]).into(), (&[0u8; 16][..]).into());
        let wrapped_key = encryptor
            .encrypt_padded_vec_mut::<aes::cipher::block_padding::NoPadding>(&file_key);

        let recovered =
            authenticate_user_password_aes256(password, &user_key, &wrapped_key, 6).unwrap();
        assert_eq!(recovered, file_key.to_vec());
    }

    #[test]
    fn test_authenticate_user_password_aes256_rejects_wrong_password() {
        let validation_salt = [0x01u8; 8];
        let key_salt = [0x02u8; 8];
        let hash = hash_r6(b"correct", &validation_salt, &[]);
        let mut user_key = Vec::with_capacity(48);
        user_key.extend_from_slice(&hash);
        user_key.extend_from_slice(&validation_salt);
        user_key.extend_from_slice(&key_salt);

        let dummy_ue = vec![0u8; 32];
        assert!(authenticate_user_password_aes256(b"wrong", &user_key, &dummy_ue, 6).is_none());
    }

    #[test]
    fn test_compute_encryption_key() {
        let password = b"user";
        let owner_key = &[0u8; 32];
        let permissions = -1;
        let file_id = b"test_file_id";
        let revision = 2;
        let key_length = 5;

        let key = compute_encryption_key(
            password,
            owner_key,
            permissions,
            file_id,
            revision,
            key_length,
            true,
        );

        assert_eq!(key.len(), key_length);
    }

    #[test]
    fn test_compute_owner_password_hash_length() {
        let hash = compute_owner_password_hash(b"owner", b"user", 3, 16);
        assert_eq!(hash.len(), 32);
    }

    #[test]
    fn test_compute_owner_password_hash_falls_back_to_user_password() {
        // An empty owner password is the spec's own convention for "use the
        // user password as the owner password seed" (callers pass the user
        // password in that case); verify the two produce different O values
        // when the owner password actually differs.
        let a = compute_owner_password_hash(b"owner-pass", b"user-pass", 3, 16);
        let b = compute_owner_password_hash(b"user-pass", b"user-pass", 3, 16);
        assert_ne!(a, b);
    }

    #[test]
    fn test_owner_password_hash_round_trips_through_encryption_key() {
        // compute_owner_password_hash (Algorithm 3) feeds compute_encryption_key
        // (Algorithm 2) as /O in a real EncryptDictBuilder; verify the pipeline
        // produces a key of the expected length end to end.
        let owner_hash = compute_owner_password_hash(b"owner", b"user", 3, 16);
        let key = compute_encryption_key(b"user", &owner_hash, -1, b"file-id", 3, 16, true);
        assert_eq!(key.len(), 16);
    }

    #[test]
    fn test_compute_user_password_hash_matches_authentication() {
        // compute_user_password_hash (write side) must produce exactly the
        // value authenticate_user_password (read side) expects to find in /U.
        let key = vec![0xAAu8; 5];
        let file_id = b"abc123";

        let u_r2 = compute_user_password_hash(&key, file_id, 2);
        assert_eq!(u_r2, compute_user_key_r2(&key));

        let u_r3 = compute_user_password_hash(&key, file_id, 4);
        assert_eq!(u_r3, compute_user_key_r3(&key, file_id));
    }

    #[test]
    fn test_owner_and_user_hash_pipeline_authenticates() {
        let user_password = b"open-sesame";
        let owner_password = b"owner-secret";
        let permissions = -1i32;
        let file_id = b"file-identifier";
        let revision = 3u32;
        let key_length = 16usize;

        let owner_hash =
            compute_owner_password_hash(owner_password, user_password, revision, key_length);
        let encryption_key = compute_encryption_key(
            user_password,
            &owner_hash,
            permissions,
            file_id,
            revision,
            key_length,
            true,
        );
        let user_hash = compute_user_password_hash(&encryption_key, file_id, revision);

        let recovered = authenticate_user_password(
            user_password,
            &user_hash,
            &owner_hash,
            permissions,
            file_id,
            revision,
            key_length,
            true,
        );

        assert_eq!(recovered, Some(encryption_key));
    }

    #[test]
    fn test_authenticate_owner_password_recovers_key() {
        let user_password = b"open-sesame";
        let owner_password = b"owner-secret";
        let permissions = -1i32;
        let file_id = b"file-identifier";
        let revision = 3u32;
        let key_length = 16usize;

        let owner_hash =
            compute_owner_password_hash(owner_password, user_password, revision, key_length);
        let encryption_key = compute_encryption_key(
            user_password,
            &owner_hash,
            permissions,
            file_id,
            revision,
            key_length,
            true,
        );
        let user_hash = compute_user_password_hash(&encryption_key, file_id, revision);

        let recovered = authenticate_owner_password(
            owner_password,
            &owner_hash,
            &user_hash,
            permissions,
            file_id,
            revision,
            key_length,
            true,
        );

        assert_eq!(recovered, Some(encryption_key));
    }

    #[test]
    fn test_authenticate_owner_password_wrong_password_fails() {
        let user_password = b"open-sesame";
        let owner_password = b"owner-secret";
        let permissions = -1i32;
        let file_id = b"file-identifier";
        let revision = 3u32;
        let key_length = 16usize;

        let owner_hash =
            compute_owner_password_hash(owner_password, user_password, revision, key_length);
        let encryption_key = compute_encryption_key(
            user_password,
            &owner_hash,
            permissions,
            file_id,
            revision,
            key_length,
            true,
        );
        let user_hash = compute_user_password_hash(&encryption_key, file_id, revision);

        let recovered = authenticate_owner_password(
            b"not-the-owner-password",
            &owner_hash,
            &user_hash,
            permissions,
            file_id,
            revision,
            key_length,
            true,
        );

        assert_eq!(recovered, None);
    }
}
