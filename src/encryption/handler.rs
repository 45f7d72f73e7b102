//! Encryption handler for PDF documents.
//!
//! This module provides the main interface for handling encrypted PDFs,
//! including password authentication and stream/string decryption.

use super::algorithms;
use super::{Algorithm, EncryptDict, Permissions};
use crate::error::{Error, Result};
use crate::object::Object;

/// Main encryption handler for PDF documents.
///
/// This struct manages the encryption state and provides methods for
/// authenticating passwords and decrypting content.
#[derive(Debug, Clone)]
pub struct EncryptionHandler {
    /// Encryption dictionary
    dict: EncryptDict,
    /// Derived encryption key (set after successful authentication)
    encryption_key: Option<Vec<u8>>,
    /// File identifier (first element of /ID array)
    file_id: Vec<u8>,
    /// Encryption algorithm
    algorithm: Algorithm,
}

impl EncryptionHandler {
    /// Create a new encryption handler from an encryption dictionary.
    ///
    /// # Arguments
    ///
    /// * `encrypt_obj` - The /Encrypt dictionary object from the PDF trailer
    /// * `file_id` - The first element of the /ID array from the PDF trailer
    ///
    /// # Returns
    ///
    /// An encryption handler ready for password authentication
    pub fn new(encrypt_obj: &Object, file_id: Vec<u8>) -> Result<Self> {
        let dict = EncryptDict::from_object(encrypt_obj)?;
        let algorithm = dict.algorithm()?;

        log::info!(
            "PDF is encrypted with {:?} (V={}, R={})",
            algorithm,
            dict.version,
            dict.revision
        );

        Ok(Self {
            dict,
            encryption_key: None,
            file_id,
            algorithm,
        })
    }

    /// Authenticate with a password.
    ///
    /// This attempts to authenticate with the given password as either
    /// a user password or owner password. If successful, the encryption
    /// key is derived and stored for future decryption operations.
    ///
    /// # Arguments
    ///
    /// * `password` - The password to authenticate (empty string for no password)
    ///
    /// # Returns
    ///
    /// `Ok(true)` if authentication succeeded, `Ok(false)` if it failed,
    /// or an error if the encryption is unsupported.
    pub fn authenticate(&mut self, password: &[u8]) -> Result<bool> {
        if self.dict.revision >= 5 {
            return self.authenticate_aes256(password);
        }

        // Try authenticating as user password
        if let Some(key) = algorithms::authenticate_user_password(
            password,
            &self.dict.user_password,
            &self.dict.owner_password,
            self.dict.permissions,
            &self.file_id,
            self.dict.revision,
            self.dict.key_length_bytes(),
            self.dict.encrypt_metadata,
        ) {
            self.encryption_key = Some(key);
            log::info!("Successfully authenticated with user password");
            return Ok(true);
        }

        // Try authenticating as owner password (Algorithm 7): an owner
        // password alone must still open the document per the spec's
        // dual-password design, mirrored from the AES-256 path above.
        if let Some(key) = algorithms::authenticate_owner_password(
            password,
            &self.dict.owner_password,
            &self.dict.user_password,
            self.dict.permissions,
            &self.file_id,
            self.dict.revision,
            self.dict.key_length_bytes(),
            self.dict.encrypt_metadata,
        ) {
            self.encryption_key = Some(key);
            log::info!("Successfully authenticated with owner password");
            return Ok(true);
        }

        log::warn!("Password authentication failed");
        Ok(false)
    }

    /// Authenticate against the SHA-256-based R5/R6 (AES-256, V=5) scheme.
    ///
    /// Tries the password as a user password first, then as an owner
    /// password, mirroring the Standard Security Handler's dual-password
    /// design (an owner password alone must still open the document).
    fn authenticate_aes256(&mut self, password: &[u8]) -> Result<bool> {
        if let Some(ue) = self.dict.user_encryption.as_ref() {
            if let Some(key) = algorithms::authenticate_user_password_aes256(
                password,
                &self.dict.user_password,
                ue,
                self.dict.revision,
            ) {
                self.encryption_key = Some(key);
                log::info!("Successfully authenticated with user password (AES-256)");
                return Ok(true);
            }
        }

        if let Some(oe) = self.dict.owner_encryption.as_ref() {
            if let Some(key) = algorithms::authenticate_owner_password_aes256(
                password,
                &self.dict.owner_password,
                oe,
                &self.dict.user_password,
                self.dict.revision,
            ) {
                self.encryption_key = Some(key);
                log::info!("Successfully authenticated with owner password (AES-256)");
                return Ok(true);
            }
        }

        log::warn!("Password authentication failed");
        Ok(false)
    }

    /// Check if the handler has been authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.encryption_key.is_some()
    }

    /// Get the encryption key (if authenticated).
    pub fn encryption_key(&self) -> Option<&[u8]> {
        self.encryption_key.as_deref()
    }

    /// Get the permissions.
    pub fn permissions(&self) -> Permissions {
        Permissions::from_bits(self.dict.permissions)
    }

    /// Get the encryption algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Decrypt a stream using the encryption key.
    ///
    /// PDF Spec: Section 7.6.2 - General Encryption Algorithm
    ///
    /// # Arguments
    ///
    /// * `data` - The encrypted stream data
    /// * `obj_num` - Object number
    /// * `gen_num` - Generation number
    ///
    /// # Returns
    ///
    /// The decrypted stream data, or an error if decryption fails
    pub fn decrypt_stream(&self, data: &[u8], obj_num: u32, gen_num: u32) -> Result<Vec<u8>> {
        let key = self
            .encryption_key
            .as_ref()
            .ok_or_else(|| Error::InvalidPdf("Not authenticated".to_string()))?;

        // Compute object-specific key
        let obj_key = self.compute_object_key(key, obj_num, gen_num)?;

        // Decrypt based on algorithm
        match self.algorithm {
            Algorithm::None => Ok(data.to_vec()),
            Algorithm::RC4_40 | Algorithm::Rc4_128 => Ok(super::rc4::rc4_crypt(&obj_key, data)),
            Algorithm::Aes128 => {
                // AES: first 16 bytes are IV, rest is ciphertext
                if data.len() < 16 {
                    return Err(Error::InvalidPdf("AES encrypted data too short".to_string()));
                }
                let (iv, ciphertext) = data.split_at(16);
                super::aes::aes128_decrypt(&obj_key[..16], iv, ciphertext)
                    .map_err(|e| Error::InvalidPdf(format!("AES decryption failed: {}", e)))
            },
            Algorithm::Aes256 => {
                if data.len() < 16 {
                    return Err(Error::InvalidPdf("AES encrypted data too short".to_string()));
                }
                let (iv, ciphertext) = data.split_at(16);
                super::aes::aes256_decrypt(&obj_key[..32], iv, ciphertext)
                    .map_err(|e| Error::InvalidPdf(format!("AES decryption failed: {}", e)))
            },
        }
    }

    /// Decrypt a string using the encryption key.
    ///
    /// # Arguments
    ///
    /// * `data` - The encrypted string data
    /// * `obj_num` - Object number
    /// * `gen_num` - Generation number
    ///
    /// # Returns
    ///
    /// The decrypted string data
    pub fn decrypt_string(&self, data: &[u8], obj_num: u32, gen_num: u32) -> Result<Vec<u8>> {
        // Strings are decrypted the same way as streams
        self.decrypt_stream(data, obj_num, gen_num)
    }

    /// Compute the object-specific encryption key.
    ///
    /// PDF Spec: Algorithm 1 - Encryption key algorithm
    ///
    /// # Arguments
    ///
    /// * `base_key` - The base encryption key
    /// * `obj_num` - Object number
    /// * `gen_num` - Generation number
    ///
    /// # Returns
    ///
    /// The object-specific key
    fn compute_object_key(&self, base_key: &[u8], obj_num: u32, gen_num: u32) -> Result<Vec<u8>> {
        // AESV3 (V=5, R=5/6) uses the file encryption key directly for every
        // object; there is no per-object key derivation (ISO 32000-2, 7.6.2).
        if self.algorithm == Algorithm::Aes256 {
            return Ok(base_key.to_vec());
        }

        use md5::{Digest, Md5};

        let mut hasher = Md5::new();

        // Step a: Extend key with object/generation number
        hasher.update(base_key);
        hasher.update(&obj_num.to_le_bytes()[..3]); // Low 3 bytes
        hasher.update(&gen_num.to_le_bytes()[..2]); // Low 2 bytes

        // Step b: For AES, add "sAlT" string
        if self.algorithm.is_aes() {
            hasher.update(b"sAlT");
        }

        // Step c: MD5 hash
        let hash = hasher.finalize();

        // Step d: Key is first (n + 5) bytes, max 16
        let key_len = (base_key.len() + 5).min(16);
        Ok(hash[..key_len].to_vec())
    }
}
