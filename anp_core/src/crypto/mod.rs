// Copyright 2024-2026 Agent Network Protocol Contributors
// SPDX-License-Identifier: Apache-2.0

//! Cryptographic primitives: key generation, signing, key exchange,
//! key derivation and authenticated encryption.

mod aead;
mod jwk;
mod key_exchange;
mod key_pair;
mod key_type;
mod signature;

pub use self::aead::aead_decrypt;
pub use self::aead::aead_encrypt;
pub use self::aead::EncryptedMessage;
pub use self::aead::IV_LENGTH;
pub use self::aead::KEY_LENGTH;
pub use self::aead::TAG_LENGTH;
pub use self::jwk::Jwk;
pub use self::key_exchange::derive_encryption_key;
pub use self::key_exchange::ecdh;
pub use self::key_exchange::hkdf_sha256;
pub use self::key_exchange::ENCRYPTION_INFO;
pub use self::key_exchange::SHARED_SECRET_LENGTH;
pub use self::key_pair::KeyPair;
pub use self::key_pair::PrivateKey;
pub use self::key_pair::PublicKey;
pub use self::key_type::KeyType;
pub use self::signature::sign;
pub use self::signature::verify;
