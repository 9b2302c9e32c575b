//! Unique identifier generators.

use mock_core::MockValue;
use rand::Rng;
use uuid::Uuid;

/// Generate a 12-byte object identifier as 24 lowercase hex characters.
pub fn generate_object_id<R: Rng>(rng: &mut R) -> MockValue {
    let mut bytes = [0u8; 12];
    rng.fill(&mut bytes);

    MockValue::String(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

/// Generate a random UUID v4 using the provided RNG, hyphenated.
pub fn generate_uuid_v4<R: Rng>(rng: &mut R) -> MockValue {
    // Generate 16 random bytes
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40; // Version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // Variant RFC 4122

    MockValue::String(Uuid::from_bytes(bytes).hyphenated().to_string())
}
