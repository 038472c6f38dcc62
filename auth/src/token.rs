use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

/// Token size in bytes before encoding (32 bytes = 256 bits of entropy).
pub const TOKEN_BYTES: usize = 32;

/// Generate a cryptographically random opaque token.
///
/// Uses OS-provided entropy; suitable for session identifiers and
/// password-reset tokens.
///
/// # Returns
/// A base64 URL-safe encoded string without padding
pub fn generate_token() -> String {
    let mut buffer = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut buffer);
    URL_SAFE_NO_PAD.encode(buffer)
}
