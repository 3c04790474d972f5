use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::config::JSON_EXTENSION;

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Builds the output filename for a playlist.
///
/// Keeps letters, digits, spaces, hyphens and underscores, turns spaces into
/// underscores and appends `.json`. Distinct names may map to the same file.
pub fn make_playlist_filename(playlist_name: &str) -> String {
    let safe_name: String = playlist_name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect();

    safe_name + JSON_EXTENSION
}
