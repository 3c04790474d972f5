use spotdump::utils::*;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Deterministic, and sensitive to the input
    assert_eq!(challenge, generate_code_challenge(verifier));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // SHA-256 digest in URL-safe base64 without padding
    assert_eq!(challenge.len(), 43);
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_generate_code_challenge_known_vector() {
    // RFC 7636 appendix B
    let challenge = generate_code_challenge("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk");
    assert_eq!(challenge, "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");
}

#[test]
fn test_make_playlist_filename_strips_punctuation() {
    assert_eq!(make_playlist_filename("My Cool Mix! (2024)"), "My_Cool_Mix_2024.json");
}

#[test]
fn test_make_playlist_filename_keeps_hyphen_and_underscore() {
    assert_eq!(make_playlist_filename("lo-fi_beats"), "lo-fi_beats.json");
}

#[test]
fn test_make_playlist_filename_keeps_unicode_letters() {
    assert_eq!(make_playlist_filename("Café Müller"), "Café_Müller.json");
}

#[test]
fn test_make_playlist_filename_strips_path_separators() {
    assert_eq!(make_playlist_filename("../etc/passwd"), "etcpasswd.json");
}

#[test]
fn test_make_playlist_filename_collisions() {
    assert_eq!(
        make_playlist_filename("Mix!"),
        make_playlist_filename("Mix?")
    );
}

#[test]
fn test_make_playlist_filename_empty_name() {
    assert_eq!(make_playlist_filename("!!!"), ".json");
}
