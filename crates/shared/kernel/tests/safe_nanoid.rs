use shub_kernel::{SAFE_ALPHABET, safe_nanoid};

#[test]
fn default_length_is_twelve() {
    let id = safe_nanoid!();
    assert_eq!(id.len(), 12);
}

#[test]
fn custom_length_is_respected() {
    let id = safe_nanoid!(21);
    assert_eq!(id.len(), 21);
}

#[test]
fn ids_use_only_the_unambiguous_alphabet() {
    let id = safe_nanoid!(64);
    assert!(id.chars().all(|c| SAFE_ALPHABET.contains(&c)), "unexpected character in {id}");
}
