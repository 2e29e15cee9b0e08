use podium_kernel::domain::ids::{PaperId, SessionId};
use podium_kernel::{SAFE_ALPHABET, new_id, safe_nanoid};

#[test]
fn generates_expected_length_and_charset() {
    let id = safe_nanoid!();
    assert_eq!(id.len(), 12);

    for ch in id.chars() {
        assert!(SAFE_ALPHABET.contains(&ch), "unexpected character in nanoid: {ch}");
    }
}

#[test]
fn custom_length() {
    let id = safe_nanoid!(20);
    assert_eq!(id.len(), 20);
}

#[test]
fn typed_ids_are_prefixed_and_distinct() {
    let first: SessionId = new_id();
    let second: SessionId = new_id();
    let paper: PaperId = new_id();

    assert!(first.as_str().starts_with("session:"));
    assert!(paper.as_str().starts_with("paper:"));
    assert_eq!(first.as_str().len(), "session:".len() + 12);
    assert_ne!(first, second);
}
