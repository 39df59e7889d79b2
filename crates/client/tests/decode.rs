//! Tests for incremental UTF-8 decoding.

use fitb_client::Utf8StreamDecoder;

#[test]
fn passes_ascii_through() {
    let mut decoder = Utf8StreamDecoder::new();
    assert_eq!(decoder.decode(b"Great"), "Great");
    assert_eq!(decoder.decode(b" question!"), " question!");
    assert_eq!(decoder.finish(), "");
}

#[test]
fn holds_back_split_character() {
    let bytes = "💪".as_bytes();
    let mut decoder = Utf8StreamDecoder::new();
    assert_eq!(decoder.decode(&bytes[..1]), "");
    assert_eq!(decoder.decode(&bytes[1..3]), "");
    assert_eq!(decoder.decode(&bytes[3..]), "💪");
}

#[test]
fn replaces_invalid_bytes() {
    let mut decoder = Utf8StreamDecoder::new();
    assert_eq!(decoder.decode(b"a\xffb"), "a\u{FFFD}b");
}

#[test]
fn finish_replaces_dangling_partial() {
    let mut decoder = Utf8StreamDecoder::new();
    assert_eq!(decoder.decode(&"é".as_bytes()[..1]), "");
    assert_eq!(decoder.finish(), "\u{FFFD}");
    assert_eq!(decoder.finish(), "");
}

#[test]
fn any_chunking_yields_same_text() {
    let text = "Squats 💪, lunges — and planks. Ça va?";
    let bytes = text.as_bytes();
    for size in 1..=bytes.len() {
        let mut decoder = Utf8StreamDecoder::new();
        let mut out: String = bytes.chunks(size).map(|c| decoder.decode(c)).collect();
        out.push_str(&decoder.finish());
        assert_eq!(out, text, "chunk size {size}");
    }
}
