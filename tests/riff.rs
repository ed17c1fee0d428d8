use chunkix::prelude::*;
use pretty_assertions::assert_eq;

/// Build one chunk: tag, little-endian length, payload, pad byte if odd.
fn chunk(tag: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(tag);
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(payload);
    if payload.len() % 2 == 1 {
        out.push(0);
    }
    out
}

#[test]
fn sibling_chunk_count_survives_unknown_tags() {
    // known containers interleaved with tags no decoder recognizes
    let mut bytes = Vec::new();
    bytes.extend(chunk(b"RIFF", b"WAVE\x01\x02"));
    bytes.extend(chunk(b"zz01", &[0xAA; 7])); // odd length, padded
    bytes.extend(chunk(b"LIST", b"hdrlabcd"));
    bytes.extend(chunk(b"zz02", &[]));
    bytes.extend(chunk(b"INFO", b"meta"));

    let riff = RiffFile::parse(&bytes).unwrap();
    assert_eq!(riff.chunks().len(), 5);

    let tags: Vec<FourCC> = riff.chunks().iter().map(|c| c.fourcc()).collect();
    assert_eq!(
        tags,
        vec![
            FourCC::RIFF,
            FourCC::new(*b"zz01"),
            FourCC::LIST,
            FourCC::new(*b"zz02"),
            FourCC::INFO,
        ]
    );
}

#[test]
fn unknown_chunk_payload_is_preserved() {
    let bytes = chunk(b"zzzz", &[1, 2, 3, 4]);
    let riff = RiffFile::parse(&bytes).unwrap();
    assert_eq!(riff.chunks()[0].data(), &[1, 2, 3, 4]);
    assert!(riff.chunks()[0].form().is_none());
}

#[test]
fn form_chunks_carry_their_form_type() {
    let bytes = chunk(b"RIFF", b"AVI \x09\x08");
    let riff = RiffFile::parse(&bytes).unwrap();
    let form = riff.chunks()[0].form().unwrap();
    assert_eq!(form.form_type, FourCC::AVI);
    assert_eq!(form.data, vec![9, 8]);
}

#[test]
fn next_chunk_is_forward_only() {
    let mut bytes = chunk(b"RIFF", b"WAVE");
    bytes.extend(chunk(b"tail", &[0, 0]));

    let mut riff = RiffFile::parse(&bytes).unwrap();
    assert_eq!(riff.next_chunk().unwrap().fourcc(), FourCC::RIFF);
    assert_eq!(riff.next_chunk().unwrap().fourcc(), FourCC::new(*b"tail"));
    assert!(riff.next_chunk().is_none());
    // exhausted forever, not restartable
    assert!(riff.next_chunk().is_none());
}

#[test]
fn reparsing_the_same_buffer_is_idempotent() {
    let mut bytes = chunk(b"RIFF", b"WAVEdata");
    bytes.extend(chunk(b"zzzz", &[5; 3]));

    let first = RiffFile::parse(&bytes).unwrap();
    let second = RiffFile::parse(&bytes).unwrap();
    assert_eq!(first, second);
}

#[test]
fn structural_failures_are_fatal() {
    assert!(matches!(RiffFile::parse(&[]), Err(RiffError::NotARiff)));
    assert!(matches!(
        RiffFile::parse(b"RIFF\x20"),
        Err(RiffError::NotARiff)
    ));

    // declared length exceeding the remaining stream
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&10u32.to_le_bytes());
    bytes.extend_from_slice(&[0; 2]);
    assert!(matches!(RiffFile::parse(&bytes), Err(RiffError::NotARiff)));
}

#[test]
fn loading_a_missing_path_is_invalid_argument() {
    let err = RiffFile::load("/nonexistent/chunkix-test.riff").unwrap_err();
    assert!(matches!(err, RiffError::InvalidArgument(_)));
}
