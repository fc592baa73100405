use criterion::{Criterion, criterion_group, criterion_main};
use shc_decoder::ShcDecoder;
use shc_tests::{b64url, digit_pairs, encode_card};
use shc_wire::digit_pairs::transcode_section;

/// A realistically sized FHIR-ish claims body (a few KB uncompressed).
fn sample_claims() -> Vec<u8> {
    let entry = r#"{"resourceType":"Immunization","status":"completed","lotNumber":"0000001"},"#;
    format!("{{\"entries\":[{}]}}", entry.repeat(40)).into_bytes()
}

fn bench_transcode(c: &mut Criterion) {
    let pairs = digit_pairs(&b64url(&sample_claims()));

    c.bench_function("transcode_digit_pairs", |b| {
        b.iter(|| transcode_section(pairs.as_bytes()).unwrap());
    });
}

fn bench_decode_minimal(c: &mut Criterion) {
    let card = encode_card(br#"{"alg":"ES256"}"#, br#"{"iss":"https://example.org"}"#);

    c.bench_function("decode_minimal_card", |b| {
        b.iter(|| ShcDecoder::decode(card.as_bytes()).unwrap());
    });
}

fn bench_decode_medium(c: &mut Criterion) {
    let card = encode_card(br#"{"alg":"ES256","zip":"DEF"}"#, &sample_claims());

    c.bench_function("decode_medium_card", |b| {
        b.iter(|| ShcDecoder::decode(card.as_bytes()).unwrap());
    });
}

criterion_group!(
    benches,
    bench_transcode,
    bench_decode_minimal,
    bench_decode_medium
);
criterion_main!(benches);
