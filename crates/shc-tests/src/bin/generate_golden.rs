//! Golden fixture generator for the SHC conformance test suite.
//!
//! This binary creates the fixture files under `tests/golden/`. Run it
//! after changing the fixture builders to regenerate the committed card
//! text. The decoded expectations in `tests/conformance.rs` are
//! hardcoded and do not change with compression settings — any valid
//! raw DEFLATE stream for the same claims decodes identically.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_golden -p shc-tests
//! ```
//!
//! # Generated fixtures
//!
//! | Directory    | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | minimal_card | `card.txt` — `{"alg":"ES256"}` / minimal claims   |

use std::fs;
use std::path::Path;

use shc_tests::encode_card;

fn main() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/golden");

    let minimal = root.join("minimal_card");
    fs::create_dir_all(&minimal).expect("create minimal_card dir");

    let card = encode_card(br#"{"alg":"ES256"}"#, br#"{"iss":"https://example.org"}"#);
    fs::write(minimal.join("card.txt"), card).expect("write card.txt");

    println!("golden fixtures written to {}", root.display());
}
