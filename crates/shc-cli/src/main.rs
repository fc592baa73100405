/// SHC command-line tool — decode a SMART Health Card QR numeric text
/// file into its JWS header and payload.
///
/// # Usage
///
/// ```text
/// shc <FILE>
///
/// Arguments:
///   <FILE>    Path to the QR numeric text (contents start with shc:/)
///
/// Options:
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// The decoded header is printed first, followed by a line break, then
/// the decoded payload — both are UTF-8 JSON text in a well-formed
/// card.
///
/// # Exit codes
///
/// | Code | Meaning                                     |
/// |------|---------------------------------------------|
/// | 0    | Success                                     |
/// | 1    | Error (I/O failure, malformed card, etc.)   |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::fs::File;
use std::io::{self, Write as _};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use shc_decoder::ShcDecoder;

/// Decode a SMART Health Card QR numeric text file.
#[derive(Parser)]
#[command(name = "shc", version, about = "SMART Health Card QR decoder")]
struct Cli {
    /// Path to the QR numeric text file (contents start with `shc:/`).
    file: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Open the input, decode it, and print both JWS parts.
///
/// Decoding runs to completion before anything is written, so a failed
/// card produces no stdout output at all — only the stderr diagnostic.
fn run(cli: &Cli) -> Result<()> {
    let file =
        File::open(&cli.file).with_context(|| format!("cannot read {}", cli.file.display()))?;

    let jws = ShcDecoder::decode_reader(file)
        .with_context(|| format!("failed to decode {}", cli.file.display()))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(&jws.header)
        .and_then(|()| handle.write_all(b"\n"))
        .and_then(|()| handle.write_all(&jws.payload))
        .and_then(|()| handle.flush())
        .context("cannot write to stdout")?;

    Ok(())
}
