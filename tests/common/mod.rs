#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

const TMPDIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/target/playground");

pub const INDEX_SIZE: usize = 108;

pub fn redirect_temp_dir() {
    unsafe {
        std::env::set_var("TMPDIR", TMPDIR);
    }

    // Ensure the TMPDIR exists
    if !Path::new(TMPDIR).exists() {
        std::fs::create_dir_all(TMPDIR).expect("Failed to create TMPDIR");
    }
}

pub fn run_dirc_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("dirc").expect("Failed to find dirc binary");
    cmd.current_dir(dir).args(args);
    cmd
}

/// The exact bytes expected for the default `hola.txt` fixture
pub fn expected_default_index() -> Vec<u8> {
    let mut bytes = Vec::with_capacity(INDEX_SIZE);
    bytes.extend_from_slice(b"DIRC");
    bytes.extend_from_slice(&2u32.to_be_bytes());
    bytes.extend_from_slice(&1u32.to_be_bytes());
    bytes.extend_from_slice(&[0u8; 62]);
    bytes.extend_from_slice(&[0u8; 20]);
    bytes.extend_from_slice(b"hola.txt");
    bytes.push(0);
    bytes.extend_from_slice(&[0u8; 5]);
    bytes
}

/// Hexdump with one 8-byte block per row, matching index entry alignment
pub fn to_hexdump(data: &[u8]) -> String {
    data.chunks(8)
        .enumerate()
        .map(|(i, block)| {
            let hex = block
                .iter()
                .map(|byte| format!("{byte:02x}"))
                .collect::<Vec<_>>()
                .join(" ");
            let ascii = block
                .iter()
                .map(|&byte| if byte.is_ascii_graphic() { byte as char } else { '.' })
                .collect::<String>();
            format!("{:04}: {hex:<23} |{ascii}|\n", i * 8)
        })
        .collect()
}

// Macro to compare index contents with hexdump output on failure
#[macro_export]
macro_rules! assert_index_eq {
    ($actual:expr, $expected:expr) => {
        if $actual != $expected {
            let actual_hexdump = common::to_hexdump($actual);
            let expected_hexdump = common::to_hexdump($expected);

            pretty_assertions::assert_eq!(
                actual_hexdump,
                expected_hexdump,
                "\n=== INDEX CONTENTS DIFFER ===\nWritten index ({} bytes) vs expected index ({} bytes)",
                $actual.len(),
                $expected.len()
            );
        }
    };
}
