//! End-to-end pipeline test: binary bytes -> dropper script -> keystroke
//! script, verifying the embedded payload survives the target-side decode
//! path and that the synthesized script reproduces the dropper text.

use std::io::Read;

use base64::Engine;
use flate2::read::DeflateDecoder;

use typedrop::dropper;
use typedrop::encoder;
use typedrop::synth::{synthesize, KeyEvent, SynthConfig};

/// Pulls the embedded base64 payload back out of a generated dropper script.
fn embedded_payload(script: &str) -> &str {
    let line = script
        .lines()
        .find(|line| line.starts_with("$b64 = "))
        .expect("dropper script has a $b64 assignment");

    line.trim_start_matches("$b64 = ").trim_matches('"')
}

#[test]
fn dropper_payload_survives_the_target_decode_path() {
    let payload: Vec<u8> = (0u8..=255).chain((0u8..=255).rev()).collect();

    let encoded = encoder::compress_and_encode(&payload).unwrap();
    let script = dropper::generate(&encoded, "agent.exe").unwrap();

    // Replicate what the generated PowerShell does on the target: base64
    // decode, skip the 2-byte zlib header, raw-deflate decompress.
    let compressed = base64::engine::general_purpose::STANDARD
        .decode(embedded_payload(&script))
        .unwrap();
    let mut reconstructed = Vec::new();
    DeflateDecoder::new(&compressed[2..])
        .read_to_end(&mut reconstructed)
        .unwrap();

    assert_eq!(reconstructed, payload);
}

#[test]
fn synthesized_script_types_the_whole_dropper() {
    let encoded = encoder::compress_and_encode(b"tiny payload").unwrap();
    let script = dropper::generate(&encoded, "tiny.bin").unwrap();

    let synthesis = synthesize(
        &script,
        &SynthConfig {
            focus_delay: 10.0,
            rate_multiplier: 2.0,
        },
    );

    // Reassemble the typed text from the event stream and compare against
    // the dropper source, line by line.
    let mut typed = String::new();
    for event in &synthesis.events {
        match event {
            KeyEvent::LiteralRun(text) => typed.push_str(text),
            KeyEvent::NamedKey("Return") => typed.push('\n'),
            KeyEvent::NamedKey("space") => typed.push(' '),
            KeyEvent::NamedKey("Tab") => typed.push('\t'),
            KeyEvent::NamedKey(name) => {
                let c = match *name {
                    "slash" => '/',
                    "backslash" => '\\',
                    "period" => '.',
                    "comma" => ',',
                    "semicolon" => ';',
                    "colon" => ':',
                    "apostrophe" => '\'',
                    "quotedbl" => '"',
                    "bracketleft" => '[',
                    "bracketright" => ']',
                    "equal" => '=',
                    "minus" => '-',
                    "grave" => '`',
                    other => panic!("unexpected named key {other}"),
                };
                typed.push(c);
            }
            KeyEvent::ChordPress { key, .. } => {
                let c = match *key {
                    "bracketleft" => '{',
                    "bracketright" => '}',
                    "9" => '(',
                    "0" => ')',
                    "1" => '!',
                    "2" => '@',
                    "3" => '#',
                    "4" => '$',
                    "5" => '%',
                    "6" => '^',
                    "7" => '&',
                    "8" => '*',
                    "equal" => '+',
                    "minus" => '_',
                    "slash" => '?',
                    "comma" => '<',
                    "period" => '>',
                    "backslash" => '|',
                    "grave" => '~',
                    other => panic!("unexpected chord key {other}"),
                };
                typed.push(c);
            }
            KeyEvent::Sleep(_) => {}
        }
    }

    assert_eq!(typed, script);

    // The replay estimate is exactly the sum of the serialized pauses.
    let sleep_sum: u64 = synthesis
        .events
        .iter()
        .filter_map(|event| match event {
            KeyEvent::Sleep(micros) => Some(*micros),
            _ => None,
        })
        .sum();
    assert_eq!(synthesis.total_micros, sleep_sum);
    assert!(synthesis.total_seconds() > 10.0);
}

#[test]
fn hostile_bin_name_keeps_the_template_well_formed() {
    let encoded = encoder::compress_and_encode(b"x").unwrap();
    let script = dropper::generate(&encoded, r#"we"ird$na`me.exe"#).unwrap();

    let path_line = script
        .lines()
        .find(|line| line.starts_with("$outputPath"))
        .unwrap();

    // Every quote, dollar and backtick of the filename must arrive escaped;
    // the literal ends exactly once, at the closing quote.
    assert!(path_line.contains(r#"we`"ird`$na``me.exe"#));
    assert!(path_line.ends_with('"'));
}
