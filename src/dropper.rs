//! PowerShell dropper generation.
//!
//! The generated script reverses the encoder on the target using only
//! facilities a stock PowerShell host provides: base64-decode the embedded
//! string, skip the 2-byte zlib header (DeflateStream consumes a raw deflate
//! stream and rejects the header the encoder's zlib framing prepends, so the
//! offset is a bit-exact contract between encoder and template), stream-
//! decompress, and write the original bytes under the user profile directory.

/// Escapes a filename for embedding inside a PowerShell double-quoted string
/// literal.
///
/// Backtick is PowerShell's escape character and must be doubled; embedded
/// double quotes and `$` would otherwise terminate the literal or start an
/// expression expansion. Control characters (including CR/LF and NUL) have no
/// representation that keeps the template one well-formed statement, so they
/// are rejected outright.
///
/// # Errors
/// Returns a validation error if `name` is empty or contains a control
/// character.
pub fn escape_output_name(name: &str) -> crate::error::Result<String> {
    if name.is_empty() {
        return Err(crate::error::TypedropError::validation_error(
            "output filename must not be empty",
        ));
    }
    if name.chars().any(|c| c.is_control()) {
        return Err(crate::error::TypedropError::validation_error(
            "output filename must not contain control characters",
        ));
    }

    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '`' => escaped.push_str("``"),
            '"' => escaped.push_str("`\""),
            '$' => escaped.push_str("`$"),
            _ => escaped.push(c),
        }
    }

    Ok(escaped)
}

/// Renders the self-extracting dropper script.
///
/// The template has exactly two substitution points: the encoded payload and
/// the output filename. The encoded payload is guaranteed printable and
/// template-safe by the base64 alphabet and is embedded verbatim; the
/// filename is escaped via `escape_output_name` so an arbitrary printable
/// name cannot break out of the string literal.
///
/// # Arguments
/// * `encoded` - The base64 text produced by `encoder::compress_and_encode`.
/// * `output_name` - The filename to write on the target, joined under
///   `$env:USERPROFILE`.
///
/// # Returns
/// The complete dropper script text.
///
/// # Errors
/// Returns a validation error if `output_name` fails escaping.
pub fn generate(encoded: &str, output_name: &str) -> crate::error::Result<String> {
    let escaped_name = escape_output_name(output_name)?;

    Ok(format!(
        r#"$b64 = "{encoded}"
$compressed = [Convert]::FromBase64String($b64)
$ms = New-Object System.IO.MemoryStream
$null = $ms.Write($compressed, 2, $compressed.Length - 2)
$null = $ms.Seek(0, 0)
$ds = New-Object System.IO.Compression.DeflateStream($ms, [System.IO.Compression.CompressionMode]::Decompress)
$out = New-Object System.IO.MemoryStream
$ds.CopyTo($out)
$ms.Close()
$ds.Close()
$outputPath = Join-Path $env:USERPROFILE "{escaped_name}"
[System.IO.File]::WriteAllBytes($outputPath, $out.ToArray())
$out.Close()
"#
    ))
}

#[cfg(test)]
mod tests {
    use super::{escape_output_name, generate};

    /// A double-quoted PowerShell literal is well-formed when every `"` and
    /// backtick inside it is escape-prefixed, i.e. the literal ends at the
    /// first unescaped quote.
    fn double_quoted_literal_is_closed(line: &str) -> bool {
        let body = match line.split_once('"') {
            Some((_, rest)) => rest,
            None => return false,
        };

        let mut chars = body.chars();
        while let Some(c) = chars.next() {
            match c {
                '`' => {
                    if chars.next().is_none() {
                        return false;
                    }
                }
                '"' => return chars.as_str().is_empty(),
                _ => {}
            }
        }

        false
    }

    #[test]
    fn embeds_encoded_payload_verbatim() {
        let script = generate("AAECAwQ=", "payload.exe").unwrap();

        assert!(script.contains(r#"$b64 = "AAECAwQ=""#));
        assert!(script.contains(r#"Join-Path $env:USERPROFILE "payload.exe""#));
    }

    #[test]
    fn skips_exactly_two_header_bytes() {
        let script = generate("AAECAwQ=", "a").unwrap();

        assert!(script.contains("$ms.Write($compressed, 2, $compressed.Length - 2)"));
    }

    #[test]
    fn quote_in_filename_cannot_break_the_literal() {
        let script = generate("AAECAwQ=", r#"na"me.exe"#).unwrap();

        let path_line = script
            .lines()
            .find(|line| line.starts_with("$outputPath"))
            .unwrap();
        assert!(double_quoted_literal_is_closed(path_line));
        assert!(path_line.contains(r#"na`"me.exe"#));
    }

    #[test]
    fn template_stays_well_formed_for_printable_names() {
        let hostile_names = [
            r#"$(rm -rf)"#,
            "back`tick",
            r#"mix`"$ed"#,
            "plain name.bin",
            "semi;colon&amp",
        ];

        for name in hostile_names {
            let script = generate("QUJD", name).unwrap();
            let path_line = script
                .lines()
                .find(|line| line.starts_with("$outputPath"))
                .unwrap();
            assert!(
                double_quoted_literal_is_closed(path_line),
                "literal broken for {name:?}: {path_line}"
            );
        }
    }

    #[test]
    fn dollar_is_escaped_against_expansion() {
        assert_eq!(escape_output_name("$profile").unwrap(), "`$profile");
    }

    #[test]
    fn control_characters_are_rejected() {
        assert!(escape_output_name("evil\nname").is_err());
        assert!(escape_output_name("evil\rname").is_err());
        assert!(escape_output_name("evil\0name").is_err());
        assert!(escape_output_name("").is_err());
    }
}
