use std::{io::Read, io::Write, path::PathBuf};

use base64::Engine;
use flate2::{write::ZlibEncoder, Compression};

/// Compresses a payload and encodes it as transport-safe text.
///
/// The payload is deflate-compressed at the highest compression level (the
/// resulting zlib stream carries its usual 2-byte header, which the generated
/// dropper strips before handing the body to a raw DeflateStream on the
/// target), then base64-encoded with the standard padded alphabet so the
/// result can be embedded inside a quoted string literal.
///
/// The transform is pure and deterministic: the same payload always yields
/// the identical encoded string. It operates on the whole buffer at once,
/// with no chunking.
///
/// # Arguments
/// * `payload` - The raw payload bytes to compress and encode.
///
/// # Returns
/// The base64 text representation of the compressed payload.
///
/// # Errors
/// Returns an error if the compressor fails to finalize the stream.
pub fn compress_and_encode(payload: &[u8]) -> crate::error::Result<String> {
    let mut zlib_encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    zlib_encoder.write_all(payload)?;
    let compressed = zlib_encoder.finish()?;

    Ok(base64::engine::general_purpose::STANDARD.encode(compressed))
}

/// Reads an entire file into memory as raw bytes.
///
/// Loads the complete file content into a byte vector. This function reads
/// the entire file at once, making it suitable for files that fit comfortably
/// in memory; the pipeline never streams or chunks its input.
///
/// # Arguments
/// * `filepath` - Path to the payload file to read.
///
/// # Returns
/// A vector of bytes containing the complete unmodified file contents.
///
/// # Errors
/// Returns an error carrying the path if the file cannot be opened or read.
pub fn buffered_read_file(filepath: &PathBuf) -> crate::error::Result<Vec<u8>> {
    let mut opened_file = std::fs::File::open(filepath)
        .map_err(|error| crate::error::TypedropError::io_error(filepath, error))?;
    let mut file_buffer: Vec<u8> = Vec::new();
    opened_file
        .read_to_end(&mut file_buffer)
        .map_err(|error| crate::error::TypedropError::io_error(filepath, error))?;

    Ok(file_buffer)
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use base64::Engine;
    use flate2::read::{DeflateDecoder, ZlibDecoder};

    use super::compress_and_encode;

    fn decode(encoded: &str) -> Vec<u8> {
        base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .unwrap()
    }

    #[test]
    fn round_trips_through_zlib() {
        let payload: Vec<u8> = (0u8..=255).cycle().take(4096).collect();
        let encoded = compress_and_encode(&payload).unwrap();

        let mut decompressed = Vec::new();
        ZlibDecoder::new(decode(&encoded).as_slice())
            .read_to_end(&mut decompressed)
            .unwrap();

        assert_eq!(decompressed, payload);
    }

    #[test]
    fn round_trips_as_raw_deflate_after_header_skip() {
        // The generated dropper decompresses with a raw DeflateStream after
        // skipping exactly the first 2 bytes of the decoded blob.
        let payload = b"MZ\x90\x00arbitrary binary payload\x00\xff\xfe".to_vec();
        let encoded = compress_and_encode(&payload).unwrap();
        let compressed = decode(&encoded);

        let mut decompressed = Vec::new();
        DeflateDecoder::new(&compressed[2..])
            .read_to_end(&mut decompressed)
            .unwrap();

        assert_eq!(decompressed, payload);
    }

    #[test]
    fn encoding_is_deterministic() {
        let payload = b"the same input always yields identical bytes".to_vec();

        assert_eq!(
            compress_and_encode(&payload).unwrap(),
            compress_and_encode(&payload).unwrap()
        );
    }

    #[test]
    fn empty_payload_is_encodable() {
        let encoded = compress_and_encode(&[]).unwrap();

        let mut decompressed = Vec::new();
        ZlibDecoder::new(decode(&encoded).as_slice())
            .read_to_end(&mut decompressed)
            .unwrap();

        assert!(decompressed.is_empty());
    }
}
