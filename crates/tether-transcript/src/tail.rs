use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Number of trailing transcript lines inspected for the session id.
pub const TAIL_LINES: usize = 200;

const CHUNK_SIZE: u64 = 8 * 1024; // 8KB

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("failed to read transcript {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read the last `max_lines` lines of the file at `path`.
///
/// Chunks are read backward from end-of-file until enough line breaks have
/// been seen, so the cost depends on the size of the window, not the file.
/// A trailing newline terminates the last line and does not produce an
/// extra empty line. Invalid UTF-8 is decoded lossily.
pub fn read_tail_lines(path: &Path, max_lines: usize) -> Result<Vec<String>, TranscriptError> {
    if max_lines == 0 {
        return Ok(Vec::new());
    }
    let io_err = |source: std::io::Error| TranscriptError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_err)?;
    let file_size = file.metadata().map_err(io_err)?.len();

    let mut pos = file_size;
    // Chunks in reverse file order; joined once after the scan
    let mut chunks: Vec<Vec<u8>> = Vec::new();
    let mut breaks = 0usize;
    let mut trailing_newline = false;

    while pos > 0 {
        let read_len = CHUNK_SIZE.min(pos);
        pos -= read_len;
        file.seek(SeekFrom::Start(pos)).map_err(io_err)?;
        let mut chunk = vec![0u8; read_len as usize];
        file.read_exact(&mut chunk).map_err(io_err)?;

        if chunks.is_empty() {
            trailing_newline = chunk.last() == Some(&b'\n');
        }
        breaks += chunk.iter().filter(|&&b| b == b'\n').count();
        chunks.push(chunk);

        // Line breaks between lines, not counting the one that ends the file
        if breaks - usize::from(trailing_newline) >= max_lines {
            break;
        }
    }

    if chunks.is_empty() {
        return Ok(Vec::new());
    }
    chunks.reverse();
    let buf = chunks.concat();

    let text = String::from_utf8_lossy(&buf);
    let body = text.strip_suffix('\n').unwrap_or(&text[..]);
    let segments: Vec<&str> = body.split('\n').collect();
    let start = segments.len().saturating_sub(max_lines);

    tracing::debug!(
        path = %path.display(),
        file_size,
        window_bytes = buf.len(),
        lines = segments.len() - start,
        "read transcript tail"
    );

    Ok(segments[start..]
        .iter()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect())
}

/// Whether `needle` occurs in any of the last `max_lines` lines of `path`.
pub fn tail_contains(path: &Path, needle: &str, max_lines: usize) -> Result<bool, TranscriptError> {
    let lines = read_tail_lines(path, max_lines)?;
    Ok(lines.iter().any(|line| line.contains(needle)))
}
