use crate::models::AnalysisResult;

/// Bytes inspected when deciding whether an upload is UTF-8 text.
const ENCODING_PROBE_LEN: usize = 2048;

pub const EMPTY_FILENAME: &str = "No File";

/// Counts lines, words, bytes and characters of an uploaded file.
///
/// Lines are `\n`-terminated segments plus a trailing unterminated one.
/// Files that fail the UTF-8 probe are treated as binary and report zero
/// words and characters.
pub fn word_count(contents: &[u8], filename: &str, mode: &str) -> AnalysisResult {
    let is_text = looks_like_utf8(contents);

    let mut lines = 0u64;
    let mut words = 0u64;
    for line in contents.split_inclusive(|&byte| byte == b'\n') {
        lines += 1;
        if is_text {
            words += count_words(line);
        }
    }

    let chars = if is_text {
        String::from_utf8_lossy(contents).chars().count() as u64
    } else {
        0
    };

    AnalysisResult {
        mode: mode.to_string(),
        filename: filename.to_string(),
        lines,
        words,
        bytes: contents.len() as u64,
        chars,
    }
}

pub fn word_count_empty(mode: &str) -> AnalysisResult {
    AnalysisResult {
        mode: mode.to_string(),
        filename: EMPTY_FILENAME.to_string(),
        lines: 0,
        words: 0,
        bytes: 0,
        chars: 0,
    }
}

fn looks_like_utf8(contents: &[u8]) -> bool {
    let probe = &contents[..contents.len().min(ENCODING_PROBE_LEN)];
    match std::str::from_utf8(probe) {
        Ok(_) => true,
        // a multi-byte sequence cut by the probe boundary still counts as text;
        // the legacy service called such files binary
        Err(err) => err.error_len().is_none() && probe.len() == ENCODING_PROBE_LEN,
    }
}

fn count_words(line: &[u8]) -> u64 {
    line.split(|&byte| is_separator(byte))
        .filter(|word| !word.is_empty())
        .count() as u64
}

fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}
