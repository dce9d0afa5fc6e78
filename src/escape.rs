/// Escape-sequence introducer.
pub const ESC: char = '\x1b';

/// SGR terminator, the only sequence end this crate recognises.
pub const SGR_END: char = 'm';

/// Full attribute reset.
pub const RESET: &str = "\x1b[0m";

/// The last escape sequence on `line`, which the next bubble row re-opens.
///
/// Returns the text from the last introducer through the first `m` after it,
/// or through the end of the line when no terminator follows. A sequence that
/// was opened and later terminated still counts as the active one. Lines with
/// no introducer yield an empty string.
pub fn open_escape(line: &str) -> &str {
    let Some(start) = line.rfind(ESC) else {
        return "";
    };
    match line[start..].find(SGR_END) {
        Some(end) => &line[start..start + end + SGR_END.len_utf8()],
        None => &line[start..],
    }
}
