use std::io::{self, Read};

/// Positional arguments joined by spaces, one entry per embedded line.
pub fn split_args(args: &[String]) -> Vec<String> {
    args.join(" ").split('\n').map(str::to_owned).collect()
}

/// All of `r` minus one trailing line break, one entry per line.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_text(mut r: impl Read) -> io::Result<Vec<String>> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;
    let text = String::from_utf8_lossy(&buf);
    let text = text.strip_suffix('\n').unwrap_or(&text);
    Ok(text.split('\n').map(str::to_owned).collect())
}
