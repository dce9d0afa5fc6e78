//! Cowfile templates.
//!
//! A cowfile is a figure wrapped in authoring metadata, e.g.
//!
//! ```text
//! $the_cow = <<EOC;
//!     $thoughts   ^__^
//!      $thoughts  (eyes)\_______
//!                 (__)\       )\/\
//!                  tongue ||----w |
//!                     ||     ||
//! EOC
//! ```
//!
//! Metadata lines are dropped and the remaining lines have their tokens
//! substituted.

/// How a template line is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Content,
    /// Heredoc opener or terminator.
    Directive,
    Comment,
}

pub fn classify(line: &str) -> LineKind {
    if line.starts_with('#') {
        LineKind::Comment
    } else if line.starts_with("$the_cow") || line.starts_with("EOC") {
        LineKind::Directive
    } else {
        LineKind::Content
    }
}

/// Replaces every token in `line` in a single left-to-right pass.
///
/// Replacement text is never scanned again, so `eyes` set to `"tongue"`
/// prints the word `tongue`.
pub fn substitute(line: &str, eyes: &str, tongue: &str, pointer: &str) -> String {
    let tokens = [
        ("$thoughts", pointer),
        ("\\\\", "\\"),
        ("\\@", "@"),
        ("eyes", eyes),
        ("tongue", tongue),
    ];

    let mut o = String::with_capacity(line.len());
    let mut rest = line;
    'scan: while let Some(c) = rest.chars().next() {
        for (token, value) in tokens {
            if let Some(tail) = rest.strip_prefix(token) {
                o.push_str(value);
                rest = tail;
                continue 'scan;
            }
        }
        o.push(c);
        rest = &rest[c.len_utf8()..];
    }
    o
}

/// Fills `template` and returns the figure, each line preceded by a line break.
pub fn fill(template: &str, eyes: &str, tongue: &str, pointer: &str) -> String {
    let mut o = String::with_capacity(template.len());
    for line in template
        .split('\n')
        .filter(|line| classify(line) == LineKind::Content)
    {
        o.push('\n');
        o.push_str(&substitute(line, eyes, tongue, pointer));
    }
    o
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn classify_lines() {
        assert_eq!(classify("$the_cow = <<EOC;"), LineKind::Directive);
        assert_eq!(classify("$the_cow = <<\"EOC\";"), LineKind::Directive);
        assert_eq!(classify("EOC"), LineKind::Directive);
        assert_eq!(classify("# by someone"), LineKind::Comment);
        assert_eq!(classify(""), LineKind::Content);
        assert_eq!(classify("  # indented is content"), LineKind::Content);
        assert_eq!(classify("   $thoughts  ^__^"), LineKind::Content);
    }

    #[test]
    fn substitute_all_tokens() {
        assert_eq!(
            substitute("$thoughts eyes tongue \\\\ \\@", "oo", "U ", "╲"),
            "╲ oo U  \\ @"
        );
    }

    #[test]
    fn substitute_is_single_pass() {
        assert_eq!(substitute("(eyes)", "tongue", "XX", "\\"), "(tongue)");
        assert_eq!(substitute("eyes", "$thoughts", "", "o"), "$thoughts");
        // the collapsed backslash does not pair with the following "@"
        assert_eq!(substitute("\\\\@", "", "", ""), "\\@");
    }

    #[test]
    fn substitute_without_tokens_is_identity() {
        assert_eq!(substitute("  (__)  漢 ", "oo", "", ""), "  (__)  漢 ");
        assert_eq!(substitute("", "oo", "", ""), "");
    }

    #[test]
    fn fill_drops_metadata() {
        let template = "# one\n# two\n$the_cow = <<EOC;\n$thoughts eyes tongue \\\\ \\@\nEOC\n";
        assert_eq!(fill(template, "oo", "", "\\"), "\n\\ oo  \\ @\n");
    }

    #[test]
    fn fill_keeps_order() {
        let template = "$the_cow = <<EOC;\n  $thoughts\n   $thoughts\n  (eyes)\n   tongue\nEOC";
        assert_eq!(
            fill(template, "^^", "U", "o"),
            "\n  o\n   o\n  (^^)\n   U"
        );
    }

    #[test]
    fn fill_empty_template() {
        assert_eq!(fill("", "oo", "", "\\"), "\n");
        assert_eq!(fill("EOC", "oo", "", "\\"), "");
    }

    #[test]
    fn bundled_rabbit() {
        let template = include_str!("../cows/tes.cow");
        assert_eq!(
            fill(template, "oo", "  ", "╲"),
            "\n   ╲   (\\_/)\n    ╲  (oo)\n       c(\")  (\")\n"
        );
    }
}
