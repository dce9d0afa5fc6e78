use crate::error::Error;

/// A named set of frame glyphs.
///
/// The first nine slots form a 3x3 box. `pointer` is substituted into the
/// figure so its speech connector matches the bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderStyle {
    pub name: &'static str,

    pub top_left: &'static str,
    pub top: &'static str,
    pub top_right: &'static str,

    pub left: &'static str,
    pub middle: &'static str,
    pub right: &'static str,

    pub bottom_left: &'static str,
    pub bottom: &'static str,
    pub bottom_right: &'static str,

    pub pointer: &'static str,
}

impl BorderStyle {
    const fn new(name: &'static str, g: [&'static str; 10]) -> Self {
        Self {
            name,
            top_left: g[0],
            top: g[1],
            top_right: g[2],
            left: g[3],
            middle: g[4],
            right: g[5],
            bottom_left: g[6],
            bottom: g[7],
            bottom_right: g[8],
            pointer: g[9],
        }
    }
}

/// Style used when none is requested.
pub const DEFAULT: &str = "unicode";

/// Default style when invoked as `tewithink`.
pub const THINK: &str = "think";

/// Catalog, kept sorted by name.
#[rustfmt::skip]
static STYLES: [BorderStyle; 6] = [
    BorderStyle::new("classicish", [
        " ", "_", " ",
        "<", " ", ">",
        " ", "-", " ",
        "\\",
    ]),
    BorderStyle::new("rounded", [
        "╭", "─", "╮",
        "│", " ", "│",
        "╰", "─", "╯",
        "╲",
    ]),
    BorderStyle::new("say", [
        " ", "_", " ",
        "|", " ", "|",
        " ", "─", " ",
        "\\",
    ]),
    BorderStyle::new("thick", [
        "┏", "━", "┓",
        "┃", " ", "┃",
        "┗", "━", "┛",
        "╲",
    ]),
    BorderStyle::new("think", [
        " ", "_", " ",
        "(", " ", ")",
        " ", "─", " ",
        "o",
    ]),
    BorderStyle::new("unicode", [
        "┌", "─", "┐",
        "│", " ", "│",
        "└", "─", "┘",
        "╲",
    ]),
];

/// The style called `name`.
pub fn lookup(name: &str) -> Result<&'static BorderStyle, Error> {
    STYLES
        .binary_search_by(|s| s.name.cmp(name))
        .map(|i| &STYLES[i])
        .map_err(|_| Error::UnknownStyle(name.to_owned()))
}

/// All style names in sorted order.
pub fn names() -> impl Iterator<Item = &'static str> {
    STYLES.iter().map(|s| s.name)
}

/// Every style, sorted by name.
pub fn all() -> &'static [BorderStyle] {
    &STYLES
}
