//! Stack frames and symbol-line parsing.

/// One captured frame: the return address and its raw symbol line.
///
/// Built fresh on every capture and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    pub address: usize,
    pub symbol: String,
}

impl StackFrame {
    pub fn new(address: usize, symbol: impl Into<String>) -> Self {
        Self {
            address,
            symbol: symbol.into(),
        }
    }

    /// Split the symbol line into its parts, if it has the
    /// `module(name+offset)` shape.
    pub fn parse(&self) -> Option<SymbolLine<'_>> {
        SymbolLine::parse(&self.symbol)
    }
}

/// Borrowed pieces of a `module(mangled+offset) [addr]` symbol line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolLine<'a> {
    pub module: &'a str,
    pub mangled: &'a str,
    pub offset: &'a str,
}

impl<'a> SymbolLine<'a> {
    /// Locate the first `(`, then the first `+` after it, then the first `)`
    /// after that `+`. All three must be present in that order.
    ///
    /// The mangled name may be empty (`./bin(+0x10)`), which is common for
    /// static functions.
    pub fn parse(line: &'a str) -> Option<Self> {
        let open = line.find('(')?;
        let plus = open + 1 + line[open + 1..].find('+')?;
        let close = plus + 1 + line[plus + 1..].find(')')?;
        Some(SymbolLine {
            module: &line[..open],
            mangled: &line[open + 1..plus],
            offset: &line[plus + 1..close],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_glibc_line() {
        let s = SymbolLine::parse("./zoomdb(_ZN6zoomdb4mainE+0x1c) [0x55d0c0de]").unwrap();
        assert_eq!(s.module, "./zoomdb");
        assert_eq!(s.mangled, "_ZN6zoomdb4mainE");
        assert_eq!(s.offset, "0x1c");
    }

    #[test]
    fn empty_name_is_still_parsed() {
        let s = SymbolLine::parse("/lib/libc.so.6(+0x29d90) [0x7f00]").unwrap();
        assert_eq!(s.mangled, "");
        assert_eq!(s.offset, "0x29d90");
    }

    #[test]
    fn delimiters_must_appear_in_order() {
        assert!(SymbolLine::parse("./zoomdb [0x1234]").is_none());
        assert!(SymbolLine::parse("a+b(c)").is_none());
        assert!(SymbolLine::parse("a(b)+c").is_none());
        assert!(SymbolLine::parse("a(b+c").is_none());
        assert!(SymbolLine::parse("").is_none());
    }

    #[test]
    fn first_plus_after_paren_wins() {
        let s = SymbolLine::parse("m(op+plus+0x8)").unwrap();
        assert_eq!(s.mangled, "op");
        assert_eq!(s.offset, "plus+0x8");
    }

    #[test]
    fn frame_parse_borrows_symbol() {
        let f = StackFrame::new(0x10, "bin(f+0x4) [0x10]");
        assert_eq!(f.parse().map(|s| s.mangled), Some("f"));
    }
}
