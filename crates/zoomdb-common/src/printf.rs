//! printf-style message formatting.
//!
//! Error templates throughout ZoomDB are written with C conversion
//! specifiers (`%s`, `%d`, `%lld`, `%zu`, `%.2f`, ...). Arguments travel as
//! a packaged slice of [`Arg`] values, so the same list can be forwarded
//! from one constructor to another without re-collecting it.
//!
//! # Rendering
//!
//! [`snprintf`] is the primitive: it writes as much as fits into a byte
//! buffer and always reports the full length the output needs, exactly like
//! C `snprintf`. [`vformat`] drives it:
//!
//! ```text
//! size = max(2 * template.len(), 1)
//! loop:
//!     needed = snprintf(buf[size], template, args)
//!     needed <  size  → done, buf[..needed] is the message
//!     needed >= size  → size = needed + 1, retry
//! ```
//!
//! The second attempt is sized from the first attempt's report, so at most
//! two passes are ever made and nothing is truncated.
//!
//! # Supported syntax
//!
//! `%[flags][width][.precision][length]conversion`
//!
//! | Part       | Accepted                                        |
//! |------------|-------------------------------------------------|
//! | flags      | `-` `+` space `0` `#`                           |
//! | width      | digits or `*` (taken from the argument list)    |
//! | precision  | `.digits` or `.*`                               |
//! | length     | `hh h l ll L q j z t` (parsed and ignored)      |
//! | conversion | `d i u o x X c s f F e E g G p %`               |
//!
//! # Usage
//!
//! ```
//! use zoomdb_common::sformat;
//!
//! assert_eq!(sformat!("%d-%s", 42, "ok"), "42-ok");
//! assert_eq!(sformat!("%-6s|%05.1f", "cost", 3.14159), "cost  |003.1");
//! ```

use core::fmt;

use crate::types::TypeId;

/// One formatter argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a> {
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(&'a str),
    Ptr(usize),
}

macro_rules! impl_arg_from {
    ($variant:ident as $target:ty: $($t:ty),*) => {
        $(
            impl<'a> From<$t> for Arg<'a> {
                #[inline]
                fn from(v: $t) -> Self {
                    Arg::$variant(v as $target)
                }
            }
        )*
    };
}

impl_arg_from!(Int as i64: i8, i16, i32, i64, isize);
impl_arg_from!(UInt as u64: u8, u16, u32, u64, usize);
impl_arg_from!(Float as f64: f32, f64);

impl<'a> From<bool> for Arg<'a> {
    fn from(v: bool) -> Self {
        Arg::Int(v as i64)
    }
}

impl<'a> From<char> for Arg<'a> {
    fn from(v: char) -> Self {
        Arg::Char(v)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(v: &'a str) -> Self {
        Arg::Str(v)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(v: &'a String) -> Self {
        Arg::Str(v.as_str())
    }
}

impl<'a> From<TypeId> for Arg<'a> {
    fn from(v: TypeId) -> Self {
        Arg::Str(v.name())
    }
}

impl<'a, T> From<*const T> for Arg<'a> {
    fn from(v: *const T) -> Self {
        Arg::Ptr(v as usize)
    }
}

impl<'a, T> From<*mut T> for Arg<'a> {
    fn from(v: *mut T) -> Self {
        Arg::Ptr(v as usize)
    }
}

impl Arg<'_> {
    fn as_i64(&self) -> i64 {
        match *self {
            Arg::Int(v) => v,
            Arg::UInt(v) => v as i64,
            Arg::Float(v) => v as i64,
            Arg::Char(c) => c as i64,
            Arg::Ptr(p) => p as i64,
            Arg::Str(_) => 0,
        }
    }

    /// Two's-complement view, as C reinterprets a signed value under `%u`/`%x`.
    fn as_u64(&self) -> u64 {
        match *self {
            Arg::UInt(v) => v,
            Arg::Ptr(p) => p as u64,
            _ => self.as_i64() as u64,
        }
    }

    fn signed_parts(&self) -> (bool, u64) {
        match *self {
            Arg::UInt(v) => (false, v),
            Arg::Ptr(p) => (false, p as u64),
            _ => {
                let v = self.as_i64();
                (v < 0, v.unsigned_abs())
            }
        }
    }

    fn as_f64(&self) -> f64 {
        match *self {
            Arg::Float(v) => v,
            Arg::Int(v) => v as f64,
            Arg::UInt(v) => v as f64,
            Arg::Char(c) => c as u32 as f64,
            Arg::Ptr(p) => p as f64,
            Arg::Str(_) => 0.0,
        }
    }

    fn as_char(&self) -> char {
        match *self {
            Arg::Char(c) => c,
            _ => char::from_u32(self.as_u64() as u32).unwrap_or(char::REPLACEMENT_CHARACTER),
        }
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Arg::Int(v) => write!(f, "{}", v),
            Arg::UInt(v) => write!(f, "{}", v),
            Arg::Float(v) => write!(f, "{}", v),
            Arg::Char(c) => write!(f, "{}", c),
            Arg::Str(s) => f.write_str(s),
            Arg::Ptr(p) => write!(f, "{:#x}", p),
        }
    }
}

// ── Public API ────────────────────────────────────────────────────

/// Render `template` with `args`.
///
/// Prefer the [`sformat!`](crate::sformat) macro, which packages the
/// arguments for you.
#[inline]
pub fn format(template: &str, args: &[Arg<'_>]) -> String {
    vformat(template, args)
}

/// Render `template` with an already-packaged argument list.
pub fn vformat(template: &str, args: &[Arg<'_>]) -> String {
    let mut size = template.len().saturating_mul(2).max(1);
    loop {
        let mut buf = vec![0u8; size];
        let needed = snprintf(&mut buf, template, args);
        if needed >= size {
            size = needed + 1;
            continue;
        }
        buf.truncate(needed);
        return match String::from_utf8(buf) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        };
    }
}

/// Bounded render into `buf`.
///
/// Writes at most `buf.len() - 1` bytes followed by a NUL terminator and
/// returns the number of bytes the complete output needs, not counting the
/// terminator. A return value `>= buf.len()` means the output was cut short.
/// An empty `buf` receives nothing and only the length is computed.
pub fn snprintf(buf: &mut [u8], template: &str, args: &[Arg<'_>]) -> usize {
    let mut out = Sink { buf, len: 0 };
    render(&mut out, template, args);
    out.finish()
}

/// Package arguments and render a printf-style template.
///
/// ```
/// use zoomdb_common::sformat;
/// assert_eq!(sformat!("%s has %zu rows", "users", 3usize), "users has 3 rows");
/// ```
#[macro_export]
macro_rules! sformat {
    ($template:expr $(,)?) => {
        $crate::printf::format($template, &[])
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::printf::format($template, &[$($crate::printf::Arg::from($arg)),+])
    };
}

// ── Output sink ───────────────────────────────────────────────────

struct Sink<'b> {
    buf: &'b mut [u8],
    /// Bytes the full output needs so far; may exceed the buffer.
    len: usize,
}

impl Sink<'_> {
    fn push(&mut self, bytes: &[u8]) {
        let cap = self.buf.len().saturating_sub(1);
        if self.len < cap {
            let n = bytes.len().min(cap - self.len);
            self.buf[self.len..self.len + n].copy_from_slice(&bytes[..n]);
        }
        self.len = self.len.saturating_add(bytes.len());
    }

    fn push_str(&mut self, s: &str) {
        self.push(s.as_bytes());
    }

    fn fill(&mut self, byte: u8, count: usize) {
        let cap = self.buf.len().saturating_sub(1);
        let room = cap.saturating_sub(self.len).min(count);
        if room > 0 {
            self.buf[self.len..self.len + room].fill(byte);
        }
        self.len = self.len.saturating_add(count);
    }

    fn finish(self) -> usize {
        if let Some(last) = self.buf.len().checked_sub(1) {
            self.buf[self.len.min(last)] = 0;
        }
        self.len
    }
}

// ── Template walking ──────────────────────────────────────────────

/// Largest accepted width or precision. C `snprintf` fails with
/// `EOVERFLOW` past `INT_MAX`; here the offending specifier is copied
/// through verbatim and its argument is consumed.
const MAX_FIELD: usize = i32::MAX as usize;

#[derive(Default)]
struct Spec {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    alt: bool,
    width: usize,
    precision: Option<usize>,
}

fn render(out: &mut Sink<'_>, template: &str, args: &[Arg<'_>]) {
    let bytes = template.as_bytes();
    let mut args = args.iter();
    let mut literal = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        out.push(&bytes[literal..i]);
        let start = i;
        i += 1;

        if bytes.get(i) == Some(&b'%') {
            out.push(b"%");
            i += 1;
            literal = i;
            continue;
        }

        let mut spec = Spec::default();
        while let Some(&b) = bytes.get(i) {
            match b {
                b'-' => spec.left = true,
                b'+' => spec.plus = true,
                b' ' => spec.space = true,
                b'0' => spec.zero = true,
                b'#' => spec.alt = true,
                _ => break,
            }
            i += 1;
        }

        let mut overflow = false;

        if bytes.get(i) == Some(&b'*') {
            i += 1;
            let w = args.next().map_or(0, Arg::as_i64);
            if w < 0 {
                spec.left = true;
            }
            match field_size(w.unsigned_abs()) {
                Some(w) => spec.width = w,
                None => overflow = true,
            }
        } else {
            match field_size(parse_digits(bytes, &mut i)) {
                Some(w) => spec.width = w,
                None => overflow = true,
            }
        }

        if bytes.get(i) == Some(&b'.') {
            i += 1;
            if bytes.get(i) == Some(&b'*') {
                i += 1;
                // A negative precision counts as omitted.
                let p = args.next().map_or(0, Arg::as_i64);
                if p >= 0 {
                    match field_size(p.unsigned_abs()) {
                        Some(p) => spec.precision = Some(p),
                        None => overflow = true,
                    }
                }
            } else {
                match field_size(parse_digits(bytes, &mut i)) {
                    Some(p) => spec.precision = Some(p),
                    None => overflow = true,
                }
            }
        }

        while matches!(bytes.get(i), Some(b'h' | b'l' | b'L' | b'q' | b'j' | b'z' | b't')) {
            i += 1;
        }

        let Some(conv) = template[i..].chars().next() else {
            // Dangling specifier at the end of the template.
            out.push(&bytes[start..]);
            literal = bytes.len();
            break;
        };
        let end = i + conv.len_utf8();

        match conv {
            'd' | 'i' | 'u' | 'o' | 'x' | 'X' | 'c' | 's' | 'f' | 'F' | 'e' | 'E' | 'g' | 'G'
            | 'p' => match args.next() {
                Some(arg) if !overflow => write_conversion(out, &spec, conv, arg),
                _ => out.push(&bytes[start..end]),
            },
            _ => out.push(&bytes[start..end]),
        }

        i = end;
        literal = i;
    }

    out.push(&bytes[literal.min(bytes.len())..]);
}

fn parse_digits(bytes: &[u8], i: &mut usize) -> u64 {
    let mut n: u64 = 0;
    while let Some(d) = bytes.get(*i).filter(|b| b.is_ascii_digit()) {
        n = n.saturating_mul(10).saturating_add(u64::from(d - b'0'));
        *i += 1;
    }
    n
}

/// Width or precision as a size, or `None` past `MAX_FIELD`.
fn field_size(n: u64) -> Option<usize> {
    if n > MAX_FIELD as u64 {
        None
    } else {
        usize::try_from(n).ok()
    }
}

fn write_conversion(out: &mut Sink<'_>, spec: &Spec, conv: char, arg: &Arg<'_>) {
    // A string handed to a numeric conversion is printed as a string
    // rather than reinterpreted.
    if let Arg::Str(s) = arg {
        if conv != 's' {
            return write_str(out, spec, s);
        }
    }

    match conv {
        'd' | 'i' => {
            let (neg, mag) = arg.signed_parts();
            write_int(out, spec, neg, mag, 10, false, true);
        }
        'u' => write_int(out, spec, false, arg.as_u64(), 10, false, false),
        'o' => write_int(out, spec, false, arg.as_u64(), 8, false, false),
        'x' => write_int(out, spec, false, arg.as_u64(), 16, false, false),
        'X' => write_int(out, spec, false, arg.as_u64(), 16, true, false),
        'c' => {
            let mut tmp = [0u8; 4];
            let s = arg.as_char().encode_utf8(&mut tmp);
            write_padded(out, spec.width, spec.left, false, "", s);
        }
        's' => match arg {
            Arg::Str(s) => write_str(out, spec, s),
            other => write_str(out, spec, &other.to_string()),
        },
        'p' => {
            let p = arg.as_u64();
            if p == 0 {
                write_padded(out, spec.width, spec.left, false, "", "(nil)");
            } else {
                write_padded(out, spec.width, spec.left, false, "0x", &format!("{:x}", p));
            }
        }
        _ => write_float(out, spec, conv, arg.as_f64()),
    }
}

fn write_padded(out: &mut Sink<'_>, width: usize, left: bool, zero: bool, head: &str, body: &str) {
    let fill = width.saturating_sub(head.len() + body.len());
    if left {
        out.push_str(head);
        out.push_str(body);
        out.fill(b' ', fill);
    } else if zero {
        out.push_str(head);
        out.fill(b'0', fill);
        out.push_str(body);
    } else {
        out.fill(b' ', fill);
        out.push_str(head);
        out.push_str(body);
    }
}

fn write_str(out: &mut Sink<'_>, spec: &Spec, s: &str) {
    let s = match spec.precision {
        Some(p) if p < s.len() => {
            let mut end = p;
            while !s.is_char_boundary(end) {
                end -= 1;
            }
            &s[..end]
        }
        _ => s,
    };
    write_padded(out, spec.width, spec.left, false, "", s);
}

fn write_int(
    out: &mut Sink<'_>,
    spec: &Spec,
    neg: bool,
    mag: u64,
    base: u32,
    upper: bool,
    signed: bool,
) {
    let mut digits = match (base, upper) {
        (8, _) => format!("{:o}", mag),
        (16, false) => format!("{:x}", mag),
        (16, true) => format!("{:X}", mag),
        _ => mag.to_string(),
    };

    if spec.precision == Some(0) && mag == 0 {
        digits.clear();
    }
    // Leading zeros demanded by the precision, written straight to the sink.
    let mut lead = spec.precision.map_or(0, |p| p.saturating_sub(digits.len()));
    if spec.alt && base == 8 && lead == 0 && !digits.starts_with('0') {
        lead = 1;
    }

    let mut head = String::new();
    if neg {
        head.push('-');
    } else if signed && spec.plus {
        head.push('+');
    } else if signed && spec.space {
        head.push(' ');
    }
    if spec.alt && base == 16 && mag != 0 {
        head.push_str(if upper { "0X" } else { "0x" });
    }

    let used = head.len().saturating_add(lead).saturating_add(digits.len());
    let fill = spec.width.saturating_sub(used);
    let zero = spec.zero && !spec.left && spec.precision.is_none();

    if spec.left {
        out.push_str(&head);
        out.fill(b'0', lead);
        out.push_str(&digits);
        out.fill(b' ', fill);
    } else if zero {
        out.push_str(&head);
        out.fill(b'0', fill.saturating_add(lead));
        out.push_str(&digits);
    } else {
        out.fill(b' ', fill);
        out.push_str(&head);
        out.fill(b'0', lead);
        out.push_str(&digits);
    }
}

fn write_float(out: &mut Sink<'_>, spec: &Spec, conv: char, v: f64) {
    let upper = conv.is_ascii_uppercase();
    let sign = if v.is_sign_negative() && !v.is_nan() {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    };
    let a = v.abs();

    if !a.is_finite() {
        let body = match (a.is_nan(), upper) {
            (true, false) => "nan",
            (true, true) => "NAN",
            (false, false) => "inf",
            (false, true) => "INF",
        };
        return write_padded(out, spec.width, spec.left, false, sign, body);
    }

    let prec = spec.precision.unwrap_or(6);
    let mut body = match conv.to_ascii_lowercase() {
        'f' => fixed(a, prec, spec.alt),
        'e' => exponent(a, prec, spec.alt),
        _ => general(a, prec, spec.alt),
    };
    if upper {
        body.make_ascii_uppercase();
    }
    write_padded(out, spec.width, spec.left, spec.zero && !spec.left, sign, &body);
}

fn fixed(a: f64, prec: usize, alt: bool) -> String {
    let mut s = format!("{:.*}", prec, a);
    if alt && prec == 0 {
        s.push('.');
    }
    s
}

/// `d.ddde±XX`: Rust prints `1.5e2`, C wants `1.5e+02`.
fn exponent(a: f64, prec: usize, alt: bool) -> String {
    let raw = format!("{:.*e}", prec, a);
    let (mantissa, exp) = split_exponent(&raw);
    let mut s = mantissa.to_string();
    if alt && prec == 0 {
        s.push('.');
    }
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", s, sign, exp.unsigned_abs())
}

fn general(a: f64, prec: usize, alt: bool) -> String {
    let p = prec.max(1);
    let x = if a == 0.0 {
        0
    } else {
        split_exponent(&format!("{:.*e}", p - 1, a)).1
    };

    let s = if (x as i64) < p as i64 && x >= -4 {
        fixed(a, (p as i64 - 1 - x as i64) as usize, alt)
    } else {
        exponent(a, p - 1, alt)
    };

    if alt {
        return s;
    }
    match s.find('e') {
        Some(pos) => format!("{}{}", strip_fraction_zeros(&s[..pos]), &s[pos..]),
        None => strip_fraction_zeros(&s).to_string(),
    }
}

fn split_exponent(raw: &str) -> (&str, i32) {
    match raw.split_once('e') {
        Some((m, e)) => (m, e.parse().unwrap_or(0)),
        None => (raw, 0),
    }
}

fn strip_fraction_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
