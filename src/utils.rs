use regex::Regex;
use std::sync::OnceLock;

/// Whitespace a number may be padded with: ASCII space, tab, line feed,
/// carriage return, vertical tab and form feed.
fn is_number_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Strips the bytes tag contents are trimmed of: ASCII space, tab, line
/// feed, carriage return, NUL and vertical tab. Other Unicode spaces stay.
pub fn trim_contents(value: &str) -> &str {
    value.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'))
}

/// Returns true for decimal number strings: optional surrounding ASCII whitespace,
/// optional sign, digits with an optional fraction (or a bare `.5` fraction)
/// and an optional exponent. `inf`, `NaN` and hex are rejected.
pub fn is_numeric(value: &str) -> bool {
    static NUMERIC_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = NUMERIC_REGEX.get_or_init(|| {
        Regex::new(r"^[ \t\n\r\x0B\x0C]*[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$").unwrap()
    });
    re.is_match(value)
}

/// Parses a string accepted by [`is_numeric`]. Exponents past the `f64`
/// range come back infinite, which every range check rejects.
pub fn parse_number(value: &str) -> Option<f64> {
    if !is_numeric(value) {
        return None;
    }
    value.trim_matches(is_number_space).parse::<f64>().ok()
}

/// Reads the leading integer of a string the way a lenient integer cast does:
/// leading whitespace, an optional sign, then as many digits as are present.
/// Anything unreadable is 0; overflow saturates.
pub fn int_prefix(value: &str) -> i64 {
    let s = value.trim_start_matches(is_number_space);
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut n: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(b - b'0');
        n = match n.checked_mul(10).and_then(|n| n.checked_add(d)) {
            Some(n) => n,
            None => return if negative { i64::MIN } else { i64::MAX },
        };
    }
    if negative { -n } else { n }
}

/// Escapes `& < > " '` for HTML text and attribute values.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes text for a double-quoted JavaScript string literal that sits
/// inside an HTML `<script>` element.
pub fn escape_js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\x3C"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

/// Joins a multi-line template rendering into one line, dropping the
/// indentation of each source line.
pub fn single_line(rendered: &str) -> String {
    rendered
        .lines()
        .map(str::trim)
        .flat_map(str::chars)
        .filter(|c| *c != '\r')
        .collect()
}
