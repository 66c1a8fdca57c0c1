//! printf-style substitution of positional parameters into a template.
//!
//! Rendering never fails. Any mismatch between the template and the supplied
//! parameters is written into the output as a visible marker so the progress
//! line keeps updating even when the caller got the template wrong:
//!
//! | problem                      | output                   |
//! |------------------------------|--------------------------|
//! | wrong type for the verb      | `%!d(str=abc)`           |
//! | unknown verb                 | `%!z(i64=5)`             |
//! | not enough parameters        | `%!d(MISSING)`           |
//! | template ends after `%`      | `%!(NOVERB)`             |
//! | width or precision too large, or a `*` argument that is not an integer | `%!(BADWIDTH)`, `%!(BADPREC)` |
//! | too many parameters          | `%!(EXTRA i64=1, str=x)` |
//!
//! # Examples
//!
//! Width and precision may also be taken from the parameters with `*`, as in
//! `%*d` or `%.*f`. A negative `*` width left-justifies.
//!
//! ```rust
//! use progress_line::{params, render};
//!
//! assert_eq!(render("progress: %d/%d", &params![3, 10]), "progress: 3/10");
//! assert_eq!(render("%5.1f%%", &params![42.0]), " 42.0%");
//! assert_eq!(render("%d", &params!["abc"]), "%!d(str=abc)");
//! ```

use super::Param;
use std::fmt::Write;
use std::iter::Peekable;
use std::str::Chars;

/// Largest width or precision accepted before emitting a marker instead.
const MAX_WIDTH: usize = 1_000_000;

/// Flags, width and precision parsed from a single directive.
#[derive(Debug, Default, Clone, Copy)]
struct Directive {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    alternate: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Render `format` with `params` substituted positionally.
pub fn render(format: &str, params: &[Param]) -> String {
    let mut out = String::with_capacity(format.len() + 16);
    let mut args = params.iter();
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut directive = Directive::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => directive.left = true,
                '+' => directive.plus = true,
                ' ' => directive.space = true,
                '0' => directive.zero = true,
                '#' => directive.alternate = true,
                _ => break,
            }
            chars.next();
        }

        if chars.peek() == Some(&'*') {
            chars.next();
            match star_arg(&mut args) {
                Some(width) if width.unsigned_abs() <= MAX_WIDTH as u64 => {
                    directive.left |= width < 0;
                    directive.width = Some(width.unsigned_abs() as usize);
                }
                _ => out.push_str("%!(BADWIDTH)"),
            }
        } else {
            match take_number(&mut chars) {
                Number::Absent => {}
                Number::Value(width) => directive.width = Some(width),
                Number::TooLarge => out.push_str("%!(BADWIDTH)"),
            }
        }
        if chars.peek() == Some(&'.') {
            chars.next();
            if chars.peek() == Some(&'*') {
                chars.next();
                match star_arg(&mut args) {
                    // A negative precision counts as none.
                    Some(precision) if precision < 0 => {}
                    Some(precision) if precision as u64 <= MAX_WIDTH as u64 => {
                        directive.precision = Some(precision as usize);
                    }
                    _ => out.push_str("%!(BADPREC)"),
                }
            } else {
                match take_number(&mut chars) {
                    Number::Absent => directive.precision = Some(0),
                    Number::Value(precision) => directive.precision = Some(precision),
                    Number::TooLarge => out.push_str("%!(BADPREC)"),
                }
            }
        }

        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }

        match args.next() {
            None => {
                let _ = write!(out, "%!{verb}(MISSING)");
            }
            Some(arg) => match format_arg(verb, &directive, arg) {
                Some(formatted) => out.push_str(&formatted),
                None => {
                    let _ = write!(out, "%!{verb}({}={arg})", arg.type_name());
                }
            },
        }
    }

    let mut extra = args.peekable();
    if extra.peek().is_some() {
        out.push_str("%!(EXTRA ");
        for (i, arg) in extra.enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}={arg}", arg.type_name());
        }
        out.push(')');
    }

    out
}

/// Consume the next parameter as a `*` width or precision.
fn star_arg(args: &mut std::slice::Iter<'_, Param>) -> Option<i64> {
    match args.next()? {
        Param::Int(v) => Some(*v),
        Param::UInt(v) => i64::try_from(*v).ok(),
        _ => None,
    }
}

enum Number {
    Absent,
    Value(usize),
    TooLarge,
}

fn take_number(chars: &mut Peekable<Chars<'_>>) -> Number {
    let mut value: Option<usize> = None;
    let mut too_large = false;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        let next = value.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize);
        too_large |= next > MAX_WIDTH;
        value = Some(next);
    }
    match value {
        None => Number::Absent,
        Some(_) if too_large => Number::TooLarge,
        Some(v) => Number::Value(v),
    }
}

/// Format a single argument, or `None` if the verb does not apply to it.
fn format_arg(verb: char, d: &Directive, arg: &Param) -> Option<String> {
    let formatted = match (verb, arg) {
        ('v', Param::Int(_) | Param::UInt(_) | Param::Float(_)) => {
            return format_arg(if matches!(arg, Param::Float(_)) { 'g' } else { 'd' }, d, arg)
        }
        ('v', Param::Str(_)) => return format_arg('s', d, arg),
        ('v', Param::Char(_)) => return format_arg('c', d, arg),
        ('v', Param::Bool(_)) => return format_arg('t', d, arg),

        ('d', Param::Int(v)) => pad_integer(d, *v < 0, "", &v.unsigned_abs().to_string()),
        ('d', Param::UInt(v)) => pad_integer(d, false, "", &v.to_string()),
        ('d', Param::Char(c)) => pad_integer(d, false, "", &u32::from(*c).to_string()),

        ('x' | 'X' | 'o' | 'b', Param::Int(v)) => {
            let digits = radix_digits(verb, v.unsigned_abs());
            pad_integer(d, *v < 0, radix_prefix(verb, d), &digits)
        }
        ('x' | 'X' | 'o' | 'b', Param::UInt(v)) => {
            pad_integer(d, false, radix_prefix(verb, d), &radix_digits(verb, *v))
        }
        ('x' | 'X', Param::Str(s)) => {
            let hex: String = s
                .bytes()
                .map(|b| if verb == 'x' { format!("{b:02x}") } else { format!("{b:02X}") })
                .collect();
            pad_str(d, &hex)
        }

        ('f' | 'F', Param::Float(v)) => {
            let precision = d.precision.unwrap_or(6);
            float_body(d, *v, format!("{:.*}", precision, v.abs()))
        }
        ('e', Param::Float(v)) => {
            let precision = d.precision.unwrap_or(6);
            float_body(d, *v, exponent_form(&format!("{:.*e}", precision, v.abs())))
        }
        ('g', Param::Float(v)) => float_body(d, *v, general_form(v.abs(), d.precision)),

        ('s', Param::Str(s)) => match d.precision {
            Some(precision) => pad_str(d, &s.chars().take(precision).collect::<String>()),
            None => pad_str(d, s),
        },
        ('q', Param::Str(s)) => pad_str(d, &format!("{s:?}")),
        ('q', Param::Char(c)) => pad_str(d, &format!("{c:?}")),
        ('c', Param::Char(c)) => pad_str(d, &c.to_string()),
        ('c', Param::Int(v)) => pad_str(d, &code_point(u32::try_from(*v).ok()).to_string()),
        ('c', Param::UInt(v)) => pad_str(d, &code_point(u32::try_from(*v).ok()).to_string()),
        ('t', Param::Bool(b)) => pad_str(d, if *b { "true" } else { "false" }),

        _ => return None,
    };
    Some(formatted)
}

fn code_point(value: Option<u32>) -> char {
    value
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn radix_digits(verb: char, value: u64) -> String {
    match verb {
        'x' => format!("{value:x}"),
        'X' => format!("{value:X}"),
        'o' => format!("{value:o}"),
        _ => format!("{value:b}"),
    }
}

fn radix_prefix(verb: char, d: &Directive) -> &'static str {
    if !d.alternate {
        return "";
    }
    match verb {
        'x' => "0x",
        'X' => "0X",
        'o' => "0",
        _ => "0b",
    }
}

fn float_body(d: &Directive, value: f64, body: String) -> String {
    if value.is_nan() {
        return pad_str(d, "NaN");
    }
    if value.is_infinite() {
        // Infinities are padded with spaces even under the `0` flag.
        let spaces = Directive { zero: false, ..*d };
        return pad_number(&spaces, value.is_sign_negative(), "", "Inf");
    }
    pad_number(d, value.is_sign_negative() && value != 0.0, "", &body)
}

/// `%g`: `precision` significant digits (shortest exact form when absent),
/// trailing zeros dropped, exponent form when the exponent is below -4 or at
/// least the precision (6 for the shortest form).
fn general_form(value: f64, precision: Option<usize>) -> String {
    let raw = match precision {
        Some(precision) => format!("{:.*e}", precision.max(1) - 1, value),
        None => format!("{value:e}"),
    };
    let Some((mantissa, exp)) = raw.split_once('e') else {
        return raw;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let mut digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
    }

    let limit = precision.map_or(6, |p| p.max(1) as i32);
    if exp < -4 || exp >= limit {
        let (lead, rest) = digits.split_at(1);
        let sign = if exp < 0 { '-' } else { '+' };
        let fraction = if rest.is_empty() { String::new() } else { format!(".{rest}") };
        return format!("{lead}{fraction}e{sign}{:02}", exp.unsigned_abs());
    }

    if exp < 0 {
        let zeros = "0".repeat(exp.unsigned_abs() as usize - 1);
        return format!("0.{zeros}{digits}");
    }
    let int_len = exp as usize + 1;
    if digits.len() <= int_len {
        format!("{digits:0<int_len$}")
    } else {
        let (int_part, fraction) = digits.split_at(int_len);
        format!("{int_part}.{fraction}")
    }
}

/// Turn Rust's `1.5e3` into the conventional `1.5e+03`.
fn exponent_form(raw: &str) -> String {
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
        }
        None => raw.to_owned(),
    }
}

/// Integer padding: a precision is a minimum digit count and disables the `0` flag.
fn pad_integer(d: &Directive, negative: bool, prefix: &str, digits: &str) -> String {
    let Some(precision) = d.precision else {
        return pad_number(d, negative, prefix, digits);
    };
    let digits = if precision == 0 && digits == "0" {
        String::new()
    } else {
        format!("{digits:0>precision$}")
    };
    pad_number(&Directive { zero: false, ..*d }, negative, prefix, &digits)
}

fn pad_number(d: &Directive, negative: bool, prefix: &str, digits: &str) -> String {
    let sign = if negative {
        "-"
    } else if d.plus {
        "+"
    } else if d.space {
        " "
    } else {
        ""
    };
    let len = sign.len() + prefix.len() + digits.chars().count();
    let fill = d.width.map_or(0, |w| w.saturating_sub(len));

    let mut out = String::with_capacity(len + fill);
    if d.left {
        out.push_str(sign);
        out.push_str(prefix);
        out.push_str(digits);
        out.extend(std::iter::repeat(' ').take(fill));
    } else if d.zero {
        out.push_str(sign);
        out.push_str(prefix);
        out.extend(std::iter::repeat('0').take(fill));
        out.push_str(digits);
    } else {
        out.extend(std::iter::repeat(' ').take(fill));
        out.push_str(sign);
        out.push_str(prefix);
        out.push_str(digits);
    }
    out
}

fn pad_str(d: &Directive, s: &str) -> String {
    let fill = d.width.map_or(0, |w| w.saturating_sub(s.chars().count()));
    let padding: String = std::iter::repeat(' ').take(fill).collect();
    if d.left {
        format!("{s}{padding}")
    } else {
        format!("{padding}{s}")
    }
}
