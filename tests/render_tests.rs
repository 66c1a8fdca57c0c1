//! Tests for template rendering and parameter values.

use progress_line::{params, render, Param};

#[test]
fn test_render_positional_integers() {
    assert_eq!(render("progress: %d/%d", &params![3, 10]), "progress: 3/10");
    assert_eq!(render("%d", &params![-7i32]), "-7");
    assert_eq!(render("%d", &params![10u64]), "10");
}

#[test]
fn test_render_literal_percent() {
    assert_eq!(render("%d%%", &params![20]), "20%");
    assert_eq!(render("100%%", &params![]), "100%");
}

#[test]
fn test_render_plain_text() {
    assert_eq!(render("plain", &[]), "plain");
    assert_eq!(render("", &[]), "");
}

#[test]
fn test_render_width_and_flags() {
    assert_eq!(render("%5d|%-5d|%05d", &params![42, 42, 42]), "   42|42   |00042");
    assert_eq!(render("%+d", &params![5]), "+5");
    assert_eq!(render("% d", &params![5]), " 5");
    assert_eq!(render("%05d", &params![-42]), "-0042");
    assert_eq!(render("%6s|%-6s|", &params!["ab", "ab"]), "    ab|ab    |");
}

#[test]
fn test_render_radix() {
    assert_eq!(render("%x %X %o %b", &params![255, 255, 8, 5]), "ff FF 10 101");
    assert_eq!(render("%#x %#o", &params![255, 8]), "0xff 010");
    assert_eq!(render("%x", &params!["hi"]), "6869");
}

#[test]
fn test_render_floats() {
    assert_eq!(render("%f", &params![1.5]), "1.500000");
    assert_eq!(render("%.2f", &params![3.14159]), "3.14");
    assert_eq!(render("%8.3f", &params![2.5]), "   2.500");
    assert_eq!(render("%.1f", &params![-2.5]), "-2.5");
    assert_eq!(render("%e", &params![1234.5678]), "1.234568e+03");
    assert_eq!(render("%.2e", &params![0.05]), "5.00e-02");
    assert_eq!(render("%v", &params![1.5]), "1.5");
}

#[test]
fn test_render_non_finite_floats() {
    assert_eq!(render("%f", &params![f64::NAN]), "NaN");
    assert_eq!(render("%f", &params![f64::INFINITY]), "Inf");
    assert_eq!(render("%f", &params![f64::NEG_INFINITY]), "-Inf");
}

#[test]
fn test_render_strings_and_chars() {
    assert_eq!(render("%s and %v", &params!["a", "b"]), "a and b");
    assert_eq!(render("%.3s", &params!["abcdef"]), "abc");
    assert_eq!(render("%q", &params!["hi"]), "\"hi\"");
    assert_eq!(render("%c%c", &params!['x', 65]), "xA");
    assert_eq!(render("%t %v", &params![true, false]), "true false");
}

#[test]
fn test_render_wrong_type_marker() {
    assert_eq!(render("%d", &params!["abc"]), "%!d(str=abc)");
    assert_eq!(render("%s", &params![5]), "%!s(i64=5)");
    assert_eq!(render("%d", &params![true]), "%!d(bool=true)");
    assert_eq!(render("%f", &params![3]), "%!f(i64=3)");
}

#[test]
fn test_render_unknown_verb_marker() {
    assert_eq!(render("%z", &params![5]), "%!z(i64=5)");
}

#[test]
fn test_render_missing_argument_marker() {
    assert_eq!(render("%d %d", &params![1]), "1 %!d(MISSING)");
    assert_eq!(render("%s", &[]), "%!s(MISSING)");
}

#[test]
fn test_render_extra_arguments_marker() {
    assert_eq!(render("%d", &params![1, "x"]), "1%!(EXTRA str=x)");
    assert_eq!(
        render("no verbs", &params![1, 2]),
        "no verbs%!(EXTRA i64=1, i64=2)"
    );
}

#[test]
fn test_render_trailing_percent_marker() {
    assert_eq!(render("abc%", &[]), "abc%!(NOVERB)");
}

#[test]
fn test_render_oversized_width_marker() {
    assert_eq!(render("%99999999d", &params![1]), "%!(BADWIDTH)1");
}

#[test]
fn test_param_conversions() {
    assert_eq!(Param::from(3i8), Param::Int(3));
    assert_eq!(Param::from(3usize), Param::UInt(3));
    assert_eq!(Param::from(0.5f32), Param::Float(0.5));
    assert_eq!(Param::from("a"), Param::Str("a".into()));
    assert_eq!(Param::from(String::from("b")), Param::Str("b".into()));
    assert_eq!(Param::from('c'), Param::Char('c'));
    assert_eq!(Param::from(true), Param::Bool(true));
}

#[test]
fn test_param_type_names_and_display() {
    let values = params![-1, 2u32, 1.25, "s", 'c', false];
    let names: Vec<_> = values.iter().map(Param::type_name).collect();
    assert_eq!(names, ["i64", "u64", "f64", "str", "char", "bool"]);

    let shown: Vec<_> = values.iter().map(ToString::to_string).collect();
    assert_eq!(shown, ["-1", "2", "1.25", "s", "c", "false"]);
}

#[test]
fn test_params_macro() {
    assert!(params![].is_empty());
    assert_eq!(params![1, "two",], vec![Param::Int(1), Param::Str("two".into())]);
}

#[test]
fn test_render_general_float_significant_digits() {
    assert_eq!(render("%.3g", &params![3.14159]), "3.14");
    assert_eq!(render("%.3g", &params![1.0]), "1");
    assert_eq!(render("%.2g", &params![1234.0]), "1.2e+03");
    assert_eq!(render("%g", &params![100000.0]), "100000");
    assert_eq!(render("%g", &params![1234567.0]), "1.234567e+06");
    assert_eq!(render("%g", &params![0.0]), "0");
}

#[test]
fn test_render_general_float_exponent_switch() {
    assert_eq!(render("%g", &params![1e21]), "1e+21");
    assert_eq!(render("%v", &params![0.00001]), "1e-05");
    assert_eq!(render("%v", &params![0.0001]), "0.0001");
    assert_eq!(render("%v", &params![-2.5]), "-2.5");
}

#[test]
fn test_render_integer_precision() {
    assert_eq!(render("%.3d", &params![7]), "007");
    assert_eq!(render("%.3d", &params![-7]), "-007");
    assert_eq!(render("%6.3d|", &params![7]), "   007|");
    assert_eq!(render("%06.3d", &params![7]), "   007");
    assert_eq!(render("%.4x", &params![255]), "00ff");
    assert_eq!(render("[%.0d]", &params![0]), "[]");
}

#[test]
fn test_render_infinity_pads_with_spaces() {
    assert_eq!(render("%06f", &params![f64::INFINITY]), "   Inf");
    assert_eq!(render("%06f", &params![f64::NEG_INFINITY]), "  -Inf");
    assert_eq!(render("%06.1f", &params![2.5]), "0002.5");
}

#[test]
fn test_render_star_width_and_precision() {
    assert_eq!(render("%*d", &params![5, 3]), "    3");
    assert_eq!(render("%-*d|", &params![4, 3]), "3   |");
    assert_eq!(render("%*d|", &params![-4, 3]), "3   |");
    assert_eq!(render("%.*f", &params![2, 3.14159]), "3.14");
    assert_eq!(render("%*.*f", &params![7, 1, 2.0]), "    2.0");
    assert_eq!(render("%*d", &params!["x", 3]), "%!(BADWIDTH)3");
    assert_eq!(render("%.*d", &params!["x", 3]), "%!(BADPREC)3");
}
