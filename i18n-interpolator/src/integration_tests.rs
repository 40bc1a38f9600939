//! End-to-end tests for string interpolation
//!
//! Each case runs a full marker string through an interpolator built from a
//! single-language catalog and checks the final text.

#[cfg(test)]
mod tests {
    use crate::{Catalog, InterpolateError, Interpolator};

    fn interpolator(messages: &[(&str, &str)]) -> Interpolator {
        let mut catalog = Catalog::new();
        catalog.with_messages_for_language("default", messages.iter().copied().collect());
        Interpolator::new(catalog)
    }

    fn run(input: &str, messages: &[(&str, &str)]) -> String {
        interpolator(messages).interpolate_str(input).unwrap()
    }

    // ============================================================================
    // Plain markers
    // ============================================================================

    #[test]
    fn test_no_marker() {
        assert_eq!(run("abc", &[]), "abc");
    }

    #[test]
    fn test_simple() {
        assert_eq!(
            run(r#">> ${i18n("TEST")} <<"#, &[("TEST", "translated TEST")]),
            ">> translated TEST <<"
        );
    }

    #[test]
    fn test_two_calls() {
        assert_eq!(
            run(
                r#">> ${i18n("TEST1")} -- ${i18n("TEST2")} <<"#,
                &[("TEST1", "translated TEST1"), ("TEST2", "translated TEST2")]
            ),
            ">> translated TEST1 -- translated TEST2 <<"
        );
    }

    #[test]
    fn test_adjacent_calls() {
        assert_eq!(
            run(r#"${i18n("A")}${i18n("B", {x: 1})}"#, &[("A", "a"), ("B", "b${x}")]),
            "ab1"
        );
    }

    // ============================================================================
    // Variables
    // ============================================================================

    #[test]
    fn test_with_variables() {
        assert_eq!(
            run(
                r#">> ${i18n("TEST", {a: -1, b: 1.23, c: false, d: "d"})} <<"#,
                &[("TEST", "a is ${a}, b is ${b}, c is ${c}, d is ${d}")]
            ),
            ">> a is -1, b is 1.23, c is false, d is d <<"
        );
    }

    #[test]
    fn test_with_variables_advanced() {
        assert_eq!(
            run(
                r#"> ${i18n("TEST", {a: {b: [1, 2, 3]}})} <"#,
                &[("TEST", "-- ${a.b[2]} --")]
            ),
            "> -- 3 -- <"
        );
    }

    #[test]
    fn test_structured_variables_formatted() {
        assert_eq!(
            run(
                r#"${i18n("TEST", {o: {b: 1, a: 2}, l: [1, 2, 3]})}"#,
                &[("TEST", "o=${o} l=${l}")]
            ),
            "o={a: 2, b: 1} l=[1, 2, 3]"
        );
    }

    #[test]
    fn test_integer_beyond_i64() {
        assert_eq!(
            run(
                r#"${i18n("T", {a: 12345678901234567890})}"#,
                &[("T", "v=${a}")]
            ),
            "v=12345678901234567000"
        );
    }

    #[test]
    fn test_multiline_variables() {
        let input = ">> ${i18n(\"TEST\", {\n    a: 1,\n    b: 'two',\n})} <<";
        assert_eq!(
            run(input, &[("TEST", "a=${a} b=${b}")]),
            ">> a=1 b=two <<"
        );
    }

    // ============================================================================
    // Nested markers
    // ============================================================================

    #[test]
    fn test_nested_marker_resolved_first() {
        assert_eq!(
            run(
                r#"${i18n("T", {a: "${i18n(\"T2\")}"})}"#,
                &[("T", "v=${a}"), ("T2", "X")]
            ),
            "v=X"
        );
    }

    #[test]
    fn test_nested_parsing() {
        let input = r#">> ${i18n("TEST", {
                a: 1,
                b: {c: "xx ${i18n(\"TEST2\")} yy", d: [1, "xx ${i18n(\"TEST3\")} yy", 2]}
            })} <<"#;
        assert_eq!(
            run(
                input,
                &[
                    ("TEST", "TEST, a=${a}, b=${b}"),
                    ("TEST2", "this is TEST2.."),
                    ("TEST3", "this is TEST3.."),
                ]
            ),
            ">> TEST, a=1, b={c: xx this is TEST2.. yy, d: [1, xx this is TEST3.. yy, 2]} <<"
        );
    }

    #[test]
    fn test_marker_like_text_without_quote() {
        assert_eq!(
            run(
                r#">> ${i18n("TEST", {a:"${i18n(1)}\""})} <<"#,
                &[("TEST", "TEST, a=${a}")]
            ),
            r#">> TEST, a=${i18n(1)}" <<"#
        );
    }

    #[test]
    fn test_terminator_inside_quotes() {
        assert_eq!(
            run(
                r#">> ${i18n("TEST", {a: "1)}\"", b: "nested ${i18n(\"TEST2\", {a:\"2\"})}"})} <<"#,
                &[
                    ("TEST", "TEST, a=${a} b=${b}"),
                    ("TEST2", "this is TEST2.., a=${a}"),
                ]
            ),
            r#">> TEST, a=1)}" b=nested this is TEST2.., a=2 <<"#
        );
    }

    // ============================================================================
    // Degraded lookups
    // ============================================================================

    #[test]
    fn test_missing_variable_in_translation() {
        assert_eq!(
            run(
                r#">> ${i18n("TEST", {a: 1})} <<"#,
                &[("TEST", "TEST, a=${a} b=${b}")]
            ),
            ">> TEST, a=1 b=${b} <<"
        );
    }

    #[test]
    fn test_missing_translation_template() {
        assert_eq!(run(r#">> ${i18n("TEST", {a: 1})} <<"#, &[]), ">> TEST <<");
    }

    #[test]
    fn test_missing_template_key_with_placeholder() {
        assert_eq!(
            run(r#">> ${i18n("你好 ${a}", {a:1})} <<"#, &[]),
            ">> 你好 1 <<"
        );
    }

    #[test]
    fn test_placeholder_without_variables() {
        assert_eq!(
            run(r#"${i18n("TEST")}"#, &[("TEST", "a=${a}")]),
            "a=${a}"
        );
    }

    #[test]
    fn test_invalid_translation_template() {
        assert_eq!(
            run(r#">> ${i18n("TEST", {a: 1})} <<"#, &[("TEST", "TEST, a=${a")]),
            ">> TEST, a=${a <<"
        );
    }

    // ============================================================================
    // Fatal errors
    // ============================================================================

    #[test]
    fn test_unterminated_call_is_fatal() {
        let result = interpolator(&[]).interpolate_str(r#"ok ${i18n("TEST", {a: 1}"#);
        assert_eq!(
            result,
            Err(InterpolateError::UnterminatedCall {
                key: "TEST".to_string(),
                offset: 3,
            })
        );
    }

    #[test]
    fn test_invalid_variables_is_fatal() {
        let result = interpolator(&[]).interpolate_str(r#"${i18n("TEST", {a: })}"#);
        assert!(matches!(
            result,
            Err(InterpolateError::InvalidVariables { ref key, .. }) if key == "TEST"
        ));
    }

    #[test]
    fn test_error_in_nested_marker_propagates() {
        let result = interpolator(&[])
            .interpolate_str(r#"${i18n("OUTER", {a: "${i18n(\"INNER\", {b: }"})}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_in_document_propagates() {
        let document = serde_json::json!({"ok": "fine", "bad": [r#"${i18n("K", {"#]});
        assert!(interpolator(&[]).interpolate(&document).is_err());
    }
}
