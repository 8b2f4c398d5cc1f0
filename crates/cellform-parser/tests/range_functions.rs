//! Tests for the range function sub-grammar
//!
//! Covers:
//! - Successful `NAME(start:end)` calls and case-insensitive names
//! - Each malformed variant and its message
//! - Which model queries are made, using a mocked model

use cellform_ast::{Expression, RangeCall, RangeFunction};
use cellform_model::{Model, Sheet};
use cellform_parser::parse_str;
use mockall::mock;
use pretty_assertions::assert_eq;
use rstest::rstest;

mock! {
    pub Grid {}

    impl Model for Grid {
        fn is_valid_name(&self, name: &str) -> bool;
        fn is_valid_range(&self, start: &str, end: &str) -> bool;
    }
}

fn detail(input: &str) -> String {
    parse_str(input, &Sheet::default())
        .expect_err("parse should fail")
        .detail()
        .message()
        .to_string()
}

#[test]
fn test_sum_range() {
    let tree = parse_str("SUM(A1:B2)", &Sheet::default()).unwrap();
    assert_eq!(
        tree.root(),
        &Expression::Range(RangeCall::new(RangeFunction::Sum, "A1", "B2"))
    );
    assert_eq!(tree.len(), 1);
}

#[rstest]
#[case("average(A1:A9)", RangeFunction::Average)]
#[case("Mean(A1:A9)", RangeFunction::Mean)]
#[case("PRODUCT(A1:A9)", RangeFunction::Product)]
#[case("max(A1:A9)", RangeFunction::Max)]
#[case("MIN(A1:A9)", RangeFunction::Min)]
#[case("median(A1:A9)", RangeFunction::Median)]
#[case("StDev(A1:A9)", RangeFunction::Stdev)]
fn test_registered_functions(#[case] input: &str, #[case] function: RangeFunction) {
    let tree = parse_str(input, &Sheet::default()).unwrap();
    match tree.root() {
        Expression::Range(call) => assert_eq!(call.function, function),
        other => panic!("Expected Range, got: {:?}", other),
    }
}

#[test]
fn test_range_call_inside_arithmetic() {
    let tree = parse_str("1 + max(A1:C3) * 2", &Sheet::default()).unwrap();
    assert_eq!(tree.to_sexpr(), "(+ 1 (* (MAX A1 C3) 2))");
}

#[rstest]
#[case::unknown_function("total(A1:B2)", "Unexpected token \"total\"")]
#[case::missing_open_paren("SUM A1:B2)", "Missing ( after range function")]
#[case::invalid_start("SUM(A0:B2)", "Unexpected token \"A0\"")]
#[case::missing_colon("SUM(A1;B2)", "Missing : in the middle of range function")]
#[case::invalid_end("SUM(A1:B0)", "Unexpected token \"B0\"")]
#[case::invalid_range("SUM(B2:A1)", "Invalid range \"B2:A1\"")]
#[case::missing_close_paren("SUM(A1:B2", "Missing ) at the end of range function")]
fn test_malformed_range_call(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(detail(input), expected);
}

#[test]
fn test_missing_start_reports_end_of_input() {
    insta::assert_snapshot!(detail("SUM("), @r#"Unexpected token """#);
}

#[test]
fn test_range_queries_model_once() {
    let mut grid = MockGrid::new();
    grid.expect_is_valid_name()
        .returning(|name| matches!(name, "A1" | "B2"));
    grid.expect_is_valid_range()
        .withf(|start, end| start.to_string() == "A1" && end.to_string() == "B2")
        .times(1)
        .return_const(true);

    let tree = parse_str("sum(A1:B2)", &grid).unwrap();
    assert_eq!(tree.to_string(), "SUM(A1:B2)");
}

#[test]
fn test_rejected_range_from_model() {
    let mut grid = MockGrid::new();
    grid.expect_is_valid_name()
        .returning(|name| name.starts_with('R'));
    grid.expect_is_valid_range().times(1).return_const(false);

    let err = parse_str("SUM(R1:R9)", &grid).unwrap_err();
    insta::assert_snapshot!(err.detail().to_string(), @r#"Invalid range "R1:R9""#);
}

#[test]
fn test_invalid_end_skips_range_query() {
    let mut grid = MockGrid::new();
    grid.expect_is_valid_name()
        .returning(|name| name == "A1");
    grid.expect_is_valid_range().never();

    let err = parse_str("SUM(A1:Q9)", &grid).unwrap_err();
    assert_eq!(err.detail().message(), "Unexpected token \"Q9\"");
}
