use std::{collections::HashSet, rc::Rc};

use linescript::interpreter::{
    executor::core::Interpreter,
    function::core::{FunctionRegistry, BUILTIN_FUNCTIONS},
    scanner::LineScanner,
    value::{core::Value, set_value::SetValue, tuple::TupleValue},
};
use pretty_assertions::assert_eq;

fn evaluator() -> Interpreter {
    Interpreter::new(LineScanner::new(""))
}

fn eval(text: &str) -> Value {
    evaluator().evaluate(text)
                .unwrap_or_else(|e| panic!("evaluating '{text}' failed: {e}"))
}

fn eval_fails(text: &str) {
    assert!(evaluator().evaluate(text).is_err(),
            "evaluating '{text}' succeeded but was expected to fail");
}

#[test]
fn numeric_literals() {
    assert_eq!(eval("42"), Value::Integer(42));
    assert_eq!(eval("-4"), Value::Integer(-4));
    assert_eq!(eval("+7"), Value::Integer(7));
    assert_eq!(eval("007"), Value::Integer(7));
    assert_eq!(eval("3.5"), Value::Real(3.5));
    assert_eq!(eval("-0.25"), Value::Real(-0.25));
    assert_eq!(eval("  12  "), Value::Integer(12));
}

#[test]
fn oversized_integer_literal_falls_back_to_real() {
    assert!(matches!(eval("92233720368547758080"), Value::Real(_)));
}

#[test]
fn keyword_literals_are_case_insensitive() {
    assert_eq!(eval("true"), Value::Bool(true));
    assert_eq!(eval("TRUE"), Value::Bool(true));
    assert_eq!(eval("False"), Value::Bool(false));
    assert_eq!(eval("null"), Value::Absent);
    assert_eq!(eval("NIL"), Value::Absent);
    assert_eq!(eval("Undefined"), Value::Absent);
}

#[test]
fn string_literals_are_verbatim() {
    assert_eq!(eval("\"\""), Value::Text(String::new()));
    assert_eq!(eval("\"ab\""), Value::Text("ab".to_string()));
    assert_eq!(eval("\"  spaced  \""), Value::Text("  spaced  ".to_string()));
    // No escape processing: the backslash is two ordinary characters.
    assert_eq!(eval("\"a\\nb\""), Value::Text("a\\nb".to_string()));
}

#[test]
fn quote_wrapping_takes_precedence_over_infix() {
    // The whole text is quote-wrapped, so it is one string literal, not a
    // concatenation of two.
    assert_eq!(eval("\"a\" . \"b\""), Value::Text("a\" . \"b".to_string()));
}

#[test]
fn sequence_literal_preserves_order() {
    let expected = Value::Sequence(Rc::new(vec![Value::Integer(1),
                                                Value::Integer(2),
                                                Value::Integer(3)]));
    assert_eq!(eval("[1,2,3]"), expected);
    assert_eq!(eval("[1, 2, 3]"), expected);
}

#[test]
fn tuple_literal_has_fixed_length() {
    let expected = Value::Tuple(Rc::new(TupleValue::from(vec![Value::Integer(1),
                                                              Value::Integer(2)])));
    assert_eq!(eval("(1,2)"), expected);

    if let Value::Tuple(tuple) = eval("(1, 2, 3)") {
        assert_eq!(tuple.len(), 3);
    } else {
        panic!("expected a tuple");
    }
}

#[test]
fn set_literal_collapses_duplicates() {
    let mut expected = HashSet::new();
    expected.insert(SetValue::Integer(1));
    expected.insert(SetValue::Integer(2));
    assert_eq!(eval("{1,1,2}"), Value::Set(Rc::new(expected)));
}

#[test]
fn set_members_distinguish_numeric_flavours() {
    if let Value::Set(set) = eval("{1, 1.0}") {
        assert_eq!(set.len(), 2);
    } else {
        panic!("expected a set");
    }
}

#[test]
fn infix_arithmetic() {
    assert_eq!(eval("1 + 2"), Value::Integer(3));
    assert_eq!(eval("8 - 5"), Value::Integer(3));
    assert_eq!(eval("7 * 9"), Value::Integer(63));
    assert_eq!(eval("10 / 2"), Value::Integer(5));
    assert_eq!(eval("7 % 3"), Value::Integer(1));
    assert_eq!(eval("2 ^ 10"), Value::Integer(1024));
    assert_eq!(eval("2 + 0.5"), Value::Real(2.5));
}

#[test]
fn infix_chains_evaluate_left_to_right() {
    assert_eq!(eval("1 + 2 + 3"), Value::Integer(6));
    assert_eq!(eval("10 - 2 - 3"), Value::Integer(5));
    // No operator precedence: the chain folds strictly left to right.
    assert_eq!(eval("2 + 3 * 4"), Value::Integer(20));
    assert_eq!(eval("2 * 3 + 4"), Value::Integer(10));
}

#[test]
fn comparisons_and_equality() {
    assert_eq!(eval("2 < 3"), Value::Bool(true));
    assert_eq!(eval("3 > 2"), Value::Bool(true));
    assert_eq!(eval("2 <= 2"), Value::Bool(true));
    assert_eq!(eval("3 >= 4"), Value::Bool(false));
    assert_eq!(eval("2 == 2"), Value::Bool(true));
    assert_eq!(eval("2 != 3"), Value::Bool(true));
    assert_eq!(eval("1 == 1.0"), Value::Bool(true));
}

#[test]
fn unary_suffix_and_prefix_forms() {
    assert_eq!(eval("5!"), Value::Integer(120));
    assert_eq!(eval("0!"), Value::Integer(1));
    assert_eq!(eval("!true"), Value::Bool(false));
    assert_eq!(eval("!false"), Value::Bool(true));
}

#[test]
fn calls_resolve_through_the_registry() {
    assert_eq!(eval("len(\"abc\")"), Value::Integer(3));
    assert_eq!(eval("fac(4)"), Value::Integer(24));
    assert_eq!(eval("neg(5)"), Value::Integer(-5));
}

#[test]
fn call_argument_count_is_validated_early() {
    eval_fails("len()");
    eval_fails("len(1,2)");
    eval_fails("print()");
}

#[test]
fn unknown_function_is_an_error() {
    eval_fails("frobnicate(1)");
}

#[test]
fn every_listed_builtin_is_registered() {
    let registry = FunctionRegistry::new();
    for name in BUILTIN_FUNCTIONS {
        assert!(registry.contains(name), "builtin '{name}' is not registered");
    }
    assert!(!registry.contains("frobnicate"));
}

#[test]
fn malformed_expressions_fail() {
    eval_fails("1 +");
    eval_fails("");
    eval_fails("no_such_variable");
}

#[test]
fn arithmetic_failures_propagate() {
    eval_fails("1 / 0");
    eval_fails("5 % 0");
    eval_fails("true + 1");
    eval_fails("9223372036854775807 + 1");
}

#[test]
fn aggregate_interiors_split_on_every_comma() {
    // The comma split is not depth-aware, so a nested aggregate containing
    // commas breaks apart into unevaluable pieces.
    eval_fails("[[1,2],3]");
    eval_fails("len([1,2])");
}

#[test]
fn evaluation_is_idempotent() {
    let interpreter = evaluator();
    let first = interpreter.evaluate("{1, 2} ").unwrap();
    let second = interpreter.evaluate("{1, 2} ").unwrap();
    assert_eq!(first, second);
    assert!(interpreter.variables().is_empty());
}

#[test]
fn values_display_like_literals() {
    assert_eq!(eval("[1, 2, 3]").to_string(), "[1, 2, 3]");
    assert_eq!(eval("(1, 2)").to_string(), "(1, 2)");
    assert_eq!(eval("{2, 1, 1}").to_string(), "{1, 2}");
    assert_eq!(eval("null").to_string(), "null");
}
