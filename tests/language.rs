use std::{collections::HashMap, fs};

use linescript::{
    interpreter::{executor::core::Interpreter, scanner::LineScanner, value::core::Value},
    run_script,
};
use pretty_assertions::assert_eq;

fn run_ok(src: &str) -> Interpreter {
    run_script(src).unwrap_or_else(|e| panic!("Script failed: {e}\n{src}"))
}

fn run_err(src: &str) {
    assert!(run_script(src).is_err(),
            "Script succeeded but was expected to fail:\n{src}");
}

fn final_var(src: &str, name: &str) -> Value {
    run_ok(src).variables()
               .get(name)
               .cloned()
               .unwrap_or_else(|| panic!("variable '{name}' is not bound"))
}

#[test]
fn bindings_and_arithmetic() {
    assert_eq!(final_var("let x = 1 + 2", "x"), Value::Integer(3));
    assert_eq!(final_var("var x = 7 * 9", "x"), Value::Integer(63));
    assert_eq!(final_var("define x = 10 / 2", "x"), Value::Integer(5));
}

#[test]
fn bindings_overwrite_previous_values() {
    let interpreter = run_ok("var y = 1\nvar y = y + 10");
    assert_eq!(interpreter.variables().get("y"), Some(&Value::Integer(11)));
}

#[test]
fn failed_binding_leaves_scope_untouched() {
    let mut interpreter = Interpreter::new(LineScanner::new(""));
    interpreter.run("var ok = 1").unwrap();
    assert!(interpreter.run("var ok = missing + 1").is_err());
    assert_eq!(interpreter.variables().get("ok"), Some(&Value::Integer(1)));
}

#[test]
fn seeded_variables_are_visible() {
    let mut seed = HashMap::new();
    seed.insert("x".to_string(), Value::Integer(5));

    let mut interpreter = Interpreter::with_variables(LineScanner::new(""), seed);
    interpreter.run("var y = x + 1").unwrap();
    assert_eq!(interpreter.variables().get("y"), Some(&Value::Integer(6)));
}

#[test]
fn bindings_can_be_patched_between_runs() {
    let mut interpreter = run_ok("var x = 1");
    interpreter.variables_mut()
               .insert("x".to_string(), Value::Integer(41));
    interpreter.run("var y = x + 1").unwrap();
    assert_eq!(interpreter.variables().get("y"), Some(&Value::Integer(42)));
}

#[test]
fn bare_expressions_are_evaluated_and_discarded() {
    let interpreter = run_ok("1 + 2\nprint(\"hello\")");
    assert!(interpreter.variables().is_empty());
}

#[test]
fn line_comments_truncate_the_line() {
    assert_eq!(final_var("var x = 1 // trailing comment", "x"), Value::Integer(1));
    let interpreter = run_ok("// a full-line comment\n\n   \n");
    assert!(interpreter.variables().is_empty());
}

#[test]
fn block_comments_are_skipped() {
    let interpreter = run_ok("/*\nvar hidden = 1\nanything goes here\n*/\nvar x = 2");
    assert_eq!(interpreter.variables().get("hidden"), None);
    assert_eq!(interpreter.variables().get("x"), Some(&Value::Integer(2)));
}

#[test]
fn unterminated_block_comment_is_an_error() {
    run_err("/*\nvar x = 1");
}

#[test]
fn if_true_executes_the_then_branch() {
    assert_eq!(final_var("if true\nvar z = 1\nfi", "z"), Value::Integer(1));
}

#[test]
fn if_false_executes_only_the_else_branch() {
    let interpreter = run_ok("var flag = false\nif flag\nvar a = 1\nelse\nvar b = 2\nfi");
    assert_eq!(interpreter.variables().get("a"), None);
    assert_eq!(interpreter.variables().get("b"), Some(&Value::Integer(2)));
}

#[test]
fn if_false_without_else_skips_the_block() {
    let interpreter = run_ok("if 1 > 2\nvar a = 1\nfi\nvar after = 3");
    assert_eq!(interpreter.variables().get("a"), None);
    assert_eq!(interpreter.variables().get("after"), Some(&Value::Integer(3)));
}

#[test]
fn non_boolean_guard_selects_the_else_path() {
    // Only an exact boolean true takes the then-branch.
    let interpreter = run_ok("if 5\nvar z = 1\nfi");
    assert_eq!(interpreter.variables().get("z"), None);
}

#[test]
fn block_keywords_match_case_insensitively() {
    assert_eq!(final_var("if true\nvar z = 1\nFI", "z"), Value::Integer(1));
    let interpreter = run_ok("var i = 0\nwhile i < 1\nvar i = i + 1\nDONE");
    assert_eq!(interpreter.variables().get("i"), Some(&Value::Integer(1)));
}

#[test]
fn unterminated_if_block_is_an_error() {
    run_err("if true\nvar z = 1");
    run_err("if false\nvar z = 1");
}

#[test]
fn while_loop_runs_until_the_guard_fails() {
    let interpreter = run_ok("var i = 0\nwhile i < 3\nvar i = i + 1\ndone\nvar after = i");
    assert_eq!(interpreter.variables().get("i"), Some(&Value::Integer(3)));
    assert_eq!(interpreter.variables().get("after"), Some(&Value::Integer(3)));
}

#[test]
fn while_loop_accumulates() {
    let src = "var total = 0\nvar i = 0\nwhile i < 5\nvar total = total + i\nvar i = i + 1\ndone";
    assert_eq!(final_var(src, "total"), Value::Integer(10));
}

#[test]
fn false_guard_skips_the_body_without_executing() {
    let interpreter = run_ok("while false\nvar x = 1\ndone\nvar after = 2");
    assert_eq!(interpreter.variables().get("x"), None);
    assert_eq!(interpreter.variables().get("after"), Some(&Value::Integer(2)));
}

#[test]
fn false_guard_tolerates_a_missing_done() {
    // Exhausting the source while scanning past a false-guard body is
    // accepted silently.
    let interpreter = run_ok("while false\nvar x = 1");
    assert_eq!(interpreter.variables().get("x"), None);
}

#[test]
fn active_iteration_requires_done() {
    run_err("var i = 0\nwhile i < 1\nvar i = 1");
}

#[test]
fn loops_support_aggregate_bodies() {
    let src = "var i = 0\nvar s = \"\"\nwhile i < 3\nvar s = s . i\nvar i = i + 1\ndone";
    assert_eq!(final_var(src, "s"), Value::Text("012".to_string()));
}

#[test]
fn factorial_and_negation_statements() {
    assert_eq!(final_var("var x = 5!", "x"), Value::Integer(120));
    assert_eq!(final_var("var b = !true", "b"), Value::Bool(false));
}

#[test]
fn length_of_bound_aggregates() {
    let src = "var seq = [1, 2, 3]\nvar n = len(seq)";
    assert_eq!(final_var(src, "n"), Value::Integer(3));

    let src = "var pair = (1, 2)\nvar n = len(pair)";
    assert_eq!(final_var(src, "n"), Value::Integer(2));

    let src = "var uniq = {1, 1, 2}\nvar n = len(uniq)";
    assert_eq!(final_var(src, "n"), Value::Integer(2));
}

#[test]
fn concatenation_builds_text() {
    let src = "var total = 10\nvar banner = \"total = \" . total";
    assert_eq!(final_var(src, "banner"), Value::Text("total = 10".to_string()));
}

#[test]
fn undefined_variable_is_an_error() {
    run_err("var y = x + 1");
    run_err("definitely_not_bound");
}

#[test]
fn example_script_works() {
    let script = fs::read_to_string("tests/example.script").expect("missing file");
    let interpreter = run_ok(&script);

    assert_eq!(interpreter.variables().get("total"), Some(&Value::Integer(10)));
    assert_eq!(interpreter.variables().get("verdict"),
               Some(&Value::Text("sum ok".to_string())));
    assert_eq!(interpreter.variables().get("banner"),
               Some(&Value::Text("total = 10".to_string())));
}
