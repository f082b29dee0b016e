use std::{collections::HashSet, rc::Rc};

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::pattern::{parse_number, PatternKind, EXPR_PATTERNS},
        executor::core::Interpreter,
        value::{core::Value, set_value::SetValue, tuple::TupleValue},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

impl Interpreter {
    /// Evaluates a piece of expression text against the current scope.
    ///
    /// The text is classified in a fixed precedence order: numeric literal,
    /// boolean literal, absent literal, quoted string, the structural
    /// pattern table (sequence, call, tuple, set, infix — first match
    /// wins), bound variable, and finally the suffix `!` (factorial) and
    /// prefix `!` (negation) forms. Sub-expressions captured by a pattern
    /// are evaluated recursively through this same entry point.
    ///
    /// Evaluation never mutates the scope store; only builtins with side
    /// effects (such as `print`) observe anything beyond the result.
    ///
    /// # Errors
    /// `EvalError::UndefinedSymbol` when the text matches nothing above and
    /// is not a bound variable, plus any error raised by a builtin.
    ///
    /// # Example
    /// ```
    /// use linescript::{
    ///     interpreter::{executor::core::Interpreter, scanner::LineScanner, value::core::Value},
    /// };
    ///
    /// let interpreter = Interpreter::new(LineScanner::new(""));
    ///
    /// assert_eq!(interpreter.evaluate("1 + 2").unwrap(), Value::Integer(3));
    /// assert_eq!(interpreter.evaluate("\"ab\"").unwrap(), Value::Text("ab".to_string()));
    /// assert!(interpreter.evaluate("no_such_variable").is_err());
    /// ```
    pub fn evaluate(&self, text: &str) -> EvalResult<Value> {
        let text = text.trim();

        if let Some(number) = parse_number(text) {
            return Ok(number);
        }
        if text.eq_ignore_ascii_case("true") {
            return Ok(Value::Bool(true));
        }
        if text.eq_ignore_ascii_case("false") {
            return Ok(Value::Bool(false));
        }
        if text.eq_ignore_ascii_case("null")
           || text.eq_ignore_ascii_case("nil")
           || text.eq_ignore_ascii_case("undefined")
        {
            return Ok(Value::Absent);
        }
        if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
            return Ok(Value::Text(text[1..text.len() - 1].to_string()));
        }

        for pattern in EXPR_PATTERNS.iter() {
            if let Some(caps) = pattern.regex.captures(text) {
                return match pattern.kind {
                    PatternKind::Sequence => self.eval_sequence(&caps[1]),
                    PatternKind::Call => self.eval_call(&caps[1], &caps[2]),
                    PatternKind::Tuple => self.eval_tuple(&caps[1]),
                    PatternKind::Set => self.eval_set(&caps[1]),
                    PatternKind::Infix => self.eval_infix(&caps[1], &caps[3], &caps[4]),
                };
            }
        }

        if let Some(value) = self.variables.get(text) {
            return Ok(value.clone());
        }

        if let Some(rest) = text.strip_suffix('!') {
            let value = self.evaluate(rest)?;
            return self.registry.invoke("fac", &[value]);
        }
        if let Some(rest) = text.strip_prefix('!') {
            let value = self.evaluate(rest)?;
            return self.registry.invoke("neg", &[value]);
        }

        Err(EvalError::UndefinedSymbol { text: text.to_string() })
    }

    /// Resolves a sequence literal from the text between the brackets.
    ///
    /// The interior is split on every comma and each piece is evaluated
    /// recursively; the results are collected in order.
    fn eval_sequence(&self, interior: &str) -> EvalResult<Value> {
        let mut items = Vec::new();
        for piece in interior.split(',') {
            items.push(self.evaluate(piece)?);
        }
        Ok(Value::Sequence(Rc::new(items)))
    }

    /// Resolves a function call from its name and raw argument text.
    ///
    /// A single all-whitespace argument piece means a zero-argument call.
    /// When the name is known, the argument count is validated against the
    /// registry before any argument is evaluated; unknown names fail inside
    /// the registry after argument evaluation.
    fn eval_call(&self, name: &str, raw_args: &str) -> EvalResult<Value> {
        let pieces: Vec<&str> = raw_args.split(',').collect();
        let zero_args = pieces.len() == 1 && pieces[0].trim().is_empty();
        let count = if zero_args { 0 } else { pieces.len() };

        if self.registry.contains(name) && !self.registry.accepts_arity(name, count) {
            return Err(EvalError::ArgumentCountMismatch { name:  name.to_string(),
                                                          count, });
        }

        let mut args = Vec::with_capacity(count);
        if !zero_args {
            for piece in pieces {
                args.push(self.evaluate(piece)?);
            }
        }
        self.registry.invoke(name, &args)
    }

    /// Resolves a tuple literal; the comma split count fixes the length.
    fn eval_tuple(&self, interior: &str) -> EvalResult<Value> {
        let pieces: Vec<&str> = interior.split(',').collect();
        let mut tuple = TupleValue::with_len(pieces.len());
        for (index, piece) in pieces.iter().enumerate() {
            tuple.set(index, self.evaluate(piece)?)?;
        }
        Ok(Value::Tuple(Rc::new(tuple)))
    }

    /// Resolves a set literal; duplicate elements collapse.
    fn eval_set(&self, interior: &str) -> EvalResult<Value> {
        let mut set = HashSet::new();
        for piece in interior.split(',') {
            set.insert(SetValue::from(&self.evaluate(piece)?));
        }
        Ok(Value::Set(Rc::new(set)))
    }

    /// Resolves an infix operation by invoking the operator token as a
    /// two-argument registry function.
    fn eval_infix(&self, left: &str, op: &str, right: &str) -> EvalResult<Value> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;
        self.registry.invoke(op, &[left, right])
    }
}
