use once_cell::sync::Lazy;
use regex::Regex;

use crate::interpreter::value::core::Value;

/// The structural shapes an expression can take.
///
/// Each kind pairs with a recognizer regex in [`EXPR_PATTERNS`]; the
/// evaluator resolves the captures of whichever pattern matches first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// A sequence literal, `[...]`.
    Sequence,
    /// A function call, `name(...)`.
    Call,
    /// A tuple literal, `(...)`.
    Tuple,
    /// A set literal, `{...}`.
    Set,
    /// An infix operation, `<left> <op> <right>`.
    Infix,
}

/// One entry of the structural pattern table.
pub struct ExprPattern {
    /// The shape this pattern recognizes.
    pub kind:  PatternKind,
    /// Anchored recognizer; a match consumes the whole expression text.
    pub regex: Regex,
}

/// The ordered structural pattern table.
///
/// Consulted top to bottom; the first full match wins. The order is
/// semantically load-bearing and must not be changed: the tuple pattern
/// would otherwise swallow function calls, and the infix pattern would
/// swallow everything. The greedy left capture of the infix pattern binds
/// the right-most operator occurrence first, which under recursion yields
/// left-to-right evaluation.
pub static EXPR_PATTERNS: Lazy<Vec<ExprPattern>> = Lazy::new(|| {
    vec![ExprPattern { kind:  PatternKind::Sequence,
                       regex: compile(r"^\[(.*)\]$"), },
         ExprPattern { kind:  PatternKind::Call,
                       regex: compile(r"^([_A-Za-z][_A-Za-z0-9]{0,127})\((.*)\)$"), },
         ExprPattern { kind:  PatternKind::Tuple,
                       regex: compile(r"^\((.*)\)$"), },
         ExprPattern { kind:  PatternKind::Set,
                       regex: compile(r"^\{(.*)\}$"), },
         ExprPattern { kind:  PatternKind::Infix,
                       regex: compile(r"^(.+)[ ]*((\+|-|\*|\.|%|\^|/|<=|<|>=|>|==|!=)[ ]*(.+))+$"), }]
});

static INTEGER_LITERAL: Lazy<Regex> = Lazy::new(|| compile(r"^[+-]?[0-9]+$"));
static DECIMAL_LITERAL: Lazy<Regex> = Lazy::new(|| compile(r"^[+-]?[0-9]+\.[0-9]+$"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("pattern table regex is valid")
}

/// Recognizes a numeric literal.
///
/// Integers (optional sign) become [`Value::Integer`], falling back to
/// [`Value::Real`] when the literal exceeds the `i64` range. Decimals
/// (digits on both sides of the point, optional sign) become
/// [`Value::Real`]. Anything else, including exponent notation, is not a
/// numeric literal.
pub(crate) fn parse_number(text: &str) -> Option<Value> {
    if INTEGER_LITERAL.is_match(text) {
        return match text.parse::<i64>() {
            Ok(n) => Some(Value::Integer(n)),
            Err(_) => text.parse::<f64>().ok().map(Value::Real),
        };
    }
    if DECIMAL_LITERAL.is_match(text) {
        return text.parse::<f64>().ok().map(Value::Real);
    }
    None
}
