use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        executor::core::{strip_comment, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Executes a conditional block (`if` ... `else`? ... `fi`).
    ///
    /// The guard is evaluated exactly once; the then-branch runs only when
    /// it evaluates to `Bool(true)` — any other value selects the else
    /// path. Lines of the branch not taken are skipped without being
    /// dispatched, so block keywords inside a skipped branch are seen
    /// textually. `else` and `fi` are matched case-insensitively on the
    /// trimmed line.
    ///
    /// # Errors
    /// `EvalError::UnexpectedEndOfFile` when the line source is exhausted
    /// before `fi`, plus any guard or body evaluation error.
    pub(crate) fn run_if_block(&mut self, condition: &str) -> EvalResult<()> {
        let guard_true = self.evaluate(condition)? == Value::Bool(true);
        let mut in_else = false;

        while self.scanner.has_next() {
            let line = self.scanner.next_line().unwrap_or_default();
            let line = line.trim();

            if line.eq_ignore_ascii_case("else") {
                in_else = true;
                continue;
            }
            if line.eq_ignore_ascii_case("fi") {
                return Ok(());
            }

            let executing = if guard_true { !in_else } else { in_else };
            if executing {
                self.run(line)?;
            }
        }
        Err(EvalError::UnexpectedEndOfFile { expected: "fi" })
    }

    /// Executes a loop block (`while` ... `done`).
    ///
    /// The body start position is recorded on entry; the guard is
    /// re-evaluated before every iteration. While it evaluates to
    /// `Bool(true)`, body lines are dispatched until a line equal to
    /// `done` jumps the scanner back to the recorded position. Once the
    /// guard is anything else, lines are scanned forward without executing
    /// until `done`; exhausting the source during that scan is tolerated
    /// silently.
    ///
    /// # Errors
    /// `EvalError::UnexpectedEndOfFile` when the source ends inside an
    /// active iteration, plus any guard or body evaluation error.
    pub(crate) fn run_while_block(&mut self, condition: &str) -> EvalResult<()> {
        let body_start = self.scanner.index();

        'iteration: while self.evaluate(condition)? == Value::Bool(true) {
            while self.scanner.has_next() {
                let line = self.scanner.next_line().unwrap_or_default();
                let line = strip_comment(line.trim()).to_string();

                if line.eq_ignore_ascii_case("done") {
                    self.scanner.jump(body_start);
                    continue 'iteration;
                }
                self.run(&line)?;
            }
            return Err(EvalError::UnexpectedEndOfFile { expected: "done" });
        }

        while self.scanner.has_next() {
            let line = self.scanner.next_line().unwrap_or_default();
            if line.trim().eq_ignore_ascii_case("done") {
                break;
            }
        }
        Ok(())
    }
}
