//! The statement walker.
//!
//! Execution is a synchronous, depth-first, post-order walk: child
//! expressions are evaluated before their parent's operator is applied.
//! Loop conditions are re-evaluated from their AST node on every
//! iteration — loop bodies mutate the environment and later iterations
//! must observe the updated values.

use mini_ir::{Expr, ExprKind, Program, Stmt, StmtKind};

use crate::environment::Environment;
use crate::errors::{condition_not_bool, undefined_variable, EvalError, EvalResult};
use crate::operators::{evaluate_binary, evaluate_comparison};
use crate::print_handler::PrintHandler;
use crate::Value;

/// Evaluate a program, capturing print output.
///
/// Returns the accumulated output and the runtime error that stopped
/// execution, if any. Output produced before a failure is preserved.
/// Each call constructs a fresh environment; nothing is shared between
/// calls.
pub fn evaluate(program: &Program) -> (String, Option<EvalError>) {
    let mut interpreter = Interpreter::new(PrintHandler::buffer());
    let error = interpreter.run(program).err();
    (interpreter.output(), error)
}

/// Tree-walking interpreter over one environment.
pub struct Interpreter {
    env: Environment,
    printer: PrintHandler,
}

impl Interpreter {
    /// Create an interpreter with a fresh environment.
    pub fn new(printer: PrintHandler) -> Self {
        Interpreter {
            env: Environment::new(),
            printer,
        }
    }

    /// Execute every statement in order.
    pub fn run(&mut self, program: &Program) -> Result<(), EvalError> {
        for stmt in &program.stmts {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    /// Captured print output (empty for the stdout handler).
    pub fn output(&self) -> String {
        self.printer.output()
    }

    fn exec_stmt(&mut self, stmt: &Stmt) -> Result<(), EvalError> {
        match &stmt.kind {
            StmtKind::Assign { name, value } => {
                let value = self.eval_expr(value)?;
                self.env.define(name.clone(), value);
                Ok(())
            }
            StmtKind::If { cond, body } => {
                if self.eval_condition(cond)? {
                    self.exec_block(body)?;
                }
                Ok(())
            }
            // `loop_while` is a distinct surface form with identical
            // semantics.
            StmtKind::While { cond, body } | StmtKind::LoopWhile { cond, body } => {
                while self.eval_condition(cond)? {
                    self.exec_block(body)?;
                }
                Ok(())
            }
            StmtKind::ForEach {
                var,
                iterable,
                body,
            } => self.exec_foreach(var, iterable, body),
            StmtKind::Print { value } => {
                let value = self.eval_expr(value)?;
                self.printer.println(&value.to_string());
                Ok(())
            }
        }
    }

    fn exec_block(&mut self, body: &[Stmt]) -> Result<(), EvalError> {
        for stmt in body {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    /// `loop var in iterable ... end`.
    ///
    /// The iterable is evaluated exactly once. A non-list value is
    /// treated as a one-element sequence.
    fn exec_foreach(&mut self, var: &str, iterable: &Expr, body: &[Stmt]) -> Result<(), EvalError> {
        let items = match self.eval_expr(iterable)? {
            Value::List(items) => items,
            single => vec![single],
        };
        for item in items {
            self.env.define(var.to_owned(), item);
            self.exec_block(body)?;
        }
        Ok(())
    }

    /// Evaluate a condition expression down to its boolean.
    fn eval_condition(&self, cond: &Expr) -> Result<bool, EvalError> {
        match self.eval_expr(cond)? {
            Value::Bool(b) => Ok(b),
            other => Err(condition_not_bool(&other)),
        }
    }

    /// Post-order expression evaluation.
    fn eval_expr(&self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Var(name) => self
                .env
                .lookup(name)
                .ok_or_else(|| undefined_variable(name.clone())),
            ExprKind::Int(n) => Ok(Value::Int(*n)),
            ExprKind::Str(s) => Ok(Value::string(s.clone())),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::List(elements) => {
                let mut items = Vec::with_capacity(elements.len());
                for element in elements {
                    items.push(self.eval_expr(element)?);
                }
                Ok(Value::List(items))
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(*op, &left, &right)
            }
            ExprKind::Condition { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_comparison(*op, &left, &right)
            }
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::errors::EvalErrorKind;
    use pretty_assertions::assert_eq;

    fn eval_source(source: &str) -> (String, Option<EvalError>) {
        let tokens = mini_lexer::lex(source).unwrap();
        let program = mini_parse::parse(&tokens).unwrap();
        evaluate(&program)
    }

    fn eval_ok(source: &str) -> String {
        let (output, error) = eval_source(source);
        assert_eq!(error, None, "unexpected runtime error");
        output
    }

    #[test]
    fn print_integer_division() {
        assert_eq!(eval_ok("print(7 / 2)"), "3\n");
        assert_eq!(eval_ok("print((0 - 7) / 2)"), "-4\n");
    }

    #[test]
    fn division_by_zero_produces_no_output_line() {
        let (output, error) = eval_source("print(1 / 0)");
        assert_eq!(output, "");
        assert_eq!(error.unwrap().kind, EvalErrorKind::DivisionByZero);
    }

    #[test]
    fn undefined_variable_error() {
        let (output, error) = eval_source("print(x)");
        assert_eq!(output, "");
        assert_eq!(
            error.unwrap().kind,
            EvalErrorKind::UndefinedVariable { name: "x".into() }
        );
    }

    #[test]
    fn while_loop_counts_up() {
        let output = eval_ok("x = 0 while x < 3 print(x) x = x + 1 end");
        assert_eq!(output, "0\n1\n2\n");
    }

    #[test]
    fn loop_while_behaves_like_while() {
        let output = eval_ok("x = 0 loop_while x < 3 print(x) x = x + 1 end");
        assert_eq!(output, "0\n1\n2\n");
    }

    #[test]
    fn zero_iteration_loop_is_valid() {
        assert_eq!(eval_ok("x = 5 while x < 3 print(x) end print(x)"), "5\n");
    }

    #[test]
    fn foreach_over_list() {
        let output = eval_ok("loop v in [1, 2, 3] print(v) end");
        assert_eq!(output, "1\n2\n3\n");
    }

    #[test]
    fn foreach_over_scalar_runs_once() {
        let output = eval_ok("loop v in 5 print(v) end");
        assert_eq!(output, "5\n");
    }

    #[test]
    fn foreach_iterable_evaluated_once() {
        // Reassigning the source variable inside the body must not
        // affect the iteration sequence.
        let output = eval_ok("xs = [1, 2] loop v in xs xs = [9] print(v) end");
        assert_eq!(output, "1\n2\n");
    }

    #[test]
    fn loop_condition_reevaluated_each_iteration() {
        let output = eval_ok("x = 0 y = 3 while x < y x = x + 1 y = y - 1 end print(x) print(y)");
        assert_eq!(output, "2\n1\n");
    }

    #[test]
    fn print_list_strips_string_quotes() {
        let output = eval_ok(r#"print([1, "a", true])"#);
        assert_eq!(output, "[1, a, true]\n");
    }

    #[test]
    fn print_string_has_no_quotes() {
        assert_eq!(eval_ok(r#"print("Value of x:")"#), "Value of x:\n");
    }

    #[test]
    fn cross_kind_equality() {
        let output = eval_ok(r#"if 1 != "1" print("differs") end"#);
        assert_eq!(output, "differs\n");
        let output = eval_ok(r#"x = 0 if 1 == "1" x = 1 end print(x)"#);
        assert_eq!(output, "0\n");
    }

    #[test]
    fn if_false_skips_body_entirely() {
        assert_eq!(eval_ok("if 2 < 1 print(1) end print(2)"), "2\n");
    }

    #[test]
    fn partial_output_preserved_on_failure() {
        let (output, error) = eval_source("print(1) print(2) print(1 / 0) print(3)");
        assert_eq!(output, "1\n2\n");
        assert_eq!(error.unwrap().kind, EvalErrorKind::DivisionByZero);
    }

    #[test]
    fn assignment_overwrites_across_kinds() {
        let output = eval_ok(r#"x = 1 x = "one" print(x)"#);
        assert_eq!(output, "one\n");
    }

    #[test]
    fn environment_is_fresh_per_run() {
        let tokens = mini_lexer::lex("x = 1 print(x)").unwrap();
        let program = mini_parse::parse(&tokens).unwrap();
        let first = evaluate(&program);
        let second = evaluate(&program);
        assert_eq!(first, second);
    }

    #[test]
    fn type_error_on_mixed_arithmetic() {
        let (_, error) = eval_source(r#"x = "a" + 1 print(x)"#);
        assert!(matches!(
            error.unwrap().kind,
            EvalErrorKind::TypeMismatch { op: "+", .. }
        ));
    }

    #[test]
    fn foreach_binding_persists_after_loop() {
        // Flat environment: the loop variable is an ordinary binding.
        assert_eq!(eval_ok("loop v in [1, 2] print(v) end print(v)"), "1\n2\n2\n");
    }
}
