//! Expression parsing, evaluation, and the validity gate.
//!
//! Parsing and evaluation are delegated to the `meval` crate; this module
//! only wraps it behind [`CompiledExpr`] and decides *when* an expression is
//! usable. Validity is a smoke test against a fixed probe set, not a domain
//! analysis: an expression that evaluates for all probes may still be
//! undefined almost everywhere, and that is fine.

use crate::error::Result;

/// Probe x values used to smoke-test an expression for validity.
pub const PROBE_VALUES: [f64; 5] = [0.0, 1.0, -1.0, 0.5, 2.0];

/// A parsed expression in the single variable `x`.
#[derive(Debug, Clone)]
pub struct CompiledExpr {
    expr: meval::Expr,
}

impl CompiledExpr {
    /// Parse an expression. Fails on syntax errors only.
    pub fn parse(text: &str) -> Result<Self> {
        let expr: meval::Expr = text.parse()?;
        Ok(Self { expr })
    }

    /// Evaluate at the given x.
    ///
    /// Unknown identifiers and bad function calls are errors; domain gaps
    /// (division by zero, log of a negative) come back as non-finite values.
    pub fn eval(&self, x: f64) -> Result<f64> {
        let mut ctx = meval::Context::new();
        ctx.var("x", x);
        Ok(self.expr.eval_with_context(ctx)?)
    }
}

/// Run the validity gate: parse, then evaluate every probe value.
///
/// Returns the compiled expression when the text is non-blank, parses, and
/// no probe evaluation fails. Non-finite probe results are tolerated.
pub fn compile_checked(text: &str) -> Option<CompiledExpr> {
    if text.trim().is_empty() {
        return None;
    }

    let compiled = CompiledExpr::parse(text).ok()?;
    for x in PROBE_VALUES {
        if compiled.eval(x).is_err() {
            return None;
        }
    }
    Some(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polynomial_is_valid() {
        let expr = compile_checked("x^2").expect("x^2 should be valid");
        assert_eq!(expr.eval(3.0).unwrap(), 9.0);
    }

    #[test]
    fn domain_gaps_are_tolerated() {
        // 1/x is infinite at the x=0 probe, ln(x) is NaN at negative probes;
        // neither is an evaluation failure.
        assert!(compile_checked("1/x").is_some());
        assert!(compile_checked("ln(x)").is_some());
        assert!(compile_checked("sin(x)/x").is_some());
    }

    #[test]
    fn blank_is_invalid() {
        assert!(compile_checked("").is_none());
        assert!(compile_checked("   ").is_none());
    }

    #[test]
    fn syntax_errors_are_invalid() {
        assert!(compile_checked("x +").is_none());
        assert!(compile_checked("((x)").is_none());
    }

    #[test]
    fn unknown_identifiers_are_invalid() {
        // These fail at every probe, not just one.
        assert!(compile_checked("y + 1").is_none());
        assert!(compile_checked("nosuchfn(x)").is_none());
    }

    #[test]
    fn constants_are_available() {
        let expr = compile_checked("sin(pi*x)").expect("pi should be known");
        assert!(expr.eval(1.0).unwrap().abs() < 1e-12);
    }
}
