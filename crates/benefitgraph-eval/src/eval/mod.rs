//! Expression evaluation against a household.


use std::cmp::Ordering;

use benefitgraph_core::{Household, Person, Value};

use crate::error::{EvalError, Result};
use crate::expr::{Aggregate, Expr, Subject};

/// Context for expression evaluation.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
    /// The household being evaluated.
    pub household: &'a Household,
    /// Member bound by the innermost `any(...)`, if any.
    pub bound: Option<usize>,
}

impl<'a> EvalContext<'a> {
    pub fn new(household: &'a Household) -> Self {
        Self {
            household,
            bound: None,
        }
    }

    fn bind(self, index: usize) -> Self {
        Self {
            bound: Some(index),
            ..self
        }
    }

    /// Resolves a subject to a household member.
    pub fn person(&self, subject: Subject) -> Result<&'a Person> {
        match subject {
            Subject::Member(index) => {
                self.household
                    .member(index)
                    .ok_or_else(|| EvalError::NoSuchMember {
                        index,
                        len: self.household.num_members(),
                    })
            }
            Subject::Spouse => self.household.spouse().ok_or(EvalError::NoSpouse),
            Subject::Each => {
                let index = self.bound.ok_or(EvalError::UnboundMember)?;
                self.person(Subject::Member(index))
            }
        }
    }

    fn attribute(&self, subject: Subject, name: &str) -> Result<Value> {
        let person = self.person(subject)?;
        person
            .value(name)
            .cloned()
            .ok_or_else(|| EvalError::MissingAttribute {
                subject: self.describe(subject),
                attribute: name.to_string(),
            })
    }

    // Names the concrete member for error messages.
    fn describe(&self, subject: Subject) -> String {
        match (subject, self.bound) {
            (Subject::Each, Some(i)) => Subject::Member(i).to_string(),
            _ => subject.to_string(),
        }
    }
}

/// Evaluates an expression in the given context.
///
/// # Errors
///
/// [`EvalError::MissingAttribute`] when the household lacks a field the
/// expression reads; any other variant signals a malformed expression.
pub fn eval_expr(expr: &Expr, ctx: &EvalContext) -> Result<Value> {
    match expr {
        Expr::Literal(v) => Ok(v.clone()),

        Expr::Attr { subject, name } => ctx.attribute(*subject, name),

        Expr::HasSpouse => Ok(Value::Bool(ctx.household.spouse().is_some())),

        Expr::Aggregate(aggregate) => eval_aggregate(*aggregate, ctx.household),

        Expr::TotalIncome(subject) => {
            let person = ctx.person(*subject)?;
            person.total_income().map(Value::Int).map_err(|e| {
                match EvalError::from(e) {
                    EvalError::MissingAttribute { attribute, .. } => {
                        EvalError::MissingAttribute {
                            subject: ctx.describe(*subject),
                            attribute,
                        }
                    }
                    other => other,
                }
            })
        }

        Expr::Eq(left, right) => {
            let l = eval_expr(left, ctx)?;
            let r = eval_expr(right, ctx)?;
            Ok(Value::Bool(l == r))
        }

        Expr::Ne(left, right) => {
            let l = eval_expr(left, ctx)?;
            let r = eval_expr(right, ctx)?;
            Ok(Value::Bool(l != r))
        }

        Expr::Lt(left, right) => ordered(left, right, ctx, "<", Ordering::is_lt),
        Expr::Le(left, right) => ordered(left, right, ctx, "<=", Ordering::is_le),
        Expr::Gt(left, right) => ordered(left, right, ctx, ">", Ordering::is_gt),
        Expr::Ge(left, right) => ordered(left, right, ctx, ">=", Ordering::is_ge),

        // Short-circuit left to right: an unread right side cannot be missing.
        Expr::And(left, right) => {
            if !eval_expr(left, ctx)?.is_truthy() {
                return Ok(Value::Bool(false));
            }
            Ok(Value::Bool(eval_expr(right, ctx)?.is_truthy()))
        }

        Expr::Or(left, right) => {
            if eval_expr(left, ctx)?.is_truthy() {
                return Ok(Value::Bool(true));
            }
            Ok(Value::Bool(eval_expr(right, ctx)?.is_truthy()))
        }

        Expr::Not(inner) => Ok(Value::Bool(!eval_expr(inner, ctx)?.is_truthy())),

        Expr::Add(left, right) => arithmetic(left, right, ctx, "+", i64::checked_add),
        Expr::Sub(left, right) => arithmetic(left, right, ctx, "-", i64::checked_sub),
        Expr::Mul(left, right) => arithmetic(left, right, ctx, "*", i64::checked_mul),

        Expr::In(inner, values) => {
            let v = eval_expr(inner, ctx)?;
            Ok(Value::Bool(values.contains(&v)))
        }

        Expr::Any(body) => eval_any(body, ctx),
    }
}

/// Evaluates `expr` and reduces the result to a boolean.
pub fn eval_condition(expr: &Expr, ctx: &EvalContext) -> Result<bool> {
    eval_expr(expr, ctx).map(|v| v.is_truthy())
}

fn eval_aggregate(aggregate: Aggregate, hh: &Household) -> Result<Value> {
    let total = match aggregate {
        Aggregate::NumMembers => {
            return i64::try_from(hh.num_members())
                .map(Value::Int)
                .map_err(|_| EvalError::Overflow { op: "num_members" });
        }
        Aggregate::HhWorkIncome => hh.hh_work_income(),
        Aggregate::HhInvestmentIncome => hh.hh_investment_income(),
        Aggregate::HhTotalIncome => hh.hh_total_income(),
        Aggregate::MarriageWorkIncome => hh.marriage_work_income(),
        Aggregate::MarriageInvestmentIncome => hh.marriage_investment_income(),
        Aggregate::MarriageTotalIncome => hh.marriage_total_income(),
    };
    Ok(Value::Int(total?))
}

// True if any member satisfies the body. A missing field on one member does not
// hide a definite match on another; it only matters when nobody matches.
fn eval_any(body: &Expr, ctx: &EvalContext) -> Result<Value> {
    let mut missing = None;
    for index in 0..ctx.household.num_members() {
        match eval_expr(body, &ctx.bind(index)) {
            Ok(v) if v.is_truthy() => return Ok(Value::Bool(true)),
            Ok(_) => {}
            Err(e) if e.is_missing() => {
                missing.get_or_insert(e);
            }
            Err(e) => return Err(e),
        }
    }
    match missing {
        Some(e) => Err(e),
        None => Ok(Value::Bool(false)),
    }
}

fn ordered(
    left: &Expr,
    right: &Expr,
    ctx: &EvalContext,
    op: &'static str,
    test: fn(Ordering) -> bool,
) -> Result<Value> {
    let l = eval_expr(left, ctx)?;
    let r = eval_expr(right, ctx)?;
    let ordering = match (&l, &r) {
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::Str(a), Value::Str(b)) => a.cmp(b),
        _ => {
            return Err(EvalError::TypeMismatch {
                op,
                left: l,
                right: r,
            })
        }
    };
    Ok(Value::Bool(test(ordering)))
}

fn arithmetic(
    left: &Expr,
    right: &Expr,
    ctx: &EvalContext,
    op: &'static str,
    apply: fn(i64, i64) -> Option<i64>,
) -> Result<Value> {
    let l = eval_expr(left, ctx)?;
    let r = eval_expr(right, ctx)?;
    match (&l, &r) {
        (Value::Int(a), Value::Int(b)) => apply(*a, *b)
            .map(Value::Int)
            .ok_or(EvalError::Overflow { op }),
        _ => Err(EvalError::TypeMismatch {
            op,
            left: l,
            right: r,
        }),
    }
}
