//! Condition expressions attached to eligibility graph edges.
//!
//! A condition is a small expression tree over a household rather than an
//! opaque closure: it carries the member index it was built for by value, it
//! can be rendered back to text for explanations, and it can be compared in
//! tests.

use std::fmt;
use std::ops::{Add, Mul, Not, Sub};

use benefitgraph_core::Value;

/// Whose attribute an [`Expr::Attr`] reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    /// A fixed household member; `Member(0)` is the user.
    Member(usize),
    /// The user's spouse. Fails if the household has none.
    Spouse,
    /// The member currently bound by the innermost [`Expr::Any`].
    Each,
}

impl Subject {
    pub const USER: Subject = Subject::Member(0);
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Member(0) => write!(f, "user"),
            Subject::Member(i) => write!(f, "members[{}]", i),
            Subject::Spouse => write!(f, "spouse"),
            Subject::Each => write!(f, "member"),
        }
    }
}

/// Household-level derived quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aggregate {
    NumMembers,
    HhWorkIncome,
    HhInvestmentIncome,
    HhTotalIncome,
    MarriageWorkIncome,
    MarriageInvestmentIncome,
    MarriageTotalIncome,
}

impl Aggregate {
    pub fn as_str(self) -> &'static str {
        match self {
            Aggregate::NumMembers => "num_members",
            Aggregate::HhWorkIncome => "hh_work_income",
            Aggregate::HhInvestmentIncome => "hh_investment_income",
            Aggregate::HhTotalIncome => "hh_total_income",
            Aggregate::MarriageWorkIncome => "marriage_work_income",
            Aggregate::MarriageInvestmentIncome => "marriage_investment_income",
            Aggregate::MarriageTotalIncome => "marriage_total_income",
        }
    }
}

/// An expression tree node for edge conditions.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Value),
    Attr {
        subject: Subject,
        name: String,
    },
    /// True if the household has a spouse.
    HasSpouse,
    Aggregate(Aggregate),
    /// Work plus investment income of one person.
    TotalIncome(Subject),
    Eq(Box<Expr>, Box<Expr>),
    Ne(Box<Expr>, Box<Expr>),
    Lt(Box<Expr>, Box<Expr>),
    Le(Box<Expr>, Box<Expr>),
    Gt(Box<Expr>, Box<Expr>),
    Ge(Box<Expr>, Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Not(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    /// Membership in a fixed set of values.
    In(Box<Expr>, Vec<Value>),
    /// True if the body holds for at least one member, bound as [`Subject::Each`].
    Any(Box<Expr>),
}

impl Expr {
    // Constructors for common expressions

    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn int(value: i64) -> Self {
        Expr::Literal(Value::Int(value))
    }

    pub fn bool(value: bool) -> Self {
        Expr::Literal(Value::Bool(value))
    }

    pub fn str(value: &str) -> Self {
        Expr::Literal(Value::from(value))
    }

    pub fn attr(subject: Subject, name: &str) -> Self {
        Expr::Attr {
            subject,
            name: name.to_string(),
        }
    }

    /// An attribute of the user (member 0).
    pub fn user(name: &str) -> Self {
        Self::attr(Subject::USER, name)
    }

    pub fn member(index: usize, name: &str) -> Self {
        Self::attr(Subject::Member(index), name)
    }

    pub fn spouse(name: &str) -> Self {
        Self::attr(Subject::Spouse, name)
    }

    /// An attribute of the member bound by the enclosing [`Expr::any`].
    pub fn each(name: &str) -> Self {
        Self::attr(Subject::Each, name)
    }

    pub fn has_spouse() -> Self {
        Expr::HasSpouse
    }

    pub fn aggregate(aggregate: Aggregate) -> Self {
        Expr::Aggregate(aggregate)
    }

    pub fn total_income(subject: Subject) -> Self {
        Expr::TotalIncome(subject)
    }

    pub fn eq(left: Expr, right: Expr) -> Self {
        Expr::Eq(Box::new(left), Box::new(right))
    }

    pub fn ne(left: Expr, right: Expr) -> Self {
        Expr::Ne(Box::new(left), Box::new(right))
    }

    pub fn lt(left: Expr, right: Expr) -> Self {
        Expr::Lt(Box::new(left), Box::new(right))
    }

    pub fn le(left: Expr, right: Expr) -> Self {
        Expr::Le(Box::new(left), Box::new(right))
    }

    pub fn gt(left: Expr, right: Expr) -> Self {
        Expr::Gt(Box::new(left), Box::new(right))
    }

    pub fn ge(left: Expr, right: Expr) -> Self {
        Expr::Ge(Box::new(left), Box::new(right))
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Expr::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Expr::Or(Box::new(left), Box::new(right))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(expr: Expr) -> Self {
        Expr::Not(Box::new(expr))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(left: Expr, right: Expr) -> Self {
        Expr::Add(Box::new(left), Box::new(right))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn sub(left: Expr, right: Expr) -> Self {
        Expr::Sub(Box::new(left), Box::new(right))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn mul(left: Expr, right: Expr) -> Self {
        Expr::Mul(Box::new(left), Box::new(right))
    }

    pub fn is_in<V: Into<Value>>(expr: Expr, values: impl IntoIterator<Item = V>) -> Self {
        Expr::In(Box::new(expr), values.into_iter().map(Into::into).collect())
    }

    pub fn any(body: Expr) -> Self {
        Expr::Any(Box::new(body))
    }

    /// `low <= expr <= high`.
    pub fn between(expr: Expr, low: i64, high: i64) -> Self {
        Self::and(
            Self::le(Self::int(low), expr.clone()),
            Self::le(expr, Self::int(high)),
        )
    }

    /// True if no spouse exists or the given spouse condition holds.
    pub fn spouse_absent_or(condition: Expr) -> Self {
        Self::or(Self::not(Self::HasSpouse), condition)
    }

    fn is_atomic(&self) -> bool {
        matches!(
            self,
            Expr::Literal(_)
                | Expr::Attr { .. }
                | Expr::HasSpouse
                | Expr::Aggregate(_)
                | Expr::TotalIncome(_)
                | Expr::Any(_)
        )
    }
}

// Operands that are not atomic are parenthesized.
struct Operand<'a>(&'a Expr);

fn binary(f: &mut fmt::Formatter<'_>, l: &Expr, op: &str, r: &Expr) -> fmt::Result {
    write!(f, "{} {} {}", Operand(l), op, Operand(r))
}

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_atomic() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "({})", self.0)
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(v) => write!(f, "{}", v),
            Expr::Attr { subject, name } => write!(f, "{}.{}", subject, name),
            Expr::HasSpouse => write!(f, "has_spouse()"),
            Expr::Aggregate(a) => write!(f, "{}()", a.as_str()),
            Expr::TotalIncome(s) => write!(f, "{}.total_income()", s),
            Expr::Eq(l, r) => binary(f, l, "==", r),
            Expr::Ne(l, r) => binary(f, l, "!=", r),
            Expr::Lt(l, r) => binary(f, l, "<", r),
            Expr::Le(l, r) => binary(f, l, "<=", r),
            Expr::Gt(l, r) => binary(f, l, ">", r),
            Expr::Ge(l, r) => binary(f, l, ">=", r),
            Expr::And(l, r) => binary(f, l, "and", r),
            Expr::Or(l, r) => binary(f, l, "or", r),
            Expr::Add(l, r) => binary(f, l, "+", r),
            Expr::Sub(l, r) => binary(f, l, "-", r),
            Expr::Mul(l, r) => binary(f, l, "*", r),
            Expr::Not(e) => write!(f, "not {}", Operand(e)),
            Expr::In(e, values) => {
                write!(f, "{} in [", Operand(e))?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Expr::Any(body) => write!(f, "any({} for member in members)", body),
        }
    }
}

// Implement std::ops traits for operator syntax

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        Expr::Not(Box::new(self))
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(Box::new(self), Box::new(rhs))
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(Box::new(self), Box::new(rhs))
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(Box::new(self), Box::new(rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_member_condition() {
        let e = Expr::lt(Expr::member(2, "age"), Expr::int(13));
        assert_eq!(e.to_string(), "members[2].age < 13");
    }

    #[test]
    fn test_display_nesting() {
        let e = Expr::and(
            Expr::user("filing_jointly"),
            Expr::not(Expr::eq(Expr::spouse("relation"), Expr::str("spouse"))),
        );
        assert_eq!(
            e.to_string(),
            "user.filing_jointly and (not (spouse.relation == \"spouse\"))"
        );
    }

    #[test]
    fn test_display_any_and_in() {
        let e = Expr::any(Expr::is_in(Expr::each("relation"), ["child", "stepchild"]));
        assert_eq!(
            e.to_string(),
            "any(member.relation in [\"child\", \"stepchild\"] for member in members)"
        );
        let total = Expr::le(Expr::aggregate(Aggregate::HhTotalIncome), Expr::int(100));
        assert_eq!(total.to_string(), "hh_total_income() <= 100");
    }

    #[test]
    fn test_operator_syntax() {
        let e = Expr::int(36) * Expr::user("monthly_rent_spending");
        assert_eq!(e, Expr::mul(Expr::int(36), Expr::user("monthly_rent_spending")));
        assert_eq!(!Expr::has_spouse(), Expr::not(Expr::HasSpouse));
    }
}
