// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use relwin_type::{Type, Value};

pub use crate::ops::{ArithOp, CompareOp};

/// Expression tree evaluated by both backends.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
	Constant(Value),
	/// A field of the row a lambda is applied to.
	Field(String),
	Variable(String),
	Compare {
		op: CompareOp,
		left: Box<Expression>,
		right: Box<Expression>,
	},
	Arith {
		op: ArithOp,
		left: Box<Expression>,
		right: Box<Expression>,
	},
	And(Box<Expression>, Box<Expression>),
	Or(Box<Expression>, Box<Expression>),
	Not(Box<Expression>),
	Call {
		name: String,
		args: Vec<Expression>,
	},
	/// A unary row function. `returns` overrides the inferred return type.
	Lambda {
		returns: Option<Type>,
		body: Box<Expression>,
	},
}

impl Expression {
	pub fn constant(value: impl Into<Value>) -> Self {
		Expression::Constant(value.into())
	}

	pub fn field(name: impl Into<String>) -> Self {
		Expression::Field(name.into())
	}

	pub fn variable(name: impl Into<String>) -> Self {
		Expression::Variable(name.into())
	}

	pub fn call(name: impl Into<String>, args: Vec<Expression>) -> Self {
		Expression::Call {
			name: name.into(),
			args,
		}
	}

	pub fn lambda(body: Expression) -> Self {
		Expression::Lambda {
			returns: None,
			body: Box::new(body),
		}
	}

	pub fn lambda_returning(returns: Type, body: Expression) -> Self {
		Expression::Lambda {
			returns: Some(returns),
			body: Box::new(body),
		}
	}

	pub fn compare(op: CompareOp, left: Expression, right: Expression) -> Self {
		Expression::Compare {
			op,
			left: Box::new(left),
			right: Box::new(right),
		}
	}

	pub fn arith(op: ArithOp, left: Expression, right: Expression) -> Self {
		Expression::Arith {
			op,
			left: Box::new(left),
			right: Box::new(right),
		}
	}

	pub fn and(left: Expression, right: Expression) -> Self {
		Expression::And(Box::new(left), Box::new(right))
	}

	pub fn or(left: Expression, right: Expression) -> Self {
		Expression::Or(Box::new(left), Box::new(right))
	}

	pub fn not(inner: Expression) -> Self {
		Expression::Not(Box::new(inner))
	}

	/// The type this expression is known to produce without evaluating it.
	/// `Any` when it depends on runtime values.
	pub fn static_type(&self) -> Type {
		match self {
			Expression::Constant(value) => value.get_type(),
			Expression::Compare {
				..
			}
			| Expression::And(..)
			| Expression::Or(..)
			| Expression::Not(_) => Type::Boolean,
			Expression::Lambda {
				..
			} => Type::Function,
			Expression::Field(_)
			| Expression::Variable(_)
			| Expression::Arith {
				..
			}
			| Expression::Call {
				..
			} => Type::Any,
		}
	}

	/// Return type of a lambda: the declared one, else the body's static type.
	pub fn lambda_return_type(returns: Option<Type>, body: &Expression) -> Type {
		returns.unwrap_or_else(|| body.static_type())
	}
}

impl Display for Expression {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Expression::Constant(Value::Utf8(text)) => write!(f, "'{}'", text),
			Expression::Constant(value) => Display::fmt(value, f),
			Expression::Field(name) => write!(f, "row.{}", name),
			Expression::Variable(name) => write!(f, "${}", name),
			Expression::Compare {
				op,
				left,
				right,
			} => write!(f, "({} {} {})", left, op, right),
			Expression::Arith {
				op,
				left,
				right,
			} => write!(f, "({} {} {})", left, op, right),
			Expression::And(left, right) => write!(f, "({} and {})", left, right),
			Expression::Or(left, right) => write!(f, "({} or {})", left, right),
			Expression::Not(inner) => write!(f, "not {}", inner),
			Expression::Call {
				name,
				args,
			} => {
				write!(f, "{}(", name)?;
				for (idx, arg) in args.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(arg, f)?;
				}
				f.write_str(")")
			}
			Expression::Lambda {
				returns: Some(returns),
				body,
			} => write!(f, "row -> {}: {}", returns, body),
			Expression::Lambda {
				returns: None,
				body,
			} => write!(f, "row -> {}", body),
		}
	}
}
