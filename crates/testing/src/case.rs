// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! File-based conformance cases.
//!
//! A case binds relations and scalar variables, evaluates one expression and
//! states the rendered outcome: either `expect` (the operand's display form)
//! or `error` (the diagnostic, `[CODE] message`).
//!
//! ```json
//! {
//!   "relations": { "t": { "columns": ["value"], "rows": [[1], [5]] } },
//!   "expression": { "call": { "name": "having", "args": [
//!     { "var": "t" },
//!     { "lambda": { "body": { "gt": [{ "field": "value" }, { "const": 3 }] } } }
//!   ] } },
//!   "expect": "[value]\n{value: 5}"
//! }
//! ```

use std::{collections::BTreeMap, error::Error, fs, path::Path};

use relwin_core::{Relation, RowLayout};
use relwin_engine::{
	Backend, Expression, Operand, Variables,
	expression::{ArithOp, CompareOp},
};
use relwin_type::{IntoDiagnostic, Result, Timestamp, Type, Value};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Case {
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub relations: BTreeMap<String, CaseRelation>,
	#[serde(default)]
	pub variables: BTreeMap<String, CaseValue>,
	pub expression: CaseExpr,
	#[serde(default)]
	pub expect: Option<String>,
	#[serde(default)]
	pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaseRelation {
	pub columns: Vec<String>,
	#[serde(default)]
	pub rows: Vec<Vec<CaseValue>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CaseValue {
	Undefined,
	Boolean(bool),
	Int8(i64),
	Float8(f64),
	DateTime {
		datetime: String,
	},
	Utf8(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseExpr {
	Const(CaseValue),
	Field(String),
	Var(String),
	Eq(Box<CaseExpr>, Box<CaseExpr>),
	Ne(Box<CaseExpr>, Box<CaseExpr>),
	Gt(Box<CaseExpr>, Box<CaseExpr>),
	Ge(Box<CaseExpr>, Box<CaseExpr>),
	Lt(Box<CaseExpr>, Box<CaseExpr>),
	Le(Box<CaseExpr>, Box<CaseExpr>),
	Add(Box<CaseExpr>, Box<CaseExpr>),
	Sub(Box<CaseExpr>, Box<CaseExpr>),
	Mul(Box<CaseExpr>, Box<CaseExpr>),
	And(Box<CaseExpr>, Box<CaseExpr>),
	Or(Box<CaseExpr>, Box<CaseExpr>),
	Not(Box<CaseExpr>),
	Call {
		name: String,
		#[serde(default)]
		args: Vec<CaseExpr>,
	},
	Lambda {
		#[serde(default)]
		returns: Option<Type>,
		body: Box<CaseExpr>,
	},
}

impl Case {
	pub fn load(path: &Path) -> std::result::Result<Self, Box<dyn Error>> {
		let text = fs::read_to_string(path)?;
		let case: Case = serde_json::from_str(&text)?;
		if case.expect.is_some() == case.error.is_some() {
			return Err(format!("{}: exactly one of 'expect' or 'error' must be given", path.display()).into());
		}
		Ok(case)
	}

	pub fn variables(&self) -> Result<Variables> {
		let mut variables = Variables::new();
		for (name, relation) in &self.relations {
			variables.set(name.as_str(), relation.to_relation()?);
		}
		for (name, value) in &self.variables {
			variables.set(name.as_str(), value.to_value()?);
		}
		Ok(variables)
	}

	pub fn expression(&self) -> Result<Expression> {
		self.expression.to_expression()
	}

	/// The outcome the case states, in rendered form.
	pub fn expected(&self) -> String {
		match (&self.expect, &self.error) {
			(Some(expect), _) => expect.clone(),
			(None, Some(error)) => error.clone(),
			(None, None) => String::new(),
		}
	}

	/// Evaluates the case on `backend` and renders the outcome.
	pub fn run(&self, backend: &dyn Backend) -> String {
		let result = self.variables().and_then(|variables| backend.execute(&self.expression()?, &variables));
		render(result)
	}
}

pub fn render(result: Result<Operand>) -> String {
	match result {
		Ok(operand) => operand.to_string(),
		Err(err) => err.into_diagnostic().to_string(),
	}
}

impl CaseRelation {
	pub fn to_relation(&self) -> Result<Relation> {
		let rows = self
			.rows
			.iter()
			.map(|row| row.iter().map(CaseValue::to_value).collect::<Result<Vec<_>>>())
			.collect::<Result<Vec<_>>>()?;
		Relation::new(RowLayout::new(self.columns.iter().cloned()), rows)
	}
}

impl CaseValue {
	pub fn to_value(&self) -> Result<Value> {
		Ok(match self {
			CaseValue::Undefined => Value::Undefined,
			CaseValue::Boolean(value) => Value::Boolean(*value),
			CaseValue::Int8(value) => Value::Int8(*value),
			CaseValue::Float8(value) => Value::Float8(*value),
			CaseValue::DateTime {
				datetime,
			} => Value::DateTime(datetime.parse::<Timestamp>()?),
			CaseValue::Utf8(text) => Value::Utf8(text.clone()),
		})
	}
}

impl CaseExpr {
	pub fn to_expression(&self) -> Result<Expression> {
		let compare = |op, l: &CaseExpr, r: &CaseExpr| -> Result<Expression> {
			Ok(Expression::compare(op, l.to_expression()?, r.to_expression()?))
		};
		let arith = |op, l: &CaseExpr, r: &CaseExpr| -> Result<Expression> {
			Ok(Expression::arith(op, l.to_expression()?, r.to_expression()?))
		};

		match self {
			CaseExpr::Const(value) => Ok(Expression::Constant(value.to_value()?)),
			CaseExpr::Field(name) => Ok(Expression::field(name.as_str())),
			CaseExpr::Var(name) => Ok(Expression::variable(name.as_str())),
			CaseExpr::Eq(l, r) => compare(CompareOp::Eq, l, r),
			CaseExpr::Ne(l, r) => compare(CompareOp::Ne, l, r),
			CaseExpr::Gt(l, r) => compare(CompareOp::Gt, l, r),
			CaseExpr::Ge(l, r) => compare(CompareOp::Ge, l, r),
			CaseExpr::Lt(l, r) => compare(CompareOp::Lt, l, r),
			CaseExpr::Le(l, r) => compare(CompareOp::Le, l, r),
			CaseExpr::Add(l, r) => arith(ArithOp::Add, l, r),
			CaseExpr::Sub(l, r) => arith(ArithOp::Sub, l, r),
			CaseExpr::Mul(l, r) => arith(ArithOp::Mul, l, r),
			CaseExpr::And(l, r) => Ok(Expression::and(l.to_expression()?, r.to_expression()?)),
			CaseExpr::Or(l, r) => Ok(Expression::or(l.to_expression()?, r.to_expression()?)),
			CaseExpr::Not(inner) => Ok(Expression::not(inner.to_expression()?)),
			CaseExpr::Call {
				name,
				args,
			} => Ok(Expression::call(
				name.as_str(),
				args.iter().map(CaseExpr::to_expression).collect::<Result<Vec<_>>>()?,
			)),
			CaseExpr::Lambda {
				returns,
				body,
			} => Ok(Expression::Lambda {
				returns: *returns,
				body: Box::new(body.to_expression()?),
			}),
		}
	}
}
