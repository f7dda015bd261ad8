// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use relwin_core::{CoreConfig, HavingConfig, Interrupt};
use relwin_engine::{
	Backend, Compiler, Expression, Interpreter, Variables,
	expression::{ArithOp, CompareOp},
	native::Natives,
};
use relwin_testing::{
	case::render,
	fixture::{int8_relation, timestamp},
	tracing::init_tracing,
};
use relwin_type::{DurationUnit, Value};

fn backends(config: &CoreConfig) -> (Interpreter, Compiler) {
	let natives = Arc::new(Natives::standard());
	(Interpreter::new(natives.clone(), config), Compiler::new(natives, config))
}

fn assert_same(interpreter: &Interpreter, compiler: &Compiler, expression: &Expression, variables: &Variables) -> String {
	let interpreted = render(interpreter.execute(expression, variables));
	let compiled = render(compiler.execute(expression, variables));
	assert_eq!(interpreted, compiled, "{}", expression);
	interpreted
}

#[test]
fn test_time_slice_agrees() {
	init_tracing();
	let (interpreter, compiler) = backends(&CoreConfig::default());

	let inputs = ["2024-03-15T10:47:33Z", "2023-12-31T23:59:59-08:00", "2024-02-29T12:00:00+09:00[Asia/Tokyo]"];
	for input in inputs {
		for unit in DurationUnit::ALL {
			for size in [0i64, 1, 2, 5, 15, 7] {
				for end in [false, true] {
					let variables = Variables::new().with("ts", Value::DateTime(timestamp(input)));
					let expr = Expression::call(
						"time_slice",
						vec![
							Expression::variable("ts"),
							Expression::constant(unit.as_str()),
							Expression::constant(size),
							Expression::constant(end),
						],
					);
					assert_same(&interpreter, &compiler, &expr, &variables);
				}
			}
		}
	}
}

#[test]
fn test_frame_bounds_agree() {
	init_tracing();
	let (interpreter, compiler) = backends(&CoreConfig::default());
	let bound = |n: i64| match n {
		-1 => Expression::call("unbounded", vec![]),
		-2 => Expression::call("current_row", vec![]),
		n => Expression::constant(n),
	};

	for lower in [-1, -2, 0, 1, 3] {
		for upper in [-1, -2, 0, 2] {
			for current in 0..6i64 {
				let expr = Expression::call(
					"frame_bounds",
					vec![
						Expression::call("rows", vec![bound(lower), bound(upper)]),
						Expression::constant(current),
						Expression::constant(5i64),
					],
				);
				assert_same(&interpreter, &compiler, &expr, &Variables::new());
			}
		}
	}
}

#[test]
fn test_parallel_having_agrees() {
	init_tracing();
	let config = CoreConfig {
		having: HavingConfig {
			parallel_threshold: Some(16),
			chunk_size: 8,
		},
	};
	let (interpreter, compiler) = backends(&config);

	let values: Vec<i64> = (0..200).map(|v| (v * 37) % 101).collect();
	let variables = Variables::new().with("t", int8_relation("value", &values));
	let predicate = Expression::compare(
		CompareOp::Eq,
		Expression::arith(ArithOp::Mul, Expression::field("value"), Expression::constant(2i64)),
		Expression::arith(ArithOp::Add, Expression::field("value"), Expression::field("value")),
	);
	let even = Expression::and(
		predicate,
		Expression::compare(CompareOp::Lt, Expression::field("value"), Expression::constant(50i64)),
	);
	let expr = Expression::call("having", vec![Expression::variable("t"), Expression::lambda(even)]);

	let rendered = assert_same(&interpreter, &compiler, &expr, &variables);
	let kept = values.iter().filter(|v| **v < 50).count();
	assert_eq!(rendered.lines().count(), kept + 1);
}

#[test]
fn test_cancellation_agrees() {
	init_tracing();
	let interrupt = Interrupt::new();
	interrupt.cancel();
	let (interpreter, compiler) = backends(&CoreConfig::default());
	let (interpreter, compiler) = (interpreter.with_interrupt(interrupt.clone()), compiler.with_interrupt(interrupt));

	let variables = Variables::new().with("t", int8_relation("value", &[1, 2, 3]));
	let expr = Expression::call("having", vec![Expression::variable("t"), Expression::lambda(Expression::constant(true))]);
	let rendered = assert_same(&interpreter, &compiler, &expr, &variables);
	assert_eq!(rendered, "[QUERY_003] evaluation cancelled at row 0");
}
