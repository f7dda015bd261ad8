#[allow(unused_variables)]
pub fn having_above_min(ctx: &::relwin_engine::native::NativeContext, vars: &::relwin_engine::Variables) -> ::relwin_type::Result<::relwin_engine::Operand> {
	Ok({ let arg0 = vars.get("t")?.clone(); let arg1 = ::relwin_engine::native::lambda(::relwin_type::Type::Boolean, { let ctx = ctx.clone(); let vars = vars.clone(); move |row: &::relwin_core::Row| -> ::relwin_type::Result<::relwin_type::Value> { let (ctx, vars) = (&ctx, &vars); let result: ::relwin_engine::Operand = ::relwin_engine::Operand::Scalar(::relwin_engine::ops::compare(::relwin_engine::ops::CompareOp::Gt, &::relwin_engine::Operand::Scalar(row.get("value")?.clone()).into_value(">")?, &vars.get("min")?.clone().into_value(">")?)?); result.into_value("lambda") } }); ::relwin_engine::Operand::Relation(::relwin_core::having::filter_with(&::relwin_engine::native::relation("having", arg0)?, &*::relwin_engine::native::function("having", arg1)?, &ctx.filter)?) })
}
