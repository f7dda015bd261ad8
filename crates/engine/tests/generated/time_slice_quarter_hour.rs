#[allow(unused_variables)]
pub fn time_slice_quarter_hour(ctx: &::relwin_engine::native::NativeContext, vars: &::relwin_engine::Variables) -> ::relwin_type::Result<::relwin_engine::Operand> {
	Ok({ let arg0 = vars.get("ts")?.clone(); let arg3 = vars.get("end")?.clone(); match (::relwin_engine::native::datetime("time_slice", arg0)?, ::relwin_type::DurationUnit::Minutes, 15, ::relwin_engine::native::boolean("time_slice", arg3)?) { (Some(ts), unit, size, end) => ::relwin_engine::Operand::Scalar(::relwin_type::Value::DateTime(::relwin_core::timeslice::time_slice(&ts, unit, size, end)?)), (None, ..) => ::relwin_engine::Operand::undefined() } })
}
