#[allow(unused_variables)]
pub fn time_slice_wide_hours(ctx: &::relwin_engine::native::NativeContext, vars: &::relwin_engine::Variables) -> ::relwin_type::Result<::relwin_engine::Operand> {
	Ok({ let arg0 = vars.get("ts")?.clone(); match (::relwin_engine::native::datetime("time_slice", arg0)?, ::relwin_type::DurationUnit::Hours, ::relwin_core::timeslice::slice_size(::relwin_engine::native::int8("time_slice", ::relwin_engine::Operand::Scalar(::relwin_type::Value::Int8(4294967296)))?)?, false) { (Some(ts), unit, size, end) => ::relwin_engine::Operand::Scalar(::relwin_type::Value::DateTime(::relwin_core::timeslice::time_slice(&ts, unit, size, end)?)), (None, ..) => ::relwin_engine::Operand::undefined() } })
}
