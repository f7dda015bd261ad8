#[allow(unused_variables)]
pub fn frame_bounds_to_next(ctx: &::relwin_engine::native::NativeContext, vars: &::relwin_engine::Variables) -> ::relwin_type::Result<::relwin_engine::Operand> {
	Ok({ let arg0 = { let arg0 = ::relwin_engine::Operand::FrameBound(::relwin_core::FrameBound::Unbounded); ::relwin_engine::Operand::Frame(::relwin_core::FrameSpec::rows(::relwin_engine::native::frame_bound("rows", arg0)?, ::relwin_core::FrameBound::Offset(1))) }; let arg1 = vars.get("i")?.clone(); let arg2 = vars.get("n")?.clone(); ::relwin_engine::native::bounds_record(::relwin_core::frame::bounds(&::relwin_engine::native::frame_spec("frame_bounds", arg0)?, ::relwin_engine::native::row_index("frame_bounds", "current row", ::relwin_engine::native::int8("frame_bounds", arg1)?)?, ::relwin_engine::native::row_count("frame_bounds", arg2)?)?)? })
}
