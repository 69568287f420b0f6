use crate::error::{ ErrorCode, VerdantResult };
use anchor_lang::prelude::msg;
use std::convert::TryInto;

pub trait Cast: Sized {
	#[inline(always)]
	fn cast<T: std::convert::TryFrom<Self>>(self) -> VerdantResult<T> {
		match self.try_into() {
			Ok(result) => Ok(result),
			Err(_) => {
				msg!(
					"Casting error from {} to {}",
					std::any::type_name::<Self>(),
					std::any::type_name::<T>()
				);
				Err(ErrorCode::CastingFailure)
			}
		}
	}
}

impl Cast for u128 {}
impl Cast for u64 {}
impl Cast for u32 {}
impl Cast for u16 {}
impl Cast for u8 {}
impl Cast for usize {}
impl Cast for i128 {}
impl Cast for i64 {}
impl Cast for i32 {}
impl Cast for i16 {}
impl Cast for i8 {}
