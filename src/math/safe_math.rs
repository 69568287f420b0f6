use crate::error::{ ErrorCode, VerdantResult };
use anchor_lang::prelude::msg;
use num_traits::{ CheckedAdd, CheckedDiv, CheckedMul, CheckedSub };

pub trait SafeMath: Sized {
	fn safe_add(self, rhs: Self) -> VerdantResult<Self>;
	fn safe_sub(self, rhs: Self) -> VerdantResult<Self>;
	fn safe_mul(self, rhs: Self) -> VerdantResult<Self>;
	fn safe_div(self, rhs: Self) -> VerdantResult<Self>;
}

fn math_error(op: &str) -> ErrorCode {
	msg!("Math error in {}", op);
	ErrorCode::MathError
}

impl<T> SafeMath
	for T
	where T: CheckedAdd + CheckedSub + CheckedMul + CheckedDiv + Copy
{
	#[inline(always)]
	fn safe_add(self, rhs: Self) -> VerdantResult<Self> {
		CheckedAdd::checked_add(&self, &rhs)
			.ok_or_else(|| math_error("add"))
	}

	#[inline(always)]
	fn safe_sub(self, rhs: Self) -> VerdantResult<Self> {
		CheckedSub::checked_sub(&self, &rhs)
			.ok_or_else(|| math_error("sub"))
	}

	#[inline(always)]
	fn safe_mul(self, rhs: Self) -> VerdantResult<Self> {
		CheckedMul::checked_mul(&self, &rhs)
			.ok_or_else(|| math_error("mul"))
	}

	#[inline(always)]
	fn safe_div(self, rhs: Self) -> VerdantResult<Self> {
		CheckedDiv::checked_div(&self, &rhs)
			.ok_or_else(|| math_error("div"))
	}
}
