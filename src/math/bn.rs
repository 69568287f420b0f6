use crate::error::{ ErrorCode, VerdantResult };
use uint::construct_uint;

construct_uint! {
	/// 192-bit unsigned integer for mul-then-div share and price ratios.
	pub struct U192(3);
}

impl U192 {
	pub fn try_to_u64(self) -> VerdantResult<u64> {
		if self > U192::from(u64::MAX) {
			return Err(ErrorCode::BnConversionError);
		}
		Ok(self.as_u64())
	}

	pub fn try_to_u128(self) -> VerdantResult<u128> {
		if self > U192::from(u128::MAX) {
			return Err(ErrorCode::BnConversionError);
		}
		Ok(self.as_u128())
	}
}
