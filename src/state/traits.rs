/// Account size in bytes, including the 8-byte discriminator.
pub trait Size {
	const SIZE: usize;
}
