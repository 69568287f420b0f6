pub mod bn;
pub mod casting;
pub mod constants;
pub mod safe_math;
pub mod shares;
