use anchor_lang::prelude::*;
use num_derive::FromPrimitive;

use crate::error::{ ErrorCode, VerdantResult };
use crate::math::constants::MAX_STRATEGISTS;
use crate::validate;

/// Linear authorization tiers. Authorization is a single ordered
/// comparison: a principal passes a gate when its tier is at least the
/// operation's minimum.
#[derive(
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Debug,
	FromPrimitive
)]
pub enum RoleTier {
	Unassigned = 0,
	Strategist = 1,
	Guardian = 2,
	Admin = 3,
	SuperAdmin = 4,
}

#[zero_copy(unsafe)]
#[derive(Default, Eq, PartialEq, Debug)]
#[repr(C)]
pub struct RoleRegistry {
	pub super_admin: Pubkey,
	pub admin: Pubkey,
	pub guardian: Pubkey,
	pub strategists: [Pubkey; MAX_STRATEGISTS],
}

impl RoleRegistry {
	pub fn new(
		super_admin: Pubkey,
		admin: Pubkey,
		guardian: Pubkey,
		strategists: &[Pubkey]
	) -> VerdantResult<Self> {
		validate!(
			super_admin != Pubkey::default() &&
				admin != Pubkey::default() &&
				guardian != Pubkey::default(),
			ErrorCode::InvalidRole,
			"multisig roles must be set"
		)?;

		validate!(
			!strategists.is_empty() && strategists.len() <= MAX_STRATEGISTS,
			ErrorCode::InvalidRole,
			"expected between 1 and {} strategists, got {}",
			MAX_STRATEGISTS,
			strategists.len()
		)?;

		let mut registry = RoleRegistry {
			super_admin,
			admin,
			guardian,
			strategists: [Pubkey::default(); MAX_STRATEGISTS],
		};
		for (slot, strategist) in registry.strategists
			.iter_mut()
			.zip(strategists.iter()) {
			validate!(
				*strategist != Pubkey::default(),
				ErrorCode::InvalidRole,
				"strategist slot must not be the default address"
			)?;
			*slot = *strategist;
		}

		Ok(registry)
	}

	/// Highest tier held by the principal. An address listed under
	/// several roles resolves to the strongest one.
	pub fn tier_of(&self, principal: &Pubkey) -> RoleTier {
		if *principal == Pubkey::default() {
			return RoleTier::Unassigned;
		}
		if self.super_admin == *principal {
			return RoleTier::SuperAdmin;
		}
		if self.admin == *principal {
			return RoleTier::Admin;
		}
		if self.guardian == *principal {
			return RoleTier::Guardian;
		}
		if self.strategists.contains(principal) {
			return RoleTier::Strategist;
		}
		RoleTier::Unassigned
	}

	pub fn require_tier(
		&self,
		principal: &Pubkey,
		min_tier: RoleTier
	) -> VerdantResult {
		validate!(
			self.tier_of(principal) >= min_tier,
			ErrorCode::Unauthorized,
			"principal {} is below the {:?} tier",
			principal,
			min_tier
		)?;

		Ok(())
	}

	/// SuperAdmin-gated reassignment. The principal is first removed
	/// from every slot, then placed at the requested tier.
	pub fn assign(
		&mut self,
		principal: Pubkey,
		tier: RoleTier
	) -> VerdantResult {
		validate!(
			principal != Pubkey::default(),
			ErrorCode::InvalidRole,
			"cannot assign the default address"
		)?;

		// the super admin slot only changes hands, it never empties
		validate!(
			!(tier == RoleTier::Unassigned && self.super_admin == principal),
			ErrorCode::InvalidRole,
			"cannot unassign the super admin"
		)?;

		for slot in self.strategists.iter_mut() {
			if *slot == principal {
				*slot = Pubkey::default();
			}
		}
		if self.guardian == principal {
			self.guardian = Pubkey::default();
		}
		if self.admin == principal {
			self.admin = Pubkey::default();
		}

		match tier {
			RoleTier::Unassigned => {}
			RoleTier::Strategist => {
				let free = self.strategists
					.iter_mut()
					.find(|slot| **slot == Pubkey::default())
					.ok_or(ErrorCode::StrategistSlotsFull)?;
				*free = principal;
			}
			RoleTier::Guardian => {
				self.guardian = principal;
			}
			RoleTier::Admin => {
				self.admin = principal;
			}
			RoleTier::SuperAdmin => {
				self.super_admin = principal;
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn registry() -> (RoleRegistry, [Pubkey; 4], Pubkey) {
		let super_admin = Pubkey::new_unique();
		let admin = Pubkey::new_unique();
		let guardian = Pubkey::new_unique();
		let strategist = Pubkey::new_unique();
		let outsider = Pubkey::new_unique();
		let registry = RoleRegistry::new(
			super_admin,
			admin,
			guardian,
			&[strategist]
		).unwrap();
		(registry, [strategist, guardian, admin, super_admin], outsider)
	}

	#[test]
	fn unassigned_principal_has_no_privileges() {
		let (registry, _, outsider) = registry();
		assert_eq!(registry.tier_of(&outsider), RoleTier::Unassigned);
		for min_tier in [
			RoleTier::Strategist,
			RoleTier::Guardian,
			RoleTier::Admin,
			RoleTier::SuperAdmin,
		] {
			assert_eq!(
				registry.require_tier(&outsider, min_tier),
				Err(ErrorCode::Unauthorized)
			);
		}
	}

	#[test]
	fn tier_matrix() {
		let (registry, principals, _) = registry();
		let tiers = [
			RoleTier::Strategist,
			RoleTier::Guardian,
			RoleTier::Admin,
			RoleTier::SuperAdmin,
		];
		for (held, principal) in tiers.iter().zip(principals.iter()) {
			for min_tier in tiers {
				let result = registry.require_tier(principal, min_tier);
				if *held >= min_tier {
					assert_eq!(result, Ok(()));
				} else {
					assert_eq!(result, Err(ErrorCode::Unauthorized));
				}
			}
		}
	}

	#[test]
	fn shared_address_resolves_to_highest_tier() {
		let shared = Pubkey::new_unique();
		let registry = RoleRegistry::new(
			shared,
			shared,
			shared,
			&[shared]
		).unwrap();
		assert_eq!(registry.tier_of(&shared), RoleTier::SuperAdmin);
		assert_eq!(
			registry.require_tier(&shared, RoleTier::Strategist),
			Ok(())
		);
	}

	#[test]
	fn default_address_never_authorizes() {
		let (registry, _, _) = registry();
		assert_eq!(
			registry.tier_of(&Pubkey::default()),
			RoleTier::Unassigned
		);
	}

	#[test]
	fn reassignment() {
		let (mut registry, principals, outsider) = registry();

		registry.assign(outsider, RoleTier::Strategist).unwrap();
		assert_eq!(registry.tier_of(&outsider), RoleTier::Strategist);

		registry.assign(outsider, RoleTier::Unassigned).unwrap();
		assert_eq!(registry.tier_of(&outsider), RoleTier::Unassigned);

		registry.assign(outsider, RoleTier::Admin).unwrap();
		assert_eq!(registry.tier_of(&outsider), RoleTier::Admin);
		assert_eq!(registry.tier_of(&principals[2]), RoleTier::Unassigned);

		// a named slot can be cleared outright
		registry.assign(principals[1], RoleTier::Unassigned).unwrap();
		assert_eq!(registry.tier_of(&principals[1]), RoleTier::Unassigned);

		// but never the super admin
		assert_eq!(
			registry.assign(principals[3], RoleTier::Unassigned),
			Err(ErrorCode::InvalidRole)
		);
	}

	#[test]
	fn strategist_slots_are_bounded() {
		let (mut registry, _, _) = registry();
		for _ in 0..MAX_STRATEGISTS - 1 {
			registry
				.assign(Pubkey::new_unique(), RoleTier::Strategist)
				.unwrap();
		}
		assert_eq!(
			registry.assign(Pubkey::new_unique(), RoleTier::Strategist),
			Err(ErrorCode::StrategistSlotsFull)
		);
	}
}
