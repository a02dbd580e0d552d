/*
 * Copyright © 2024, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
//! C8 authorization: single owner plus an allow-list (spec §4.7).

use std::collections::HashSet;

use crate::errors::{state_conflict, unauthorized, IndexResult};
use crate::principal::Principal;

#[derive(Debug, Clone)]
pub struct Authorization {
    owner: Principal,
    allowed: HashSet<Principal>,
}

impl Authorization {
    /// the owner is always in the allow-list from construction.
    pub fn new(deployer: Principal) -> Self {
        let mut allowed = HashSet::new();
        allowed.insert(deployer);
        Authorization { owner: deployer, allowed }
    }

    pub fn owner(&self) -> Principal {
        self.owner
    }

    pub fn is_allowed(&self, principal: Principal) -> bool {
        self.allowed.contains(&principal)
    }

    pub fn require_allowed(&self, caller: Principal) -> IndexResult<()> {
        if self.is_allowed(caller) {
            Ok(())
        } else {
            tracing::warn!(caller = %caller, "caller is not in the allow-list");
            Err(unauthorized(format!("{caller} is not in the allow-list")))
        }
    }

    fn require_owner(&self, caller: Principal) -> IndexResult<()> {
        if caller == self.owner {
            Ok(())
        } else {
            tracing::warn!(caller = %caller, owner = %self.owner, "caller is not the owner");
            Err(unauthorized(format!("{caller} is not the owner")))
        }
    }

    /// only the owner may `allow`.
    pub fn allow(&mut self, caller: Principal, addr: Principal) -> IndexResult<()> {
        self.require_owner(caller)?;
        self.allowed.insert(addr);
        Ok(())
    }

    /// only the owner may `disallow`; `disallow(owner)` fails (the owner is
    /// always allowed).
    pub fn disallow(&mut self, caller: Principal, addr: Principal) -> IndexResult<()> {
        self.require_owner(caller)?;
        if addr == self.owner {
            return Err(state_conflict("cannot remove the owner from the allow-list"));
        }
        self.allowed.remove(&addr);
        Ok(())
    }

    /// may only transfer to an already-allowed, non-zero principal.
    pub fn transfer_ownership(&mut self, caller: Principal, new_owner: Principal) -> IndexResult<()> {
        self.require_owner(caller)?;
        if new_owner.is_zero() {
            return Err(state_conflict("cannot transfer ownership to the zero principal"));
        }
        if !self.allowed.contains(&new_owner) {
            return Err(state_conflict(format!("{new_owner} is not in the allow-list")));
        }
        self.owner = new_owner;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(b: u8) -> Principal {
        Principal([b; 32])
    }

    #[test]
    fn owner_is_allowed_from_construction() {
        let auth = Authorization::new(p(1));
        assert!(auth.is_allowed(p(1)));
        assert_eq!(auth.owner(), p(1));
    }

    #[test]
    fn only_owner_may_allow_or_disallow() {
        let mut auth = Authorization::new(p(1));
        assert!(auth.allow(p(2), p(3)).is_err());
        assert!(auth.allow(p(1), p(2)).is_ok());
        assert!(auth.is_allowed(p(2)));
        assert!(auth.disallow(p(2), p(2)).is_err());
        assert!(auth.disallow(p(1), p(2)).is_ok());
        assert!(!auth.is_allowed(p(2)));
    }

    #[test]
    fn disallowing_the_owner_is_a_state_conflict() {
        let mut auth = Authorization::new(p(1));
        assert!(auth.disallow(p(1), p(1)).is_err());
    }

    #[test]
    fn transfer_requires_already_allowed_nonzero_principal() {
        let mut auth = Authorization::new(p(1));
        assert!(auth.transfer_ownership(p(1), p(2)).is_err()); // not yet allowed
        assert!(auth.transfer_ownership(p(1), Principal::ZERO).is_err());
        auth.allow(p(1), p(2)).unwrap();
        assert!(auth.transfer_ownership(p(1), p(2)).is_ok());
        assert_eq!(auth.owner(), p(2));
        // old owner can no longer administer
        assert!(auth.allow(p(1), p(3)).is_err());
    }
}
