// Copyright (C) 2015-2025 The Neo Project.
//
// witness_scope.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Implementation of WitnessScope, the restriction placed on a signer's witness.

use crate::{CoreError, CoreResult};
use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

/// Scope of a witness, as a bit set.
///
/// `Global` is exclusive: combining it with any other bit is rejected
/// rather than interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WitnessScope(u8);

#[allow(non_upper_case_globals)]
impl WitnessScope {
    /// Only sign the transaction; no contract may use the witness.
    pub const None: WitnessScope = WitnessScope(0x00);

    /// The witness is valid only while the entry script is calling.
    pub const CalledByEntry: WitnessScope = WitnessScope(0x01);

    /// The witness is valid in the contracts listed in `allowed_contracts`.
    pub const CustomContracts: WitnessScope = WitnessScope(0x10);

    /// The witness is valid in contracts belonging to `allowed_groups`.
    pub const CustomGroups: WitnessScope = WitnessScope(0x20);

    /// The witness is valid everywhere. Cannot be combined with other flags.
    pub const Global: WitnessScope = WitnessScope(0x80);

    const DEFINED: u8 = 0x01 | 0x10 | 0x20 | 0x80;
}

impl WitnessScope {
    pub fn has_flag(self, flag: WitnessScope) -> bool {
        self.0 & flag.0 == flag.0 && (flag.0 != 0 || self.0 == 0)
    }

    /// Bitwise union, validated.
    pub fn combine(self, other: WitnessScope) -> CoreResult<Self> {
        Self::from_byte(self.0 | other.0)
    }

    /// Decodes a scope byte, rejecting undefined bits and `Global` mixed
    /// with anything else.
    pub fn from_byte(value: u8) -> CoreResult<Self> {
        if value & !Self::DEFINED != 0 {
            return Err(CoreError::InvalidScope(format!(
                "undefined bits in 0x{value:02x}"
            )));
        }
        if value & Self::Global.0 != 0 && value != Self::Global.0 {
            return Err(CoreError::InvalidScope(format!(
                "Global combined with other scopes in 0x{value:02x}"
            )));
        }
        Ok(WitnessScope(value))
    }

    pub fn to_byte(self) -> u8 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        Self::from_byte(self.0).is_ok()
    }
}

/// Unvalidated union; pass the result through [`WitnessScope::from_byte`]
/// or [`crate::Signer::validate`] before use.
impl BitOr for WitnessScope {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        WitnessScope(self.0 | rhs.0)
    }
}

const NAMES: [(WitnessScope, &str); 4] = [
    (WitnessScope::CalledByEntry, "CalledByEntry"),
    (WitnessScope::CustomContracts, "CustomContracts"),
    (WitnessScope::CustomGroups, "CustomGroups"),
    (WitnessScope::Global, "Global"),
];

/// Formats as comma-separated flag names, the form nodes accept in JSON.
impl fmt::Display for WitnessScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("None");
        }
        let parts: Vec<&str> = NAMES
            .iter()
            .filter(|(flag, _)| self.0 & flag.0 != 0)
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&parts.join(", "))
    }
}

impl FromStr for WitnessScope {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = 0u8;
        for part in s.split([',', '|']).map(str::trim) {
            if part == "None" {
                continue;
            }
            let (flag, _) = NAMES
                .iter()
                .find(|(_, name)| *name == part)
                .ok_or_else(|| CoreError::InvalidScope(format!("unknown scope {part:?}")))?;
            bits |= flag.0;
        }
        Self::from_byte(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_byte_accepts_combinations() {
        let scope = WitnessScope::from_byte(0x31).unwrap();
        assert!(scope.has_flag(WitnessScope::CalledByEntry));
        assert!(scope.has_flag(WitnessScope::CustomContracts));
        assert!(scope.has_flag(WitnessScope::CustomGroups));
        assert!(!scope.has_flag(WitnessScope::Global));
        assert!(!scope.has_flag(WitnessScope::None));
        assert!(WitnessScope::None.has_flag(WitnessScope::None));
    }

    #[test]
    fn test_global_is_exclusive() {
        assert!(WitnessScope::from_byte(0x80).is_ok());
        for other in [0x01u8, 0x10, 0x20] {
            assert!(matches!(
                WitnessScope::from_byte(0x80 | other),
                Err(CoreError::InvalidScope(_))
            ));
        }
        assert!(WitnessScope::Global
            .combine(WitnessScope::CalledByEntry)
            .is_err());
    }

    #[test]
    fn test_undefined_bits_rejected() {
        for value in [0x02u8, 0x40, 0x41, 0xFF] {
            assert!(WitnessScope::from_byte(value).is_err(), "0x{value:02x}");
        }
    }

    #[test]
    fn test_display_and_parse() {
        let scope = WitnessScope::CalledByEntry | WitnessScope::CustomContracts;
        assert_eq!(scope.to_string(), "CalledByEntry, CustomContracts");
        assert_eq!(scope.to_string().parse::<WitnessScope>().unwrap(), scope);
        assert_eq!(WitnessScope::None.to_string(), "None");
        assert_eq!("Global".parse::<WitnessScope>().unwrap(), WitnessScope::Global);
        assert!("Global, CalledByEntry".parse::<WitnessScope>().is_err());
        assert!("Everywhere".parse::<WitnessScope>().is_err());
    }
}
