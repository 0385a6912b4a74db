// Copyright (C) 2015-2025 The Neo Project.
//
// native.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Native contracts the transaction templates call.

use crate::UInt160;
use std::fmt;

const NEO_HASH: [u8; 20] = [
    0xf5, 0x63, 0xea, 0x40, 0xbc, 0x28, 0x3d, 0x4d, 0x0e, 0x05, 0xc4, 0x8e, 0xa3, 0x05, 0xb3, 0xf2,
    0xa0, 0x73, 0x40, 0xef,
];

const GAS_HASH: [u8; 20] = [
    0xcf, 0x76, 0xe2, 0x8b, 0xd0, 0x06, 0x2c, 0x4a, 0x47, 0x8e, 0xe3, 0x55, 0x61, 0x01, 0x13, 0x19,
    0xf3, 0xcf, 0xa4, 0xd2,
];

const POLICY_HASH: [u8; 20] = [
    0x7b, 0xc6, 0x81, 0xc0, 0xa1, 0xf7, 0x1d, 0x54, 0x34, 0x57, 0xb6, 0x8b, 0xba, 0x8d, 0x5f, 0x9f,
    0xdd, 0x4e, 0x5e, 0xcc,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeContract {
    NeoToken,
    GasToken,
    Policy,
}

impl NativeContract {
    pub const fn hash(self) -> UInt160 {
        match self {
            Self::NeoToken => UInt160::from_le_bytes(NEO_HASH),
            Self::GasToken => UInt160::from_le_bytes(GAS_HASH),
            Self::Policy => UInt160::from_le_bytes(POLICY_HASH),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::NeoToken => "NeoToken",
            Self::GasToken => "GasToken",
            Self::Policy => "PolicyContract",
        }
    }

    pub fn from_hash(hash: &UInt160) -> Option<Self> {
        [Self::NeoToken, Self::GasToken, Self::Policy]
            .into_iter()
            .find(|c| c.hash() == *hash)
    }
}

impl fmt::Display for NativeContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_hashes() {
        assert_eq!(
            NativeContract::NeoToken.hash().to_hex_string(),
            "0xef4073a0f2b305a38ec4050e4d3d28bc40ea63f5"
        );
        assert_eq!(
            NativeContract::GasToken.hash().to_hex_string(),
            "0xd2a4cff31913016155e38e474a2c06d08be276cf"
        );
        assert_eq!(
            NativeContract::Policy.hash().to_hex_string(),
            "0xcc5e4edd9f5f8dba8bb65734541df7a1c081c67b"
        );
        assert_eq!(
            NativeContract::from_hash(&NativeContract::GasToken.hash()),
            Some(NativeContract::GasToken)
        );
    }
}
