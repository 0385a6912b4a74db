//! Permission flags passed to `System.Contract.Call`.

use std::fmt;
use std::ops::BitOr;

/// What a called contract is allowed to do.
///
/// Contract-call scripts push these as a plain integer; the default for
/// user-initiated calls is [`CallFlags::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallFlags(u8);

impl CallFlags {
    pub const NONE: Self = Self(0);
    pub const READ_STATES: Self = Self(0x01);
    pub const WRITE_STATES: Self = Self(0x02);
    pub const ALLOW_CALL: Self = Self(0x04);
    pub const ALLOW_NOTIFY: Self = Self(0x08);

    pub const STATES: Self = Self(Self::READ_STATES.0 | Self::WRITE_STATES.0);
    pub const READ_ONLY: Self = Self(Self::READ_STATES.0 | Self::ALLOW_CALL.0);
    pub const ALL: Self = Self(Self::STATES.0 | Self::ALLOW_CALL.0 | Self::ALLOW_NOTIFY.0);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn has_flag(self, flag: Self) -> bool {
        (self.0 & flag.0) == flag.0
    }

    /// Returns `None` if any undefined bit is set.
    pub fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::ALL.0 == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }
}

impl Default for CallFlags {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for CallFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for CallFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NONE => f.write_str("None"),
            Self::ALL => f.write_str("All"),
            Self::READ_ONLY => f.write_str("ReadOnly"),
            Self::STATES => f.write_str("States"),
            other => write!(f, "0x{:02x}", other.0),
        }
    }
}
