//! The Neo VM instruction set.
//!
//! Each entry carries its byte value, its fixed base execution price (before
//! the network's execution fee factor is applied) and the shape of its operand.

use std::fmt;

/// Shape of the operand that follows an opcode in the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSize {
    /// No operand.
    None,
    /// A fixed number of bytes.
    Fixed(usize),
    /// A little-endian length prefix of the given width, then that many bytes.
    Prefix(usize),
}

macro_rules! opcodes {
    ($($name:ident = $value:literal, $price:expr, $operand:expr;)*) => {
        /// Neo VM opcodes.
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum OpCode {
            $($name = $value,)*
        }

        impl OpCode {
            /// Every defined opcode, in ascending byte order.
            pub const ALL: &'static [OpCode] = &[$(OpCode::$name,)*];

            pub fn from_u8(value: u8) -> Option<Self> {
                match value {
                    $($value => Some(OpCode::$name),)*
                    _ => None,
                }
            }

            /// Base execution price in datoshi, before the exec fee factor.
            pub const fn price(self) -> i64 {
                match self {
                    $(OpCode::$name => $price,)*
                }
            }

            pub const fn operand_size(self) -> OperandSize {
                match self {
                    $(OpCode::$name => $operand,)*
                }
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $(OpCode::$name => stringify!($name),)*
                }
            }
        }
    };
}

opcodes! {
    PUSHINT8 = 0x00, 1, OperandSize::Fixed(1);
    PUSHINT16 = 0x01, 1, OperandSize::Fixed(2);
    PUSHINT32 = 0x02, 1, OperandSize::Fixed(4);
    PUSHINT64 = 0x03, 1, OperandSize::Fixed(8);
    PUSHINT128 = 0x04, 4, OperandSize::Fixed(16);
    PUSHINT256 = 0x05, 4, OperandSize::Fixed(32);
    PUSHT = 0x08, 1, OperandSize::None;
    PUSHF = 0x09, 1, OperandSize::None;
    PUSHA = 0x0A, 4, OperandSize::Fixed(4);
    PUSHNULL = 0x0B, 1, OperandSize::None;
    PUSHDATA1 = 0x0C, 8, OperandSize::Prefix(1);
    PUSHDATA2 = 0x0D, 512, OperandSize::Prefix(2);
    PUSHDATA4 = 0x0E, 4096, OperandSize::Prefix(4);
    PUSHM1 = 0x0F, 1, OperandSize::None;
    PUSH0 = 0x10, 1, OperandSize::None;
    PUSH1 = 0x11, 1, OperandSize::None;
    PUSH2 = 0x12, 1, OperandSize::None;
    PUSH3 = 0x13, 1, OperandSize::None;
    PUSH4 = 0x14, 1, OperandSize::None;
    PUSH5 = 0x15, 1, OperandSize::None;
    PUSH6 = 0x16, 1, OperandSize::None;
    PUSH7 = 0x17, 1, OperandSize::None;
    PUSH8 = 0x18, 1, OperandSize::None;
    PUSH9 = 0x19, 1, OperandSize::None;
    PUSH10 = 0x1A, 1, OperandSize::None;
    PUSH11 = 0x1B, 1, OperandSize::None;
    PUSH12 = 0x1C, 1, OperandSize::None;
    PUSH13 = 0x1D, 1, OperandSize::None;
    PUSH14 = 0x1E, 1, OperandSize::None;
    PUSH15 = 0x1F, 1, OperandSize::None;
    PUSH16 = 0x20, 1, OperandSize::None;
    NOP = 0x21, 1, OperandSize::None;
    JMP = 0x22, 2, OperandSize::Fixed(1);
    JMP_L = 0x23, 2, OperandSize::Fixed(4);
    JMPIF = 0x24, 2, OperandSize::Fixed(1);
    JMPIF_L = 0x25, 2, OperandSize::Fixed(4);
    JMPIFNOT = 0x26, 2, OperandSize::Fixed(1);
    JMPIFNOT_L = 0x27, 2, OperandSize::Fixed(4);
    JMPEQ = 0x28, 2, OperandSize::Fixed(1);
    JMPEQ_L = 0x29, 2, OperandSize::Fixed(4);
    JMPNE = 0x2A, 2, OperandSize::Fixed(1);
    JMPNE_L = 0x2B, 2, OperandSize::Fixed(4);
    JMPGT = 0x2C, 2, OperandSize::Fixed(1);
    JMPGT_L = 0x2D, 2, OperandSize::Fixed(4);
    JMPGE = 0x2E, 2, OperandSize::Fixed(1);
    JMPGE_L = 0x2F, 2, OperandSize::Fixed(4);
    JMPLT = 0x30, 2, OperandSize::Fixed(1);
    JMPLT_L = 0x31, 2, OperandSize::Fixed(4);
    JMPLE = 0x32, 2, OperandSize::Fixed(1);
    JMPLE_L = 0x33, 2, OperandSize::Fixed(4);
    CALL = 0x34, 512, OperandSize::Fixed(1);
    CALL_L = 0x35, 512, OperandSize::Fixed(4);
    CALLA = 0x36, 512, OperandSize::None;
    CALLT = 0x37, 32768, OperandSize::Fixed(2);
    ABORT = 0x38, 0, OperandSize::None;
    ASSERT = 0x39, 1, OperandSize::None;
    THROW = 0x3A, 512, OperandSize::None;
    TRY = 0x3B, 4, OperandSize::Fixed(2);
    TRY_L = 0x3C, 4, OperandSize::Fixed(8);
    ENDTRY = 0x3D, 4, OperandSize::Fixed(1);
    ENDTRY_L = 0x3E, 4, OperandSize::Fixed(4);
    ENDFINALLY = 0x3F, 4, OperandSize::None;
    RET = 0x40, 0, OperandSize::None;
    SYSCALL = 0x41, 0, OperandSize::Fixed(4);
    DEPTH = 0x43, 2, OperandSize::None;
    DROP = 0x45, 2, OperandSize::None;
    NIP = 0x46, 2, OperandSize::None;
    XDROP = 0x48, 16, OperandSize::None;
    CLEAR = 0x49, 16, OperandSize::None;
    DUP = 0x4A, 2, OperandSize::None;
    OVER = 0x4B, 2, OperandSize::None;
    PICK = 0x4D, 2, OperandSize::None;
    TUCK = 0x4E, 2, OperandSize::None;
    SWAP = 0x50, 2, OperandSize::None;
    ROT = 0x51, 2, OperandSize::None;
    ROLL = 0x52, 16, OperandSize::None;
    REVERSE3 = 0x53, 2, OperandSize::None;
    REVERSE4 = 0x54, 2, OperandSize::None;
    REVERSEN = 0x55, 16, OperandSize::None;
    INITSSLOT = 0x56, 16, OperandSize::Fixed(1);
    INITSLOT = 0x57, 64, OperandSize::Fixed(2);
    LDSFLD0 = 0x58, 2, OperandSize::None;
    LDSFLD1 = 0x59, 2, OperandSize::None;
    LDSFLD2 = 0x5A, 2, OperandSize::None;
    LDSFLD3 = 0x5B, 2, OperandSize::None;
    LDSFLD4 = 0x5C, 2, OperandSize::None;
    LDSFLD5 = 0x5D, 2, OperandSize::None;
    LDSFLD6 = 0x5E, 2, OperandSize::None;
    LDSFLD = 0x5F, 2, OperandSize::Fixed(1);
    STSFLD0 = 0x60, 2, OperandSize::None;
    STSFLD1 = 0x61, 2, OperandSize::None;
    STSFLD2 = 0x62, 2, OperandSize::None;
    STSFLD3 = 0x63, 2, OperandSize::None;
    STSFLD4 = 0x64, 2, OperandSize::None;
    STSFLD5 = 0x65, 2, OperandSize::None;
    STSFLD6 = 0x66, 2, OperandSize::None;
    STSFLD = 0x67, 2, OperandSize::Fixed(1);
    LDLOC0 = 0x68, 2, OperandSize::None;
    LDLOC1 = 0x69, 2, OperandSize::None;
    LDLOC2 = 0x6A, 2, OperandSize::None;
    LDLOC3 = 0x6B, 2, OperandSize::None;
    LDLOC4 = 0x6C, 2, OperandSize::None;
    LDLOC5 = 0x6D, 2, OperandSize::None;
    LDLOC6 = 0x6E, 2, OperandSize::None;
    LDLOC = 0x6F, 2, OperandSize::Fixed(1);
    STLOC0 = 0x70, 2, OperandSize::None;
    STLOC1 = 0x71, 2, OperandSize::None;
    STLOC2 = 0x72, 2, OperandSize::None;
    STLOC3 = 0x73, 2, OperandSize::None;
    STLOC4 = 0x74, 2, OperandSize::None;
    STLOC5 = 0x75, 2, OperandSize::None;
    STLOC6 = 0x76, 2, OperandSize::None;
    STLOC = 0x77, 2, OperandSize::Fixed(1);
    LDARG0 = 0x78, 2, OperandSize::None;
    LDARG1 = 0x79, 2, OperandSize::None;
    LDARG2 = 0x7A, 2, OperandSize::None;
    LDARG3 = 0x7B, 2, OperandSize::None;
    LDARG4 = 0x7C, 2, OperandSize::None;
    LDARG5 = 0x7D, 2, OperandSize::None;
    LDARG6 = 0x7E, 2, OperandSize::None;
    LDARG = 0x7F, 2, OperandSize::Fixed(1);
    STARG0 = 0x80, 2, OperandSize::None;
    STARG1 = 0x81, 2, OperandSize::None;
    STARG2 = 0x82, 2, OperandSize::None;
    STARG3 = 0x83, 2, OperandSize::None;
    STARG4 = 0x84, 2, OperandSize::None;
    STARG5 = 0x85, 2, OperandSize::None;
    STARG6 = 0x86, 2, OperandSize::None;
    STARG = 0x87, 2, OperandSize::Fixed(1);
    NEWBUFFER = 0x88, 256, OperandSize::None;
    MEMCPY = 0x89, 2048, OperandSize::None;
    CAT = 0x8B, 2048, OperandSize::None;
    SUBSTR = 0x8C, 2048, OperandSize::None;
    LEFT = 0x8D, 2048, OperandSize::None;
    RIGHT = 0x8E, 2048, OperandSize::None;
    INVERT = 0x90, 4, OperandSize::None;
    AND = 0x91, 8, OperandSize::None;
    OR = 0x92, 8, OperandSize::None;
    XOR = 0x93, 8, OperandSize::None;
    EQUAL = 0x97, 32, OperandSize::None;
    NOTEQUAL = 0x98, 32, OperandSize::None;
    SIGN = 0x99, 4, OperandSize::None;
    ABS = 0x9A, 4, OperandSize::None;
    NEGATE = 0x9B, 4, OperandSize::None;
    INC = 0x9C, 4, OperandSize::None;
    DEC = 0x9D, 4, OperandSize::None;
    ADD = 0x9E, 8, OperandSize::None;
    SUB = 0x9F, 8, OperandSize::None;
    MUL = 0xA0, 8, OperandSize::None;
    DIV = 0xA1, 8, OperandSize::None;
    MOD = 0xA2, 8, OperandSize::None;
    POW = 0xA3, 64, OperandSize::None;
    SQRT = 0xA4, 64, OperandSize::None;
    MODMUL = 0xA5, 32, OperandSize::None;
    MODPOW = 0xA6, 2048, OperandSize::None;
    SHL = 0xA8, 8, OperandSize::None;
    SHR = 0xA9, 8, OperandSize::None;
    NOT = 0xAA, 4, OperandSize::None;
    BOOLAND = 0xAB, 8, OperandSize::None;
    BOOLOR = 0xAC, 8, OperandSize::None;
    NZ = 0xB1, 4, OperandSize::None;
    NUMEQUAL = 0xB3, 8, OperandSize::None;
    NUMNOTEQUAL = 0xB4, 8, OperandSize::None;
    LT = 0xB5, 8, OperandSize::None;
    LE = 0xB6, 8, OperandSize::None;
    GT = 0xB7, 8, OperandSize::None;
    GE = 0xB8, 8, OperandSize::None;
    MIN = 0xB9, 8, OperandSize::None;
    MAX = 0xBA, 8, OperandSize::None;
    WITHIN = 0xBB, 8, OperandSize::None;
    PACKMAP = 0xBE, 2048, OperandSize::None;
    PACKSTRUCT = 0xBF, 2048, OperandSize::None;
    PACK = 0xC0, 2048, OperandSize::None;
    UNPACK = 0xC1, 2048, OperandSize::None;
    NEWARRAY0 = 0xC2, 16, OperandSize::None;
    NEWARRAY = 0xC3, 512, OperandSize::None;
    NEWARRAY_T = 0xC4, 512, OperandSize::Fixed(1);
    NEWSTRUCT0 = 0xC5, 16, OperandSize::None;
    NEWSTRUCT = 0xC6, 512, OperandSize::None;
    NEWMAP = 0xC8, 8, OperandSize::None;
    SIZE = 0xCA, 4, OperandSize::None;
    HASKEY = 0xCB, 64, OperandSize::None;
    KEYS = 0xCC, 16, OperandSize::None;
    VALUES = 0xCD, 8192, OperandSize::None;
    PICKITEM = 0xCE, 64, OperandSize::None;
    APPEND = 0xCF, 8192, OperandSize::None;
    SETITEM = 0xD0, 8192, OperandSize::None;
    REVERSEITEMS = 0xD1, 8192, OperandSize::None;
    REMOVE = 0xD2, 16, OperandSize::None;
    CLEARITEMS = 0xD3, 16, OperandSize::None;
    POPITEM = 0xD4, 16, OperandSize::None;
    ISNULL = 0xD8, 2, OperandSize::None;
    ISTYPE = 0xD9, 2, OperandSize::Fixed(1);
    CONVERT = 0xDB, 8192, OperandSize::Fixed(1);
    ABORTMSG = 0xE0, 0, OperandSize::None;
    ASSERTMSG = 0xE1, 1, OperandSize::None;
}

impl OpCode {
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Returns the single-byte push for `-1..=16`, if there is one.
    pub fn small_int(value: i64) -> Option<Self> {
        match value {
            -1 => Some(OpCode::PUSHM1),
            0..=16 => Self::from_u8(OpCode::PUSH0 as u8 + value as u8),
            _ => None,
        }
    }

    /// Inverse of [`OpCode::small_int`].
    pub fn small_int_value(self) -> Option<i64> {
        match self {
            OpCode::PUSHM1 => Some(-1),
            op if (OpCode::PUSH0 as u8..=OpCode::PUSH16 as u8).contains(&(op as u8)) => {
                Some((op as u8 - OpCode::PUSH0 as u8) as i64)
            }
            _ => None,
        }
    }
}

impl TryFrom<u8> for OpCode {
    type Error = crate::VmError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        OpCode::from_u8(value).ok_or(crate::VmError::InvalidOpCode { position: 0, value })
    }
}

impl From<OpCode> for u8 {
    fn from(op: OpCode) -> Self {
        op as u8
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_values() {
        assert_eq!(OpCode::PUSHINT8 as u8, 0x00);
        assert_eq!(OpCode::PUSHNULL as u8, 0x0B);
        assert_eq!(OpCode::PUSHDATA1 as u8, 0x0C);
        assert_eq!(OpCode::PUSHM1 as u8, 0x0F);
        assert_eq!(OpCode::PUSH0 as u8, 0x10);
        assert_eq!(OpCode::PUSH16 as u8, 0x20);
        assert_eq!(OpCode::SYSCALL as u8, 0x41);
        assert_eq!(OpCode::PACK as u8, 0xC0);
        assert_eq!(OpCode::ASSERTMSG as u8, 0xE1);
    }

    #[test]
    fn test_from_u8_roundtrip() {
        for op in OpCode::ALL {
            assert_eq!(OpCode::from_u8(*op as u8), Some(*op));
        }
        assert_eq!(OpCode::from_u8(0x42), None);
        assert!(OpCode::try_from(0xFF).is_err());
    }

    #[test]
    fn test_prices() {
        assert_eq!(OpCode::PUSHDATA1.price(), 8);
        assert_eq!(OpCode::PUSHNULL.price(), 1);
        assert_eq!(OpCode::SYSCALL.price(), 0);
        assert_eq!(OpCode::PUSH3.price(), 1);
        assert_eq!(OpCode::PUSHINT16.price(), 1);
        assert_eq!(OpCode::PUSHINT128.price(), 4);
        assert_eq!(OpCode::CALLT.price(), 1 << 15);
        for op in OpCode::ALL {
            if !matches!(op, OpCode::RET | OpCode::SYSCALL | OpCode::ABORT | OpCode::ABORTMSG) {
                assert_ne!(op.price(), 0, "{op} has zero price");
            }
        }
    }

    #[test]
    fn test_small_int() {
        assert_eq!(OpCode::small_int(-1), Some(OpCode::PUSHM1));
        assert_eq!(OpCode::small_int(16), Some(OpCode::PUSH16));
        assert_eq!(OpCode::small_int(17), None);
        assert_eq!(OpCode::small_int(-2), None);
        assert_eq!(OpCode::PUSH7.small_int_value(), Some(7));
        assert_eq!(OpCode::PUSHNULL.small_int_value(), None);
    }

    #[test]
    fn test_operand_sizes() {
        assert_eq!(OpCode::PUSHDATA2.operand_size(), OperandSize::Prefix(2));
        assert_eq!(OpCode::PUSHINT256.operand_size(), OperandSize::Fixed(32));
        assert_eq!(OpCode::SYSCALL.operand_size(), OperandSize::Fixed(4));
        assert_eq!(OpCode::TRY_L.operand_size(), OperandSize::Fixed(8));
        assert_eq!(OpCode::PACK.operand_size(), OperandSize::None);
    }
}
