use crate::{OpCode, OperandSize, VmError, VmResult};

/// One decoded instruction borrowed from a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction<'a> {
    pub position: usize,
    pub opcode: OpCode,
    /// Operand bytes, excluding any length prefix.
    pub operand: &'a [u8],
}

impl Instruction<'_> {
    /// Total encoded length including opcode and prefix.
    pub fn size(&self) -> usize {
        let prefix = match self.opcode.operand_size() {
            OperandSize::Prefix(width) => width,
            _ => 0,
        };
        1 + prefix + self.operand.len()
    }
}

/// Decodes a script one instruction at a time.
///
/// Stops after the first error; a truncated operand is reported instead of
/// reading past the end.
pub struct Instructions<'a> {
    script: &'a [u8],
    next: usize,
    failed: bool,
}

impl<'a> Instructions<'a> {
    pub fn new(script: &'a [u8]) -> Self {
        Self {
            script,
            next: 0,
            failed: false,
        }
    }

    fn take(&mut self, count: usize, position: usize, opcode: OpCode) -> VmResult<&'a [u8]> {
        let end = self
            .next
            .checked_add(count)
            .filter(|end| *end <= self.script.len())
            .ok_or(VmError::TruncatedOperand {
                position,
                opcode: opcode.name(),
            })?;
        let bytes = &self.script[self.next..end];
        self.next = end;
        Ok(bytes)
    }

    fn decode(&mut self) -> VmResult<Instruction<'a>> {
        let position = self.next;
        let value = self.script[position];
        let opcode = OpCode::from_u8(value).ok_or(VmError::InvalidOpCode { position, value })?;
        self.next += 1;

        let operand = match opcode.operand_size() {
            OperandSize::None => &[][..],
            OperandSize::Fixed(size) => self.take(size, position, opcode)?,
            OperandSize::Prefix(width) => {
                let prefix = self.take(width, position, opcode)?;
                let mut len_bytes = [0u8; 8];
                len_bytes[..width].copy_from_slice(prefix);
                let len = u64::from_le_bytes(len_bytes) as usize;
                self.take(len, position, opcode)?
            }
        };
        Ok(Instruction {
            position,
            opcode,
            operand,
        })
    }
}

impl<'a> Iterator for Instructions<'a> {
    type Item = VmResult<Instruction<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.next >= self.script.len() {
            return None;
        }
        let result = self.decode();
        self.failed = result.is_err();
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_mixed_script() {
        // PUSH1, PUSHDATA1 "ab", SYSCALL 627d5b52
        let script = hex::decode("110c02616241627d5b52").unwrap();
        let ops: Vec<_> = Instructions::new(&script).collect::<VmResult<_>>().unwrap();
        assert_eq!(ops.len(), 3);
        assert_eq!(ops[0].opcode, OpCode::PUSH1);
        assert_eq!(ops[1].operand, b"ab");
        assert_eq!(ops[1].size(), 4);
        assert_eq!(ops[2].position, 5);
        assert_eq!(ops[2].operand, &[0x62, 0x7d, 0x5b, 0x52]);
    }

    #[test]
    fn test_truncated_operand() {
        let script = [OpCode::PUSHDATA1 as u8, 0x05, 0x01];
        let mut iter = Instructions::new(&script);
        assert!(matches!(
            iter.next(),
            Some(Err(VmError::TruncatedOperand { position: 0, .. }))
        ));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_unknown_opcode() {
        let script = [OpCode::NOP as u8, 0x42];
        let results: Vec<_> = Instructions::new(&script).collect();
        assert!(matches!(
            results[1],
            Err(VmError::InvalidOpCode { position: 1, value: 0x42 })
        ));
    }
}
