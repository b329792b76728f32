//! Fixed-width integers tagged with a size class and a signedness.

use std::fmt;

/// Bit width an operation truncates to.
///
/// Variants are declared narrowest first, so `Ord` compares widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeMode {
    Byte,
    Word,
    Dword,
    #[default]
    Qword,
}

impl SizeMode {
    /// All size modes, narrowest first.
    pub const ALL: [SizeMode; 4] = [
        SizeMode::Byte,
        SizeMode::Word,
        SizeMode::Dword,
        SizeMode::Qword,
    ];

    /// Width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            SizeMode::Byte => 8,
            SizeMode::Word => 16,
            SizeMode::Dword => 32,
            SizeMode::Qword => 64,
        }
    }

    /// Mask with exactly the low `bits()` bits set.
    pub const fn mask(self) -> u64 {
        match self {
            SizeMode::Qword => u64::MAX,
            other => (1u64 << other.bits()) - 1,
        }
    }

    /// Drops every bit above this width.
    pub const fn truncate(self, value: u64) -> u64 {
        value & self.mask()
    }

    /// Reads the low `bits()` bits of `value` as a two's complement integer.
    pub const fn sign_extend(self, value: u64) -> i64 {
        let shift = 64 - self.bits();
        ((value << shift) as i64) >> shift
    }

    /// Narrowest size mode that holds `value` as an unsigned magnitude.
    pub const fn smallest_for(value: u64) -> SizeMode {
        if value <= u8::MAX as u64 {
            SizeMode::Byte
        } else if value <= u16::MAX as u64 {
            SizeMode::Word
        } else if value <= u32::MAX as u64 {
            SizeMode::Dword
        } else {
            SizeMode::Qword
        }
    }

    /// Narrowest size mode that holds `value` as a two's complement integer.
    pub const fn smallest_for_signed(value: i64) -> SizeMode {
        if value >= i8::MIN as i64 && value <= i8::MAX as i64 {
            SizeMode::Byte
        } else if value >= i16::MIN as i64 && value <= i16::MAX as i64 {
            SizeMode::Word
        } else if value >= i32::MIN as i64 && value <= i32::MAX as i64 {
            SizeMode::Dword
        } else {
            SizeMode::Qword
        }
    }
}

/// How a bit pattern is interpreted by sign-sensitive operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Signedness {
    #[default]
    Unsigned,
    Signed,
}

impl Signedness {
    pub fn is_signed(self) -> bool {
        matches!(self, Signedness::Signed)
    }
}

/// Radix used by [`Number::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayMode {
    Binary,
    Octal,
    #[default]
    Decimal,
    Hex,
}

/// A bit pattern tagged with its size class and signedness.
///
/// The pattern never carries bits beyond `size`; every constructor truncates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Number {
    bits: u64,
    size: SizeMode,
    signedness: Signedness,
}

impl Number {
    /// Wraps `bits` to `size`.
    pub const fn new(bits: u64, size: SizeMode, signedness: Signedness) -> Self {
        Self {
            bits: size.truncate(bits),
            size,
            signedness,
        }
    }

    /// A literal magnitude, tagged with the narrowest size class that holds it.
    pub const fn from_literal(value: u64, signedness: Signedness) -> Self {
        Self::new(value, SizeMode::smallest_for(value), signedness)
    }

    /// Unsigned number in the narrowest size class that holds `value`.
    pub const fn from_uint(value: u64) -> Self {
        Self::from_literal(value, Signedness::Unsigned)
    }

    /// Signed number in the narrowest size class that holds `value`.
    pub const fn from_int(value: i64) -> Self {
        Self::new(
            value as u64,
            SizeMode::smallest_for_signed(value),
            Signedness::Signed,
        )
    }

    pub const fn bits(&self) -> u64 {
        self.bits
    }

    pub const fn size(&self) -> SizeMode {
        self.size
    }

    pub const fn signedness(&self) -> Signedness {
        self.signedness
    }

    /// The raw pattern, zero-extended.
    pub const fn as_u64(&self) -> u64 {
        self.bits
    }

    /// The pattern sign-extended from its size class.
    pub const fn as_i64(&self) -> i64 {
        self.size.sign_extend(self.bits)
    }

    /// The pattern widened to 64 bits the way this number's signedness reads it.
    pub(crate) fn widened(&self, size: SizeMode) -> u64 {
        match self.signedness {
            Signedness::Signed => size.sign_extend(self.bits) as u64,
            Signedness::Unsigned => size.truncate(self.bits),
        }
    }

    /// Renders in the given radix.
    ///
    /// Decimal follows the signedness; the other radixes print the raw bit
    /// pattern with a `0b`, `0` or `0x` prefix.
    pub fn format(&self, mode: DisplayMode) -> String {
        match mode {
            DisplayMode::Decimal => self.to_string(),
            DisplayMode::Binary => format!("0b{:b}", self.bits),
            DisplayMode::Octal if self.bits == 0 => "0".to_string(),
            DisplayMode::Octal => format!("0{:o}", self.bits),
            DisplayMode::Hex => format!("0x{:X}", self.bits),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.signedness {
            Signedness::Signed => write!(f, "{}", self.as_i64()),
            Signedness::Unsigned => write!(f, "{}", self.bits),
        }
    }
}
