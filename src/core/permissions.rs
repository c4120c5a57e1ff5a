use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Access flags of a file. A fresh set is full; decoding only ever removes flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u8 {
        const READ    = 1 << 1;
        const WRITE   = 1 << 2;
        const EXECUTE = 1 << 3;
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::all()
    }
}

impl Permissions {
    /// Decode a POSIX permission value starting from the full set.
    pub fn from_posix_value(value: i64) -> Self {
        let mut permissions = Self::all();
        permissions.narrow_with_posix_value(value);
        permissions
    }

    /// Clear every flag whose digit ('4', '2', '1') is missing from the decimal
    /// rendering of `value`.
    ///
    /// This is a substring test on base-10 text, not octal bit arithmetic, so
    /// incidental digits count: `421` keeps all three flags and `420` (0o644)
    /// drops EXECUTE. Kept as-is for compatibility with existing records.
    pub fn narrow_with_posix_value(&mut self, value: i64) {
        let text = value.to_string();

        for (digit, flag) in [('4', Self::READ), ('2', Self::WRITE), ('1', Self::EXECUTE)] {
            if !text.contains(digit) {
                self.remove(flag);
            }
        }
    }
}

/// `rwx`-style rendering, `-` for a cleared flag.
impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = if self.contains(Self::READ) { 'r' } else { '-' };
        let w = if self.contains(Self::WRITE) { 'w' } else { '-' };
        let x = if self.contains(Self::EXECUTE) { 'x' } else { '-' };
        write!(f, "{r}{w}{x}")
    }
}
