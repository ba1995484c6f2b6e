use std::fmt;

/// Counter printed with `'` between groups of three digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NiceInt(u64);

impl From<u64> for NiceInt {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<usize> for NiceInt {
    fn from(value: usize) -> Self {
        Self(value as u64)
    }
}

impl fmt::Display for NiceInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let head = digits.len() % 3;
        f.write_str(&digits[..head])?;
        for (i, group) in digits.as_bytes()[head..].chunks(3).enumerate() {
            if head != 0 || i != 0 {
                f.write_str("'")?;
            }
            // only ASCII digits
            f.write_str(std::str::from_utf8(group).map_err(|_| fmt::Error)?)?;
        }
        Ok(())
    }
}
