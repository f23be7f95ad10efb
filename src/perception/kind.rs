use crate::error::PerceptionError;

/// Result tag, keeping the legacy bit-flag values for interop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PerceptionType {
    /// Object detections
    Det = 1 << 0,
    /// Segmentation map
    Seg = 1 << 2,
}

impl PerceptionType {
    /// The raw flag value.
    #[inline]
    pub const fn bits(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for PerceptionType {
    type Error = PerceptionError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            1 => Ok(Self::Det),
            4 => Ok(Self::Seg),
            other => Err(PerceptionError::UnknownType(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits() {
        assert_eq!(PerceptionType::Det.bits(), 1);
        assert_eq!(PerceptionType::Seg.bits(), 4);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(PerceptionType::try_from(1).unwrap(), PerceptionType::Det);
        assert_eq!(PerceptionType::try_from(4).unwrap(), PerceptionType::Seg);
        for bits in [0, 2, 5] {
            assert!(matches!(
                PerceptionType::try_from(bits),
                Err(PerceptionError::UnknownType(b)) if b == bits
            ));
        }
    }
}
