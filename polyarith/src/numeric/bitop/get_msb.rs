/// Index of the most significant set bit. Zero maps to 0, like one does.
pub(crate) trait Msb {
    fn get_msb(self) -> Self;
}

impl Msb for u32 {
    #[inline]
    fn get_msb(self) -> Self {
        if self == 0 {
            0
        } else {
            u32::BITS - 1 - self.leading_zeros()
        }
    }
}

impl Msb for u64 {
    #[inline]
    fn get_msb(self) -> Self {
        if self == 0 {
            0
        } else {
            (u64::BITS - 1 - self.leading_zeros()) as u64
        }
    }
}

impl Msb for usize {
    #[inline]
    fn get_msb(self) -> Self {
        (self as u64).get_msb() as usize
    }
}
