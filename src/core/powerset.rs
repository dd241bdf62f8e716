// powerset.rs - Lazy subset enumeration over a bitmask

/// Set of positions into an ordered population, stored as a bitmask.
///
/// Bit `i` set means the i-th item of the population is a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Subset(u64);

impl Subset {
    pub const EMPTY: Subset = Subset(0);

    pub fn from_bits(bits: u64) -> Self {
        Subset(bits)
    }

    pub fn bits(self) -> u64 {
        self.0
    }

    pub fn contains(self, index: usize) -> bool {
        index < 64 && self.0 & (1u64 << index) != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Iterator over every subset of a mask, including the empty set and the mask itself.
///
/// Walks submasks in ascending numeric order, so a mask of the lowest `n` bits
/// yields 0, 1, .., 2^n - 1. Cloning restarts nothing: build a new one to restart.
#[derive(Debug, Clone)]
pub struct Powerset {
    mask: u64,
    next: Option<u64>,
}

impl Powerset {
    /// Largest population the bitmask representation supports
    pub const MAX_ITEMS: usize = 63;

    /// All subsets of the members of `mask`
    pub fn within(mask: Subset) -> Self {
        Self {
            mask: mask.0,
            next: Some(0),
        }
    }
}

impl Iterator for Powerset {
    type Item = Subset;

    fn next(&mut self) -> Option<Subset> {
        let current = self.next?;
        // Next submask in ascending order: carry through the bits outside the mask
        self.next = if current == self.mask {
            None
        } else {
            Some(((current | !self.mask).wrapping_add(1)) & self.mask)
        };
        Some(Subset(current))
    }
}
