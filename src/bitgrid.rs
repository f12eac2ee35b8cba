//! A square bit grid packed into an unsigned integer.
//!
//! Boards are `n×n` grids stored row-major in the bits of `T`. Unlike a
//! const-generic bitboard the dimension is a runtime value, because the game
//! offers two board sizes chosen interactively at startup. A `u128` instance
//! covers both supported sizes (6×6 and 10×10).

use core::fmt;
use core::ops::{BitAnd, BitOr, BitXor};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bit grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitGridError {
    /// Requested grid size n*n exceeds the capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column index is out of bounds [0..n).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitGridError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: n*n={} exceeds T::BITS={}", n * n, capacity)
            }
            BitGridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

impl std::error::Error for BitGridError {}

/// An `n×n` bit grid stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    n: usize,
}

impl<T> BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn capacity() -> usize {
        core::mem::size_of::<T>() * 8
    }

    fn valid_mask(n: usize) -> T {
        if n * n == Self::capacity() {
            !T::zero()
        } else {
            (T::one() << (n * n)) - T::one()
        }
    }

    /// Create an empty `n×n` grid without a capacity check. The caller must
    /// guarantee `n*n <= T::BITS`; use [`BitGrid::try_new`] otherwise.
    #[inline]
    pub fn new(n: usize) -> Self {
        debug_assert!(n * n <= Self::capacity());
        BitGrid { bits: T::zero(), n }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if `n*n > T::BITS`.
    pub fn try_new(n: usize) -> Result<Self, BitGridError> {
        let capacity = Self::capacity();
        if n * n > capacity {
            Err(BitGridError::SizeTooLarge { n, capacity })
        } else {
            Ok(BitGrid { bits: T::zero(), n })
        }
    }

    /// Grid dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns true if every cell of the grid is set.
    pub fn is_full(&self) -> bool {
        self.count_ones() == self.n * self.n
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitGridError> {
        self.check_bounds(row, col)?;
        let idx = row * self.n + col;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitGridError> {
        self.check_bounds(row, col)?;
        let idx = row * self.n + col;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitGridError> {
        self.check_bounds(row, col)?;
        let idx = row * self.n + col;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    /// Clears all bits to 0.
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BitGridError> {
        if row >= self.n || col >= self.n {
            Err(BitGridError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    /// Consumes the grid and returns the raw integer.
    #[inline]
    pub fn into_raw(self) -> T {
        self.bits
    }

    /// Creates a grid from the raw integer, masking out bits beyond `n*n`.
    #[inline]
    pub fn from_raw(raw: T, n: usize) -> Self {
        debug_assert!(n * n <= Self::capacity());
        BitGrid {
            bits: raw & Self::valid_mask(n),
            n,
        }
    }

    /// Iterator over the set bits as `(row, col)` pairs.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits { grid: self, idx: 0 }
    }
}

impl<T> fmt::Debug for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid ({}x{}):", self.n, self.n)?;
        for r in 0..self.n {
            for c in 0..self.n {
                let bit = if ((self.bits >> (r * self.n + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a grid.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    grid: &'a BitGrid<T>,
    idx: usize,
}

impl<'a, T> Iterator for SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let n = self.grid.n;
        while self.idx < n * n {
            let idx = self.idx;
            self.idx += 1;
            if ((self.grid.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / n, idx % n));
            }
        }
        None
    }
}

/// Bitwise AND of two grids. Both operands must share a dimension.
impl<T> BitAnd for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        debug_assert_eq!(self.n, rhs.n);
        BitGrid::from_raw(self.bits & rhs.bits, self.n)
    }
}

/// Bitwise OR of two grids. Both operands must share a dimension.
impl<T> BitOr for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        debug_assert_eq!(self.n, rhs.n);
        BitGrid::from_raw(self.bits | rhs.bits, self.n)
    }
}

/// Bitwise XOR of two grids. Both operands must share a dimension.
impl<T> BitXor for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self {
        debug_assert_eq!(self.n, rhs.n);
        BitGrid::from_raw(self.bits ^ rhs.bits, self.n)
    }
}
