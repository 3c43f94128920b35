//! Enumeration of every code on a board
//!
//! Codes are ordered lexicographically: the first position varies slowest and
//! the last position fastest, so index `i` is `i` written in base `colors`.

use super::{Code, GameConfig, MastermindError, Result};
use rand::Rng;

/// The full set of codes for one configuration
///
/// Nothing is materialised up front; codes are produced by [`CodeSpace::iter`]
/// or decoded on demand with [`CodeSpace::code_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSpace {
    config: GameConfig,
    size: u64,
}

impl CodeSpace {
    /// Create the code space for a configuration
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `colors^positions` does not fit in a `u64`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, CodeSpace, GameConfig};
    ///
    /// let space = CodeSpace::new(GameConfig::new(2, 3).unwrap()).unwrap();
    /// assert_eq!(space.len(), 9);
    /// assert_eq!(space.code_at(5), Some(Code::new([1, 2])));
    /// ```
    pub fn new(config: GameConfig) -> Result<Self> {
        let size = config.space_size().ok_or_else(|| {
            MastermindError::InvalidConfiguration(format!(
                "{}^{} codes is too many to enumerate",
                config.colors(),
                config.positions()
            ))
        })?;
        Ok(Self { config, size })
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// Number of codes in the space
    #[inline]
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.size
    }

    /// Always false: a valid configuration has at least one code
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Decode the code at `index`, or `None` if out of range
    #[must_use]
    pub fn code_at(&self, index: u64) -> Option<Code> {
        (index < self.size).then(|| self.decode(index))
    }

    /// Pick a code uniformly at random
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Code {
        self.decode(rng.random_range(0..self.size))
    }

    /// Lazily iterate over every code in order
    #[must_use]
    pub fn iter(&self) -> CodeSpaceIter {
        CodeSpaceIter {
            colors: self.config.colors(),
            current: vec![0; self.config.positions()],
            remaining: self.size,
        }
    }

    fn decode(&self, mut index: u64) -> Code {
        let colors = u64::from(self.config.colors());
        let mut pegs = vec![0u8; self.config.positions()];
        for peg in pegs.iter_mut().rev() {
            // Remainder is always < colors <= 255
            *peg = (index % colors) as u8;
            index /= colors;
        }
        Code::new(pegs)
    }
}

impl<'a> IntoIterator for &'a CodeSpace {
    type Item = Code;
    type IntoIter = CodeSpaceIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Odometer over a [`CodeSpace`]
#[derive(Debug, Clone)]
pub struct CodeSpaceIter {
    colors: u8,
    current: Vec<u8>,
    remaining: u64,
}

impl Iterator for CodeSpaceIter {
    type Item = Code;

    fn next(&mut self) -> Option<Code> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let code = Code::new(self.current.clone());

        // Advance the last position, carrying leftwards
        for peg in self.current.iter_mut().rev() {
            *peg += 1;
            if *peg < self.colors {
                break;
            }
            *peg = 0;
        }

        Some(code)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
