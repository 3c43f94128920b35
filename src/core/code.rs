//! Mastermind code representation
//!
//! A Code is an ordered row of pegs, each peg a color index. The same type
//! serves as the hidden secret and as every guess.

use super::error::{CodeError, MastermindError, Result};
use super::GameConfig;
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of color indices
///
/// A `Code` on its own is just a row of pegs; whether it fits a board is
/// checked with [`GameConfig::validate`] or [`Code::validated`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(Vec<u8>);

impl Code {
    /// Wrap a row of pegs without validating it
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let code = Code::new([1, 2, 1, 3]);
    /// assert_eq!(code.pegs(), &[1, 2, 1, 3]);
    /// ```
    #[must_use]
    pub fn new(pegs: impl Into<Vec<u8>>) -> Self {
        Self(pegs.into())
    }

    /// Create a code and check it against a board configuration
    ///
    /// # Errors
    /// Returns `InvalidCode` if the length differs from `config.positions()`
    /// or any peg is outside `[0, config.colors())`.
    pub fn validated(pegs: impl Into<Vec<u8>>, config: &GameConfig) -> Result<Self> {
        let code = Self::new(pegs);
        config.validate(&code)?;
        Ok(code)
    }

    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Color at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn peg_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Count of each color `0..colors` in this code
    ///
    /// Pegs outside the range are ignored; callers validate first.
    pub(crate) fn color_counts(&self, colors: u8) -> Vec<usize> {
        let mut counts = vec![0; usize::from(colors)];
        for &peg in &self.0 {
            if let Some(count) = counts.get_mut(usize::from(peg)) {
                *count += 1;
            }
        }
        counts
    }
}

impl From<Vec<u8>> for Code {
    fn from(pegs: Vec<u8>) -> Self {
        Self(pegs)
    }
}

impl<const N: usize> From<[u8; N]> for Code {
    fn from(pegs: [u8; N]) -> Self {
        Self(pegs.to_vec())
    }
}

impl FromStr for Code {
    type Err = MastermindError;

    /// Parse pegs separated by whitespace and/or commas, e.g. `"1 2 1 3"`
    fn from_str(s: &str) -> Result<Self> {
        s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u8>()
                    .map_err(|_| MastermindError::from(CodeError::NotAnInteger(token.to_string())))
            })
            .collect::<Result<Vec<u8>>>()
            .map(Self)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for peg in &self.0 {
            if first {
                write!(f, "{peg}")?;
            } else {
                write!(f, " {peg}")?;
            }
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_creation_keeps_order() {
        let code = Code::new(vec![3, 0, 2]);
        assert_eq!(code.pegs(), &[3, 0, 2]);
        assert_eq!(code.len(), 3);
        assert_eq!(code.peg_at(0), 3);
        assert_eq!(code.peg_at(2), 2);
    }

    #[test]
    fn validated_rejects_bad_codes() {
        let config = GameConfig::CLASSIC;
        assert!(Code::validated([0, 1, 2, 3], &config).is_ok());
        assert!(Code::validated([0, 1, 2], &config).is_err());
        assert!(Code::validated([0, 1, 2, 7], &config).is_err());
    }

    #[test]
    fn parse_whitespace_and_commas() {
        let a: Code = "1 2 1 3".parse().unwrap();
        let b: Code = "1,2, 1 ,3".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.pegs(), &[1, 2, 1, 3]);
    }

    #[test]
    fn parse_rejects_non_integers() {
        let result = "1 two 3 4".parse::<Code>();
        assert!(matches!(
            result,
            Err(MastermindError::InvalidCode(CodeError::NotAnInteger(ref t))) if t == "two"
        ));
        assert!("1.5 2 3 4".parse::<Code>().is_err());
        assert!("-1 2 3 4".parse::<Code>().is_err());
    }

    #[test]
    fn parse_empty_is_empty_code() {
        let code: Code = "   ".parse().unwrap();
        assert!(code.is_empty());
    }

    #[test]
    fn color_counts_handles_repeats() {
        let code = Code::new([1, 2, 1, 3]);
        assert_eq!(code.color_counts(6), vec![0, 2, 1, 1, 0, 0]);
    }

    #[test]
    fn display_is_space_separated() {
        assert_eq!(Code::new([1, 2, 1, 3]).to_string(), "1 2 1 3");
        assert_eq!(Code::new([5]).to_string(), "5");
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Code::new([0, 1]) < Code::new([1, 0]));
        assert!(Code::new([1, 0]) < Code::new([1, 1]));
    }
}
