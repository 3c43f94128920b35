//! Board configuration: number of positions and colors

use super::error::{CodeError, MastermindError, Result};
use super::Code;

/// The shape of a Mastermind board
///
/// Both dimensions are at least 1. Colors are stored as `u8`, so a board
/// supports up to 255 colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    positions: usize,
    colors: u8,
}

impl GameConfig {
    /// Classic rules: 4 positions, 6 colors
    pub const CLASSIC: Self = Self {
        positions: 4,
        colors: 6,
    };

    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `positions` or `colors` is zero.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::GameConfig;
    ///
    /// let config = GameConfig::new(4, 6).unwrap();
    /// assert_eq!(config.space_size(), Some(1296));
    ///
    /// assert!(GameConfig::new(0, 6).is_err());
    /// ```
    pub fn new(positions: usize, colors: u8) -> Result<Self> {
        if positions == 0 {
            return Err(MastermindError::InvalidConfiguration(
                "positions must be at least 1".to_string(),
            ));
        }
        if colors == 0 {
            return Err(MastermindError::InvalidConfiguration(
                "colors must be at least 1".to_string(),
            ));
        }
        Ok(Self { positions, colors })
    }

    #[inline]
    #[must_use]
    pub const fn positions(&self) -> usize {
        self.positions
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> u8 {
        self.colors
    }

    /// Number of distinct codes (`colors^positions`), or `None` on overflow
    #[must_use]
    pub fn space_size(&self) -> Option<u64> {
        let exponent = u32::try_from(self.positions).ok()?;
        u64::from(self.colors).checked_pow(exponent)
    }

    /// Check a code against this board's length and color range
    ///
    /// # Errors
    /// Returns `InvalidCode` describing the first violated invariant.
    pub fn validate(&self, code: &Code) -> Result<()> {
        if code.len() != self.positions {
            return Err(CodeError::WrongLength {
                expected: self.positions,
                actual: code.len(),
            }
            .into());
        }

        if let Some((position, &value)) = code
            .pegs()
            .iter()
            .enumerate()
            .find(|&(_, &value)| value >= self.colors)
        {
            return Err(CodeError::ColorOutOfRange {
                position,
                value,
                colors: self.colors,
            }
            .into());
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}
