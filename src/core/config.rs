//! Grid dimensions for a puzzle session

/// Fixed grid dimensions: `rows` attempts of `cols` letters each
///
/// Immutable for the lifetime of a session. Both dimensions are at least 1;
/// [`GameConfig::new`] is the only way to build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    rows: usize,
    cols: usize,
}

impl GameConfig {
    /// The classic six attempts at a five-letter word
    pub const STANDARD: Self = Self { rows: 6, cols: 5 };

    /// Create a config, clamping zero dimensions up to 1
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: if rows == 0 { 1 } else { rows },
            cols: if cols == 0 { 1 } else { cols },
        }
    }

    /// Number of attempts
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Letters per attempt
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_six_by_five() {
        let config = GameConfig::default();
        assert_eq!(config.rows(), 6);
        assert_eq!(config.cols(), 5);
    }

    #[test]
    fn zero_dimensions_are_clamped() {
        assert_eq!(GameConfig::new(0, 0), GameConfig::new(1, 1));
        assert_eq!(GameConfig::new(4, 7).cols(), 7);
    }
}
