//! Parser configuration.
//!
//! Bounds the work a single `parse` call may do and decides whether
//! content after the top-level value is tolerated.

/// Configuration shared by the lexer and the parser.
///
/// The defaults keep the historical behaviour (trailing input ignored)
/// while bounding input size and nesting so the recursive descent
/// cannot exhaust the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum total input size in bytes
    pub max_input_size: u64,
    /// Maximum nesting depth for arrays/objects
    pub max_nesting_depth: u64,
    /// Whether anything after the top-level value is ignored
    pub allow_trailing_input: bool,
}

impl Limits {
    /// Limits matching the historical parser: trailing input is ignored.
    pub const fn compatible() -> Self {
        Self {
            max_input_size: 16 * 1024 * 1024, // 16 MiB
            max_nesting_depth: 128,
            allow_trailing_input: true,
        }
    }

    /// Tighter limits that also reject trailing input.
    pub const fn strict() -> Self {
        Self {
            max_input_size: 1024 * 1024, // 1 MiB
            max_nesting_depth: 64,
            allow_trailing_input: false,
        }
    }

    /// No size or depth bounds. Only use on trusted input.
    pub const fn unbounded() -> Self {
        Self {
            max_input_size: u64::MAX,
            max_nesting_depth: u64::MAX,
            allow_trailing_input: true,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::compatible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_compatible() {
        assert_eq!(Limits::default(), Limits::compatible());
        assert!(Limits::default().allow_trailing_input);
    }

    #[test]
    fn test_strict_limits() {
        let limits = Limits::strict();
        assert!(!limits.allow_trailing_input);
        assert_eq!(limits.max_nesting_depth, 64);
        assert!(limits.max_input_size < Limits::compatible().max_input_size);
    }
}
