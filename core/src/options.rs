//! Configuration options for matching and diagnostics.

/// Configuration options for the pattern matcher.
///
/// # Example
///
/// ```
/// use sylva_core::options::MatchOptions;
///
/// let options = MatchOptions { max_depth: 64 };
/// ```
#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// Maximum nesting depth the matcher descends before giving up.
    ///
    /// A match that would go deeper fails.
    ///
    /// Default: 1000
    pub max_depth: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self { max_depth: 1000 }
    }
}

/// Configuration options for [`TreeDump`](crate::visitor::TreeDump).
///
/// # Example
///
/// ```
/// use sylva_core::options::DumpOptions;
///
/// let options = DumpOptions {
///     show_roles: false,
///     ..DumpOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct DumpOptions {
    /// Prefix each child with the role it is attached under.
    ///
    /// Default: false
    pub show_roles: bool,

    /// Include keyword and punctuation tokens.
    ///
    /// Default: true
    pub show_tokens: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            show_roles: false,
            show_tokens: true,
        }
    }
}
