//! Typed domain separators for canonical hashing.
//!
//! Every hash computation selects a domain via [`HashDomain`]. Adding a new
//! domain is a single change here: the enum, `as_bytes()`, `ALL`, and
//! `Display` are all generated from the same macro invocation.

/// Declares `HashDomain` enum, `as_bytes()`, `ALL`, and `Display` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Every variant maps to a unique, null-terminated byte string used as
        /// a SHA-256 prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// State-key fingerprint (agent position + food grid).
    StateKey => b"FORAGE::STATE_KEY::V1\0",

    /// Canonical audit graph of one search run.
    SearchGraph => b"FORAGE::SEARCH_GRAPH::V1\0",

    /// Search policy snapshot.
    SearchPolicy => b"FORAGE::SEARCH_POLICY::V1\0",

    // -----------------------------------------------------------------------
    // Harness
    // -----------------------------------------------------------------------

    /// Maze layout text.
    MazeLayout => b"FORAGE::MAZE_LAYOUT::V1\0",

    /// Bundle artifact content hashing.
    BundleArtifact => b"FORAGE::BUNDLE_ARTIFACT::V1\0",

    /// Bundle digest (normative projection).
    BundleDigest => b"FORAGE::BUNDLE_DIGEST::V1\0",

    // -----------------------------------------------------------------------
    // Benchmarks
    // -----------------------------------------------------------------------

    /// Benchmark determinism guard.
    BenchGuard => b"FORAGE::BENCH_GUARD::V1\0",
}
