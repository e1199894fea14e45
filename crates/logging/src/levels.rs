//! crates/logging/src/levels.rs
//! Debug flag categories and their per-flag levels.

/// Debug flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebugFlag {
    /// Resolving and reading inputs (files, stdin, literal strings).
    Input,
    /// Per-input digest results and padded sizes.
    Digest,
    /// Dispatch of independent inputs onto the thread pool.
    Batch,
}

impl DebugFlag {
    /// Every flag, in the order they are reported.
    pub const ALL: [Self; 3] = [Self::Input, Self::Digest, Self::Batch];

    /// Name accepted by `--debug` and used to build the tracing target.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Digest => "digest",
            Self::Batch => "batch",
        }
    }

    /// Tracing target that events for this flag are emitted under.
    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::Input => "rmd5::input",
            Self::Digest => "rmd5::digest",
            Self::Batch => "rmd5::batch",
        }
    }

    /// Looks up a flag by its `--debug` name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.name() == name)
    }
}

/// Level assigned to each debug flag. Zero disables the flag.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugLevels {
    /// Input resolution level.
    pub input: u8,
    /// Digest reporting level.
    pub digest: u8,
    /// Batch dispatch level.
    pub batch: u8,
}

impl DebugLevels {
    /// Get the level for a specific flag.
    pub const fn get(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Input => self.input,
            DebugFlag::Digest => self.digest,
            DebugFlag::Batch => self.batch,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Input => self.input = level,
            DebugFlag::Digest => self.digest = level,
            DebugFlag::Batch => self.batch = level,
        }
    }
}
