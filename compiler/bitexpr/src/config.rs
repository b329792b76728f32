use bitexpr_ast::{DEFAULT_CAPACITY, MAX_CAPACITY};
use bitexpr_number::{ErrorKind, Result, Signedness, SizeMode};

/// Settings for an [`Engine`](crate::Engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Token capacity of the engine's expression
    pub capacity: usize,
    /// Width every evaluation wraps to
    pub size_mode: SizeMode,
    pub signedness: Signedness,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            size_mode: SizeMode::Qword,
            signedness: Signedness::Unsigned,
        }
    }
}

impl EngineConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_size_mode(mut self, size_mode: SizeMode) -> Self {
        self.size_mode = size_mode;
        self
    }

    pub fn with_signedness(mut self, signedness: Signedness) -> Self {
        self.signedness = signedness;
        self
    }

    /// Rejects a capacity no expression can be created with.
    pub fn validate(&self) -> Result<()> {
        if self.capacity > MAX_CAPACITY {
            return Err(ErrorKind::CapacityExceeded);
        }
        Ok(())
    }
}
