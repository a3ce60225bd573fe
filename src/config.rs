//! Tunables for the table and the file buffer.
//!
//! These are passed into constructors rather than read from globals so that
//! tests can drive tiny tables deterministically.

use crate::error::ConfigError;

pub const DEFAULT_TABLE_CAPACITY: usize = 256;
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;
pub const DEFAULT_SCALE_FACTOR: usize = 2;
pub const DEFAULT_BUFFER_CAPACITY: usize = 512;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TableConfig {
    /// Slot count of a freshly created table.
    pub initial_capacity: usize,
    /// Maximum `count / capacity` tolerated after an insertion.
    pub load_factor: f64,
    /// Capacity multiplier applied by `expand`.
    pub scale_factor: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_TABLE_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
            scale_factor: DEFAULT_SCALE_FACTOR,
        }
    }
}

impl TableConfig {
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroTableCapacity);
        }
        // NaN fails both comparisons and is rejected here too.
        if !(self.load_factor > 0.0 && self.load_factor < 1.0) {
            return Err(ConfigError::LoadFactorOutOfRange(self.load_factor));
        }
        if self.scale_factor < 2 {
            return Err(ConfigError::ScaleFactorTooSmall(self.scale_factor));
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BufferConfig {
    /// Capacity reserved on the first append into an empty buffer.
    pub initial_capacity: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl BufferConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroBufferCapacity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(TableConfig::default().validate().is_ok());
        assert!(BufferConfig::default().validate().is_ok());
        assert_eq!(TableConfig::default().initial_capacity, 256);
        assert_eq!(BufferConfig::default().initial_capacity, 512);
    }

    #[test]
    fn rejects_bad_values() {
        let bad = TableConfig::with_capacity(0);
        assert_eq!(bad.validate(), Err(ConfigError::ZeroTableCapacity));

        for lf in [0.0, 1.0, 1.5, -0.1, f64::NAN] {
            let cfg = TableConfig {
                load_factor: lf,
                ..TableConfig::default()
            };
            assert!(matches!(
                cfg.validate(),
                Err(ConfigError::LoadFactorOutOfRange(_))
            ));
        }

        let cfg = TableConfig {
            scale_factor: 1,
            ..TableConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ScaleFactorTooSmall(1)));

        let buf = BufferConfig {
            initial_capacity: 0,
        };
        assert_eq!(buf.validate(), Err(ConfigError::ZeroBufferCapacity));
    }
}
