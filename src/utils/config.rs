use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

struct Config {
    max_cells_log2: AtomicU32,
    // f64 stored as its bit pattern
    default_fill_rate: AtomicU64,
    default_seed: AtomicU64,
}

static CONFIG: Config = Config {
    max_cells_log2: AtomicU32::new(32),
    default_fill_rate: AtomicU64::new(0x3FD3_3333_3333_3333), // 0.3
    default_seed: AtomicU64::new(42),
};

pub struct ConfigSnapshot {
    /// No board buffer may hold more than `2^max_cells_log2` cells.
    pub max_cells_log2: u32,
    /// Fill rate used by `Board::randomize` when the caller passes `None`.
    pub default_fill_rate: f64,
    /// Seed used by `Board::randomize` when the caller passes `None`.
    pub default_seed: u64,
}

impl ConfigSnapshot {
    pub fn max_cells(&self) -> u128 {
        1 << self.max_cells_log2
    }
}

pub fn get_config() -> ConfigSnapshot {
    ConfigSnapshot {
        max_cells_log2: CONFIG.max_cells_log2.load(Ordering::Relaxed),
        default_fill_rate: f64::from_bits(CONFIG.default_fill_rate.load(Ordering::Relaxed)),
        default_seed: CONFIG.default_seed.load(Ordering::Relaxed),
    }
}

pub fn set_max_cells_log2(cap_log2: u32) {
    assert!(cap_log2 < 128);
    CONFIG.max_cells_log2.store(cap_log2, Ordering::Relaxed);
}

pub fn set_default_fill_rate(fill_rate: f64) {
    assert!((0.0..=1.0).contains(&fill_rate));
    CONFIG
        .default_fill_rate
        .store(fill_rate.to_bits(), Ordering::Relaxed);
}

pub fn set_default_seed(seed: u64) {
    CONFIG.default_seed.store(seed, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = get_config();
        assert_eq!(config.max_cells_log2, 32);
        assert_eq!(config.max_cells(), 1 << 32);
        assert_eq!(config.default_fill_rate, 0.3);
        assert_eq!(config.default_seed, 42);
    }
}
