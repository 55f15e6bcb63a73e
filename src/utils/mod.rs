mod config;
mod parse_rle;

pub use config::{
    get_config, set_default_fill_rate, set_default_seed, set_max_cells_log2, ConfigSnapshot,
};
pub use parse_rle::parse_rle;
