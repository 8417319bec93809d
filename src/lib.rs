pub mod directory_cache;
pub mod imbalance;
pub mod insight;
pub mod model;
pub mod sleeper_parse;
pub mod swaps;
