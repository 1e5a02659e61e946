//! Empirical collision measurements for fixed-size chained hash tables fed
//! with synthetic 12-digit keys.

pub mod config;
pub mod digest;
pub mod error;
pub mod key;
pub mod simulate;
pub mod table;


pub use config::{table_configs, TableConfig};
pub use digest::{digesters, Digest, Digester, DigesterDetail};
pub use error::{Result, SimError};
pub use key::{generate_key, Key};
pub use simulate::{simulate, ExecutionMode, RoundParams, SimulationReport};
pub use table::{bucket_index, ChainedTable};
