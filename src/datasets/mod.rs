mod loader;

pub use loader::{load_table, Datasets};
