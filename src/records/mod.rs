mod manager;
mod persistence;

pub use manager::RecordManager;
pub use persistence::{load_records, save_records, RecordStore};
