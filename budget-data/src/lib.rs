pub mod loader;

pub use loader::{
    BracketRecord, BracketSchedules, CountyRecord, DeductionRecord, PolicyLoaderError,
    PolicyTableLoader,
};
