pub mod cli;
pub mod conf;
pub mod enrichment;
pub mod ingest;
pub mod logging;
pub mod parse;
pub mod report;
pub mod store;
