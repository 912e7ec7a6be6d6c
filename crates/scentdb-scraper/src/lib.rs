pub mod client;
pub mod crawl;
pub mod error;
pub mod extract;
pub mod ids;
pub mod page;
pub mod parse;
pub mod sizes;
pub mod synth;

pub use client::{PageSource, StorefrontClient};
pub use crawl::{crawl_catalog, CrawlConfig, CrawlOutcome, CrawlReport};
pub use error::ScraperError;
pub use ids::{EntityKind, IdAllocator};
pub use sizes::SizeTable;
pub use synth::AttributeGenerator;
