pub mod fetcher;
pub mod ports;
pub mod use_cases;

pub use fetcher::{DEFAULT_FETCH_TIMEOUT, UpstreamFetcher};
pub use ports::{NumberSource, WindowStore};
pub use use_cases::{AverageError, AverageResult, GetAverageUseCase};
