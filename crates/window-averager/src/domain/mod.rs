pub mod average;
pub mod category;
pub mod fetch;
pub mod window;

pub use average::{AVERAGE_DECIMALS, average};
pub use category::Category;
pub use fetch::{FetchError, FetchOutcome};
pub use window::{NumberWindow, WindowMerge};
