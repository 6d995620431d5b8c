mod get_average;

pub use get_average::{AverageError, AverageResult, GetAverageUseCase};
