mod errors;

pub use errors::Error;

pub type RecommendarrResult<T> = Result<T, Error>;
