mod is_chained;
mod length;

pub use is_chained::IsChained;
pub use length::Length;
