pub mod frame;
pub mod moving_average;

pub use frame::{FrameRow, PriceFrame};
pub use moving_average::simple_moving_average;
