pub mod mapping;
pub mod range;
pub mod sample;
pub mod ticks;
pub mod types;

pub use mapping::{ChannelMapping, position_mapping, velocity_mapping};
pub use range::{RangeSmoothingTuning, SmoothedRange};
pub use sample::{OverflowPolicy, Sample, SampleBuffer};
pub use ticks::{AxisRangeMode, AxisTicks, choose_tick_spacing};
pub use types::{Margins, Viewport};
