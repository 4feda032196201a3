mod labels;
mod scene;
mod snapshot;
mod style;
mod surface;

pub use snapshot::SurfaceSnapshot;
pub use style::SurfaceStyle;
pub use surface::{GraphSurface, GraphSurfaceConfig, SurfaceMode};
