pub mod color;
pub mod config;
pub mod error;
pub mod host;
pub mod indicator;
pub mod layout;
pub mod render;
pub mod scroll;

pub use color::{blend, Rgba};
pub use config::{AppConfig, EasingType, SettleConfig};
pub use error::{Error, Result};
pub use host::{PageHost, RecordingSurface, Surface};
pub use indicator::{PagerIndicator, Visibility};
pub use layout::{LayoutConfig, PillStyle, Rect, SurfaceSize};
pub use render::Pill;
pub use scroll::{Direction, PagerEvent, Phase, ScrollState, ScrollTracker};
