// File: crates/scrolly-core/src/lib.rs
// Summary: Core library entry point; dataset reshaping, step observation, and chart rendering to SVG/PNG.

pub mod axis;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod grid;
pub mod observer;
pub mod page;
pub mod raster;
pub mod scale;
pub mod scene;
pub mod series;
pub mod steps;
pub mod svg;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use dataset::{load_wide, load_wide_from_path, parse_records, reshape, Group, RawRecord, WideRecord};
pub use error::{Error, Result};
pub use observer::{IntersectionEntry, ScrollDriver, StepEvent, StepObserver, VISIBILITY_THRESHOLD};
pub use page::render_page;
pub use scale::LinearScale;
pub use scene::{Element, Scene, SeriesLine};
pub use series::LineSeries;
pub use steps::{Section, Step, SECTIONS};
pub use theme::Theme;
pub use view::{ChartView, RenderStatus};
