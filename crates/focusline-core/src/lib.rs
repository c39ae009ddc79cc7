//! # focusline Core
//!
//! Focus + context brushing for month-bucketed price series.
//!
//! ## Overview
//!
//! A small overview (context) chart spans the whole series. Brushing a
//! window on it zooms a larger focus chart to that window; clearing the
//! brush zooms back out. This crate owns that coupling:
//!
//! - **Loading** `date,price` CSV files into a validated [`Dataset`]
//! - **Scales** mapping time and price domains onto pixel ranges
//! - **Brush** gestures clamped to the overview axis
//! - **Domain synchronization** from selection to focus domain
//! - **Chart context** tying the above together for one chart
//! - **Response envelope** for machine-readable output
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`brush`] | Brush gestures and selection clamping |
//! | [`config`] | Chart sizes and margins |
//! | [`context`] | Rendering context built once per dataset |
//! | [`domain`] | Domain models (DataPoint, Dataset, Domain, UtcDateTime) |
//! | [`envelope`] | Response envelope with metadata |
//! | [`error`] | Core error types |
//! | [`load`] | CSV loading |
//! | [`scale`] | Linear and time scales |
//! | [`selection`] | Brush selection state |
//! | [`sync`] | Focus domain synchronizer and observers |
//!
//! ## Quick Start
//!
//! ```rust
//! use focusline_core::{read_csv, BrushGesture, ChartConfig, ChartContext};
//!
//! let csv = "date,price\nJan 2013,100\nFeb 2013,110\nMar 2013,90\n";
//! let dataset = read_csv(csv.as_bytes()).unwrap();
//! let mut chart = ChartContext::new(dataset, ChartConfig::default()).unwrap();
//!
//! let update = chart.handle("Feb 2013..Mar 2013".parse::<BrushGesture>().unwrap()).unwrap();
//! assert_eq!(update.focus.min().format_month_year(), "Feb 2013");
//!
//! let update = chart.handle(BrushGesture::Clear).unwrap();
//! assert_eq!(update.focus, *chart.overview());
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (`info` on load, `debug` per focus
//! change, `trace` per gesture) and never installs a subscriber itself.

pub mod brush;
pub mod config;
pub mod context;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod load;
pub mod scale;
pub mod selection;
pub mod sync;

pub use brush::{Brush, BrushGesture};
pub use config::{ChartConfig, Margin};
pub use context::{ChartContext, FocusUpdate, Frame, FramePoint};
pub use domain::{DataPoint, Dataset, Domain, DomainValue, UtcDateTime};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta, SCHEMA_VERSION};
pub use error::{CoreError, LoadError, ValidationError};
pub use load::{load_csv, read_csv};
pub use scale::{LinearScale, TimeScale};
pub use selection::Selection;
pub use sync::{
    on_selection_changed, DomainSynchronizer, FocusLog, FocusObserver, RecordingObserver,
    TracingObserver,
};
