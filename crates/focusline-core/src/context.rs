//! Rendering context for one focus + context chart.
//!
//! Everything the chart needs between gestures lives here: the dataset, the
//! layout, both x scales, both y scales, the brush and the synchronizer. It is
//! built once after loading and gesture handlers take it by `&mut`.

use std::path::Path;

use serde::Serialize;

use crate::{
    load_csv, Brush, BrushGesture, ChartConfig, CoreError, Dataset, Domain, DomainSynchronizer,
    FocusObserver, LinearScale, Selection, TimeScale, TracingObserver, UtcDateTime,
    ValidationError,
};

/// Result of one brush gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FocusUpdate {
    pub selection: Selection<UtcDateTime>,
    pub focus: Domain<UtcDateTime>,
}

/// A data point projected into plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FramePoint {
    pub ts: UtcDateTime,
    pub price: f64,
    pub x: f64,
    pub y: f64,
}

/// Points visible under a pair of scales, ready to redraw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub domain: Domain<UtcDateTime>,
    pub width: f64,
    pub height: f64,
    pub points: Vec<FramePoint>,
}

#[derive(Debug)]
pub struct ChartContext {
    dataset: Dataset,
    config: ChartConfig,
    focus_x: TimeScale,
    context_x: TimeScale,
    focus_y: LinearScale,
    context_y: LinearScale,
    brush: Brush,
    sync: DomainSynchronizer<UtcDateTime>,
}

impl ChartContext {
    pub fn new(dataset: Dataset, config: ChartConfig) -> Result<Self, ValidationError> {
        config.validate()?;

        let overview = dataset.time_extent();
        let values = dataset.value_domain();
        let x_range = (0.0, config.plot_width());

        let focus_x = TimeScale::new(overview, x_range)?;
        let context_x = TimeScale::new(overview, x_range)?;
        let focus_y = LinearScale::new(values, (config.focus_plot_height(), 0.0))?;
        let context_y = LinearScale::new(values, (config.context_plot_height(), 0.0))?;

        let mut sync = DomainSynchronizer::new(overview);
        sync.subscribe(TracingObserver);

        Ok(Self {
            dataset,
            config,
            focus_x,
            context_x,
            focus_y,
            context_y,
            brush: Brush::new(context_x),
            sync,
        })
    }

    /// Load the CSV at `path` and build a context over it.
    ///
    /// Nothing is interactive until this returns; a load failure means no
    /// context and therefore no selection handling.
    pub fn load(path: impl AsRef<Path>, config: ChartConfig) -> Result<Self, CoreError> {
        let dataset = load_csv(path)?;
        Ok(Self::new(dataset, config)?)
    }

    pub fn subscribe(&mut self, observer: impl FocusObserver<UtcDateTime> + 'static) {
        self.sync.subscribe(observer);
    }

    /// Run a gesture through the brush and rezoom the focus x scale.
    pub fn handle(&mut self, gesture: BrushGesture) -> Result<FocusUpdate, ValidationError> {
        let selection = self.brush.apply(gesture)?;
        let focus = self.sync.apply(selection);
        self.focus_x.set_domain(focus);
        Ok(FocusUpdate { selection, focus })
    }

    pub fn focus_frame(&self) -> Frame {
        let domain = self.sync.focus();
        project(
            &self.dataset,
            domain,
            &self.focus_x,
            &self.focus_y,
            self.config.focus_plot_height(),
        )
    }

    pub fn context_frame(&self) -> Frame {
        project(
            &self.dataset,
            *self.sync.overview(),
            &self.context_x,
            &self.context_y,
            self.config.context_plot_height(),
        )
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn overview(&self) -> &Domain<UtcDateTime> {
        self.sync.overview()
    }

    pub fn value_domain(&self) -> &Domain<f64> {
        self.focus_y.domain()
    }

    pub fn focus(&self) -> Domain<UtcDateTime> {
        self.sync.focus()
    }

    pub fn selection(&self) -> &Selection<UtcDateTime> {
        self.sync.selection()
    }

    pub fn focus_x(&self) -> &TimeScale {
        &self.focus_x
    }

    pub fn context_x(&self) -> &TimeScale {
        &self.context_x
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }
}

fn project(
    dataset: &Dataset,
    domain: Domain<UtcDateTime>,
    x: &TimeScale,
    y: &LinearScale,
    height: f64,
) -> Frame {
    let points = dataset
        .window(&domain)
        .iter()
        .map(|point| FramePoint {
            ts: point.ts,
            price: point.price,
            x: x.map(point.ts),
            y: y.map(point.price),
        })
        .collect();

    Frame {
        domain,
        width: x.range().1 - x.range().0,
        height,
        points,
    }
}
