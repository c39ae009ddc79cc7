use focusline_core::{ChartContext, Domain, Frame, UtcDateTime};
use serde::Serialize;

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct Layout {
    plot_width: f64,
    focus_plot_height: f64,
    context_plot_height: f64,
}

#[derive(Debug, Serialize)]
struct OverviewResponseData {
    overview: Domain<UtcDateTime>,
    value_domain: Domain<f64>,
    first_month: String,
    last_month: String,
    layout: Layout,
    context: Frame,
}

pub fn run(chart: &mut ChartContext) -> Result<CommandResult, CliError> {
    let overview = *chart.overview();
    let config = chart.config();

    let data = OverviewResponseData {
        overview,
        value_domain: *chart.value_domain(),
        first_month: overview.min().format_month_year(),
        last_month: overview.max().format_month_year(),
        layout: Layout {
            plot_width: config.plot_width(),
            focus_plot_height: config.focus_plot_height(),
            context_plot_height: config.context_plot_height(),
        },
        context: chart.context_frame(),
    };

    let mut result = CommandResult::ok(serde_json::to_value(data)?, chart.dataset().len());
    if overview.is_degenerate() {
        result = result.with_warning("dataset spans a single month; every brush is empty");
    }
    Ok(result)
}
