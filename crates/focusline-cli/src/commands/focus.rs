use focusline_core::{BrushGesture, ChartContext, Domain, Frame, Selection, UtcDateTime};
use serde::Serialize;

use crate::cli::FocusArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct FocusResponseData {
    selection: Selection<UtcDateTime>,
    focus: Domain<UtcDateTime>,
    zoomed: bool,
    frame: Frame,
}

pub fn run(args: &FocusArgs, chart: &mut ChartContext) -> Result<CommandResult, CliError> {
    let gesture = match (&args.from, &args.to) {
        (Some(from), Some(to)) => BrushGesture::Select {
            start: UtcDateTime::parse_month_year(from)?,
            end: UtcDateTime::parse_month_year(to)?,
        },
        (None, None) => BrushGesture::Clear,
        _ => {
            return Err(CliError::Command(
                "--from and --to must be given together".to_owned(),
            ))
        }
    };

    let update = chart.handle(gesture)?;
    let mut warnings = Vec::new();
    if let BrushGesture::Select { start, end } = gesture {
        let overview = chart.overview();
        if !overview.contains(start) || !overview.contains(end) {
            warnings.push(format!(
                "selection clamped to the overview {}..{}",
                overview.min().format_month_year(),
                overview.max().format_month_year()
            ));
        }
        if update.selection.is_empty() {
            warnings.push("selection has zero width; showing the full overview".to_owned());
        }
    }

    let data = FocusResponseData {
        selection: update.selection,
        focus: update.focus,
        zoomed: !update.selection.is_empty(),
        frame: chart.focus_frame(),
    };

    let mut result = CommandResult::ok(serde_json::to_value(data)?, chart.dataset().len());
    for warning in warnings {
        result = result.with_warning(warning);
    }
    Ok(result)
}
