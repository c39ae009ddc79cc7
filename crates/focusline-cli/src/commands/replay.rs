use focusline_core::{ChartContext, Domain, FocusUpdate, RecordingObserver, Selection, UtcDateTime};
use serde::Serialize;

use crate::cli::ReplayArgs;
use crate::error::CliError;

use super::CommandResult;

/// Focus update produced by one replayed gesture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayStep {
    /// 1-based position of the gesture on the command line.
    pub step: usize,
    pub gesture: String,
    #[serde(flatten)]
    pub update: FocusUpdate,
}

#[derive(Debug, Serialize)]
struct ReplayResponseData<'a> {
    initial_focus: Domain<UtcDateTime>,
    steps: &'a [ReplayStep],
    /// Initial focus followed by the focus after every gesture.
    focus_sequence: Vec<Domain<UtcDateTime>>,
    final_selection: Selection<UtcDateTime>,
}

pub fn run(args: &ReplayArgs, chart: &mut ChartContext) -> Result<CommandResult, CliError> {
    let recorder = RecordingObserver::new();
    let log = recorder.log();
    chart.subscribe(recorder);

    let initial_focus = chart.focus();
    let mut steps = Vec::with_capacity(args.gestures.len());
    for (index, gesture) in args.gestures.iter().enumerate() {
        let update = chart.handle(*gesture)?;
        steps.push(ReplayStep {
            step: index + 1,
            gesture: gesture.to_string(),
            update,
        });
    }

    let mut focus_sequence = vec![initial_focus];
    focus_sequence.extend(log.snapshot());

    let data = ReplayResponseData {
        initial_focus,
        steps: &steps,
        focus_sequence,
        final_selection: *chart.selection(),
    };

    Ok(CommandResult::ok(serde_json::to_value(data)?, chart.dataset().len()).with_updates(steps))
}
