use faultline_config::View;
use faultline_core::Fault;
use serde::Serialize;

/// Render one fault in the requested view.
pub fn render(fault: &Fault, view: View, pretty: bool) -> anyhow::Result<String> {
    match view {
        View::Render => Ok(fault.render()),
        View::Public => to_json(&fault.public(), pretty),
        View::Diagnostic => to_json(&fault.diagnostic(), pretty),
        View::Full => to_json(&fault.record(), pretty),
    }
}

/// Render every fault; renderings are separated by a blank line, JSON by newlines.
pub fn render_all(faults: &[Fault], view: View, pretty: bool) -> anyhow::Result<String> {
    let separator = if view == View::Render { "\n\n" } else { "\n" };
    let rendered = faults
        .iter()
        .map(|fault| render(fault, view, pretty))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(rendered.join(separator))
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}
