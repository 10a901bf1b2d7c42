//! JSON report printed by `detect`

use bandcrop::detect::{AcceptancePolicy, BlockReport, Rejection};
use serde_json::{Value, json};

/// Policy verdict, when the policy was requested
pub type Verdict = Option<Result<(), Rejection>>;

/// Evaluate the policy against a report, if requested.
pub fn verdict(report: &BlockReport, policy: Option<&AcceptancePolicy>, frame_height: u32) -> Verdict {
    let policy = policy?;
    Some(match &report.descriptor {
        Some(d) => policy.evaluate(d, frame_height),
        None => Ok(()),
    })
}

/// Whether the process should report failure for this outcome.
pub fn is_rejected(report: &BlockReport, verdict: &Verdict) -> bool {
    match verdict {
        None => false,
        Some(Err(_)) => true,
        Some(Ok(())) => !report.is_found(),
    }
}

/// Build the JSON object for one detection.
pub fn to_json(report: &BlockReport, verdict: &Verdict) -> Value {
    let block = report.block.map(|b| {
        json!({
            "minX": b.min_x,
            "maxX": b.max_x,
            "minY": b.min_y,
            "maxY": b.max_y,
            "pixelCount": b.pixel_count,
        })
    });

    let (accepted, rejection) = match verdict {
        None => (Value::Null, Value::Null),
        Some(Ok(())) => (json!(report.is_found()), Value::Null),
        Some(Err(r)) => (json!(false), json!(r.to_string())),
    };

    json!({
        "found": report.is_found(),
        "startY": report.descriptor.map(|d| d.start_y),
        "height": report.descriptor.map(|d| d.height),
        "block": block,
        "candidates": report.candidates,
        "discarded": report.discarded,
        "accepted": accepted,
        "rejection": rejection,
    })
}
