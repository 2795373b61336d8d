use super::assemble_step;
use crate::error::ParseError;
use crate::segment::SegmentRegistry;
use crate::snapshot::Snapshot;
use crate::types::Codelab;
use tracing::{debug, info};

/// Assemble metadata and every step of a snapshot, in order
pub fn assemble_codelab(snapshot: Snapshot, registry: &SegmentRegistry) -> Result<Codelab, ParseError> {
    let exported_at = snapshot.exported_at();
    let codelab = snapshot.codelab;

    let meta = codelab
        .metadata
        .parse(&codelab.steps, &snapshot.title, &snapshot.author)?;
    debug!(id = %meta.id, title = %meta.title, tags = ?meta.tags, "parsed metadata");

    let steps = codelab
        .steps
        .into_iter()
        .map(|step| assemble_step(step, registry))
        .collect::<Result<Vec<_>, _>>()?;

    info!(title = %meta.title, steps = steps.len(), "assembled codelab");

    Ok(Codelab {
        meta,
        steps,
        exported_at,
    })
}
