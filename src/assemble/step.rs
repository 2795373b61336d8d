use crate::environment::aggregate_environments;
use crate::error::ParseError;
use crate::segment::SegmentRegistry;
use crate::snapshot::RawStep;
use crate::types::{ListNode, Step};
use tracing::debug;

/// Decode a step's segments and build its content tree
pub fn assemble_step(step: RawStep, registry: &SegmentRegistry) -> Result<Step, ParseError> {
    let segments = registry.decode_all(&step.segments)?;

    let mut content = ListNode::default();
    for segment in &segments {
        content.append(segment.to_nodes());
    }

    let tags = aggregate_environments(segments.iter().map(|s| s.environments()));
    let duration = step.duration()?;

    debug!(
        title = %step.title,
        segments = segments.len(),
        tags = tags.len(),
        nodes = content.len(),
        minutes = duration.as_secs() / 60,
        "assembled step"
    );

    Ok(Step {
        title: step.title,
        tags,
        duration,
        content,
    })
}
