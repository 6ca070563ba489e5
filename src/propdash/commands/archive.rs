use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PropdashError, Result};
use crate::model::{PropertyId, PropertyStatus};
use crate::store::PropertyStore;

/// Archives a batch of properties. An empty batch is rejected locally;
/// unknown ids are skipped by the store and do not count.
/// `affected_properties` carries only the records that actually
/// transitioned, so its length is the archived count.
pub fn run<S: PropertyStore>(store: &mut S, ids: &[PropertyId]) -> Result<CmdResult> {
    if ids.is_empty() {
        return Err(PropdashError::EmptySelection);
    }

    // Captured before the mutation: ids that exist and are not yet archived.
    let transitioning: Vec<PropertyId> = ids
        .iter()
        .copied()
        .filter(|id| {
            matches!(store.get_property(*id), Ok(p) if p.status != PropertyStatus::Archived)
        })
        .collect();

    let archived = store.archive_properties(ids)?;
    let affected: Vec<_> = transitioning
        .iter()
        .filter_map(|id| store.get_property(*id).ok())
        .collect();

    let mut result = CmdResult::default().with_affected_properties(affected);
    result.add_message(CmdMessage::success(format!(
        "Archived {} propert{}",
        archived,
        if archived == 1 { "y" } else { "ies" }
    )));
    if archived < ids.len() {
        result.add_message(CmdMessage::warning(format!(
            "{} of {} selected ids were already archived or missing",
            ids.len() - archived,
            ids.len()
        )));
    }
    Ok(result)
}
