use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PropdashError, Result};
use crate::model::PropertyId;
use crate::store::PropertyStore;

/// Sends payment reminders for a batch of properties.
pub fn run<S: PropertyStore>(store: &mut S, ids: &[PropertyId]) -> Result<CmdResult> {
    if ids.is_empty() {
        return Err(PropdashError::EmptySelection);
    }

    let sent = store.send_reminders(ids)?;
    let affected: Vec<_> = ids
        .iter()
        .filter_map(|id| store.get_property(*id).ok())
        .collect();

    let mut result = CmdResult::default().with_affected_properties(affected);
    result.add_message(CmdMessage::success(format!(
        "Sent {} reminder{}",
        sent,
        if sent == 1 { "" } else { "s" }
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockStore;

    #[test]
    fn sends_one_reminder_per_existing_property() {
        let mut store = MockStore::seeded();
        let result = run(&mut store, &[2, 3]).unwrap();
        assert_eq!(result.affected_properties.len(), 2);
        assert_eq!(result.messages[0].content, "Sent 2 reminders");
        assert_eq!(store.reminders_sent(), &[2, 3]);
    }

    #[test]
    fn empty_batch_is_rejected_locally() {
        let mut store = MockStore::seeded();
        assert!(matches!(
            run(&mut store, &[]),
            Err(PropdashError::EmptySelection)
        ));
        assert!(store.reminders_sent().is_empty());
    }

    #[test]
    fn singular_message_for_one_reminder() {
        let mut store = MockStore::seeded();
        let result = run(&mut store, &[1]).unwrap();
        assert_eq!(result.messages[0].content, "Sent 1 reminder");
    }
}
