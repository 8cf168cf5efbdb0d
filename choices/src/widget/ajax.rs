//! Loading choices from an external source.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use crate::model::OptionSpec;

pub(crate) type AjaxSlot = Rc<RefCell<Option<Vec<OptionSpec>>>>;

/// Handed to an `ajax` fetch callback. Call [`respond`](Self::respond)
/// once the records are available, right away or later. Dropping every
/// responder without responding ends the loading state.
#[derive(Debug, Clone)]
pub struct Responder {
    slot: AjaxSlot,
}

impl Responder {
    pub(crate) fn new(slot: AjaxSlot) -> Self {
        Self { slot }
    }

    /// Deliver records. `value_key` and `label_key` name the fields read
    /// from each record; records without a usable value are skipped.
    pub fn respond(&self, records: &[Value], value_key: &str, label_key: &str) {
        let choices = records
            .iter()
            .filter_map(|record| {
                let Some(value) = record.get(value_key).and_then(field_text) else {
                    log::warn!("ajax record without `{value_key}` skipped");
                    return None;
                };
                let label = record
                    .get(label_key)
                    .and_then(field_text)
                    .unwrap_or_else(|| value.clone());
                Some(OptionSpec::new(value).label(label))
            })
            .collect();
        *self.slot.borrow_mut() = Some(choices);
    }
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Outcome of checking a pending request.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum AjaxPoll {
    Pending,
    Ready(Vec<OptionSpec>),
    /// Every responder was dropped without a response
    Abandoned,
}

pub(crate) fn poll(slot: &AjaxSlot) -> AjaxPoll {
    if let Some(choices) = slot.borrow_mut().take() {
        return AjaxPoll::Ready(choices);
    }
    if Rc::strong_count(slot) == 1 {
        AjaxPoll::Abandoned
    } else {
        AjaxPoll::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_respond_reads_named_fields() {
        let slot: AjaxSlot = Rc::default();
        let responder = Responder::new(Rc::clone(&slot));
        responder.respond(
            &[json!({"id": 7, "name": "Seven"}), json!({"name": "no id"})],
            "id",
            "name",
        );
        assert_eq!(
            poll(&slot),
            AjaxPoll::Ready(vec![OptionSpec::new("7").label("Seven")])
        );
    }

    #[test]
    fn test_dropped_responder_abandons() {
        let slot: AjaxSlot = Rc::default();
        let responder = Responder::new(Rc::clone(&slot));
        assert_eq!(poll(&slot), AjaxPoll::Pending);
        drop(responder);
        assert_eq!(poll(&slot), AjaxPoll::Abandoned);
    }
}
