use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::format::{format_currency, format_date};
use crate::model::{Payment, PaymentId, PaymentStatus};
use crate::store::PropertyStore;
use chrono::Duration;

/// Marks a payment as paid.
pub fn pay<S: PropertyStore>(store: &mut S, id: PaymentId) -> Result<CmdResult> {
    let payment = store.mark_payment_paid(id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Payment {} marked as paid",
        payment.invoice_id
    )));
    result.listed_payments.push(payment);
    Ok(result)
}

/// Generates the plain-text receipt for a payment.
pub fn receipt<S: PropertyStore>(store: &S, id: PaymentId) -> Result<String> {
    Ok(render_receipt(&store.get_payment(id)?))
}

/// The mock ledger has no contact records for tenants, so the receipt
/// derives a deterministic address the way the billing templates do.
fn tenant_email(name: &str) -> String {
    let local = name
        .split_whitespace()
        .map(|part| part.to_lowercase())
        .collect::<Vec<_>>()
        .join(".");
    format!("{}@email.com", local)
}

pub fn render_receipt(payment: &Payment) -> String {
    let mut lines = vec![
        "PAYMENT RECEIPT".to_string(),
        "=".repeat(32),
        String::new(),
        format!("Invoice:  {}", payment.invoice_id),
        format!("Tenant:   {}", payment.tenant.name),
        format!("Email:    {}", tenant_email(&payment.tenant.name)),
        format!("Amount:   {}", format_currency(payment.amount)),
        format!("Due date: {}", format_date(payment.due_date)),
        format!("Status:   {}", payment.status.label()),
    ];
    if payment.status == PaymentStatus::Paid {
        // The mock ledger records settlement two days ahead of the due date.
        let paid_on = payment.due_date - Duration::days(2);
        lines.push(format!("Paid on:  {}", format_date(paid_on)));
        lines.push(String::new());
        lines.push("Thank you for your payment!".to_string());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockStore;

    #[test]
    fn pay_settles_the_invoice() {
        let mut store = MockStore::seeded();
        let result = pay(&mut store, 2).unwrap();
        assert_eq!(result.listed_payments[0].status, PaymentStatus::Paid);
        assert_eq!(
            result.messages[0].content,
            "Payment INV-2024-002 marked as paid"
        );
    }

    #[test]
    fn receipt_for_a_paid_invoice() {
        let store = MockStore::seeded();
        let text = receipt(&store, 1).unwrap();
        assert!(text.starts_with("PAYMENT RECEIPT"));
        assert!(text.contains("Invoice:  INV-2024-001"));
        assert!(text.contains("Tenant:   John Smith"));
        assert!(text.contains("Email:    john.smith@email.com"));
        assert!(text.contains("Amount:   $1,200"));
        assert!(text.contains("Due date: Jan 20, 2024"));
        assert!(text.contains("Paid on:  Jan 18, 2024"));
        assert!(text.ends_with("Thank you for your payment!"));
    }

    #[test]
    fn receipt_for_an_unsettled_invoice_has_no_paid_line() {
        let store = MockStore::seeded();
        let text = receipt(&store, 4).unwrap();
        assert!(text.contains("Status:   Pending"));
        assert!(!text.contains("Paid on:"));
        assert!(!text.contains("Thank you"));
    }
}
