use chrono::{DateTime, Utc};
use colored::Colorize;
use propdash::commands::dashboard::DashboardData;
use propdash::commands::{CmdMessage, MessageLevel};
use propdash::format::{format_currency, format_date, format_percent};
use propdash::model::{
    Contact, ContactRole, KpiMetric, Notification, Payment, PaymentStatus, Property,
    PropertyStatus,
};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const NAME_WIDTH: usize = 26;
const CHART_WIDTH: usize = 40;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn status_colored(status: PropertyStatus) -> colored::ColoredString {
    match status {
        PropertyStatus::Active => status.label().green(),
        PropertyStatus::Vacant => status.label().yellow(),
        PropertyStatus::Archived => status.label().dimmed(),
    }
}

pub(super) fn print_properties_table(properties: &[Property], selected: &[u64]) {
    if properties.is_empty() {
        println!("No properties found.");
        return;
    }

    println!(
        "{}",
        format!(
            "    {:<4} {:<width$} {:<14} {:<9} {:>9} {:>10}  {}",
            "ID",
            "Name",
            "City",
            "Status",
            "Units",
            "Revenue",
            "Last payment",
            width = NAME_WIDTH
        )
        .dimmed()
    );

    for property in properties {
        let marker = if selected.contains(&property.id) {
            "  * "
        } else {
            "    "
        };
        let units = format!("{}/{}", property.units.occupied(), property.units.total());
        let last_payment = property
            .last_payment_date
            .map(format_date)
            .unwrap_or_else(|| "-".to_string());
        let name = truncate_to_width(&property.name, NAME_WIDTH);
        let name_padding = NAME_WIDTH.saturating_sub(name.width());

        println!(
            "{}{:<4} {}{} {:<14} {:<9} {:>9} {:>10}  {}",
            marker,
            property.id,
            name,
            " ".repeat(name_padding),
            truncate_to_width(&property.city, 14),
            status_colored(property.status),
            units,
            format_currency(property.monthly_revenue),
            last_payment.dimmed()
        );
    }
}

pub(super) fn print_properties_grid(properties: &[Property]) {
    if properties.is_empty() {
        println!("No properties found.");
        return;
    }

    for (i, property) in properties.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} {} [{}]",
            format!("#{}", property.id).yellow(),
            property.name.bold(),
            status_colored(property.status)
        );
        println!("  {}", property.address.dimmed());
        println!(
            "  {} units, {} occupied, {} vacant",
            property.units.total(),
            property.units.occupied(),
            property.units.vacant()
        );
        println!(
            "  {} / month   manager: {}   owner: {}",
            format_currency(property.monthly_revenue),
            property.manager.name,
            property.owner.name
        );
        if !property.tags.is_empty() {
            let tags = property
                .tags
                .iter()
                .map(|t| t.label())
                .collect::<Vec<_>>()
                .join(", ");
            println!("  {}", tags.cyan());
        }
    }
}

fn print_kpi(name: &str, rendered_value: String, metric: &KpiMetric) {
    let delta = format_percent(metric.delta);
    let delta_colored = if metric.is_positive {
        delta.green()
    } else {
        delta.red()
    };
    println!("  {:<22} {:>12}  {}", name, rendered_value, delta_colored);
}

pub(super) fn print_dashboard(data: &DashboardData) {
    println!("{}", "Overview".bold());
    print_kpi(
        "Total revenue",
        format_currency(data.kpis.total_revenue.value as u64),
        &data.kpis.total_revenue,
    );
    print_kpi(
        "Invoices",
        format!("{}", data.kpis.total_invoices.value as u64),
        &data.kpis.total_invoices,
    );
    print_kpi(
        "Tenants",
        format!("{}", data.kpis.total_tenants.value as u64),
        &data.kpis.total_tenants,
    );
    print_kpi(
        "On-time payments",
        format!("{:.1}%", data.kpis.on_time_payment_rate.value),
        &data.kpis.on_time_payment_rate,
    );

    println!();
    println!("{}", "Revenue".bold());
    let max = data.revenue.iter().map(|p| p.revenue).max().unwrap_or(0);
    for point in &data.revenue {
        let bar_len = if max == 0 {
            0
        } else {
            (point.revenue as usize * CHART_WIDTH) / max as usize
        };
        println!(
            "  {:<8} {} {}",
            point.label,
            "#".repeat(bar_len).blue(),
            format_currency(point.revenue).dimmed()
        );
    }

    println!();
    println!("{}", "Recent activity".bold());
    for activity in &data.activities {
        let amount = activity
            .amount
            .map(|a| format!(" ({})", format_currency(a)))
            .unwrap_or_default();
        let line = format!("{}{}", activity.description, amount);
        let time = format_time_ago(activity.timestamp);
        let padding = LINE_WIDTH
            .saturating_sub(2 + line.width() + time.width());
        println!("  {}{}{}", line, " ".repeat(padding), time.dimmed());
    }

    if data.unread_notifications > 0 {
        println!();
        println!(
            "{}",
            format!("{} unread notifications", data.unread_notifications).yellow()
        );
    }
}

pub(super) fn print_payments(payments: &[Payment]) {
    if payments.is_empty() {
        println!("No payments found.");
        return;
    }

    for payment in payments {
        let status = match payment.status {
            PaymentStatus::Paid => payment.status.label().green(),
            PaymentStatus::Overdue => payment.status.label().red(),
            PaymentStatus::Pending => payment.status.label().yellow(),
        };
        println!(
            "  {:<3} {:<14} {:<18} {:>8} {:<13} {}",
            payment.id,
            payment.invoice_id,
            payment.tenant.name,
            format_currency(payment.amount),
            format_date(payment.due_date).dimmed(),
            status
        );
    }
}

pub(super) fn print_contacts(contacts: &[Contact]) {
    for contact in contacts {
        let role = match contact.role {
            ContactRole::Manager => "manager".cyan(),
            ContactRole::Owner => "owner".magenta(),
        };
        println!("  {:<3} {:<20} {}", contact.id, contact.name, role);
    }
}

pub(super) fn print_notifications(notifications: &[Notification]) {
    if notifications.is_empty() {
        println!("No notifications.");
        return;
    }

    for n in notifications {
        let marker = if n.read { " " } else { "*" };
        println!(
            "{} {} {}",
            marker.yellow(),
            n.title.bold(),
            format_time_ago(n.timestamp).dimmed()
        );
        println!("    {}", n.message);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
