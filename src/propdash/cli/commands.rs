//! # CLI Layer
//!
//! This module is **one possible UI client** for propdash; it is not the
//! application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Uses `std::process::exit`
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Build the `Dashboard` facade over the seeded store
//! 3. **API Dispatch**: Call the appropriate facade method
//! 4. **Output Formatting**: Convert results into terminal output
//! 5. **Error Handling**: Convert errors to user-facing messages and exit codes
//!
//! CLI tests do **not** test business logic; that is the command layer's job.

use super::print::{
    print_contacts, print_dashboard, print_messages, print_notifications, print_payments,
    print_properties_grid, print_properties_table,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use propdash::api::{BulkAction, Dashboard};
use propdash::config::AppConfig;
use propdash::error::{PropdashError, Result};
use propdash::filters::PropertyFilters;
use propdash::fixtures;
use propdash::model::{ChartPeriod, PropertyTag};
use propdash::state::ViewMode;
use propdash::store::MockStore;
use propdash::validation::PropertyForm;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_DIR: &str = ".propdash";

struct AppContext {
    dash: Dashboard<MockStore>,
    config: AppConfig,
}

fn parse_arg<T: FromStr<Err = String>>(value: &str) -> Result<T> {
    value.parse().map_err(PropdashError::InvalidArgument)
}

fn parse_tags(tokens: &[String]) -> Result<Vec<PropertyTag>> {
    tokens.iter().map(|t| parse_arg(t)).collect()
}

fn init_context() -> Result<AppContext> {
    let config = AppConfig::load(Path::new(CONFIG_DIR))?;
    let mut dash = Dashboard::new(MockStore::seeded());
    if config.default_view == ViewMode::Grid {
        dash.toggle_view();
    }
    Ok(AppContext { dash, config })
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        None | Some(Commands::Dashboard { period: None }) => {
            handle_dashboard(&ctx, ctx.config.chart_period)
        }
        Some(Commands::Dashboard {
            period: Some(period),
        }) => {
            let period: ChartPeriod = parse_arg(&period)?;
            handle_dashboard(&ctx, period)
        }
        Some(Commands::List {
            search,
            status,
            city,
            units,
            vacancy,
            price,
            tags,
            grid,
        }) => {
            let mut filters = PropertyFilters {
                search: search.unwrap_or_default(),
                city,
                tags: parse_tags(&tags)?,
                ..Default::default()
            };
            if let Some(status) = status {
                filters.status = parse_arg(&status)?;
            }
            if let Some(units) = units {
                filters.unit_count = parse_arg(&units)?;
            }
            if let Some(vacancy) = vacancy {
                filters.vacancy = parse_arg(&vacancy)?;
            }
            if let Some(price) = price {
                filters.price_range = parse_arg(&price)?;
            }
            handle_list(&mut ctx, filters, grid)
        }
        Some(Commands::Add {
            name,
            address,
            city,
            total_units,
            occupied_units,
            revenue,
            manager,
            owner,
            tags,
        }) => {
            let form = PropertyForm {
                name,
                address,
                city,
                total_units,
                occupied_units,
                monthly_revenue: revenue,
                manager_id: Some(manager),
                owner_id: Some(owner),
                tags: parse_tags(&tags)?,
                ..Default::default()
            };
            let result = ctx.dash.add_property(&form)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Edit {
            id,
            name,
            address,
            city,
            total_units,
            occupied_units,
            revenue,
            manager,
            owner,
        }) => {
            let mut form = ctx.dash.edit_form(id)?;
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(address) = address {
                form.address = address;
            }
            if let Some(city) = city {
                form.city = city;
            }
            if let Some(total_units) = total_units {
                form.total_units = total_units;
            }
            if let Some(occupied_units) = occupied_units {
                form.occupied_units = occupied_units;
            }
            if let Some(revenue) = revenue {
                form.monthly_revenue = revenue;
            }
            if let Some(manager) = manager {
                form.manager_id = Some(manager);
            }
            if let Some(owner) = owner {
                form.owner_id = Some(owner);
            }
            let result = ctx.dash.edit_property(id, &form)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Archive { ids }) => handle_bulk(&mut ctx, ids, BulkAction::Archive),
        Some(Commands::Remind { ids }) => handle_bulk(&mut ctx, ids, BulkAction::SendReminders),
        Some(Commands::Export { ids, output }) => handle_export(&mut ctx, ids, output),
        Some(Commands::Payments) => {
            print_payments(&ctx.dash.payments()?);
            Ok(())
        }
        Some(Commands::Pay { id }) => {
            let result = ctx.dash.mark_payment_paid(id)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Receipt { id }) => {
            println!("{}", ctx.dash.receipt(id)?);
            Ok(())
        }
        Some(Commands::Contacts) => {
            print_contacts(&ctx.dash.contacts()?);
            Ok(())
        }
        Some(Commands::Notifications { read_all }) => {
            if read_all {
                ctx.dash.mark_all_notifications_read()?;
            }
            print_notifications(&ctx.dash.notifications()?);
            Ok(())
        }
        Some(Commands::Cities) => {
            for city in fixtures::CITIES.iter() {
                println!("  {}", city);
            }
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn handle_config(
    ctx: &mut AppContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let Some(key) = key else {
        println!("view = {}", ctx.config.default_view);
        println!("period = {}", ctx.config.chart_period);
        match &ctx.config.export_dir {
            Some(dir) => println!("export-dir = {}", dir.display()),
            None => println!("export-dir = (unset)"),
        }
        return Ok(());
    };

    let Some(value) = value else {
        match key.as_str() {
            "view" => println!("{}", ctx.config.default_view),
            "period" => println!("{}", ctx.config.chart_period),
            "export-dir" => match &ctx.config.export_dir {
                Some(dir) => println!("{}", dir.display()),
                None => println!("(unset)"),
            },
            other => {
                return Err(PropdashError::InvalidArgument(format!(
                    "unknown config key: {}",
                    other
                )))
            }
        }
        return Ok(());
    };

    match key.as_str() {
        "view" => ctx.config.default_view = parse_arg(&value)?,
        "period" => ctx.config.chart_period = parse_arg(&value)?,
        "export-dir" => ctx.config.export_dir = Some(PathBuf::from(value)),
        other => {
            return Err(PropdashError::InvalidArgument(format!(
                "unknown config key: {}",
                other
            )))
        }
    }
    ctx.config.save(Path::new(CONFIG_DIR))?;
    println!("{} set", key);
    Ok(())
}

fn handle_dashboard(ctx: &AppContext, period: ChartPeriod) -> Result<()> {
    let data = ctx.dash.overview(period)?;
    print_dashboard(&data);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, filters: PropertyFilters, grid: bool) -> Result<()> {
    ctx.dash.set_filters(filters);
    if grid && ctx.dash.view_mode() == ViewMode::Table {
        ctx.dash.toggle_view();
    }
    let properties = ctx.dash.visible_properties()?;
    match ctx.dash.view_mode() {
        ViewMode::Grid => print_properties_grid(&properties),
        ViewMode::Table => {
            print_properties_table(&properties, &ctx.dash.state().selection.ids())
        }
    }
    Ok(())
}

fn handle_bulk(ctx: &mut AppContext, ids: Vec<u64>, action: BulkAction) -> Result<()> {
    ctx.dash.select_properties(ids);
    let outcome = ctx.dash.dispatch_bulk(action)?;
    print_messages(&outcome.messages);
    Ok(())
}

fn handle_export(ctx: &mut AppContext, ids: Vec<u64>, output: Option<PathBuf>) -> Result<()> {
    if ids.is_empty() {
        ctx.dash.select_all_visible()?;
    } else {
        ctx.dash.select_properties(ids);
    }
    let path = output.unwrap_or_else(|| ctx.config.export_path("properties.csv"));
    let outcome = ctx.dash.dispatch_bulk(BulkAction::ExportCsv { path })?;
    print_messages(&outcome.messages);
    Ok(())
}
