use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dashboard_data::config;
use dashboard_data::db::{self, DashboardStore};
use dashboard_data::format::{format_currency, format_date_to_local};
use dashboard_data::query::pagination::{PageItem, generate_pagination};
use dashboard_data::seed::Seeder;
use dashboard_data::QueryService;

#[derive(Parser, Debug)]
#[command(name = "dashboard")]
#[command(about = "Query and seed the invoices dashboard databases")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Populate the databases with placeholder data
    Seed {
        /// Also create and fill the legacy SQL tables
        #[arg(long)]
        legacy: bool,
    },
    /// Monthly revenue
    Revenue,
    /// The five most recent invoices
    Latest,
    /// Summary card totals
    Cards,
    /// Filtered, paginated invoices
    Invoices {
        #[arg(long, short, default_value = "")]
        query: String,
        #[arg(long, short, default_value_t = 1)]
        page: u32,
    },
    /// Number of pages for a filter
    InvoicePages {
        #[arg(long, short, default_value = "")]
        query: String,
    },
    /// Invoice edit form data (legacy SQL)
    Invoice { id: String },
    /// Customer table with invoice totals (legacy SQL)
    Customers {
        #[arg(long, short, default_value = "")]
        query: String,
    },
    /// Customer ids and names (legacy SQL)
    CustomerNames,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = config::init()?;

    let database = db::Database::connect(&config).await?;
    let service = QueryService::new(database.store()).with_legacy(database.legacy());

    let result = run(cli.command, &service).await;

    drop(service);
    database.close().await;

    result
}

async fn run<S: DashboardStore>(command: Command, service: &QueryService<S>) -> Result<()> {
    match command {
        Command::Seed { legacy } => {
            let seeder = Seeder::default();
            let report = seeder.seed(service.store()).await?;
            println!(
                "Seeded {} invoices, {} customers, {} revenue rows",
                report.invoices, report.customers, report.revenue
            );

            if legacy {
                let Some(legacy_db) = service.legacy_database() else {
                    anyhow::bail!("POSTGRES_URL is not set; cannot seed legacy tables");
                };
                let report = seeder.seed_legacy(legacy_db).await?;
                println!(
                    "Legacy tables: {} invoices, {} customers, {} revenue rows inserted",
                    report.invoices, report.customers, report.revenue
                );
            }
        }
        Command::Revenue => {
            for row in service.fetch_revenue().await? {
                println!("{:<4} {:>8}", row.month, row.revenue);
            }
        }
        Command::Latest => {
            for invoice in service.fetch_latest_invoices().await? {
                println!("{:<24} {:<28} {:>12}", invoice.name, invoice.email, invoice.amount);
            }
        }
        Command::Cards => {
            let cards = service.fetch_card_data().await?;
            println!("Collected:        {}", cards.formatted_paid());
            println!("Pending:          {}", cards.formatted_pending());
            println!("Total invoices:   {}", cards.number_of_invoices);
            println!("Total customers:  {}", cards.number_of_customers);
        }
        Command::Invoices { query, page } => {
            let result = service.fetch_filtered_invoices(&query, page).await?;
            for invoice in &result.invoices {
                println!(
                    "{:<24} {:<28} {:>12} {:<14} {}",
                    invoice.customer.name,
                    invoice.customer.email,
                    format_currency(invoice.amount),
                    format_date_to_local(&invoice.date),
                    invoice.status
                );
            }
            println!("{}", render_pagination(page.max(1), result.total_pages));
        }
        Command::InvoicePages { query } => {
            println!("{}", service.fetch_invoices_pages(&query).await?);
        }
        Command::Invoice { id } => match service.fetch_invoice_by_id(&id).await? {
            Some(form) => println!(
                "{} customer={} amount={:.2} status={}",
                form.id, form.customer_id, form.amount, form.status
            ),
            None => println!("Invoice {id} not found"),
        },
        Command::Customers { query } => {
            for row in service.fetch_filtered_customers(&query).await? {
                println!(
                    "{:<24} {:<28} {:>4} {:>12} {:>12}",
                    row.name, row.email, row.total_invoices, row.total_pending, row.total_paid
                );
            }
        }
        Command::CustomerNames => {
            for customer in service.fetch_customers().await? {
                println!("{} {}", customer.id, customer.name);
            }
        }
    }

    Ok(())
}

fn render_pagination(current: u32, total: u32) -> String {
    generate_pagination(current, total)
        .into_iter()
        .map(|item| match item {
            PageItem::Page(n) if n == current => format!("[{n}]"),
            PageItem::Page(n) => n.to_string(),
            PageItem::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
