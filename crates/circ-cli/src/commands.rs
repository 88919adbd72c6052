use colored::Colorize;

use circ_ledger::{ChainAuditor, Ledger, LedgerEntry};
use circ_server::{CircServer, ServerConfig};
use circ_types::CheckoutEvent;

use crate::cli::{Cli, Command, DemoArgs, ServeArgs};

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Demo(args) => cmd_demo(args),
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    CircServer::new(config).serve().await?;
    Ok(())
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let mut ledger = Ledger::create_genesis();
    let borrowers = ["alice", "bob", "carol"];

    for i in 0..args.checkouts {
        let event = CheckoutEvent::new(
            format!("B{}", i + 1),
            borrowers[i % borrowers.len()],
            "2024-01-01",
        );
        ledger.append(event)?;
    }

    for entry in ledger.entries() {
        print_entry(entry);
    }

    let report = ChainAuditor::audit(ledger.entries());
    if report.is_valid() {
        println!(
            "{} chain valid: {} entries",
            "✓".green().bold(),
            report.entry_count
        );
        Ok(())
    } else {
        for violation in &report.violations {
            println!("{} {}", "✗".red().bold(), violation);
        }
        anyhow::bail!("chain audit failed with {} violation(s)", report.violations.len());
    }
}

fn print_entry(entry: &LedgerEntry) {
    let what = if entry.is_genesis() {
        "genesis".dimmed().to_string()
    } else {
        format!(
            "{} → {}",
            entry.payload.item_id.bold(),
            entry.payload.borrower.cyan()
        )
    };
    println!(
        "{}  {}  {}",
        format!("#{}", entry.position).yellow(),
        entry.content_hash.short_hex().dimmed(),
        what
    );
}
