// portico - multi-tenant content backend admin tool
//
// This is the operator entry point. Parses CLI args and dispatches to handlers.

use portico_lib::{
    core::Searcher,
    tenant::TenantRecord,
    AppContext, CmsError, Config, Result,
};
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let command = &args[1];

    let result = match command.as_str() {
        "tenants" => handle_tenants().await,
        "register" => handle_register(&args[2..]).await,
        "deactivate" => handle_deactivate(&args[2..]).await,
        "status" => handle_status(&args[2..]).await,
        "clients" => handle_clients(&args[2..]).await,
        "client" => handle_client(&args[2..]).await,
        "search" => handle_search(&args[2..]).await,
        "version" | "-v" | "--version" => {
            println!("portico v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e.user_message());
        return Err(e);
    }

    Ok(())
}

async fn handle_tenants() -> Result<()> {
    let ctx = get_context()?;
    let tenants = ctx.resolver().tenants().await;

    if tenants.is_empty() {
        println!("No tenants registered.");
    } else {
        println!("\nRegistered tenants:");
        println!("{}", "=".repeat(60));
        for tenant in tenants {
            let marker = if tenant.active { " " } else { "(inactive)" };
            println!(
                "{:12} {:28} -> {}.db {}",
                tenant.company_code, tenant.company_name, tenant.db_name, marker
            );
        }
        println!("{}", "=".repeat(60));
    }

    Ok(())
}

async fn handle_register(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        eprintln!("Usage: portico register <code> <company-name> [db-name]");
        return Ok(());
    }

    let code = args[0].clone();
    let name = args[1].clone();
    // Default the database name to the company code
    let db_name = args.get(2).cloned().unwrap_or_else(|| code.clone());

    let ctx = get_context()?;
    let db = ctx
        .register_tenant(TenantRecord {
            company_code: code.clone(),
            company_name: name,
            db_name,
            active: true,
        })
        .await?;

    println!("Registered '{}', database at {}", code, db.path().display());

    Ok(())
}

async fn handle_deactivate(args: &[String]) -> Result<()> {
    let code = args
        .first()
        .ok_or_else(|| CmsError::Generic("Usage: portico deactivate <code>".to_string()))?;

    let ctx = get_context()?;
    ctx.resolver().deactivate(code).await?;

    println!("Deactivated '{}'. Its data stays on disk.", code);

    Ok(())
}

async fn handle_status(args: &[String]) -> Result<()> {
    let code = args
        .first()
        .ok_or_else(|| CmsError::Generic("Usage: portico status <code>".to_string()))?;

    let ctx = get_context()?;
    let db = ctx.database_for(code).await?;
    let stats = db.stats().await?;

    println!("\nStatus for '{}':", code);
    println!("{}", "=".repeat(60));
    println!("Database file:     {}", db.path().display());
    println!("Clients:           {}", stats.total_clients);
    println!("Banners:           {}", stats.total_banners);
    println!("Videos:            {}", stats.total_videos);
    println!("Flash news items:  {}", stats.total_flash_news);
    println!(
        "Pool:              {} connections ({} idle)",
        stats.pool_size, stats.idle_connections
    );
    println!(
        "Databases open:    {}",
        ctx.registry().connections_opened()
    );
    println!("{}", "=".repeat(60));

    Ok(())
}

async fn handle_clients(args: &[String]) -> Result<()> {
    let code = args
        .first()
        .ok_or_else(|| CmsError::Generic("Usage: portico clients <code>".to_string()))?;

    let ctx = get_context()?;
    let db = ctx.database_for(code).await?;
    let clients = db.list_clients(None).await?;

    if clients.is_empty() {
        println!("No clients for '{}'.", code);
    } else {
        println!("\nClients of '{}':", code);
        println!("{}", "=".repeat(60));
        for (i, client) in clients.iter().enumerate() {
            println!(
                "{:3}. {} [{}] {}",
                i + 1,
                client.name,
                client.status,
                client.phone.as_deref().unwrap_or("-")
            );
        }
        println!("{}", "=".repeat(60));
    }

    Ok(())
}

async fn handle_client(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        eprintln!("Usage: portico client <code> <id>");
        return Ok(());
    }

    let code = &args[0];
    let id: i64 = args[1]
        .parse()
        .map_err(|_| CmsError::Generic(format!("'{}' is not a numeric client id", args[1])))?;

    let ctx = get_context()?;
    let db = ctx.database_for(code).await?;

    let client = db
        .get_client(id)
        .await?
        .ok_or_else(|| CmsError::RecordNotFound(format!("Client {} of '{}'", id, code)))?;

    println!("\nClient {} of '{}':", id, code);
    println!("{}", "=".repeat(60));
    println!("Name:     {}", client.name);
    println!("Status:   {}", client.status);
    println!("Phone:    {}", client.phone.as_deref().unwrap_or("-"));
    println!("Email:    {}", client.email.as_deref().unwrap_or("-"));
    println!("Address:  {}", client.address.as_deref().unwrap_or("-"));
    println!("Since:    {}", client.created_at);
    println!("{}", "=".repeat(60));

    Ok(())
}

async fn handle_search(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        eprintln!("Usage: portico search <code> <query>");
        return Ok(());
    }

    let code = &args[0];
    let query = args[1..].join(" ");

    let ctx = get_context()?;
    let db = ctx.database_for(code).await?;
    let searcher = Searcher::new(db);

    let matches = searcher.search(&query, 20).await?;

    if matches.is_empty() {
        println!("No clients matching '{}'", query);
    } else {
        println!("\nFound {} client(s) matching '{}':", matches.len(), query);
        println!("{}", "=".repeat(60));
        for (i, m) in matches.iter().enumerate() {
            println!("{:3}. {} (score {:.0})", i + 1, m.client.name, m.score);
        }
        println!("{}", "=".repeat(60));
    }

    Ok(())
}

fn get_context() -> Result<AppContext> {
    AppContext::init(Config::default_paths()?)
}

fn print_usage() {
    println!(
        r#"portico v{} - multi-tenant content backend

USAGE:
    portico <COMMAND> [OPTIONS]

COMMANDS:
    tenants                          List registered tenants
    register <code> <name> [db]     Register a company (opens its database)
    deactivate <code>                Deactivate a company
    status <code>                    Show a tenant's database stats
    clients <code>                   List a tenant's clients
    client <code> <id>               Show one client in full
    search <code> <query>            Fuzzy-search a tenant's clients
    version                          Show version
    help                             Show this help

EXAMPLES:
    portico register acme "Acme Industries"
    portico status acme
    portico search acme rjn cable
"#,
        env!("CARGO_PKG_VERSION")
    );
}
