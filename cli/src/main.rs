//! Command-line front end for the hero API.
//!
//! Runs one `HeroService` operation, prints its result, then prints the
//! message log the service recorded along the way.

use anyhow::Context;
use clap::{Parser, Subcommand};
use hero_core::{Hero, HeroClient, HeroService, MessageService, NewHero, ReqwestTransport};

/// Number of heroes shown by `top`.
const TOP_HEROES: usize = 4;

#[derive(Parser, Debug)]
#[command(name = "hero-cli", about = "Manage heroes over the hero API", version)]
struct Cli {
    /// Base URL of the hero API.
    #[arg(long, env = "HERO_API_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every hero.
    List,
    /// Show the first few heroes.
    Top,
    /// Show one hero.
    Get { id: u32 },
    /// Create a hero; the server picks its id.
    Add { name: String },
    /// Rename a hero.
    Update { id: u32, name: String },
    /// Delete a hero.
    Delete { id: u32 },
    /// Find heroes whose name contains TERM.
    Search { term: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    hero_core::logger::try_init().context("failed to set up logger")?;
    let cli = Cli::parse();

    let service = HeroService::new(
        HeroClient::new(&cli.base_url),
        ReqwestTransport::new(),
        MessageService::new(),
    );

    match cli.command {
        Command::List => print_heroes(&service.list_heroes().await),
        Command::Top => {
            let heroes = service.list_heroes().await;
            print_heroes(&heroes[..heroes.len().min(TOP_HEROES)]);
        }
        Command::Get { id } => match service.get_hero(id).await {
            Some(hero) => print_hero(&hero),
            None => println!("no hero with id {id}"),
        },
        Command::Add { name } => {
            let name = name.trim();
            if name.is_empty() {
                anyhow::bail!("hero name must not be blank");
            }
            if let Some(hero) = service.add_hero(&NewHero::new(name)).await {
                print_hero(&hero);
            }
        }
        Command::Update { id, name } => {
            let hero = Hero { id, name };
            if service.update_hero(&hero).await.is_some() {
                print_hero(&hero);
            }
        }
        Command::Delete { id } => {
            service.delete_hero(id).await;
        }
        Command::Search { term } => print_heroes(&service.search_heroes(&term).await),
    }

    println!();
    println!("Messages");
    for message in service.sink().messages() {
        println!("  {message}");
    }
    Ok(())
}

fn print_hero(hero: &Hero) {
    println!("{:>4}  {}", hero.id, hero.name);
}

fn print_heroes(heroes: &[Hero]) {
    if heroes.is_empty() {
        println!("no heroes");
    }
    for hero in heroes {
        print_hero(hero);
    }
}
