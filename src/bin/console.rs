use std::io::{self, Write};
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cinematch_api::{
    catalog::Catalog,
    config::Config,
    services::{
        providers::{tmdb::TmdbProvider, PosterProvider},
        recommender::{self, RecommendationModel},
    },
};

/// Interactive console shell over the recommendation model
///
/// Loads the same catalog and configuration as the HTTP service, builds the
/// model once, then recommends for a title given on the command line or
/// picked interactively.
#[derive(Debug, Parser)]
#[command(name = "cinematch-console")]
struct Args {
    /// Title to recommend for; prompts interactively when omitted
    #[arg(long)]
    movie: Option<String>,

    /// Print the catalog titles and exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let catalog = Catalog::load(&config.catalog_path)?;
    let model = RecommendationModel::build(catalog, config.max_features);

    if args.list {
        for title in model.catalog().titles() {
            println!("{}", title);
        }
        return Ok(());
    }

    let title = match args.movie {
        Some(title) => title,
        None => prompt_for_title(&model)?,
    };

    let posters: Arc<dyn PosterProvider> = Arc::new(TmdbProvider::new(
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
        config.image_base_url.clone(),
    ));

    let recommendations = recommender::recommend(&model, posters.as_ref(), &title).await?;

    println!("\nBecause you watched {}:\n", title);
    for (i, rec) in recommendations.iter().enumerate() {
        println!("{:>2}. {}", i + 1, rec.title);
        println!("    {}", rec.poster);
    }

    Ok(())
}

/// Shows the numbered title list and reads a selection from stdin. Accepts
/// either a row number or an exact title.
fn prompt_for_title(model: &RecommendationModel) -> anyhow::Result<String> {
    let titles = model.catalog().titles();

    for (i, title) in titles.iter().enumerate() {
        println!("{:>4}. {}", i + 1, title);
    }

    print!("\nType a number or a movie title: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let input = line.trim();

    if let Ok(number) = input.parse::<usize>() {
        if number >= 1 && number <= titles.len() {
            return Ok(titles[number - 1].to_string());
        }
        anyhow::bail!("Selection {} is out of range", number);
    }

    Ok(input.to_string())
}
