use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use recommender::{
    GenrePreferences, Recommender, RecommenderConfig, ScoredMovie, UserRatings,
    DEFAULT_BATCH_COUNT, DEFAULT_INTERACTIVE_COUNT, DEFAULT_MIN_RATINGS,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// MovieRecs - genre-preference movie recommendations
#[derive(Parser)]
#[command(name = "movie-recs")]
#[command(about = "Recommend movies from genre preferences and rating statistics", long_about = None)]
struct Cli {
    /// Path to the dataset directory (movies.csv + ratings.csv)
    #[arg(short, long, default_value = "data/ml-25m")]
    data_dir: PathBuf,

    /// Evidence floor: minimum ratings before a movie is eligible
    #[arg(long, default_value_t = DEFAULT_MIN_RATINGS)]
    min_ratings: u32,

    /// Emit JSON instead of formatted text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get recommendations, interactively or from --prefs
    Recommend {
        /// Genre weights as GENRE=WEIGHT (repeatable); skips the questionnaire
        #[arg(long, value_name = "GENRE=WEIGHT")]
        prefs: Vec<String>,

        /// Number of recommendations (default: 10 interactive, 5 batch)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show the most popular movies within a genre
    Popular {
        /// Genre label to list
        #[arg(long)]
        genre: String,

        /// Number of movies to show
        #[arg(long, default_value = "5")]
        limit: usize,
    },

    /// List all genres in the catalog
    Genres,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("Loading movie database from {}...", cli.data_dir.display());
    let start = Instant::now();
    let (catalog, ratings) = data_loader::load_from_files(&cli.data_dir)
        .context("Failed to load dataset")?;
    let recommender = Recommender::new(
        Arc::new(catalog),
        &ratings,
        RecommenderConfig {
            min_ratings: cli.min_ratings,
        },
    );
    println!("{} Loaded dataset in {:?}", "✓".green(), start.elapsed());

    match cli.command {
        Commands::Recommend { prefs, limit } => {
            handle_recommend(&recommender, prefs, limit, cli.json)?
        }
        Commands::Popular { genre, limit } => {
            handle_popular(&recommender, &genre, limit, cli.json)?
        }
        Commands::Genres => handle_genres(&recommender, cli.json)?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    recommender: &Recommender,
    pref_args: Vec<String>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let interactive = pref_args.is_empty();
    let mut user_ratings = UserRatings::new();

    let prefs = if interactive {
        run_questionnaire(recommender, &mut user_ratings)?
    } else {
        parse_pref_args(&pref_args)?
    };

    let limit = limit.unwrap_or(if interactive {
        DEFAULT_INTERACTIVE_COUNT
    } else {
        DEFAULT_BATCH_COUNT
    });

    let picks = recommender.recommend(&prefs, &user_ratings, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&picks)?);
        return Ok(());
    }

    if picks.is_empty() {
        println!(
            "{}",
            "No movies passed the evidence floor; nothing to recommend.".yellow()
        );
        return Ok(());
    }

    println!(
        "\n{}",
        "Based on your preferences, here are some movies you might enjoy:"
            .bold()
            .blue()
    );
    print_recommendations(&picks);
    Ok(())
}

/// Handle the 'popular' command
fn handle_popular(recommender: &Recommender, genre: &str, limit: usize, json: bool) -> Result<()> {
    let seeds = recommender.popular_in_genre(genre, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&seeds)?);
        return Ok(());
    }

    if seeds.is_empty() {
        println!(
            "{}",
            format!("No eligible movies found for genre '{}'", genre).yellow()
        );
        return Ok(());
    }

    println!("{}", format!("Most popular in {}:", genre).bold().blue());
    for (rank, seed) in seeds.iter().enumerate() {
        println!(
            "{}. {} [avg {:.1}/5 from {} ratings]",
            (rank + 1).to_string().green(),
            seed.title,
            seed.rating_mean,
            seed.rating_count
        );
    }
    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(recommender: &Recommender, json: bool) -> Result<()> {
    let genres = recommender.catalog().genres();

    if json {
        println!("{}", serde_json::to_string_pretty(&genres)?);
        return Ok(());
    }

    println!("{}", "Genres in the catalog:".bold().blue());
    for genre in genres {
        println!("{}{}", "• ".green(), genre);
    }
    Ok(())
}

/// Parse repeated GENRE=WEIGHT arguments into preferences.
fn parse_pref_args(args: &[String]) -> Result<GenrePreferences> {
    let mut prefs = GenrePreferences::new();
    for arg in args {
        let (genre, weight) = arg
            .split_once('=')
            .with_context(|| format!("Expected GENRE=WEIGHT, got '{}'", arg))?;
        let weight: f32 = weight
            .parse()
            .with_context(|| format!("Invalid weight in '{}'", arg))?;
        if !prefs.set(genre, weight) {
            bail!("Weight for '{}' must be between 1 and 5", genre);
        }
    }
    Ok(prefs)
}

/// Cold-start questionnaire: rate every genre, then rate popular movies
/// from the user's top genres.
fn run_questionnaire(
    recommender: &Recommender,
    user_ratings: &mut UserRatings,
) -> Result<GenrePreferences> {
    println!("\n{}", "Welcome to the Movie Recommender!".bold());
    println!("\nFirst, rate how much you enjoy each genre from 1-5 (5 = love it):");

    let mut prefs = GenrePreferences::new();
    let genres: Vec<String> = recommender
        .catalog()
        .genres()
        .into_iter()
        .map(String::from)
        .collect();
    for genre in &genres {
        let weight = prompt_score(&format!("{}: ", genre), 1.0)?;
        prefs.set(genre.as_str(), weight);
    }

    println!("\nNow rate some popular movies (1-5, or 0 if you haven't seen it):\n");
    for genre in prefs.top_genres(3) {
        let genre = genre.to_string();
        for seed in recommender.popular_in_genre(&genre, 5) {
            let prompt = format!(
                "{} ({}) [avg {:.1}/5 from {} ratings]: ",
                seed.title, genre, seed.rating_mean, seed.rating_count
            );
            let rating = prompt_score(&prompt, 0.0)?;
            // 0 means "haven't seen it" and is not recorded
            user_ratings.rate(seed.movie_id, rating);
        }
    }

    Ok(prefs)
}

/// Prompt until the user enters a number between `min` and 5.
fn prompt_score(prompt: &str, min: f32) -> Result<f32> {
    let stdin = io::stdin();
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line)?;
        if read == 0 {
            bail!("Input closed before the questionnaire finished");
        }

        match line.trim().parse::<f32>() {
            Ok(value) if value >= min && value <= 5.0 => return Ok(value),
            _ => println!("Please enter a number between {} and 5", min),
        }
    }
}

/// Format and print the final recommendation list
fn print_recommendations(picks: &[ScoredMovie]) {
    for (rank, movie) in picks.iter().enumerate() {
        let genres = movie
            .genres
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        println!("\n{}. {}", (rank + 1).to_string().green(), movie.title.bold());
        println!("   Genres: {}", genres);
        println!(
            "   Average Rating: {:.1}/5 from {} ratings",
            movie.rating_mean, movie.rating_count
        );
        println!("   Match Score: {:.2}/5", movie.score);
    }
}
