use anyhow::{Context, Result};
use catalog::{Catalog, Course};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::filters::FavoritesOnlyFilter;
use pipeline::{Filter, FilterSpec};
use server::{CatalogService, InteractionStore, JsonFileStore, load_config};
use sources::{InteractionState, Suggestion, Tier};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Number of entries in the recently viewed list
const RECENT_VIEWS: usize = 5;

/// Log filter used when RUST_LOG is unset
const DEFAULT_LOG_FILTER: &str = "info";

/// Course Finder - browse, search and get course suggestions
#[derive(Parser)]
#[command(name = "course-finder")]
#[command(about = "Search an e-learning catalog and get course suggestions", long_about = None)]
struct Cli {
    /// Course catalog JSON file (defaults to the built-in catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Whose favorites and history to use
    #[arg(short, long, default_value = "user-1")]
    user: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search courses by text and attribute filters
    Search {
        /// Case-insensitive text matched against name, description and tags
        #[arg(short, long, default_value = "")]
        query: String,

        #[arg(long)]
        category: Option<String>,

        /// One of under-500k, 500k-1m, over-1m
        #[arg(long)]
        price_range: Option<String>,

        #[arg(long)]
        level: Option<String>,

        #[arg(long)]
        language: Option<String>,

        /// Only courses rated at least this high
        #[arg(long)]
        min_rating: Option<f32>,

        /// Only show courses in your favorites
        #[arg(long)]
        favorites_only: bool,
    },

    /// Show suggested courses
    Recommend {
        /// Show why each course was suggested
        #[arg(long)]
        explain: bool,
    },

    /// Show a course's details and add it to your history
    View {
        /// Course ID
        id: String,
    },

    /// Add or remove a course from your favorites
    Favorite {
        /// Course ID
        id: String,
    },

    /// Show recently viewed courses, most recent first
    History,

    /// List categories with course counts
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    let start = Instant::now();
    let catalog = match cli.catalog.as_ref().or(config.catalog.path.as_ref()) {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin().context("Failed to load built-in catalog")?,
    };
    info!("Loaded {} courses in {:?}", catalog.len(), start.elapsed());

    let service = CatalogService::from_config(Arc::new(catalog), &config);
    let store = JsonFileStore::new(&config.store.path);
    let user = cli.user.as_str();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search {
            query,
            category,
            price_range,
            level,
            language,
            min_rating,
            favorites_only,
        } => {
            let filter = FilterSpec {
                query,
                category,
                price_range,
                level,
                language,
                min_rating,
            };
            handle_search(&service, &store, user, &filter, favorites_only).await?
        }
        Commands::Recommend { explain } => handle_recommend(&service, &store, user, explain).await?,
        Commands::View { id } => handle_view(&service, &store, user, &id)?,
        Commands::Favorite { id } => handle_favorite(&service, &store, user, &id)?,
        Commands::History => handle_history(&service, &store, user)?,
        Commands::Categories => handle_categories(&service),
    }

    Ok(())
}

/// Handle the 'search' command
async fn handle_search(
    service: &CatalogService,
    store: &dyn InteractionStore,
    user: &str,
    filter: &FilterSpec,
    favorites_only: bool,
) -> Result<()> {
    let state = store.load(user).context("Failed to load your saved courses")?;

    println!("{}", "Searching...".dimmed());
    let courses = service.fetch_courses(filter).await?;

    let shown: Vec<&Course> = if favorites_only {
        FavoritesOnlyFilter::new(state.favorites().iter().cloned()).apply(courses.iter().collect())
    } else {
        courses.iter().collect()
    };

    if shown.is_empty() {
        println!("{}", "No courses match your search.".yellow());
        return Ok(());
    }

    println!("{}", format!("{} courses found:", shown.len()).bold().blue());
    for course in shown {
        print_course_line(course, &state);
    }
    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    service: &CatalogService,
    store: &dyn InteractionStore,
    user: &str,
    explain: bool,
) -> Result<()> {
    let state = store.load(user).context("Failed to load your saved courses")?;

    println!("{}", "Finding suggestions...".dimmed());
    let suggestions = service.fetch_suggestions(&state).await?;

    print_suggestions(&suggestions, &state, explain);
    Ok(())
}

/// Handle the 'view' command
fn handle_view(
    service: &CatalogService,
    store: &dyn InteractionStore,
    user: &str,
    id: &str,
) -> Result<()> {
    let course = service.view_course(store, user, id)?;
    let state = store.load(user)?;

    let heart = if state.is_favorite(&course.id) { " ♥".red().to_string() } else { String::new() };
    println!("{}{}", course.name.bold().blue(), heart);
    println!("{}", course.full_description);
    println!();
    println!("{}Instructor: {}", "• ".green(), course.instructor);
    println!("{}Category: {}", "• ".green(), course.category);
    println!("{}Level: {}", "• ".green(), course.level);
    println!("{}Language: {}", "• ".green(), course.language);
    println!("{}Duration: {}", "• ".green(), course.duration);
    println!(
        "{}Rating: {} ({} reviews)",
        "• ".cyan(),
        format_rating(course.rating),
        course.reviews
    );
    println!("{}Price: {}", "• ".cyan(), format_price(course.price));

    if !course.features.is_empty() {
        println!("What you get:");
        for feature in &course.features {
            println!("  - {}", feature);
        }
    }
    if !course.tags.is_empty() {
        println!("Tags: {}", course.tags.join(", ").dimmed());
    }
    Ok(())
}

/// Handle the 'favorite' command
fn handle_favorite(
    service: &CatalogService,
    store: &dyn InteractionStore,
    user: &str,
    id: &str,
) -> Result<()> {
    let favorited = service.toggle_favorite(store, user, id)?;
    if favorited {
        println!("{} Added {} to favorites", "♥".red(), id);
    } else {
        println!("{} Removed {} from favorites", "✓".green(), id);
    }
    Ok(())
}

/// Handle the 'history' command
fn handle_history(
    service: &CatalogService,
    store: &dyn InteractionStore,
    user: &str,
) -> Result<()> {
    let state = store.load(user).context("Failed to load your history")?;

    let recent: Vec<&Course> = state
        .recent_views(RECENT_VIEWS)
        .filter_map(|id| service.get_course(id))
        .collect();

    if recent.is_empty() {
        println!("{}", "You have not viewed any courses yet.".yellow());
        return Ok(());
    }

    println!("{}", "Recently viewed:".bold().blue());
    for course in recent {
        print_course_line(course, &state);
    }
    Ok(())
}

/// Handle the 'categories' command
fn handle_categories(service: &CatalogService) {
    println!("{}", "Categories:".bold().blue());
    for (category, count) in service.categories() {
        println!("{}{} ({})", "• ".green(), category, count);
    }
}

/// One-line course summary used by list views
fn print_course_line(course: &Course, state: &InteractionState) {
    let heart = if state.is_favorite(&course.id) { "♥".red() } else { " ".normal() };
    println!(
        "{} {} {} - {} | {} | {} | ★ {} ({})",
        heart,
        course.id.dimmed(),
        course.name.bold(),
        course.instructor,
        course.level,
        format_price(course.price).green(),
        format_rating(course.rating),
        course.reviews
    );
}

fn print_suggestions(suggestions: &[Suggestion], state: &InteractionState, explain: bool) {
    let header = if state.is_empty() { "Top rated courses:" } else { "Suggested for you:" };
    println!("{}", header.bold().blue());

    if suggestions.is_empty() {
        println!("{}", "No suggestions yet. Try viewing a few courses.".yellow());
        return;
    }

    for (i, suggestion) in suggestions.iter().enumerate() {
        let course = &suggestion.course;
        println!(
            "{}. {} ({}) - {} - ★ {}",
            (i + 1).to_string().green(),
            course.name,
            course.category,
            format_price(course.price),
            format_rating(course.rating)
        );
        if explain {
            let reason = match suggestion.tier {
                Tier::TopRated => suggestion.tier.reason().normal(),
                _ => suggestion.tier.reason().cyan(),
            };
            println!("   Why: {}", reason);
        }
    }
}

/// Vietnamese dong with `.` as the thousands separator, e.g. `1.299.000 ₫`
fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    format!("{} ₫", grouped)
}

fn format_rating(rating: f32) -> String {
    format!("{:.1}", rating)
}
