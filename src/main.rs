use clap::{Parser, Subcommand};
use folio::blog::{Post, sort_newest_first};
use folio::config::{self, SiteConfig};
use folio::content::{self, Content};
use folio::output;
use folio::portfolio::ProjectCategory;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Query the content of a developer portfolio site")]
#[command(long_about = "\
Query the content of a developer portfolio site

The site content is two JSON documents: a portfolio (profile, skills,
projects, experience, education) and a blog (posts, categories, tags).
Stock documents are built in; point --data at a directory to use your own.

Data directory:

  data/
  ├── config.toml        # Site settings (optional)
  ├── portfolio.json     # Falls back to the built-in copy when absent
  └── blog.json          # Falls back to the built-in copy when absent

Only published posts are visible to blog queries. Drafts are counted by
'folio check' but never listed.

Run 'folio gen-config' to generate a documented config.toml.")]
#[command(version = env!("FOLIO_VERSION"))]
struct Cli {
    /// Data directory holding config.toml, portfolio.json and blog.json
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log content loading details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List published posts, newest first
    Posts {
        /// Only featured posts
        #[arg(long)]
        featured: bool,
        /// Only posts in this category (slug, case-insensitive)
        #[arg(long)]
        category: Option<String>,
        /// Only posts with a tag containing this text
        #[arg(long)]
        tag: Option<String>,
        /// Only posts published in this year
        #[arg(long)]
        year: Option<i32>,
        /// Narrow --year to one month (1-12)
        #[arg(long, requires = "year", value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
    /// Show one published post and its related posts
    Post { slug: String },
    /// Posts related to a post by shared tags or category
    Related {
        slug: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Most recent published posts
    Recent {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Search titles, excerpts, bodies and tags
    Search { query: String },
    /// Published posts grouped by year
    Archive,
    /// Tags by number of posts
    Tags {
        #[arg(long)]
        limit: Option<usize>,
        /// List every distinct tag alphabetically instead of counts
        #[arg(long, conflicts_with = "limit")]
        all: bool,
    },
    /// One page of the post list
    Page {
        #[arg(default_value_t = 1)]
        page: usize,
        #[arg(long)]
        size: Option<usize>,
    },
    /// Categories that have published posts
    Categories,
    /// List projects
    Projects {
        #[arg(long)]
        featured: bool,
        /// Only projects using this technology (case-insensitive substring)
        #[arg(long)]
        tech: Option<String>,
        /// website, frontend, backend, fullstack, mobile or other
        #[arg(long)]
        category: Option<ProjectCategory>,
    },
    /// Work history, newest first
    Experience {
        /// Only roles without an end date
        #[arg(long)]
        current: bool,
    },
    /// Education, newest first
    Education,
    /// Skill groups, or the skills of one group
    Skills {
        #[arg(long)]
        category: Option<String>,
    },
    /// Navigation and feature switches for the current config
    Sections,
    /// Validate the content and config, then print an inventory
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Command::GenConfig = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let (site_config, loaded) = match &cli.data {
        Some(dir) => {
            debug!(dir = %dir.display(), "loading data directory");
            (config::load_config(dir)?, Content::load_dir(dir)?)
        }
        None => (SiteConfig::default(), Content::embedded()?),
    };
    let content = content::install(loaded)?;
    run(&cli, &site_config, content)
}

fn run(
    cli: &Cli,
    site: &SiteConfig,
    content: &'static Content,
) -> Result<(), Box<dyn std::error::Error>> {
    let blog = &content.blog;
    let portfolio = &content.portfolio;
    let wpm = site.blog.words_per_minute;

    match &cli.command {
        Command::Posts {
            featured,
            category,
            tag,
            year,
            month,
        } => {
            let mut posts = match (year, month) {
                (Some(y), Some(m)) => blog.by_year_month(*y, *m),
                (Some(y), None) => blog.by_year(*y),
                _ => blog.sorted_by_date(),
            };
            if year.is_some() {
                sort_newest_first(&mut posts);
            }
            if *featured {
                posts.retain(|p| p.featured);
            }
            if let Some(category) = category {
                let matching = blog.by_category(category);
                posts.retain(|p| matching.iter().any(|m| m.id == p.id));
            }
            if let Some(tag) = tag {
                let matching = blog.by_tag(tag);
                posts.retain(|p| matching.iter().any(|m| m.id == p.id));
            }
            emit(cli.json, &posts, || output::print_post_list(&posts, wpm))?;
        }
        Command::Post { slug } => {
            let post = find_post(content, slug)?;
            let related = blog.related(post, site.blog.related_posts);
            if cli.json {
                print_json(&serde_json::json!({ "post": post, "related": related }))?;
            } else {
                output::print_post_detail(post, &related, wpm);
            }
        }
        Command::Related { slug, limit } => {
            let post = find_post(content, slug)?;
            let related = blog.related(post, limit.unwrap_or(site.blog.related_posts));
            emit(cli.json, &related, || output::print_post_list(&related, wpm))?;
        }
        Command::Recent { limit } => {
            let posts = blog.recent(limit.unwrap_or(site.blog.recent_posts));
            emit(cli.json, &posts, || output::print_post_list(&posts, wpm))?;
        }
        Command::Search { query } => {
            let posts = blog.search(query);
            emit(cli.json, &posts, || output::print_post_list(&posts, wpm))?;
        }
        Command::Archive => {
            if cli.json {
                let years: Vec<_> = blog
                    .archive_years()
                    .into_iter()
                    .map(|year| serde_json::json!({ "year": year, "posts": blog.by_year(year) }))
                    .collect();
                print_json(&years)?;
            } else {
                output::print_archive(blog);
            }
        }
        Command::Tags { limit, all } => {
            if *all {
                let tags = blog.all_tags();
                emit(cli.json, &tags, || {
                    for tag in &tags {
                        println!("{tag}");
                    }
                })?;
            } else {
                let tags = blog.popular_tags(limit.unwrap_or(site.blog.popular_tags));
                emit(cli.json, &tags, || output::print_tags(&tags))?;
            }
        }
        Command::Page { page, size } => {
            let size = size.unwrap_or(site.blog.posts_per_page);
            let result = blog.paginate(*page, size);
            emit(cli.json, &result, || output::print_page(&result, size, wpm))?;
        }
        Command::Categories => {
            let categories = blog.categories_with_post_count();
            emit(cli.json, &categories, || {
                output::print_categories(&categories)
            })?;
        }
        Command::Projects {
            featured,
            tech,
            category,
        } => {
            let mut projects = match category {
                Some(c) => portfolio.projects_by_category(*c),
                None => portfolio.projects.iter().collect(),
            };
            if *featured {
                projects.retain(|p| p.featured);
            }
            if let Some(tech) = tech {
                let matching = portfolio.projects_by_technology(tech);
                projects.retain(|p| matching.iter().any(|m| m.id == p.id));
            }
            emit(cli.json, &projects, || output::print_projects(&projects))?;
        }
        Command::Experience { current } => {
            let roles = if *current {
                portfolio.ongoing_experience()
            } else {
                portfolio.experience_by_date()
            };
            let today = chrono::Local::now().date_naive();
            emit(cli.json, &roles, || output::print_experience(&roles, today))?;
        }
        Command::Education => {
            let entries = portfolio.education_by_date();
            emit(cli.json, &entries, || output::print_education(&entries))?;
        }
        Command::Skills { category } => match category {
            Some(category) => {
                let skills = portfolio.skills_by_category(category);
                emit(cli.json, &skills, || {
                    for skill in skills {
                        println!("{skill}");
                    }
                })?;
            }
            None => emit(cli.json, &portfolio.skills, || {
                output::print_skills(&portfolio.skills)
            })?,
        },
        Command::Sections => {
            if cli.json {
                print_json(&serde_json::json!({
                    "navigation": folio::sections::nav_items(&site.sections),
                    "features": site.features,
                }))?;
            } else {
                output::print_sections(site);
            }
        }
        Command::Check => {
            println!("==> Checking content");
            output::print_check_summary(content);
            println!("==> Content is valid");
        }
        // Printed in main before any content is loaded
        Command::GenConfig => {}
    }

    Ok(())
}

/// Look up a published post, erroring with the slug when it doesn't exist.
fn find_post<'a>(content: &'a Content, slug: &str) -> Result<&'a Post, String> {
    content
        .blog
        .by_slug(slug)
        .ok_or_else(|| format!("no published post with slug '{slug}'"))
}

/// Print `value` as JSON when `json` is set, otherwise run the text printer.
fn emit<T: Serialize + ?Sized>(
    json: bool,
    value: &T,
    text: impl FnOnce(),
) -> Result<(), serde_json::Error> {
    if json {
        print_json(value)
    } else {
        text();
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
