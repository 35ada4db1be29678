//! CLI output formatting for content queries.
//!
//! # Information-First Display
//!
//! Every entity (post, project, role, degree) leads with its positional index
//! and title. Dates, tags, technologies and other attributes follow as
//! indented context lines, so the output reads as a content inventory.
//!
//! # Entity Display Contract
//!
//! 1. **Header line**: positional index + title (+ optional detail in parens)
//! 2. **Context lines**: indented `Label: value` pairs
//!
//! [`entity_header`] and [`detail_line`] enforce this pattern so every
//! command formats the same entity the same way.
//!
//! # Output Format
//!
//! ## Posts
//!
//! ```text
//! 001 Building a CLI in Rust (featured)
//!     Slug: rust-cli
//!     Published: March 1, 2024 · 6 min read
//!     Category: backend
//!     Tags: rust, cli
//! ```
//!
//! ## Experience
//!
//! ```text
//! 001 Senior Engineer at Northwind
//!     Dates: Mar 2022 - Present (2 years)
//!     Location: Remote
//!     Technologies: Rust, PostgreSQL
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O, no clock. Anything time-dependent takes `today` as an argument.

use crate::blog::{Blog, CategoryCount, Post, PostPage, TagCount, sort_newest_first};
use crate::config::SiteConfig;
use crate::content::Content;
use crate::dates;
use crate::portfolio::{Education, Experience, Project, Skills};
use crate::sections;
use crate::text;
use chrono::NaiveDate;

/// Excerpt previews are cut to this many characters.
const EXCERPT_PREVIEW: usize = 72;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional detail.
///
/// ```text
/// 001 Building a CLI in Rust (featured)
/// 002 Portfolio Site
/// ```
fn entity_header(index: usize, title: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), title, d),
        None => format!("{} {}", format_index(index), title),
    }
}

/// An indented `Label: value` context line.
fn detail_line(depth: usize, label: &str, value: &str) -> String {
    format!("{}{}: {}", indent(depth), label, value)
}

/// Push a comma-joined list as a context line, skipping empty lists.
fn push_list(lines: &mut Vec<String>, depth: usize, label: &str, items: &[String]) {
    if !items.is_empty() {
        lines.push(detail_line(depth, label, &items.join(", ")));
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn check(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

// ============================================================================
// Blog
// ============================================================================

fn post_lines(index: usize, post: &Post, words_per_minute: u32) -> Vec<String> {
    let detail = post.featured.then_some("featured");
    let mut lines = vec![entity_header(index, &post.title, detail)];
    lines.push(detail_line(1, "Slug", &post.slug));
    lines.push(detail_line(
        1,
        "Published",
        &format!(
            "{} \u{b7} {} min read",
            dates::format_long(post.published_at.date_naive()),
            post.reading_time(words_per_minute)
        ),
    ));
    if !post.category.is_empty() {
        lines.push(detail_line(1, "Category", &post.category));
    }
    push_list(&mut lines, 1, "Tags", &post.tags);
    lines
}

/// Format a list of posts, one entity block per post.
pub fn format_post_list(posts: &[&Post], words_per_minute: u32) -> Vec<String> {
    if posts.is_empty() {
        return vec!["No posts".to_string()];
    }
    posts
        .iter()
        .enumerate()
        .flat_map(|(i, post)| post_lines(i + 1, post, words_per_minute))
        .collect()
}

pub fn print_post_list(posts: &[&Post], words_per_minute: u32) {
    for line in format_post_list(posts, words_per_minute) {
        println!("{}", line);
    }
}

/// Format a single post with its excerpt, SEO data and related posts.
pub fn format_post_detail(post: &Post, related: &[&Post], words_per_minute: u32) -> Vec<String> {
    let mut lines = vec![post.title.clone()];
    lines.push(detail_line(1, "Slug", &post.slug));
    if let Some(ref author) = post.author {
        lines.push(detail_line(1, "Author", author));
    }
    lines.push(detail_line(
        1,
        "Published",
        &dates::format_long(post.published_at.date_naive()),
    ));
    lines.push(detail_line(
        1,
        "Reading time",
        &format!("{} min", post.reading_time(words_per_minute)),
    ));
    if !post.category.is_empty() {
        lines.push(detail_line(1, "Category", &post.category));
    }
    push_list(&mut lines, 1, "Tags", &post.tags);
    if !post.excerpt.is_empty() {
        lines.push(detail_line(1, "Excerpt", &post.excerpt));
    }
    if let Some(ref seo) = post.seo {
        lines.push(detail_line(1, "SEO title", &seo.title));
        push_list(&mut lines, 1, "Keywords", &seo.keywords);
    }

    if !related.is_empty() {
        lines.push(String::new());
        lines.push("Related".to_string());
        for (i, r) in related.iter().enumerate() {
            lines.push(format!(
                "{}{}",
                indent(1),
                entity_header(i + 1, &r.title, Some(r.slug.as_str()))
            ));
        }
    }
    lines
}

pub fn print_post_detail(post: &Post, related: &[&Post], words_per_minute: u32) {
    for line in format_post_detail(post, related, words_per_minute) {
        println!("{}", line);
    }
}

/// Format one page of posts followed by a pagination footer.
///
/// Entity indices continue across pages, so `page_size` must be the size
/// the page was sliced with.
///
/// ```text
/// Page 1 of 2 (7 posts) · next: 2
/// ```
pub fn format_page(page: &PostPage<'_>, page_size: usize, words_per_minute: u32) -> Vec<String> {
    let p = &page.pagination;
    let offset = p.current_page.saturating_sub(1).saturating_mul(page_size);
    let mut lines = Vec::new();
    for (i, post) in page.items.iter().enumerate() {
        lines.extend(post_lines(offset.saturating_add(i + 1), post, words_per_minute));
    }
    if page.items.is_empty() {
        lines.push("No posts on this page".to_string());
    }

    let mut footer = format!(
        "Page {} of {} ({})",
        p.current_page,
        p.total_pages,
        plural(p.total_items, "post", "posts")
    );
    if p.has_prev_page {
        footer.push_str(&format!(" \u{b7} prev: {}", p.current_page - 1));
    }
    if p.has_next_page {
        footer.push_str(&format!(" \u{b7} next: {}", p.current_page + 1));
    }
    lines.push(String::new());
    lines.push(footer);
    lines
}

pub fn print_page(page: &PostPage<'_>, page_size: usize, words_per_minute: u32) {
    for line in format_page(page, page_size, words_per_minute) {
        println!("{}", line);
    }
}

/// Format tag usage counts, most used first as given.
pub fn format_tags(tags: &[TagCount]) -> Vec<String> {
    if tags.is_empty() {
        return vec!["No tags".to_string()];
    }
    tags.iter()
        .enumerate()
        .map(|(i, t)| entity_header(i + 1, &t.tag, Some(plural(t.count, "post", "posts").as_str())))
        .collect()
}

pub fn print_tags(tags: &[TagCount]) {
    for line in format_tags(tags) {
        println!("{}", line);
    }
}

/// Format categories with their published post counts.
pub fn format_categories(categories: &[CategoryCount<'_>]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, c) in categories.iter().enumerate() {
        lines.push(entity_header(
            i + 1,
            &c.category.name,
            Some(plural(c.post_count, "post", "posts").as_str()),
        ));
        lines.push(detail_line(1, "Slug", &c.category.slug));
        if let Some(ref desc) = c.category.description {
            lines.push(detail_line(1, "Description", desc));
        }
    }
    if lines.is_empty() {
        lines.push("No categories".to_string());
    }
    lines
}

pub fn print_categories(categories: &[CategoryCount<'_>]) {
    for line in format_categories(categories) {
        println!("{}", line);
    }
}

/// Format the archive: published posts grouped by year, newest year first.
///
/// ```text
/// 2024 (3 posts)
///     March 1, 2024  Building a CLI in Rust
/// ```
pub fn format_archive(blog: &Blog) -> Vec<String> {
    let mut lines = Vec::new();
    for year in blog.archive_years() {
        let mut posts = blog.by_year(year);
        sort_newest_first(&mut posts);
        lines.push(format!("{} ({})", year, plural(posts.len(), "post", "posts")));
        for post in posts {
            lines.push(format!(
                "{}{}  {}",
                indent(1),
                dates::format_long(post.published_at.date_naive()),
                post.title
            ));
        }
    }
    if lines.is_empty() {
        lines.push("No posts".to_string());
    }
    lines
}

pub fn print_archive(blog: &Blog) {
    for line in format_archive(blog) {
        println!("{}", line);
    }
}

// ============================================================================
// Portfolio
// ============================================================================

/// Format projects with category, technologies, links and dates.
pub fn format_projects(projects: &[&Project]) -> Vec<String> {
    if projects.is_empty() {
        return vec!["No projects".to_string()];
    }
    let mut lines = Vec::new();
    for (i, project) in projects.iter().enumerate() {
        let detail = project.featured.then_some("featured");
        lines.push(entity_header(i + 1, &project.title, detail));
        lines.push(detail_line(1, "Category", project.category.name()));
        if !project.description.is_empty() {
            lines.push(detail_line(
                1,
                "Description",
                &text::truncate(&project.description, EXCERPT_PREVIEW),
            ));
        }
        push_list(&mut lines, 1, "Technologies", &project.technologies);
        if let Some(range) = project.date_range() {
            lines.push(detail_line(
                1,
                "Dates",
                &dates::format_range(&range, dates::format_short_month_year),
            ));
        }
        if let Some(ref url) = project.github {
            lines.push(detail_line(1, "Source", url));
        }
        if let Some(ref url) = project.live {
            lines.push(detail_line(1, "Live", url));
        }
    }
    lines
}

pub fn print_projects(projects: &[&Project]) {
    for line in format_projects(projects) {
        println!("{}", line);
    }
}

/// Format roles newest first as given, with a duration measured to `today`
/// for ongoing roles.
pub fn format_experience(roles: &[&Experience], today: NaiveDate) -> Vec<String> {
    if roles.is_empty() {
        return vec!["No experience".to_string()];
    }
    let mut lines = Vec::new();
    for (i, role) in roles.iter().enumerate() {
        let title = format!("{} at {}", role.position, role.company);
        let detail = role.dates.is_ongoing().then_some("current");
        lines.push(entity_header(i + 1, &title, detail));
        lines.push(detail_line(
            1,
            "Dates",
            &format!(
                "{} ({})",
                dates::format_range(&role.dates, dates::format_short_month_year),
                dates::describe_duration(role.dates.start, role.dates.end, today)
            ),
        ));
        if let Some(ref location) = role.location {
            lines.push(detail_line(1, "Location", location));
        }
        push_list(&mut lines, 1, "Technologies", &role.technologies);
        for achievement in &role.achievements {
            lines.push(format!("{}- {}", indent(1), achievement));
        }
    }
    lines
}

pub fn print_experience(roles: &[&Experience], today: NaiveDate) {
    for line in format_experience(roles, today) {
        println!("{}", line);
    }
}

/// Format education entries with field, grade and certificates.
pub fn format_education(entries: &[&Education]) -> Vec<String> {
    if entries.is_empty() {
        return vec!["No education".to_string()];
    }
    let mut lines = Vec::new();
    for (i, edu) in entries.iter().enumerate() {
        lines.push(entity_header(i + 1, &edu.degree, Some(edu.institution.as_str())));
        if let Some(ref field) = edu.field {
            lines.push(detail_line(1, "Field", field));
        }
        lines.push(detail_line(
            1,
            "Dates",
            &dates::format_range(&edu.dates, dates::format_month_year),
        ));
        if let Some(ref gpa) = edu.gpa {
            lines.push(detail_line(1, "GPA", gpa));
        }
        push_list(&mut lines, 1, "Courses", &edu.courses);
        let certificates: Vec<String> = edu.certificates.iter().map(|c| c.name.clone()).collect();
        push_list(&mut lines, 1, "Certificates", &certificates);
    }
    lines
}

pub fn print_education(entries: &[&Education]) {
    for line in format_education(entries) {
        println!("{}", line);
    }
}

/// Format skill groups in document order.
pub fn format_skills(skills: &Skills) -> Vec<String> {
    if skills.groups.is_empty() {
        return vec!["No skills".to_string()];
    }
    skills
        .groups
        .iter()
        .map(|g| format!("{}: {}", g.category, g.skills.join(", ")))
        .collect()
}

pub fn print_skills(skills: &Skills) {
    for line in format_skills(skills) {
        println!("{}", line);
    }
}

// ============================================================================
// Site
// ============================================================================

/// Format the navigation bar and feature switches for a config.
///
/// ```text
/// Navigation
///     001 Home → #home
///
/// Features
///     contact_form: on
/// ```
pub fn format_sections(config: &SiteConfig) -> Vec<String> {
    let mut lines = vec!["Navigation".to_string()];
    for (i, item) in sections::nav_items(&config.sections).iter().enumerate() {
        lines.push(format!(
            "{}{} \u{2192} {}",
            indent(1),
            entity_header(i + 1, item.name, None),
            item.href
        ));
    }
    lines.push(String::new());
    lines.push("Features".to_string());
    let f = &config.features;
    lines.push(detail_line(1, "contact_form", check(f.contact_form)));
    lines.push(detail_line(1, "dark_mode", check(f.dark_mode)));
    lines.push(detail_line(1, "animations", check(f.animations)));
    lines
}

pub fn print_sections(config: &SiteConfig) {
    for line in format_sections(config) {
        println!("{}", line);
    }
}

/// Format a content inventory used by the `check` command.
///
/// ```text
/// Portfolio: Alex Morgan (Full-Stack Developer)
///     Projects: 6 (3 featured)
/// Blog
///     Posts: 7 (6 published, 1 draft)
/// ```
pub fn format_check_summary(content: &Content) -> Vec<String> {
    let p = &content.portfolio;
    let b = &content.blog;
    let published = b.published().len();
    let drafts = b.posts.len() - published;

    let mut lines = vec![format!(
        "Portfolio: {} ({})",
        p.personal.name, p.personal.title
    )];
    lines.push(detail_line(
        1,
        "Projects",
        &format!("{} ({} featured)", p.projects.len(), p.featured_projects().len()),
    ));
    lines.push(detail_line(
        1,
        "Experience",
        &format!(
            "{} ({} current)",
            p.experience.len(),
            p.ongoing_experience().len()
        ),
    ));
    lines.push(detail_line(1, "Education", &p.education.len().to_string()));
    lines.push(detail_line(
        1,
        "Skills",
        &format!(
            "{} in {}",
            p.all_skills().len(),
            plural(p.skills.groups.len(), "group", "groups")
        ),
    ));
    lines.push("Blog".to_string());
    lines.push(detail_line(
        1,
        "Posts",
        &format!(
            "{} ({} published, {})",
            b.posts.len(),
            published,
            plural(drafts, "draft", "drafts")
        ),
    ));
    lines.push(detail_line(1, "Categories", &b.categories.len().to_string()));
    lines.push(detail_line(1, "Tags", &b.tag_counts().len().to_string()));
    lines
}

pub fn print_check_summary(content: &Content) {
    for line in format_check_summary(content) {
        println!("{}", line);
    }
}
