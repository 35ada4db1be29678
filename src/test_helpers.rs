//! Shared test utilities for the folio test suite.
//!
//! Provides compact builders for posts and portfolio entries, the reference
//! blog scenario used across query tests, and small extractors that keep
//! assertions readable.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let blog = Blog::new(vec![
//!     Post { tags: tags(&["rust"]), ..post(1, "hello", "2024-01-01") },
//!     post(2, "world", "2024-02-01"),
//! ]);
//! assert_eq!(slugs(&blog.sorted_by_date()), vec!["world", "hello"]);
//! ```

use std::fs;
use std::path::Path;

use crate::blog::{Blog, Category, Post, PostStatus};
use crate::dates;
use crate::portfolio::{Experience, Project, ProjectCategory};
use crate::types::DateRange;

// =========================================================================
// Builders
// =========================================================================

/// A published, untagged, uncategorized post. Override fields with struct
/// update syntax.
pub fn post(id: u64, slug: &str, published: &str) -> Post {
    Post {
        id,
        slug: slug.to_string(),
        title: format!("Post {slug}"),
        excerpt: String::new(),
        content: String::new(),
        category: String::new(),
        tags: Vec::new(),
        published_at: dates::parse_timestamp(published)
            .unwrap_or_else(|| panic!("bad test timestamp '{published}'")),
        status: PostStatus::Published,
        featured: false,
        author: None,
        cover_image: None,
        read_time: None,
        seo: None,
    }
}

pub fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub fn category(name: &str, slug: &str) -> Category {
    Category {
        name: name.to_string(),
        slug: slug.to_string(),
        description: None,
        color: None,
    }
}

/// A non-featured backend project.
pub fn project(id: u64, title: &str, technologies: &[&str]) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: String::new(),
        long_description: None,
        category: ProjectCategory::Backend,
        technologies: tags(technologies),
        featured: false,
        github: None,
        live: None,
        image: None,
        start_date: None,
        end_date: None,
    }
}

pub fn experience(id: u64, position: &str, start: &str, end: Option<&str>) -> Experience {
    let date = |s: &str| dates::parse_date(s).unwrap_or_else(|| panic!("bad test date '{s}'"));
    Experience {
        id,
        position: position.to_string(),
        company: "Acme".to_string(),
        location: None,
        dates: DateRange::new(date(start), end.map(date)),
        description: String::new(),
        achievements: Vec::new(),
        technologies: Vec::new(),
    }
}

// =========================================================================
// Reference scenario
// =========================================================================

/// Three posts: two published frontend posts and a backend draft.
///
/// ```text
/// p1  [js, react]   frontend  2024-03-01  published
/// p2  [react, css]  frontend  2024-01-01  published
/// p3  [go]          backend   2024-02-01  draft
/// ```
pub fn scenario_blog() -> Blog {
    Blog {
        posts: vec![
            Post {
                category: "frontend".into(),
                tags: tags(&["js", "react"]),
                ..post(1, "p1", "2024-03-01")
            },
            Post {
                category: "frontend".into(),
                tags: tags(&["react", "css"]),
                ..post(2, "p2", "2024-01-01")
            },
            Post {
                category: "backend".into(),
                tags: tags(&["go"]),
                status: PostStatus::Draft,
                ..post(3, "p3", "2024-02-01")
            },
        ],
        categories: vec![
            category("Frontend", "frontend"),
            category("Backend", "backend"),
        ],
        tags: tags(&["js", "react", "css", "go"]),
    }
}

// =========================================================================
// Extractors and fixtures
// =========================================================================

/// Slugs of a query result, in result order.
pub fn slugs<'a>(posts: &[&'a Post]) -> Vec<&'a str> {
    posts.iter().map(|p| p.slug.as_str()).collect()
}

/// Write `blog` as `blog.json` into `dir`.
pub fn write_blog(dir: &Path, blog: &Blog) {
    let json = serde_json::to_string_pretty(blog).unwrap();
    fs::write(dir.join(crate::content::BLOG_FILE), json).unwrap();
}
