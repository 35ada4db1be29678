//! Content loading and process-wide content state.
//!
//! The site has two documents, `portfolio.json` and `blog.json`. Stock
//! copies are compiled into the binary; a data directory can replace
//! either one:
//!
//! ```text
//! data/
//! ├── config.toml        # Site settings (optional, see config module)
//! ├── portfolio.json     # Profile, skills, projects, experience, education
//! └── blog.json          # Posts, categories, tags
//! ```
//!
//! A document missing from the data directory falls back to the embedded
//! copy, so a directory holding only `blog.json` is valid.
//!
//! ## Lifecycle
//!
//! Content is loaded once, validated, and installed as immutable
//! process-wide state with [`install`]. Queries borrow from it through
//! [`get`] for the rest of the process; there is no reload or teardown.

use crate::blog::Blog;
use crate::portfolio::Portfolio;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, warn};

pub const PORTFOLIO_FILE: &str = "portfolio.json";
pub const BLOG_FILE: &str = "blog.json";

const EMBEDDED_PORTFOLIO: &str = include_str!("../data/portfolio.json");
const EMBEDDED_BLOG: &str = include_str!("../data/blog.json");

static CONTENT: OnceLock<Content> = OnceLock::new();

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error in {file}: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Duplicate {collection} id: {id}")]
    DuplicateId { collection: &'static str, id: u64 },
    #[error("Duplicate post slug: {0}")]
    DuplicateSlug(String),
    #[error("Content is already installed")]
    AlreadyInstalled,
}

/// Both content documents, validated.
#[derive(Debug, Clone)]
pub struct Content {
    pub portfolio: Portfolio,
    pub blog: Blog,
}

impl Content {
    /// Validate and wrap already-parsed documents.
    pub fn new(portfolio: Portfolio, blog: Blog) -> Result<Self, ContentError> {
        let content = Self { portfolio, blog };
        content.validate()?;
        Ok(content)
    }

    /// Parse both documents from JSON text.
    pub fn from_json(portfolio_json: &str, blog_json: &str) -> Result<Self, ContentError> {
        let portfolio = parse_document(portfolio_json, PORTFOLIO_FILE)?;
        let blog = parse_document(blog_json, BLOG_FILE)?;
        Self::new(portfolio, blog)
    }

    /// The documents compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_PORTFOLIO, EMBEDDED_BLOG)
    }

    /// Load from a data directory, falling back to the embedded copy of any
    /// document the directory doesn't provide.
    pub fn load_dir(dir: &Path) -> Result<Self, ContentError> {
        let portfolio_json = read_or_embedded(dir, PORTFOLIO_FILE, EMBEDDED_PORTFOLIO)?;
        let blog_json = read_or_embedded(dir, BLOG_FILE, EMBEDDED_BLOG)?;
        Self::from_json(&portfolio_json, &blog_json)
    }

    /// Enforce id and slug uniqueness, and flag posts whose category is
    /// missing from the category vocabulary.
    pub fn validate(&self) -> Result<(), ContentError> {
        unique_ids("project", self.portfolio.projects.iter().map(|p| p.id))?;
        unique_ids("experience", self.portfolio.experience.iter().map(|e| e.id))?;
        unique_ids("education", self.portfolio.education.iter().map(|e| e.id))?;
        unique_ids("post", self.blog.posts.iter().map(|p| p.id))?;

        let mut slugs = HashSet::new();
        for post in &self.blog.posts {
            if !slugs.insert(post.slug.as_str()) {
                return Err(ContentError::DuplicateSlug(post.slug.clone()));
            }
        }

        if !self.blog.categories.is_empty() {
            for post in &self.blog.posts {
                let known = self
                    .blog
                    .categories
                    .iter()
                    .any(|c| c.slug.eq_ignore_ascii_case(&post.category));
                if !known {
                    warn!(slug = %post.slug, category = %post.category, "post category is not in the category list");
                }
            }
        }

        debug!(
            projects = self.portfolio.projects.len(),
            experience = self.portfolio.experience.len(),
            education = self.portfolio.education.len(),
            posts = self.blog.posts.len(),
            published = self.blog.published().len(),
            "content validated"
        );
        Ok(())
    }
}

fn parse_document<T: DeserializeOwned>(json: &str, file: &str) -> Result<T, ContentError> {
    serde_json::from_str(json).map_err(|source| ContentError::Json {
        file: file.to_string(),
        source,
    })
}

fn read_or_embedded(dir: &Path, file: &str, embedded: &str) -> Result<String, ContentError> {
    let path = dir.join(file);
    if path.is_file() {
        debug!(path = %path.display(), "loading document");
        Ok(fs::read_to_string(&path)?)
    } else {
        debug!(file, "document not in data directory, using embedded copy");
        Ok(embedded.to_string())
    }
}

fn unique_ids(
    collection: &'static str,
    ids: impl Iterator<Item = u64>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId { collection, id });
        }
    }
    Ok(())
}

/// Install `content` as the process-wide content. Only the first call wins.
pub fn install(content: Content) -> Result<&'static Content, ContentError> {
    CONTENT
        .set(content)
        .map_err(|_| ContentError::AlreadyInstalled)?;
    Ok(get())
}

/// The process-wide content, installing the embedded documents on first use
/// if nothing was installed.
pub fn get() -> &'static Content {
    CONTENT.get_or_init(|| Content::embedded().expect("embedded content must be valid"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn embedded_content_is_valid() {
        let content = Content::embedded().unwrap();
        assert!(!content.portfolio.personal.name.is_empty());
        assert!(!content.portfolio.projects.is_empty());
        assert!(!content.blog.published().is_empty());
    }

    #[test]
    fn embedded_posts_all_have_known_categories() {
        let content = Content::embedded().unwrap();
        for post in &content.blog.posts {
            assert!(
                content.blog.category_by_slug(&post.category).is_some(),
                "post '{}' has unknown category '{}'",
                post.slug,
                post.category
            );
        }
    }

    #[test]
    fn global_content_installs_once() {
        let first = get();
        assert!(std::ptr::eq(first, get()));
        let again = install(Content::embedded().unwrap());
        assert!(matches!(again, Err(ContentError::AlreadyInstalled)));
    }

    #[test]
    fn load_dir_prefers_directory_documents() {
        let tmp = TempDir::new().unwrap();
        write_blog(tmp.path(), &scenario_blog());

        let content = Content::load_dir(tmp.path()).unwrap();
        assert_eq!(slugs(&content.blog.published()), vec!["p1", "p2"]);
        // portfolio.json absent → embedded copy
        assert_eq!(
            content.portfolio,
            Content::embedded().unwrap().portfolio
        );
    }

    #[test]
    fn load_dir_empty_directory_is_embedded_content() {
        let tmp = TempDir::new().unwrap();
        let content = Content::load_dir(tmp.path()).unwrap();
        let embedded = Content::embedded().unwrap();
        assert_eq!(content.blog.posts.len(), embedded.blog.posts.len());
    }

    #[test]
    fn malformed_document_names_the_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(BLOG_FILE), "{ not json").unwrap();
        let err = Content::load_dir(tmp.path()).unwrap_err();
        assert!(matches!(err, ContentError::Json { ref file, .. } if file == BLOG_FILE));
        assert!(err.to_string().contains("blog.json"));
    }

    #[test]
    fn empty_documents_are_valid() {
        let content = Content::from_json("{}", "{}").unwrap();
        assert!(content.blog.published().is_empty());
        assert!(content.portfolio.projects.is_empty());
    }

    #[test]
    fn duplicate_post_id_rejected() {
        let blog = Blog::new(vec![post(1, "a", "2024-01-01"), post(1, "b", "2024-01-02")]);
        let err = Content::new(Portfolio::default(), blog).unwrap_err();
        assert!(matches!(
            err,
            ContentError::DuplicateId {
                collection: "post",
                id: 1
            }
        ));
    }

    #[test]
    fn duplicate_slug_rejected() {
        let blog = Blog::new(vec![post(1, "same", "2024-01-01"), post(2, "same", "2024-01-02")]);
        let err = Content::new(Portfolio::default(), blog).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSlug(ref s) if s == "same"));
    }

    #[test]
    fn duplicate_project_id_rejected() {
        let portfolio = Portfolio {
            projects: vec![project(7, "A", &[]), project(7, "B", &[])],
            ..Portfolio::default()
        };
        let err = Content::new(portfolio, Blog::default()).unwrap_err();
        assert!(matches!(
            err,
            ContentError::DuplicateId {
                collection: "project",
                ..
            }
        ));
    }
}
