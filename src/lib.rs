//! # Folio
//!
//! The content layer of a developer portfolio site. Two JSON documents hold
//! everything the site shows: `portfolio.json` (profile, skills, projects,
//! work history, education) and `blog.json` (posts, categories, tags). This
//! crate loads them once, validates them, and answers the questions the
//! pages ask: featured projects, experience newest first, related posts,
//! the second page of the blog, the most used tags.
//!
//! # Architecture: Load Once, Query by Borrow
//!
//! ```text
//! data/*.json ──► Content::load_dir ──► validate ──► content::install
//!                  (or embedded copy)                      │
//!                                                          ▼
//!                              Blog / Portfolio queries borrow &'static data
//! ```
//!
//! Content is immutable after [`content::install`]. Every query is a pure
//! function of the installed documents and its arguments and returns
//! borrowed views (`Vec<&Post>`, `&[String]`) rather than copies.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`blog`] | Post model and blog queries: filters, related posts, search, archive, tags, pagination |
//! | [`portfolio`] | Portfolio model and queries: projects, experience, education, skills |
//! | [`content`] | Document loading, validation, embedded defaults, process-wide state |
//! | [`config`] | `config.toml` loading, validation, and merging onto stock defaults |
//! | [`sections`] | Page sections and navigation entries derived from config |
//! | [`pagination`] | Generic 1-indexed page slicing with navigation flags |
//! | [`dates`] | Date parsing, serde adapters, display formats, durations |
//! | [`text`] | Markdown plain text, word counts, reading time, initials |
//! | [`types`] | Shared value types (`DateRange`) |
//! | [`output`] | CLI output formatting for every query |
//!
//! # Design Decisions
//!
//! ## Published Means Visible
//!
//! Drafts are stored alongside published posts but no blog query returns
//! them, including lookups by slug. Only [`blog::Blog::by_id`] and the raw
//! `posts` field see drafts, which is what validation and `folio check` use.
//!
//! ## Stable Ordering
//!
//! Every sort is stable. Posts published at the same instant, tags with the
//! same count, and related posts with the same overlap keep document order,
//! so output is deterministic for a given pair of documents.
//!
//! ## Lenient Reads, Strict Identity
//!
//! Unknown post statuses read as drafts and unknown project categories as
//! `other`, so a newer document still loads. Duplicate ids or slugs are
//! rejected outright since every lookup depends on them.

pub mod blog;
pub mod config;
pub mod content;
pub mod dates;
pub mod output;
pub mod pagination;
pub mod portfolio;
pub mod sections;
pub mod text;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
