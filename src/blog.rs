//! Blog posts, categories and the blog query layer.
//!
//! The blog document is a flat list of posts plus the category and tag
//! vocabularies:
//!
//! ```json
//! {
//!   "posts": [
//!     {
//!       "id": 1,
//!       "slug": "react-hooks-in-practice",
//!       "title": "React Hooks in Practice",
//!       "excerpt": "...",
//!       "content": "markdown body",
//!       "category": "frontend",
//!       "tags": ["react", "javascript"],
//!       "publishedAt": "2024-03-01T09:00:00Z",
//!       "status": "published",
//!       "featured": true
//!     }
//!   ],
//!   "categories": [{ "name": "Frontend", "slug": "frontend" }],
//!   "tags": ["react", "javascript"]
//! }
//! ```
//!
//! ## Visibility
//!
//! Only posts with `status = "published"` are externally visible. Every
//! query below filters drafts out first; it is a hard filter, not an
//! ordering. [`Blog::by_id`] is the one internal accessor that sees drafts.
//!
//! ## Ordering
//!
//! Results keep document order unless a query says otherwise. Every sort is
//! stable, so ties fall back to document order.

use crate::dates;
use crate::pagination::{self, Paginated};
use crate::text;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_RECENT_POSTS: usize = 5;
pub const DEFAULT_RELATED_POSTS: usize = 3;
pub const DEFAULT_POPULAR_TAGS: usize = 10;
pub const DEFAULT_POSTS_PER_PAGE: usize = 6;

/// Publication state of a post. Unknown values read as `Draft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Published,
    #[serde(other)]
    Draft,
}

/// Search-engine metadata attached to a post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seo {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

/// A single blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Internal identifier, unique among posts.
    pub id: u64,
    /// Stable external lookup key, unique among posts.
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    /// Markdown body.
    #[serde(default)]
    pub content: String,
    /// Category slug; matches an entry of [`Blog::categories`].
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(with = "dates::timestamp_format")]
    pub published_at: DateTime<Utc>,
    pub status: PostStatus,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// Author-supplied reading time in minutes, overrides the estimate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    pub fn year(&self) -> i32 {
        self.published_at.year()
    }

    /// Calendar month of publication, 1 = January.
    pub fn month(&self) -> u32 {
        self.published_at.month()
    }

    /// Minutes to read: the author's `readTime` if set, otherwise estimated
    /// from the rendered body.
    pub fn reading_time(&self, words_per_minute: u32) -> u32 {
        self.read_time
            .unwrap_or_else(|| text::reading_time(&self.content, words_per_minute))
    }

    /// Number of this post's tags that also appear on `other`.
    pub fn shared_tag_count(&self, other: &Post) -> usize {
        self.tags.iter().filter(|t| other.tags.contains(t)).count()
    }

    fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    fn has_tag_containing(&self, needle: &str) -> bool {
        self.tags.iter().any(|t| text::contains_folded(t, needle))
    }

    fn matches_query(&self, needle: &str) -> bool {
        text::contains_folded(&self.title, needle)
            || text::contains_folded(&self.excerpt, needle)
            || text::contains_folded(&self.content, needle)
            || self.has_tag_containing(needle)
    }
}

/// An entry of the category vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A category together with its number of published posts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount<'a> {
    #[serde(flatten)]
    pub category: &'a Category,
    pub post_count: usize,
}

/// Number of published posts carrying a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// One page of date-sorted published posts.
pub type PostPage<'a> = Paginated<&'a Post>;

/// The blog document and its queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Blog {
    pub posts: Vec<Post>,
    pub categories: Vec<Category>,
    pub tags: Vec<String>,
}

impl Blog {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            ..Self::default()
        }
    }

    fn published_iter(&self) -> impl Iterator<Item = &Post> + '_ {
        self.posts.iter().filter(|p| p.is_published())
    }

    /// All published posts in document order.
    pub fn published(&self) -> Vec<&Post> {
        self.published_iter().collect()
    }

    /// Published posts flagged as featured.
    pub fn featured(&self) -> Vec<&Post> {
        self.published_iter().filter(|p| p.featured).collect()
    }

    /// Look up a published post by its slug (exact, case-sensitive).
    ///
    /// Unlike the site's original lookup, drafts are never returned, so
    /// [`Blog::seo_for`] never exposes a draft's SEO block either.
    pub fn by_slug(&self, slug: &str) -> Option<&Post> {
        self.published_iter().find(|p| p.slug == slug)
    }

    /// Look up any post, drafts included, by internal id.
    pub fn by_id(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Published posts in `category` (case-insensitive equality).
    pub fn by_category(&self, category: &str) -> Vec<&Post> {
        self.published_iter()
            .filter(|p| p.in_category(category))
            .collect()
    }

    /// Published posts with any tag containing `tag` (case-insensitive substring).
    pub fn by_tag(&self, tag: &str) -> Vec<&Post> {
        let needle = tag.to_lowercase();
        self.published_iter()
            .filter(|p| p.has_tag_containing(&needle))
            .collect()
    }

    /// Published posts, newest first. Equal timestamps keep document order.
    pub fn sorted_by_date(&self) -> Vec<&Post> {
        let mut posts = self.published();
        sort_newest_first(&mut posts);
        posts
    }

    /// The `limit` newest published posts.
    pub fn recent(&self, limit: usize) -> Vec<&Post> {
        let mut posts = self.sorted_by_date();
        posts.truncate(limit);
        posts
    }

    /// Up to `limit` other published posts sharing the category or a tag
    /// with `post`, most shared tags first.
    pub fn related(&self, post: &Post, limit: usize) -> Vec<&Post> {
        let mut ranked: Vec<(usize, &Post)> = self
            .published_iter()
            .filter(|p| p.id != post.id)
            .map(|p| (p.shared_tag_count(post), p))
            .filter(|(shared, p)| {
                *shared > 0 || (!post.category.is_empty() && p.in_category(&post.category))
            })
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
        ranked.into_iter().take(limit).map(|(_, p)| p).collect()
    }

    /// Published posts whose title, excerpt, body or tags contain `query`.
    pub fn search(&self, query: &str) -> Vec<&Post> {
        let needle = query.to_lowercase();
        self.published_iter()
            .filter(|p| p.matches_query(&needle))
            .collect()
    }

    /// Published posts from calendar year `year` (UTC).
    pub fn by_year(&self, year: i32) -> Vec<&Post> {
        self.published_iter().filter(|p| p.year() == year).collect()
    }

    /// Published posts from `year` and 1-indexed `month`. Months outside
    /// 1..=12 match nothing.
    pub fn by_year_month(&self, year: i32, month: u32) -> Vec<&Post> {
        self.published_iter()
            .filter(|p| p.year() == year && p.month() == month)
            .collect()
    }

    /// Distinct publication years, newest first.
    pub fn archive_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.published_iter().map(Post::year).collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        years
    }

    /// How many published posts carry each tag, in order of first appearance.
    ///
    /// A tag listed twice on the same post counts once.
    pub fn tag_counts(&self) -> Vec<TagCount> {
        let mut counts: Vec<TagCount> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for post in self.published_iter() {
            for (i, tag) in post.tags.iter().enumerate() {
                if post.tags[..i].contains(tag) {
                    continue;
                }
                match index.get(tag.as_str()) {
                    Some(&slot) => counts[slot].count += 1,
                    None => {
                        index.insert(tag, counts.len());
                        counts.push(TagCount {
                            tag: tag.clone(),
                            count: 1,
                        });
                    }
                }
            }
        }
        counts
    }

    /// The `limit` most used tags. Ties keep first-appearance order.
    pub fn popular_tags(&self, limit: usize) -> Vec<TagCount> {
        let mut counts = self.tag_counts();
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts.truncate(limit);
        counts
    }

    /// Distinct tags across published posts, sorted.
    pub fn all_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self
            .published_iter()
            .flat_map(|p| p.tags.iter().map(String::as_str))
            .collect();
        tags.sort_unstable();
        tags.dedup();
        tags
    }

    /// Page `page` (1-indexed) of date-sorted published posts.
    pub fn paginate(&self, page: usize, page_size: usize) -> PostPage<'_> {
        pagination::paginate(&self.sorted_by_date(), page, page_size)
    }

    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Categories with at least one published post, in vocabulary order.
    pub fn categories_with_post_count(&self) -> Vec<CategoryCount<'_>> {
        self.categories
            .iter()
            .map(|category| CategoryCount {
                category,
                post_count: self.by_category(&category.slug).len(),
            })
            .filter(|c| c.post_count > 0)
            .collect()
    }

    /// Slugs of all published posts.
    pub fn all_slugs(&self) -> Vec<&str> {
        self.published_iter().map(|p| p.slug.as_str()).collect()
    }

    pub fn all_category_slugs(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.slug.as_str()).collect()
    }

    /// SEO block of the published post at `slug`, if it has one.
    pub fn seo_for(&self, slug: &str) -> Option<&Seo> {
        self.by_slug(slug).and_then(|p| p.seo.as_ref())
    }
}

/// Order query results newest first. The sort is stable, so posts with equal
/// timestamps keep their relative order.
pub fn sort_newest_first(posts: &mut [&Post]) {
    posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}
