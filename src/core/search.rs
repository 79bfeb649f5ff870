// Case-insensitive substring search over the site's JSON fixtures, plus
// the markup for the results panel.

use super::constants::SEARCH_MIN_QUERY_CHARS;
use super::playlist::{Release, ReleaseCatalog};
use serde::Deserialize;
use std::fmt::Write;

#[derive(Clone, Debug, Deserialize)]
pub struct Artist {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub genre: Vec<String>,
    #[serde(default)]
    pub image: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ArtistCatalog {
    #[serde(default)]
    pub artists: Vec<Artist>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Post {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct PostCatalog {
    #[serde(default)]
    pub posts: Vec<Post>,
}

#[derive(Clone, Debug, Default)]
pub struct SearchIndex {
    pub artists: Vec<Artist>,
    pub releases: Vec<Release>,
    pub posts: Vec<Post>,
}

#[derive(Debug, Default)]
pub struct SearchResults<'a> {
    pub artists: Vec<&'a Artist>,
    pub releases: Vec<&'a Release>,
    pub posts: Vec<&'a Post>,
}

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty() && self.releases.is_empty() && self.posts.is_empty()
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn any_contains_ci(values: &[String], needle_lower: &str) -> bool {
    values.iter().any(|v| contains_ci(v, needle_lower))
}

impl SearchIndex {
    pub fn new(artists: ArtistCatalog, releases: ReleaseCatalog, posts: PostCatalog) -> Self {
        Self {
            artists: artists.artists,
            releases: releases.releases,
            posts: posts.posts,
        }
    }

    pub fn len(&self) -> usize {
        self.artists.len() + self.releases.len() + self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `None` means the query is too short and the panel should be cleared.
    pub fn search(&self, query: &str) -> Option<SearchResults<'_>> {
        if query.chars().count() < SEARCH_MIN_QUERY_CHARS {
            return None;
        }
        let q = query.to_lowercase();
        Some(SearchResults {
            artists: self
                .artists
                .iter()
                .filter(|a| {
                    contains_ci(&a.name, &q) || contains_ci(&a.bio, &q) || any_contains_ci(&a.genre, &q)
                })
                .collect(),
            releases: self
                .releases
                .iter()
                .filter(|r| {
                    contains_ci(&r.title, &q)
                        || contains_ci(&r.artist, &q)
                        || any_contains_ci(&r.genre, &q)
                })
                .collect(),
            posts: self
                .posts
                .iter()
                .filter(|p| {
                    contains_ci(&p.title, &q)
                        || contains_ci(&p.excerpt, &q)
                        || contains_ci(&p.category, &q)
                })
                .collect(),
        })
    }
}

/// Minimal text escaping for values interpolated into markup.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_results(results: &SearchResults<'_>) -> String {
    if results.is_empty() {
        return "<div class=\"search-no-results\">No results found</div>".to_string();
    }
    let mut html = String::new();

    if !results.artists.is_empty() {
        html.push_str("<div class=\"search-category\"><h4>Artists</h4>");
        for a in &results.artists {
            _ = write!(
                html,
                "<a href=\"artists/{slug}.html\" class=\"search-result-item\">\
                 <img src=\"{img}\" alt=\"{name}\">\
                 <div><div class=\"search-result-title\">{name}</div>\
                 <div class=\"search-result-subtitle\">{genres}</div></div></a>",
                slug = escape_html(&a.slug),
                img = escape_html(&a.image),
                name = escape_html(&a.name),
                genres = escape_html(&a.genre.join(", ")),
            );
        }
        html.push_str("</div>");
    }

    if !results.releases.is_empty() {
        html.push_str("<div class=\"search-category\"><h4>Releases</h4>");
        for r in &results.releases {
            _ = write!(
                html,
                "<a href=\"#releases\" class=\"search-result-item\">\
                 <img src=\"{img}\" alt=\"{title}\">\
                 <div><div class=\"search-result-title\">{title}</div>\
                 <div class=\"search-result-subtitle\">{artist}</div></div></a>",
                img = escape_html(&r.cover_image),
                title = escape_html(&r.title),
                artist = escape_html(&r.artist),
            );
        }
        html.push_str("</div>");
    }

    if !results.posts.is_empty() {
        html.push_str("<div class=\"search-category\"><h4>Blog Posts</h4>");
        for p in &results.posts {
            _ = write!(
                html,
                "<a href=\"blog.html#{slug}\" class=\"search-result-item\">\
                 <div><div class=\"search-result-title\">{title}</div>\
                 <div class=\"search-result-subtitle\">{category} • {date}</div></div></a>",
                slug = escape_html(&p.slug),
                title = escape_html(&p.title),
                category = escape_html(&p.category),
                date = escape_html(&p.date),
            );
        }
        html.push_str("</div>");
    }

    html
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchShortcut {
    Open,
    Close,
}

/// Ctrl/Cmd+K opens the overlay, Escape closes it.
pub fn shortcut_for_key(key: &str, ctrl: bool, meta: bool) -> Option<SearchShortcut> {
    match key {
        "k" | "K" if ctrl || meta => Some(SearchShortcut::Open),
        "Escape" => Some(SearchShortcut::Close),
        _ => None,
    }
}
