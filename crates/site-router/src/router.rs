//! Path matching against the route table
//!
//! Paths may arrive as hash locations (`#/about?ref=nav`). The router strips
//! the hash prefix, splits off the query string and matches the remaining
//! segments against each record's pattern in table order. Matching never
//! fails: a table without a catch-all record gets the default 404 record
//! appended.

use std::collections::HashMap;

use crate::routes::{Page, RouteRecord, RouteTable};

/// Parameters captured from a path or its query string
pub type RouteParams = HashMap<String, String>;

/// Result of matching a path
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'a> {
    /// The matched record
    pub record: &'a RouteRecord,
    /// Normalized path (no hash prefix, no query)
    pub path: String,
    /// Path parameters, including the catch-all remainder
    pub params: RouteParams,
    /// Query string parameters
    pub query: RouteParams,
}

impl RouteMatch<'_> {
    /// Page rendered by the match
    pub fn page(&self) -> Page {
        self.record.page
    }
}

/// A compiled route pattern
struct RoutePattern {
    /// Pattern segments
    segments: Vec<PatternSegment>,
    /// Index of the owning record in the table
    record: usize,
}

/// Segment of a route pattern
#[derive(Debug, Clone, PartialEq)]
enum PatternSegment {
    /// Matches the segment text, ignoring ASCII case
    Literal(String),
    /// `:name` - captures one segment
    Param(String),
    /// `:name(.*)*` - swallows every remaining segment
    CatchAll(String),
}

/// Matches paths to route records
pub struct Router {
    /// Registered routes, including the fallback
    table: RouteTable,
    /// Compiled patterns in table order
    patterns: Vec<RoutePattern>,
    /// Index of the root catch-all record
    fallback: usize,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(RouteTable::default())
    }
}

impl Router {
    /// Build a router over `table`
    pub fn new(table: RouteTable) -> Self {
        let mut records = table.records().to_vec();
        if !records.iter().any(|r| is_catch_all(&parse_pattern(&r.path))) {
            tracing::debug!("Route table has no catch-all, adding the default 404 route");
            records.push(RouteRecord::not_found());
        }

        let patterns: Vec<RoutePattern> = records
            .iter()
            .enumerate()
            .map(|(record, r)| RoutePattern {
                segments: parse_pattern(&r.path),
                record,
            })
            .collect();

        let fallback = patterns
            .iter()
            .find(|p| is_catch_all(&p.segments))
            .map(|p| p.record)
            .unwrap_or(records.len() - 1);

        Self {
            table: RouteTable::from(records),
            patterns,
            fallback,
        }
    }

    /// The routes this router serves
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Record used when nothing else matches
    pub fn fallback(&self) -> &RouteRecord {
        &self.table.records()[self.fallback]
    }

    /// Record for `page`, or the fallback
    pub fn resolve(&self, page: Page) -> &RouteRecord {
        self.table.find(page).unwrap_or_else(|| self.fallback())
    }

    /// Match a path or hash location
    pub fn match_path(&self, location: &str) -> RouteMatch<'_> {
        let location = location.trim();
        let location = location.strip_prefix('#').unwrap_or(location);

        let (pathname, query) = match location.split_once('?') {
            Some((pathname, query)) => (pathname, Some(query)),
            None => (location, None),
        };
        // A fragment inside a hash location is not part of the route
        let pathname = pathname.split('#').next().unwrap_or_default();

        let path_segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
        let path = format!("/{}", path_segments.join("/"));

        let mut query_params = RouteParams::new();
        parse_query(query, &mut query_params);

        for pattern in &self.patterns {
            if let Some(params) = match_pattern(&pattern.segments, &path_segments) {
                return RouteMatch {
                    record: &self.table.records()[pattern.record],
                    path,
                    params,
                    query: query_params,
                };
            }
        }

        // The catch-all pattern matches every path
        RouteMatch {
            record: self.fallback(),
            path,
            params: RouteParams::new(),
            query: query_params,
        }
    }
}

fn parse_pattern(pattern: &str) -> Vec<PatternSegment> {
    pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| {
            if let Some(param) = s.strip_prefix(':') {
                match param.strip_suffix("(.*)*") {
                    Some(name) => PatternSegment::CatchAll(name.to_string()),
                    None => PatternSegment::Param(param.to_string()),
                }
            } else {
                PatternSegment::Literal(s.to_string())
            }
        })
        .collect()
}

/// Whether the pattern matches every path (`/:name(.*)*` at the root)
fn is_catch_all(segments: &[PatternSegment]) -> bool {
    matches!(segments, [PatternSegment::CatchAll(_)])
}

fn match_pattern(pattern: &[PatternSegment], path: &[&str]) -> Option<RouteParams> {
    let mut params = RouteParams::new();

    for (index, segment) in pattern.iter().enumerate() {
        match segment {
            PatternSegment::CatchAll(name) => {
                let rest = path.get(index..).unwrap_or_default();
                let decoded: Vec<String> = rest.iter().map(|s| decode(s)).collect();
                params.insert(name.clone(), decoded.join("/"));
                return Some(params);
            }
            PatternSegment::Literal(expected) => {
                let actual = path.get(index)?;
                if !expected.eq_ignore_ascii_case(&decode(actual)) {
                    return None;
                }
            }
            PatternSegment::Param(name) => {
                let actual = path.get(index)?;
                params.insert(name.clone(), decode(actual));
            }
        }
    }

    if pattern.len() == path.len() {
        Some(params)
    } else {
        None
    }
}

fn decode(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

fn parse_query(query: Option<&str>, params: &mut RouteParams) {
    if let Some(query) = query {
        for pair in query.split('&') {
            if let Some((key, value)) = pair.split_once('=') {
                if let (Ok(key), Ok(value)) = (urlencoding::decode(key), urlencoding::decode(value)) {
                    params.insert(key.into_owned(), value.into_owned());
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
