//! Path template matching.
//!
//! # Responsibilities
//! - Compile a template such as `/api/2/domains/{domain}/proxyauth`
//! - Match a raw request path against it segment by segment
//! - Return the captured segments in template order
//!
//! # Design Decisions
//! - The path must start with `/`; segments are split on `/` with no
//!   normalization, so `//` and trailing `/` produce empty segments
//! - Captures never match an empty segment
//! - No regex

/// One compiled segment of a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the request segment exactly.
    Literal(String),
    /// Matches any non-empty request segment.
    Capture(String),
}

/// A compiled path template.
#[derive(Debug, Clone)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Compile a template. `{name}` segments become captures.
    pub fn parse(template: &str) -> Self {
        let segments = template
            .trim_start_matches('/')
            .split('/')
            .map(|seg| {
                match seg.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    Some(name) => Segment::Capture(name.to_string()),
                    None => Segment::Literal(seg.to_string()),
                }
            })
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Match `path`, returning captured values on success.
    pub fn captures<'p>(&self, path: &'p str) -> Option<Vec<&'p str>> {
        let rest = path.strip_prefix('/')?;

        let mut captured = Vec::new();
        let mut parts = rest.split('/');

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Capture(_) if !part.is_empty() => captured.push(part),
                _ => return None,
            }
        }

        // Extra trailing segments
        if parts.next().is_some() {
            return None;
        }

        Some(captured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_template() {
        let pattern = PathPattern::parse("/api/2/domains/{domain}/proxyauth");
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Literal("api".into()),
                Segment::Literal("2".into()),
                Segment::Literal("domains".into()),
                Segment::Capture("domain".into()),
                Segment::Literal("proxyauth".into()),
            ]
        );
    }

    #[test]
    fn test_captures() {
        let pattern = PathPattern::parse("/a/{x}/b/{y}");

        assert_eq!(pattern.captures("/a/1/b/2"), Some(vec!["1", "2"]));
        assert_eq!(pattern.captures("/a/1/b/"), None);
        assert_eq!(pattern.captures("/a//b/2"), None);
        assert_eq!(pattern.captures("/a/1/c/2"), None);
        assert_eq!(pattern.captures("/a/1/b/2/"), None);
        assert_eq!(pattern.captures("/a/1/b/2/3"), None);
        assert_eq!(pattern.captures("a/1/b/2"), None);
        assert_eq!(pattern.captures(""), None);
    }

    #[test]
    fn test_literals_case_sensitive() {
        let pattern = PathPattern::parse("/api/{x}");
        assert!(pattern.captures("/api/1").is_some());
        assert!(pattern.captures("/API/1").is_none());
    }
}
