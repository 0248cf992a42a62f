use crate::error::{GraphError, Result};

/// Inclusive hop window for one traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HopRange {
    min: usize,
    max: Option<usize>,
}

impl HopRange {
    #[must_use]
    pub const fn unbounded(min: usize) -> Self {
        Self { min, max: None }
    }

    #[must_use]
    pub const fn bounded(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    #[must_use]
    pub fn contains(&self, hop: usize) -> bool {
        hop >= self.min && self.max.map_or(true, |max| hop <= max)
    }

    /// True when no hop count satisfies the window (child bound of 0).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.max.is_some_and(|max| max < self.min)
    }

    /// Whether a walk standing at `hop` may take one more step.
    #[must_use]
    pub fn allows_step_from(&self, hop: usize) -> bool {
        self.max.map_or(true, |max| hop < max)
    }
}

/// Parsed `"PARENTS:CHILDREN"` depth expression.
///
/// The two sides are asymmetric: the parent window starts at hop 0 (the
/// target itself matches and is filtered out by the traversal engine), the
/// child window starts at hop 1, and an explicit child bound of 0 means "no
/// child traversal at all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthSpec {
    pub parents: HopRange,
    pub children: HopRange,
}

enum Side {
    Parent,
    Child,
}

impl DepthSpec {
    /// Parse a depth expression.
    ///
    /// Each side is `*` (unlimited), empty (defaults to unlimited), a
    /// non-negative hop count, or `-1` as an alternate spelling of
    /// unlimited (older extraction tooling emitted signed bounds).
    pub fn parse(raw: &str) -> Result<Self> {
        let mut segments = raw.split(':');
        let (Some(up), Some(down), None) = (segments.next(), segments.next(), segments.next())
        else {
            return Err(GraphError::MalformedDepthSpec(raw.to_string()));
        };

        Ok(Self {
            parents: parse_side(raw, up, &Side::Parent)?,
            children: parse_side(raw, down, &Side::Child)?,
        })
    }
}

fn parse_side(raw: &str, token: &str, side: &Side) -> Result<HopRange> {
    let token = token.trim();
    let min = match side {
        Side::Parent => 0,
        Side::Child => 1,
    };

    if token.is_empty() || token == "*" || token == "-1" {
        return Ok(HopRange::unbounded(min));
    }

    let bound: usize = token
        .parse()
        .map_err(|_| GraphError::MalformedDepthSpec(raw.to_string()))?;
    Ok(HopRange::bounded(min, bound))
}
