//! SVG path-description builder

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// An SVG path `d` attribute
///
/// Empty when there is nothing to render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathData(String);

impl PathData {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn move_to(mut self, p: DVec2) -> Self {
        self.push(format_args!("M{},{}", p.x, p.y));
        self
    }

    pub fn line_to(mut self, p: DVec2) -> Self {
        self.push(format_args!("L{},{}", p.x, p.y));
        self
    }

    /// Circular arc of `radius` ending at `p`
    pub fn arc_to(mut self, radius: f64, large_arc: bool, sweep: bool, p: DVec2) -> Self {
        self.push(format_args!(
            "A{r},{r} 0 {} {} {},{}",
            u8::from(large_arc),
            u8::from(sweep),
            p.x,
            p.y,
            r = radius
        ));
        self
    }

    pub fn close(mut self) -> Self {
        self.push(format_args!("Z"));
        self
    }

    /// Closed polygon through `points`
    pub fn polygon(points: &[DVec2]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::empty();
        };
        rest.iter()
            .fold(Self::empty().move_to(*first), |path, p| path.line_to(*p))
            .close()
    }

    fn push(&mut self, command: fmt::Arguments<'_>) {
        use fmt::Write;
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        // Writing into a String cannot fail
        let _ = self.0.write_fmt(command);
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PathData {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<PathData> for String {
    fn from(path: PathData) -> Self {
        path.0
    }
}

impl From<String> for PathData {
    fn from(d: String) -> Self {
        Self(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_commands() {
        let path = PathData::empty()
            .move_to(DVec2::new(0.0, 1.5))
            .arc_to(10.0, true, false, DVec2::new(2.0, 3.0))
            .line_to(DVec2::new(4.0, 5.0))
            .close();
        assert_eq!(path.as_str(), "M0,1.5 A10,10 0 1 0 2,3 L4,5 Z");
    }

    #[test]
    fn test_polygon() {
        let path = PathData::polygon(&[DVec2::ZERO, DVec2::X, DVec2::Y]);
        assert_eq!(path.to_string(), "M0,0 L1,0 L0,1 Z");
        assert!(PathData::polygon(&[]).is_empty());
    }
}
