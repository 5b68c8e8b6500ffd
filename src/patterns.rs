//! Preset patterns that can be stamped onto the grid

/// A named set of live cells, given as (x, y) offsets from the top-left
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Bounding box as (width, height)
    pub fn size(&self) -> (usize, usize) {
        let w = self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0);
        let h = self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0);
        (w, h)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "lwss",  // lightweight spaceship
        cells: &[(1, 0), (4, 0), (0, 1), (0, 2), (4, 2), (0, 3), (1, 3), (2, 3), (3, 3)],
    },
];

/// Look up a preset by name, ignoring case, dashes and underscores
pub fn find(name: &str) -> Option<&'static Pattern> {
    let wanted = normalize(name);
    PATTERNS.iter().find(|p| normalize(p.name) == wanted)
}

/// Comma-separated list of preset names, for error messages and help
pub fn names() -> String {
    PATTERNS.iter().map(|p| p.name).collect::<Vec<_>>().join(", ")
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}
