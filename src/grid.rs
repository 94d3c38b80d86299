//! The field: a fixed-size grid of cells, each either fertile or barren.

use failure::Error;
use ndarray::Array2;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use tracing::debug;

use crate::{cartesian_product, Point};

/// A single unit of land.
///
/// A barren cell is also marked visited as soon as it becomes barren, since it
/// can never seed or join a fertile area. Neither flag is ever cleared.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Cell {
    pub barren: bool,
    pub visited: bool,
}

/// A rectangle of barren land, given by two opposite corners. Both corners
/// are included.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rect {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
}

impl Rect {
    pub fn new(x1: usize, y1: usize, x2: usize, y2: usize) -> Rect {
        Rect { x1, y1, x2, y2 }
    }

    /// True if this rectangle is well-formed and lies entirely within a field
    /// of the given size.
    pub fn fits(&self, width: usize, height: usize) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2 && self.x2 < width && self.y2 < height
    }

    fn xs(&self) -> RangeInclusive<usize> {
        self.x1..=self.x2
    }

    fn ys(&self) -> RangeInclusive<usize> {
        self.y1..=self.y2
    }

    /// Return an iterator over every point in this rectangle.
    pub fn cells(&self) -> impl Iterator<Item = Point> {
        cartesian_product(self.xs(), self.ys())
    }
}

static DIRS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// A `width` by `height` field of cells.
///
/// Cells are stored row by row, so the element for the point `(x, y)` lives
/// at index `[[y, x]]`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Return a new field, entirely fertile and unvisited.
    pub fn new(width: usize, height: usize) -> Grid {
        assert!(width > 0 && height > 0, "grid must have at least one cell");
        Grid {
            cells: Array2::from_elem((height, width), Cell::default()),
        }
    }

    /// Return a new field with every rectangle in `barren` made barren.
    pub fn with_barren(width: usize, height: usize, barren: &[Rect]) -> Grid {
        let mut grid = Grid::new(width, height);
        for rect in barren {
            debug!(?rect, "marking barren");
            grid.mark_barren(rect);
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cell(&self, p: Point) -> Cell {
        self.cells[[p.1, p.0]]
    }

    /// Make every cell in `rect` barren.
    ///
    /// The caller must ensure `rect.fits(self.width(), self.height())`; an
    /// out-of-bounds rectangle panics partway through marking.
    pub fn mark_barren(&mut self, rect: &Rect) {
        for (x, y) in rect.cells() {
            let cell = &mut self.cells[[y, x]];
            cell.barren = true;
            cell.visited = true;
        }
    }

    pub fn mark_visited(&mut self, p: Point) {
        self.cells[[p.1, p.0]].visited = true;
    }

    pub fn is_barren(&self, p: Point) -> bool {
        self.cell(p).barren
    }

    pub fn is_visited(&self, p: Point) -> bool {
        self.cell(p).visited
    }

    pub fn is_fertile_unvisited(&self, p: Point) -> bool {
        let cell = self.cell(p);
        !cell.barren && !cell.visited
    }

    /// The number of barren cells. Overlapping rectangles count once.
    pub fn barren_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.barren).count()
    }

    /// Return an iterator over the points orthogonally adjacent to `p` that
    /// lie within the field. There is no wraparound at the edges.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + Clone {
        let (width, height) = (self.width(), self.height());
        DIRS.iter().filter_map(move |&(dx, dy)| {
            let x = p.0 as isize + dx;
            let y = p.1 as isize + dy;
            if x < 0 || y < 0 {
                return None;
            }
            let x = x as usize;
            let y = y as usize;

            if x >= width || y >= height {
                return None;
            }

            Some((x, y))
        })
    }
}

/// Draw the field one row per line: `'#'` for barren land, `'.'` for fertile.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.outer_iter() {
            for cell in row.iter() {
                write!(f, "{}", if cell.barren { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse the picture `Display` draws. Leading and trailing whitespace on
/// each line is ignored, as are blank lines.
impl FromStr for Grid {
    type Err = Error;
    fn from_str(s: &str) -> Result<Grid, Error> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let width = match rows.first() {
            Some(row) => row.chars().count(),
            None => return Err(format_err!("empty grid picture")),
        };

        let mut grid = Grid::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(format_err!(
                    "row {} is {} cells wide, expected {}: {:?}",
                    y,
                    row.chars().count(),
                    width,
                    row
                ));
            }
            for (x, ch) in row.chars().enumerate() {
                match ch {
                    '#' => grid.mark_barren(&Rect::new(x, y, x, y)),
                    '.' => (),
                    _ => return Err(format_err!("bad grid character: {:?}", ch)),
                }
            }
        }
        Ok(grid)
    }
}
