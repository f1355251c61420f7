//! Maze Generator Module
//!
//! Fills a [`GridMap`] with a maze by recursive spatial division and picks
//! the start/end cells. Runs exactly once, before the first frame; the map
//! is read-only afterwards.
//!
//! ## Algorithm
//!
//! The interior is divided by an explicit worklist of rectangular regions
//! (no language recursion, so stack depth stays bounded regardless of map
//! size). Each step draws one wall line across a region, carves a single
//! passage of `corridor` cells through it, and pushes the two halves back
//! on the worklist. Regions too small to host a wall plus a passage on each
//! side are left open.
//!
//! Wall lines are never placed flush against a passage in the region's
//! boundary (the candidate filter probes one cell past both ends of the
//! would-be line), so every passage carved by a parent division stays open.
//! The result is therefore fully connected for any corridor width, and for
//! a corridor width of 1 - where lines additionally snap to every other
//! column/row - a perfect maze: a spanning tree of the walkable cells.
//!
//! ## Determinism
//!
//! The generator owns its RNG, seeded at construction. Same seed, same
//! dimensions, same corridor width: bit-identical grids.

use glam::IVec2;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::WorldError;
use super::map::{Cell, GridMap};

/// Split orientation of one division step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Horizontal,
    Vertical,
}

/// A rectangular slice of the interior awaiting division.
///
/// Exists only inside `generate`; never exposed.
#[derive(Debug, Clone, Copy)]
struct Region {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

/// Recursive-division maze generator with an explicitly owned, seeded RNG.
///
/// # Example
///
/// ```
/// use maze_walk_engine::world::{Cell, GridMap, MazeGenerator};
///
/// let mut generator = MazeGenerator::new(33, 33, 2, 7).unwrap();
/// let mut map = GridMap::new(generator.cols(), generator.rows(), Cell::Empty).unwrap();
/// let (start, end) = generator.generate(&mut map).unwrap();
/// assert_ne!(start, end);
/// ```
pub struct MazeGenerator {
    /// Grid height in cells, normalized to odd.
    rows: i32,
    /// Grid width in cells, normalized to odd.
    cols: i32,
    /// Thickness of dividing walls' passages, in cells (>= 1).
    corridor: i32,
    rng: StdRng,
}

impl MazeGenerator {
    /// Creates a generator for a `cols` x `rows` grid.
    ///
    /// Even dimensions are normalized to odd by incrementing, matching the
    /// wall/passage grid layout. `corridor_width` is clamped to at least 1.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidDimensions`] when either dimension is
    /// below 3 - too small to hold a border ring around any interior.
    pub fn new(rows: usize, cols: usize, corridor_width: usize, seed: u64) -> Result<Self, WorldError> {
        if rows < 3 || cols < 3 {
            return Err(WorldError::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }
        let mut rows = rows as i32;
        let mut cols = cols as i32;
        if rows % 2 == 0 {
            rows += 1;
        }
        if cols % 2 == 0 {
            cols += 1;
        }
        Ok(Self {
            rows,
            cols,
            corridor: corridor_width.max(1) as i32,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Normalized grid height in cells.
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    /// Normalized grid width in cells.
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Wall/passage thickness in cells.
    pub fn corridor_width(&self) -> usize {
        self.corridor as usize
    }

    /// Fills `map` with a maze and returns `(start, end)` cell coordinates.
    ///
    /// Clears the map, paints the border ring, divides the interior, then
    /// picks the start and end cells by rejection sampling over the
    /// interior. The end marker is written before the start marker.
    ///
    /// # Errors
    ///
    /// - [`WorldError::DimensionMismatch`] when `map` was not created with
    ///   this generator's [`cols`](Self::cols) x [`rows`](Self::rows).
    /// - [`WorldError::PlacementExhausted`] when start/end sampling runs out
    ///   of attempts (only reachable on pathological configurations where
    ///   walkable interior cells are vanishingly sparse).
    pub fn generate(&mut self, map: &mut GridMap) -> Result<(IVec2, IVec2), WorldError> {
        if map.width() != self.cols as usize || map.height() != self.rows as usize {
            return Err(WorldError::DimensionMismatch {
                expected: (self.cols as usize, self.rows as usize),
                actual: (map.width(), map.height()),
            });
        }

        map.fill(Cell::Empty);

        // Border ring.
        for x in 0..self.cols {
            map.set(x, 0, Cell::Wall);
            map.set(x, self.rows - 1, Cell::Wall);
        }
        for y in 0..self.rows {
            map.set(0, y, Cell::Wall);
            map.set(self.cols - 1, y, Cell::Wall);
        }

        // Divide the interior, depth-first over an explicit worklist.
        let mut pending = vec![Region {
            x: 1,
            y: 1,
            width: self.cols - 2,
            height: self.rows - 2,
        }];
        while let Some(region) = pending.pop() {
            self.divide(region, map, &mut pending);
        }

        let start = self.pick_open_cell(map, None)?;
        let end = self.pick_open_cell(map, Some(start))?;
        map.set(end.x, end.y, Cell::End);
        map.set(start.x, start.y, Cell::Start);

        debug!(
            "generated {}x{} maze, corridor {}, start ({}, {}), end ({}, {})",
            self.cols, self.rows, self.corridor, start.x, start.y, end.x, end.y
        );
        Ok((start, end))
    }

    /// Performs one division step: wall line, passage, two sub-regions.
    fn divide(&mut self, region: Region, map: &mut GridMap, pending: &mut Vec<Region>) {
        let min_extent = self.corridor * 2 + 1;
        if region.width < min_extent || region.height < min_extent {
            // Too small to host a wall and a passage on each side; this
            // region stays open.
            return;
        }

        match self.choose_orientation(region.width, region.height) {
            Orientation::Vertical => {
                let Some(wall_x) = self.pick_wall_line(map, region, Orientation::Vertical) else {
                    return;
                };
                for row in region.y..region.y + region.height {
                    *map.at_mut(wall_x as usize, row as usize) = Cell::Wall;
                }
                let gap_y = self.pick_gap(region.y, region.height);
                for dy in 0..self.corridor {
                    *map.at_mut(wall_x as usize, (gap_y + dy) as usize) = Cell::Empty;
                }
                // Push the right half first; the left half pops next.
                pending.push(Region {
                    x: wall_x + 1,
                    y: region.y,
                    width: region.x + region.width - wall_x - 1,
                    height: region.height,
                });
                pending.push(Region {
                    x: region.x,
                    y: region.y,
                    width: wall_x - region.x,
                    height: region.height,
                });
            }
            Orientation::Horizontal => {
                let Some(wall_y) = self.pick_wall_line(map, region, Orientation::Horizontal) else {
                    return;
                };
                for col in region.x..region.x + region.width {
                    *map.at_mut(col as usize, wall_y as usize) = Cell::Wall;
                }
                let gap_x = self.pick_gap(region.x, region.width);
                for dx in 0..self.corridor {
                    *map.at_mut((gap_x + dx) as usize, wall_y as usize) = Cell::Empty;
                }
                pending.push(Region {
                    x: region.x,
                    y: wall_y + 1,
                    width: region.width,
                    height: region.y + region.height - wall_y - 1,
                });
                pending.push(Region {
                    x: region.x,
                    y: region.y,
                    width: region.width,
                    height: wall_y - region.y,
                });
            }
        }
    }

    /// Splits perpendicular to the longer side; square regions pick at
    /// random. Keeps sub-regions close to square.
    fn choose_orientation(&mut self, width: i32, height: i32) -> Orientation {
        if width < height {
            Orientation::Horizontal
        } else if height < width {
            Orientation::Vertical
        } else if self.rng.gen_range(0..2) == 0 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// Picks the wall line position for a region, uniformly among valid
    /// candidates, or `None` when no candidate survives.
    ///
    /// Candidates leave at least `corridor` cells on both sides. A candidate
    /// is rejected when the cell one step past either end of the line is
    /// walkable - drawing the wall there would seal a passage carved by an
    /// earlier division. The probes use the lenient accessor with a `Wall`
    /// fallback, so the outer border needs no special casing. For unit
    /// corridors the candidates additionally snap to every other line,
    /// which keeps all sub-regions odd-sized.
    fn pick_wall_line(
        &mut self,
        map: &GridMap,
        region: Region,
        orientation: Orientation,
    ) -> Option<i32> {
        let (lo, hi) = match orientation {
            Orientation::Vertical => (
                region.x + self.corridor,
                region.x + region.width - self.corridor - 1,
            ),
            Orientation::Horizontal => (
                region.y + self.corridor,
                region.y + region.height - self.corridor - 1,
            ),
        };
        let step = if self.corridor == 1 { 2 } else { 1 };
        let candidates: Vec<i32> = (lo..=hi)
            .step_by(step)
            .filter(|&pos| match orientation {
                Orientation::Vertical => {
                    !map.get(pos, region.y - 1, Cell::Wall).walkable()
                        && !map.get(pos, region.y + region.height, Cell::Wall).walkable()
                }
                Orientation::Horizontal => {
                    !map.get(region.x - 1, pos, Cell::Wall).walkable()
                        && !map.get(region.x + region.width, pos, Cell::Wall).walkable()
                }
            })
            .collect();
        if candidates.is_empty() {
            None
        } else {
            Some(candidates[self.rng.gen_range(0..candidates.len())])
        }
    }

    /// Picks the passage offset along a wall line spanning `extent` cells
    /// from `lo`. The passage fits entirely within the line; for unit
    /// corridors it snaps to every other cell.
    fn pick_gap(&mut self, lo: i32, extent: i32) -> i32 {
        let hi = lo + extent - self.corridor;
        let step = if self.corridor == 1 { 2 } else { 1 };
        let count = (hi - lo) / step + 1;
        lo + self.rng.gen_range(0..count) * step
    }

    /// Samples uniform interior coordinates until one lands on a non-wall
    /// cell that is not `exclude`. Capped so a pathological map surfaces an
    /// error instead of spinning forever.
    fn pick_open_cell(
        &mut self,
        map: &GridMap,
        exclude: Option<IVec2>,
    ) -> Result<IVec2, WorldError> {
        let budget = (self.rows as u32) * (self.cols as u32) * 16;
        for _ in 0..budget {
            let p = IVec2::new(
                self.rng.gen_range(1..=self.cols - 2),
                self.rng.gen_range(1..=self.rows - 2),
            );
            if map.get(p.x, p.y, Cell::Wall) == Cell::Wall {
                continue;
            }
            if exclude == Some(p) {
                continue;
            }
            return Ok(p);
        }
        Err(WorldError::PlacementExhausted { attempts: budget })
    }
}
