//! World map - static wall/floor grid with spawn markers
//!
//! The map is a fixed `width × height` grid stored row-major
//! (`index = y * width + x`). Spawn markers (`&`) are consumed while parsing:
//! the cell becomes floor and one spawn point is emitted at the cell centre.

use crate::error::MapError;
use crate::types::PLAYER_START;

/// The built-in 32x16 level.
pub const DEFAULT_MAP: &str = "\
32 16
################################
#.......&..........#...........#
#..####...##...#...#...####....#
#..#.......&...#...#......#....#
#..#...#########...####...#....#
#..........#..........#...#..&.#
########...#...####...#...#....#
#..........#...#..&...#...#....#
#...&......#...#......#........#
#######.####...########...######
#..................&...........#
#..####...##########...####....#
#..&.#.........#.......#..&....#
#....#....&....#...&...#.......#
#..............#.......#.......#
################################
";

/// A single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Floor,
}

/// Static wall/floor grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldMap {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

/// Result of parsing a map: the grid plus one spawn point per `&` marker.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMap {
    pub map: WorldMap,
    pub spawns: Vec<(f32, f32)>,
}

impl WorldMap {
    /// Parse the map text format.
    ///
    /// The first non-empty line declares `<width> <height>`; exactly `height`
    /// rows of exactly `width` characters from `#`, `.`, `&` follow. The
    /// player start cell must be floor.
    pub fn parse(text: &str) -> Result<ParsedMap, MapError> {
        let mut lines = text.lines().map(|l| l.trim_end_matches('\r'));

        let header = lines
            .by_ref()
            .find(|l| !l.trim().is_empty())
            .ok_or(MapError::MissingHeader)?;
        let (width, height) = parse_header(header)?;

        let rows: Vec<&str> = lines.filter(|l| !l.is_empty()).collect();
        let parsed = Self::from_rows(width, height, &rows)?;
        parsed.map.check_player_start()?;
        Ok(parsed)
    }

    /// Build a map from pre-split rows with declared dimensions.
    ///
    /// Does not check the player start cell; see [`WorldMap::check_player_start`].
    pub fn from_rows(width: usize, height: usize, rows: &[&str]) -> Result<ParsedMap, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::Empty { width, height });
        }
        if rows.len() != height {
            return Err(MapError::RowCount {
                expected: height,
                found: rows.len(),
            });
        }

        let mut tiles = Vec::new();
        let mut spawns = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(MapError::RowWidth {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let tile = match ch {
                    '#' => Tile::Wall,
                    '.' => Tile::Floor,
                    '&' => {
                        spawns.push((x as f32 + 0.5, y as f32 + 0.5));
                        Tile::Floor
                    }
                    _ => return Err(MapError::UnknownCell { ch, x, y }),
                };
                tiles.push(tile);
            }
        }

        Ok(ParsedMap {
            map: Self {
                width,
                height,
                tiles,
            },
            spawns,
        })
    }

    /// The built-in level.
    pub fn builtin() -> Result<ParsedMap, MapError> {
        Self::parse(DEFAULT_MAP)
    }

    /// Fails unless the cell under `PLAYER_START` is floor.
    pub fn check_player_start(&self) -> Result<(), MapError> {
        let (x, y) = PLAYER_START;
        if self.is_floor_at(x, y) {
            return Ok(());
        }
        Err(MapError::SpawnBlocked {
            x: x.floor() as usize,
            y: y.floor() as usize,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Tile at integer cell coordinates, `None` outside the grid.
    #[inline]
    pub fn tile(&self, x: i64, y: i64) -> Option<Tile> {
        self.idx(x, y).map(|i| self.tiles[i])
    }

    /// Tile under a world-space point.
    #[inline]
    pub fn tile_at(&self, x: f32, y: f32) -> Option<Tile> {
        self.tile(x.floor() as i64, y.floor() as i64)
    }

    /// Whether the point lies on a floor cell. Outside the grid is never floor.
    #[inline]
    pub fn is_floor_at(&self, x: f32, y: f32) -> bool {
        self.tile_at(x, y) == Some(Tile::Floor)
    }
}

fn parse_header(line: &str) -> Result<(usize, usize), MapError> {
    let mut parts = line.split_whitespace();
    let w = parts.next().and_then(|s| s.parse().ok());
    let h = parts.next().and_then(|s| s.parse().ok());
    match (w, h, parts.next()) {
        (Some(w), Some(h), None) => Ok((w, h)),
        _ => Err(MapError::BadHeader(line.to_string())),
    }
}
