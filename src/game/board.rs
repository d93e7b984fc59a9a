use super::Side;

/// Whether a stone is still live or has been captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStatus {
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub owner: Option<Side>,
    pub status: CellStatus,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        owner: None,
        status: CellStatus::Enabled,
    };

    pub fn stone(owner: Side) -> Self {
        Cell {
            owner: Some(owner),
            status: CellStatus::Enabled,
        }
    }

    pub fn captured(owner: Side) -> Self {
        Cell {
            owner: Some(owner),
            status: CellStatus::Disabled,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.owner.is_none()
    }

    /// Empty and still enabled: the only cells a move may go on.
    pub fn is_playable(&self) -> bool {
        self.owner.is_none() && self.status == CellStatus::Enabled
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::EMPTY
    }
}

/// A grid intersection. `x` grows to the right, `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Coord { x, y }
    }
}

/// Ordered boundary points of a region enclosed by one capture.
pub type CapturePath = Vec<Coord>;

/// Width x height grid of cells.
///
/// Storage is x-major: the cell at `(x, y)` lives at index `x * height + y`,
/// and that index is also the action that plays the cell. For square boards
/// this is the `gx * width + gy` encoding used by pointer input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![Cell::EMPTY; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of actions (one per cell)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Action index for a coordinate, `None` if it is off the board.
    pub fn action_of(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.x * self.height + coord.y)
    }

    /// Coordinate for an action index, `None` if it is out of range.
    pub fn coord_of(&self, action: usize) -> Option<Coord> {
        (action < self.len()).then(|| Coord {
            x: action / self.height,
            y: action % self.height,
        })
    }

    /// Get the cell at a coordinate
    ///
    /// Panics if the coordinate is off the board.
    pub fn get(&self, coord: Coord) -> Cell {
        assert!(self.contains(coord), "{coord:?} is off a {}x{} board", self.width, self.height);
        self.cells[coord.x * self.height + coord.y]
    }

    /// Get the cell played by an action, `None` if it is out of range.
    pub fn cell(&self, action: usize) -> Option<Cell> {
        self.cells.get(action).copied()
    }

    /// Set the cell at a coordinate
    ///
    /// Panics if the coordinate is off the board.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        assert!(self.contains(coord), "{coord:?} is off a {}x{} board", self.width, self.height);
        self.cells[coord.x * self.height + coord.y] = cell;
    }

    /// Iterate over every cell with its coordinate, x-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().map(move |(i, &cell)| {
            (
                Coord {
                    x: i / self.height,
                    y: i % self.height,
                },
                cell,
            )
        })
    }
}
