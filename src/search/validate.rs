use crate::search::{CellKind, Grid, Position, SearchNode};
use ordered_float::OrderedFloat;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathViolation {
    #[error("path does not begin on the start cell, it begins at {0}")]
    WrongStart(Position),
    #[error("move {index} to {position} leaves the grid")]
    OutOfBounds { index: usize, position: Position },
    #[error("move {index} from {from} to {to} is not a single orthogonal step")]
    NotAdjacent {
        index: usize,
        from: Position,
        to: Position,
    },
    #[error("move {index} enters the barrier at {position} without an unspent power-up")]
    BarrierBlocked { index: usize, position: Position },
    #[error("node claims distance {claimed} but its path costs {actual}")]
    CostMismatch { claimed: u32, actual: u32 },
    #[error("node power-up flags do not match its path")]
    PowerUpMismatch,
    #[error("path ends at {0}, not on the goal cell")]
    NotAtGoal(Position),
}

/// Replays the path of `node` over `grid`, checking every move against the
/// movement and barrier rules and the node's own accounting. Returns the
/// distance traveled after each cell of the path.
pub fn validate_path(grid: &Grid, node: &SearchNode) -> Result<Vec<u32>, PathViolation> {
    let path = node.path();
    let start = path[0];
    if grid.get(start) != Some(CellKind::Start) {
        return Err(PathViolation::WrongStart(start));
    }

    let mut current = SearchNode::new_root(start, OrderedFloat(0.));
    let mut costs = vec![0];
    for (index, &position) in path.iter().enumerate().skip(1) {
        let from = current.position();
        if !position.is_adjacent(&from) {
            return Err(PathViolation::NotAdjacent {
                index,
                from,
                to: position,
            });
        }
        let kind = grid
            .get(position)
            .ok_or(PathViolation::OutOfBounds { index, position })?;
        current = current
            .successor(position, kind, OrderedFloat(0.))
            .ok_or(PathViolation::BarrierBlocked { index, position })?;
        costs.push(current.distance_traveled());
    }

    if current.distance_traveled() != node.distance_traveled() {
        return Err(PathViolation::CostMismatch {
            claimed: node.distance_traveled(),
            actual: current.distance_traveled(),
        });
    }
    if current.signature() != node.signature() {
        return Err(PathViolation::PowerUpMismatch);
    }
    Ok(costs)
}

/// Like [`validate_path`], and additionally requires the path to end on the
/// goal cell.
pub fn validate_solution(grid: &Grid, node: &SearchNode) -> Result<u32, PathViolation> {
    validate_path(grid, node)?;
    if grid.get(node.position()) != Some(CellKind::Goal) {
        return Err(PathViolation::NotAtGoal(node.position()));
    }
    Ok(node.distance_traveled())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn walk(grid: &Grid, cells: &[(usize, usize)]) -> SearchNode {
        // Builds the node without consulting the barrier rule, so that the
        // validator is the one to object.
        let mut node = SearchNode::new_root(cells[0].into(), OrderedFloat(0.));
        for &cell in &cells[1..] {
            let position = Position::from(cell);
            let kind = match grid.get(position) {
                Some(CellKind::Barrier) | None => CellKind::Empty,
                Some(kind) => kind,
            };
            node = node.successor(position, kind, OrderedFloat(0.)).unwrap();
        }
        node
    }

    #[test]
    fn good_path_ok() {
        let grid = Grid::from_text("CAS").unwrap();
        let node = walk(&grid, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(validate_path(&grid, &node), Ok(vec![0, 2, 3]));
        assert_eq!(validate_solution(&grid, &node), Ok(3));
    }

    #[test]
    fn barrier_without_fruit() {
        let grid = Grid::from_text("CBS").unwrap();
        let node = walk(&grid, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(
            validate_path(&grid, &node),
            Err(PathViolation::BarrierBlocked {
                index: 1,
                position: Position::new(0, 1)
            })
        );
    }

    #[test]
    fn diagonal_move() {
        let grid = Grid::from_text("C_\n_S").unwrap();
        let node = walk(&grid, &[(0, 0), (1, 1)]);
        assert!(matches!(
            validate_path(&grid, &node),
            Err(PathViolation::NotAdjacent { index: 1, .. })
        ));
    }

    #[test]
    fn wrong_start() {
        let grid = Grid::from_text("C_S").unwrap();
        let node = walk(&grid, &[(0, 1), (0, 2)]);
        assert_eq!(
            validate_path(&grid, &node),
            Err(PathViolation::WrongStart(Position::new(0, 1)))
        );
    }

    #[test]
    fn path_leaving_the_grid() {
        let grid = Grid::from_text("C_S").unwrap();
        let node = walk(&grid, &[(0, 0), (1, 0)]);
        assert_eq!(
            validate_path(&grid, &node),
            Err(PathViolation::OutOfBounds {
                index: 1,
                position: Position::new(1, 0)
            })
        );
    }

    #[test]
    fn cost_mismatch_on_other_grid() {
        let cheap = Grid::from_text("C_S").unwrap();
        let dear = Grid::from_text("CAS").unwrap();
        let node = walk(&cheap, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(
            validate_path(&dear, &node),
            Err(PathViolation::CostMismatch {
                claimed: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn incomplete_solution() {
        let grid = Grid::from_text(SAMPLE_GRID_TEXT).unwrap();
        let node = walk(&grid, &[(0, 0), (1, 0)]);
        assert!(validate_path(&grid, &node).is_ok());
        assert_eq!(
            validate_solution(&grid, &node),
            Err(PathViolation::NotAtGoal(Position::new(1, 0)))
        );
    }
}
