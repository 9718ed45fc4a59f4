use crate::search::{CellKind, Position, SearchNode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    Start { grid: Vec<Vec<CellKind>> },
    Step,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    Started {
        node: NodePayload,
    },
    Running {
        node: NodePayload,
    },
    Found {
        node: NodePayload,
        path: Vec<Position>,
    },
    NotFound,
    Reset,
    Error {
        error: String,
    },
}

/// The wire form of a [`SearchNode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePayload {
    pub row: usize,
    pub col: usize,
    pub distance_traveled: u32,
    pub has_power_up: bool,
    pub used_power_up: bool,
    pub estimated_total_cost: f64,
    pub path: Vec<Position>,
}

impl From<&SearchNode> for NodePayload {
    fn from(node: &SearchNode) -> Self {
        Self {
            row: node.row(),
            col: node.col(),
            distance_traveled: node.distance_traveled(),
            has_power_up: node.has_power_up(),
            used_power_up: node.used_power_up(),
            estimated_total_cost: node.estimated_total_cost().into_inner(),
            path: node.path().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;
    use serde_json::json;

    #[test]
    fn parse_requests() {
        let start: Request = serde_json::from_str(r#"{"op":"start","grid":[["C","_","S"]]}"#)
            .unwrap();
        assert_eq!(
            start,
            Request::Start {
                grid: vec![vec![CellKind::Start, CellKind::Empty, CellKind::Goal]]
            }
        );
        assert_eq!(
            serde_json::from_str::<Request>(r#"{"op":"step"}"#).unwrap(),
            Request::Step
        );
        assert_eq!(
            serde_json::from_str::<Request>(r#"{"op":"reset"}"#).unwrap(),
            Request::Reset
        );
    }

    #[test]
    fn reject_unknown_requests() {
        assert!(serde_json::from_str::<Request>(r#"{"op":"jump"}"#).is_err());
        assert!(serde_json::from_str::<Request>(r#"{"op":"start","grid":[["X"]]}"#).is_err());
        assert!(serde_json::from_str::<Request>(r#"{"op":"start"}"#).is_err());
    }

    #[test]
    fn node_payload_field_names() {
        let node = SearchNode::new_root(Position::new(1, 2), OrderedFloat(2.5));
        let value = serde_json::to_value(NodePayload::from(&node)).unwrap();
        assert_eq!(
            value,
            json!({
                "row": 1,
                "col": 2,
                "distanceTraveled": 0,
                "hasPowerUp": false,
                "usedPowerUp": false,
                "estimatedTotalCost": 2.5,
                "path": [[1, 2]],
            })
        );
    }

    #[test]
    fn response_tags() {
        assert_eq!(
            serde_json::to_value(Response::NotFound).unwrap(),
            json!({"status": "not_found"})
        );
        assert_eq!(
            serde_json::to_value(Response::Reset).unwrap(),
            json!({"status": "reset"})
        );
        assert_eq!(
            serde_json::to_value(Response::Error {
                error: "boom".to_owned()
            })
            .unwrap(),
            json!({"status": "error", "error": "boom"})
        );
    }
}
