use crate::protocol::{Request, Response};
use crate::search::{
    search_engines::{AStar, SearchEngine, SearchError, SearchPhase, StepResult},
    Grid,
};
use tracing::{debug, warn};

/// One client's conversation with one engine.
///
/// `start` always begins a fresh search: a session that is already running or
/// finished is reset first, but only once the new grid has been validated, so
/// a rejected grid leaves the previous search untouched.
#[derive(Debug)]
pub struct Session {
    engine: Box<dyn SearchEngine>,
}

impl Session {
    pub fn new(engine: Box<dyn SearchEngine>) -> Self {
        Self { engine }
    }

    pub fn phase(&self) -> SearchPhase {
        self.engine.phase()
    }

    pub fn handle(&mut self, request: Request) -> Response {
        debug!(?request, phase = %self.engine.phase(), "handling request");
        self.dispatch(request).unwrap_or_else(|e| {
            warn!(error = %e, "request failed");
            Response::Error {
                error: e.to_string(),
            }
        })
    }

    /// Handle one line of JSON input and return the JSON response. A line
    /// that is not a valid request produces an error response and does not
    /// touch the engine.
    pub fn handle_line(&mut self, line: &str) -> serde_json::Result<String> {
        let response = match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle(request),
            Err(e) => {
                warn!(error = %e, "malformed request");
                Response::Error {
                    error: format!("malformed request: {}", e),
                }
            }
        };
        serde_json::to_string(&response)
    }

    fn dispatch(&mut self, request: Request) -> Result<Response, SearchError> {
        match request {
            Request::Start { grid } => {
                let grid = Grid::new(grid)?;
                grid.validate()?;
                self.engine.reset();
                let root = self.engine.start(grid)?;
                Ok(Response::Started {
                    node: (&root).into(),
                })
            }
            Request::Step => Ok(match self.engine.step()? {
                StepResult::Running(node) => Response::Running {
                    node: (&node).into(),
                },
                StepResult::Found(node) => Response::Found {
                    path: node.path().to_vec(),
                    node: (&node).into(),
                },
                StepResult::Exhausted => Response::NotFound,
            }),
            Request::Reset => {
                self.engine.reset();
                Ok(Response::Reset)
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Box::<AStar>::default())
    }
}
