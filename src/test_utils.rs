pub const SAMPLE_GRID_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/grids/sample.grid"));

pub const SAMPLE_GRID_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/grids/sample.json"));

pub const ENCLOSED_GRID_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/grids/enclosed.grid"));

pub const FRUIT_CORRIDOR_GRID_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/grids/fruit_corridor.grid"
));

pub const DOUBLE_BARRIER_GRID_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/grids/double_barrier.grid"
));
