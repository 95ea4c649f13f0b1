pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Body, SimState};
pub use simulation::params::Parameters;
pub use simulation::random::{EntropyRandom, UniformRandom};
pub use simulation::spawn::populate;
pub use simulation::stepper::{bounce_response, step};
pub use simulation::scenario::Scenario;
pub use simulation::vecmath::{normalize_or_zero, wrap_degrees, NVec3};

pub use configuration::config::{BodiesConfig, CameraConfig, RuntimeConfig, SimConfig, WorldConfig};

pub use visualization::viewer3d::run_viewer;
