pub mod vecmath;
pub mod states;
pub mod params;
pub mod random;
pub mod spawn;
pub mod stepper;
pub mod scenario;
