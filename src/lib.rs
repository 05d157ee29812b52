pub mod app;
pub mod camera;
pub mod canvas;
pub mod cli;
pub mod input;
pub mod math;
pub mod orbit;
pub mod picking;
pub mod renderer;
pub mod scene;

pub use camera::{Camera, Viewport};
pub use canvas::Canvas;
pub use input::{InputState, PointerResponse};
pub use orbit::{OrbitControl, OrbitControls};
pub use scene::Scene;
