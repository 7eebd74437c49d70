pub mod pad;
pub mod renderer;

pub use pad::ControlPad;
pub use renderer::Renderer;
