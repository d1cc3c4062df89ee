pub mod gesture;
pub mod minimap;
pub mod session;
pub mod transform;

pub use gesture::InputEvent;
pub use session::{Frame, ViewerImage, ViewerSession};
pub use transform::{Point, Size};
