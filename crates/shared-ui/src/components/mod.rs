// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod input;
pub mod skeleton;
pub mod spinner;
pub mod timeline;

// Primitive wrappers
pub mod dialog;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use dialog::*;
pub use form_select::*;
pub use input::*;
pub use skeleton::*;
pub use spinner::*;
pub use timeline::*;
