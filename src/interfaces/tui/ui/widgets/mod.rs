//! 可复用的 UI 组件

pub mod input_field;
pub mod popup;

pub use input_field::InputField;
pub use popup::{Popup, centered_rect};
