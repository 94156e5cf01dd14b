pub mod cursor;
pub mod dispatch;
pub mod model;
pub mod normalize;
pub mod practice;
