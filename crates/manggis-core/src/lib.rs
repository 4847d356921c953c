pub mod consts;
pub mod contour;
pub mod error;
pub mod frame;
pub mod io;
pub mod lobes;
pub mod pipeline;
pub mod preprocess;
pub mod render;
pub mod segment;
