mod debug;
mod screendump;
mod screentext;

pub use debug::*;
pub use screendump::*;
