pub use card::*;
pub use catalog::*;
pub use errors::*;
pub use evaluate::*;
pub use generate::*;
pub use grid::*;
pub use lines::*;
pub use marked::*;
pub use render::*;
pub use store::*;

#[cfg(test)]
mod arbitrary;
mod card;
mod catalog;
mod errors;
mod evaluate;
mod generate;
mod grid;
mod lines;
mod marked;
mod render;
mod store;
