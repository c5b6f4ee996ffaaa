pub mod commit_draw;
pub mod draw;
pub mod expire_commitment;
pub mod initialize;
pub mod insert;
pub mod inspect;
pub mod reveal_draw;

pub use commit_draw::*;
pub use draw::*;
pub use expire_commitment::*;
pub use initialize::*;
pub use insert::*;
pub use inspect::*;
pub use reveal_draw::*;
