//! Tables of optimal values over a range of `k`.
//!
//! Each row solves one `k` with the row's mu values batched into a single
//! query set (see [`crate::solve`]). A [`MuLabel`] names a family of mu
//! values as a function of `k`; families undefined at small `k` leave their
//! cell empty (`null` in CSV, `--` in TeX).

mod labels;
mod render;

pub use labels::MuLabel;
pub use render::{render_table, tex_str, TableFormat};
