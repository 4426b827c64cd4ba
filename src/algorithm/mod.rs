/// Sequential region driver built on the step-bounded solver
pub mod driver;
/// Backtracking frames and the resumable placement scan
pub mod frame;
/// Item queue construction and the area pre-check
pub mod items;
/// Step-driven backtracking solver
pub mod solver;
/// Independent check of solved packings
pub mod verification;
