// Reusable library API: used by the `solve` CLI and the local bench runner
pub mod cipher_char;
pub mod errors;
pub mod matcher;
pub mod parser;
pub mod patterns;
pub mod report;
pub mod solver;
pub mod translation;
pub mod wordlist;

pub use errors::SolveError;
pub use solver::{SearchObserver, Solution, SolveOptions, Solver, solve};
pub use translation::Translation;
pub use wordlist::WordList;
