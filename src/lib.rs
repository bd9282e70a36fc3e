//
// lib.rs
// dirsim
//
// Library entry that re-exports modules so the binary and any external users can access CLI parsing, directory scanning, the suffix-array core, and report rendering.
//
// Public crate interface: re-export modules used by the binary and tests.
pub mod cli;
pub mod compare;
pub mod lcs;
pub mod report;
pub mod scanner;
pub mod score;
pub mod suffix;

pub use cli::{build_options, Args, Options};
pub use compare::{compare_dirs, Report};
pub use lcs::longest_common_substring_length;
pub use scanner::{scan_dir, FileEntry};
pub use score::{is_equivalent, similarity_percent};
pub use suffix::{build_lcp_array, build_suffix_array, SuffixError};
