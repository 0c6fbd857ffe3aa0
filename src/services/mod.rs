pub mod file_rewriter;
pub mod indent_repairer;
pub mod metadata_reflower;
pub mod pattern_rewriter;
pub mod verifier;
