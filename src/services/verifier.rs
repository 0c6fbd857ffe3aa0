use regex::Regex;

use crate::errors::{MigrateError, MigrateResult};
use crate::services::file_rewriter::FileRewriter;
use crate::structs::verification_result::{VerificationResult, VerificationSummary};

pub struct Verifier;

impl Verifier {
    pub fn compile_residue_pattern(pattern: &str) -> MigrateResult<Regex> {
        Regex::new(pattern).map_err(|e| MigrateError::rule_error("residue-pattern", &e.to_string()))
    }

    pub fn count_residue(text: &str, pattern: &Regex) -> usize {
        pattern.find_iter(text).count()
    }

    /// Counts residual occurrences per file. An unreadable file is fatal,
    /// matching the driver's I/O policy.
    pub fn verify_files(files: &[String], pattern: &Regex) -> MigrateResult<VerificationSummary> {
        let mut results = Vec::with_capacity(files.len());

        for file in files {
            let content = FileRewriter::read_document(file)?;
            results.push(VerificationResult {
                file: file.clone(),
                residue_count: Self::count_residue(&content, pattern),
            });
        }

        Ok(VerificationSummary::new(results))
    }
}
