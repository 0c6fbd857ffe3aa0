use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct VerificationResult {
    pub file: String,
    pub residue_count: usize,
}

impl VerificationResult {
    pub fn is_clean(&self) -> bool {
        self.residue_count == 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationSummary {
    pub results: Vec<VerificationResult>,
    pub total_residue: usize,
}

impl VerificationSummary {
    pub fn new(results: Vec<VerificationResult>) -> Self {
        let total_residue = results.iter().map(|r| r.residue_count).sum();
        Self {
            results,
            total_residue,
        }
    }

    pub fn all_clean(&self) -> bool {
        self.total_residue == 0
    }

    pub fn print_summary(&self) {
        for result in &self.results {
            if result.is_clean() {
                log::info!("✅ {}: 0 residual calls", result.file);
            } else {
                log::info!("❌ {}: {} residual calls", result.file, result.residue_count);
            }
        }

        if self.all_clean() {
            log::info!("🎉 All files migrated, no residual calls remain");
        } else {
            log::info!("⚠️ {} residual calls remain", self.total_residue);
        }
    }
}
