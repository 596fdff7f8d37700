//! Simulation report generation.

use crate::combat::{DungeonResult, RunOutcome};
use serde::Serialize;

/// The numbers kept from one simulated run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub casualties: bool,
    pub loot_count: usize,
    pub enemies_defeated: u32,
    pub total_enemies: u32,
    pub duration: u32,
}

impl RunSummary {
    pub fn from_result(result: &DungeonResult) -> Self {
        Self {
            outcome: result.outcome,
            casualties: result.casualties,
            loot_count: result.loot.len(),
            enemies_defeated: result.stats.enemies_defeated,
            total_enemies: result.stats.total_enemies,
            duration: result.duration.amount(),
        }
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub cleared: u32,
    pub defeated: u32,
    pub retreated: u32,

    pub success_rate: f64,
    /// Share of successful runs that ended under the low-health threshold.
    pub casualty_rate: f64,
    pub mean_loot: f64,
    pub mean_enemies_defeated: f64,
    pub mean_enemies: f64,
    /// Minutes for list runs, steps for explorer runs.
    pub mean_duration: f64,

    #[serde(skip)]
    pub runs: Vec<RunSummary>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunSummary>) -> Self {
        let num_runs = runs.len() as u32;
        let count =
            |outcome: RunOutcome| runs.iter().filter(|r| r.outcome == outcome).count() as u32;
        let cleared = count(RunOutcome::Cleared);
        let defeated = count(RunOutcome::Defeated);
        let retreated = count(RunOutcome::Retreated);
        let casualties = runs.iter().filter(|r| r.casualties).count() as u32;

        let divisor = num_runs.max(1) as f64;
        let mean = |f: fn(&RunSummary) -> f64| runs.iter().map(f).sum::<f64>() / divisor;

        Self {
            num_runs,
            cleared,
            defeated,
            retreated,
            success_rate: cleared as f64 / divisor,
            casualty_rate: casualties as f64 / cleared.max(1) as f64,
            mean_loot: mean(|r| r.loot_count as f64),
            mean_enemies_defeated: mean(|r| r.enemies_defeated as f64),
            mean_enemies: mean(|r| r.total_enemies as f64),
            mean_duration: mean(|r| r.duration as f64),
            runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} cleared, {} defeated, {} retreated\n\n",
            self.num_runs, self.cleared, self.defeated, self.retreated
        ));

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Success Rate:        {:.1}%\n",
            self.success_rate * 100.0
        ));
        report.push_str(&format!(
            "  Casualty Rate:       {:.1}%\n",
            self.casualty_rate * 100.0
        ));
        report.push_str(&format!(
            "  Enemies Defeated:    {:.1} / {:.1}\n",
            self.mean_enemies_defeated, self.mean_enemies
        ));
        report.push_str(&format!(
            "  Avg Duration:        {:.1}\n\n",
            self.mean_duration
        ));

        report.push_str("── LOOT ─────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Items per Run:   {:.2}\n", self.mean_loot));

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
