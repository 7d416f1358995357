//! Console reporter with colored output

use crate::analyzer::ScoreCalculator;
use crate::{AnalysisInput, AnalysisResult, Difficulty};
use colored::Colorize;
use std::fmt::Write;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single analysis result
    pub fn report(&self, input: &AnalysisInput, result: &AnalysisResult) {
        print!("{}", self.render(input, result));
    }

    /// Report in quiet mode (just score)
    pub fn report_quiet(&self, input: &AnalysisInput, result: &AnalysisResult) {
        println!("{}", self.render_quiet(input, result));
    }

    pub fn render_quiet(&self, input: &AnalysisInput, result: &AnalysisResult) -> String {
        format!(
            "{}: {} ({})",
            display_or_na(&input.domain),
            result.score,
            self.colorize_difficulty(result.difficulty)
        )
    }

    /// Full report as a string
    pub fn render(&self, input: &AnalysisInput, result: &AnalysisResult) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = self.write_header(&mut out, input, result);
        let _ = self.write_score(&mut out, result);
        let _ = self.write_quick_wins(&mut out, result);
        let _ = self.write_roadmap(&mut out, result);
        let _ = self.write_projections(&mut out, result);
        out
    }

    fn write_header(
        &self,
        out: &mut String,
        input: &AnalysisInput,
        result: &AnalysisResult,
    ) -> std::fmt::Result {
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            format!("🔎 Análisis SEO: {}", display_or_na(&input.domain)).bold()
        )?;
        writeln!(out, "   Competidor: {}", display_or_na(&input.competitor))?;
        writeln!(out, "   Keywords: {}", input.keyword_list().join(", "))?;
        writeln!(
            out,
            "   Score actualizado: {}/100 · Dificultad {}",
            result.score,
            self.colorize_difficulty(result.difficulty)
        )?;
        writeln!(out)
    }

    fn write_score(&self, out: &mut String, result: &AnalysisResult) -> std::fmt::Result {
        writeln!(
            out,
            "   Opportunity score: {} {}",
            self.create_score_bar(result.score),
            self.colorize_difficulty(result.difficulty).bold()
        )?;
        if self.verbose {
            writeln!(
                out,
                "   {}",
                ScoreCalculator::difficulty_description(result.difficulty).dimmed()
            )?;
        }
        writeln!(out)
    }

    fn write_quick_wins(&self, out: &mut String, result: &AnalysisResult) -> std::fmt::Result {
        writeln!(out, "   {}", "Quick wins:".bold())?;
        for win in &result.quick_wins {
            writeln!(out, "   {} {}", "→".cyan(), win)?;
        }
        writeln!(out)
    }

    fn write_roadmap(&self, out: &mut String, result: &AnalysisResult) -> std::fmt::Result {
        writeln!(out, "   {}", "Roadmap:".bold())?;
        for phase in &result.roadmap {
            writeln!(out, "   {}", phase.title.bold())?;
            for task in &phase.items {
                writeln!(out, "     {} {}", "•".dimmed(), task)?;
            }
        }
        writeln!(out)
    }

    fn write_projections(&self, out: &mut String, result: &AnalysisResult) -> std::fmt::Result {
        writeln!(out, "   {}", "Proyecciones:".bold())?;
        for projection in &result.projections {
            writeln!(
                out,
                "   {:<18} {}",
                projection.label,
                projection.value.bold()
            )?;
            writeln!(out, "   {:<18} {}", "", projection.description.dimmed())?;
        }
        writeln!(out)
    }

    fn colorize_difficulty(&self, difficulty: Difficulty) -> colored::ColoredString {
        let s = difficulty.to_string();
        if !self.use_colors {
            return s.normal();
        }
        match difficulty {
            Difficulty::Baja => s.green(),
            Difficulty::Media => s.yellow(),
            Difficulty::Alta => s.red(),
        }
    }

    fn create_score_bar(&self, score: u8) -> String {
        let filled = (score as usize * 20) / 100;
        let empty = 20 - filled;

        let bar = format!("[{}{}] {:>3}", "█".repeat(filled), "░".repeat(empty), score);

        if self.use_colors {
            if score > 78 {
                bar.green().to_string()
            } else if score > 62 {
                bar.yellow().to_string()
            } else {
                bar.red().to_string()
            }
        } else {
            bar
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn display_or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        "N/A"
    } else {
        value
    }
}
