use super::{visible_entries, ReportOptions, ReportWriter};
use crate::forensics::{DigitFrequencyReport, Verdict};
use crate::graph::{AuthorityScore, CentralityDirection};
use anyhow::Result;
use colored::*;
use std::io::Write;

const RULE: &str = "═══════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────";

pub struct TerminalWriter<W: Write> {
    writer: W,
    options: ReportOptions,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, options: ReportOptions) -> Self {
        Self { writer, options }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_banner(&mut self, title: &str) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", RULE.cyan())?;
        writeln!(self.writer, "{}", format!("  {}", title).bold().cyan())?;
        writeln!(self.writer, "{}", RULE.cyan())?;
        Ok(())
    }
}

fn verdict_label(verdict: Verdict) -> ColoredString {
    let text = verdict.to_string().to_uppercase();
    match verdict {
        Verdict::Consistent => text.green(),
        Verdict::Inconclusive => text.yellow(),
        Verdict::Anomalous => text.red().bold(),
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_authority(&mut self, score: &AuthorityScore) -> Result<()> {
        self.write_banner("COMMAND AUTHORITY RANKING")?;

        let entries = visible_entries(score, &self.options);
        let name_width = entries
            .iter()
            .map(|(id, _)| id.chars().count())
            .max()
            .unwrap_or(6)
            .max(6);

        writeln!(
            self.writer,
            "{:>4}  {:<width$}  {:>8}",
            "Rank".bold(),
            "Entity".bold(),
            "Score".bold(),
            width = name_width
        )?;
        writeln!(self.writer, "{}", THIN_RULE)?;

        for (position, (id, value)) in entries.iter().enumerate() {
            let padded = format!("{:<width$}", id, width = name_width);
            let name = if *value > self.options.highlight_threshold {
                padded.yellow().bold()
            } else {
                padded.normal()
            };
            writeln!(self.writer, "{:>4}  {}  {:>8.4}", position + 1, name, value)?;
        }

        if entries.len() < score.len() {
            writeln!(
                self.writer,
                "  ... {} more entities",
                score.len() - entries.len()
            )?;
        }

        writeln!(self.writer, "{}", THIN_RULE)?;
        let walk = match score.direction {
            CentralityDirection::Reversed => "reversed command edges",
            CentralityDirection::Forward => "forward command edges",
        };
        if score.converged {
            writeln!(
                self.writer,
                "Converged after {} iterations ({})",
                score.iterations, walk
            )?;
        } else {
            writeln!(
                self.writer,
                "{} after {} iterations ({}); scores are best-effort",
                "Did not converge".yellow(),
                score.iterations,
                walk
            )?;
        }

        if let Some((leader, value)) = score.leader() {
            writeln!(
                self.writer,
                "{} {} (score {:.4})",
                "AUTHORITY IDENTIFIED:".bold(),
                leader.yellow().bold(),
                value
            )?;
        }
        Ok(())
    }

    fn write_digit_report(&mut self, label: &str, report: &DigitFrequencyReport) -> Result<()> {
        self.write_banner(&format!("LEADING-DIGIT AUDIT: {}", label))?;

        writeln!(
            self.writer,
            "{:>5}  {:>7}  {:>9}  {:>9}  {:>9}",
            "Digit".bold(),
            "Count".bold(),
            "Observed".bold(),
            "Expected".bold(),
            "Delta".bold()
        )?;
        writeln!(self.writer, "{}", THIN_RULE)?;
        for digit in &report.digits {
            writeln!(
                self.writer,
                "{:>5}  {:>7}  {:>8.2}%  {:>8.2}%  {:>9.2}",
                digit.digit,
                digit.count,
                digit.observed * 100.0,
                digit.expected * 100.0,
                digit.deviation_pct()
            )?;
        }
        writeln!(self.writer, "{}", THIN_RULE)?;
        writeln!(self.writer, "Observations: {}", report.observations)?;
        writeln!(
            self.writer,
            "Mean absolute deviation: {:.2}% ({})",
            report.deviation_pct,
            verdict_label(report.verdict)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
