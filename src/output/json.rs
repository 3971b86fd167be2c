use super::{visible_entries, ReportOptions, ReportWriter};
use crate::forensics::DigitFrequencyReport;
use crate::graph::AuthorityScore;
use anyhow::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Write;

#[derive(Serialize)]
struct RankedEntity<'a> {
    rank: usize,
    id: &'a str,
    score: f64,
    highlighted: bool,
}

/// Collects every report into one JSON document, written on `finish`
pub struct JsonWriter<W: Write> {
    writer: W,
    options: ReportOptions,
    document: Map<String, Value>,
    audits: Map<String, Value>,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W, options: ReportOptions) -> Self {
        Self {
            writer,
            options,
            document: Map::new(),
            audits: Map::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_authority(&mut self, score: &AuthorityScore) -> Result<()> {
        let ranking: Vec<RankedEntity> = visible_entries(score, &self.options)
            .into_iter()
            .enumerate()
            .map(|(i, (id, value))| RankedEntity {
                rank: i + 1,
                id,
                score: value,
                highlighted: value > self.options.highlight_threshold,
            })
            .collect();

        let mut authority = Map::new();
        authority.insert(
            "leader".to_string(),
            serde_json::to_value(score.leader().map(|(id, _)| id))?,
        );
        authority.insert("ranking".to_string(), serde_json::to_value(ranking)?);
        authority.insert("iterations".to_string(), score.iterations.into());
        authority.insert("converged".to_string(), score.converged.into());
        authority.insert(
            "direction".to_string(),
            serde_json::to_value(score.direction)?,
        );

        self.document
            .insert("authority".to_string(), Value::Object(authority));
        Ok(())
    }

    fn write_digit_report(&mut self, label: &str, report: &DigitFrequencyReport) -> Result<()> {
        self.audits
            .insert(label.to_string(), serde_json::to_value(report)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let mut document = std::mem::take(&mut self.document);
        let audits = std::mem::take(&mut self.audits);
        if !audits.is_empty() {
            document.insert("audits".to_string(), Value::Object(audits));
        }
        let json = serde_json::to_string_pretty(&Value::Object(document))?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Entity, Relation};
    use crate::forensics::DigitFrequencyAuditor;
    use crate::graph::{AuthorityGraph, GraphAuthorityRanker};

    #[test]
    fn test_json_document_combines_reports() {
        let graph = AuthorityGraph::new(
            ["boss", "x"].map(Entity::new),
            vec![Relation::new("boss", "x")],
        )
        .unwrap();
        let score = GraphAuthorityRanker::default().rank(&graph).unwrap();
        let report = DigitFrequencyAuditor::default()
            .audit(&[100.0, 200.0, 300.0])
            .unwrap();

        let mut writer = JsonWriter::new(Vec::new(), ReportOptions::default());
        writer.write_authority(&score).unwrap();
        writer.write_digit_report("organic", &report).unwrap();
        writer.finish().unwrap();

        let value: Value = serde_json::from_slice(&writer.into_inner()).unwrap();
        assert_eq!(value["authority"]["leader"], "boss");
        assert_eq!(value["authority"]["direction"], "reversed");
        assert_eq!(value["authority"]["ranking"][0]["rank"], 1);
        assert_eq!(value["audits"]["organic"]["observations"], 3);
        assert_eq!(value["audits"]["organic"]["digits"].as_array().unwrap().len(), 9);
    }

    #[test]
    fn test_json_without_audits_omits_section() {
        let mut writer = JsonWriter::new(Vec::new(), ReportOptions::default());
        writer.finish().unwrap();
        let value: Value = serde_json::from_slice(&writer.into_inner()).unwrap();
        assert!(value.get("audits").is_none());
    }
}
