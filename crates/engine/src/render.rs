//! Text and JSON rendering of a forge report.

use std::fmt::Write as _;

use crate::config::OutputFormat;
use crate::roster::ForgeReport;

pub fn render(report: &ForgeReport, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

pub fn render_text(report: &ForgeReport) -> String {
    let mut out = String::from("--- FORGING HEROES ---\n");

    // Writing to a String cannot fail.
    for (index, hero) in report.heroes.iter().enumerate() {
        let _ = write!(
            out,
            "\nHero {} ({}):\n{}\n",
            index + 1,
            hero.archetype,
            hero.character
        );
    }

    if !report.rejections.is_empty() {
        out.push_str("\nForge safety checks:\n");
        for rejection in &report.rejections {
            let _ = writeln!(out, "- {}: {}", rejection.label, rejection.message);
        }
    }

    for label in &report.unexpected_successes {
        let _ = writeln!(out, "! {} was accepted", label);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::forge_roster;
    use heroforge_domain::Archetype;

    #[test]
    fn test_text_lists_heroes_then_rejections() {
        let report = forge_roster(&[Archetype::RangedAgile]);
        let text = render(&report, OutputFormat::Text).unwrap();

        assert!(text.starts_with("--- FORGING HEROES ---\n"));
        assert!(text.contains("Hero 1 (Ranged Agile):\nCharacter: Kaelen [Archer]"));
        assert!(text.contains("HP:100 MP:105"));
        assert!(text.contains("- Out-of-range strength: strength must be between 1 and 100"));
        assert!(!text.contains("was accepted"));
    }

    #[test]
    fn test_json_is_structured() {
        let report = forge_roster(&[Archetype::Healer]);
        let json = render(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["heroes"][0]["archetype"], "healer");
        assert_eq!(value["heroes"][0]["character"]["class"], "Priest");
        assert_eq!(value["heroes"][0]["character"]["health"], 150);
        assert_eq!(value["rejections"][1]["kind"], "ClassRequirementUnmet");
    }
}
