//! Printable result report
//!
//! Standalone HTML page summarising a risk assessment, meant to be opened
//! in a new window and printed.

use crate::scoring::{RiskAssessment, RiskLevel};

pub const DISCLAIMER: &str = "This tool provides an estimated risk assessment based on the provided \
information and should not replace professional medical advice, diagnosis, or treatment.";

const NO_FACTORS: &str = "No significant risk factors identified";

pub fn render_report(assessment: &RiskAssessment) -> String {
    let factors: String = if assessment.risk_factors.is_empty() {
        format!("<li>{}</li>", NO_FACTORS)
    } else {
        assessment
            .risk_factors
            .iter()
            .map(|factor| format!("<li>{}</li>", escape_html(factor)))
            .collect()
    };

    format!(
        r#"<html>
  <head>
    <title>Diabetes Prediction Results</title>
    <style>
      body {{ font-family: Arial, sans-serif; padding: 20px; }}
      h1 {{ color: #333; }}
      .section {{ margin-bottom: 20px; }}
      .section-title {{ font-weight: bold; margin-bottom: 10px; }}
      .risk-badge {{ padding: 5px 10px; border-radius: 5px; color: #fff; }}
{styles}
    </style>
  </head>
  <body>
    <h1>Diabetes Prediction Results</h1>
    <div class="section">
      <div class="section-title">Prediction:</div>
      <div>{prediction}</div>
    </div>
    <div class="section">
      <div class="section-title">Confidence Score:</div>
      <div>{score}%</div>
    </div>
    <div class="section">
      <div class="section-title">Risk Level:</div>
      <div class="risk-badge {class}" title="{badge}">{level}</div>
    </div>
    <div class="section">
      <div class="section-title">Risk Factors:</div>
      <ul>{factors}</ul>
    </div>
    <div class="section">
      <div class="section-title">Disclaimer:</div>
      <p>{disclaimer}</p>
    </div>
  </body>
</html>
"#,
        styles = badge_styles(),
        prediction = assessment.prediction,
        score = assessment.confidence_score,
        class = assessment.risk_level.as_str().to_lowercase(),
        level = assessment.risk_level,
        badge = assessment.risk_level.badge(),
        factors = factors,
        disclaimer = DISCLAIMER,
    )
}

fn badge_styles() -> String {
    [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High]
        .iter()
        .map(|level| {
            format!(
                "      .{} {{ background-color: {}; }}",
                level.as_str().to_lowercase(),
                level.color()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Prediction;

    fn assessment(score: u32, level: RiskLevel, factors: &[&str]) -> RiskAssessment {
        RiskAssessment {
            prediction: if score >= 50 { Prediction::Diabetic } else { Prediction::NonDiabetic },
            confidence_score: score,
            risk_level: level,
            risk_factors: factors.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn test_report_contents() {
        let html = render_report(&assessment(90, RiskLevel::High, &["Elevated BMI", "Age factor"]));
        assert!(html.contains("<div>Diabetic</div>"));
        assert!(html.contains("<div>90%</div>"));
        assert!(html.contains(r#"<div class="risk-badge high" title="High Risk">High</div>"#));
        assert!(html.contains("<ul><li>Elevated BMI</li><li>Age factor</li></ul>"));
        assert!(html.contains(DISCLAIMER));
        assert!(html.contains(".high { background-color: #f44336; }"));
    }

    #[test]
    fn test_report_without_factors() {
        let html = render_report(&assessment(0, RiskLevel::Low, &[]));
        assert!(html.contains("<div>Non-Diabetic</div>"));
        assert!(html.contains("<li>No significant risk factors identified</li>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }
}
