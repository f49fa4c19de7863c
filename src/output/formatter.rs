//! Output formatters: console, JSON, Markdown and HTML

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{AtsScorerError, Result};
use crate::output::report::{score_label, ScoreReport};
use crate::scoring::rules::SubScore;
use crate::tips::{EnhancementTip, TipCategory};
use askama::Template;
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

/// Trait for rendering score reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ATS Score Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        .score-badge {
            display: inline-block;
            padding: 8px 16px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
            margin-left: 10px;
        }
        .score-excellent { background: #28a745; }
        .score-good { background: #17a2b8; }
        .score-fair { background: #ffc107; color: #000; }
        .score-poor { background: #dc3545; }
        .score-breakdown {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
            gap: 15px;
            margin: 20px 0;
        }
        .score-item {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 6px;
            border-left: 4px solid #007acc;
        }
        .tip {
            background: white;
            padding: 15px;
            margin: 10px 0;
            border-radius: 6px;
            border-left: 4px solid #17a2b8;
        }
        .tip-critical { border-left-color: #dc3545; }
        .tip-important { border-left-color: #ffc107; }
        .tip-recommended { border-left-color: #17a2b8; }
        .tip-optional { border-left-color: #28a745; }
        .strengths, .improvements {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 6px;
            margin: 10px 0;
        }
        .strengths { border-left: 4px solid #28a745; }
        .improvements { border-left: 4px solid #ffc107; }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>ATS Score Report</h1>
            <p>Generated: {{ generated_at }}</p>
        </div>

        <div class="section">
            <h2>Overall Score: {{ overall_score }}/100 <span class="score-badge {{ score_class }}">{{ score_label }}</span></h2>
            <div class="score-breakdown">
                {% for item in breakdown %}
                <div class="score-item">
                    <h4>{{ item.name }}</h4>
                    <p><strong>{{ item.score }}/100</strong> (weight: {{ item.weight }}%)</p>
                    {% if !item.hits.is_empty() %}
                    <ul>
                        {% for hit in item.hits %}
                        <li>{{ hit }}</li>
                        {% endfor %}
                    </ul>
                    {% endif %}
                </div>
                {% endfor %}
            </div>
        </div>

        {% if has_job_match %}
        <div class="section">
            <h2>Job Description Match</h2>
            <p><strong>Matched:</strong> {{ matched_keywords }}</p>
            <p><strong>Missing:</strong> {{ missing_keywords }}</p>
        </div>
        {% endif %}

        {% if !strengths.is_empty() %}
        <div class="section">
            <h2>Strengths</h2>
            <div class="strengths">
                <ul>
                {% for strength in strengths %}
                    <li>{{ strength }}</li>
                {% endfor %}
                </ul>
            </div>
        </div>
        {% endif %}

        {% if !weaknesses.is_empty() %}
        <div class="section">
            <h2>Weaknesses</h2>
            <div class="improvements">
                <ul>
                {% for weakness in weaknesses %}
                    <li>{{ weakness }}</li>
                {% endfor %}
                </ul>
            </div>
        </div>
        {% endif %}

        {% if !suggestions.is_empty() %}
        <div class="section">
            <h2>Suggestions</h2>
            <ol>
            {% for suggestion in suggestions %}
                <li>{{ suggestion }}</li>
            {% endfor %}
            </ol>
        </div>
        {% endif %}

        {% if !tips.is_empty() %}
        <div class="section">
            <h2>Enhancement Tips</h2>
            {% for tip in tips %}
            <div class="tip tip-{{ tip.category_class }}">
                <h4>{{ tip.issue }}</h4>
                <p><em>{{ tip.category }} | {{ tip.section }} | {{ tip.impact }} impact</em></p>
                <p>{{ tip.tip }}</p>
                {% if tip.has_example %}
                <p><strong>Example:</strong> {{ tip.example }}</p>
                {% endif %}
            </div>
            {% endfor %}
        </div>
        {% endif %}

        <div class="metadata">
            <p><strong>Generated by ATS Scorer v{{ version }}</strong> (lexicon v{{ lexicon_version }})</p>
            <p><strong>Resume:</strong> {{ resume_file }}{% if has_job_match %} | <strong>Job:</strong> {{ job_file }}{% endif %}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    overall_score: u8,
    score_class: String,
    score_label: String,
    breakdown: Vec<HtmlSubScore>,
    has_job_match: bool,
    matched_keywords: String,
    missing_keywords: String,
    strengths: Vec<String>,
    weaknesses: Vec<String>,
    suggestions: Vec<String>,
    tips: Vec<HtmlTip>,
    version: String,
    lexicon_version: String,
    resume_file: String,
    job_file: String,
}

struct HtmlSubScore {
    name: &'static str,
    score: u8,
    weight: String,
    hits: Vec<String>,
}

struct HtmlTip {
    category: String,
    category_class: String,
    section: String,
    impact: String,
    issue: String,
    tip: String,
    example: String,
    has_example: bool,
}

/// Sub-score rows in display order: name, score, weight, rule hits
fn breakdown_rows(report: &ScoreReport) -> Vec<(&'static str, u8, f64, Option<&SubScore>)> {
    let breakdown = &report.score.breakdown;
    let weights = &report.metadata.weights;
    let explanation = report.explanation.as_ref();
    vec![
        ("Formatting", breakdown.formatting, weights.formatting, explanation.map(|e| &e.formatting)),
        ("Keywords", breakdown.keywords, weights.keywords, explanation.map(|e| &e.keywords)),
        ("Content", breakdown.content, weights.content, explanation.map(|e| &e.content)),
        ("Completeness", breakdown.completeness, weights.completeness, explanation.map(|e| &e.completeness)),
    ]
}

fn describe_hits(sub: Option<&SubScore>) -> Vec<String> {
    sub.map(|s| {
        s.hits
            .iter()
            .map(|hit| {
                if hit.count > 1 {
                    format!("{:+} {} (x{})", hit.delta, hit.label, hit.count)
                } else {
                    format!("{:+} {}", hit.delta, hit.label)
                }
            })
            .collect()
    })
    .unwrap_or_default()
}

fn file_label(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let color = match score {
            80..=100 => Color::Green,
            70..=79 => Color::Yellow,
            60..=69 => Color::BrightYellow,
            50..=59 => Color::Red,
            _ => Color::BrightRed,
        };
        let badge = score_label(score).to_uppercase();

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_category_icon(&self, category: TipCategory) -> &'static str {
        match category {
            TipCategory::Critical => "[!]",
            TipCategory::Important => "[*]",
            TipCategory::Recommended => "[-]",
            TipCategory::Optional => "[+]",
        }
    }

    /// Tip list on its own, used by the `tips` command
    pub fn format_tips(&self, tips: &[EnhancementTip]) -> String {
        if tips.is_empty() {
            return self.colorize("No enhancement tips: this resume covers every check.\n", Color::Green);
        }

        let mut output = String::new();
        for tip in tips {
            let color = match tip.category {
                TipCategory::Critical => Color::Red,
                TipCategory::Important => Color::Yellow,
                TipCategory::Recommended => Color::Cyan,
                TipCategory::Optional => Color::White,
            };
            output.push_str(&format!(
                "{} {} ({}, {} impact)\n",
                self.colorize(self.format_category_icon(tip.category), color),
                self.colorize(&tip.issue, color),
                tip.section,
                tip.impact
            ));
            output.push_str(&format!("    {}\n", tip.tip));
            if let Some(example) = &tip.example {
                output.push_str(&format!("    Example: {}\n", self.colorize(example, Color::Cyan)));
            }
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let mut output = String::new();
        let score = &report.score;

        output.push_str(&self.format_header("ATS SCORE REPORT", 1));
        output.push_str(&format!(
            "Generated: {} | Resume: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            file_label(&report.metadata.resume_file)
        ));

        output.push_str(&self.format_header("Overall", 2));
        output.push_str(&format!(
            "Overall Score: {}/100 {}\n",
            score.overall,
            self.format_score_badge(score.overall)
        ));

        output.push_str(&self.format_header("Score Breakdown", 3));
        for (name, value, weight, sub) in breakdown_rows(report) {
            output.push_str(&format!(
                "  {:<13} {:>3}/100 (weight: {:.0}%) {}\n",
                name,
                value,
                weight * 100.0,
                self.format_score_badge(value)
            ));
            if self.detailed {
                for hit in describe_hits(sub) {
                    output.push_str(&format!("      {}\n", self.colorize(&hit, Color::BrightBlack)));
                }
            }
        }

        if let Some(job_match) = &report.job_match {
            output.push_str(&self.format_header("Job Description Match", 2));
            output.push_str(&format!(
                "Coverage: {:.0}% of job terms, {:.0}% of repeated terms\n",
                job_match.coverage() * 100.0,
                job_match.important_coverage() * 100.0
            ));
            if !job_match.matched_important.is_empty() {
                output.push_str(&format!(
                    "Matched: {}\n",
                    self.colorize(&job_match.matched_important.join(", "), Color::Green)
                ));
            }
            if !job_match.missing_important.is_empty() {
                output.push_str(&format!(
                    "Missing: {}\n",
                    self.colorize(&job_match.missing_important.join(", "), Color::Red)
                ));
            }
        }

        if !score.strengths.is_empty() {
            output.push_str(&self.format_header("Strengths", 3));
            for strength in &score.strengths {
                output.push_str(&format!("  • {}\n", self.colorize(strength, Color::Green)));
            }
        }

        if !score.weaknesses.is_empty() {
            output.push_str(&self.format_header("Weaknesses", 3));
            for weakness in &score.weaknesses {
                output.push_str(&format!("  • {}\n", self.colorize(weakness, Color::Yellow)));
            }
        }

        if !score.suggestions.is_empty() {
            output.push_str(&self.format_header("Suggestions", 3));
            for (i, suggestion) in score.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        if !report.tips.is_empty() {
            output.push_str(&self.format_header("Enhancement Tips", 2));
            output.push_str(&self.format_tips(&report.tips));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let mut output = String::new();
        let score = &report.score;

        output.push_str("# ATS Score Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Scorer:** v{} (lexicon v{})\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.scorer_version,
                report.metadata.lexicon_version
            ));
            output.push_str(&format!("**Resume:** `{}`", file_label(&report.metadata.resume_file)));
            if let Some(job_file) = &report.metadata.job_file {
                output.push_str(&format!(" | **Job:** `{}`", file_label(job_file)));
            }
            output.push_str("\n\n");
        }

        output.push_str(&format!(
            "**Overall Score:** {}/100 ({})\n\n",
            score.overall,
            report.verdict()
        ));

        output.push_str("## Score Breakdown\n\n");
        output.push_str("| Category | Score | Weight |\n|---|---|---|\n");
        let rows = breakdown_rows(report);
        for (name, value, weight, _) in &rows {
            output.push_str(&format!("| {} | {}/100 | {:.0}% |\n", name, value, weight * 100.0));
        }
        output.push('\n');

        if report.explanation.is_some() {
            output.push_str("### Rules Applied\n\n");
            for (name, _, _, sub) in rows {
                let hits = describe_hits(sub);
                if hits.is_empty() {
                    continue;
                }
                output.push_str(&format!("**{}**\n\n", name));
                for hit in hits {
                    output.push_str(&format!("- {}\n", hit));
                }
                output.push('\n');
            }
        }

        if let Some(job_match) = &report.job_match {
            output.push_str("## Job Description Match\n\n");
            output.push_str(&format!(
                "- Coverage: {:.0}% of job terms, {:.0}% of repeated terms\n",
                job_match.coverage() * 100.0,
                job_match.important_coverage() * 100.0
            ));
            if !job_match.matched_important.is_empty() {
                output.push_str(&format!("- Matched: {}\n", job_match.matched_important.join(", ")));
            }
            if !job_match.missing_important.is_empty() {
                output.push_str(&format!("- Missing: {}\n", job_match.missing_important.join(", ")));
            }
            output.push('\n');
        }

        for (title, items) in [
            ("Strengths", &score.strengths),
            ("Weaknesses", &score.weaknesses),
        ] {
            if items.is_empty() {
                continue;
            }
            output.push_str(&format!("## {}\n\n", title));
            for item in items {
                output.push_str(&format!("- {}\n", item));
            }
            output.push('\n');
        }

        if !score.suggestions.is_empty() {
            output.push_str("## Suggestions\n\n");
            for (i, suggestion) in score.suggestions.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, suggestion));
            }
            output.push('\n');
        }

        if !report.tips.is_empty() {
            output.push_str("## Enhancement Tips\n\n");
            for tip in &report.tips {
                output.push_str(&format!(
                    "### {} {}\n\n*{} | {} | {} impact*\n\n{}\n",
                    Self::markdown_category_badge(tip.category),
                    tip.issue,
                    tip.category,
                    tip.section,
                    tip.impact,
                    tip.tip
                ));
                if let Some(example) = &tip.example {
                    output.push_str(&format!("\n> Example: {}\n", example));
                }
                output.push('\n');
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl MarkdownFormatter {
    fn markdown_category_badge(category: TipCategory) -> &'static str {
        match category {
            TipCategory::Critical => "🔴",
            TipCategory::Important => "🟠",
            TipCategory::Recommended => "🔵",
            TipCategory::Optional => "⚪",
        }
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &ScoreReport) -> HtmlTemplate {
        let score_class = match report.score.overall {
            90..=100 => "score-excellent",
            70..=89 => "score-good",
            60..=69 => "score-fair",
            _ => "score-poor",
        };

        let breakdown = breakdown_rows(report)
            .into_iter()
            .map(|(name, score, weight, sub)| HtmlSubScore {
                name,
                score,
                weight: format!("{:.0}", weight * 100.0),
                hits: describe_hits(sub),
            })
            .collect();

        let tips = report
            .tips
            .iter()
            .map(|tip| HtmlTip {
                category: tip.category.to_string(),
                category_class: tip.category.to_string().to_lowercase(),
                section: tip.section.to_string(),
                impact: tip.impact.to_string(),
                issue: tip.issue.clone(),
                tip: tip.tip.clone(),
                example: tip.example.clone().unwrap_or_default(),
                has_example: tip.example.is_some(),
            })
            .collect();

        let (matched_keywords, missing_keywords) = report
            .job_match
            .as_ref()
            .map(|m| (m.matched_important.join(", "), m.missing_important.join(", ")))
            .unwrap_or_default();

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            overall_score: report.score.overall,
            score_class: score_class.to_string(),
            score_label: report.verdict().to_string(),
            breakdown,
            has_job_match: report.job_match.is_some(),
            matched_keywords,
            missing_keywords,
            strengths: report.score.strengths.clone(),
            weaknesses: report.score.weaknesses.clone(),
            suggestions: report.score.suggestions.clone(),
            tips,
            version: report.metadata.scorer_version.clone(),
            lexicon_version: report.metadata.lexicon_version.clone(),
            resume_file: file_label(&report.metadata.resume_file),
            job_file: report.metadata.job_file.as_deref().map(file_label).unwrap_or_default(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| AtsScorerError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn from_config(output: &OutputConfig, detailed: bool) -> Self {
        Self::with_options(output.color_output, detailed || output.detailed, true, true, true)
    }

    pub fn generate_report(&self, report: &ScoreReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }

    pub fn console(&self) -> &ConsoleFormatter {
        &self.console_formatter
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    format!("{}_ats_score{}.{}", base_name, timestamp_suffix, format.extension())
}

/// Where `--save` writes: a directory gets a generated, timestamped file name
pub fn resolve_save_path(target: &Path, format: &OutputFormat, resume: &Path) -> PathBuf {
    if target.is_dir() {
        target.join(suggest_filename(format, &resume.to_string_lossy(), true))
    } else {
        target.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Experience, PersonalInfo, ResumeData};
    use crate::output::report::ReportMetadata;
    use crate::scoring::AtsScorer;
    use crate::tips::generate_enhancement_tips;

    fn report(detailed: bool, job: Option<&str>) -> ScoreReport {
        let resume = ResumeData {
            personal_info: PersonalInfo {
                full_name: "Jane <Roe>".to_string(),
                email: "jane@example.com".to_string(),
                ..Default::default()
            },
            experience: vec![Experience {
                company: "Acme".to_string(),
                responsibilities: vec!["Built a Rust billing service that processed 2 million invoices".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };
        let scorer = AtsScorer::new();
        let explanation = scorer.explain(&resume, job);
        let tips = generate_enhancement_tips(&resume);
        let metadata = ReportMetadata::new(
            "/tmp/resumes/jane.json",
            job.map(|_| "/tmp/jd.md".to_string()),
            *scorer.weights(),
        );
        ScoreReport::new(explanation, tips, detailed, metadata)
    }

    #[test]
    fn test_console_plain() {
        let report = report(true, None);
        let output = ConsoleFormatter::new(false, true).format_report(&report).unwrap();
        assert!(output.contains("ATS SCORE REPORT"));
        assert!(output.contains(&format!("Overall Score: {}/100", report.score.overall)));
        assert!(output.contains("Resume: jane.json"));
        assert!(output.contains("Enhancement Tips"));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_json_round_trip() {
        let report = report(false, None);
        let output = JsonFormatter::new(false).format_report(&report).unwrap();
        let parsed: ScoreReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.score, report.score);
        assert_eq!(parsed.tips, report.tips);
    }

    #[test]
    fn test_markdown_sections() {
        let report = report(true, Some("Rust engineer: Rust, Kubernetes, Kubernetes"));
        let output = MarkdownFormatter::new(true).format_report(&report).unwrap();
        assert!(output.starts_with("# ATS Score Report"));
        assert!(output.contains("| Formatting |"));
        assert!(output.contains("### Rules Applied"));
        assert!(output.contains("## Job Description Match"));
        assert!(output.contains("- Missing: kubernetes"));
        assert!(output.contains("**Job:** `jd.md`"));
    }

    #[test]
    fn test_html_escapes_content() {
        let mut report = report(false, None);
        report.score.strengths.push("<script>alert(1)</script>".to_string());
        let output = HtmlFormatter::new(false).format_report(&report).unwrap();
        assert!(output.contains("<title>ATS Score Report</title>"));
        assert!(!output.contains("<script>"));
        assert!(!output.contains("<style>"));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(
            suggest_filename(&OutputFormat::Markdown, "/home/jane/resume.json", false),
            "resume_ats_score.md"
        );
        assert!(suggest_filename(&OutputFormat::Html, "resume.json", true).ends_with(".html"));
    }

    #[test]
    fn test_save_into_directory_uses_suggested_name() {
        let dir = tempfile::tempdir().unwrap();
        let resume = Path::new("/home/jane/resume.json");

        let path = resolve_save_path(dir.path(), &OutputFormat::Json, resume);
        assert_eq!(path.parent(), Some(dir.path()));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("resume_ats_score_"));
        assert!(name.ends_with(".json"));

        let file = dir.path().join("report.md");
        assert_eq!(resolve_save_path(&file, &OutputFormat::Markdown, resume), file);
    }

    #[test]
    fn test_save_report_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("out.txt");
        save_report_to_file("hello", &path).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
    }
}
