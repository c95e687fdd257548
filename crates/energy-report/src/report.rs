//! The report model: a flat list of items that renders to console text.

use energy_core::{compare, Comparison, Verdict};

/// One measured value checked against one allowance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricCheck {
    pub metric: &'static str,
    pub limit: &'static str,
    pub comparison: Comparison,
}

impl MetricCheck {
    pub fn new(metric: &'static str, limit: &'static str, measured: f64, allowance: f64) -> Self {
        MetricCheck {
            metric,
            limit,
            comparison: compare(measured, allowance),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportItem {
    Heading(String),
    /// A scenario or category line preceding one or more checks.
    Note { indent: usize, text: String },
    Warning(String),
    /// A precondition gate rejection. Fails the report without producing
    /// any checks.
    Failure { indent: usize, text: String },
    Check {
        indent: usize,
        /// Rendered as a `label: ` prefix, e.g. `Category B`.
        label: Option<String>,
        /// Rendered as a ` for qualifier` suffix, e.g. a graphics bracket.
        qualifier: Option<String>,
        checks: Vec<MetricCheck>,
    },
}

/// Worst verdict across the checks of one line. A fail dominates; among
/// passes the thinnest margin wins.
fn overall(checks: &[MetricCheck]) -> Verdict {
    let mut worst = Verdict::Pass;
    for check in checks {
        worst = match (worst, check.comparison.verdict) {
            (Verdict::Fail(w), _) => Verdict::Fail(w),
            (_, Verdict::Fail(n)) => Verdict::Fail(n),
            (Verdict::MarginalPass(w), Verdict::MarginalPass(n)) => {
                Verdict::MarginalPass(if n < w { n } else { w })
            }
            (Verdict::MarginalPass(w), Verdict::Pass) => Verdict::MarginalPass(w),
            (Verdict::Pass, v) => v,
        };
    }
    worst
}

/// The full outcome of evaluating a device: every rule set's headings,
/// scenario notes, and verdict lines in display order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Report {
    items: Vec<ReportItem>,
}

impl Report {
    pub fn new() -> Self {
        Report::default()
    }

    pub fn items(&self) -> &[ReportItem] {
        &self.items
    }

    pub fn push(&mut self, item: ReportItem) {
        self.items.push(item);
    }

    pub fn heading(&mut self, text: impl Into<String>) {
        self.items.push(ReportItem::Heading(text.into()));
    }

    pub fn note(&mut self, indent: usize, text: impl Into<String>) {
        self.items.push(ReportItem::Note {
            indent,
            text: text.into(),
        });
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.items.push(ReportItem::Warning(text.into()));
    }

    pub fn failure(&mut self, indent: usize, text: impl Into<String>) {
        self.items.push(ReportItem::Failure {
            indent,
            text: text.into(),
        });
    }

    pub fn check(
        &mut self,
        indent: usize,
        label: Option<String>,
        qualifier: Option<String>,
        checks: Vec<MetricCheck>,
    ) {
        self.items.push(ReportItem::Check {
            indent,
            label,
            qualifier,
            checks,
        });
    }

    /// True when no gate rejected the device and every check line passed.
    pub fn all_pass(&self) -> bool {
        self.items.iter().all(|item| match item {
            ReportItem::Failure { .. } => false,
            ReportItem::Check { checks, .. } => overall(checks).is_pass(),
            _ => true,
        })
    }

    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        for item in &self.items {
            match item {
                ReportItem::Heading(text) => {
                    if !lines.is_empty() {
                        lines.push(String::new());
                    }
                    lines.push(text.clone());
                    lines.push(String::new());
                }
                ReportItem::Note { indent, text } => {
                    lines.push(format!("{}{}", " ".repeat(*indent), text));
                }
                ReportItem::Warning(text) => {
                    lines.push(format!("WARNING: {}", text));
                }
                ReportItem::Failure { indent, text } => {
                    lines.push(format!("{}{}", " ".repeat(*indent), text));
                }
                ReportItem::Check {
                    indent,
                    label,
                    qualifier,
                    checks,
                } => {
                    lines.push(render_check(*indent, label, qualifier, checks));
                }
            }
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

fn render_check(
    indent: usize,
    label: &Option<String>,
    qualifier: &Option<String>,
    checks: &[MetricCheck],
) -> String {
    let mut line = " ".repeat(indent);
    if let Some(label) = label {
        line.push_str(label);
        line.push_str(": ");
    }
    let parts: Vec<String> = checks
        .iter()
        .map(|c| {
            let op = if c.comparison.verdict.is_pass() {
                "<="
            } else {
                ">"
            };
            format!(
                "{:?} ({}) {} {:?} ({})",
                c.comparison.measured, c.metric, op, c.comparison.allowance, c.limit
            )
        })
        .collect();
    line.push_str(&parts.join(", "));
    if let Some(qualifier) = qualifier {
        line.push_str(" for ");
        line.push_str(qualifier);
    }
    line.push_str(&format!(", {}", overall(checks)));
    line
}
