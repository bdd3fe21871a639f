//! Command implementations behind the `sample-kit` CLI.
//!
//! Each command drives one `core` component and returns a [`Report`]; `main`
//! decides how to print it and which exit code to use.

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use serde::Serialize;
use tracing::{debug, warn};

use crate::core::html::{bold, formatted_list, italic};
use crate::core::math::{add, divide, odd_numbers};
use crate::core::reservation::{Reservation, User};
use crate::core::stack::Stack;
use crate::exit_codes;
use crate::io::config::{KitConfig, OutputFormat};

/// Who made the reservation in a `cancel` scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerRole {
    None,
    User,
    Admin,
}

/// Who asks to cancel in a `cancel` scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateRole {
    /// No user at all.
    None,
    /// The same user who made the reservation.
    Owner,
    /// A fresh regular user.
    User,
    /// A fresh admin.
    Admin,
}

/// Structured command outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Report {
    Stack { popped: Vec<i64>, count: usize },
    Html { html: String },
    Sum { value: i32 },
    Quotient { value: f64 },
    OddNumbers { limit: i32, values: Vec<i32> },
    Cancel {
        owner: OwnerRole,
        candidate: CandidateRole,
        allowed: bool,
    },
    Config { path: String, written: bool },
}

impl Report {
    pub fn exit_code(&self) -> i32 {
        match self {
            Report::Cancel { allowed: false, .. } => exit_codes::DENIED,
            _ => exit_codes::OK,
        }
    }

    /// Render for stdout in the requested format (no trailing newline).
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => serde_json::to_string(self).context("serialize report json"),
            OutputFormat::Plain => Ok(self.render_plain()),
        }
    }

    fn render_plain(&self) -> String {
        match self {
            Report::Stack { popped, count } => {
                let mut lines: Vec<String> =
                    popped.iter().map(|value| value.to_string()).collect();
                lines.push(format!("count={count}"));
                lines.join("\n")
            }
            Report::Html { html } => html.clone(),
            Report::Sum { value } => value.to_string(),
            Report::Quotient { value } => value.to_string(),
            Report::OddNumbers { values, .. } => values
                .iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
            Report::Cancel { allowed, .. } => {
                if *allowed {
                    "allowed".to_string()
                } else {
                    "denied".to_string()
                }
            }
            Report::Config { path, written } => {
                if *written {
                    format!("config written: {path}")
                } else {
                    format!("config exists: {path}")
                }
            }
        }
    }
}

/// Push `values` in order, then pop `pops` times.
///
/// Popping past the bottom fails with the stack's own error message.
pub fn stack(values: &[i64], pops: usize) -> Result<Report> {
    let mut stack: Stack<i64> = values.iter().copied().collect();
    debug!(pushed = values.len(), pops, "stack command");

    let mut popped = Vec::with_capacity(pops.min(values.len()));
    for attempt in 1..=pops {
        match stack.pop() {
            Ok(value) => popped.push(value),
            Err(err) => {
                warn!(attempt, pops, "pop requested on empty stack");
                return Err(err).with_context(|| format!("pop {attempt} of {pops}"));
            }
        }
    }

    Ok(Report::Stack {
        popped,
        count: stack.count(),
    })
}

pub fn bold_text(content: &str) -> Report {
    Report::Html {
        html: bold(content),
    }
}

pub fn italic_text(content: &str) -> Report {
    Report::Html {
        html: italic(content),
    }
}

pub fn list(items: &[String]) -> Report {
    debug!(items = items.len(), "list command");
    Report::Html {
        html: formatted_list(items),
    }
}

pub fn sum(a: i32, b: i32) -> Report {
    Report::Sum { value: add(a, b) }
}

pub fn quotient(numerator: i32, denominator: i32) -> Result<Report> {
    let value = divide(numerator, denominator).inspect_err(|_| {
        warn!(numerator, denominator, "division rejected");
    })?;
    debug!(numerator, denominator, value, "divide command");
    Ok(Report::Quotient { value })
}

/// Enumerate odd numbers up to `limit`, refusing limits above the configured cap.
pub fn odds(limit: i32, cfg: &KitConfig) -> Result<Report> {
    let seq = odd_numbers(limit).inspect_err(|_| warn!(limit, "odd numbers rejected"))?;
    if limit > cfg.odd_numbers.max_limit {
        bail!(
            "limit {} exceeds odd_numbers.max_limit {}",
            limit,
            cfg.odd_numbers.max_limit
        );
    }
    debug!(limit, "odds command");
    Ok(Report::OddNumbers {
        limit: seq.limit(),
        values: seq.iter().collect(),
    })
}

/// Build the requested users and evaluate the cancellation rule.
pub fn cancel(owner: OwnerRole, candidate: CandidateRole) -> Report {
    let made_by = match owner {
        OwnerRole::None => None,
        OwnerRole::User => Some(User::regular()),
        OwnerRole::Admin => Some(User::admin()),
    };
    let reservation = Reservation::new(made_by);
    let asking = match candidate {
        CandidateRole::None => None,
        CandidateRole::Owner => reservation.made_by().cloned(),
        CandidateRole::User => Some(User::regular()),
        CandidateRole::Admin => Some(User::admin()),
    };
    let allowed = reservation.can_be_cancelled_by(asking.as_ref());
    debug!(?owner, ?candidate, allowed, "cancel command");
    Report::Cancel {
        owner,
        candidate,
        allowed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_reports_popped_values_and_remaining_count() {
        let report = stack(&[1, 2, 3], 2).expect("stack");
        assert_eq!(
            report,
            Report::Stack {
                popped: vec![3, 2],
                count: 1,
            }
        );
        assert_eq!(report.render(OutputFormat::Plain).expect("render"), "3\n2\ncount=1");
    }

    #[test]
    fn stack_over_pop_keeps_core_message() {
        let err = stack(&[1], 2).expect_err("over pop");
        let message = format!("{err:#}");
        assert!(message.contains("pop 2 of 2"));
        assert!(message.contains("Can't call Pop on an empty stack."));
    }

    #[test]
    fn stack_huge_pop_count_fails_without_reserving() {
        let err = stack(&[1], usize::MAX).expect_err("over pop");
        let message = format!("{err:#}");
        assert!(message.contains("Can't call Pop on an empty stack."), "{message}");
    }

    #[test]
    fn quotient_by_zero_fails() {
        let err = quotient(10, 0).expect_err("zero");
        assert_eq!(err.to_string(), "Second parameter can't be equal to zero");
    }

    #[test]
    fn odds_respects_configured_cap() {
        let cfg = KitConfig::default();
        let report = odds(7, &cfg).expect("odds");
        assert_eq!(
            report,
            Report::OddNumbers {
                limit: 7,
                values: vec![1, 3, 5, 7],
            }
        );

        let mut capped = KitConfig::default();
        capped.odd_numbers.max_limit = 5;
        let err = odds(7, &capped).expect_err("over cap");
        assert!(err.to_string().contains("max_limit"));
    }

    #[test]
    fn odds_negative_limit_uses_core_message() {
        let err = odds(-1, &KitConfig::default()).expect_err("negative");
        assert_eq!(err.to_string(), "Limit argument can't be negative");
    }

    #[test]
    fn cancel_scenarios_follow_rule() {
        assert!(matches!(
            cancel(OwnerRole::User, CandidateRole::Owner),
            Report::Cancel { allowed: true, .. }
        ));
        assert!(matches!(
            cancel(OwnerRole::None, CandidateRole::Admin),
            Report::Cancel { allowed: true, .. }
        ));
        let denied = cancel(OwnerRole::User, CandidateRole::User);
        assert_eq!(denied.exit_code(), exit_codes::DENIED);
        assert!(matches!(
            cancel(OwnerRole::None, CandidateRole::Owner),
            Report::Cancel { allowed: false, .. }
        ));
    }

    #[test]
    fn json_render_tags_command() {
        let json = sum(2, 3).render(OutputFormat::Json).expect("render");
        assert_eq!(json, r#"{"command":"sum","value":5}"#);
        let html = list(&["a".to_string(), "b".to_string()]);
        assert_eq!(
            html.render(OutputFormat::Plain).expect("render"),
            "<ul><li>a</li><li>b</li></ul>"
        );
    }
}
