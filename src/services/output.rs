use crate::domain::models::{DoctorReport, JsonOut, SuiteReport};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Like `print_one`, but the envelope's `ok` reflects the report outcome
/// rather than command success.
pub fn print_report<T: Serialize>(
    json: bool,
    ok: bool,
    data: T,
    text: impl Fn(&T),
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&JsonOut { ok, data })?);
    } else {
        text(&data);
    }
    Ok(())
}

pub fn render_suite_text(report: &SuiteReport) {
    println!("suite: {}", report.suite);
    for c in &report.checks {
        match (&c.expected, &c.actual) {
            (Some(e), Some(a)) => println!("{}\t{}\texpected {}, got {}", c.name, c.status, e, a),
            _ => println!("{}\t{}", c.name, c.status),
        }
    }
    println!(
        "overall: {} ({} passed, {} failed)",
        report.overall, report.passed, report.failed
    );
}

pub fn render_doctor_text(report: &DoctorReport) {
    println!("doctor: {}", report.overall);
    for c in &report.checks {
        println!("{}\t{}", c.name, c.status);
    }
}
