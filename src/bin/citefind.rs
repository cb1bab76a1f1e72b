//! Command-line interface for citefind
//!
//! Scans a file (or a directory tree, bounded by depth and file-count
//! limits) for scripture-style citations and prints what it finds.
//!
//! Usage:
//!   citefind `<path>` [--depth `<n>`] [--max-files `<n>`] [--rejections] [--format text|json]

use citefind::finding::{Finding, FinderConfig, ReferenceFinder};
use citefind::walking::{collect_files, WalkConfig};
use citefind::Canon;
use clap::{Arg, ArgAction, Command};
use std::path::Path;

fn main() {
    let matches = Command::new("citefind")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find scripture-style citations in text files")
        .arg(
            Arg::new("path")
                .help("File or directory to scan")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("depth")
                .long("depth")
                .help("Maximum directory recursion depth")
                .value_parser(clap::value_parser!(usize))
                .default_value("5"),
        )
        .arg(
            Arg::new("max-files")
                .long("max-files")
                .help("Maximum number of files to scan")
                .value_parser(clap::value_parser!(usize))
                .default_value("100"),
        )
        .arg(
            Arg::new("rejections")
                .long("rejections")
                .help("Also report near-miss candidates and why they were rejected")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").unwrap();
    let walk_config = WalkConfig {
        max_depth: *matches.get_one::<usize>("depth").unwrap(),
        max_files: *matches.get_one::<usize>("max-files").unwrap(),
    };
    let finder_config = FinderConfig {
        include_rejections: matches.get_flag("rejections"),
        max_candidates: None,
    };
    let format = matches.get_one::<String>("format").unwrap();

    let walked = collect_files(Path::new(path), &walk_config).unwrap_or_else(|e| {
        eprintln!("Error reading '{}': {}", path, e);
        std::process::exit(1);
    });
    if walked.truncated {
        eprintln!("Only searching the first {} files.", walk_config.max_files);
    }

    let finder = ReferenceFinder::with_config(Canon::standard(), finder_config);
    for file in &walked.files {
        let contents = match std::fs::read_to_string(file) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Skipping {}: {}", file.display(), e);
                continue;
            }
        };
        if contents.is_empty() {
            eprintln!("{} is empty.", file.display());
            continue;
        }
        let findings = finder.find(&contents);
        match format.as_str() {
            "json" => print_json(&finder, file.display().to_string(), &findings),
            _ => print_text(&finder, file, &findings),
        }
    }
}

fn print_text(finder: &ReferenceFinder, file: &Path, findings: &[Finding]) {
    if findings.is_empty() {
        println!("No references found in {}", file.display());
        return;
    }
    for finding in findings {
        match finding {
            Finding::Reference(reference) => {
                println!("{}", finder.canon().format_reference(reference));
            }
            Finding::Rejection(rejection) => {
                println!(
                    "rejected '{}' at {}..{}: {}",
                    rejection.candidate.text.trim_end(),
                    rejection.candidate.span.start,
                    rejection.candidate.span.end,
                    rejection.reason,
                );
            }
        }
    }
}

fn print_json(finder: &ReferenceFinder, file: String, findings: &[Finding]) {
    let records: Vec<serde_json::Value> = findings
        .iter()
        .map(|finding| match finding {
            Finding::Reference(reference) => serde_json::json!({
                "reference": {
                    "book": finder.canon().name(reference.book),
                    "start": reference.start,
                    "end": reference.end,
                },
            }),
            Finding::Rejection(rejection) => serde_json::json!({
                "rejection": {
                    "candidate": rejection.candidate,
                    "reason": rejection.reason.to_string(),
                },
            }),
        })
        .collect();
    println!(
        "{}",
        serde_json::json!({ "file": file, "findings": records })
    );
}
