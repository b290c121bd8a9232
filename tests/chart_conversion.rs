//! Integration tests for whole-chart conversion.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::io::Write;

use chordline::{convert_chart, convert_file, plan_chart, ChartLine, Config, Error};

const CHART: &str = "\
[Verse 1]
Gm               Bb
   Slow down you crazy child
            Eb                      Bb
But then if you're so smart tell me why

[Chorus]
G  G7
Woohoo
N.C.
";

#[test]
fn converts_sections_in_order() {
    let out = convert_chart(CHART, &Config::default()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "[Verse 1]",
            "^{Gm}   Slow down you ^{Bb}crazy child",
            "But then if ^{Eb}you're so smart tell me ^{Bb}why",
            "",
            "[Chorus]",
            "^*{G}Woo- ^{G7}hoo",
            "^{N.C.}",
        ]
    );
    assert!(out.ends_with('\n'));
}

#[test]
fn plan_marks_lone_chord_lines() {
    let plan = plan_chart(CHART);
    let lone: Vec<usize> = plan
        .iter()
        .filter_map(|entry| match entry {
            ChartLine::ChordsOnly { line_number, .. } => Some(*line_number),
            _ => None,
        })
        .collect();
    assert_eq!(lone, vec![10]);
}

#[test]
fn chart_without_chords_passes_through() {
    let text = "Just a poem\nwith no chords   \n";
    let out = convert_chart(text, &Config::default()).unwrap();
    assert_eq!(out, "Just a poem\nwith no chords\n");
}

#[test]
fn arrangement_notes_are_not_aligned() {
    let text = "Intro: G C D x2\nG  x2\nGo on home\nD  x2\n";
    let out = convert_chart(text, &Config::default()).unwrap();
    assert_eq!(out, "Intro: G C D x2\n^{G}Go ^{x2}on home\nD  x2\n");
}

#[test]
fn converts_chart_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CHART.as_bytes()).unwrap();

    let config = Config::default();
    let from_file = convert_file(file.path(), &config).unwrap();
    assert_eq!(from_file, convert_chart(CHART, &config).unwrap());
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");
    match convert_file(&path, &Config::default()).unwrap_err() {
        Error::Io { path: Some(p), .. } => assert_eq!(p, path),
        other => panic!("Expected Io error with path, got {other:?}"),
    }
}
