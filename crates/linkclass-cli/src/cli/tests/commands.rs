//! Command output over in-memory IO.

use crate::cli::commands::{run_classify, run_completions, run_demo, run_hosts, run_interactive};
use clap_complete::Shell;
use linkclass_core::config::{LinkclassConfig, OutputFormat};
use std::io::Cursor;

const ICAFE_URL: &str =
    "https://console.cloud.baidu-int.com/devops/icafe/issue/OnlineApi-21205/show?source=copy-shortcut";
const IKU_URL: &str =
    "https://ku.baidu-int.com/knowledge/HFVrC7hq1Q/iki-aVkbF_/9sd-6XkDV8/zRCXYKbDS6IZGF";

fn interactive(input: &str, format: OutputFormat) -> (String, usize) {
    let mut out = Vec::new();
    let n = run_interactive(Cursor::new(input), &mut out, "> ", format).unwrap();
    (String::from_utf8(out).unwrap(), n)
}

#[test]
fn classify_json_lines() {
    let mut out = Vec::new();
    let urls = vec![ICAFE_URL.to_string(), String::new(), "https://[::1".to_string()];
    run_classify(&mut out, &urls, OutputFormat::Json).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "{\"result\":\"icafe\"}\n{\"result\":\"\"}\n{\"result\":\"\"}\n"
    );
}

#[test]
fn classify_plain_lines() {
    let mut out = Vec::new();
    let urls = vec![IKU_URL.to_string(), "https://www.baidu.com".to_string()];
    run_classify(&mut out, &urls, OutputFormat::Plain).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "iku\n\n");
}

#[test]
fn demo_prints_each_default_link() {
    let mut out = Vec::new();
    let cfg = LinkclassConfig::default();
    run_demo(&mut out, &cfg.demo_urls, OutputFormat::Plain).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Link classification demo:\n"));
    assert!(text.contains(&format!("link: {ICAFE_URL}\ntype: icafe\n")));
    assert!(text.contains(&format!("link: {IKU_URL}\ntype: iku\n")));
    assert!(text.contains("link: https://www.baidu.com\ntype: \n"));
    assert_eq!(text.matches(&"-".repeat(50)).count(), cfg.demo_urls.len());
}

#[test]
fn interactive_stops_at_quit_any_case() {
    let input = format!("{IKU_URL}\n  QuIt  \n{ICAFE_URL}\n");
    let (text, n) = interactive(&input, OutputFormat::Plain);
    assert_eq!(n, 1);
    assert_eq!(text, "> iku\n> ");
}

#[test]
fn interactive_stops_at_eof_and_skips_blank_lines() {
    let input = format!("\n   \n{ICAFE_URL}\nhttps://www.baidu.com");
    let (text, n) = interactive(&input, OutputFormat::Json);
    assert_eq!(n, 2);
    assert_eq!(
        text,
        "> > > {\"result\":\"icafe\"}\n> {\"result\":\"\"}\n> "
    );
}

#[test]
fn interactive_trims_input() {
    let (text, n) = interactive("  https://ku.baidu-int.com/x  \r\n", OutputFormat::Plain);
    assert_eq!(n, 1);
    assert_eq!(text, "> iku\n> ");
}

#[test]
fn hosts_lists_table() {
    let mut out = Vec::new();
    run_hosts(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "console.cloud.baidu-int.com\ticafe\nku.baidu-int.com\tiku\n"
    );
}

#[test]
fn completions_mention_subcommands() {
    let mut out = Vec::new();
    run_completions(&mut out, Shell::Bash);
    let script = String::from_utf8(out).unwrap();
    assert!(script.contains("linkclass"));
    assert!(script.contains("classify"));
}
