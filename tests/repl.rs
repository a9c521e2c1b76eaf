//! Integration tests for monkey-repl crate.

use monkey_repl::{OutputFormat, PROMPT, ReplConfig, start, write_tokens};
use std::io::Cursor;
use std::path::PathBuf;

fn run_repl(input: &str, config: &ReplConfig) -> String {
    let mut output = Vec::new();
    start(Cursor::new(input), &mut output, config).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_repl_prints_tokens_per_line() {
    let output = run_repl("let five = 5;\n10 == 10\n", &ReplConfig::default());

    let expected = "\
>> {Type:let Literal:let}
{Type:identifier Literal:five}
{Type:assign Literal:=}
{Type:integer Literal:5}
{Type:semicolon Literal:;}
>> {Type:integer Literal:10}
{Type:equals Literal:==}
{Type:integer Literal:10}
>> ";
    assert_eq!(output, expected);
}

#[test]
fn test_repl_empty_input() {
    assert_eq!(run_repl("", &ReplConfig::default()), PROMPT);
}

#[test]
fn test_repl_last_line_without_newline() {
    let output = run_repl("@", &ReplConfig::default());
    assert_eq!(output, ">> {Type:illegal Literal:@}\n>> ");
}

#[test]
fn test_repl_crlf_lines() {
    let output = run_repl("x\r\ny\r\n", &ReplConfig::default());
    assert_eq!(
        output,
        ">> {Type:identifier Literal:x}\n>> {Type:identifier Literal:y}\n>> "
    );
}

#[test]
fn test_repl_survives_invalid_utf8() {
    let mut output = Vec::new();
    start(
        Cursor::new(&b"a\n\xff\nb\n"[..]),
        &mut output,
        &ReplConfig::default(),
    )
    .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(
        output,
        ">> {Type:identifier Literal:a}\n\
         >> {Type:illegal Literal:\u{FFFD}}\n\
         >> {Type:identifier Literal:b}\n\
         >> "
    );
}

#[test]
fn test_repl_custom_prompt() {
    let config = ReplConfig {
        prompt: "monkey> ".to_string(),
        ..ReplConfig::default()
    };
    let output = run_repl("\n", &config);
    assert_eq!(output, "monkey> monkey> ");
}

#[test]
fn test_repl_json_format() {
    let config = ReplConfig::default().with_format(OutputFormat::Json);
    let output = run_repl("!=\n", &config);

    let line = output
        .strip_prefix(PROMPT)
        .and_then(|rest| rest.lines().next())
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(value["kind"], "not-equals");
    assert_eq!(value["literal"], "!=");
}

#[test]
fn test_write_tokens_counts() {
    let mut output = Vec::new();
    let count = write_tokens("fn(x) { x }", &mut output, OutputFormat::Text).unwrap();
    assert_eq!(count, 7);
    assert_eq!(String::from_utf8(output).unwrap().lines().count(), 7);

    let mut output = Vec::new();
    assert_eq!(write_tokens("   ", &mut output, OutputFormat::Text).unwrap(), 0);
    assert!(output.is_empty());
}

#[test]
fn test_output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
    assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    assert!("yaml".parse::<OutputFormat>().is_err());
}

#[test]
fn test_config_defaults() {
    let config = ReplConfig::from_lookup(|_| None);
    assert_eq!(config, ReplConfig::default());
    assert_eq!(config.prompt, ">> ");
    assert_eq!(config.format, OutputFormat::Text);
    assert!(config.history.is_none());
}

#[test]
fn test_config_from_lookup() {
    let config = ReplConfig::from_lookup(|key| match key {
        "MONKEY_PROMPT" => Some("$ ".to_string()),
        "MONKEY_HISTORY" => Some("/tmp/monkey_history".to_string()),
        _ => None,
    });
    assert_eq!(config.prompt, "$ ");
    assert_eq!(config.history, Some(PathBuf::from("/tmp/monkey_history")));
}

#[test]
fn test_config_ignores_empty_history() {
    let config = ReplConfig::from_lookup(|key| match key {
        "MONKEY_HISTORY" => Some(String::new()),
        _ => None,
    });
    assert!(config.history.is_none());
}
