#![cfg(feature = "cli")]
//! Integration tests for `segyhdr completions`.

use clap::CommandFactory;
use segy::cli::app::Cli;

fn generate_completions(shell: clap_complete::Shell) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "segyhdr", &mut buf);
    String::from_utf8(buf).expect("completions should be valid UTF-8")
}

#[test]
fn bash_completions_contain_subcommands() {
    let output = generate_completions(clap_complete::Shell::Bash);
    assert!(output.contains("segyhdr"));
    for sub in ["show", "text", "header", "info", "dump", "set", "completions"] {
        assert!(output.contains(sub), "missing {}", sub);
    }
}

#[test]
fn zsh_completions_are_valid() {
    let output = generate_completions(clap_complete::Shell::Zsh);
    assert!(output.contains("segyhdr"));
    assert!(output.contains("--audit-log"));
}

#[test]
fn fish_completions_are_valid() {
    let output = generate_completions(clap_complete::Shell::Fish);
    assert!(!output.is_empty());
    assert!(output.contains("segyhdr"));
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}
