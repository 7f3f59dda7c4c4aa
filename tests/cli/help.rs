// Integration tests for cli/help.rs — banner and usage text.

use ram::cli::help::{print_usage, print_welcome, usage_text, welcome_message};

#[test]
fn usage_text_shows_program_name() {
    let text = usage_text("/usr/local/bin/ram");
    assert!(text.contains("/usr/local/bin/ram -en"));
}

#[test]
fn usage_text_documents_every_flag() {
    let text = usage_text("ram");
    for flag in ["-mode", "-part", "-n num", "-b bytes", "-autodel", "-to"] {
        assert!(text.contains(flag), "usage is missing {}", flag);
    }
}

#[test]
fn welcome_names_the_program() {
    assert!(welcome_message().contains("R.I.P. Archive Manager"));
}

#[test]
fn printers_do_not_panic() {
    print_welcome();
    print_usage("ram");
    print_usage("");
}
