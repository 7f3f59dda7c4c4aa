// Integration tests for cli/op_mode.rs — mode tokens and environment defaults.

use ram::cli::op_mode::{
    init_display_level, init_display_level_from, init_seed, init_seed_from, select_op_mode, OpMode,
};
use ram::config::DISPLAY_LEVEL_DEFAULT;

#[test]
fn tokens_select_modes() {
    assert_eq!(select_op_mode("-en"), Some(OpMode::Compress));
    assert_eq!(select_op_mode("-de"), Some(OpMode::Decompress));
    assert_eq!(select_op_mode("-EN"), None);
}

#[test]
fn display_level_env_var() {
    std::env::set_var("RAM_DISPLAY_LEVEL", "1");
    let level = init_display_level();
    std::env::remove_var("RAM_DISPLAY_LEVEL");
    assert_eq!(level, 1);
}

#[test]
fn display_level_whitespace_tolerated() {
    assert_eq!(init_display_level_from(Some(" 3 ")), 3);
}

#[test]
fn display_level_garbage_falls_back() {
    assert_eq!(init_display_level_from(Some("-1")), DISPLAY_LEVEL_DEFAULT);
}

#[test]
fn seed_env_var() {
    std::env::set_var("RAM_SEED", "31337");
    let seed = init_seed();
    std::env::remove_var("RAM_SEED");
    assert_eq!(seed, Some(31337));
}

#[test]
fn seed_garbage_is_unseeded() {
    assert_eq!(init_seed_from(Some("lucky")), None);
}
