// cli/help.rs — Welcome banner and usage text.
//
// Functions:
//   print_welcome      → banner printed at the start of every run
//   print_usage        → full usage text on stdout

use crate::cli::constants::{AUTHOR, HOMEPAGE, LICENSE_NOTICE, PROGRAM_TITLE, TAGLINE};
use crate::reduce::Mode;
use crate::version_string;

/// Build the welcome banner.
pub fn welcome_message() -> String {
    format!(
        "{} v{}\n{}\nby {}, {}\n{}\n",
        PROGRAM_TITLE, version_string(), TAGLINE, AUTHOR, HOMEPAGE, LICENSE_NOTICE
    )
}

/// Print the welcome banner to stderr at display level 2.
pub fn print_welcome() {
    crate::displaylevel!(2, "{}\n", welcome_message());
}

/// Build the usage text for `program`.
pub fn usage_text(program: &str) -> String {
    let modes: Vec<String> = Mode::ALL
        .iter()
        .map(|m| format!("{}-{}", *m as i32, m.name()))
        .collect();
    let mut s = String::new();
    s.push_str(&format!("{} usage\n", PROGRAM_TITLE));
    s.push_str(&format!(
        "compress   : {} -en [-mode num] [-part [-n num | -b bytes]] [-autodel] file [-to file]\n",
        program
    ));
    s.push_str(&format!("decompress : {} -de file [-to path]\n", program));
    s.push_str(&format!("  -mode num : compression mode ({})\n", modes.join(", ")));
    s.push_str("  -part     : multi-volume compression\n");
    s.push_str("    -n num  : number of volumes\n");
    s.push_str("    -b bytes: volume size in bytes\n");
    s.push_str("  -autodel  : delete the input file after compressing\n");
    s.push_str("  file      : input file\n");
    s.push_str("  -to file/path : output file / directory\n");
    s
}

/// Print usage to stdout.
pub fn print_usage(program: &str) {
    crate::displayout!("{}", usage_text(program));
}
