/* src/cli/core/src/ui.rs */

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn ok(msg: &str) {
  println!("  {GREEN}\u{2713}{RESET} {msg}");
}

pub fn fail(msg: &str) {
  eprintln!("  {RED}\u{2717}{RESET} {msg}");
}

pub fn warn(msg: &str) {
  println!("  {YELLOW}!{RESET} {msg}");
}

pub fn arrow(msg: &str) {
  println!("  {GREEN}\u{2192}{RESET} {msg}");
}

pub fn detail(msg: &str) {
  println!("        {msg}");
}

pub fn banner(cmd: &str) {
  println!();
  println!("  {BOLD}blockpage{RESET} {cmd} {DIM}v{VERSION}{RESET}");
  println!();
}

/// One block row: `[index] kind  width  binding`.
pub fn block_row(index: usize, kind: &str, width: &str, binding: &str) {
  println!("  {DIM}[{index}]{RESET} {BOLD}{kind:<20}{RESET} {CYAN}{width:<18}{RESET} {binding}");
}

/// Unindented output meant for piping.
pub fn raw(text: &str) {
  println!("{text}");
}

pub fn blank() {
  println!();
}
