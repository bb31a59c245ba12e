// Mon Oct 19 2026 - Alex

use colored::Colorize;

fn main() {
    if let Err(e) = swat4_discovery::ui::cli::run() {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}
