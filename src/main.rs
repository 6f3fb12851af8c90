//! prodlog main entrypoint.

use prodlog::run;
use prodlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
