//! milklog main entrypoint.

use milklog::run;
use milklog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(&e);
        std::process::exit(1);
    }
}
