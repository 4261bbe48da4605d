#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = encore_ui::run() {
        eprintln!("Encore failed: {err}");
        std::process::exit(1);
    }
}
