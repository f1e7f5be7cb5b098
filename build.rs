//! Rebuilds the crate whenever an SQL migration changes.
//!
//! `embed_migrations!` bakes the files under `migrations/` into the binary,
//! and Cargo does not track them on its own.

fn main() {
    for path in ["migrations", "migrations/2026-03-01-000000_create_preferences"] {
        println!("cargo:rerun-if-changed={path}");
    }
}
