// Demonstration caller for the tantra JSON surface.
// Usage: cargo run --bin tantra -- check [file]

fn main() {
    tantra::cli::run();
}
