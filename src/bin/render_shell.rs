// Prints the rendered frontend shell for a location (default "/")

use visitor_ticketing_api::shell::{router::app_routes, Shell};

fn main() -> anyhow::Result<()> {
    let location: String = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());

    let html: String = Shell::new(app_routes()).render(&location)?;
    println!("{html}");

    Ok(())
}
