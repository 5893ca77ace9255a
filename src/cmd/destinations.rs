use console::style;

use registrar::destination::Destination;
use registrar::ui::icons::GLOBE;

/// Print the destination table: name, description, endpoint URL.
pub fn cmd_destinations() {
    println!();
    for dest in Destination::ALL {
        let config = dest.config();
        println!(
            "{}{} {} {}",
            GLOBE,
            style(config.name).yellow().bold(),
            style("—").dim(),
            config.description
        );
        println!("    {}", style(config.api_url).cyan());
    }
    println!();
}
