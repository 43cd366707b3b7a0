//! The `fysika topics` command.

use anyhow::Result;

use fysika_content::TOPICS;

pub fn execute(level: Option<u8>) -> Result<()> {
    if let Some(level) = level {
        anyhow::ensure!(level == 3 || level == 4, "level must be 3 or 4");
    }

    use comfy_table::Table;

    let mut table = Table::new();
    table.set_header(vec!["Id", "Name", "Dutch name", "Level", "Description"]);

    for info in TOPICS {
        if level.is_some_and(|l| l != info.level) {
            continue;
        }
        table.add_row(vec![
            info.id.to_string(),
            info.name.to_string(),
            info.dutch_name.to_string(),
            format!("VWO-{}", info.level),
            info.description.to_string(),
        ]);
    }

    println!("{table}");

    Ok(())
}
