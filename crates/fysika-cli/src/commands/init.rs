//! The `fysika init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("questions.toml").exists() {
        println!("questions.toml already exists, skipping.");
    } else {
        std::fs::write("questions.toml", STARTER_BANK)?;
        println!("Created questions.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: fysika validate --bank questions.toml");
    println!("  2. Run: fysika practice --bank questions.toml --topic power");
    println!("  3. Add your own questions to questions.toml");

    Ok(())
}

const STARTER_BANK: &str = r#"# fysika starter question bank

[question_bank]
id = "starter"
name = "Starter bank"
description = "A few example questions to get going"
version = "1.0"

[[questions]]
id = "power-kettle"
topic = "power"
difficulty = 1
prompt = { en = "A kettle converts 2000 J of energy in 2 seconds. What is its power?", nl = "Een waterkoker zet 2000 J energie om in 2 seconden. Wat is het vermogen?" }
answer_type = "numeric"
correct_answer = 1000
unit_options = ["W", "kW"]
correct_unit = "W"
hints = [
    { en = "Power is energy per unit of time.", nl = "Vermogen is energie per tijdseenheid." },
    { en = "P = E / t", nl = "P = E / t" },
]
solution_steps = [
    { en = "P = E / t = 2000 J / 2 s = 1000 W", nl = "P = E / t = 2000 J / 2 s = 1000 W" },
]

[questions.tolerance]
absolute = 1.0

[[questions]]
id = "forces-acceleration"
topic = "forces-newton"
difficulty = 2
prompt = { en = "A net force of 10 N acts on a 2 kg mass. What is the acceleration?", nl = "Een nettokracht van 10 N werkt op een massa van 2 kg. Wat is de versnelling?" }
answer_type = "numeric"
correct_answer = 5
unit_options = ["m/s²", "m/s", "N"]
correct_unit = "m/s²"
hints = [{ en = "Use Newton's second law.", nl = "Gebruik de tweede wet van Newton." }]

[questions.tolerance]
absolute = 0.1

[[questions]]
id = "circuits-ohm-unit"
topic = "circuits"
difficulty = 1
prompt = { en = "Which unit measures electrical resistance?", nl = "In welke eenheid meet je elektrische weerstand?" }
answer_type = "mcq"
choices = ["Ohm", "Volt", "Ampere"]
correct_answer = "Ohm"

[[questions]]
id = "energy-kinetic-name"
topic = "energy-work"
difficulty = 1
prompt = { en = "What kind of energy does a moving object have?", nl = "Welke soort energie heeft een bewegend voorwerp?" }
answer_type = "text"
correct_answer = "kinetic energy"
"#;
