//! The `gradebook init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("roster.toml").exists() {
        println!("roster.toml already exists, skipping.");
    } else {
        std::fs::write("roster.toml", SAMPLE_ROSTER)?;
        println!("Created roster.toml");
    }

    std::fs::create_dir_all("submissions")?;
    let example_path = std::path::Path::new("submissions/day1.txt");
    if example_path.exists() {
        println!("submissions/day1.txt already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_SUBMISSIONS)?;
        println!("Created submissions/day1.txt");
    }

    println!("\nNext steps:");
    println!("  1. Edit roster.toml with your students");
    println!("  2. Run: gradebook validate --roster roster.toml");
    println!("  3. Run: gradebook ingest --roster roster.toml --submissions submissions/day1.txt");

    Ok(())
}

const SAMPLE_ROSTER: &str = r#"# gradebook roster configuration

[roster]
name = "Example Course"
test_count = 4

students = ["alice", "bob", "carol"]
"#;

const EXAMPLE_SUBMISSIONS: &str = r#"alice 10 8 0 7
bob 5 5 5 5
alice 10 8 9 7
carol 0 0 0 0
"#;
