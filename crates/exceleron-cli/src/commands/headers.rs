//! Headers command - list the columns available for charting.

use std::path::PathBuf;

use colored::Colorize;
use exceleron::Exceleron;

pub fn run(file: PathBuf, json_output: bool, _verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let headers = Exceleron::new().headers(&file)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&headers)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Columns in".cyan().bold(),
        file.display().to_string().white()
    );
    for (idx, name) in headers.iter().enumerate() {
        println!("  {:>3}  {}", idx + 1, name);
    }

    Ok(())
}
