use anyhow::{Context, Result};
use dynjson::JsonObject;
use std::fs::{self, File};
use std::io::{stdin, Read, Write};
use tracing::Level;

#[macro_use]
extern crate clap;
use clap::App;

fn main() -> Result<()> {
    let yaml = load_yaml!("main.yml");
    let matches = App::from_yaml(yaml).get_matches();
    let level = if matches.is_present("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = matches.value_of_os("json_file") {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.to_string_lossy()))?;
        let result = canonicalize(&text)?;
        if matches.is_present("in_place") {
            let mut f = File::create(path)?;
            writeln!(f, "{}", result)?;
        } else {
            println!("{}", result);
        }
    } else {
        let mut text = String::new();
        stdin().lock().read_to_string(&mut text)?;
        let result = canonicalize(&text)?;
        println!("{}", result);
    }
    Ok(())
}

fn canonicalize(text: &str) -> Result<String> {
    let object = JsonObject::parse(text)?;
    Ok(object.make_print_value())
}
