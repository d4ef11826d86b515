use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct FormatData {
    formats: HashMap<String, String>,
    tokens: Vec<(String, String)>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/format_data.json")?;
    let data: FormatData = serde_json::from_str(&json)?;

    write_map(&output.join("builtin_formats.rs"), &data.formats, |v| {
        format!("{:?}", v)
    })?;

    let descriptions = data.tokens.iter().cloned().collect::<HashMap<_, _>>();
    write_map(&output.join("token_descriptions.rs"), &descriptions, |v| {
        format!("{:?}", v)
    })?;

    // The legend is printed in file order, which a phf map doesn't keep
    write_slice(&output.join("token_legend.rs"), &data.tokens)?;

    Ok(())
}

fn write_map<'a, K, V, F>(output: &Path, map: &'a HashMap<K, V>, transform: F) -> Result<()>
where
    K: std::ops::Deref<Target = str>,
    F: Fn(&'a V) -> String,
{
    let mut builder = phf_codegen::Map::new();
    for (k, v) in map {
        builder.entry(k.to_string(), &transform(v));
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn write_slice(output: &Path, pairs: &[(String, String)]) -> Result<()> {
    let entries = pairs
        .iter()
        .map(|(k, v)| format!("({:?}, {:?})", k, v))
        .collect::<Vec<_>>()
        .join(",\n    ");
    fs::write(output, format!("&[\n    {},\n]", entries))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}
