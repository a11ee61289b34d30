use ignore::WalkBuilder;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let resource_dir = manifest_dir.join("resources");

    println!("cargo:rerun-if-changed=resources");

    let mut entries = Vec::new();
    if resource_dir.is_dir() {
        // Every file under resources/ is bundled, dotfiles and ignored files included
        for entry in WalkBuilder::new(&resource_dir).standard_filters(false).build() {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let name = path
                .strip_prefix(&resource_dir)?
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");

            println!("cargo:rerun-if-changed={}", path.display());
            entries.push((name, path.canonicalize()?));
        }
    }
    entries.sort();

    let mut table = String::from("static BUNDLED: &[(&str, &[u8])] = &[\n");
    for (name, path) in &entries {
        writeln!(
            table,
            "    ({:?}, include_bytes!({:?}) as &[u8]),",
            name,
            path.to_string_lossy()
        )?;
    }
    table.push_str("];\n");

    fs::write(out_dir.join("bundled_resources.rs"), table)?;
    Ok(())
}
