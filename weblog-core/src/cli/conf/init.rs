use anyhow::{Context, Result, bail};
use rust_embed::RustEmbed;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "config-templates/"]
pub struct ConfigTemplates;

pub fn init(path: &Path) -> Result<()> {
    // Refuse to overwrite anything already there
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("cannot create {}", parent.display()))?;
    }

    fs::write(path, template("weblog.hcl")?)
        .with_context(|| format!("cannot write {}", path.display()))?;

    println!("✔ Wrote {}", path.display());
    Ok(())
}

fn template(name: &str) -> Result<String> {
    let file = ConfigTemplates::get(name).with_context(|| format!("missing template {name}"))?;
    Ok(String::from_utf8(file.data.into_owned())?)
}
