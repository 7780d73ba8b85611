use std::{fs, path::Path};

use anyhow::Context as _;
use easeplot::{Ease, render_graph, write_png};

const OUT_DIR: &str = "images";

fn main() -> anyhow::Result<()> {
    let out_dir = Path::new(OUT_DIR);
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output directory '{}'", out_dir.display()))?;

    for ease in Ease::ALL {
        let image = render_graph(ease);
        let out_path = out_dir.join(format!("{}.png", ease.name()));
        write_png(&out_path, &image).with_context(|| format!("write graph for '{}'", ease.name()))?;
        eprintln!("wrote {}", out_path.display());
    }

    Ok(())
}
