use std::path::Path;

pub fn name(manifest: Option<&Path>) -> anyhow::Result<()> {
    println!("{}", super::load_repo(manifest)?.image_full_path);
    Ok(())
}

pub fn cluster(manifest: Option<&Path>) -> anyhow::Result<()> {
    println!("{}", super::load_repo(manifest)?.cluster_name);
    Ok(())
}

pub fn release(manifest: Option<&Path>) -> anyhow::Result<()> {
    println!("{}", super::load_repo(manifest)?.release_name);
    Ok(())
}
