use std::path::PathBuf;

/// Directory for configuration and logs: `<config dir>/.<package name>`
pub fn get_app_dir() -> anyhow::Result<PathBuf> {
    let conf_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("dirs::config_dir()"))?;
    let mut path = PathBuf::from(&conf_dir);
    path.push(format!(".{}", env!("CARGO_PKG_NAME")));
    Ok(path)
}

pub fn get_logs_dir() -> anyhow::Result<PathBuf> {
    let mut path = get_app_dir()?;
    path.push("logs");
    Ok(path)
}

fn get_app_conf_file_name(
    conf_name:  &str,
    create_dir: bool
) -> anyhow::Result<PathBuf> {
    let mut path = get_app_dir()?;
    if create_dir && !path.exists() {
        std::fs::create_dir_all(&path)?;
    }
    path.push(format!("{}.json", conf_name));
    Ok(path)
}

pub fn save_json_to_config<T: serde::Serialize>(
    obj:       &T,
    conf_name: &str
) -> anyhow::Result<()> {
    let file_name = get_app_conf_file_name(conf_name, true)?;
    let text = serde_json::to_string_pretty(obj)?;
    std::fs::write(&file_name, text)?;
    log::debug!("Config saved to {}", file_name.display());
    Ok(())
}

/// Loads `conf_name`.json from application directory.
/// Returns `None` if there is no such file yet
pub fn load_json_from_config_file<T: serde::de::DeserializeOwned>(
    conf_name: &str
) -> anyhow::Result<Option<T>> {
    let file_name = get_app_conf_file_name(conf_name, false)?;
    if !file_name.is_file() {
        return Ok(None);
    }
    let file = std::io::BufReader::new(std::fs::File::open(&file_name)?);
    let obj = serde_json::from_reader(file)?;
    log::debug!("Config loaded from {}", file_name.display());
    Ok(Some(obj))
}
