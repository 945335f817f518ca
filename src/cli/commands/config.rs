use crate::config::Config;

pub fn cmd_config_init() -> anyhow::Result<()> {
    if Config::create_default_if_missing()? {
        println!("Created config.toml with default settings");
    } else {
        println!("config.toml already exists");
    }
    Ok(())
}

pub fn cmd_config_show(config: &Config) -> anyhow::Result<()> {
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
