use crate::commands::{CmdMessage, CmdResult};
use crate::config::ReviewConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetDataFile(String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ReviewConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            if key != "data-file" {
                result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)));
                return Ok(result);
            }
        }
        ConfigAction::SetDataFile(value) => {
            config.set_data_file(&value);
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("data-file set to {}", value)));
        }
    }

    Ok(result.with_config(config))
}
