use anyhow::Result;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::knowledge::KnowledgeBase;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub knowledge: KnowledgeSettings,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Profile {
    pub birth_year: Option<u16>,
    #[serde(default)]
    pub conditions: Vec<String>,
}

impl Profile {
    /// Age in whole years as of `year`, if a birth year is known.
    pub fn age_in(&self, year: i32) -> Option<u32> {
        let born = i32::from(self.birth_year?);
        u32::try_from(year - born).ok()
    }

    pub fn current_age(&self) -> Option<u32> {
        self.age_in(chrono::Local::now().year())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct KnowledgeSettings {
    /// TOML file replacing the built-in rule tables.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut options = OpenOptions::new();
            options.write(true).create(true).truncate(true).mode(0o600);
            let mut file = options.open(&path)?;
            file.write_all(contents.as_bytes())?;

            // mode() only applies on creation
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                fs::set_permissions(&path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        Ok(())
    }

    /// The configured knowledge base, or the built-in one.
    pub fn knowledge_base(&self) -> Result<KnowledgeBase> {
        match &self.knowledge.path {
            Some(path) => KnowledgeBase::load(path),
            None => Ok(KnowledgeBase::builtin()),
        }
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("RXCHECK_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rxcheck")
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    pub fn db_path() -> PathBuf {
        Self::data_dir().join("regimen.db")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_from_birth_year() {
        let p = Profile {
            birth_year: Some(1956),
            conditions: vec![],
        };
        assert_eq!(p.age_in(2026), Some(70));
    }

    #[test]
    fn age_unknown_without_birth_year() {
        assert_eq!(Profile::default().age_in(2026), None);
    }

    #[test]
    fn age_none_for_future_birth_year() {
        let p = Profile {
            birth_year: Some(2030),
            conditions: vec![],
        };
        assert_eq!(p.age_in(2026), None);
    }

    #[test]
    fn default_config_uses_builtin_knowledge() {
        let kb = Config::default().knowledge_base().unwrap();
        assert!(kb.dosage("paracetamol").is_some());
    }

    #[test]
    fn config_toml_roundtrip_keeps_knowledge_path() {
        let mut c = Config::default();
        c.knowledge.path = Some(PathBuf::from("/tmp/kb.toml"));
        c.profile.conditions = vec!["asthma".into()];
        let s = toml::to_string_pretty(&c).unwrap();
        let back: Config = toml::from_str(&s).unwrap();
        assert_eq!(back.knowledge.path, Some(PathBuf::from("/tmp/kb.toml")));
        assert_eq!(back.profile.conditions, vec!["asthma".to_string()]);
    }
}
