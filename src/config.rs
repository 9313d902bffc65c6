use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::de;
use serde::Deserialize;
use serde_yaml::Value;

use crate::error::{Error, Result};
use crate::opt::Opt;

const CONFIG_NAME: &str = "taskhelper";
const CONFIG_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Template definitions read from the taskhelper config file.
///
/// Every top-level key is a template. Keys are matched case-insensitively; when two keys only
/// differ in case, the one sorting last wins and a warning is logged.
#[derive(Debug, Default)]
pub struct Config {
    templates: BTreeMap<String, Template>,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct Template {
    #[serde(default)]
    pub report: Option<Scalar>,
    #[serde(default)]
    pub add: Option<Scalar>,
}

impl Config {
    /// Loads the file named by `--config`, or the first taskhelper config found in the config
    /// directory.
    pub fn load(opt: &Opt) -> Result<Self> {
        let path = match &opt.config {
            Some(path) => path.clone(),
            None => find_config(&opt.config_dir)?,
        };
        Self::from_path(&path)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "loaded {} template(s) from '{}'",
            config.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> serde_yaml::Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let entries = serde_yaml::from_str::<Option<BTreeMap<String, Value>>>(contents)?;
        let mut templates = BTreeMap::new();
        for (name, value) in entries.unwrap_or_default() {
            let template = template_from_value(&name, value)?;
            if templates.insert(name.to_lowercase(), template).is_some() {
                warn!(
                    "template `{}` replaces another template whose name differs only in case",
                    name
                );
            }
        }
        Ok(Config { templates })
    }

    pub fn is_template(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The report that replaces `name` on the report path, if the template overrides it.
    pub fn report(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|template| template.report.as_ref())
            .map(Scalar::as_str)
    }

    /// The arguments passed to `task add` ahead of the task description.
    pub fn add(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|template| template.add.as_ref())
            .map(Scalar::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(&name.to_lowercase())
    }
}

/// Null and scalar entries are templates without a report or add override. Mappings must only
/// hold scalars under `report` and `add`.
fn template_from_value(name: &str, value: Value) -> serde_yaml::Result<Template> {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            Ok(Template::default())
        }
        Value::Mapping(_) => serde_yaml::from_value::<Template>(value).map_err(|e| {
            <serde_yaml::Error as de::Error>::custom(format!("template `{}`: {}", name, e))
        }),
        _ => Err(<serde_yaml::Error as de::Error>::custom(format!(
            "template `{}` must be a mapping, a scalar or empty",
            name
        ))),
    }
}

fn find_config(config_dir: &Path) -> Result<PathBuf> {
    let mut candidates = CONFIG_EXTENSIONS
        .iter()
        .map(|extension| config_dir.join(CONFIG_NAME).with_extension(extension))
        .collect::<Vec<PathBuf>>();
    candidates.push(config_dir.join(CONFIG_NAME));

    match candidates.iter().find(|candidate| candidate.is_file()) {
        Some(path) => Ok(path.clone()),
        None => Err(Error::ConfigNotFound(candidates)),
    }
}

/// A YAML scalar read as text, so `add: 5` or `report: true` still resolve to a string.
#[derive(Debug, PartialEq)]
pub struct Scalar(pub String);

impl Scalar {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: de::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Scalar, D::Error> {
        Ok(Scalar(deserializer.deserialize_any(ScalarVisitor)?))
    }
}

struct ScalarVisitor;

impl<'de> de::Visitor<'de> for ScalarVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string, number or boolean")
    }

    fn visit_str<E: de::Error>(self, s: &str) -> std::result::Result<Self::Value, E> {
        Ok(s.to_string())
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> std::result::Result<Self::Value, E> {
        Ok(b.to_string())
    }

    fn visit_i64<E: de::Error>(self, i: i64) -> std::result::Result<Self::Value, E> {
        Ok(i.to_string())
    }

    fn visit_u64<E: de::Error>(self, u: u64) -> std::result::Result<Self::Value, E> {
        Ok(u.to_string())
    }

    fn visit_f64<E: de::Error>(self, f: f64) -> std::result::Result<Self::Value, E> {
        Ok(f.to_string())
    }
}
