// Dataset assembly: built-in brands and stages, synthesized or file-backed records

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::Config;
use crate::mock::{MockError, MockGenerator};
use crate::models::{Brand, Lead, Member};
use crate::pipeline::{default_stages, find_stage, PipelineError, StageConfig};

const BUILTIN_BRANDS: &str = include_str!("../data/brands.json");

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {what}")]
    Json {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Anchor(#[from] MockError),

    #[error("threshold override for '{stage}': {source}")]
    Threshold {
        stage: String,
        #[source]
        source: PipelineError,
    },
}

pub fn builtin_brands() -> Result<Vec<Brand>, DataError> {
    serde_json::from_str(BUILTIN_BRANDS).map_err(|source| DataError::Json {
        what: "built-in brands".to_string(),
        source,
    })
}

/// Read `dir/file` as JSON when it exists
fn read_override<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Option<T>, DataError> {
    let path = dir.join(file);
    if !path.exists() {
        return Ok(None);
    }
    log::info!("Loading {} from {}", file, path.display());
    let content = std::fs::read_to_string(&path).map_err(|source| DataError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| DataError::Json {
            what: path.display().to_string(),
            source,
        })
}

/// Everything the console views are built from
#[derive(Debug, Clone)]
pub struct Dataset {
    pub today: NaiveDate,
    pub brands: Vec<Brand>,
    pub stages: Vec<StageConfig>,
    pub members: Vec<Member>,
    pub leads: Vec<Lead>,
    pub generator: MockGenerator,
}

impl Dataset {
    /// Assemble the dataset for `today`
    ///
    /// Files under `data.location` (brands.json, stages.json, members.json,
    /// leads.json) replace the corresponding built-in or synthesized records.
    /// Threshold overrides from the config apply last.
    pub fn load(config: &Config, today: NaiveDate) -> Result<Self, DataError> {
        let dir = config.data_location.as_deref();

        let brands: Vec<Brand> = match dir {
            Some(d) => read_override(d, "brands.json")?,
            None => None,
        }
        .map_or_else(builtin_brands, Ok)?;

        let mut stages: Vec<StageConfig> = match dir {
            Some(d) => read_override(d, "stages.json")?.unwrap_or_else(default_stages),
            None => default_stages(),
        };
        for (stage_id, thresholds) in &config.thresholds {
            let stage = find_stage(&stages, stage_id)
                .map_err(|source| DataError::Threshold { stage: stage_id.clone(), source })?
                .id
                .clone();
            if let Some(s) = stages.iter_mut().find(|s| s.id == stage) {
                log::debug!("Overriding thresholds for stage '{}'", stage);
                s.thresholds = *thresholds;
            }
        }

        let generator = MockGenerator::new(today, brands.iter().map(|b| b.id.clone()).collect())?;

        let members: Vec<Member> = match dir {
            Some(d) => read_override(d, "members.json")?,
            None => None,
        }
        .unwrap_or_else(|| generator.members(config.member_count));

        let leads: Vec<Lead> = match dir {
            Some(d) => read_override(d, "leads.json")?,
            None => None,
        }
        .unwrap_or_else(|| generator.leads(config.lead_count, &stages));

        log::debug!(
            "Dataset for {}: {} brands, {} stages, {} members, {} leads",
            today,
            brands.len(),
            stages.len(),
            members.len(),
            leads.len()
        );

        Ok(Dataset { today, brands, stages, members, leads, generator })
    }

    pub fn brand_ids(&self) -> Vec<&str> {
        self.brands.iter().map(|b| b.id.as_str()).collect()
    }

    pub fn stage_ids(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id.eq_ignore_ascii_case(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Thresholds;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[test]
    fn test_builtin_brands_parse() {
        let brands = builtin_brands().unwrap();
        assert!(brands.len() >= 2);
        assert!(brands.iter().all(|b| !b.locations.is_empty()));
    }

    #[test]
    fn test_default_dataset_is_synthesized() {
        let config = Config::default();
        let data = Dataset::load(&config, today()).unwrap();
        assert_eq!(data.members.len(), config.member_count);
        assert_eq!(data.leads.len(), config.lead_count);
        assert_eq!(data.stages, default_stages());
        let brand_ids = data.brand_ids();
        assert!(data.members.iter().all(|m| brand_ids.contains(&m.brand.as_str())));
    }

    #[test]
    fn test_dataset_is_reproducible() {
        let a = Dataset::load(&Config::default(), today()).unwrap();
        let b = Dataset::load(&Config::default(), today()).unwrap();
        assert_eq!(a.members, b.members);
        assert_eq!(a.leads, b.leads);
    }

    #[test]
    fn test_threshold_override_applies() {
        let mut config = Config::default();
        config.thresholds.insert("Trial".to_string(), Thresholds::new(1, 2).unwrap());
        let data = Dataset::load(&config, today()).unwrap();
        let trial = data.stages.iter().find(|s| s.id == "trial").unwrap();
        assert_eq!(trial.thresholds, Thresholds::new(1, 2).unwrap());
    }

    #[test]
    fn test_threshold_override_unknown_stage() {
        let mut config = Config::default();
        config.thresholds.insert("demo_day".to_string(), Thresholds::new(1, 2).unwrap());
        let err = Dataset::load(&config, today()).unwrap_err();
        assert!(matches!(err, DataError::Threshold { .. }));
    }

    #[test]
    fn test_files_in_data_location_replace_records() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("leads.json"),
            r#"[{"id":"lead-x","name":"Pat Doe","brand":"pulse","source":"event",
                "stage":"trial","days_in_stage":9,"value_cents":100}]"#,
        )
        .unwrap();
        let config = Config {
            data_location: Some(temp_dir.path().to_path_buf()),
            ..Config::default()
        };
        let data = Dataset::load(&config, today()).unwrap();
        assert_eq!(data.leads.len(), 1);
        assert_eq!(data.leads[0].id, "lead-x");
        assert_eq!(data.members.len(), config.member_count);
    }

    #[test]
    fn test_bad_json_in_data_location() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("members.json"), "{not json").unwrap();
        let config = Config {
            data_location: Some(temp_dir.path().to_path_buf()),
            ..Config::default()
        };
        let err = Dataset::load(&config, today()).unwrap_err();
        assert!(matches!(err, DataError::Json { .. }));
    }

    #[test]
    fn test_anchor_at_calendar_edge_is_an_error() {
        let err = Dataset::load(&Config::default(), NaiveDate::MAX).unwrap_err();
        assert!(matches!(err, DataError::Anchor(MockError::AnchorOutOfRange(_))));
    }

    #[test]
    fn test_member_lookup_ignores_case() {
        let data = Dataset::load(&Config::default(), today()).unwrap();
        assert!(data.member("MEMBER-3").is_some());
        assert!(data.member("member-9999").is_none());
    }
}
