use crate::{BeegenError, ParameterSet, Result};

pub const DEFAULT_REGION: &str = "eu-west-1";

/// Raw option values as they arrive from the command line.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    pub service_name: Option<String>,
    pub release_version: Option<String>,
    pub stage: Option<String>,
    pub region: Option<String>,
    pub parameters: Option<String>,
    pub parameters_file: Option<String>,
}

/// Fully resolved inputs for one generation run.
#[derive(Debug, Clone)]
pub struct Deployment {
    pub service_name: String,
    pub version: String,
    pub stage: String,
    pub region: String,
    pub params: ParameterSet,
}

/// Validate the invocation and resolve the parameter set. Checks run in
/// order and the first failure wins. The inline list takes precedence over
/// the parameters file when both are given and the inline list is non-empty.
///
/// `Stage`, `ServiceName` and `Version` are always written into the set
/// last, overwriting any same-named user entries.
pub fn resolve(invocation: Invocation) -> Result<Deployment> {
    let service_name = require(
        invocation.service_name,
        "service name, use --service-name=<service name>, e.g. --service-name=jwt-authoriser",
    )?;
    let version = require(
        invocation.release_version,
        "release version number, use --release-version=<version>, e.g. --release-version=1.20.30",
    )?;
    let stage = require(
        invocation.stage,
        "stage name, use --stage=<stage>, e.g. --stage=contiprelive",
    )?;

    let mut params = match (&invocation.parameters, &invocation.parameters_file) {
        (Some(inline), _) if !inline.is_empty() => ParameterSet::from_inline(inline)?,
        (_, Some(file)) => ParameterSet::from_yaml_file(file)?,
        _ => ParameterSet::new(),
    };

    let region = invocation
        .region
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| DEFAULT_REGION.to_string());

    params.insert("Stage", stage.clone());
    params.insert("ServiceName", service_name.clone());
    params.insert("Version", version.clone());

    Ok(Deployment {
        service_name,
        version,
        stage,
        region,
        params,
    })
}

fn require(value: Option<String>, hint: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(BeegenError::MissingArgument(hint.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_invocation() -> Invocation {
        Invocation {
            service_name: Some("jwt-authoriser".to_string()),
            release_version: Some("1.20.30".to_string()),
            stage: Some("contiprelive".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn missing_service_name_fails() {
        let invocation = Invocation {
            service_name: None,
            ..base_invocation()
        };
        let err = resolve(invocation).unwrap_err();
        assert!(err.to_string().contains("Missing service name"));
    }

    #[test]
    fn empty_release_version_fails() {
        let invocation = Invocation {
            release_version: Some(String::new()),
            ..base_invocation()
        };
        let err = resolve(invocation).unwrap_err();
        assert!(err.to_string().contains("Missing release version number"));
    }

    #[test]
    fn missing_stage_fails() {
        let invocation = Invocation {
            stage: None,
            ..base_invocation()
        };
        let err = resolve(invocation).unwrap_err();
        assert!(err.to_string().contains("Missing stage name"));
    }

    #[test]
    fn service_name_is_checked_first() {
        let err = resolve(Invocation::default()).unwrap_err();
        assert!(err.to_string().contains("Missing service name"));
    }

    #[test]
    fn fixed_entries_are_always_injected() {
        let deployment = resolve(base_invocation()).unwrap();
        let entries: Vec<_> = deployment.params.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("Stage", "contiprelive"),
                ("ServiceName", "jwt-authoriser"),
                ("Version", "1.20.30"),
            ]
        );
    }

    #[test]
    fn user_entry_is_overwritten_in_place() {
        let invocation = Invocation {
            parameters: Some("Stage=wrong,Memory=512".to_string()),
            ..base_invocation()
        };
        let deployment = resolve(invocation).unwrap();
        let entries: Vec<_> = deployment.params.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("Stage", "contiprelive"),
                ("Memory", "512"),
                ("ServiceName", "jwt-authoriser"),
                ("Version", "1.20.30"),
            ]
        );
    }

    #[test]
    fn inline_parameters_win_over_file() {
        let invocation = Invocation {
            parameters: Some("a=1".to_string()),
            parameters_file: Some("does-not-exist.yaml".to_string()),
            ..base_invocation()
        };
        let deployment = resolve(invocation).unwrap();
        assert_eq!(deployment.params.get("a"), Some("1"));
    }

    #[test]
    fn empty_inline_falls_back_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.yaml");
        std::fs::write(&path, "Memory: 512\n").unwrap();

        let invocation = Invocation {
            parameters: Some(String::new()),
            parameters_file: Some(path.to_string_lossy().into_owned()),
            ..base_invocation()
        };
        let deployment = resolve(invocation).unwrap();
        assert_eq!(deployment.params.get("Memory"), Some("512"));
    }

    #[test]
    fn file_parameters_keep_document_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.yaml");
        std::fs::write(&path, "Timeout: 30\nMemory: 512\n").unwrap();

        let invocation = Invocation {
            parameters_file: Some(path.to_string_lossy().into_owned()),
            ..base_invocation()
        };
        let deployment = resolve(invocation).unwrap();
        let keys: Vec<_> = deployment.params.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["Timeout", "Memory", "Stage", "ServiceName", "Version"]
        );
    }

    #[test]
    fn malformed_inline_pair_propagates() {
        let invocation = Invocation {
            parameters: Some("a".to_string()),
            ..base_invocation()
        };
        assert!(resolve(invocation).is_err());
    }

    #[test]
    fn unreadable_parameters_file_propagates() {
        let invocation = Invocation {
            parameters_file: Some("does-not-exist.yaml".to_string()),
            ..base_invocation()
        };
        let err = resolve(invocation).unwrap_err();
        assert!(matches!(err, BeegenError::Io(_)));
    }

    #[test]
    fn region_defaults_to_eu_west_1() {
        let deployment = resolve(base_invocation()).unwrap();
        assert_eq!(deployment.region, DEFAULT_REGION);
    }

    #[test]
    fn region_override_is_applied() {
        let invocation = Invocation {
            region: Some("us-east-1".to_string()),
            ..base_invocation()
        };
        let deployment = resolve(invocation).unwrap();
        assert_eq!(deployment.region, "us-east-1");
    }

    #[test]
    fn empty_region_keeps_the_default() {
        let invocation = Invocation {
            region: Some(String::new()),
            ..base_invocation()
        };
        let deployment = resolve(invocation).unwrap();
        assert_eq!(deployment.region, DEFAULT_REGION);
    }
}
