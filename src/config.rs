use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_GRAPHQL_URL: &str = "https://graphql.anilist.co/";

#[derive(Debug, Deserialize)]
struct ConfigFile {
    graphql_url: Option<String>,
}

/// Resolve the GraphQL endpoint to query.
///
/// Checked in order: the ANICHART_GRAPHQL_URL environment variable, the
/// `graphql_url` key in the config file, then the public AniList endpoint.
pub fn graphql_endpoint() -> String {
    if let Ok(url) = env::var("ANICHART_GRAPHQL_URL") {
        return url;
    }

    endpoint_from_file(&get_config_path()).unwrap_or_else(|| DEFAULT_GRAPHQL_URL.to_string())
}

fn endpoint_from_file(config_path: &Path) -> Option<String> {
    if !config_path.exists() {
        return None;
    }

    let content = fs::read_to_string(config_path).ok()?;
    let config: ConfigFile = toml::from_str(&content).ok()?;
    config.graphql_url
}

fn get_config_dir_path() -> PathBuf {
    xdir::config()
        .map(|path| path.join("anichart-export"))
        // If the standard path could not be found (e.g.`$HOME` is not set),
        // default to the current directory.
        .unwrap_or_default()
}

fn get_config_path() -> PathBuf {
    get_config_dir_path().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn endpoint_from_file_reads_graphql_url() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "graphql_url = \"http://localhost:4000/\"\n").unwrap();

        assert_eq!(
            endpoint_from_file(&path).as_deref(),
            Some("http://localhost:4000/")
        );
    }

    #[test]
    fn endpoint_from_file_handles_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(endpoint_from_file(&temp_dir.path().join("config.toml")), None);
    }

    #[test]
    fn endpoint_from_file_ignores_files_without_the_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "some_other_key = 3\n").unwrap();

        assert_eq!(endpoint_from_file(&path), None);
    }

    #[test]
    fn endpoint_from_file_ignores_malformed_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "graphql_url = [not toml").unwrap();

        assert_eq!(endpoint_from_file(&path), None);
    }
}
